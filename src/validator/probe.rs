//! Image dimension introspection.
//!
//! The validator measures logos through [`ImageProbe`] so its rules run the
//! same whether or not the `imaging` feature is compiled in.

use std::path::Path;

/// Result of measuring one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// No introspection capability in this build
    Unavailable,
    Measured { width: u32, height: u32 },
    /// The file could not be decoded as an image
    Unreadable(String),
}

pub trait ImageProbe {
    fn probe(&self, path: &Path) -> ProbeOutcome;
}

/// Probe used when image decoding is not compiled in.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableProbe;

impl ImageProbe for UnavailableProbe {
    fn probe(&self, _path: &Path) -> ProbeOutcome {
        ProbeOutcome::Unavailable
    }
}

/// Reads dimensions from image headers with the `image` crate.
#[cfg(feature = "imaging")]
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterProbe;

#[cfg(feature = "imaging")]
impl ImageProbe for RasterProbe {
    fn probe(&self, path: &Path) -> ProbeOutcome {
        match image::image_dimensions(path) {
            Ok((width, height)) => ProbeOutcome::Measured { width, height },
            Err(e) => ProbeOutcome::Unreadable(e.to_string()),
        }
    }
}

/// Best probe this build supports.
pub fn default_probe() -> Box<dyn ImageProbe> {
    #[cfg(feature = "imaging")]
    {
        Box::new(RasterProbe)
    }
    #[cfg(not(feature = "imaging"))]
    {
        Box::new(UnavailableProbe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_probe() {
        assert_eq!(
            UnavailableProbe.probe(Path::new("logo.png")),
            ProbeOutcome::Unavailable
        );
    }

    #[cfg(feature = "imaging")]
    #[test]
    fn test_raster_probe_reads_png() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("logo.png");
        image::RgbImage::new(240, 120).save(&path).unwrap();

        assert_eq!(
            RasterProbe.probe(&path),
            ProbeOutcome::Measured {
                width: 240,
                height: 120
            }
        );
    }

    #[cfg(feature = "imaging")]
    #[test]
    fn test_raster_probe_rejects_text() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("logo.png");
        std::fs::write(&path, "not an image").unwrap();

        assert!(matches!(RasterProbe.probe(&path), ProbeOutcome::Unreadable(_)));
    }
}
