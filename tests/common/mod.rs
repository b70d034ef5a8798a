//! Common test utilities for brandkit integration tests

#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::ZipArchive;

/// A scratch project directory the binary runs in
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// brandkit command running inside the workspace, isolated from the
    /// caller's environment
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("brandkit").expect("brandkit binary");
        cmd.current_dir(&self.path)
            .env_remove("BRANDKIT_PATH")
            .env_remove("BRANDKIT_OUTPUT")
            .env_remove("BRANDKIT_LOG");
        cmd
    }

    /// Generate a bundle through the CLI
    pub fn init_bundle(&self, name: &str) {
        self.cmd().args(["init", name]).assert().success();
    }

    /// Bundle directory under the default base path
    pub fn bundle_path(&self, slug: &str) -> PathBuf {
        self.path.join("brand-skills").join(slug)
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: impl AsRef<[u8]>) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Remove a file from workspace
    pub fn remove_file(&self, path: &str) {
        fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }

    /// Write a noisy PNG so it is not compressed below the size floor
    pub fn write_png(&self, path: &str, width: u32, height: u32) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        let mut seed: u32 = 0x2545_F491;
        let img = image::RgbImage::from_fn(width, height, |_, _| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let [r, g, b, _] = seed.to_le_bytes();
            image::Rgb([r, g, b])
        });
        img.save(&file_path).expect("Failed to write PNG");
    }

    /// Turn a freshly generated bundle into one that passes strict validation
    pub fn complete_bundle(&self, slug: &str) {
        let assets = format!("brand-skills/{slug}/assets");
        self.remove_file(&format!("{assets}/logo.png.placeholder"));
        self.remove_file(&format!("{assets}/logo-white.png.placeholder"));
        self.write_png(&format!("{assets}/logo.png"), 400, 200);
        self.write_file(
            &format!("{assets}/logo.svg"),
            format!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"200\">{}</svg>",
                "<rect width=\"400\" height=\"200\" fill=\"#0066CC\"/>".repeat(30)
            ),
        );
        self.write_file(&format!("{assets}/templates/deck.pptx"), "deck");
    }
}

/// Sorted entry names of a zip archive
pub fn archive_entries(path: &Path) -> Vec<String> {
    let file = File::open(path).expect("Failed to open archive");
    let archive = ZipArchive::new(file).expect("Failed to read archive");
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}
