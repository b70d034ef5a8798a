//! brandkit - brand guideline skill bundles
//!
//! Three subsystems share one on-disk layout:
//! - [`generator`] scaffolds a bundle from [`brand::BrandParameters`]
//! - [`validator`] checks a bundle and collects findings in a report
//! - [`packager`] gates on validation and writes a `.skill` zip archive

pub mod brand;
pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod logging;
pub mod packager;
pub mod slug;
pub mod ui;
pub mod validator;

pub use error::{BrandkitError, Result};
