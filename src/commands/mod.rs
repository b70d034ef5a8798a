//! Command implementations for the brandkit CLI

pub mod completions;
pub mod init;
pub mod package;
pub mod validate;
pub mod version;
