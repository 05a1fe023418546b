//! Batch cleaning of accented, space-ridden URLs and filenames in static
//! HTML site folders.
//!
//! Two flows share the same normalizer: `link_proc` cleans the URL text
//! inside documents, `rename_proc` renames the files themselves and fixes
//! the references afterwards.

pub mod app_config;
pub mod clean;
pub mod cli;
pub mod error;
pub mod extract;
pub mod link_proc;
pub mod logging;
pub mod model;
pub mod rename_proc;
pub mod scan;
pub mod stats;
pub mod utils;

pub use app_config::AppConfig;
pub use error::Error;
