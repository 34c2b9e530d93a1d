#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # delink
//!
//! A library for collapsing a symbolic link into the file it points to.
//!
//! Given a path that names a symlink, the library resolves the full chain
//! of indirection to the final real file and then renames that file over
//! the link in a single atomic step. Afterwards the link path owns the
//! file's content and the old target entry is gone.
//!
//! ## Core Types
//!
//! - [`LinkTarget`]: filesystem snapshot of a candidate path
//! - [`ValidatedPath`]: a path proven to be an eligible symlink
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> delink::Result<()> {
//! let link = delink::validate(Path::new("config.yaml"))?;
//! let resolved = delink::reverse(&link)?;
//! println!("collapsed link onto {}", resolved.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod link;
pub mod logging;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use link::{resolve_chain, reverse, validate, LinkTarget, ValidatedPath};
pub use logging::{init_logger, LogLevel, Logger};
