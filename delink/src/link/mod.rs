//! Symlink inspection, validation, and in-place reversal.
//!
//! This module implements the two halves of the tool:
//!
//! - **Validation** ([`validate`]): confirms a candidate path exists, is
//!   not a directory, and is a symbolic link, producing a
//!   [`ValidatedPath`] as proof. Read-only.
//! - **Reversal** ([`reverse`]): follows the entire chain of indirection
//!   to the final real file ([`resolve_chain`]) and renames that file
//!   over the link in one atomic step.
//!
//! Each invocation walks the states Start → Validated → Resolved →
//! Reversed, or drops to Failed at the first error. There are no
//! retries and no transitions back.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use delink::link;
//!
//! # fn main() -> delink::Result<()> {
//! let validated = link::validate(Path::new("random.json"))?;
//! link::reverse(&validated)?;
//! # Ok(())
//! # }
//! ```

pub mod resolve;
pub mod reverse;
pub mod target;
pub mod validate;

// Re-export key types and operations
pub use resolve::resolve_chain;
pub use reverse::reverse;
pub use target::{LinkTarget, ValidatedPath};
pub use validate::validate;
