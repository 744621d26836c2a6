//! Outcome, tag and contract-error types.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Outcome, TagFilter};
//!
//! let mut seen = None;
//! Outcome::<(), &str>::failure_with("locked", ["auth"])
//!     .on_failure(TagFilter::from("auth"), |error, tag| seen = Some((*error, tag.cloned())));
//!
//! let (error, tag) = seen.unwrap();
//! assert_eq!(error, "locked");
//! assert_eq!(tag.unwrap(), "auth");
//! ```

pub mod alloc_type;
pub mod contract_error;
pub mod outcome;
pub mod tag;

pub use contract_error::ContractError;
pub use outcome::{Outcome, Variant};
pub use tag::{Tag, TagFilter, Tags};
