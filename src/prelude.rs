//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::success(port),
//!         Err(err) => outcome!(Failure(format!("{err}")), "invalid_port"),
//!     }
//! }
//!
//! let mut port = 0;
//! parse_port("80x")
//!     .on_failure(tags!["invalid_port"], |_, _| port = 8080)
//!     .on_any_success(|p, _| port = *p);
//! assert_eq!(port, 8080);
//! ```

// Macros
pub use crate::{outcome, tags};

// Core types
pub use crate::types::{ContractError, Outcome, Tag, TagFilter, Tags, Variant};

// Service contracts
pub use crate::traits::{call_dyn, DynService, Service};
