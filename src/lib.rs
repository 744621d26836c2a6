//! Tagged success/failure outcomes for expected failure.
//!
//! Every operation returns an [`Outcome`]: a success carrying a value or a
//! failure carrying an error, each optionally labelled with [`Tag`]s. Callers
//! branch with at-most-once reactive callbacks, or chain steps that
//! short-circuit on the opposite variant, and finally extract a value.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Reactive dispatch
//!
//! The first matching clause wins; every later clause is inert.
//!
//! ```
//! use outcome_rail::{tags, Outcome};
//!
//! let mut log = Vec::new();
//! Outcome::<u32, &str>::failure_with("user not found", ["not_found"])
//!     .on_success(tags![], |id, _| log.push(format!("loaded {id}")))
//!     .on_failure(tags!["forbidden"], |_, _| log.push("403".to_string()))
//!     .on_failure(tags!["not_found"], |e, tag| log.push(format!("404 {e} [{}]", tag.unwrap())))
//!     .on_failure(tags![], |_, _| log.push("500".to_string()));
//!
//! assert_eq!(log, ["404 user not found [not_found]"]);
//! ```
//!
//! ## Chaining
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse(raw: &str) -> Outcome<i64, String> {
//!     raw.parse::<i64>().map_err(|_| format!("not a number: {raw}")).into()
//! }
//!
//! let total = parse("20")
//!     .and_then(|n, _| if n > 0 { Outcome::success(n * 2) } else { Outcome::failure("negative".into()) })
//!     .or_else(|_, _| Outcome::<i64, ()>::success(0));
//!
//! assert_eq!(total.into_value(), Some(40));
//! ```
//!
//! ## Services
//!
//! ```
//! use outcome_rail::{Outcome, Service};
//!
//! struct Double(i32);
//!
//! impl From<i32> for Double {
//!     fn from(n: i32) -> Self {
//!         Double(n)
//!     }
//! }
//!
//! impl Service for Double {
//!     type Value = i32;
//!     type Error = ();
//!
//!     fn run(self) -> Outcome<i32, ()> {
//!         Outcome::success(self.0 * 2)
//!     }
//! }
//!
//! assert_eq!(Double::call(21).into_value(), Some(42));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Tag filter and outcome construction macros
pub mod macros;

/// Conversions between `Result` and `Outcome`
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Service contracts returning outcomes
pub mod traits;
/// Outcome, tags and contract errors
pub mod types;

pub use convert::*;
pub use traits::*;
pub use types::{ContractError, Outcome, Tag, TagFilter, Tags, Variant};
