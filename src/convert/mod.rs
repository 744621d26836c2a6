//! Conversion helpers between `Result` and [`Outcome`].
//!
//! These adapters make it straightforward to wrap existing fallible APIs into
//! outcomes at a service boundary, and to flatten outcomes back into `Result`
//! for code that uses `?`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//!
//! let outcome = tagged_result("42".parse::<i32>(), ["parse"]);
//! assert_eq!(outcome.value(), Some(&42));
//! assert_eq!(outcome.types(), &["parse"]);
//!
//! assert_eq!(outcome_to_result(outcome), Ok(42));
//! ```

use crate::types::{Outcome, Tag};

/// Converts an `Outcome` into a `Result`, dropping its tags.
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts a `Result` into an untagged `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<(), _>("io"));
/// assert_eq!(outcome.error(), Some(&"io"));
/// assert!(outcome.types().is_empty());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from(result)
}

/// Converts a `Result` into an `Outcome` carrying `types` on either variant.
pub fn tagged_result<T, E, I, G>(result: Result<T, E>, types: I) -> Outcome<T, E>
where
    I: IntoIterator<Item = G>,
    G: Into<Tag>,
{
    match result {
        Ok(value) => Outcome::success_with(value, types),
        Err(error) => Outcome::failure_with(error, types),
    }
}
