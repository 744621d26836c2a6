//! Shorthand macros for building tag filters and tagged outcomes.
//!
//! - [`macro@crate::tags`] - Builds a [`TagFilter`](crate::TagFilter) for
//!   `on_success` / `on_failure`.
//! - [`macro@crate::outcome`] - Builds an [`Outcome`](crate::Outcome) with tags
//!   attached, from an explicit variant or from a condition.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{outcome, tags};
//!
//! let mut routed = None;
//! outcome!(Failure("locked"), "auth", "retryable")
//!     .on_success(tags![], |_: &(), _| routed = Some("ok"))
//!     .on_failure(tags!["retryable"], |_, _| routed = Some("retry"))
//!     .on_failure(tags![], |_, _| routed = Some("fail"));
//!
//! assert_eq!(routed, Some("retry"));
//! ```

/// Builds a [`TagFilter`](crate::TagFilter).
///
/// # Syntax
///
/// - `tags![]` - matches any outcome of the right kind
/// - `tags!["a", "b"]` - matches outcomes tagged `a` or `b`
/// - `tags!["a", "b"; unhandled]` - reports `a`/`b` as the matched tag when
///   present, but matches regardless of tags
/// - `tags![unhandled]` - same as `tags![]` with the unhandled flag set
///
/// # Examples
///
/// ```
/// use outcome_rail::{tags, Tag, TagFilter};
///
/// assert_eq!(tags![], TagFilter::any());
/// assert_eq!(tags!["a", "b"].targets(), &[Tag::new("a"), Tag::new("b")]);
/// assert!(tags!["a"; unhandled].is_unhandled());
/// assert!(tags![unhandled].targets().is_empty());
/// ```
#[macro_export]
macro_rules! tags {
    () => {
        $crate::types::TagFilter::any()
    };
    (unhandled) => {
        $crate::types::TagFilter::any().unhandled()
    };
    ($($tag:expr),+ ; unhandled) => {
        $crate::tags![$($tag),+].unhandled()
    };
    ($($tag:expr),+ $(,)?) => {
        $crate::types::TagFilter::of([$($crate::types::Tag::from($tag)),+])
    };
}

/// Builds an [`Outcome`](crate::Outcome) with optional tags.
///
/// # Syntax
///
/// - `outcome!(Success(value), "tag", ...)`
/// - `outcome!(Failure(error), "tag", ...)`
/// - `outcome!(if condition => data, "tag", ...)` - `Success(data)` when the
///   condition holds, `Failure(data)` otherwise
///
/// # Examples
///
/// ```
/// use outcome_rail::{outcome, Outcome};
///
/// let ok: Outcome<i32, ()> = outcome!(Success(5), "cached");
/// assert_eq!(ok.value(), Some(&5));
/// assert_eq!(ok.types(), &["cached"]);
///
/// let year = 1900;
/// let leap = outcome!(if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => year);
/// assert!(leap.is_failure());
/// ```
#[macro_export]
macro_rules! outcome {
    (Success($value:expr) $(, $tag:expr)* $(,)?) => {
        $crate::types::Outcome::success($value)$(.with_type($tag))*
    };
    (Failure($error:expr) $(, $tag:expr)* $(,)?) => {
        $crate::types::Outcome::failure($error)$(.with_type($tag))*
    };
    (if $cond:expr => $data:expr $(, $tag:expr)* $(,)?) => {
        $crate::types::Outcome::from_condition($cond, $data)$(.with_type($tag))*
    };
}

/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
macro_rules! rail_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

/// Emits a `tracing::warn!` event when the `tracing` feature is enabled.
macro_rules! rail_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::warn!($($arg)*);
        }
    };
}

pub(crate) use rail_trace;
pub(crate) use rail_warn;
