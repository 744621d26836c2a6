//! The two-variant outcome type.
//!
//! An [`Outcome`] is either a success carrying a value or a failure carrying
//! an error. Both variants may carry [`Tag`]s, which route reactive callbacks
//! ([`Outcome::on_success`], [`Outcome::on_failure`]) without inspecting the
//! payload. Chaining ([`Outcome::and_then`], [`Outcome::or_else`]) consumes the
//! outcome and short-circuits on the opposite variant.

use crate::types::{ContractError, Tag, Tags};
use core::cell::Cell;

mod chain;
mod reactive;
mod traits;

/// Payload of an [`Outcome`], split by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant<T, E> {
    Success(T),
    Failure(E),
}

/// A tagged success or failure with at-most-once reactive handling.
///
/// The payload and tags never change after construction. The only mutable
/// state is the *handled* flag, held in a [`Cell`]: once any reactive callback
/// fires, every later `on_success`/`on_failure` call on the same instance is
/// inert. Because of that cell an `Outcome` is not `Sync`, so the
/// check-then-set of the flag can never race.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure error type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::success(42);
/// assert!(ok.is_success());
/// assert_eq!(ok.value(), Some(&42));
/// assert_eq!(ok.error(), None);
///
/// let failed = Outcome::<i32, &str>::failure_with("missing", ["not_found"]);
/// assert!(failed.is_failure());
/// assert_eq!(failed.error(), Some(&"missing"));
/// assert_eq!(failed.types(), &["not_found"]);
/// ```
#[must_use]
pub struct Outcome<T, E> {
    variant: Variant<T, E>,
    types: Tags,
    handled: Cell<bool>,
}

impl<T, E> Outcome<T, E> {
    #[inline]
    pub(crate) fn from_parts(variant: Variant<T, E>, types: Tags, handled: bool) -> Self {
        Self { variant, types, handled: Cell::new(handled) }
    }

    /// Creates an untagged success.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::from_parts(Variant::Success(value), Tags::new(), false)
    }

    /// Creates an untagged failure.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::from_parts(Variant::Failure(error), Tags::new(), false)
    }

    /// Creates a success carrying `types`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let ok = Outcome::<_, ()>::success_with("created", ["user", "admin"]);
    /// assert_eq!(ok.types(), &["user", "admin"]);
    /// ```
    pub fn success_with<I, G>(value: T, types: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<Tag>,
    {
        Self::from_parts(Variant::Success(value), collect_tags(types), false)
    }

    /// Creates a failure carrying `types`.
    pub fn failure_with<I, G>(error: E, types: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<Tag>,
    {
        Self::from_parts(Variant::Failure(error), collect_tags(types), false)
    }

    /// Appends one tag while building an outcome.
    #[inline]
    pub fn with_type<G: Into<Tag>>(mut self, tag: G) -> Self {
        self.types.push(tag.into());
        self
    }

    /// Returns `true` for a success.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.variant, Variant::Success(_))
    }

    /// Returns `true` for a failure.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success value, or `None` on a failure.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match &self.variant {
            Variant::Success(value) => Some(value),
            Variant::Failure(_) => None,
        }
    }

    /// The failure error, or `None` on a success.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match &self.variant {
            Variant::Success(_) => None,
            Variant::Failure(error) => Some(error),
        }
    }

    /// The success value, or [`ContractError::UnwrapOnFailure`] on a failure.
    #[inline]
    pub fn try_value(&self) -> Result<&T, ContractError> {
        self.value().ok_or(ContractError::UnwrapOnFailure)
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractError::UnwrapOnFailure`] when called on a
    /// failure. Asking a failure for its value is a programmer error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(*Outcome::<_, ()>::success(7).unwrap_value(), 7);
    /// ```
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// Outcome::<(), _>::failure("nope").unwrap_value();
    /// ```
    #[track_caller]
    pub fn unwrap_value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// The tags attached at construction, in insertion order.
    #[must_use]
    #[inline]
    pub fn types(&self) -> &[Tag] {
        &self.types
    }

    /// Whether a reactive callback has already fired on this instance.
    #[must_use]
    #[inline]
    pub fn is_handled(&self) -> bool {
        self.handled.get()
    }

    /// Borrows the payload as a [`Variant`], for `match`.
    #[inline]
    pub fn as_variant(&self) -> Variant<&T, &E> {
        match &self.variant {
            Variant::Success(value) => Variant::Success(value),
            Variant::Failure(error) => Variant::Failure(error),
        }
    }

    /// Consumes the outcome, returning the success value if any.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self.variant {
            Variant::Success(value) => Some(value),
            Variant::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the failure error if any.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self.variant {
            Variant::Success(_) => None,
            Variant::Failure(error) => Some(error),
        }
    }

    /// Consumes the outcome, splitting it into payload and tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Variant};
    ///
    /// let (payload, types) = Outcome::<(), _>::failure_with(404, ["http"]).into_parts();
    /// assert_eq!(payload, Variant::Failure(404));
    /// assert_eq!(types.as_slice(), &["http"]);
    /// ```
    #[inline]
    pub fn into_parts(self) -> (Variant<T, E>, Tags) {
        (self.variant, self.types)
    }

    /// Converts into a plain `Result`, dropping the tags.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self.variant {
            Variant::Success(value) => Ok(value),
            Variant::Failure(error) => Err(error),
        }
    }
}

impl<T> Outcome<T, T> {
    /// `Success(data)` when `condition` holds, `Failure(data)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let age = 17;
    /// let checked = Outcome::from_condition(age >= 18, age);
    /// assert_eq!(checked.error(), Some(&17));
    /// ```
    #[inline]
    pub fn from_condition(condition: bool, data: T) -> Self {
        if condition {
            Self::success(data)
        } else {
            Self::failure(data)
        }
    }
}

fn collect_tags<I, G>(types: I) -> Tags
where
    I: IntoIterator<Item = G>,
    G: Into<Tag>,
{
    types.into_iter().map(Into::into).collect()
}
