use super::{Outcome, Variant};
use crate::types::Tags;

impl<T, E> Outcome<T, E> {
    /// Chains a step that runs only on success.
    ///
    /// On a success, `f` receives the value and the tags and its outcome is
    /// returned as is. On a failure `f` is never called and the failure is
    /// passed through with its error, tags and handled state.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let chained = Outcome::<i32, i32>::success(1)
    ///     .and_then(|v, _| Outcome::<i32, i32>::failure(v + 1))
    ///     .and_then(|_, _| -> Outcome<i32, i32> { unreachable!("short-circuited") });
    ///
    /// assert_eq!(chained.error(), Some(&2));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T, Tags) -> Outcome<U, E>,
    {
        let handled = self.handled.get();
        match self.variant {
            Variant::Success(value) => f(value, self.types),
            Variant::Failure(error) => {
                Outcome::from_parts(Variant::Failure(error), self.types, handled)
            },
        }
    }

    /// Chains a recovery step that runs only on failure.
    ///
    /// On a failure, `f` receives the error and the tags and its outcome is
    /// returned as is. A success passes through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<String, &str>::failure("x")
    ///     .or_else(|e, _| Outcome::<String, ()>::success(format!("{e}!")));
    ///
    /// assert_eq!(recovered.value().map(String::as_str), Some("x!"));
    /// ```
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E, Tags) -> Outcome<T, G>,
    {
        let handled = self.handled.get();
        match self.variant {
            Variant::Success(value) => {
                Outcome::from_parts(Variant::Success(value), self.types, handled)
            },
            Variant::Failure(error) => f(error, self.types),
        }
    }

    /// Alias of [`or_else`](Outcome::or_else).
    #[inline]
    pub fn catch<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E, Tags) -> Outcome<T, G>,
    {
        self.or_else(f)
    }

    /// Transforms the success value, keeping tags and handled state.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        let handled = self.handled.get();
        let variant = match self.variant {
            Variant::Success(value) => Variant::Success(f(value)),
            Variant::Failure(error) => Variant::Failure(error),
        };
        Outcome::from_parts(variant, self.types, handled)
    }

    /// Transforms the failure error, keeping tags and handled state.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        let handled = self.handled.get();
        let variant = match self.variant {
            Variant::Success(value) => Variant::Success(value),
            Variant::Failure(error) => Variant::Failure(f(error)),
        };
        Outcome::from_parts(variant, self.types, handled)
    }

    /// Collapses both variants into one value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let status = Outcome::<u32, &str>::failure("timeout")
    ///     .fold(|v| format!("ok {v}"), |e| format!("error {e}"));
    /// assert_eq!(status, "error timeout");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self.variant {
            Variant::Success(value) => on_success(value),
            Variant::Failure(error) => on_failure(error),
        }
    }
}
