use super::{Outcome, Variant};
use core::any::type_name;
use core::fmt::{self, Debug, Display, Write};

/// A clone is a new instance and starts unhandled.
impl<T: Clone, E: Clone> Clone for Outcome<T, E> {
    fn clone(&self) -> Self {
        Self::from_parts(self.variant.clone(), self.types.clone(), false)
    }
}

/// Compares variant, payload and tags. The handled flag is ignored.
impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant && self.types == other.types
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

impl<T: Debug, E: Debug> Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = match &self.variant {
            Variant::Success(value) => {
                let mut out = f.debug_struct("Success");
                out.field("value", value);
                out
            },
            Variant::Failure(error) => {
                let mut out = f.debug_struct("Failure");
                out.field("error", error);
                out
            },
        };
        out.field("types", &self.types).field("handled", &self.handled.get()).finish()
    }
}

/// Renders as `Success(<value>)` or `Failure(<error>)` using the payload's
/// `Debug` form. A `()` payload or an `Option::None` payload counts as absent
/// and is omitted: `Success()`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// assert_eq!(Outcome::<_, ()>::success(5).to_string(), "Success(5)");
/// assert_eq!(Outcome::<_, ()>::success("hi").to_string(), "Success(\"hi\")");
/// assert_eq!(Outcome::<(), ()>::success(()).to_string(), "Success()");
/// assert_eq!(Outcome::<(), Option<u8>>::failure(None).to_string(), "Failure()");
/// ```
impl<T: Debug, E: Debug> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Variant::Success(value) => write_payload(f, "Success", value),
            Variant::Failure(error) => write_payload(f, "Failure", error),
        }
    }
}

fn write_payload<P: Debug>(f: &mut fmt::Formatter<'_>, label: &str, payload: &P) -> fmt::Result {
    if is_absent(payload) {
        write!(f, "{}()", label)
    } else {
        write!(f, "{}({:?})", label, payload)
    }
}

/// `true` only for `()` and for `Option::None`.
fn is_absent<P: Debug>(payload: &P) -> bool {
    let name = type_name::<P>();
    if name == "()" {
        return true;
    }
    if !name.starts_with("core::option::Option<") {
        return false;
    }

    let mut none = RendersAs { expected: "None", pos: 0 };
    write!(none, "{:?}", payload).is_ok() && none.pos == none.expected.len()
}

/// Compares streamed `Debug` output against `expected` without buffering it.
struct RendersAs<'a> {
    expected: &'a str,
    pos: usize,
}

impl Write for RendersAs<'_> {
    fn write_str(&mut self, chunk: &str) -> fmt::Result {
        let end = self.pos + chunk.len();
        if self.expected.get(self.pos..end) != Some(chunk) {
            return Err(fmt::Error);
        }
        self.pos = end;
        Ok(())
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Collects successes until the first failure, which is returned with its tags.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     [Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all.value(), Some(&vec![1, 2]));
///
/// let first_failure: Outcome<Vec<i32>, &str> = [
///     Outcome::success(1),
///     Outcome::failure_with("bad", ["parse"]),
///     Outcome::failure("worse"),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(first_failure.error(), Some(&"bad"));
/// assert_eq!(first_failure.types(), &["parse"]);
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut first_failure = None;
        let values: C = iter
            .into_iter()
            .map_while(|outcome| {
                let (variant, types) = outcome.into_parts();
                match variant {
                    Variant::Success(value) => Some(value),
                    Variant::Failure(error) => {
                        first_failure = Some((error, types));
                        None
                    },
                }
            })
            .collect();

        match first_failure {
            Some((error, types)) => Outcome::from_parts(Variant::Failure(error), types, false),
            None => Outcome::success(values),
        }
    }
}
