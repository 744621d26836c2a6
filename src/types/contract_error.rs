use core::fmt::{self, Display};

/// Violations of the library's local contracts.
///
/// These are programmer errors, not domain failures. Domain failures travel
/// as the error payload of an [`Outcome`](crate::Outcome) and never show up
/// here.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ContractError, Outcome};
///
/// let failed: Outcome<i32, &str> = Outcome::failure("boom");
/// assert_eq!(failed.try_value(), Err(ContractError::UnwrapOnFailure));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractError {
    /// The success-only value accessor was used on a failure.
    UnwrapOnFailure,
    /// A type-erased service handed back something other than the requested outcome.
    ContractViolation { service: &'static str },
    /// A type-erased service never supplied its work method.
    NotImplemented { service: &'static str },
}

impl ContractError {
    /// Name of the offending service, if the error came from a service boundary.
    #[inline]
    pub fn service(&self) -> Option<&'static str> {
        match self {
            Self::UnwrapOnFailure => None,
            Self::ContractViolation { service } | Self::NotImplemented { service } => {
                Some(*service)
            },
        }
    }
}

impl Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnwrapOnFailure => f.write_str("failure outcomes do not have a value"),
            Self::ContractViolation { service } => {
                write!(f, "service `{}` must return an Outcome", service)
            },
            Self::NotImplemented { service } => {
                write!(f, "service `{}` must implement its run method", service)
            },
        }
    }
}

impl core::error::Error for ContractError {}
