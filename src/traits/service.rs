//! Service objects: constructed from their arguments, run once, and required
//! to hand back an [`Outcome`].
//!
//! [`Service`] is the typed contract; the compiler guarantees `run` exists and
//! returns an outcome. [`DynService`] is the type-erased extension point, where
//! both guarantees are checked at the call boundary by [`call_dyn`].

use crate::macros::rail_warn;
use crate::types::alloc_type::Box;
use crate::types::{ContractError, Outcome};
use core::any::{type_name, Any};

/// A unit of work that reports its result as an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Service};
///
/// struct ValidateAge {
///     age: Option<u32>,
/// }
///
/// impl From<Option<u32>> for ValidateAge {
///     fn from(age: Option<u32>) -> Self {
///         Self { age }
///     }
/// }
///
/// impl Service for ValidateAge {
///     type Value = u32;
///     type Error = &'static str;
///
///     fn run(self) -> Outcome<u32, &'static str> {
///         match self.age {
///             None => Outcome::failure_with("no age given", ["missing"]),
///             Some(age) if age < 18 => Outcome::failure_with("too young", ["underage"]),
///             Some(age) => Outcome::success(age),
///         }
///     }
/// }
///
/// let mut message = "";
/// ValidateAge::call(Some(16_u32))
///     .on_success(outcome_rail::tags![], |_, _| message = "welcome")
///     .on_failure(outcome_rail::tags!["underage"], |_, _| message = "come back later")
///     .on_failure(outcome_rail::tags![], |e, _| message = *e);
///
/// assert_eq!(message, "come back later");
/// ```
pub trait Service: Sized {
    type Value;
    type Error;

    /// The work of the service.
    fn run(self) -> Outcome<Self::Value, Self::Error>;

    /// Builds the service from `args` and runs it.
    fn call<A>(args: A) -> Outcome<Self::Value, Self::Error>
    where
        Self: From<A>,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("service", name = Self::name()).entered();

        Self::from(args).run()
    }

    /// Name used in logs and contract errors.
    fn name() -> &'static str {
        type_name::<Self>()
    }
}

/// A type-erased service whose output type is only known to the caller.
///
/// Implementors override [`run_dyn`](DynService::run_dyn) and box the
/// [`Outcome`] they produce. The default body reports that the work method is
/// missing.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use outcome_rail::{call_dyn, ContractError, DynService, Outcome};
///
/// struct Ping;
///
/// impl DynService for Ping {
///     fn run_dyn(&mut self) -> Option<Box<dyn Any>> {
///         Some(Box::new(Outcome::<&str, ()>::success("pong")))
///     }
/// }
///
/// let outcome = call_dyn::<&str, ()>(&mut Ping).unwrap();
/// assert_eq!(outcome.value(), Some(&"pong"));
///
/// let mismatch = call_dyn::<u8, ()>(&mut Ping).unwrap_err();
/// assert!(matches!(mismatch, ContractError::ContractViolation { .. }));
/// ```
pub trait DynService {
    /// Name used in logs and contract errors.
    fn name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// The work of the service, boxed. `None` means no work method exists.
    fn run_dyn(&mut self) -> Option<Box<dyn Any>> {
        None
    }
}

/// Runs a type-erased service and checks that it produced an
/// `Outcome<T, E>`.
///
/// # Errors
///
/// - [`ContractError::NotImplemented`] when the service has no work method.
/// - [`ContractError::ContractViolation`] when it returned anything other
///   than an `Outcome<T, E>`.
pub fn call_dyn<T, E>(service: &mut dyn DynService) -> Result<Outcome<T, E>, ContractError>
where
    T: 'static,
    E: 'static,
{
    let name = service.name();

    let Some(output) = service.run_dyn() else {
        rail_warn!(service = name, "service has no run method");
        return Err(ContractError::NotImplemented { service: name });
    };

    match output.downcast::<Outcome<T, E>>() {
        Ok(outcome) => Ok(*outcome),
        Err(_) => {
            rail_warn!(
                service = name,
                expected = type_name::<Outcome<T, E>>(),
                "service returned an unexpected type"
            );
            Err(ContractError::ContractViolation { service: name })
        },
    }
}
