//! Contracts implemented outside the crate.
//!
//! - [`Service`]: typed unit of work returning an [`Outcome`](crate::Outcome)
//! - [`DynService`]: type-erased variant, checked at runtime by [`call_dyn`]

pub mod service;

pub use service::{call_dyn, DynService, Service};
