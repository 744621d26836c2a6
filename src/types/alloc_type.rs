//! Allocation-backed types resolved against `std` or `alloc` depending on the
//! `std` feature, so the rest of the crate never names either directly.

#[cfg(feature = "std")]
pub use std::{borrow::Cow, boxed::Box, string::String};

#[cfg(not(feature = "std"))]
pub use alloc::{borrow::Cow, boxed::Box, string::String};
