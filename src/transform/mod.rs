//! Orthogonal transforms used to zero selected matrix entries.
//!
//! Both transforms are immutable once built and pure when applied: every `apply_*` call
//! returns a transformed clone and leaves its argument untouched.

pub mod reflector;
pub mod rotator;

pub use reflector::Reflector;
pub use rotator::Rotator;
