//! Configuration for the decomposition engine.

pub mod options;
pub use options::SvdOptions;
