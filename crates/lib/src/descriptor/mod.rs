//! The in-memory model of a STARBUILD descriptor.

mod builder;
mod types;

pub use builder::{BuildWarning, DescriptorBuilder};
pub use types::{BuildDescriptor, Package, Script};
