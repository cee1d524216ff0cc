//! Statically typed side of the dynamic value boundary.

pub mod faces;
mod marshal;

pub use marshal::{Bridge, Marshal};
