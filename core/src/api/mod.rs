//! Public error and option types of the binding layer.

pub mod error;
pub mod options;

pub use error::{BindError, CallError, CallErrorKind};
pub use options::BindOptions;
