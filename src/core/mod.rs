pub mod error;

pub use error::{Diagnostic, TransformError};
