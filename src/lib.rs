pub mod digest;
pub mod error;
pub mod input;
pub mod serial;

pub use error::{Error, Result};
