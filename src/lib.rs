pub mod decode;
pub mod error;
pub mod exponent;
pub mod histogram;
pub mod io;
pub mod layout;
pub mod report;
pub mod tracing;

pub use error::{ExpDistError, Result};
pub use layout::{FloatFormat, FloatLayout};
pub use report::{analyze_bytes, analyze_file, ExponentReport};
