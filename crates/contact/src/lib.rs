mod client;
mod error;
mod result;
mod submit;
mod values;

pub use client::*;
pub use error::*;
pub use result::*;
pub use submit::*;
pub use values::*;
