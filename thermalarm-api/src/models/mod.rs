mod error;
mod limits;
mod status;

pub use error::*;
pub use limits::*;
pub use status::*;
