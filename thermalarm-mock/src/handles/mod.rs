mod alarm_handle;
mod mock_handle;
mod temperature_handle;

pub use alarm_handle::*;
pub use mock_handle::*;
pub use temperature_handle::*;
