pub mod controller;
pub mod cycle;
pub mod display;
pub mod error;
pub mod haptic;
pub mod remote;
pub mod scheduler;
pub mod sensor;
pub mod settings;
pub mod surfaces;
pub mod zone;

pub use controller::{AlarmState, AlarmStateController, Reconciled};
pub use error::{Error, Result};
pub use remote::{HttpRemote, RemoteState};
pub use settings::Settings;
pub use zone::{Zone, classify};
