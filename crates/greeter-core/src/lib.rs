pub mod config;
pub mod error;
pub mod types;

pub use config::ListenerConfig;
pub use error::Error;
pub use types::{Greeting, HealthStatus};
