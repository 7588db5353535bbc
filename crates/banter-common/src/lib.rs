pub mod errors;
pub mod notifications;

pub use errors::{BanterError, ConfigError};
pub use notifications::{Notification, NotificationLevel};

pub type Result<T> = std::result::Result<T, BanterError>;
