pub mod config;

pub use self::config::{Environment, Settings, SettingsError};
