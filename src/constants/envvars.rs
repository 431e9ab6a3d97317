pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// Prefix for environment overrides of settings, e.g. `AQP__BROKER__HOST`.
pub const SETTINGS_PREFIX: &str = "AQP";
