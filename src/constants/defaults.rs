pub const LOG_LEVEL: &str = "info";

pub const FEED_BASE_URL: &str = "https://api.waqi.info";
pub const FEED_TIMEOUT_SECS: u64 = 5;
pub const TOKEN_FILE: &str = "token.txt";

pub const BROKER_HOST: &str = "localhost";
pub const BROKER_PORT: u16 = 1883;

pub const REFRESH_INTERVAL_SECS: u64 = 600;

/// Monitored cities, as known to the aqicn.org feed.
pub const CITIES: [&str; 9] = [
    "zurich",
    "geneva",
    "basel",
    "lausanne",
    "bern",
    "winterthur",
    "saint-gallen",
    "lugano",
    "neuchatel",
];
