/// Application name
pub const APP_NAME: &str = "Hail";

/// Storage key for the persisted ride collection
pub const RIDES_KEY: &str = "rides";

/// Storage key for the persisted appointment collection
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Default base fare in currency units
pub const DEFAULT_BASE_FARE: f64 = 1.0;

/// Default price per kilometre
pub const DEFAULT_PRICE_PER_KM: f64 = 0.40;

/// Default price per minute of ride time
pub const DEFAULT_PRICE_PER_MINUTE: f64 = 0.05;

/// Minimum fare floor — no quote ever falls below this
pub const DEFAULT_MINIMUM_FARE: f64 = 2.0;

/// Surge multiplier applied during peak hours
pub const DEFAULT_PEAK_MULTIPLIER: f64 = 1.5;

/// Default base URL of the booking backend
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Environment variable toggling remote-enabled mode
pub const ENV_API_ENABLED: &str = "HAIL_API_ENABLED";

/// Environment variable overriding the backend base URL
pub const ENV_API_URL: &str = "HAIL_API_URL";
