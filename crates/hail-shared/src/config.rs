//! Runtime configuration.
//!
//! The original client read a module-level `API_ENABLED` constant; here the
//! flag is an explicit value injected wherever a store is constructed, so
//! tests can exercise both modes in one process.

use crate::constants;

/// Process-wide configuration, decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// When true, store operations delegate to the remote backend; when
    /// false, everything stays on-device.
    pub api_enabled: bool,
    /// Base URL of the booking backend.
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_enabled: false,
            api_base_url: constants::DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Build a configuration from `HAIL_API_ENABLED` / `HAIL_API_URL`,
    /// falling back to local-only mode and the default backend URL.
    pub fn from_env() -> Self {
        let api_enabled = std::env::var(constants::ENV_API_ENABLED)
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let api_base_url = std::env::var(constants::ENV_API_URL)
            .unwrap_or_else(|_| constants::DEFAULT_API_URL.to_string());

        Self {
            api_enabled,
            api_base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local_only() {
        let cfg = Config::default();
        assert!(!cfg.api_enabled);
        assert_eq!(cfg.api_base_url, constants::DEFAULT_API_URL);
    }
}
