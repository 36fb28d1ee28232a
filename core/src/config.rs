//! Client configuration: the base address and the endpoint paths.
//!
//! Both are plain immutable values handed to `EvApi` at construction; nothing
//! here is process-wide state.

use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const BASE_URL_ENV: &str = "EV_API_BASE_URL";

/// Relative paths of the backend's feature endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub driving_predict: String,
    pub driving_demo: String,
    pub weather_get: String,
    pub weather_post: String,
    pub battery_predict: String,
    pub optimal_path_predict: String,
    pub energy_predict: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            driving_predict: "/driving/predict".to_string(),
            driving_demo: "/driving/demo".to_string(),
            weather_get: "/external/weather".to_string(),
            weather_post: "/external/weather".to_string(),
            battery_predict: "/battery/predict".to_string(),
            optimal_path_predict: "/optimal-path/predict".to_string(),
            energy_predict: "/energy/predict".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoints: Endpoints,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoints: Endpoints::default(),
        }
    }

    /// Read the base address from `EV_API_BASE_URL`, falling back to the
    /// local development backend when unset or empty.
    pub fn from_env() -> Self {
        Self::from_base_url(env::var(BASE_URL_ENV).ok())
    }

    fn from_base_url(base_url: Option<String>) -> Self {
        match base_url {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.endpoints.energy_predict, "/energy/predict");
        assert_eq!(config.endpoints.weather_get, config.endpoints.weather_post);
    }

    #[test]
    fn empty_or_missing_override_uses_default() {
        assert_eq!(ApiConfig::from_base_url(None), ApiConfig::default());
        assert_eq!(ApiConfig::from_base_url(Some("  ".to_string())), ApiConfig::default());
    }

    #[test]
    fn override_is_kept_verbatim() {
        let config = ApiConfig::from_base_url(Some("https://ev.example/api/".to_string()));
        assert_eq!(config.base_url, "https://ev.example/api/");
    }
}
