//! Server settings read from the environment

const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_LOG_FILTER: &str = "procure_marketing=info,procure_core=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Directory served under `/assets`
    pub assets_dir: String,
    /// `tracing_subscriber` env filter directive
    pub log_filter: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SiteSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            assets_dir: lookup("PROCURE_ASSETS_DIR")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.assets_dir),
            log_filter: lookup("RUST_LOG")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let settings = SiteSettings::from_lookup(|_| None);
        assert_eq!(settings, SiteSettings::default());
        assert!(settings.log_filter.contains("procure_marketing=info"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [("PROCURE_ASSETS_DIR", "/srv/assets"), ("RUST_LOG", "debug")]
            .into_iter()
            .collect();
        let settings = SiteSettings::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(settings.assets_dir, "/srv/assets");
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let settings = SiteSettings::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(settings, SiteSettings::default());
    }
}
