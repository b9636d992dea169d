//! Startup configuration read from the URL query string.
//!
//! `?tab=<code>&skin=<classic|compact>&log=<level>`; unknown values fall
//! back to defaults and are reported as warnings once logging is up.

use contracts::enums::BackofficeTab;
use serde::Deserialize;
use web_sys::window;

use crate::shared::theme::Skin;

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

#[derive(Debug, Default, Deserialize)]
struct RawQuery {
    tab: Option<String>,
    skin: Option<String>,
    log: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    pub tab: BackofficeTab,
    pub skin: Skin,
    pub log_level: log::Level,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tab: BackofficeTab::default(),
            skin: Skin::default(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl DashboardConfig {
    /// Parses a query string (with or without the leading `?`).
    ///
    /// Never fails: problems are returned as warning messages.
    pub fn from_query(query: &str) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let raw: RawQuery = match serde_qs::from_str(query.trim_start_matches('?')) {
            Ok(raw) => raw,
            Err(e) => {
                warnings.push(format!("malformed query '{}': {}", query, e));
                RawQuery::default()
            }
        };

        let mut config = Self::default();

        if let Some(tab) = raw.tab.as_deref() {
            match tab.parse::<BackofficeTab>() {
                Ok(tab) => config.tab = tab,
                Err(e) => warnings.push(e.to_string()),
            }
        }

        if let Some(skin) = raw.skin.as_deref() {
            match Skin::from_name(skin) {
                Some(skin) => config.skin = skin,
                None => warnings.push(format!("unknown skin: '{}'", skin)),
            }
        }

        if let Some(level) = raw.log.as_deref() {
            match level.parse::<log::Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => warnings.push(format!("unknown log level: '{}'", level)),
            }
        }

        (config, warnings)
    }

    /// Reads `window.location.search`
    pub fn from_location() -> (Self, Vec<String>) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_gives_defaults() {
        let (config, warnings) = DashboardConfig::from_query("");
        assert_eq!(config, DashboardConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_full_query() {
        let (config, warnings) =
            DashboardConfig::from_query("?tab=jd-orders&skin=compact&log=warn");
        assert_eq!(config.tab, BackofficeTab::JdOrders);
        assert_eq!(config.skin, Skin::Compact);
        assert_eq!(config.log_level, log::Level::Warn);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let (config, warnings) = DashboardConfig::from_query("tab=warehouse&skin=neon&log=loud");
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("warehouse"));
    }

    #[test]
    fn test_unrelated_params_are_ignored() {
        let (config, warnings) = DashboardConfig::from_query("utm_source=mail&skin=classic");
        assert_eq!(config.skin, Skin::Classic);
        assert!(warnings.is_empty());
    }
}
