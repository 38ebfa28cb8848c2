//! Конфигурация клиента: `config.toml` встраивается при сборке и
//! разбирается один раз при первом обращении.

use contracts::domain::a009_assembly_task::calendar::CalendarViewMode;
use once_cell::sync::Lazy;
use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

const DEFAULT_API_PORT: u16 = 8000;
const DEFAULT_MONTH_CELL_LIMIT: usize = 3;
const DEFAULT_WEEK_CELL_LIMIT: usize = 20;
const DEFAULT_UNPLANNED_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub port: u16,
    pub base_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_API_PORT,
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub month_cell_limit: usize,
    pub week_cell_limit: usize,
    pub unplanned_limit: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            month_cell_limit: DEFAULT_MONTH_CELL_LIMIT,
            week_cell_limit: DEFAULT_WEEK_CELL_LIMIT,
            unplanned_limit: DEFAULT_UNPLANNED_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<AppConfig>(text).map(AppConfig::sanitized)
    }

    /// Zero values make no sense for ports and limits; they fall back to defaults.
    fn sanitized(mut self) -> Self {
        if self.api.port == 0 {
            self.api.port = DEFAULT_API_PORT;
        }
        self.api.base_url = self
            .api
            .base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let calendar = &mut self.calendar;
        if calendar.month_cell_limit == 0 {
            calendar.month_cell_limit = DEFAULT_MONTH_CELL_LIMIT;
        }
        if calendar.week_cell_limit == 0 {
            calendar.week_cell_limit = DEFAULT_WEEK_CELL_LIMIT;
        }
        if calendar.unplanned_limit == 0 {
            calendar.unplanned_limit = DEFAULT_UNPLANNED_LIMIT;
        }
        self
    }

    pub fn cell_limit(&self, mode: CalendarViewMode) -> usize {
        match mode {
            CalendarViewMode::Month => self.calendar.month_cell_limit,
            CalendarViewMode::Week => self.calendar.week_cell_limit,
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match AppConfig::parse(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid config.toml, using defaults: {}", e);
        AppConfig::default()
    }
});

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG).expect("embedded config must parse");
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.cell_limit(CalendarViewMode::Month), 3);
        assert_eq!(config.cell_limit(CalendarViewMode::Week), 20);
        assert_eq!(config.calendar.unplanned_limit, 20);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_values_are_sanitized() {
        let config = AppConfig::parse(
            r#"
            [api]
            port = 0
            base_url = "  https://md.example.com/  "

            [calendar]
            month_cell_limit = 0
            week_cell_limit = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.api.port, DEFAULT_API_PORT);
        assert_eq!(config.api.base_url.as_deref(), Some("https://md.example.com"));
        assert_eq!(config.calendar.month_cell_limit, DEFAULT_MONTH_CELL_LIMIT);
        assert_eq!(config.calendar.week_cell_limit, 5);
    }

    #[test]
    fn test_blank_base_url_is_ignored() {
        let config = AppConfig::parse("[api]\nbase_url = \"   \"").unwrap();
        assert_eq!(config.api.base_url, None);
    }

    #[test]
    fn test_parse_error() {
        assert!(AppConfig::parse("[api]\nport = \"eighty\"").is_err());
    }
}
