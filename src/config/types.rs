// Configuration type definitions

use serde::Deserialize;

/// Defaults mirror the widget's built-in behavior
const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Places API configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiConfig {
    /// API key; absence silently disables fetching rather than erroring
    #[serde(default)]
    pub key: Option<String>,
    /// Optional language code merged into every autocomplete request
    #[serde(default)]
    pub language: Option<String>,
}

/// Widget behavior configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub fetch_details: bool,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_list_visible")]
    pub list_visible: bool,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_list_visible() -> bool {
    true
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            fetch_details: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            list_visible: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.api.key.is_none());
        assert!(config.api.language.is_none());
        assert_eq!(config.widget.debounce_ms, 300);
        assert!(!config.widget.fetch_details);
        assert_eq!(config.widget.placeholder, "Search...");
        assert!(config.widget.list_visible);
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
[api]
key = "DUMMY_API_KEY"
language = "en"

[widget]
debounce_ms = 500
fetch_details = true
placeholder = "Search place"
list_visible = false
"#,
        )
        .unwrap();

        assert_eq!(config.api.key.as_deref(), Some("DUMMY_API_KEY"));
        assert_eq!(config.api.language.as_deref(), Some("en"));
        assert_eq!(config.widget.debounce_ms, 500);
        assert!(config.widget.fetch_details);
        assert_eq!(config.widget.placeholder, "Search place");
        assert!(!config.widget.list_visible);
    }

    // Property: Missing fields use defaults
    // For any TOML config file with missing optional fields, parsing should
    // successfully complete and use default values for all missing fields.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_api_section in prop::bool::ANY,
            include_widget_section in prop::bool::ANY,
            debounce_ms in 0u64..10_000,
        ) {
            let mut toml_content = String::new();
            if include_api_section {
                toml_content.push_str("[api]\nkey = \"k\"\n");
            }
            if include_widget_section {
                toml_content.push_str(&format!("[widget]\ndebounce_ms = {}\n", debounce_ms));
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let config = config.unwrap();

            if include_widget_section {
                prop_assert_eq!(config.widget.debounce_ms, debounce_ms);
            } else {
                prop_assert_eq!(config.widget.debounce_ms, 300);
            }
            prop_assert_eq!(config.api.key.is_some(), include_api_section);
            // Fields never present in the input always default
            prop_assert!(!config.widget.fetch_details);
            prop_assert!(config.widget.list_visible);
        }
    }
}
