use crate::utils::error::{HuegenError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML config file. Every section and every field is optional;
/// whatever is present overrides the built-in defaults during resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: Option<ApiSection>,
    pub library: Option<LibrarySection>,
    pub ui: Option<UiSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub status_timeout_seconds: Option<u64>,
    pub lookup_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSection {
    pub language: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HuegenError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| HuegenError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` references with environment values. Unset variables
    /// are left untouched so the parse error points at the original text.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "https://color.example.com"
status_timeout_seconds = 10
lookup_timeout_seconds = 2

[library]
path = "/tmp/huegen-palettes"

[ui]
language = "ru"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        let api = config.api.unwrap();
        assert_eq!(api.base_url.as_deref(), Some("https://color.example.com"));
        assert_eq!(api.status_timeout_seconds, Some(10));
        assert_eq!(api.lookup_timeout_seconds, Some(2));
        assert_eq!(
            config.library.unwrap().path.as_deref(),
            Some("/tmp/huegen-palettes")
        );
        assert_eq!(config.ui.unwrap().language.as_deref(), Some("ru"));
    }

    #[test]
    fn test_empty_config_parses_to_all_none() {
        let config = FileConfig::from_toml_str("").unwrap();

        assert!(config.api.is_none());
        assert!(config.library.is_none());
        assert!(config.ui.is_none());
    }

    #[test]
    fn test_partial_section_leaves_other_fields_none() {
        let config = FileConfig::from_toml_str("[api]\nbase_url = \"http://localhost:1234\"\n")
            .unwrap();

        let api = config.api.unwrap();
        assert_eq!(api.base_url.as_deref(), Some("http://localhost:1234"));
        assert_eq!(api.status_timeout_seconds, None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HUEGEN_TEST_BASE_URL", "https://env.example.com");

        let config = FileConfig::from_toml_str("[api]\nbase_url = \"${HUEGEN_TEST_BASE_URL}\"\n")
            .unwrap();
        assert_eq!(
            config.api.unwrap().base_url.as_deref(),
            Some("https://env.example.com")
        );

        std::env::remove_var("HUEGEN_TEST_BASE_URL");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let config = FileConfig::from_toml_str(
            "[library]\npath = \"${HUEGEN_TEST_UNSET_VARIABLE}\"\n",
        )
        .unwrap();

        assert_eq!(
            config.library.unwrap().path.as_deref(),
            Some("${HUEGEN_TEST_UNSET_VARIABLE}")
        );
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = FileConfig::from_toml_str("[api\nbase_url = ");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[ui]\nlanguage = \"en\"\n")
            .unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.ui.unwrap().language.as_deref(), Some("en"));
    }
}
