use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Model used when REVIEW_TEXT_MODEL is not set.
const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub review: ReviewSettings,
    pub security: SecuritySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewSettings {
    /// Sentences woven into every generated review, `||`-separated in the
    /// environment so they can contain commas.
    pub highlights: Vec<String>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecuritySettings {
    pub allowed_origins: Vec<String>,
}

impl ReviewConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ReviewConfig {
            common,
            gemini: GeminiSettings {
                // An absent key is tolerated outside prod; the provider
                // surfaces NotConfigured on first use instead.
                api_key: get_env("GOOGLE_API_KEY", Some(""), is_prod)?,
                model: get_env("REVIEW_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
            },
            review: ReviewSettings {
                highlights: split_sentences(&optional_env("REVIEW_HIGHLIGHTS")),
                temperature: parse_optional_env("REVIEW_TEMPERATURE"),
                top_p: parse_optional_env("REVIEW_TOP_P"),
                max_output_tokens: parse_optional_env("REVIEW_MAX_OUTPUT_TOKENS"),
            },
            security: SecuritySettings {
                allowed_origins: split_csv(&get_env("REVIEW_ALLOWED_ORIGINS", Some("*"), is_prod)?),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

fn optional_env(key: &str) -> String {
    env::var(key).unwrap_or_default()
}

fn parse_optional_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn split_sentences(raw: &str) -> Vec<String> {
    raw.split("||")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sentences_keeps_commas_inside_sentences() {
        let parsed = split_sentences("Service was exceptional, truly || Drinks were top-notch");
        assert_eq!(
            parsed,
            vec![
                "Service was exceptional, truly".to_string(),
                "Drinks were top-notch".to_string()
            ]
        );
    }

    #[test]
    fn split_sentences_of_empty_input_is_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" || ").is_empty());
    }

    #[test]
    fn split_csv_trims_entries() {
        let parsed = split_csv("https://a.example , https://b.example");
        assert_eq!(
            parsed,
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ]
        );
    }
}
