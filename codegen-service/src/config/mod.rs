use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct CodegenConfig {
    pub common: core_config::Config,
    pub openai: OpenAiSettings,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: Secret<String>,
    /// Base URL of an OpenAI-compatible API, without a trailing `/chat/completions`.
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl CodegenConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let timeout_secs = get_env(
            "OPENAI_TIMEOUT_SECS",
            Some(&DEFAULT_OPENAI_TIMEOUT_SECS.to_string()),
            is_prod,
        )?;

        Ok(CodegenConfig {
            common: common_config,
            openai: OpenAiSettings {
                api_key: Secret::new(get_env("OPENAI_API_KEY", None, is_prod)?),
                base_url: get_env("OPENAI_BASE_URL", Some(DEFAULT_OPENAI_BASE_URL), is_prod)?,
                model: get_env("OPENAI_MODEL", Some(DEFAULT_OPENAI_MODEL), is_prod)?,
                timeout: Duration::from_secs(parse_secs("OPENAI_TIMEOUT_SECS", &timeout_secs)?),
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

fn parse_secs(key: &str, raw: &str) -> Result<u64, AppError> {
    raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "{} must be a whole number of seconds, got '{}': {}",
            key,
            raw,
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_falls_back_to_default_outside_prod() {
        let value = get_env("CODEGEN_TEST_UNSET_WITH_DEFAULT", Some("fallback"), false).unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn get_env_requires_value_without_default() {
        let err = get_env("CODEGEN_TEST_UNSET_NO_DEFAULT", None, false).unwrap_err();
        assert!(err.to_string().contains("CODEGEN_TEST_UNSET_NO_DEFAULT is required"));
    }

    #[test]
    fn get_env_ignores_defaults_in_prod() {
        let err = get_env("CODEGEN_TEST_UNSET_PROD", Some("fallback"), true).unwrap_err();
        assert!(err.to_string().contains("required in production"));
    }

    #[test]
    fn get_env_prefers_environment() {
        env::set_var("CODEGEN_TEST_SET_VALUE", "from-env");
        let value = get_env("CODEGEN_TEST_SET_VALUE", Some("fallback"), true).unwrap();
        assert_eq!(value, "from-env");
    }

    #[test]
    fn parse_secs_rejects_garbage() {
        assert_eq!(parse_secs("T", " 30 ").unwrap(), 30);
        assert!(parse_secs("T", "soon").is_err());
    }
}
