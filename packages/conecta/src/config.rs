use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub viacep_base_url: String,
    pub postal_lookup_timeout: Duration,
    pub seed_demo_needs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viacep_base_url: viacep::DEFAULT_BASE_URL.to_string(),
            postal_lookup_timeout: viacep::DEFAULT_TIMEOUT,
            seed_demo_needs: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let timeout_secs: u64 = env::var("POSTAL_LOOKUP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .context("POSTAL_LOOKUP_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            viacep_base_url: env::var("VIACEP_BASE_URL")
                .unwrap_or_else(|_| viacep::DEFAULT_BASE_URL.to_string()),
            postal_lookup_timeout: Duration::from_secs(timeout_secs),
            seed_demo_needs: parse_flag(
                "SEED_DEMO_NEEDS",
                env::var("SEED_DEMO_NEEDS").ok().as_deref(),
                true,
            )?,
        })
    }
}

fn parse_flag(name: &str, raw: Option<&str>, default: bool) -> Result<bool> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("{} must be true or false, got {:?}", name, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_defaults_when_unset() {
        assert!(parse_flag("X", None, true).unwrap());
        assert!(!parse_flag("X", None, false).unwrap());
    }

    #[test]
    fn flag_accepts_common_spellings() {
        assert!(parse_flag("X", Some("TRUE"), false).unwrap());
        assert!(parse_flag("X", Some(" 1 "), false).unwrap());
        assert!(!parse_flag("X", Some("no"), true).unwrap());
    }

    #[test]
    fn flag_rejects_garbage() {
        let err = parse_flag("SEED_DEMO_NEEDS", Some("maybe"), true).unwrap_err();
        assert!(err.to_string().contains("SEED_DEMO_NEEDS"));
    }

    #[test]
    fn default_points_at_public_viacep() {
        let config = Config::default();
        assert_eq!(config.viacep_base_url, "https://viacep.com.br/ws");
        assert_eq!(config.postal_lookup_timeout, Duration::from_secs(5));
        assert!(config.seed_demo_needs);
    }
}
