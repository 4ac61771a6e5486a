//! Shell configuration.
//!
//! Every field has a default, so an empty TOML document yields the stock
//! shell. Adapters load a file if they have one; the engine itself only ever
//! sees a validated [`ShellConfig`].

use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::error::{Result, TermfolioError};

/// What happens when a deploy command arrives while another deploy is still
/// animating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployPolicy {
    /// Run both; their dots and prompts interleave on the display.
    #[default]
    Overlap,
    /// Cancel every running deploy before starting the new one.
    CancelPrevious,
    /// Refuse the new deploy until the running one has fired.
    Reject,
}

/// Tunables for one shell session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShellConfig {
    /// Fake working directory shown in the prompt. Never changes at runtime.
    #[serde(default = "default_current_path")]
    pub current_path: String,
    #[serde(default = "default_prompt_suffix")]
    pub prompt_suffix: String,
    /// Lower bound of the dot count drawn per deploy.
    #[serde(default = "default_min_ticks")]
    pub min_ticks: u32,
    /// Upper bound (inclusive) of the dot count drawn per deploy.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u32,
    #[serde(default = "default_linkedin_url")]
    pub linkedin_url: String,
    #[serde(default = "default_gitlab_url")]
    pub gitlab_url: String,
    #[serde(default = "default_github_url")]
    pub github_url: String,
    #[serde(default = "default_slow_interval")]
    pub linkedin_interval_ms: u64,
    #[serde(default = "default_slow_interval")]
    pub gitlab_interval_ms: u64,
    #[serde(default = "default_fast_interval")]
    pub github_interval_ms: u64,
    /// Animate the welcome banner when the session mounts.
    #[serde(default = "yes")]
    pub boot_banner: bool,
    #[serde(default = "default_banner_line_interval")]
    pub banner_line_interval_ms: u64,
    #[serde(default)]
    pub deploy_policy: DeployPolicy,
}

fn default_current_path() -> String {
    "Christian_Egelund_Hansen/.../cv".to_string()
}

fn default_prompt_suffix() -> String {
    "$ ".to_string()
}

fn default_min_ticks() -> u32 {
    3
}

fn default_max_ticks() -> u32 {
    6
}

fn default_linkedin_url() -> String {
    "https://www.linkedin.com/in/christian-egelund-hansen/".to_string()
}

fn default_gitlab_url() -> String {
    "https://gitlab.com/christian-egelund-hansen".to_string()
}

fn default_github_url() -> String {
    "https://github.com/christian-egelund-hansen".to_string()
}

fn default_slow_interval() -> u64 {
    800
}

fn default_fast_interval() -> u64 {
    500
}

fn default_banner_line_interval() -> u64 {
    80
}

fn yes() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            current_path: default_current_path(),
            prompt_suffix: default_prompt_suffix(),
            min_ticks: default_min_ticks(),
            max_ticks: default_max_ticks(),
            linkedin_url: default_linkedin_url(),
            gitlab_url: default_gitlab_url(),
            github_url: default_github_url(),
            linkedin_interval_ms: default_slow_interval(),
            gitlab_interval_ms: default_slow_interval(),
            github_interval_ms: default_fast_interval(),
            boot_banner: yes(),
            banner_line_interval_ms: default_banner_line_interval(),
            deploy_policy: DeployPolicy::default(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(toml_str)?;
        cfg.validate()?;
        log::debug!("loaded TOML shell config: {cfg:?}");
        Ok(cfg)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json_str: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json_str)?;
        cfg.validate()?;
        log::debug!("loaded JSON shell config: {cfg:?}");
        Ok(cfg)
    }

    /// Reject settings the scheduler cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.min_ticks == 0 {
            return Err(TermfolioError::Config(
                "min_ticks must be at least 1".to_string(),
            ));
        }
        if self.min_ticks > self.max_ticks {
            return Err(TermfolioError::Config(format!(
                "min_ticks ({}) exceeds max_ticks ({})",
                self.min_ticks, self.max_ticks
            )));
        }
        for (key, value) in [
            ("linkedin_interval_ms", self.linkedin_interval_ms),
            ("gitlab_interval_ms", self.gitlab_interval_ms),
            ("github_interval_ms", self.github_interval_ms),
            ("banner_line_interval_ms", self.banner_line_interval_ms),
        ] {
            if value == 0 {
                return Err(TermfolioError::Config(format!("{key} must be positive")));
            }
        }
        Ok(())
    }

    /// The prompt written before every input line.
    pub fn prompt(&self) -> String {
        format!("{}{}", self.current_path, self.prompt_suffix)
    }

    /// Inclusive range `ticks_required` is drawn from.
    pub fn tick_range(&self) -> RangeInclusive<u32> {
        self.min_ticks..=self.max_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_shell() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.prompt(), "Christian_Egelund_Hansen/.../cv$ ");
        assert_eq!(cfg.tick_range(), 3..=6);
        assert_eq!(cfg.linkedin_interval_ms, 800);
        assert_eq!(cfg.gitlab_interval_ms, 800);
        assert_eq!(cfg.github_interval_ms, 500);
        assert_eq!(cfg.banner_line_interval_ms, 80);
        assert!(cfg.boot_banner);
        assert_eq!(cfg.deploy_policy, DeployPolicy::Overlap);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_toml_is_default() {
        let cfg = ShellConfig::from_toml("").unwrap();
        assert_eq!(cfg, ShellConfig::default());
    }

    #[test]
    fn toml_overrides() {
        let cfg = ShellConfig::from_toml(
            r#"
current_path = "guest/home"
min_ticks = 2
max_ticks = 2
github_url = "https://example.org/me"
boot_banner = false
deploy_policy = "cancel_previous"
"#,
        )
        .unwrap();
        assert_eq!(cfg.prompt(), "guest/home$ ");
        assert_eq!(cfg.tick_range(), 2..=2);
        assert_eq!(cfg.github_url, "https://example.org/me");
        assert!(!cfg.boot_banner);
        assert_eq!(cfg.deploy_policy, DeployPolicy::CancelPrevious);
        // Untouched keys keep their defaults.
        assert_eq!(cfg.linkedin_interval_ms, 800);
    }

    #[test]
    fn json_overrides() {
        let cfg = ShellConfig::from_json(r#"{"deploy_policy": "reject", "max_ticks": 9}"#).unwrap();
        assert_eq!(cfg.deploy_policy, DeployPolicy::Reject);
        assert_eq!(cfg.tick_range(), 3..=9);
    }

    #[test]
    fn zero_min_ticks_rejected() {
        let err = ShellConfig::from_toml("min_ticks = 0").unwrap_err();
        assert!(matches!(err, TermfolioError::Config(_)));
    }

    #[test]
    fn inverted_tick_range_rejected() {
        let err = ShellConfig::from_toml("min_ticks = 7").unwrap_err();
        assert!(format!("{err}").contains("exceeds max_ticks"));
    }

    #[test]
    fn zero_interval_rejected() {
        let err = ShellConfig::from_toml("github_interval_ms = 0").unwrap_err();
        assert!(format!("{err}").contains("github_interval_ms"));
    }

    #[test]
    fn unknown_policy_is_parse_error() {
        let err = ShellConfig::from_toml(r#"deploy_policy = "queue""#).unwrap_err();
        assert!(matches!(err, TermfolioError::TomlParse(_)));
    }
}
