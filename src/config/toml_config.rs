use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub notification: NotificationConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub recipient: String,
    pub email_message: String,
    pub sms_message: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            recipient: "Othman".to_string(),
            email_message: "notification via Email".to_string(),
            sms_message: "notification via SMS".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub name: String,
    pub content: String,
    pub output_dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            name: "Report V2.txt".to_string(),
            content: "Lorem ipsum dolor, sit amet consectetur adipisicing elit.".to_string(),
            output_dir: ".".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${NAME}` with the environment variable's value; unknown names stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.report.output_dir = output_dir.into();
        self
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("notification.recipient", &self.notification.recipient)?;
        validate_non_empty_string("report.name", &self.report.name)?;
        validate_path("report.name", &self.report.name)?;
        validate_path("report.output_dir", &self.report.output_dir)?;
        Ok(())
    }
}
