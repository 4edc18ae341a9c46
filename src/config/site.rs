use crate::config::emailjs::EmailJsConfig;
use crate::domain::model::{FieldDescriptor, EMAIL_KEY};
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteIdentity,
    #[serde(default)]
    pub contact: ContactConfig,
    pub emailjs: Option<EmailJsConfig>,
}

/// Who messages are delivered to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteIdentity {
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_sub_text")]
    pub sub_text: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_form")]
    pub form: Vec<FieldDescriptor>,
}

fn default_sub_text() -> String {
    "Get in touch".to_string()
}

fn default_title() -> String {
    "Contact.".to_string()
}

fn default_form() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("name", "Your Name", "What's your name?"),
        FieldDescriptor::new("email", "Your Email", "What's your email?"),
        FieldDescriptor::new("message", "Your Message", "What do you want to say?"),
    ]
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            sub_text: default_sub_text(),
            title: default_title(),
            form: default_form(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteIdentity {
                full_name: "Site Owner".to_string(),
                email: "owner@example.com".to_string(),
            },
            contact: ContactConfig::default(),
            emailjs: None,
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContactError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// EmailJS settings from the file, falling back to the environment.
    pub fn emailjs_config(&self) -> EmailJsConfig {
        self.emailjs.clone().unwrap_or_else(EmailJsConfig::from_env)
    }

    pub fn field_keys(&self) -> impl Iterator<Item = &str> {
        self.contact.form.iter().map(|f| f.key.as_str())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("site.full_name", &self.site.full_name)?;
        validation::validate_email_address("site.email", &self.site.email)?;

        if self.contact.form.is_empty() {
            return Err(ContactError::ConfigValidationError {
                field: "contact.form".to_string(),
                message: "At least one form field is required".to_string(),
            });
        }
        validation::validate_unique_keys("contact.form", self.field_keys())?;
        validation::validate_required_key("contact.form", self.field_keys(), EMAIL_KEY)?;

        if let Some(emailjs) = &self.emailjs {
            emailjs.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.field_keys().collect::<Vec<_>>(),
            vec!["name", "email", "message"]
        );
    }

    #[test]
    fn test_parse_keeps_field_order() {
        let config = SiteConfig::from_toml_str(
            r#"
[site]
full_name = "Ada Lovelace"
email = "ada@example.com"

[contact]
title = "Say hi."

[[contact.form]]
key = "message"
span = "Message"
placeholder = "Hello"

[[contact.form]]
key = "email"
span = "Email"
placeholder = "you@example.com"
"#,
        )
        .unwrap();

        assert_eq!(config.contact.title, "Say hi.");
        assert_eq!(config.contact.sub_text, "Get in touch");
        assert_eq!(config.field_keys().collect::<Vec<_>>(), vec!["message", "email"]);
        assert!(config.emailjs.is_none());
    }

    #[test]
    fn test_missing_form_section_uses_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[site]
full_name = "Ada Lovelace"
email = "ada@example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.contact.form.len(), 3);
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("CONTACT_SECTION_TEST_OWNER", "Grace Hopper");
        let config = SiteConfig::from_toml_str(
            r#"
[site]
full_name = "${CONTACT_SECTION_TEST_OWNER}"
email = "grace@example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.site.full_name, "Grace Hopper");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config = SiteConfig::from_toml_str(
            r#"
[site]
full_name = "${CONTACT_SECTION_SURELY_UNSET_VAR}"
email = "grace@example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.site.full_name, "${CONTACT_SECTION_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_validation_rejects_missing_email_field() {
        let mut config = SiteConfig::default();
        config.contact.form.retain(|f| f.key != "email");
        assert!(matches!(
            config.validate(),
            Err(ContactError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_bad_owner_email() {
        let mut config = SiteConfig::default();
        config.site.email = "owner at example".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = SiteConfig::from_toml_str("[site\nfull_name = 1").unwrap_err();
        assert!(matches!(err, ContactError::TomlError(_)));
    }
}
