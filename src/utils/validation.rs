use crate::utils::error::{ContactError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ContactError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_email_address(field_name: &str, value: &str) -> Result<()> {
    if !crate::core::validator::is_valid_email(value) {
        return Err(ContactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a valid email address".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_keys<'a, I>(field_name: &str, keys: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for key in keys {
        validate_non_empty_string(field_name, key)?;
        if !seen.insert(key) {
            return Err(ContactError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: key.to_string(),
                reason: "Duplicate key".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_required_key<'a, I>(field_name: &str, keys: I, required: &str) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    if keys.into_iter().any(|k| k == required) {
        Ok(())
    } else {
        Err(ContactError::MissingConfigError {
            field: format!("{}.{}", field_name, required),
        })
    }
}
