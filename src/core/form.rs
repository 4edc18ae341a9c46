use crate::core::validator::is_valid_email;
use crate::domain::model::{FieldDescriptor, EMAIL_KEY};
use crate::utils::error::{ContactError, Result};
use std::collections::HashMap;

/// Current text per configured field plus the inline email error.
///
/// The key set is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: HashMap<String, String>,
    email_error: String,
}

impl FormState {
    pub fn new(fields: &[FieldDescriptor]) -> Self {
        let values = fields
            .iter()
            .map(|f| (f.key.clone(), String::new()))
            .collect();
        Self {
            values,
            email_error: String::new(),
        }
    }

    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = self
            .values
            .get_mut(key)
            .ok_or_else(|| ContactError::UnknownFieldError {
                key: key.to_string(),
            })?;
        *slot = value.to_string();

        if key == EMAIL_KEY {
            self.revalidate_email();
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn email_error(&self) -> &str {
        &self.email_error
    }

    pub fn check_email(&self) -> Result<()> {
        if is_valid_email(self.get(EMAIL_KEY)) {
            Ok(())
        } else {
            Err(ContactError::InvalidEmailFormat)
        }
    }

    /// Recomputes the inline error and returns whether the email is valid.
    pub fn revalidate_email(&mut self) -> bool {
        match self.check_email() {
            Ok(()) => {
                self.email_error.clear();
                true
            }
            Err(e) => {
                self.email_error = e.to_string();
                false
            }
        }
    }

    /// Blanks every value, keeping the key set.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        self.values.values().all(String::is_empty)
    }
}
