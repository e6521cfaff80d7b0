use serde::{Deserialize, Serialize};

use crate::Field;

/// Values typed into the contact form.
///
/// Treated as an immutable value: [`ContactFormData::with_field`] hands back a new value with
/// one field replaced, and the controller swaps it in wholesale.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn with_field(&self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut next = self.clone();

        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Phone => next.phone = value,
            Field::Subject => next.subject = value,
            Field::Message => next.message = value,
        }

        next
    }

    /// Name, email and message are filled in. Email syntax is left to the browser.
    pub fn is_valid(&self) -> bool {
        Field::REQUIRED
            .iter()
            .all(|field| !self.get(*field).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
