// SPDX-License-Identifier: MPL-2.0
//! Contact form state.

/// Raw field values, extracted at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Which input an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Editable contact form. Values are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pre-filled form.
    #[must_use]
    pub fn with_values(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Copies the current values out of the form.
    #[must_use]
    pub fn fields(&self) -> FormFields {
        FormFields {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_round_through_each_field() {
        let mut form = ContactForm::new();
        form.set(Field::Name, "A");
        form.set(Field::Email, "a@b.co");
        form.set(Field::Message, "line one\nline two");

        assert_eq!(form.get(Field::Name), "A");
        assert_eq!(form.get(Field::Email), "a@b.co");
        assert_eq!(form.get(Field::Message), "line one\nline two");
    }

    #[test]
    fn fields_keep_whitespace_as_typed() {
        let form = ContactForm::with_values("  A ", "a@b.co", "hi");
        assert_eq!(form.fields().name, "  A ");
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut form = ContactForm::with_values("A", "a@b.co", "hi");
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form.fields(), FormFields::default());
    }
}
