//! Registration form validation.
//!
//! Rules per field (first failing rule wins):
//! - `name`: at least 2 characters
//! - `address`: at least 5 characters
//! - `city`, `state`: at least 2 characters
//! - `contact`: at least 10 characters, digits only
//! - `email_id`: standard email shape
//!
//! Duplicates are allowed; nothing here looks at existing records.

use crate::model::{ImageUpload, NewSchool};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

// Lookarounds are unsupported by `regex`; leading dot and ".." are checked separately.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Form fields, in the order they appear on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Address,
    City,
    State,
    Contact,
    Email,
    Image,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::City => "city",
            Field::State => "state",
            Field::Contact => "contact",
            Field::Email => "email_id",
            Field::Image => "image",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field violations, one message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Checks an email address against the accepted shape.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Validates the six registration fields.
///
/// # Examples
/// ```
/// use school_registry::model::NewSchool;
/// use school_registry::validation::{validate_school, Field};
///
/// let mut school = NewSchool {
///     name: "A High".into(),
///     address: "1 Main Street".into(),
///     city: "Metro".into(),
///     state: "XY".into(),
///     contact: "0123456789".into(),
///     email_id: "office@ahigh.edu".into(),
/// };
/// assert!(validate_school(&school).is_ok());
///
/// school.contact = "555-0100-99".into();
/// let errors = validate_school(&school).unwrap_err();
/// assert_eq!(errors.get(Field::Contact), Some("Contact must contain only numbers"));
/// ```
pub fn validate_school(school: &NewSchool) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !min_chars(&school.name, 2) {
        errors.add(Field::Name, "School name must be at least 2 characters");
    }
    if !min_chars(&school.address, 5) {
        errors.add(Field::Address, "Address must be at least 5 characters");
    }
    if !min_chars(&school.city, 2) {
        errors.add(Field::City, "City must be at least 2 characters");
    }
    if !min_chars(&school.state, 2) {
        errors.add(Field::State, "State must be at least 2 characters");
    }
    if !min_chars(&school.contact, 10) {
        errors.add(Field::Contact, "Contact number must be at least 10 digits");
    } else if !all_digits(&school.contact) {
        errors.add(Field::Contact, "Contact must contain only numbers");
    }
    if !is_valid_email(&school.email_id) {
        errors.add(Field::Email, "Please enter a valid email address");
    }

    errors.into_result()
}

/// Validates an optional image upload: non-empty, PNG/JPG/JPEG by extension.
pub fn validate_image(image: &ImageUpload) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let accepted = image
        .extension()
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()));
    if !accepted {
        errors.add(Field::Image, "Image must be a PNG, JPG or JPEG file");
    } else if image.bytes.is_empty() {
        errors.add(Field::Image, "Image file is empty");
    }

    errors.into_result()
}

/// Validates the fields and, when present, the image, merging all violations.
pub fn validate_submission(
    school: &NewSchool,
    image: Option<&ImageUpload>,
) -> Result<(), ValidationErrors> {
    let mut errors = match validate_school(school) {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };
    if let Some(Err(image_errors)) = image.map(validate_image) {
        for (field, message) in image_errors.iter() {
            errors.add(field, message);
        }
    }
    errors.into_result()
}
