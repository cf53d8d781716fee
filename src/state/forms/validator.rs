//! Declarative field validation
//!
//! Rules are evaluated in declaration order. For each field the first
//! failing rule determines the reported error; later rules for that field
//! are not consulted.

use super::field::FieldName;
use super::values::FormValues;
use std::collections::BTreeMap;
use thiserror::Error;

/// Largest accepted image, in bytes (2 MiB)
pub const MAX_IMAGE_BYTES: u64 = 2_097_152;

/// Image MIME types accepted by the form
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png"];

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Validation failure of a single field; `Display` is the user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Product Name is required")]
    NameRequired,
    #[error("Product Name must be at least 3 characters")]
    NameTooShort,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Image is required")]
    ImageRequired,
    #[error("File size too large (max 2MB)")]
    ImageTooLarge,
    #[error("Only JPG/PNG allowed")]
    ImageType,
    #[error("Price is required")]
    PriceRequired,
    #[error("Select at least one state")]
    StatesRequired,
    #[error("Select at least one city")]
    CitiesRequired,
}

/// A stateless predicate over the form values
pub struct ValidationRule {
    pub field: FieldName,
    pub check: fn(&FormValues) -> bool,
    pub error: FieldError,
}

pub static RULES: &[ValidationRule] = &[
    ValidationRule {
        field: FieldName::ProductName,
        check: |v| !v.product_name.is_empty(),
        error: FieldError::NameRequired,
    },
    ValidationRule {
        field: FieldName::ProductName,
        check: |v| v.product_name.chars().count() >= MIN_NAME_CHARS,
        error: FieldError::NameTooShort,
    },
    ValidationRule {
        field: FieldName::ProductDescription,
        check: |v| v.product_description.chars().count() >= MIN_DESCRIPTION_CHARS,
        error: FieldError::DescriptionRequired,
    },
    ValidationRule {
        field: FieldName::ProductImage,
        check: |v| v.product_image.is_some(),
        error: FieldError::ImageRequired,
    },
    ValidationRule {
        field: FieldName::ProductImage,
        check: |v| v.product_image.as_ref().is_some_and(|f| f.size <= MAX_IMAGE_BYTES),
        error: FieldError::ImageTooLarge,
    },
    ValidationRule {
        field: FieldName::ProductImage,
        check: |v| {
            v.product_image
                .as_ref()
                .is_some_and(|f| ALLOWED_IMAGE_TYPES.contains(&f.mime_type.as_str()))
        },
        error: FieldError::ImageType,
    },
    ValidationRule {
        field: FieldName::ProductPrice,
        check: |v| v.product_price.is_some_and(|p| p.is_finite() && p > 0.0),
        error: FieldError::PriceRequired,
    },
    ValidationRule {
        field: FieldName::States,
        check: |v| !v.states.is_empty(),
        error: FieldError::StatesRequired,
    },
    ValidationRule {
        field: FieldName::Cities,
        check: |v| !v.cities.is_empty(),
        error: FieldError::CitiesRequired,
    },
];

/// Errors of one validation pass, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldName, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Message to display under `field`, if any
    pub fn message(&self, field: FieldName) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, FieldError)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Replace the entry of a single field
    pub(crate) fn set(&mut self, field: FieldName, error: Option<FieldError>) {
        match error {
            Some(e) => {
                self.0.insert(field, e);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// First failing rule of `field`
pub fn validate_field(field: FieldName, values: &FormValues) -> Option<FieldError> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !(rule.check)(values))
        .map(|rule| rule.error)
}

/// Validate every field
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in FieldName::ALL {
        errors.set(field, validate_field(field, values));
    }
    errors
}
