//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of the product form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    ProductName,
    ProductDescription,
    ProductImage,
    ProductPrice,
    States,
    Cities,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::ProductName,
        FieldName::ProductDescription,
        FieldName::ProductImage,
        FieldName::ProductPrice,
        FieldName::States,
        FieldName::Cities,
    ];

    /// Name used in logs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::ProductName => "productName",
            FieldName::ProductDescription => "productDescription",
            FieldName::ProductImage => "productImage",
            FieldName::ProductPrice => "productPrice",
            FieldName::States => "states",
            FieldName::Cities => "cities",
        }
    }

    /// Human-readable label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::ProductName => "Product Name",
            FieldName::ProductDescription => "Product Description",
            FieldName::ProductImage => "Product Image",
            FieldName::ProductPrice => "Product Price",
            FieldName::States => "Select States",
            FieldName::Cities => "Select Cities",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldName::ProductDescription)
    }

    pub fn is_selection(&self) -> bool {
        matches!(self, FieldName::States | FieldName::Cities)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled selectable value in a multi-select list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }

    /// Option whose value and label are both `name`
    pub fn from_name(name: &str) -> Self {
        Self::new(name, name)
    }
}

/// Metadata of an uploaded file; contents are never read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub size: u64,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FileRef {
    pub fn new(size: u64, mime_type: &str) -> Self {
        Self {
            size,
            mime_type: mime_type.to_string(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

/// Type-safe payload for a field update
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Image(Option<FileRef>),
    Price(Option<f64>),
    Selection(Vec<SelectOption>),
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }

    /// Selection whose options use each name as value and label
    pub fn names<S: AsRef<str>>(names: &[S]) -> Self {
        FieldValue::Selection(
            names
                .iter()
                .map(|n| SelectOption::from_name(n.as_ref()))
                .collect(),
        )
    }
}
