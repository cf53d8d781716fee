//! Terminal front-end state
//!
//! Holds what the form engine does not own: raw text buffers, focus and
//! list cursors, and the status line.

use super::forms::{FieldName, FileRef};
use std::path::Path;

/// Focusable rows of the screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    Submit,
    Reset,
}

impl Focus {
    pub const ORDER: [Focus; 8] = [
        Focus::Field(FieldName::ProductName),
        Focus::Field(FieldName::ProductDescription),
        Focus::Field(FieldName::ProductImage),
        Focus::Field(FieldName::ProductPrice),
        Focus::Field(FieldName::States),
        Focus::Field(FieldName::Cities),
        Focus::Submit,
        Focus::Reset,
    ];

    pub fn field(&self) -> Option<FieldName> {
        match self {
            Focus::Field(f) => Some(*f),
            _ => None,
        }
    }
}

/// Raw text typed into the free-form fields
#[derive(Debug, Clone, Default)]
pub struct TextInputs {
    pub name: String,
    pub description: String,
    pub image_path: String,
    pub price: String,
}

impl TextInputs {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::ProductName => Some(&self.name),
            FieldName::ProductDescription => Some(&self.description),
            FieldName::ProductImage => Some(&self.image_path),
            FieldName::ProductPrice => Some(&self.price),
            FieldName::States | FieldName::Cities => None,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::ProductName => Some(&mut self.name),
            FieldName::ProductDescription => Some(&mut self.description),
            FieldName::ProductImage => Some(&mut self.image_path),
            FieldName::ProductPrice => Some(&mut self.price),
            FieldName::States | FieldName::Cities => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Current application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Index into [`Focus::ORDER`]
    pub focus_index: usize,
    pub inputs: TextInputs,
    /// Highlighted row of the focused selection list
    pub list_cursor: usize,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn focus(&self) -> Focus {
        Focus::ORDER[self.focus_index % Focus::ORDER.len()]
    }

    pub fn next_focus(&mut self) {
        self.focus_index = (self.focus_index + 1) % Focus::ORDER.len();
        self.list_cursor = 0;
    }

    pub fn prev_focus(&mut self) {
        if self.focus_index == 0 {
            self.focus_index = Focus::ORDER.len() - 1;
        } else {
            self.focus_index -= 1;
        }
        self.list_cursor = 0;
    }
}

/// Parse the price buffer; blank or non-numeric input means no price
pub fn parse_price(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// MIME type guessed from a file extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Describe the file at `path` without reading its contents.
///
/// Returns `None` when the path is blank or does not name a regular file.
pub fn describe_file(path: &str) -> Option<FileRef> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }
    let path = Path::new(trimmed);
    let metadata = std::fs::metadata(path).ok()?;
    if !metadata.is_file() {
        return None;
    }
    let file = FileRef::new(metadata.len(), mime_for_path(path));
    Some(match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => file.with_name(name),
        None => file,
    })
}
