//! Form domain layer
//!
//! Field values, declarative validation, the states → cities controller
//! and the form state machine that ties them together.

mod dependent;
mod field;
mod form_state;
mod validator;
mod values;

pub use dependent::DependentSelection;
pub use field::{FieldName, FieldValue, FileRef, SelectOption};
pub use form_state::{FormPhase, ProductForm, SubmitOutcome, SubmitStart, SubmitTicket};
pub use validator::{
    validate, validate_field, FieldError, FieldErrors, ValidationRule, ALLOWED_IMAGE_TYPES,
    MAX_IMAGE_BYTES, RULES,
};
pub use values::FormValues;
