//! Product form - dependent state/city selection with declarative validation
//!
//! The engine lives in [`state`]: a [`state::ProductForm`] owns the form
//! values and applies the set/blur/submit/reset transitions, consulting a
//! [`lookup::LookupTable`] to keep the cities selection consistent with the
//! selected states. [`app`] and [`ui`] are a terminal front-end over it.

pub mod app;
pub mod config;
pub mod error;
pub mod lookup;
pub mod state;
pub mod submit;
pub mod ui;

pub use error::{ConfigurationError, FormError, SubmitError};
pub use lookup::{LookupTable, Region};
pub use state::{
    FieldError, FieldErrors, FieldName, FieldValue, FileRef, FormPhase, FormValues, ProductForm,
    SelectOption, SubmitOutcome,
};
pub use submit::{LogSubmitHandler, SubmitHandler};
