//! Form state machine for the product form
//!
//! [`ProductForm`] owns the values, the current errors and the per-field
//! flags. Every mutation goes through one of its transitions so the
//! states → cities dependency and the error policy are applied in one place.

use super::dependent::DependentSelection;
use super::field::{FieldName, FieldValue, SelectOption};
use super::validator::{validate, validate_field, FieldErrors};
use super::values::{dedup_options, FormValues};
use crate::error::{FormError, SubmitError};
use crate::lookup::LookupTable;
use crate::submit::SubmitHandler;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Lifecycle phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Pristine,
    Editing,
    /// Only observable from inside a validation pass
    Validating,
    Submitting,
    Submitted,
}

/// Identifies one in-flight submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// Result of starting a submission
#[derive(Debug, Clone)]
pub enum SubmitStart {
    /// Values passed validation and must be handed to the collaborator
    Ready {
        ticket: SubmitTicket,
        values: FormValues,
    },
    /// Validation failed; the collaborator must not be called
    Blocked(FieldErrors),
}

/// Result of a submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted,
    Blocked(FieldErrors),
    /// The form was reset while the collaborator was running
    Discarded,
}

/// Dependent-selection product form
#[derive(Debug, Clone)]
pub struct ProductForm {
    lookup: Arc<LookupTable>,
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<FieldName>,
    dirty: BTreeSet<FieldName>,
    phase: FormPhase,
    cities: DependentSelection,
    generation: u64,
    in_flight: Option<u64>,
}

impl ProductForm {
    pub fn new(lookup: Arc<LookupTable>) -> Self {
        Self {
            lookup,
            values: FormValues::default(),
            errors: FieldErrors::default(),
            touched: BTreeSet::new(),
            dirty: BTreeSet::new(),
            phase: FormPhase::Pristine,
            cities: DependentSelection::default(),
            generation: 0,
            in_flight: None,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn lookup(&self) -> &LookupTable {
        &self.lookup
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_dirty(&self, field: FieldName) -> bool {
        self.dirty.contains(&field)
    }

    /// Whether the render boundary should refuse input for `field`
    pub fn is_disabled(&self, field: FieldName) -> bool {
        field == FieldName::Cities && self.cities.is_disabled()
    }

    pub fn state_options(&self) -> Vec<SelectOption> {
        self.lookup.state_options()
    }

    pub fn available_cities(&self) -> &[SelectOption] {
        self.cities.available()
    }

    /// Options offered for a selection field
    pub fn options(&self, field: FieldName) -> Vec<SelectOption> {
        match field {
            FieldName::States => self.state_options(),
            FieldName::Cities => self.available_cities().to_vec(),
            _ => Vec::new(),
        }
    }

    pub fn selection(&self, field: FieldName) -> &[SelectOption] {
        match field {
            FieldName::States => &self.values.states,
            FieldName::Cities => &self.values.cities,
            _ => &[],
        }
    }

    /// Store a value and re-validate only that field.
    ///
    /// Errors of other fields are left as they were. A rejected update
    /// leaves the form unchanged.
    pub fn set_field(&mut self, field: FieldName, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (FieldName::ProductName, FieldValue::Text(text)) => self.values.product_name = text,
            (FieldName::ProductDescription, FieldValue::Text(text)) => {
                self.values.product_description = text
            }
            (FieldName::ProductImage, FieldValue::Image(file)) => self.values.product_image = file,
            (FieldName::ProductPrice, FieldValue::Price(price)) => {
                self.values.product_price = price
            }
            (FieldName::States, FieldValue::Selection(options)) => self.apply_states(options),
            (FieldName::Cities, FieldValue::Selection(options)) => self.apply_cities(options)?,
            (field, _) => return Err(FormError::TypeMismatch(field)),
        }

        if self.phase != FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
        self.mark_dirty(field);
        self.errors.set(field, validate_field(field, &self.values));
        tracing::debug!(field = %field, error = ?self.errors.get(field), "field updated");
        Ok(())
    }

    /// Add `option` to a selection field, or remove it when already selected
    pub fn toggle_option(&mut self, field: FieldName, option: SelectOption) -> Result<(), FormError> {
        if !field.is_selection() {
            return Err(FormError::TypeMismatch(field));
        }
        let mut selection = self.selection(field).to_vec();
        if let Some(pos) = selection.iter().position(|o| o.value == option.value) {
            selection.remove(pos);
        } else {
            selection.push(option);
        }
        self.set_field(field, FieldValue::Selection(selection))
    }

    fn apply_states(&mut self, options: Vec<SelectOption>) {
        self.values.states = dedup_options(options);
        let pruned = self.cities.on_states_changed(
            &self.lookup,
            &self.values.states,
            &mut self.values.cities,
        );
        if !pruned.is_empty() {
            let names: Vec<&str> = pruned.iter().map(|o| o.value.as_str()).collect();
            tracing::debug!(pruned = ?names, "dropped cities no longer offered");
            self.mark_dirty(FieldName::Cities);
            self.errors.set(
                FieldName::Cities,
                validate_field(FieldName::Cities, &self.values),
            );
        }
    }

    fn apply_cities(&mut self, options: Vec<SelectOption>) -> Result<(), FormError> {
        let options = dedup_options(options);
        if !options.is_empty() && self.cities.is_disabled() {
            return Err(FormError::SelectionDisabled(FieldName::Cities));
        }
        if let Some(unknown) = options.iter().find(|o| !self.cities.offers(&o.value)) {
            return Err(FormError::UnavailableOption {
                field: FieldName::Cities,
                value: unknown.value.clone(),
            });
        }
        self.values.cities = options;
        Ok(())
    }

    fn mark_dirty(&mut self, field: FieldName) {
        if self.values.is_default(field) {
            self.dirty.remove(&field);
        } else {
            self.dirty.insert(field);
        }
    }

    /// Mark `field` touched and refresh the errors of every field
    pub fn blur(&mut self, field: FieldName) {
        self.touched.insert(field);
        let resume = match self.phase {
            FormPhase::Submitting => FormPhase::Submitting,
            _ => FormPhase::Editing,
        };
        self.run_validation();
        self.phase = resume;
        tracing::debug!(field = %field, errors = self.errors.len(), "field blurred");
    }

    fn run_validation(&mut self) {
        self.phase = FormPhase::Validating;
        self.errors = validate(&self.values);
    }

    /// Validate everything and, if clean, hand out a ticket for the collaborator
    pub fn begin_submit(&mut self) -> Result<SubmitStart, FormError> {
        if self.phase == FormPhase::Submitting {
            return Err(FormError::SubmitInProgress);
        }

        self.run_validation();
        if !self.errors.is_empty() {
            self.phase = FormPhase::Editing;
            tracing::info!(errors = self.errors.len(), "submission blocked by validation");
            return Ok(SubmitStart::Blocked(self.errors.clone()));
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.phase = FormPhase::Submitting;
        Ok(SubmitStart::Ready {
            ticket: SubmitTicket(self.generation),
            values: self.values.clone(),
        })
    }

    /// Apply the collaborator's result for `ticket`
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<(), SubmitError>,
    ) -> Result<SubmitOutcome, FormError> {
        if self.in_flight != Some(ticket.0) {
            tracing::warn!(ticket = ticket.0, "ignoring result of a discarded submission");
            return Ok(SubmitOutcome::Discarded);
        }
        self.in_flight = None;

        match result {
            Ok(()) => {
                self.clear();
                self.phase = FormPhase::Submitted;
                tracing::info!("form submitted");
                Ok(SubmitOutcome::Submitted)
            }
            Err(err) => {
                self.phase = FormPhase::Editing;
                tracing::warn!(error = %err, "submission failed");
                Err(FormError::Submit(err))
            }
        }
    }

    /// Validate, call `handler` with the values, and apply its result
    pub async fn submit<H>(&mut self, handler: &H) -> Result<SubmitOutcome, FormError>
    where
        H: SubmitHandler + ?Sized,
    {
        match self.begin_submit()? {
            SubmitStart::Blocked(errors) => Ok(SubmitOutcome::Blocked(errors)),
            SubmitStart::Ready { ticket, values } => {
                let result = handler.submit(values).await;
                self.finish_submit(ticket, result)
            }
        }
    }

    /// Clear values, errors and flags and return to `Pristine`
    pub fn reset(&mut self) {
        self.clear();
        self.in_flight = None;
        self.phase = FormPhase::Pristine;
        tracing::debug!("form reset");
    }

    fn clear(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
        self.touched.clear();
        self.dirty.clear();
        self.cities.clear();
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new(Arc::new(LookupTable::default()))
    }
}
