//! Application state and key handling

use crate::error::FormError;
use crate::state::{
    describe_file, parse_price, AppState, FieldName, FieldValue, Focus, FormPhase, ProductForm,
    SubmitOutcome,
};
use crate::submit::SubmitHandler;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Front-end state (focus, buffers, status line)
    pub state: AppState,
    /// The form engine
    pub form: ProductForm,
    /// Receives values that pass validation
    submitter: Box<dyn SubmitHandler>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(form: ProductForm, submitter: Box<dyn SubmitHandler>) -> Self {
        Self {
            state: AppState::default(),
            form,
            submitter,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Tab => {
                self.leave_focus();
                self.state.next_focus();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.leave_focus();
                self.state.prev_focus();
                return Ok(());
            }
            _ => {}
        }

        match self.state.focus() {
            Focus::Field(field) if field.is_selection() => self.handle_selection_key(field, key),
            Focus::Field(field) => self.handle_text_key(field, key),
            Focus::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit().await;
                }
            }
            Focus::Reset => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.reset();
                }
            }
        }
        Ok(())
    }

    /// Validate-on-blur for the field being left
    fn leave_focus(&mut self) {
        if let Some(field) = self.state.focus().field() {
            self.form.blur(field);
        }
    }

    fn handle_text_key(&mut self, field: FieldName, key: KeyEvent) {
        let Some(buffer) = self.state.inputs.get_mut(field) else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter if field.is_multiline() => buffer.push('\n'),
            KeyCode::Enter => {
                self.leave_focus();
                self.state.next_focus();
                return;
            }
            _ => return,
        }
        self.commit_text(field);
    }

    /// Push the raw buffer of `field` into the form
    fn commit_text(&mut self, field: FieldName) {
        let Some(raw) = self.state.inputs.get(field) else {
            return;
        };
        let value = match field {
            FieldName::ProductImage => FieldValue::Image(describe_file(raw)),
            FieldName::ProductPrice => FieldValue::Price(parse_price(raw)),
            _ => FieldValue::Text(raw.to_string()),
        };
        self.apply(field, value);
    }

    fn handle_selection_key(&mut self, field: FieldName, key: KeyEvent) {
        let options = self.form.options(field);
        match key.code {
            KeyCode::Up => {
                self.state.list_cursor = self.state.list_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.state.list_cursor + 1 < options.len() {
                    self.state.list_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.form.is_disabled(field) {
                    self.state.status_message = Some("Select a state first".to_string());
                    return;
                }
                if let Some(option) = options.get(self.state.list_cursor).cloned() {
                    if let Err(err) = self.form.toggle_option(field, option) {
                        self.report(err);
                    }
                }
            }
            _ => {}
        }
    }

    fn apply(&mut self, field: FieldName, value: FieldValue) {
        if let Err(err) = self.form.set_field(field, value) {
            self.report(err);
        }
    }

    fn report(&mut self, err: FormError) {
        tracing::debug!(error = %err, "form rejected input");
        self.state.status_message = Some(err.to_string());
    }

    async fn submit(&mut self) {
        let result = self.form.submit(&*self.submitter).await;
        let message = match result {
            Ok(SubmitOutcome::Submitted) => {
                self.state.inputs.clear();
                "Product submitted".to_string()
            }
            Ok(SubmitOutcome::Blocked(errors)) => {
                format!("Fix {} field(s) before submitting", errors.len())
            }
            Ok(SubmitOutcome::Discarded) => "Submission discarded".to_string(),
            Err(err) => format!("Submission failed: {err}"),
        };
        self.state.status_message = Some(message);
    }

    fn reset(&mut self) {
        self.form.reset();
        self.state.inputs.clear();
        self.state.status_message = Some("Form cleared".to_string());
    }

    /// Short label for the status bar
    pub fn phase_label(&self) -> &'static str {
        match self.form.phase() {
            FormPhase::Pristine => "new",
            FormPhase::Editing => "editing",
            FormPhase::Validating => "validating",
            FormPhase::Submitting => "submitting",
            FormPhase::Submitted => "submitted",
        }
    }
}
