//! Submit handler that logs the submitted values

use super::traits::SubmitHandler;
use crate::error::SubmitError;
use crate::state::FormValues;
use async_trait::async_trait;

/// Logs submitted values as JSON and accepts them
#[derive(Debug, Clone, Default)]
pub struct LogSubmitHandler {
    pretty: bool,
}

impl LogSubmitHandler {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Render values the way they are logged
    pub fn render(&self, values: &FormValues) -> Result<String, SubmitError> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(values)?
        } else {
            serde_json::to_string(values)?
        };
        Ok(payload)
    }
}

#[async_trait]
impl SubmitHandler for LogSubmitHandler {
    async fn submit(&self, values: FormValues) -> Result<(), SubmitError> {
        let payload = self.render(&values)?;
        tracing::info!(target: "product_form::submit", "Form Data: {payload}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FileRef, SelectOption};

    fn values() -> FormValues {
        FormValues {
            product_name: "Desk Lamp".to_string(),
            product_description: "A warm reading lamp".to_string(),
            product_image: Some(FileRef::new(2048, "image/jpeg")),
            product_price: Some(25.0),
            states: vec![SelectOption::from_name("Texas")],
            cities: vec![SelectOption::from_name("Dallas")],
        }
    }

    #[test]
    fn test_render_compact() {
        let rendered = LogSubmitHandler::default().render(&values()).unwrap();
        assert!(!rendered.contains('\n'));
        assert!(rendered.contains(r#""productName":"Desk Lamp""#));
        assert!(rendered.contains(r#""mimeType":"image/jpeg""#));
    }

    #[test]
    fn test_render_pretty() {
        let rendered = LogSubmitHandler::new(true).render(&values()).unwrap();
        assert!(rendered.contains('\n'));
        assert!(rendered.contains(r#""cities""#));
    }

    #[test]
    fn test_submit_accepts_values() {
        let handler = LogSubmitHandler::default();
        assert!(tokio_test::block_on(handler.submit(values())).is_ok());
    }
}
