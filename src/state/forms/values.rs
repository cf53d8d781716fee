//! Current values of the product form

use super::field::{FieldName, FileRef, SelectOption};
use serde::Serialize;

/// Snapshot of every field value
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub product_name: String,
    pub product_description: String,
    pub product_image: Option<FileRef>,
    pub product_price: Option<f64>,
    pub states: Vec<SelectOption>,
    pub cities: Vec<SelectOption>,
}

impl FormValues {
    /// Values of the selected states, in selection order
    pub fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(|o| o.value.as_str()).collect()
    }

    pub fn city_names(&self) -> Vec<&str> {
        self.cities.iter().map(|o| o.value.as_str()).collect()
    }

    /// Whether `field` still holds its default value
    pub fn is_default(&self, field: FieldName) -> bool {
        match field {
            FieldName::ProductName => self.product_name.is_empty(),
            FieldName::ProductDescription => self.product_description.is_empty(),
            FieldName::ProductImage => self.product_image.is_none(),
            FieldName::ProductPrice => self.product_price.is_none(),
            FieldName::States => self.states.is_empty(),
            FieldName::Cities => self.cities.is_empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.is_default(*f))
    }
}

/// Drop options whose value was already seen, keeping the first
pub(crate) fn dedup_options(options: Vec<SelectOption>) -> Vec<SelectOption> {
    let mut out: Vec<SelectOption> = Vec::with_capacity(options.len());
    for option in options {
        if !out.iter().any(|o| o.value == option.value) {
            out.push(option);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_empty() {
        let values = FormValues::default();
        assert!(values.is_empty());
        for field in FieldName::ALL {
            assert!(values.is_default(field));
        }
    }

    #[test]
    fn test_is_default_tracks_each_field() {
        let values = FormValues {
            product_price: Some(0.0),
            ..Default::default()
        };
        assert!(!values.is_default(FieldName::ProductPrice));
        assert!(values.is_default(FieldName::ProductName));
        assert!(!values.is_empty());
    }

    #[test]
    fn test_state_names_preserve_order() {
        let values = FormValues {
            states: vec![
                SelectOption::from_name("Texas"),
                SelectOption::from_name("California"),
            ],
            ..Default::default()
        };
        assert_eq!(values.state_names(), vec!["Texas", "California"]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let options = vec![
            SelectOption::new("TX", "Texas"),
            SelectOption::new("CA", "California"),
            SelectOption::new("TX", "Texas (again)"),
        ];
        let deduped = dedup_options(options);
        assert_eq!(
            deduped,
            vec![
                SelectOption::new("TX", "Texas"),
                SelectOption::new("CA", "California"),
            ]
        );
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let values = FormValues {
            product_name: "Lamp".to_string(),
            product_price: Some(12.5),
            ..Default::default()
        };
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json["productName"], "Lamp");
        assert_eq!(json["productPrice"], 12.5);
        assert!(json["productImage"].is_null());
        assert_eq!(json["states"], serde_json::json!([]));
    }
}
