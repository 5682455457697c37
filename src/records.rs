use serde::{Deserialize, Serialize};

/// Literal sentinel for a field the classifier could not resolve.
///
/// Output records always carry either genuine extracted text or this exact
/// string, never an absent/null field.
pub const SENTINEL: &str = "Not found";

/// Outcome of classifying one semantic field of a fragment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Verbatim text taken from one of the fragment's nodes
    Found(String),

    /// No node won this field's slot
    #[default]
    NotFound,
}

impl FieldValue {
    pub fn is_found(&self) -> bool {
        matches!(self, FieldValue::Found(_))
    }

    /// Resolve to the output string, substituting the sentinel when unset
    pub fn into_string(self) -> String {
        match self {
            FieldValue::Found(text) => text,
            FieldValue::NotFound => SENTINEL.to_string(),
        }
    }
}

/// One structured product record extracted from a candidate fragment.
///
/// The serialized field casing (`name` / `Brand` / `list_price`) is part of
/// the external contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,

    #[serde(rename = "Brand")]
    pub brand: String,

    pub list_price: String,
}

impl ProductRecord {
    /// Build a record from the three field slots, substituting the sentinel
    /// for unresolved fields
    pub fn from_fields(name: FieldValue, brand: FieldValue, list_price: FieldValue) -> Self {
        Self {
            name: name.into_string(),
            brand: brand.into_string(),
            list_price: list_price.into_string(),
        }
    }

    /// A record is kept by the assembler only when both name and price
    /// were genuinely extracted
    pub fn is_complete(&self) -> bool {
        self.name != SENTINEL && self.list_price != SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_resolution() {
        assert_eq!(
            FieldValue::Found("Logitech".to_string()).into_string(),
            "Logitech"
        );
        assert_eq!(FieldValue::NotFound.into_string(), SENTINEL);
    }

    #[test]
    fn test_completeness_requires_name_and_price() {
        let complete = ProductRecord {
            name: "Wireless Mouse Deluxe Edition".to_string(),
            brand: SENTINEL.to_string(),
            list_price: "$19.99".to_string(),
        };
        assert!(complete.is_complete());

        let missing_price = ProductRecord {
            name: "Wireless Mouse Deluxe Edition".to_string(),
            brand: "Logitech".to_string(),
            list_price: SENTINEL.to_string(),
        };
        assert!(!missing_price.is_complete());

        let unresolved = ProductRecord::from_fields(
            FieldValue::NotFound,
            FieldValue::NotFound,
            FieldValue::NotFound,
        );
        assert!(!unresolved.is_complete());
    }

    #[test]
    fn test_serialized_field_casing_is_preserved() {
        let record = ProductRecord {
            name: "Bluetooth Mechanical Keyboard RGB".to_string(),
            brand: "Bluetooth".to_string(),
            list_price: "$24.50".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Bluetooth Mechanical Keyboard RGB");
        assert_eq!(json["Brand"], "Bluetooth");
        assert_eq!(json["list_price"], "$24.50");
    }
}
