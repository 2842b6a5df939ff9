use serde::{Deserialize, Serialize};

/// Core product entity served by the mock catalog.
///
/// Field names mirror the input file verbatim so every response re-encodes
/// with exactly the keys the fixture was written with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub in_stock: bool,
    pub rating: f64,
    pub tags: Vec<String>,
    /// Opaque timestamp — stored and served as-is, never parsed as a date.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_json() -> &'static str {
        r#"{"id":1,"name":"Widget","category":"Tools","price":9.99,"in_stock":true,"rating":4.5,"tags":["new"],"created_at":"2024-01-01"}"#
    }

    // ── Deserialization ────────────────────────────────────────────────────────

    #[test]
    fn deserializes_full_record() {
        let p: Product = serde_json::from_str(widget_json()).unwrap();
        assert_eq!(p.id, 1);
        assert_eq!(p.name, "Widget");
        assert_eq!(p.category, "Tools");
        assert!((p.price - 9.99).abs() < f64::EPSILON);
        assert!(p.in_stock);
        assert!((p.rating - 4.5).abs() < f64::EPSILON);
        assert_eq!(p.tags, vec!["new"]);
        assert_eq!(p.created_at, "2024-01-01");
    }

    #[test]
    fn missing_field_is_rejected() {
        // `price` absent → shape mismatch, must not produce a default value
        let json = r#"{"id":1,"name":"Widget","category":"Tools","in_stock":true,"rating":4.5,"tags":[],"created_at":"2024-01-01"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let json = r#"{"id":"one","name":"Widget","category":"Tools","price":9.99,"in_stock":true,"rating":4.5,"tags":[],"created_at":"2024-01-01"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let json = r#"{"id":1,"name":"Widget","category":"Tools","price":9.99,"in_stock":true,"rating":4.5,"tags":["new"],"created_at":"2024-01-01","discount":0.1}"#;
        assert!(serde_json::from_str::<Product>(json).is_ok());
    }

    // ── Serialization ──────────────────────────────────────────────────────────

    #[test]
    fn serializes_with_input_key_names() {
        let p: Product = serde_json::from_str(widget_json()).unwrap();
        let value = serde_json::to_value(&p).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["id", "name", "category", "price", "in_stock", "rating", "tags", "created_at"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), 8);
    }

    #[test]
    fn encodes_byte_identical_to_input() {
        // Struct fields serialize in declaration order, so a record written
        // with the canonical key order re-encodes to the exact input bytes.
        let p: Product = serde_json::from_str(widget_json()).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), widget_json());
    }

    #[test]
    fn round_trip_preserves_field_values() {
        let p: Product = serde_json::from_str(widget_json()).unwrap();
        let encoded = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&encoded).unwrap();
        assert_eq!(p, back);
    }
}
