use serde_json::Value;

use crate::models::{Numeric, Product, RawProduct};

pub const UNNAMED: &str = "Unnamed";

/// Turns a stored record into a canonical [`Product`]. Never fails.
pub fn normalize(raw: RawProduct) -> Product {
    Product {
        id: raw.id,
        name: raw
            .name
            .as_ref()
            .and_then(truthy_text)
            .unwrap_or_else(|| UNNAMED.to_string()),
        category: raw.category.as_ref().and_then(truthy_text),
        price: raw.price.as_ref().and_then(coerce_optional),
        stock: raw.stock.as_ref().and_then(coerce_optional),
    }
}

/// Text of a truthy value; `None` for null, `false`, zero and empty strings.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

fn coerce_optional(value: &Value) -> Option<Numeric> {
    match value {
        Value::Null => None,
        other => Some(Numeric::coerce(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawProduct {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn clean_record_passes_through() {
        let product = normalize(raw(json!({
            "id": 1, "name": "A", "category": "X", "price": 10, "stock": 2
        })));

        assert_eq!(product.id, Some(json!(1)));
        assert_eq!(product.name, "A");
        assert_eq!(product.category.as_deref(), Some("X"));
        assert_eq!(product.price, Some(Numeric::Value(10.0)));
        assert_eq!(product.stock, Some(Numeric::Value(2.0)));
    }

    #[test]
    fn missing_fields_get_defaults() {
        let product = normalize(raw(json!({ "id": "sku-9" })));

        assert_eq!(product.id, Some(json!("sku-9")));
        assert_eq!(product.name, UNNAMED);
        assert_eq!(product.category, None);
        assert_eq!(product.price, None);
        assert_eq!(product.stock, None);
    }

    #[test]
    fn falsy_name_and_category_are_replaced() {
        let product = normalize(raw(json!({ "id": 2, "name": "", "category": 0 })));
        assert_eq!(product.name, UNNAMED);
        assert_eq!(product.category, None);

        let product = normalize(raw(json!({ "id": 3, "name": null, "category": false })));
        assert_eq!(product.name, UNNAMED);
        assert_eq!(product.category, None);
    }

    #[test]
    fn string_numbers_are_coerced() {
        let product = normalize(raw(json!({ "id": 4, "price": "19.99", "stock": "3" })));
        assert_eq!(product.price, Some(Numeric::Value(19.99)));
        assert_eq!(product.stock, Some(Numeric::Value(3.0)));
    }

    #[test]
    fn explicit_null_numbers_stay_null() {
        let product = normalize(raw(json!({ "id": 5, "price": null, "stock": null })));
        assert_eq!(product.price, None);
        assert_eq!(product.stock, None);
    }

    #[test]
    fn malformed_price_becomes_invalid_sentinel() {
        let product = normalize(raw(json!({ "id": 6, "price": "free", "stock": "lots" })));
        assert_eq!(product.price, Some(Numeric::Invalid));
        assert_eq!(product.stock, Some(Numeric::Invalid));
    }

    #[test]
    fn missing_id_is_left_out_but_null_id_is_kept() {
        let product = normalize(raw(json!({ "name": "n" })));
        assert_eq!(product.id, None);
        let out = serde_json::to_value(&product).unwrap();
        assert!(out.get("id").is_none());

        let product = normalize(raw(json!({ "id": null })));
        let out = serde_json::to_value(&product).unwrap();
        assert_eq!(out.get("id"), Some(&Value::Null));
    }

    #[test]
    fn truthy_non_strings_render_as_text() {
        let product = normalize(raw(json!({ "id": 7, "name": 42 })));
        assert_eq!(product.name, "42");
    }
}
