use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::models::Product;

/// One untrusted field of a request body.
#[derive(Debug, Clone, PartialEq)]
pub enum Supplied<T> {
    Absent,
    Valid(T),
    Invalid(Value),
}

impl<T> Supplied<T> {
    fn read(map: &Map<String, Value>, key: &str, extract: impl Fn(&Value) -> Option<T>) -> Self {
        match map.get(key) {
            None => Supplied::Absent,
            Some(value) => match extract(value) {
                Some(typed) => Supplied::Valid(typed),
                None => Supplied::Invalid(value.clone()),
            },
        }
    }
}

/// A search body before validation. Keys other than the four criteria are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub category: Supplied<String>,
    pub min_price: Supplied<f64>,
    pub max_price: Supplied<f64>,
    pub in_stock_only: Supplied<bool>,
}

impl SearchRequest {
    /// Reads a raw body. An empty body means "no criteria"; anything that is not
    /// JSON is rejected. Non-object JSON documents carry no criteria.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.is_empty() {
            return Ok(Self::from_value(Value::Object(Map::new())));
        }
        serde_json::from_slice::<Value>(body).map(Self::from_value)
    }

    pub fn from_value(value: Value) -> Self {
        let map = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        SearchRequest {
            category: Supplied::read(&map, "category", |v| v.as_str().map(str::to_owned)),
            min_price: Supplied::read(&map, "minPrice", Value::as_f64),
            max_price: Supplied::read(&map, "maxPrice", Value::as_f64),
            in_stock_only: Supplied::read(&map, "inStockOnly", Value::as_bool),
        }
    }
}

/// Validated search criteria. Only fields that were supplied are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Electronics")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 10)]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 500)]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock_only: Option<bool>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.in_stock_only.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub total: usize,
    pub items: Vec<Product>,
}

impl From<Vec<Product>> for SearchResponse {
    fn from(items: Vec<Product>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}
