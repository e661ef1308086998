use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A stored number after coercion.
///
/// `Invalid` marks a stored value that could not be read as a number
/// (for example `"abc"` in a price column). It is kept apart from "no value"
/// so the filter engine can treat it deliberately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Value(f64),
    Invalid,
}

impl Numeric {
    /// Coerces an arbitrary stored JSON value the way loosely-typed catalogs expect.
    pub fn coerce(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(Numeric::Invalid, Numeric::Value),
            Value::String(s) => parse_numeric_str(s),
            Value::Bool(b) => Numeric::Value(if *b { 1.0 } else { 0.0 }),
            Value::Null => Numeric::Value(0.0),
            // Arrays read as their comma-joined text: `[]` is 0, `[7]` is 7.
            Value::Array(items) => parse_numeric_str(&array_text(items)),
            Value::Object(_) => Numeric::Invalid,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Value(v) => Some(*v),
            Numeric::Invalid => None,
        }
    }
}

fn array_text(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Array(inner) => array_text(inner),
            Value::Object(_) => "[object Object]".to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_numeric_str(raw: &str) -> Numeric {
    let s = raw.trim();
    if s.is_empty() {
        return Numeric::Value(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Numeric::Value(f64::INFINITY),
        "-Infinity" => return Numeric::Value(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.starts_with(['+', '-']) {
            return Numeric::Invalid;
        }
        return u64::from_str_radix(digits, radix)
            .map(|v| Numeric::Value(v as f64))
            .unwrap_or(Numeric::Invalid);
    }

    // f64::from_str also accepts "inf" and "nan", which are not numbers here.
    let plain_decimal = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !plain_decimal {
        return Numeric::Invalid;
    }

    s.parse::<f64>().map_or(Numeric::Invalid, Numeric::Value)
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Numeric::Value(v) if v.is_finite() => {
                if v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 {
                    serializer.serialize_i64(*v as i64)
                } else {
                    serializer.serialize_f64(*v)
                }
            }
            // Non-finite and unreadable numbers have no JSON form.
            _ => serializer.serialize_none(),
        }
    }
}

/// Canonical catalog item returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    /// Passed through unchanged; omitted when the stored record has no id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    pub category: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Numeric>,
    #[schema(value_type = Option<f64>)]
    pub stock: Option<Numeric>,
}

/// A catalog record as stored on disk.
///
/// Each field is `None` when the key is missing and `Some(Value::Null)` when
/// it is present but null. Records that are not JSON objects carry no fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct RawProduct {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub category: Option<Value>,
    pub price: Option<Value>,
    pub stock: Option<Value>,
}

impl From<Value> for RawProduct {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => RawProduct::from(map),
            _ => RawProduct::default(),
        }
    }
}

impl From<Map<String, Value>> for RawProduct {
    fn from(mut map: Map<String, Value>) -> Self {
        RawProduct {
            id: map.remove("id"),
            name: map.remove("name"),
            category: map.remove("category"),
            price: map.remove("price"),
            stock: map.remove("stock"),
        }
    }
}
