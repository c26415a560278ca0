use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{SignError, SignResult};

/**
    A dynamically typed scalar carried by a [`ParameterSet`].

    Nested JSON arrays and objects are kept as [`ParamValue::Json`] and
    rendered as compact JSON text.
*/
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Json(Value),
}

impl ParamValue {
    /**
        Render the value with the fixed scalar formatting rule used for
        canonicalization. Returns `None` for absent values.

        - strings as-is
        - booleans as `true` / `false`
        - integers in plain decimal
        - floats as the shortest round-trip decimal, never in exponent
          form (`100.0` renders as `100`, `1e-7` as `0.0000001`)
        - nested JSON as compact JSON text
    */
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::UInt(u) => Some(u.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Str(s) => Some(s.clone()),
            Self::Json(v) => match v {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            },
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null | Self::Json(Value::Null))
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for ParamValue {
    fn from(u: u32) -> Self {
        Self::UInt(u64::from(u))
    }
}

impl From<u64> for ParamValue {
    fn from(u: u64) -> Self {
        Self::UInt(u)
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<Value> for ParamValue {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::String(s) => Self::Str(s),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    // serde_json without arbitrary_precision always yields an f64 here
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            nested @ (Value::Array(_) | Value::Object(_)) => Self::Json(nested),
        }
    }
}

/**
    Mapping from field name to scalar value, the input to canonicalization.

    Keys are held in byte-wise order, so the order in which fields were
    inserted never affects the result. Inserting an existing key replaces
    its value.
*/
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    fields: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Build a parameter set from a JSON object, as received in callbacks.
    */
    pub fn from_json(value: &Value) -> SignResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| SignError::InvalidPayload("expected a JSON object".into()))?;
        Ok(object
            .iter()
            .map(|(k, v)| (k.clone(), ParamValue::from(v.clone())))
            .collect())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /**
        Chained variant of [`ParameterSet::insert`].
    */
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.fields.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.fields.remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /**
        Iterate fields in ascending byte-wise key order.
    */
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for ParameterSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
