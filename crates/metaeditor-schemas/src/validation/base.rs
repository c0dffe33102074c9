//! Field types, the violation collector and the `Entity` trait
//!
//! Every value that can appear in a record implements [`FieldType`], which
//! both checks a loosely-typed JSON value and converts it into the typed
//! form. Checks never stop at the first problem: each call pushes whatever
//! it finds into a shared [`Violations`] collector and returns `None` if the
//! value could not be converted.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{SchemaViolation, Violation, ViolationKind};
use crate::validation::path::FieldPath;
use serde_json::{Map, Value};
use std::fmt;

/// Placeholder written into required URI fields of a skeleton
pub const PLACEHOLDER_URI: &str = "about:blank";

/// Free-form mapping carried by the `additional` field of a record
pub type Additional = Map<String, Value>;

/// Accumulates violations during a tree walk
#[derive(Debug, Default)]
pub struct Violations {
    items: Vec<Violation>,
}

impl Violations {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation
    pub fn push<M: Into<String>>(&mut self, kind: ViolationKind, path: &FieldPath, message: M) {
        self.items.push(Violation::new(kind, path.clone(), message));
    }

    /// Number of violations recorded so far
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Combine the walk's output with what was recorded.
    ///
    /// A converted value is only returned if no violation was recorded.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, SchemaViolation> {
        match value {
            Some(value) if self.items.is_empty() => Ok(value),
            _ => Err(SchemaViolation::from(self.items)),
        }
    }
}

/// A value type that can appear as a record field
pub trait FieldType: Sized {
    /// Check `value` and convert it, recording every violation found
    fn conform(value: &Value, path: &FieldPath, violations: &mut Violations) -> Option<Self>;

    /// Wire representation of the value
    fn to_value(&self) -> Value;

    /// Value to use when the field is missing, `None` if the field is required
    fn absent() -> Option<Self> {
        None
    }

    /// Whether the value should be left out of the wire representation
    fn is_unset(&self) -> bool {
        false
    }

    /// Minimal value that passes validation
    fn placeholder() -> Self;
}

/// Look up `key` in `map` and conform it, reporting a missing required field
pub fn conform_member<T: FieldType>(
    map: &Map<String, Value>,
    key: &str,
    path: &FieldPath,
    violations: &mut Violations,
) -> Option<T> {
    let path = path.child(key);
    match map.get(key) {
        Some(value) => T::conform(value, &path, violations),
        None => {
            let absent = T::absent();
            if absent.is_none() {
                violations.push(ViolationKind::Missing, &path, "Field required");
            }
            absent
        }
    }
}

/// A named record structure with a closed set of fields
pub trait Entity: FieldType + Clone + PartialEq + fmt::Debug {
    /// Name used in `model_type` messages
    const NAME: &'static str;

    /// Wire names of every field, in declaration order
    fn field_names() -> &'static [&'static str];

    /// Wire value of a field, `None` for unknown or unset fields
    fn field_value(&self, name: &str) -> Option<Value>;

    /// Assign a single field, checking the value like full construction does.
    ///
    /// Unknown field names are rejected with `extra_forbidden`.
    fn set_field(&mut self, name: &str, value: &Value) -> Result<(), SchemaViolation>;

    /// Build an instance from a mapping, collecting every violation
    fn from_value(value: &Value) -> Result<Self, SchemaViolation> {
        let mut violations = Violations::new();
        let entity = Self::conform(value, &FieldPath::root(), &mut violations);
        violations.finish(entity)
    }

    /// Whether `name` is a field of this entity
    fn has_field(name: &str) -> bool {
        Self::field_names().contains(&name)
    }
}

impl FieldType for String {
    fn conform(value: &Value, path: &FieldPath, violations: &mut Violations) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => {
                violations.push(ViolationKind::StringType, path, "Input should be a valid string");
                None
            }
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn placeholder() -> Self {
        String::new()
    }
}

impl FieldType for i64 {
    fn conform(value: &Value, path: &FieldPath, violations: &mut Violations) -> Option<Self> {
        let Value::Number(number) = value else {
            violations.push(ViolationKind::IntType, path, "Input should be a valid integer");
            return None;
        };
        if let Some(int) = number.as_i64() {
            return Some(int);
        }
        match number.as_f64() {
            Some(float) if float.fract() != 0.0 => {
                violations.push(
                    ViolationKind::IntFromFloat,
                    path,
                    "Input should be a valid integer, got a number with a fractional part",
                );
                None
            }
            Some(float) if float >= i64::MIN as f64 && float < i64::MAX as f64 => {
                Some(float as i64)
            }
            _ => {
                violations.push(ViolationKind::IntType, path, "Input should be a valid integer");
                None
            }
        }
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    fn placeholder() -> Self {
        0
    }
}

impl FieldType for f64 {
    fn conform(value: &Value, path: &FieldPath, violations: &mut Violations) -> Option<Self> {
        match value.as_f64() {
            Some(float) if value.is_number() => Some(float),
            _ => {
                violations.push(ViolationKind::FloatType, path, "Input should be a valid number");
                None
            }
        }
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }

    /// NaN and infinities have no JSON form
    fn is_unset(&self) -> bool {
        !self.is_finite()
    }

    fn placeholder() -> Self {
        0.0
    }
}

impl FieldType for bool {
    fn conform(value: &Value, path: &FieldPath, violations: &mut Violations) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => {
                violations.push(ViolationKind::BoolType, path, "Input should be a valid boolean");
                None
            }
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn placeholder() -> Self {
        false
    }
}

/// Free-form mapping, used for the `additional` escape hatch
impl FieldType for Map<String, Value> {
    fn conform(value: &Value, path: &FieldPath, violations: &mut Violations) -> Option<Self> {
        match value {
            Value::Object(map) => Some(map.clone()),
            _ => {
                violations.push(ViolationKind::DictType, path, "Input should be a valid dictionary");
                None
            }
        }
    }

    fn to_value(&self) -> Value {
        Value::Object(self.clone())
    }

    fn placeholder() -> Self {
        Map::new()
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    fn conform(value: &Value, path: &FieldPath, violations: &mut Violations) -> Option<Self> {
        let Value::Array(items) = value else {
            violations.push(ViolationKind::ListType, path, "Input should be a valid list");
            return None;
        };
        let mut converted = Vec::with_capacity(items.len());
        let mut complete = true;
        for (index, item) in items.iter().enumerate() {
            match T::conform(item, &path.child_index(index), violations) {
                Some(item) => converted.push(item),
                None => complete = false,
            }
        }
        complete.then_some(converted)
    }

    fn to_value(&self) -> Value {
        Value::Array(
            self.iter()
                .filter(|item| !item.is_unset())
                .map(FieldType::to_value)
                .collect(),
        )
    }

    fn placeholder() -> Self {
        vec![T::placeholder()]
    }
}

impl<T: FieldType> FieldType for Option<T> {
    fn conform(value: &Value, path: &FieldPath, violations: &mut Violations) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }
        T::conform(value, path, violations).map(Some)
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn absent() -> Option<Self> {
        Some(None)
    }

    fn is_unset(&self) -> bool {
        self.as_ref().map_or(true, FieldType::is_unset)
    }

    fn placeholder() -> Self {
        None
    }
}

/// A syntactically valid absolute URI, kept exactly as supplied
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uri(String);

impl Default for Uri {
    fn default() -> Self {
        Self(PLACEHOLDER_URI.to_string())
    }
}

impl Uri {
    /// Parse and keep `input` verbatim if it is a valid absolute URI
    pub fn parse<S: Into<String>>(input: S) -> Result<Self, url::ParseError> {
        let input = input.into();
        url::Url::parse(&input)?;
        Ok(Self(input))
    }

    /// The URI as supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parsed form, when it is needed for inspection
    pub fn to_url(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.0)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Uri {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FieldType for Uri {
    fn conform(value: &Value, path: &FieldPath, violations: &mut Violations) -> Option<Self> {
        let Value::String(input) = value else {
            violations.push(ViolationKind::UrlType, path, "URL input should be a string or URL");
            return None;
        };
        if input.is_empty() {
            violations.push(
                ViolationKind::UrlParsing,
                path,
                "Input should be a valid URL, input is empty",
            );
            return None;
        }
        match Uri::parse(input.as_str()) {
            Ok(uri) => Some(uri),
            Err(err) => {
                violations.push(
                    ViolationKind::UrlParsing,
                    path,
                    format!("Input should be a valid URL, {}", err),
                );
                None
            }
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }

    fn placeholder() -> Self {
        Self(PLACEHOLDER_URI.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check<T: FieldType>(value: Value) -> Result<T, SchemaViolation> {
        let mut violations = Violations::new();
        let converted = T::conform(&value, &FieldPath::root().child("f"), &mut violations);
        violations.finish(converted)
    }

    #[test]
    fn test_string_rejects_numbers() {
        let err = check::<String>(json!(17)).unwrap_err();
        assert_eq!(err.to_string(), "\nstring_type: f input should be a valid string");
    }

    #[test]
    fn test_integer_accepts_integral_floats() {
        assert_eq!(check::<i64>(json!(3)).unwrap(), 3);
        assert_eq!(check::<i64>(json!(3.0)).unwrap(), 3);
        let err = check::<i64>(json!(3.5)).unwrap_err();
        assert!(err.contains(ViolationKind::IntFromFloat, "f"));
        let err = check::<i64>(json!("3")).unwrap_err();
        assert!(err.contains(ViolationKind::IntType, "f"));
    }

    #[test]
    fn test_float_accepts_integers() {
        assert_eq!(check::<f64>(json!(2)).unwrap(), 2.0);
        assert!(check::<f64>(json!("2.0")).is_err());
    }

    #[test]
    fn test_bool_is_strict() {
        assert!(check::<bool>(json!(true)).unwrap());
        assert!(check::<bool>(json!(1)).is_err());
    }

    #[test]
    fn test_list_reports_every_bad_element() {
        let err = check::<Vec<String>>(json!(["a", 1, "b", false])).unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.contains(ViolationKind::StringType, "f.1"));
        assert!(err.contains(ViolationKind::StringType, "f.3"));
    }

    #[test]
    fn test_list_rejects_objects() {
        let err = check::<Vec<String>>(json!({"a": "b"})).unwrap_err();
        assert_eq!(err.to_string(), "\nlist_type: f input should be a valid list");
    }

    #[test]
    fn test_option_accepts_null() {
        assert_eq!(check::<Option<String>>(Value::Null).unwrap(), None);
        assert_eq!(
            check::<Option<String>>(json!("x")).unwrap(),
            Some("x".to_string())
        );
    }

    #[test]
    fn test_uri_validation() {
        let err = check::<Uri>(json!("bad_url")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\nurl_parsing: f input should be a valid url, relative url without a base"
        );
        let err = check::<Uri>(json!("")).unwrap_err();
        assert!(err.to_string().ends_with("input is empty"));
        let err = check::<Uri>(json!(5)).unwrap_err();
        assert!(err.contains(ViolationKind::UrlType, "f"));

        let uri = check::<Uri>(json!("http://www.example.com")).unwrap();
        assert_eq!(uri.as_str(), "http://www.example.com");
    }

    #[test]
    fn test_uri_placeholder_is_valid() {
        assert!(Uri::parse(PLACEHOLDER_URI).is_ok());
        assert_eq!(Uri::default(), Uri::placeholder());
        assert!(check::<Uri>(Uri::default().to_value()).is_ok());
    }

    #[test]
    fn test_non_finite_floats_are_unset() {
        assert!(f64::NAN.is_unset());
        assert!(f64::INFINITY.is_unset());
        assert!(!1.5f64.is_unset());
        assert!(Some(f64::NAN).is_unset());
        assert_eq!(
            vec![1.0, f64::NAN, 2.0].to_value(),
            json!([1.0, 2.0])
        );
    }

    #[test]
    fn test_missing_member() {
        let map = Map::new();
        let mut violations = Violations::new();
        let required: Option<String> =
            conform_member(&map, "idno", &FieldPath::root(), &mut violations);
        let optional: Option<Option<String>> =
            conform_member(&map, "doi", &FieldPath::root(), &mut violations);
        assert!(required.is_none());
        assert_eq!(optional, Some(None));
        let err = violations.finish(Some(())).unwrap_err();
        assert_eq!(err.to_string(), "\nmissing: idno field required");
    }
}
