/*
[INPUT]:  Request DTO payloads and their declared field rules
[OUTPUT]: Field-level validation errors, explicit payload tables
[POS]:    Data layer - request validation before dispatch
[UPDATE]: When adding new rule kinds or request DTOs
*/

use serde_json::{Map, Value};
use thiserror::Error;
use validator::{ValidateEmail, ValidateLength, ValidateRange};

/// Declarative constraint applied to one payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present, non-null, not a blank string, not an empty array
    Required,
    /// May be absent or null; remaining rules only apply to a present value
    Nullable,
    String,
    Integer,
    Boolean,
    Array,
    Object,
    Email,
    /// String value must be one of the listed options
    In(&'static [&'static str]),
    /// Max characters for strings, max length for arrays, max value for numbers
    Max(usize),
    /// Apply the inner rule to every element of an array
    Each(&'static Rule),
}

/// Ordered field name → rules table returned by [`RequestDto::rules`].
pub type FieldRules = Vec<(&'static str, Vec<Rule>)>;

/// Validation failures keyed by field, in rule declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.summary())]
pub struct ValidationErrors {
    fields: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.fields.push((field, vec![message])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of the violated fields
    pub fn fields(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Messages recorded for one field
    pub fn messages(&self, field: &str) -> &[String] {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field)
    }

    fn summary(&self) -> String {
        self.fields
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Contract shared by every outbound request shape.
pub trait RequestDto {
    /// Field rules checked by [`RequestDto::validate`]
    fn rules(&self) -> FieldRules;

    /// Explicit field → key table; unset optional fields are left out
    fn to_payload(&self) -> Map<String, Value>;

    /// Check the serialized payload against [`RequestDto::rules`]
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_payload(&self.to_payload(), &self.rules())
    }
}

/// Run a rules table against a payload map.
pub fn validate_payload(
    payload: &Map<String, Value>,
    rules: &FieldRules,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for (field, field_rules) in rules {
        let value = payload.get(*field).filter(|v| !v.is_null());

        if field_rules.contains(&Rule::Required) && !is_filled(value) {
            errors.add(*field, format!("The {} field is required.", display_name(field)));
            continue;
        }

        let Some(value) = value else {
            continue;
        };

        for rule in field_rules {
            for (name, message) in check_rule(field, value, rule) {
                errors.add(name, message);
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

/// Violations of one rule as `(field, message)` pairs; `Each` reports
/// under `field.index`.
fn check_rule(field: &str, value: &Value, rule: &Rule) -> Vec<(String, String)> {
    let name = display_name(field);
    let message = match rule {
        Rule::Required | Rule::Nullable => None,
        Rule::String => (!value.is_string()).then(|| format!("The {name} field must be a string.")),
        Rule::Integer => (!(value.is_i64() || value.is_u64()))
            .then(|| format!("The {name} field must be an integer.")),
        Rule::Boolean => {
            (!value.is_boolean()).then(|| format!("The {name} field must be true or false."))
        }
        Rule::Array => (!value.is_array()).then(|| format!("The {name} field must be an array.")),
        Rule::Object => {
            (!value.is_object()).then(|| format!("The {name} field must be an object."))
        }
        Rule::Email => {
            let valid = value.as_str().is_some_and(|s| s.validate_email());
            (!valid).then(|| format!("The {name} field must be a valid email address."))
        }
        Rule::In(options) => {
            let valid = value.as_str().is_some_and(|s| options.contains(&s));
            (!valid).then(|| format!("The selected {name} is invalid."))
        }
        Rule::Max(max) => check_max(&name, value, *max),
        Rule::Each(inner) => {
            let items = value.as_array().map(Vec::as_slice).unwrap_or(&[]);
            return items
                .iter()
                .enumerate()
                .flat_map(|(index, item)| check_rule(&format!("{field}.{index}"), item, inner))
                .collect();
        }
    };
    message
        .map(|message| (field.to_string(), message))
        .into_iter()
        .collect()
}

fn check_max(name: &str, value: &Value, max: usize) -> Option<String> {
    let limit = max as u64;
    match value {
        Value::String(s) if !s.as_str().validate_length(None, Some(limit), None) => Some(format!(
            "The {name} field must not be greater than {max} characters."
        )),
        Value::Array(items) if !items.validate_length(None, Some(limit), None) => Some(format!(
            "The {name} field must not have more than {max} items."
        )),
        Value::Number(n) if !number_within(n, max) => {
            Some(format!("The {name} field must not be greater than {max}."))
        }
        _ => None,
    }
}

fn number_within(n: &serde_json::Number, max: usize) -> bool {
    if let Some(i) = n.as_i64() {
        i.validate_range(None, Some(i64::try_from(max).unwrap_or(i64::MAX)), None, None)
    } else if let Some(u) = n.as_u64() {
        u.validate_range(None, Some(max as u64), None, None)
    } else {
        n.as_f64()
            .is_none_or(|f| f.validate_range(None, Some(max as f64), None, None))
    }
}

fn display_name(field: &str) -> String {
    field.replace('_', " ")
}

/// Builder for the explicit per-DTO payload tables.
#[derive(Debug, Default)]
pub struct Payload {
    map: Map<String, Value>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always-present field
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.map.insert(key.to_string(), value.into());
        self
    }

    /// Field emitted only when set
    pub fn optional<T: Into<Value>>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.map.insert(key.to_string(), value.into());
        }
        self
    }

    /// Nested request shape, emitted as its own payload map
    pub fn nested(mut self, key: &str, dto: Option<&dyn RequestDto>) -> Self {
        if let Some(dto) = dto {
            self.map.insert(key.to_string(), Value::Object(dto.to_payload()));
        }
        self
    }

    /// Remove a key, used when a reshaped field replaces an alias
    pub fn without(mut self, key: &str) -> Self {
        self.map.shift_remove(key);
        self
    }

    pub fn build(self) -> Map<String, Value> {
        self.map
    }
}
