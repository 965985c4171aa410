//! Placeholder substitution for code templates

use std::collections::HashMap;
use std::fmt;

/// Value substituted for a placeholder, rendered through its text form
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    Str(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
}

impl fmt::Display for TemplateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateValue::Str(s) => write!(f, "{}", s),
            TemplateValue::Integer(n) => write!(f, "{}", n),
            TemplateValue::Number(n) => write!(f, "{}", n),
            TemplateValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Str(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Str(value)
    }
}

impl From<i32> for TemplateValue {
    fn from(value: i32) -> Self {
        TemplateValue::Integer(value.into())
    }
}

impl From<i64> for TemplateValue {
    fn from(value: i64) -> Self {
        TemplateValue::Integer(value)
    }
}

impl From<f64> for TemplateValue {
    fn from(value: f64) -> Self {
        TemplateValue::Number(value)
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        TemplateValue::Boolean(value)
    }
}

/// Placeholder name to value mapping, keys unique
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateValues {
    values: HashMap<String, TemplateValue>,
}

impl TemplateValues {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<TemplateValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value, replacing any previous value under the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<TemplateValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a value by placeholder name
    pub fn get(&self, name: &str) -> Option<&TemplateValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<TemplateValue>> FromIterator<(K, V)> for TemplateValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = TemplateValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

/// Substitute `{name}` placeholders in a template with their mapped values
///
/// Placeholder names are ASCII word characters between single braces. Every
/// occurrence of a mapped placeholder is replaced with the value's text form.
/// Placeholders with no mapping entry stay in the output verbatim, so
/// optional placeholders can simply be omitted from the mapping. Braces that
/// do not form a well-formed placeholder are literal text; there is no
/// nesting and no escaping.
///
/// The substitution is pure: equal inputs always produce equal output.
pub fn render(template: &str, values: &TemplateValues) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match placeholder_name(after) {
            Some(name) => {
                match values.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Leading name of a well-formed placeholder body `name}...`, if any
fn placeholder_name(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !c.is_ascii_alphanumeric() && c != '_')?;
    if end == 0 || !s[end..].starts_with('}') {
        return None;
    }
    Some(&s[..end])
}
