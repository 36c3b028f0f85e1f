//! Property values and the ordered option mapping handed to the preview and code generator

use std::fmt;

use serde_json::{Map, Number, Value};

/// Below this magnitude JavaScript prints numbers in plain decimal notation
const PLAIN_NOTATION_LIMIT: f64 = 1e21;

/// Smallest magnitude JavaScript prints without an exponent
const PLAIN_NOTATION_FLOOR: f64 = 1e-6;

/// A single property value. `Other` holds the default of a property whose
/// declared type the form does not edit.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl PropertyValue {
    /// JSON form used in generated snippets, with numbers written the way
    /// `JSON.stringify` writes them (non-finite numbers become `null`)
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::Number(n) => js_number_text(*n)
                .and_then(|text| text.parse::<Number>().ok())
                .map(Value::Number)
                .unwrap_or(Value::Null),
            PropertyValue::Text(s) => Value::String(s.clone()),
            PropertyValue::Other(value) => value.clone(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) if n.is_nan() => write!(f, "NaN"),
            PropertyValue::Number(n) if n.is_infinite() => {
                write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
            }
            PropertyValue::Number(n) => write!(f, "{}", js_number_text(*n).unwrap_or_default()),
            PropertyValue::Text(s) => write!(f, "{s}"),
            PropertyValue::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Text of a finite number as JavaScript prints it: plain digits below 1e21
/// (no trailing `.0`), exponent form like `1e+21` or `1.5e-7` outside that range.
/// `None` for NaN and infinities.
fn js_number_text(n: f64) -> Option<String> {
    if !n.is_finite() {
        return None;
    }
    if n == 0.0 {
        return Some("0".to_string());
    }

    let magnitude = n.abs();
    if magnitude >= PLAIN_NOTATION_LIMIT {
        return Some(format!("{n:e}").replacen('e', "e+", 1));
    }
    if magnitude < PLAIN_NOTATION_FLOOR {
        return Some(format!("{n:e}"));
    }
    // shortest round-trip digits, and no `.0` on integral values
    Some(format!("{n}"))
}

/// Insertion-ordered mapping from property name to value.
/// Overwriting an existing key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionMap {
    entries: Vec<(String, PropertyValue)>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert or overwrite a value
    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object with keys in insertion order
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect();
        Value::Object(map)
    }
}

impl FromIterator<(String, PropertyValue)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        let mut map = OptionMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Coerce raw input text to a number the way a browser `Number(text)` call does.
/// Unparsable input yields NaN rather than an error.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&text[2..], radix);
    }

    // Rust accepts spellings like "inf" and "NaN" that the browser rejects
    let is_decimal = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !is_decimal {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Digits after a `0x`/`0o`/`0b` prefix. Signs, separators and an empty digit
/// string are NaN; values too large for an integer still come out finite.
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return f64::NAN;
    }

    match u128::from_str_radix(digits, radix) {
        Ok(n) => n as f64,
        Err(_) => digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * radix as f64 + d as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut map = OptionMap::new();
        map.insert("speed", PropertyValue::Number(5.0));
        map.insert("color", PropertyValue::Text("red".to_string()));
        map.insert("speed", PropertyValue::Number(9.0));

        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["speed", "color"]);
        assert_eq!(map.get("speed"), Some(&PropertyValue::Number(9.0)));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_to_json_preserves_insertion_order() {
        let map: OptionMap = vec![
            ("zeta".to_string(), PropertyValue::Number(1.0)),
            ("alpha".to_string(), PropertyValue::Text("a".to_string())),
        ]
        .into_iter()
        .collect();

        let json = map.to_json().to_string();
        assert_eq!(json, r#"{"zeta":1,"alpha":"a"}"#);
    }

    #[test]
    fn test_number_json_matches_javascript() {
        assert_eq!(PropertyValue::Number(12.0).to_json().to_string(), "12");
        assert_eq!(PropertyValue::Number(0.5).to_json().to_string(), "0.5");
        assert_eq!(PropertyValue::Number(-3.0).to_json().to_string(), "-3");
        assert_eq!(PropertyValue::Number(f64::NAN).to_json(), Value::Null);
        assert_eq!(PropertyValue::Number(f64::INFINITY).to_json(), Value::Null);
    }

    #[test]
    fn test_large_and_tiny_numbers_match_javascript() {
        let text = |n: f64| PropertyValue::Number(n).to_json().to_string();
        assert_eq!(text(9_007_199_254_740_992.0), "9007199254740992");
        assert_eq!(text(123_456_789_012_345_680_000.0), "123456789012345680000");
        assert_eq!(text(1e21), "1e+21");
        assert_eq!(text(-2.5e30), "-2.5e+30");
        assert_eq!(text(1.5e-7), "1.5e-7");
        assert_eq!(text(0.000001), "0.000001");
        assert_eq!(text(-0.0), "0");
    }

    #[test]
    fn test_other_value_passes_through() {
        let value = PropertyValue::Other(Value::Bool(true));
        assert_eq!(value.to_json(), Value::Bool(true));
        assert_eq!(value.to_string(), "true");
        assert_eq!(value.as_number(), None);
        assert_eq!(value.as_text(), None);
    }

    #[test]
    fn test_display_values() {
        assert_eq!(PropertyValue::Number(600.0).to_string(), "600");
        assert_eq!(PropertyValue::Number(0.25).to_string(), "0.25");
        assert_eq!(PropertyValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(PropertyValue::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(PropertyValue::Text("01".to_string()).to_string(), "01");
    }

    #[test]
    fn test_coerce_number_decimal() {
        assert_eq!(coerce_number("12"), 12.0);
        assert_eq!(coerce_number("  7.5 "), 7.5);
        assert_eq!(coerce_number("-4"), -4.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number(".5"), 0.5);
    }

    #[test]
    fn test_coerce_number_empty_is_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
    }

    #[test]
    fn test_coerce_number_prefixed_radix() {
        assert_eq!(coerce_number("0x1F"), 31.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert!(coerce_number("0xZZ").is_nan());
    }

    #[test]
    fn test_coerce_number_prefixed_radix_rejects_signs() {
        assert!(coerce_number("0x+1").is_nan());
        assert!(coerce_number("0x-1").is_nan());
        assert!(coerce_number("0b_1").is_nan());
        assert!(coerce_number("0x").is_nan());
        assert!(coerce_number("0b102").is_nan());
    }

    #[test]
    fn test_coerce_number_large_hex_stays_finite() {
        // 2^64, one past u64::MAX
        assert_eq!(coerce_number("0x10000000000000000"), 18_446_744_073_709_551_616.0);

        // 2^132, past u128 as well
        let huge = coerce_number("0x1000000000000000000000000000000000");
        assert!(huge.is_finite());
        assert_eq!(huge, 2f64.powi(132));
    }

    #[test]
    fn test_coerce_number_infinity_spellings() {
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("NaN").is_nan());
    }

    #[test]
    fn test_coerce_number_garbage_is_nan() {
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("12px").is_nan());
        assert!(coerce_number("1_000").is_nan());
    }
}
