//! Contraintes de saisie et leur vérification

use std::cmp::Ordering;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// The raw value of a form entry point, either free text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Number(f64),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Text(text) => write!(f, "{text}"),
            InputValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<String> for InputValue {
    fn from(text: String) -> Self {
        InputValue::Text(text)
    }
}

impl From<&str> for InputValue {
    fn from(text: &str) -> Self {
        InputValue::Text(text.to_owned())
    }
}

impl From<f64> for InputValue {
    fn from(number: f64) -> Self {
        InputValue::Number(number)
    }
}

/// A value together with the constraints it must satisfy.
///
/// String bounds only apply to [`InputValue::Text`] and numeric bounds only
/// to [`InputValue::Number`]; a bound set on the wrong kind of value is
/// skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: InputValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new(value: impl Into<InputValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Exclusive lower bound on the text length
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Exclusive upper bound on the text length
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Inclusive lower bound on the number
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive upper bound on the number
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn is_valid(&self) -> bool {
        validate(self)
    }
}

/// Checks every constraint that applies to the value.
/// Returns true only if all of them hold.
pub fn validate(input: &Validatable) -> bool {
    if input.required && input.value.to_string().trim().is_empty() {
        return false;
    }

    match &input.value {
        InputValue::Text(text) => {
            let length = text.chars().count();

            if input.min_length.is_some_and(|min| length <= min) {
                return false;
            }

            if input.max_length.is_some_and(|max| length >= max) {
                return false;
            }
        }
        InputValue::Number(number) => {
            // NaN compares as None and fails both bounds
            if let Some(min) = input.min {
                if !matches!(number.partial_cmp(&min), Some(Ordering::Greater | Ordering::Equal)) {
                    return false;
                }
            }

            if let Some(max) = input.max {
                if !matches!(number.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal)) {
                    return false;
                }
            }
        }
    }

    true
}

// Decimal literal as a browser number field accepts it: sign, digits with
// an optional dot, optional exponent. ASCII digits only.
static DECIMAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("Failed to compile decimal regex")
});

static RADIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0(?:([xX])[0-9a-fA-F]+|([oO])[0-7]+|([bB])[01]+)$")
        .expect("Failed to compile radix regex")
});

/// Converts the raw content of a number field the way a browser does for
/// `+input.value`: blank is zero, garbage is NaN.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if DECIMAL_REGEX.is_match(trimmed) {
        return trimmed.parse().unwrap_or(f64::NAN);
    }

    if let Some(captures) = RADIX_REGEX.captures(trimmed) {
        let radix = if captures.get(1).is_some() {
            16
        } else if captures.get(2).is_some() {
            8
        } else {
            2
        };
        // Folded in f64 so oversized literals round instead of overflowing
        return trimmed[2..]
            .chars()
            .filter_map(|digit| digit.to_digit(radix))
            .fold(0.0, |value, digit| value * f64::from(radix) + f64::from(digit));
    }

    f64::NAN
}
