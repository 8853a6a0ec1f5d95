//! Declarative field validation.
//!
//! Rules are plain data: a field name, a message and a predicate over the
//! whole input. A [`Validator`] evaluates every rule and reports all failing
//! fields at once. Within one field evaluation stops at the first failing
//! rule, so an empty `link` reports "is required" and not also "must be a URL".

use std::fmt;

type Check<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

struct Rule<T> {
    field: &'static str,
    message: String,
    check: Check<T>,
}

/// Ordered rule table for one input type.
pub struct Validator<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Default for Validator<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T> Validator<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule<F>(mut self, field: &'static str, message: impl Into<String>, check: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule { field, message: message.into(), check: Box::new(check) });
        self
    }

    pub fn validate(&self, input: &T) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for rule in &self.rules {
            if errors.has_field(rule.field) {
                continue;
            }
            if !(rule.check)(input) {
                errors.push(rule.field, rule.message.clone());
            }
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every failed rule of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// A single failure, for inputs rejected before any rule could run
    /// (e.g. an undecodable body).
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError { field, message: message.into() });
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Non-blank string.
pub fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Absolute URL with a scheme and a host.
pub fn is_url(s: &str) -> bool {
    match url::Url::parse(s.trim()) {
        Ok(u) => u.has_host(),
        Err(_) => false,
    }
}

pub fn max_chars(s: &str, max: usize) -> bool {
    s.chars().count() <= max
}

/// ASCII letters, digits, `-` and `_`; at least one character.
pub fn is_key(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        name: String,
        link: String,
    }

    fn validator() -> Validator<Pair> {
        Validator::new()
            .rule("name", "is required", |p: &Pair| is_present(&p.name))
            .rule("link", "is required", |p: &Pair| is_present(&p.link))
            .rule("link", "must be a URL", |p: &Pair| is_url(&p.link))
    }

    #[test]
    fn valid_input_passes() {
        let p = Pair { name: "CafeWiFi".into(), link: "https://example.com".into() };
        assert!(validator().validate(&p).is_ok());
    }

    #[test]
    fn reports_every_failing_field() {
        let p = Pair { name: " ".into(), link: "not a url".into() };
        let err = validator().validate(&p).unwrap_err();
        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.to_string(), "name: is required; link: must be a URL");
    }

    #[test]
    fn stops_at_first_failure_per_field() {
        let p = Pair { name: "x".into(), link: String::new() };
        let err = validator().validate(&p).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].message, "is required");
    }

    #[test]
    fn url_needs_scheme_and_host() {
        assert!(is_url("https://example.com/login"));
        assert!(is_url("http://192.168.0.1"));
        assert!(!is_url("example.com"));
        assert!(!is_url("mailto:someone@example.com"));
        assert!(!is_url(""));
    }

    #[test]
    fn key_charset() {
        assert!(is_key("tokyo-shibuya_01"));
        assert!(!is_key("tokyo shibuya"));
        assert!(!is_key(""));
        assert!(!is_key("渋谷"));
    }

    #[test]
    fn max_chars_counts_characters_not_bytes() {
        assert!(max_chars("渋谷", 2));
        assert!(!max_chars("abc", 2));
    }
}
