// File: src/errors.rs
//
// Error types for Rill scope analysis.
// Provides structured error records with pretty-printed messages and
// a JSON rendering for external tooling. The analyzer records errors;
// nothing here decides when (or whether) they get printed.

use colored::Colorize;
use serde::Serialize;
use std::fmt;

/// The kinds of scope errors the analyzer can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScopeErrorKind {
    /// A name used as a value has no visible binding.
    UndeclaredVariable,
    /// A call targets a name not bound to a function in the global scope.
    UndefinedFunction,
    /// A name declared twice in the identical scope (duplicate parameters
    /// included). Redeclaring in a nested scope is shadowing, not an error.
    VariableRedefined,
    /// A function name declared twice at global scope.
    FunctionRedefined,
}

impl fmt::Display for ScopeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScopeErrorKind::UndeclaredVariable => write!(f, "Undeclared variable"),
            ScopeErrorKind::UndefinedFunction => write!(f, "Undefined function"),
            ScopeErrorKind::VariableRedefined => write!(f, "Variable redefined"),
            ScopeErrorKind::FunctionRedefined => write!(f, "Function redefined"),
        }
    }
}

/// One scope error: what went wrong and the name it went wrong for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScopeError {
    pub kind: ScopeErrorKind,
    pub name: String,
    /// Closest visible name, when one is close enough to be worth offering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ScopeError {
    pub fn new(kind: ScopeErrorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create an undeclared variable error
    pub fn undeclared_variable(name: impl Into<String>) -> Self {
        Self::new(ScopeErrorKind::UndeclaredVariable, name)
    }

    /// Create an undefined function error
    pub fn undefined_function(name: impl Into<String>) -> Self {
        Self::new(ScopeErrorKind::UndefinedFunction, name)
    }

    /// Create a variable redefinition error
    pub fn variable_redefined(name: impl Into<String>) -> Self {
        Self::new(ScopeErrorKind::VariableRedefined, name)
    }

    /// Create a function redefinition error
    pub fn function_redefined(name: impl Into<String>) -> Self {
        Self::new(ScopeErrorKind::FunctionRedefined, name)
    }
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind_str = format!("{}", self.kind);
        write!(f, "{}: {}", kind_str.red().bold(), self.name.bold())?;

        if let Some(ref suggestion) = self.suggestion {
            write!(
                f,
                "\n   {} {}",
                "=".bright_green(),
                format!("Did you mean '{}'?", suggestion).bright_green()
            )?;
        }

        Ok(())
    }
}

impl std::error::Error for ScopeError {}

/// Renders a batch of errors as a JSON array for editors and CI tooling.
pub fn to_json_report(errors: &[ScopeError]) -> String {
    serde_json::to_string_pretty(errors).unwrap_or_else(|_| String::from("[]"))
}

/// Computes the Levenshtein distance between two strings
/// Used for "Did you mean?" suggestions
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Single-row formulation: prev[j] holds the distance between
    // s1[..i] and s2[..j] from the previous iteration of the outer loop.
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();

    for (i, c1) in s1_chars.iter().enumerate() {
        let mut corner = prev[0];
        prev[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            let next = std::cmp::min(
                std::cmp::min(
                    prev[j + 1] + 1, // deletion
                    prev[j] + 1,     // insertion
                ),
                corner + cost, // substitution
            );
            corner = prev[j + 1];
            prev[j + 1] = next;
        }
    }

    prev[s2_chars.len()]
}

/// Find the closest match from a list of candidates using Levenshtein distance
/// Returns None if no good match is found (distance > 3)
pub fn find_closest_match<'a>(target: &str, candidates: &'a [String]) -> Option<&'a str> {
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in candidates {
        let distance = levenshtein_distance(target, candidate);

        // Only consider reasonably close matches (distance <= 3)
        // and prefer shorter distances
        if distance <= 3 && distance < best_distance {
            best_distance = distance;
            best_match = Some(candidate.as_str());
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("count", "count"), 0);
        assert_eq!(levenshtein_distance("count", "cout"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_find_closest_match() {
        let candidates = vec![
            "counter".to_string(),
            "total".to_string(),
            "result".to_string(),
        ];
        assert_eq!(find_closest_match("countr", &candidates), Some("counter"));
        assert_eq!(find_closest_match("zzzzzz", &candidates), None);
        assert_eq!(find_closest_match("x", &[]), None);
    }

    #[test]
    fn test_json_report_shape() {
        let errors = vec![
            ScopeError::undeclared_variable("x"),
            ScopeError::function_redefined("main").with_suggestion("main2"),
        ];
        let report = to_json_report(&errors);
        let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();

        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["kind"], "UndeclaredVariable");
        assert_eq!(entries[0]["name"], "x");
        assert!(entries[0].get("suggestion").is_none());
        assert_eq!(entries[1]["suggestion"], "main2");
    }

    #[test]
    fn test_kind_display_names() {
        assert_eq!(
            ScopeErrorKind::UndeclaredVariable.to_string(),
            "Undeclared variable"
        );
        assert_eq!(
            ScopeErrorKind::FunctionRedefined.to_string(),
            "Function redefined"
        );
    }
}
