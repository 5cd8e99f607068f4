//! Schema and content checks for recipe documents.
//!
//! Validation works on the raw YAML tree rather than [`Recipe`] so that it
//! can report every problem in a file instead of stopping at the first
//! field serde refuses.
//!
//! [`Recipe`]: crate::Recipe

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::Value;

use crate::error::RecipeError;
use crate::recipe::{Glass, Preparation, Served, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("WARNING"),
            Severity::Error => f.write_str("ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Everything found wrong with one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().map(|d| d.message.as_str())
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    fn error(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
        });
    }
}

/// Read and validate one recipe file.
///
/// A file that is not valid YAML yields a report with a single error; only
/// failing to read the file is an `Err`.
pub fn validate_file(path: impl AsRef<Path>) -> Result<Report, RecipeError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| RecipeError::io(path, e))?;
    match serde_yaml::from_str::<Value>(&contents) {
        Ok(document) => Ok(validate(&document)),
        Err(e) => {
            let mut report = Report::default();
            report.error(format!("The YAML file could not be loaded: {e}"));
            Ok(report)
        }
    }
}

/// Check a parsed document against the recipe schema and content rules.
pub fn validate(document: &Value) -> Report {
    let mut report = Report::default();
    if !document.is_mapping() {
        report.error("A recipe must be a YAML mapping.");
        return report;
    }

    check_title(&mut report, field(document, "title"));
    check_version(&mut report, field(document, "version"));
    check_ingredients(&mut report, field(document, "ingredients"));
    check_instructions(&mut report, field(document, "instructions"));

    if let Some(value) = field(document, "description") {
        match value.as_str() {
            None => report.error("Description must be a string."),
            Some(text) if char_len(text) < 40 => report.warning("Description is short."),
            Some(_) => {}
        }
    }

    if let Some(value) = field(document, "yield") {
        match value.as_i64() {
            None => report.error("Failed to parse yield as an integer."),
            Some(count) if count < 1 => {
                report.error("Yield should be a positive, non-zero integer.")
            }
            Some(_) => {}
        }
    }

    check_text_length(&mut report, field(document, "author"), "Author", Some(8), Some(100));
    check_text_length(&mut report, field(document, "source"), "Source", Some(10), Some(120));
    check_text_length(&mut report, field(document, "notes"), "Notes", Some(10), None);

    check_choice::<Preparation>(
        &mut report,
        field(document, "preparation"),
        "Preparation",
        &names(&Preparation::ALL, Preparation::as_str),
    );
    check_choice::<Served>(
        &mut report,
        field(document, "served"),
        "Served",
        &names(&Served::ALL, Served::as_str),
    );
    check_choice::<Glass>(
        &mut report,
        field(document, "glass"),
        "Glass",
        &names(&Glass::ALL, Glass::as_str),
    );

    report
}

fn check_title(report: &mut Report, title: Option<&Value>) {
    let Some(title) = title else {
        report.error("Title is a required attribute.");
        return;
    };
    match title.as_str() {
        None => report.error("Title should be a plain text string."),
        Some(text) if char_len(text) < 4 => report.warning("Title is a little short."),
        Some(text) if char_len(text) > 30 => report.warning("Title is a little long."),
        Some(_) => {}
    }
}

fn check_version(report: &mut Report, version: Option<&Value>) {
    let Some(version) = version else {
        report.error("A version number is required.  When in doubt, start at 1.");
        return;
    };
    match version.as_i64() {
        None => report.error("Version number should be an integer."),
        Some(0) => report.error("A version number is required.  When in doubt, start at 1."),
        Some(v) if v < 1 => report.error("The version number should be a non-zero, positive integer."),
        Some(_) => {}
    }
}

fn check_ingredients(report: &mut Report, ingredients: Option<&Value>) {
    let Some(ingredients) = ingredients else {
        report.error("Ingredients is a required attribute.");
        return;
    };
    let Some(list) = ingredients.as_sequence() else {
        report.error("Ingredients should be a list.");
        return;
    };
    if list.is_empty() {
        report.error("Ingredients is a required attribute.");
        return;
    }

    for item in list {
        let Some(name) = field(item, "ingredient").and_then(Value::as_str) else {
            report.error("One or more ingredients are missing an \"ingredient\" attribute.");
            continue;
        };

        if let Some(quantity) = field(item, "quantity") {
            match quantity.as_f64() {
                None => report.error(format!("Ingredient {name} quantity is not a valid number.")),
                Some(q) if q <= 0.0 => report.error("Ingredient quantity must be greater than zero."),
                Some(_) => {}
            }
        }

        if let Some(unit) = field(item, "unit") {
            if parse_choice::<Unit>(unit).is_none() {
                report.error(format!(
                    "Ingredient {name} unit {} is not one of: {}.",
                    describe(unit),
                    names(&Unit::ALL, Unit::as_str)
                ));
            }
        }

        for key in ["notes", "suggested"] {
            if field(item, key).is_some_and(|v| !v.is_string()) {
                report.error(format!("Ingredient {name} {key} should be a string."));
            }
        }

        if let Some(examples) = field(item, "examples") {
            match examples.as_sequence() {
                None => report.error(format!("Ingredient {name} examples should be a list.")),
                Some(examples) => {
                    for example in examples.iter().filter(|e| !e.is_string()) {
                        report.error(format!("Example ingredient {} is not a string.", describe(example)));
                    }
                }
            }
        }
    }
}

fn check_instructions(report: &mut Report, instructions: Option<&Value>) {
    let Some(instructions) = instructions else {
        report.error("Instructions are a required attribute.");
        return;
    };
    let Some(list) = instructions.as_sequence() else {
        report.error("Recipe instructions must be a list.");
        return;
    };
    if list.is_empty() {
        report.error("Instructions are a required attribute.");
        return;
    }
    for (idx, step) in list.iter().enumerate() {
        if !step.is_string() {
            report.error(format!(
                "Instruction #{} \"{}\" is not a string.",
                idx + 1,
                describe(step)
            ));
        }
    }
}

fn check_text_length(
    report: &mut Report,
    value: Option<&Value>,
    label: &str,
    min: Option<usize>,
    max: Option<usize>,
) {
    let Some(value) = value else {
        return;
    };
    let Some(text) = value.as_str() else {
        report.error(format!("{label} must be a string."));
        return;
    };
    let len = char_len(text);
    if min.is_some_and(|min| len < min) {
        report.warning(format!("{label} is short."));
    } else if max.is_some_and(|max| len > max) {
        report.warning(format!("{label} is long."));
    }
}

fn check_choice<T: DeserializeOwned>(
    report: &mut Report,
    value: Option<&Value>,
    label: &str,
    allowed: &str,
) {
    if let Some(value) = value {
        if parse_choice::<T>(value).is_none() {
            report.error(format!("{label} {} is not one of: {allowed}.", describe(value)));
        }
    }
}

fn parse_choice<T: DeserializeOwned>(value: &Value) -> Option<T> {
    serde_yaml::from_value(value.clone()).ok()
}

/// A field that is present and not empty. Null values and empty strings
/// count as absent.
fn field<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    match document.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        value => Some(value),
    }
}

fn names<T>(all: &[T], as_str: fn(&T) -> &'static str) -> String {
    all.iter().map(as_str).collect::<Vec<_>>().join(", ")
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "?".to_string()),
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
