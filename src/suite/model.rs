//! Typed test records, one record type per category.
//!
//! A suite is built once from the specification document and is read-only
//! afterwards; the emitters only borrow it.

use serde::Serialize;

// ============================================================================
// CATEGORIES
// ============================================================================

/// One of the five independent test groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Timeago,
    Duration,
    ParseDuration,
    HumanDate,
    DateRange,
}

impl Category {
    /// All categories in emission order.
    pub const ALL: [Category; 5] = [
        Category::Timeago,
        Category::Duration,
        Category::ParseDuration,
        Category::HumanDate,
        Category::DateRange,
    ];

    /// The top-level key of this category in the specification document.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Timeago => "timeago",
            Category::Duration => "duration",
            Category::ParseDuration => "parse_duration",
            Category::HumanDate => "human_date",
            Category::DateRange => "date_range",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// SCALARS
// ============================================================================

/// A number kept as its source text so the emitter never re-rounds it.
///
/// Non-finite values are normalized to the YAML spellings `.inf`, `-.inf`
/// and `.nan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NumberLiteral(String);

impl NumberLiteral {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn from_yaml(number: &serde_yaml::Number) -> Self {
        if number.is_nan() {
            return Self::new(".nan");
        }
        if number.is_infinite() {
            let negative = number.as_f64().is_some_and(|n| n < 0.0);
            return Self::new(if negative { "-.inf" } else { ".inf" });
        }
        Self(number.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// RECORDS
// ============================================================================

/// `timeago(timestamp, reference)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeagoCase {
    pub name: String,
    pub timestamp: NumberLiteral,
    pub reference: NumberLiteral,
    pub output: Option<String>,
    pub error: bool,
}

/// Optional overrides for `duration`. Unset fields fall back to the
/// library defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DurationOptions {
    pub compact: bool,
    pub max_units: Option<i64>,
}

impl DurationOptions {
    /// The value stored in the table's `max_units` column; `0` means no override.
    pub fn max_units_column(&self) -> i64 {
        self.max_units.unwrap_or(0)
    }
}

/// `duration(seconds, options)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationCase {
    pub name: String,
    pub seconds: NumberLiteral,
    pub options: Option<DurationOptions>,
    pub output: Option<String>,
    pub error: bool,
}

/// `parse_duration(text) -> (ok, seconds)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseDurationCase {
    pub name: String,
    pub input: Option<String>,
    pub output: Option<NumberLiteral>,
    pub error: bool,
}

/// `human_date(timestamp, reference)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanDateCase {
    pub name: String,
    pub timestamp: NumberLiteral,
    pub reference: NumberLiteral,
    pub output: Option<String>,
    pub error: bool,
}

/// `date_range(start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRangeCase {
    pub name: String,
    pub start: NumberLiteral,
    pub end: NumberLiteral,
    pub output: Option<String>,
    pub error: bool,
}

// ============================================================================
// SUITE
// ============================================================================

/// Five independent, ordered collections of cases.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestSuite {
    pub timeago: Vec<TimeagoCase>,
    pub duration: Vec<DurationCase>,
    pub parse_duration: Vec<ParseDurationCase>,
    pub human_date: Vec<HumanDateCase>,
    pub date_range: Vec<DateRangeCase>,
}

impl TestSuite {
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Timeago => self.timeago.len(),
            Category::Duration => self.duration.len(),
            Category::ParseDuration => self.parse_duration.len(),
            Category::HumanDate => self.human_date.len(),
            Category::DateRange => self.date_range.len(),
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.len(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `timeago: 3, duration: 0, ...` in emission order.
    pub fn summary(&self) -> String {
        Category::ALL
            .iter()
            .map(|c| format!("{}: {}", c, self.len(*c)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
