//! Builds a [`TestSuite`] from the YAML specification document.
//!
//! The document is a mapping of category name to a sequence of case
//! mappings. Missing categories are empty. Anything with the wrong shape is a
//! fatal [`GenError::Shape`] naming the offending location, e.g.
//! `duration[4].input.seconds`.

use std::fmt;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::diagnostics::GenError;
use crate::err_shape;
use crate::suite::model::{
    Category, DateRangeCase, DurationCase, DurationOptions, HumanDateCase, NumberLiteral,
    ParseDurationCase, TestSuite, TimeagoCase,
};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Reads and loads a specification file.
pub fn load_suite_file(path: &Path) -> Result<TestSuite, GenError> {
    let text = std::fs::read_to_string(path).map_err(|e| GenError::io("read", path, e))?;
    load_suite_str(&path.display().to_string(), &text)
}

/// Loads a specification from text. `name` labels YAML syntax errors.
pub fn load_suite_str(name: &str, text: &str) -> Result<TestSuite, GenError> {
    let doc: Value = serde_yaml::from_str(text).map_err(|e| GenError::yaml(name, text, e))?;
    suite_from_value(&doc)
}

/// Converts an already-parsed document into a suite.
pub fn suite_from_value(doc: &Value) -> Result<TestSuite, GenError> {
    let root = match doc {
        Value::Null => return Ok(TestSuite::default()),
        Value::Mapping(root) => root,
        _ => {
            return Err(err_shape!(
                "<root>",
                "expected a mapping of category names to case lists"
            ))
        }
    };

    Ok(TestSuite {
        timeago: load_category(root, Category::Timeago, timeago_case)?,
        duration: load_category(root, Category::Duration, duration_case)?,
        parse_duration: load_category(root, Category::ParseDuration, parse_duration_case)?,
        human_date: load_category(root, Category::HumanDate, human_date_case)?,
        date_range: load_category(root, Category::DateRange, date_range_case)?,
    })
}

// ============================================================================
// CATEGORY LOADING
// ============================================================================

fn load_category<T>(
    root: &Mapping,
    category: Category,
    build: fn(&CaseReader<'_>) -> Result<T, GenError>,
) -> Result<Vec<T>, GenError> {
    let cases = match root.get(category.key()) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Sequence(cases)) => cases,
        Some(other) => {
            return Err(err_shape!(
                category,
                format!("expected a sequence of cases, found {}", kind_of(other))
            ))
        }
    };

    cases
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let reader = CaseReader::new(CasePath { category, index }, value)?;
            build(&reader)
        })
        .collect()
}

fn timeago_case(case: &CaseReader<'_>) -> Result<TimeagoCase, GenError> {
    let error = case.error_flag()?;
    Ok(TimeagoCase {
        name: case.name()?,
        timestamp: case.required_number("timestamp")?,
        reference: case.required_number("reference")?,
        output: case.expected(case.output_string()?, error)?,
        error,
    })
}

fn duration_case(case: &CaseReader<'_>) -> Result<DurationCase, GenError> {
    let error = case.error_flag()?;
    Ok(DurationCase {
        name: case.name()?,
        seconds: case.required_number("seconds")?,
        options: case.duration_options()?,
        output: case.expected(case.output_string()?, error)?,
        error,
    })
}

fn parse_duration_case(case: &CaseReader<'_>) -> Result<ParseDurationCase, GenError> {
    let error = case.error_flag()?;
    let input = match case.field("input") {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Number(_)) | Some(Value::Bool(_)) => {
            return Err(err_shape!(
                case.path.field("input"),
                "expected a string",
                help = "quote the value so YAML reads it as text, e.g. input: \"90\""
            ))
        }
        Some(other) => {
            return Err(err_shape!(
                case.path.field("input"),
                format!("expected a string, found {}", kind_of(other))
            ))
        }
    };
    Ok(ParseDurationCase {
        name: case.name()?,
        input,
        output: case.expected(case.output_number()?, error)?,
        error,
    })
}

fn human_date_case(case: &CaseReader<'_>) -> Result<HumanDateCase, GenError> {
    let error = case.error_flag()?;
    Ok(HumanDateCase {
        name: case.name()?,
        timestamp: case.required_number("timestamp")?,
        reference: case.required_number("reference")?,
        output: case.expected(case.output_string()?, error)?,
        error,
    })
}

fn date_range_case(case: &CaseReader<'_>) -> Result<DateRangeCase, GenError> {
    let error = case.error_flag()?;
    Ok(DateRangeCase {
        name: case.name()?,
        start: case.required_number("start")?,
        end: case.required_number("end")?,
        output: case.expected(case.output_string()?, error)?,
        error,
    })
}

// ============================================================================
// CASE READER
// ============================================================================

/// Location of a case in the document, rendered as `category[index]`.
#[derive(Debug, Clone, Copy)]
struct CasePath {
    category: Category,
    index: usize,
}

impl CasePath {
    fn field(&self, name: &str) -> String {
        format!("{self}.{name}")
    }

    fn input_field(&self, name: &str) -> String {
        format!("{self}.input.{name}")
    }
}

impl fmt::Display for CasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.category, self.index)
    }
}

/// Typed field access over one case mapping.
struct CaseReader<'a> {
    path: CasePath,
    case: &'a Mapping,
}

impl<'a> CaseReader<'a> {
    fn new(path: CasePath, value: &'a Value) -> Result<Self, GenError> {
        match value {
            Value::Mapping(case) => Ok(Self { path, case }),
            other => Err(err_shape!(
                path,
                format!("expected a case mapping, found {}", kind_of(other))
            )),
        }
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.case.get(key)
    }

    /// Looks up a field of `input`. A missing or null `input` behaves like an
    /// empty mapping.
    fn input_field(&self, key: &str) -> Result<Option<&'a Value>, GenError> {
        match self.field("input") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Mapping(input)) => Ok(input.get(key)),
            Some(other) => Err(err_shape!(
                self.path.field("input"),
                format!("expected a mapping, found {}", kind_of(other))
            )),
        }
    }

    fn name(&self) -> Result<String, GenError> {
        match self.field("name") {
            Some(Value::String(name)) => Ok(name.clone()),
            None | Some(Value::Null) => Err(err_shape!(self.path.field("name"), "missing test name")),
            Some(other) => Err(err_shape!(
                self.path.field("name"),
                format!("expected a string, found {}", kind_of(other)),
                help = "quote the name"
            )),
        }
    }

    fn error_flag(&self) -> Result<bool, GenError> {
        bool_value(self.field("error"), || self.path.field("error"))
    }

    fn required_number(&self, key: &str) -> Result<NumberLiteral, GenError> {
        match self.input_field(key)? {
            Some(Value::Number(n)) => Ok(NumberLiteral::from_yaml(n)),
            None | Some(Value::Null) => Err(err_shape!(
                self.path.input_field(key),
                "missing required number"
            )),
            Some(other) => Err(err_shape!(
                self.path.input_field(key),
                format!("expected a number, found {}", kind_of(other))
            )),
        }
    }

    fn output_string(&self) -> Result<Option<String>, GenError> {
        match self.field("output") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(other) => Err(err_shape!(
                self.path.field("output"),
                format!("expected a string, found {}", kind_of(other))
            )),
        }
    }

    fn output_number(&self) -> Result<Option<NumberLiteral>, GenError> {
        match self.field("output") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(Some(NumberLiteral::from_yaml(n))),
            Some(other) => Err(err_shape!(
                self.path.field("output"),
                format!("expected a number, found {}", kind_of(other))
            )),
        }
    }

    /// A case that does not expect an error must say what it expects.
    fn expected<T>(&self, output: Option<T>, error: bool) -> Result<Option<T>, GenError> {
        if output.is_none() && !error {
            return Err(err_shape!(
                self.path,
                "case has neither `output` nor `error: true`"
            ));
        }
        Ok(output)
    }

    fn duration_options(&self) -> Result<Option<DurationOptions>, GenError> {
        let options = match self.input_field("options")? {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Mapping(options)) => options,
            Some(other) => {
                return Err(err_shape!(
                    self.path.input_field("options"),
                    format!("expected a mapping, found {}", kind_of(other))
                ))
            }
        };

        let compact = bool_value(options.get("compact"), || {
            self.path.input_field("options.compact")
        })?;
        let max_units = match options.get("max_units") {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => match n.as_i64() {
                Some(units) => Some(units),
                None => {
                    return Err(err_shape!(
                        self.path.input_field("options.max_units"),
                        format!("expected an integer, found {n}")
                    ))
                }
            },
            Some(other) => {
                return Err(err_shape!(
                    self.path.input_field("options.max_units"),
                    format!("expected an integer, found {}", kind_of(other))
                ))
            }
        };

        Ok(Some(DurationOptions { compact, max_units }))
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn bool_value(value: Option<&Value>, path: impl FnOnce() -> String) -> Result<bool, GenError> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(err_shape!(
            path(),
            format!("expected a boolean, found {}", kind_of(other))
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
