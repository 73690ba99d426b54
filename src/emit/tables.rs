//! Record declarations and static data tables.
//!
//! Each category gets its own struct so field access in the generated
//! driver is checked by the C compiler. Table rows keep specification
//! order, which is also execution order.

use super::literal::{
    flag_literal, int_literal, number_literal, optional_number_literal, optional_string_literal,
    string_literal,
};
use super::CSource;
use crate::suite::{
    Category, DateRangeCase, DurationCase, HumanDateCase, ParseDurationCase, TestSuite,
    TimeagoCase,
};

// ============================================================================
// LAYOUTS
// ============================================================================

/// One struct member: the declaration prefix (type plus any `*`) and name.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub decl: &'static str,
    pub name: &'static str,
}

/// The C shape of one category's records.
#[derive(Debug)]
pub struct RecordLayout {
    pub type_name: &'static str,
    pub table: &'static str,
    pub fields: &'static [Field],
}

impl RecordLayout {
    /// Name of the macro holding the table's logical length.
    pub fn count_macro(&self) -> String {
        format!("{}_COUNT", self.table)
    }
}

const fn field(decl: &'static str, name: &'static str) -> Field {
    Field { decl, name }
}

const STR: &str = "const char *";
const DOUBLE: &str = "double ";
const INT: &str = "int ";

static TIMEAGO: RecordLayout = RecordLayout {
    type_name: "TimeagoTest",
    table: "TIMEAGO_TESTS",
    fields: &[
        field(STR, "name"),
        field(DOUBLE, "timestamp"),
        field(DOUBLE, "reference"),
        field(STR, "output"),
        field(INT, "error"),
    ],
};

static DURATION: RecordLayout = RecordLayout {
    type_name: "DurationTest",
    table: "DURATION_TESTS",
    fields: &[
        field(STR, "name"),
        field(DOUBLE, "seconds"),
        field(INT, "has_options"),
        field(INT, "compact"),
        field(INT, "max_units"),
        field(STR, "output"),
        field(INT, "error"),
    ],
};

static PARSE_DURATION: RecordLayout = RecordLayout {
    type_name: "ParseDurationTest",
    table: "PARSE_DURATION_TESTS",
    fields: &[
        field(STR, "name"),
        field(STR, "input"),
        field(DOUBLE, "output"),
        field(INT, "error"),
    ],
};

static HUMAN_DATE: RecordLayout = RecordLayout {
    type_name: "HumanDateTest",
    table: "HUMAN_DATE_TESTS",
    fields: &[
        field(STR, "name"),
        field(DOUBLE, "timestamp"),
        field(DOUBLE, "reference"),
        field(STR, "output"),
        field(INT, "error"),
    ],
};

static DATE_RANGE: RecordLayout = RecordLayout {
    type_name: "DateRangeTest",
    table: "DATE_RANGE_TESTS",
    fields: &[
        field(STR, "name"),
        field(DOUBLE, "start"),
        field(DOUBLE, "end"),
        field(STR, "output"),
        field(INT, "error"),
    ],
};

pub fn layout(category: Category) -> &'static RecordLayout {
    match category {
        Category::Timeago => &TIMEAGO,
        Category::Duration => &DURATION,
        Category::ParseDuration => &PARSE_DURATION,
        Category::HumanDate => &HUMAN_DATE,
        Category::DateRange => &DATE_RANGE,
    }
}

// ============================================================================
// DECLARATIONS
// ============================================================================

/// `typedef struct { ... } XTest;` for every category.
pub fn emit_record_types() -> String {
    let mut src = CSource::new();
    for category in Category::ALL {
        let layout = layout(category);
        src.line("typedef struct {");
        for f in layout.fields {
            src.line(format!("    {}{};", f.decl, f.name));
        }
        src.line(format!("}} {};", layout.type_name)).blank();
    }
    src.into_string()
}

// ============================================================================
// TABLES
// ============================================================================

/// All five tables. Empty categories still get a table.
pub fn emit_tables(suite: &TestSuite) -> String {
    let mut src = CSource::new();
    emit_timeago_table(&mut src, &suite.timeago);
    emit_duration_table(&mut src, &suite.duration);
    emit_parse_duration_table(&mut src, &suite.parse_duration);
    emit_human_date_table(&mut src, &suite.human_date);
    emit_date_range_table(&mut src, &suite.date_range);
    src.into_string()
}

pub fn emit_timeago_table(src: &mut CSource, cases: &[TimeagoCase]) {
    let rows = cases.iter().map(|t| {
        vec![
            string_literal(&t.name),
            number_literal(&t.timestamp),
            number_literal(&t.reference),
            optional_string_literal(t.output.as_deref()),
            flag_literal(t.error).to_string(),
        ]
    });
    emit_table(src, &TIMEAGO, rows);
}

/// Besides the case fields, each row carries three columns derived from
/// `options`: presence, `compact`, and the `max_units` override (`0` = none).
pub fn emit_duration_table(src: &mut CSource, cases: &[DurationCase]) {
    let rows = cases.iter().map(|t| {
        let options = t.options.clone().unwrap_or_default();
        vec![
            string_literal(&t.name),
            number_literal(&t.seconds),
            flag_literal(t.options.is_some()).to_string(),
            flag_literal(options.compact).to_string(),
            int_literal(options.max_units_column()),
            optional_string_literal(t.output.as_deref()),
            flag_literal(t.error).to_string(),
        ]
    });
    emit_table(src, &DURATION, rows);
}

pub fn emit_parse_duration_table(src: &mut CSource, cases: &[ParseDurationCase]) {
    let rows = cases.iter().map(|t| {
        vec![
            string_literal(&t.name),
            optional_string_literal(t.input.as_deref()),
            optional_number_literal(t.output.as_ref()),
            flag_literal(t.error).to_string(),
        ]
    });
    emit_table(src, &PARSE_DURATION, rows);
}

pub fn emit_human_date_table(src: &mut CSource, cases: &[HumanDateCase]) {
    let rows = cases.iter().map(|t| {
        vec![
            string_literal(&t.name),
            number_literal(&t.timestamp),
            number_literal(&t.reference),
            optional_string_literal(t.output.as_deref()),
            flag_literal(t.error).to_string(),
        ]
    });
    emit_table(src, &HUMAN_DATE, rows);
}

pub fn emit_date_range_table(src: &mut CSource, cases: &[DateRangeCase]) {
    let rows = cases.iter().map(|t| {
        vec![
            string_literal(&t.name),
            number_literal(&t.start),
            number_literal(&t.end),
            optional_string_literal(t.output.as_deref()),
            flag_literal(t.error).to_string(),
        ]
    });
    emit_table(src, &DATE_RANGE, rows);
}

/// ISO C has no empty initializer lists, so an empty table is a single
/// zeroed placeholder whose count macro is `0`.
fn emit_table(
    src: &mut CSource,
    layout: &RecordLayout,
    rows: impl ExactSizeIterator<Item = Vec<String>>,
) {
    let count = layout.count_macro();
    if rows.len() == 0 {
        src.line(format!(
            "static const {} {}[1] = {{{{0}}}};",
            layout.type_name, layout.table
        ));
        src.line(format!("#define {count} 0")).blank();
        return;
    }

    src.line(format!(
        "static const {} {}[] = {{",
        layout.type_name, layout.table
    ));
    for row in rows {
        src.line(format!("    {{{}}},", row.join(", ")));
    }
    src.line("};");
    src.line(format!(
        "#define {count} (sizeof({table}) / sizeof({table}[0]))",
        table = layout.table
    ))
    .blank();
}
