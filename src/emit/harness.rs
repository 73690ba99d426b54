//! The runtime half of the generated program: includes, comparators and
//! the `main` driver.
//!
//! Comparators return a failure count (0 or 1) and print one `FAIL:` line
//! to stderr per mismatch. `expect_string` owns the string returned by the
//! library and frees it on every path.

use super::tables::layout;
use super::CSource;
use crate::suite::Category;

/// Absolute tolerance used by `expect_number`.
pub const NUMBER_TOLERANCE: &str = "1e-6";

pub const SUCCESS_MESSAGE: &str = "All tests passed.";

pub fn emit_includes(header: &str) -> String {
    let mut src = CSource::new();
    src.lines(&[
        "#include <math.h>",
        "#include <stdio.h>",
        "#include <stdlib.h>",
        "#include <string.h>",
    ]);
    src.line(format!("#include \"{header}\"")).blank();
    src.into_string()
}

pub fn emit_comparators() -> String {
    let mut src = CSource::new();
    emit_expect_string(&mut src);
    emit_expect_number(&mut src);
    src.into_string()
}

fn emit_expect_string(src: &mut CSource) {
    src.lines(&[
        "static int expect_string(const char *name, const char *got, const char *expected, int expect_error) {",
        "    if (expect_error) {",
        "        if (got != NULL) {",
        "            fprintf(stderr, \"FAIL: %s (expected error, got '%s')\\n\", name, got);",
        "            free((void *)got);",
        "            return 1;",
        "        }",
        "        return 0;",
        "    }",
        "    if (got == NULL) {",
        "        fprintf(stderr, \"FAIL: %s (expected '%s', got error)\\n\", name, expected);",
        "        return 1;",
        "    }",
        "    if (strcmp(got, expected) != 0) {",
        "        fprintf(stderr, \"FAIL: %s (expected '%s', got '%s')\\n\", name, expected, got);",
        "        free((void *)got);",
        "        return 1;",
        "    }",
        "    free((void *)got);",
        "    return 0;",
        "}",
    ])
    .blank();
}

fn emit_expect_number(src: &mut CSource) {
    src.lines(&[
        "static int expect_number(const char *name, int ok, double got, double expected, int expect_error) {",
        "    if (expect_error) {",
        "        if (ok) {",
        "            fprintf(stderr, \"FAIL: %s (expected error, got %.0f)\\n\", name, got);",
        "            return 1;",
        "        }",
        "        return 0;",
        "    }",
        "    if (!ok) {",
        "        fprintf(stderr, \"FAIL: %s (expected %.0f, got error)\\n\", name, expected);",
        "        return 1;",
        "    }",
    ]);
    src.line(format!("    if (fabs(got - expected) > {NUMBER_TOLERANCE}) {{"));
    src.lines(&[
        "        fprintf(stderr, \"FAIL: %s (expected %.0f, got %.0f)\\n\", name, expected, got);",
        "        return 1;",
        "    }",
        "    return 0;",
        "}",
    ])
    .blank();
}

// ============================================================================
// DRIVER
// ============================================================================

/// `main`: runs every table in order and exits 0 only if nothing failed.
pub fn emit_driver() -> String {
    let mut src = CSource::new();
    src.line("int main(void) {");
    src.line("    int failures = 0;").blank();

    for category in Category::ALL {
        open_loop(&mut src, category);
        src.lines(loop_body(category));
        src.line("    }").blank();
    }

    src.line("    if (failures == 0) {");
    src.line(format!("        printf(\"{SUCCESS_MESSAGE}\\n\");"));
    src.lines(&[
        "        return 0;",
        "    }",
        "    printf(\"%d tests failed.\\n\", failures);",
        "    return 1;",
        "}",
    ]);
    src.into_string()
}

fn open_loop(src: &mut CSource, category: Category) {
    let layout = layout(category);
    src.line(format!(
        "    for (size_t i = 0; i < {}; i++) {{",
        layout.count_macro()
    ));
    src.line(format!(
        "        const {} *t = &{}[i];",
        layout.type_name, layout.table
    ));
}

fn loop_body(category: Category) -> &'static [&'static str] {
    match category {
        Category::Timeago => &[
            "        char *result = timeago(ww_timestamp_from_unix(t->timestamp), ww_timestamp_from_unix(t->reference));",
            "        failures += expect_string(t->name, result, t->output, t->error);",
        ],
        // Always start from the library defaults; overrides apply only when
        // the case declared options, and unset fields keep the default.
        Category::Duration => &[
            "        ww_duration_options options = ww_duration_options_default();",
            "        if (t->has_options) {",
            "            if (t->compact == 1) {",
            "                options.compact = 1;",
            "            }",
            "            if (t->max_units > 0) {",
            "                options.max_units = t->max_units;",
            "            }",
            "        }",
            "        char *result = duration(t->seconds, &options);",
            "        failures += expect_string(t->name, result, t->output, t->error);",
        ],
        Category::ParseDuration => &[
            "        double value = 0.0;",
            "        int ok = parse_duration(t->input, &value);",
            "        failures += expect_number(t->name, ok, value, t->output, t->error);",
        ],
        Category::HumanDate => &[
            "        char *result = human_date(ww_timestamp_from_unix(t->timestamp), ww_timestamp_from_unix(t->reference));",
            "        failures += expect_string(t->name, result, t->output, t->error);",
        ],
        Category::DateRange => &[
            "        char *result = date_range(ww_timestamp_from_unix(t->start), ww_timestamp_from_unix(t->end));",
            "        failures += expect_string(t->name, result, t->output, t->error);",
        ],
    }
}
