use hr_json_export::ToolError;
use hr_json_export::coerce::{
    Coerced, DefaultReason, coerce_float, coerce_int, safe_float, safe_int,
};
use hr_json_export::columns::{ColumnPolicy, Fields, first_present, first_present_trimmed};
use hr_json_export::io::csv_read::Row;
use hr_json_export::normalize::normalize_name;

#[test]
fn normalize_reads_last_comma_first() {
    assert_eq!(normalize_name("Barber, Candice"), "CandiceB");
    assert_eq!(normalize_name("  Barber ,   Candice  "), "CandiceB");
    assert_eq!(normalize_name("de la Cruz, Maria"), "Mariad");
}

#[test]
fn normalize_reads_whitespace_separated_names() {
    assert_eq!(normalize_name("Candice Barber"), "CandiceB");
    assert_eq!(normalize_name("Mary Jane Watson"), "MaryW");
    assert_eq!(normalize_name("  Ana\tLópez  "), "AnaL");
    assert_eq!(normalize_name("Émile Östberg"), "ÉmileÖ");
}

#[test]
fn normalize_agrees_between_name_orders() {
    assert_eq!(
        normalize_name("Watson, Mary"),
        normalize_name("Mary Watson")
    );
}

#[test]
fn normalize_splits_on_first_comma_only() {
    assert_eq!(normalize_name("Barber, Candice, Jr"), "Candice, JrB");
}

#[test]
fn normalize_handles_degenerate_names() {
    assert_eq!(normalize_name(""), "");
    assert_eq!(normalize_name("   "), "");
    assert_eq!(normalize_name("Cher"), "CherC");
    assert_eq!(normalize_name(", Candice"), "Candice");
    assert_eq!(normalize_name("Barber,"), "B");
}

#[test]
fn safe_float_tolerates_dirty_cells() {
    assert_eq!(safe_float("1,234.5"), 1234.5);
    assert_eq!(safe_float(" 7.25 "), 7.25);
    assert_eq!(safe_float("-2"), -2.0);
    assert_eq!(safe_float(""), 0.0);
    assert_eq!(safe_float("N/A"), 0.0);
    assert_eq!(safe_float("NaN"), 0.0);
    assert_eq!(safe_float("inf"), 0.0);
}

#[test]
fn safe_int_truncates_toward_zero() {
    assert_eq!(safe_int("12.7"), 12);
    assert_eq!(safe_int("12.0"), 12);
    assert_eq!(safe_int("-3.9"), -3);
    assert_eq!(safe_int("1,024"), 1024);
    assert_eq!(safe_int("abc"), 0);
    assert_eq!(safe_int(""), 0);
}

#[test]
fn coercion_reports_why_a_value_was_defaulted() {
    assert_eq!(coerce_float("3.5"), Coerced::Parsed(3.5));
    assert_eq!(coerce_float("  ").reason(), Some(&DefaultReason::Blank));
    assert_eq!(
        coerce_int("N/A").reason(),
        Some(&DefaultReason::Unparsable("N/A".to_string()))
    );
    assert_eq!(
        coerce_float("-inf"),
        Coerced::Defaulted {
            value: 0.0,
            reason: DefaultReason::NonFinite("-inf".to_string()),
        }
    );
}

#[test]
fn first_present_takes_first_non_empty_alias() {
    let row = Row::from_pairs(
        2,
        [("EmpID", ""), ("EmployeeID", "E-17"), ("Emp ID", "E-99")],
    );

    assert_eq!(first_present(&row, &["EmpID", "EmployeeID", "Emp ID"], "x"), "E-17");
    assert_eq!(first_present(&row, &["Emp ID", "EmployeeID"], "x"), "E-99");
    assert_eq!(first_present(&row, &["EmpID"], "fallback"), "fallback");
    assert_eq!(first_present(&row, &["Missing"], ""), "");
}

#[test]
fn trimmed_lookup_skips_whitespace_only_aliases() {
    let row = Row::from_pairs(2, [("EmpID", "  "), ("EmployeeID", " E-5 ")]);
    let fields = Fields::new(&row, ColumnPolicy::Lenient);

    assert_eq!(first_present_trimmed(&row, &["EmpID", "EmployeeID"], ""), "E-5");
    assert_eq!(first_present_trimmed(&row, &["EmpID"], "none"), "none");
    assert_eq!(first_present(&row, &["EmpID", "EmployeeID"], ""), "  ");
    assert_eq!(fields.optional_trimmed(&["EmpID", "EmployeeID"]), "E-5");
}

#[test]
fn numeric_lookup_skips_whitespace_only_aliases() {
    let row = Row::from_pairs(
        2,
        [("Medical Monthly EE", " "), ("Medical EE Monthly", "12.5")],
    );
    let fields = Fields::new(&row, ColumnPolicy::Lenient);

    assert_eq!(
        fields.optional_float(&["Medical Monthly EE", "Medical EE Monthly"]),
        12.5
    );
}

#[test]
fn strict_fields_reject_absent_required_columns() {
    let row = Row::from_pairs(5, [("Department", "Sales")]);
    let fields = Fields::new(&row, ColumnPolicy::Strict);

    assert_eq!(fields.text(&["Department"]).expect("present"), "Sales");
    assert_eq!(fields.optional_text(&["Region"]), "");

    let error = fields.text(&["Region", "Area"]).expect_err("absent column");
    match error {
        ToolError::MissingColumn { column, line } => {
            assert_eq!(column, "Region");
            assert_eq!(line, 5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_fields_accept_present_but_blank_columns() {
    let row = Row::from_pairs(3, [("Age", ""), ("Region", " ")]);
    let fields = Fields::new(&row, ColumnPolicy::Strict);

    assert_eq!(fields.int(&["Age"]).expect("present"), 0);
    assert_eq!(fields.trimmed(&["Region"]).expect("present"), "");
}

#[test]
fn lenient_fields_default_absent_columns() {
    let row = Row::new(2);
    let fields = Fields::new(&row, ColumnPolicy::Lenient);

    assert_eq!(fields.text(&["Department"]).expect("lenient"), "");
    assert_eq!(fields.float(&["Vacation Used"]).expect("lenient"), 0.0);
    assert_eq!(fields.int(&["Age"]).expect("lenient"), 0);
}
