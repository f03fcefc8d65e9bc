use crate::{CSV_HEADER, CsvPoint, escape_field, points_to_csv, render_value};

use googletest::prelude::*;
use serde_json::{Value, json};

fn point(name: Value, latitude: Value, longitude: Value) -> CsvPoint {
    CsvPoint {
        name,
        latitude,
        longitude,
    }
}

#[test]
fn given_plain_field_when_escaped_then_unchanged() {
    assert_that!(escape_field("T1"), eq("T1"));
    assert_that!(escape_field("46.05"), eq("46.05"));
    assert_that!(escape_field(""), eq(""));
}

#[test]
fn given_field_with_separator_when_escaped_then_quoted() {
    assert_that!(escape_field("Ljubljana, SI"), eq("\"Ljubljana, SI\""));
    assert_that!(escape_field("line\nbreak"), eq("\"line\nbreak\""));
    assert_that!(escape_field("carriage\rreturn"), eq("\"carriage\rreturn\""));
}

#[test]
fn given_field_with_quotes_when_escaped_then_quotes_doubled() {
    assert_that!(escape_field("say \"hi\""), eq("\"say \"\"hi\"\"\""));
}

#[test]
fn given_json_values_when_rendered_then_numbers_verbatim_and_strings_unquoted() {
    assert_that!(render_value(&json!(46.05)), eq("46.05"));
    assert_that!(render_value(&json!(14)), eq("14"));
    assert_that!(render_value(&json!("T1")), eq("T1"));
    assert_that!(render_value(&json!(null)), eq(""));
    assert_that!(render_value(&json!(true)), eq("true"));
}

#[test]
fn given_points_when_rendered_then_header_and_rows_in_order() {
    // Given
    let points = vec![
        point(json!("T1"), json!(46.05), json!(14.5)),
        point(json!("T2"), json!(46.55), json!(15.64)),
    ];

    // When
    let csv = points_to_csv(&points).unwrap();

    // Then
    assert_eq!(csv, "name,latitude,longitude\nT1,46.05,14.5\nT2,46.55,15.64\n");
}

#[test]
fn given_point_missing_fields_when_rendered_then_empty_cells() {
    // Given
    let points = vec![CsvPoint::default()];

    // When
    let csv = points_to_csv(&points).unwrap();

    // Then
    assert_eq!(csv, format!("{}\n,,\n", CSV_HEADER));
}

#[test]
fn given_name_with_comma_when_rendered_then_row_stays_three_columns() {
    // Given
    let points = vec![point(json!("Bled, lake"), json!("46.36"), json!("14.09"))];

    // When
    let csv = points_to_csv(&points).unwrap();

    // Then
    let row = csv.lines().nth(1).unwrap();
    assert_eq!(row, "\"Bled, lake\",46.36,14.09");
}
