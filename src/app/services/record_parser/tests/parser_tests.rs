//! Tests for the main record parser functionality

use super::*;
use crate::Error;
use crate::app::models::RecordField;
use crate::app::services::record_parser::RecordParser;

#[test]
fn test_parse_valid_file_in_row_order() {
    let parser = create_in_memory_parser(create_valid_csv());
    let records = parser.parse(test_path()).unwrap();

    assert_eq!(records.len(), 3);
    let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(records[0].id(), 1);
    assert_eq!(records[0].age(), 30);
    assert_eq!(records[0].email(), "alice@example.com");
}

#[test]
fn test_parse_any_column_order_and_extra_columns() {
    let content = r#"Email,AGE,city,Name,Id
alice@example.com,30,Leeds,Alice,1
bob@example.com,25,York,Bob,2
"#;
    let parser = create_in_memory_parser(content);
    let records = parser.parse(test_path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id(), 2);
    assert_eq!(records[1].name(), "Bob");
    assert_eq!(records[1].age(), 25);
    assert_eq!(records[1].email(), "bob@example.com");
}

#[test]
fn test_parse_trims_headers_and_values() {
    let content = " id , name , age , email \n 7 ,  Dave  , 52 ,  dave@example.com \n";
    let parser = create_in_memory_parser(content);
    let records = parser.parse(test_path()).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id(), 7);
    assert_eq!(records[0].name(), "Dave");
    assert_eq!(records[0].age(), 52);
    assert_eq!(records[0].email(), "dave@example.com");
}

#[test]
fn test_parse_quoted_field_with_delimiter() {
    let content = "id,name,age,email\n4,\"Smith, Jane\",28,jane@example.com\n";
    let parser = create_in_memory_parser(content);
    let records = parser.parse(test_path()).unwrap();

    assert_eq!(records[0].name(), "Smith, Jane");
}

#[test]
fn test_parse_header_only_file_is_empty_result() {
    let parser = create_in_memory_parser("id,name,age,email\n");
    let records = parser.parse(test_path()).unwrap();
    assert!(records.is_empty());

    let parser = create_in_memory_parser("id,name,age,email");
    assert!(parser.parse(test_path()).unwrap().is_empty());
}

#[test]
fn test_parse_file_not_found() {
    let parser = create_in_memory_parser(create_valid_csv());
    let err = parser.parse(Path::new("missing.csv")).unwrap_err();

    match err {
        Error::FileNotFound { path } => assert_eq!(path, "missing.csv"),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_parse_zero_byte_file() {
    let parser = create_in_memory_parser(Vec::new());
    let err = parser.parse(test_path()).unwrap_err();

    assert!(matches!(err, Error::FileEmpty { ref path } if path == TEST_CSV_PATH));
}

#[test]
fn test_parse_empty_name_fails_whole_parse() {
    let parser = create_in_memory_parser(create_csv_with_empty_name());
    let err = parser.parse(test_path()).unwrap_err();

    match err {
        Error::InvalidField { line, row, field } => {
            assert_eq!(field, RecordField::Name);
            assert_eq!(line, 4);
            assert_eq!(row, "3,,40,carol@example.com");
        }
        other => panic!("expected InvalidField, got {:?}", other),
    }
}

#[test]
fn test_parse_validation_order_within_row() {
    // Empty name and email, zero id and age: name is reported
    let parser = create_in_memory_parser("id,name,age,email\n0,,0,\n");
    let err = parser.parse(test_path()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidField {
            field: RecordField::Name,
            ..
        }
    ));

    let parser = create_in_memory_parser("id,name,age,email\n0,Eve,0,\n");
    let err = parser.parse(test_path()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidField {
            field: RecordField::Email,
            ..
        }
    ));

    let parser = create_in_memory_parser("id,name,age,email\n0,Eve,0,eve@example.com\n");
    let err = parser.parse(test_path()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidField {
            field: RecordField::Id,
            ..
        }
    ));

    let parser = create_in_memory_parser("id,name,age,email\n5,Eve,-3,eve@example.com\n");
    let err = parser.parse(test_path()).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidField {
            field: RecordField::Age,
            ..
        }
    ));
}

#[test]
fn test_parse_malformed_number_after_valid_rows() {
    let content = r#"id,name,age,email
1,Alice,30,alice@example.com
2,Bob,twenty,bob@example.com
"#;
    let parser = create_in_memory_parser(content);
    let err = parser.parse(test_path()).unwrap_err();

    match err {
        Error::MalformedNumber { line, row, field } => {
            assert_eq!(field, RecordField::Age);
            assert_eq!(line, 3);
            assert_eq!(row, "2,Bob,twenty,bob@example.com");
        }
        other => panic!("expected MalformedNumber, got {:?}", other),
    }
}

#[test]
fn test_parse_malformed_id_checked_before_validation() {
    // Non-numeric id wins over the empty name in the same row
    let parser = create_in_memory_parser("id,name,age,email\nabc,,30,x@example.com\n");
    let err = parser.parse(test_path()).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedNumber {
            field: RecordField::Id,
            ..
        }
    ));

    // Values outside the i32 range are not numbers either
    let parser = create_in_memory_parser("id,name,age,email\n99999999999,Al,30,a@example.com\n");
    assert!(matches!(
        parser.parse(test_path()).unwrap_err(),
        Error::MalformedNumber { .. }
    ));
}

#[test]
fn test_parse_missing_column() {
    let parser = create_in_memory_parser("id,name,age\n1,Alice,30\n");
    let err = parser.parse(test_path()).unwrap_err();

    assert!(matches!(
        err,
        Error::MissingColumn {
            column: RecordField::Email,
            ..
        }
    ));
}

#[test]
fn test_parse_whitespace_only_file_has_no_columns() {
    let parser = create_in_memory_parser("   \n");
    let err = parser.parse(test_path()).unwrap_err();

    assert!(matches!(
        err,
        Error::MissingColumn {
            column: RecordField::Id,
            ..
        }
    ));
}

#[test]
fn test_parse_short_row_missing_only_ignored_column() {
    let content = r#"id,name,age,email,phone
1,Alice,30,alice@example.com,0113 496 0000
2,Bob,25,bob@example.com
"#;
    let parser = create_in_memory_parser(content);
    let records = parser.parse(test_path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name(), "Bob");
    assert_eq!(records[1].email(), "bob@example.com");
}

#[test]
fn test_parse_row_with_extra_trailing_field() {
    let content = r#"id,name,age,email
1,Alice,30,alice@example.com,
2,Bob,25,bob@example.com
"#;
    let parser = create_in_memory_parser(content);
    let records = parser.parse(test_path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].email(), "alice@example.com");
}

#[test]
fn test_parse_short_row_missing_required_text_field() {
    let parser = create_in_memory_parser("id,name,age,email\n1,Alice,30\n");
    let err = parser.parse(test_path()).unwrap_err();

    match err {
        Error::InvalidField { line, row, field } => {
            assert_eq!(line, 2);
            assert_eq!(row, "1,Alice,30");
            assert_eq!(field, RecordField::Email);
        }
        other => panic!("expected InvalidField, got {:?}", other),
    }
}

#[test]
fn test_parse_short_row_missing_required_number() {
    let parser = create_in_memory_parser("id,name,email,age\n1,Alice,alice@example.com\n");
    let err = parser.parse(test_path()).unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedNumber {
            line: 2,
            field: RecordField::Age,
            ..
        }
    ));
}

#[test]
fn test_parse_invalid_utf8_is_csv_error() {
    let mut content = b"id,name,age,email\n1,".to_vec();
    content.extend_from_slice(&[0xff, 0xfe]);
    content.extend_from_slice(b",30,a@example.com\n");

    let parser = create_in_memory_parser(content);
    assert!(matches!(
        parser.parse(test_path()).unwrap_err(),
        Error::CsvParsing { .. }
    ));
}

#[test]
fn test_parse_is_repeatable() {
    let parser = create_in_memory_parser(create_valid_csv());
    let first = parser.parse(test_path()).unwrap();
    let second = parser.parse(test_path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parse_local_file() {
    let temp_file = create_temp_file(&create_valid_csv());
    let parser = RecordParser::default();

    let records = parser.parse(temp_file.path()).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].name(), "Carol");
}

#[test]
fn test_parse_local_missing_and_empty_files() {
    let parser = RecordParser::default();

    let err = parser
        .parse(Path::new("/nonexistent/dir/people.csv"))
        .unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));

    let temp_file = create_temp_file("");
    let err = parser.parse(temp_file.path()).unwrap_err();
    assert!(matches!(err, Error::FileEmpty { .. }));
}
