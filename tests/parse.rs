use formfill::field::{Meridiem, Seg};
use formfill::{ChoiceSelection, FieldType, FillValue, RowSelection};

#[test]
fn test_date_accepts_real_calendar_dates() {
    for value in ["29-02-2024", "11-11-2111", "01-01-2003", "31-12-1999"] {
        assert!(
            FieldType::Date.parse_literal(value).is_some(),
            "Expected {value} to parse"
        );
    }
}

#[test]
fn test_date_rejects_impossible_dates() {
    for value in [
        "29-02-2023",
        "31-04-2024",
        "00-01-2024",
        "01-13-2024",
        "32-01-2024",
        "31-06-2025",
    ] {
        assert!(
            FieldType::Date.parse_literal(value).is_none(),
            "Expected {value} to be rejected"
        );
    }
}

#[test]
fn test_date_rejects_wrong_shape() {
    for value in [
        "2024-11-11",
        "11-11",
        "1-1-2024",
        "aa-bb-2024",
        "11-11-2111-",
        "11 11 2111",
        "11-11-211",
        "",
    ] {
        assert!(
            FieldType::Date.parse_literal(value).is_none(),
            "Expected {value} to be rejected"
        );
    }
}

#[test]
fn test_meridiem_literal_must_be_uppercase() {
    assert!(FieldType::TimeWithMeridiem.parse_literal("11-39-PM").is_some());
    assert!(FieldType::TimeWithMeridiem.parse_literal("06-15-AM").is_some());
    assert!(FieldType::TimeWithMeridiem.parse_literal("11-39-pm").is_none());
    assert!(FieldType::TimeWithMeridiem.parse_literal("11-39-XM").is_none());
    assert!(FieldType::TimeWithMeridiem.parse_literal("11-39-P").is_none());
    assert!(FieldType::TimeWithMeridiem.parse_literal("11-39").is_none());
}

#[test]
fn test_grammar_piece_counts() {
    assert!(FieldType::Time.parse_literal("02-02").is_some());
    assert!(FieldType::Time.parse_literal("02").is_none());
    assert!(FieldType::Duration.parse_literal("11-11-11").is_some());
    assert!(FieldType::Duration.parse_literal("11-11").is_none());
    assert!(FieldType::DateWithoutYear.parse_literal("11-11").is_some());
    assert!(FieldType::DateAndTime.parse_literal("01-01-2003-01-11").is_some());
    assert!(FieldType::DateAndTime.parse_literal("01-01-2003-01").is_none());
    assert!(FieldType::DateTimeWithMeridiem
        .parse_literal("11-11-2023-11-39-PM")
        .is_some());
    assert!(FieldType::DateTimeWithMeridiemWithoutYear
        .parse_literal("11-11-11-39-PM")
        .is_some());
    assert!(FieldType::DateTimeWithoutYear
        .parse_literal("22-01-01-01")
        .is_some());
}

#[test]
fn test_no_year_grammars_skip_calendar_check() {
    // Day 31 of month 02 cannot be calendar-checked without a year; the
    // shape alone decides.
    assert!(FieldType::DateWithoutYear.parse_literal("31-02").is_some());
    assert!(FieldType::DateTimeWithMeridiemWithoutYear
        .parse_literal("31-02-11-39-AM")
        .is_some());
    assert!(FieldType::DateTimeWithoutYear
        .parse_literal("31-02-01-01")
        .is_some());
}

#[test]
fn test_parsed_segments_follow_grammar_order() {
    let parts = FieldType::Date
        .parse_literal("11-12-2111")
        .expect("Failed to parse date literal");
    let segs: Vec<Seg> = parts.iter().map(|(seg, _)| *seg).collect();
    assert_eq!(segs, vec![Seg::Day, Seg::Month, Seg::Year]);
    assert_eq!(parts[0].1, "11");
    assert_eq!(parts[1].1, "12");
    assert_eq!(parts[2].1, "2111");

    let parts = FieldType::Duration
        .parse_literal("01-02-03")
        .expect("Failed to parse duration literal");
    let segs: Vec<Seg> = parts.iter().map(|(seg, _)| *seg).collect();
    assert_eq!(segs, vec![Seg::Hour, Seg::Minute, Seg::Second]);
}

#[test]
fn test_grammar_settle_flags() {
    let settling = [
        FieldType::DateAndTime,
        FieldType::DateTimeWithMeridiem,
        FieldType::DateTimeWithMeridiemWithoutYear,
        FieldType::TimeWithMeridiem,
        FieldType::DateTimeWithoutYear,
    ];
    for ty in settling {
        let grammar = ty.grammar().expect("Expected a grammar");
        assert!(grammar.settle, "Expected {ty:?} to settle first");
    }
    for ty in [
        FieldType::Date,
        FieldType::Time,
        FieldType::Duration,
        FieldType::DateWithoutYear,
    ] {
        let grammar = ty.grammar().expect("Expected a grammar");
        assert!(!grammar.settle, "Expected {ty:?} not to settle");
    }
}

#[test]
fn test_non_literal_types_have_no_grammar() {
    for ty in [
        FieldType::Text,
        FieldType::Paragraph,
        FieldType::Dropdown,
        FieldType::CheckboxGrid,
        FieldType::MultipleChoice,
    ] {
        assert!(ty.grammar().is_none(), "Expected no grammar for {ty:?}");
        assert!(ty.parse_literal("11-11").is_none());
    }
}

#[test]
fn test_meridiem_parse_is_strict() {
    assert_eq!(Meridiem::parse("AM"), Some(Meridiem::Am));
    assert_eq!(Meridiem::parse("PM"), Some(Meridiem::Pm));
    assert_eq!(Meridiem::parse("am"), None);
    assert_eq!(Meridiem::parse("A.M."), None);
    assert_eq!(Meridiem::Pm.as_str(), "PM");
}

#[test]
fn test_field_type_tags_use_scanner_spelling() {
    let json = serde_json::to_string(&FieldType::DateTimeWithMeridiemWithoutYear)
        .expect("Failed to serialize tag");
    assert_eq!(json, "\"DATE_TIME_WITH_MERIDIEM_WITHOUT_YEAR\"");

    let ty: FieldType = serde_json::from_str("\"MULTI_CORRECT_WITH_OTHER\"")
        .expect("Failed to deserialize tag");
    assert_eq!(ty, FieldType::MultiCorrectWithOther);

    let ty: FieldType =
        serde_json::from_str("\"TEXT_EMAIL\"").expect("Failed to deserialize tag");
    assert_eq!(ty, FieldType::TextEmail);

    // Tags outside the enumeration never reach the engine.
    assert!(serde_json::from_str::<FieldType>("\"CHECKBOX\"").is_err());
}

#[test]
fn test_value_shapes_round_trip() {
    let value = FillValue::SingleChoice(ChoiceSelection::Other("Random".to_string()));
    let json = serde_json::to_string(&value).expect("Failed to serialize value");
    assert_eq!(json, r#"{"single_choice":{"other":"Random"}}"#);

    let selection: RowSelection =
        serde_json::from_str(r#"{"row":"Row 1","selectedColumn":"Column 1"}"#)
            .expect("Failed to deserialize row selection");
    assert_eq!(selection.row, "Row 1");
    assert_eq!(selection.selected_column, "Column 1");

    let back: FillValue = serde_json::from_str(&json).expect("Failed to deserialize value");
    assert_eq!(back, value);
}
