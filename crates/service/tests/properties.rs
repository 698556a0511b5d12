use chrono::{NaiveDate, NaiveTime, TimeDelta};
use sheetio_service::{
    converter, detect_date, detect_float, detect_int, has_no_digits_in_float, infer_cell,
    to_boolean, to_date, to_declared_text, to_plain_text, to_time, write_logical_type,
    ConvertError, DetectOptions,
};
use sheetio_types::{LogicalType, TypedValue, ValueKind};

// ===== Detection Tests =====

#[test]
fn test_date_detector_and_converter_agree_on_dates() {
    for text in ["2000-01-01", "2016-02-29", "1999-12-31", "2024-06-15"] {
        let detected = detect_date(text).expect("detected");
        let converted = to_date(text).expect("converted");
        assert_eq!(detected, converted, "{text}");
        assert_eq!(detected.kind(), ValueKind::Date);
    }
}

#[test]
fn test_int_examples() {
    assert_eq!(detect_int("014325"), None);
    assert_eq!(detect_int("14325"), Some(14325));
    assert_eq!(detect_int("1,234,567"), Some(1_234_567));
    assert_eq!(detect_int("1,2,3"), Some(123));
    assert_eq!(detect_int("1,23,4"), Some(1234));
}

#[test]
fn test_float_examples() {
    assert_eq!(detect_float("0.5"), Some(0.5));
    assert_eq!(detect_float("0123"), None);
    assert_eq!(detect_float("abc"), None);
}

#[test]
fn test_integral_floats() {
    assert!(has_no_digits_in_float(4.0));
    assert!(!has_no_digits_in_float(4.2));
}

// ===== Strict Conversion Tests =====

#[test]
fn test_time_examples() {
    assert_eq!(
        to_time("PT05H30M00S"),
        Some(TypedValue::Time(NaiveTime::from_hms_opt(5, 30, 0).unwrap()))
    );
    assert_eq!(
        to_time("PT30H00M00S"),
        Some(TypedValue::Duration(TimeDelta::hours(30)))
    );
    assert_eq!(to_time("garbage"), None);
}

#[test]
fn test_boolean_examples() {
    assert!(to_boolean("true"));
    assert!(!to_boolean("True"));
    assert!(!to_boolean("false"));
}

#[test]
fn test_bad_date_reports_text() {
    let err = to_date("not-a-date").unwrap_err();
    assert!(matches!(err, ConvertError::BadDate { ref value } if value == "not-a-date"));
    assert!(err.to_string().contains("not-a-date"));
}

// ===== Round Trip Tests =====

fn samples() -> Vec<TypedValue> {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    vec![
        TypedValue::Float(1.25),
        TypedValue::Float(-0.5),
        TypedValue::Date(date),
        TypedValue::DateTime(date.and_hms_opt(10, 30, 0).unwrap()),
        TypedValue::DateTime(date.and_hms_micro_opt(10, 30, 0, 123_456).unwrap()),
        TypedValue::Time(NaiveTime::from_hms_opt(5, 30, 0).unwrap()),
        TypedValue::Duration(TimeDelta::hours(30) + TimeDelta::minutes(15)),
        TypedValue::Bool(true),
        TypedValue::Bool(false),
    ]
}

#[test]
fn test_write_then_read_reconstructs_value() {
    for value in samples() {
        let logical = write_logical_type(value.kind());
        let read = converter(logical).expect("converter registered");
        let text = to_declared_text(&value);
        let restored = read(&text).expect("convertible").expect("matched");
        assert_eq!(restored, value, "{logical} via {text:?}");
    }
}

#[test]
fn test_int_collapses_to_float_on_write() {
    let value = TypedValue::Int(42);
    let logical = write_logical_type(value.kind());
    assert_eq!(logical, LogicalType::Float);

    let read = converter(logical).unwrap();
    let restored = read(&to_declared_text(&value)).unwrap().unwrap();
    assert_eq!(restored, TypedValue::Float(42.0));
}

#[test]
fn test_plain_text_round_trip_through_inference() {
    let options = DetectOptions::default();
    let date = NaiveDate::from_ymd_opt(2021, 11, 5).unwrap();
    let values = vec![
        TypedValue::Int(1024),
        TypedValue::Float(2.75),
        TypedValue::Date(date),
        TypedValue::DateTime(date.and_hms_opt(23, 59, 1).unwrap()),
        TypedValue::DateTime(date.and_hms_micro_opt(23, 59, 1, 500_000).unwrap()),
        TypedValue::from("plain"),
    ];
    for value in values {
        let text = to_plain_text(&value);
        assert_eq!(infer_cell(&text, &options), value, "{text:?}");
    }
}

#[test]
fn test_short_duration_reads_back_as_time() {
    let value = TypedValue::Duration(TimeDelta::hours(5));
    let logical = write_logical_type(value.kind());
    assert_eq!(logical, LogicalType::TimeDelta);

    let text = to_declared_text(&value);
    assert_eq!(text, "PT05H00M00S");

    let read = converter(logical).unwrap();
    assert_eq!(
        read(&text).unwrap(),
        Some(TypedValue::Time(NaiveTime::from_hms_opt(5, 0, 0).unwrap()))
    );
}

// ===== Concurrency Tests =====

#[test]
fn test_tables_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("{},000", i + 1);
                let value = infer_cell(&text, &DetectOptions::default());
                let read = converter(LogicalType::Float).unwrap();
                (value, read("1.5").unwrap())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (value, float) = handle.join().unwrap();
        assert_eq!(value, TypedValue::Int((i as i64 + 1) * 1000));
        assert_eq!(float, Some(TypedValue::Float(1.5)));
    }
}
