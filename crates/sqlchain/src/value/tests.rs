use super::*;
use chrono::TimeZone;
use std::fmt;

struct Money(u32);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.00", self.0)
    }
}

struct SubQuery;

impl fmt::Display for SubQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(SELECT MAX(Price) FROM Stock.Product)")
    }
}

fn both(value: &Value) -> (String, String) {
    (
        render_value(value, Quoting::Quoted).unwrap(),
        render_value(value, Quoting::Unquoted).unwrap(),
    )
}

#[test]
fn test_signed_integers_never_quoted() {
    let values: Vec<Value> = vec![
        (-8i8).into(),
        (-16i16).into(),
        (-32i32).into(),
        (-64i64).into(),
        (-128i128).into(),
        (-1isize).into(),
    ];
    let expected = ["-8", "-16", "-32", "-64", "-128", "-1"];
    for (value, want) in values.iter().zip(expected) {
        assert_eq!(both(value), (want.to_string(), want.to_string()));
    }
}

#[test]
fn test_unsigned_integers_never_quoted() {
    let values: Vec<Value> = vec![
        8u8.into(),
        16u16.into(),
        32u32.into(),
        u64::MAX.into(),
        128u128.into(),
        7usize.into(),
    ];
    let expected = ["8", "16", "32", "18446744073709551615", "128", "7"];
    for (value, want) in values.iter().zip(expected) {
        assert_eq!(both(value), (want.to_string(), want.to_string()));
    }
}

#[test]
fn test_integer_extremes() {
    assert_eq!(
        render_value(&i128::MIN.into(), Quoting::Quoted).unwrap(),
        i128::MIN.to_string()
    );
    assert_eq!(
        render_value(&u128::MAX.into(), Quoting::Quoted).unwrap(),
        u128::MAX.to_string()
    );
}

#[test]
fn test_text_quoting() {
    assert_eq!(
        both(&"Kelly".into()),
        ("'Kelly'".to_string(), "Kelly".to_string())
    );
    assert_eq!(both(&"".into()), ("''".to_string(), "".to_string()));
    // Only one pair of quotes, even if the text already contains some.
    assert_eq!(
        render_value(&"'Mrs'".into(), Quoting::Quoted).unwrap(),
        "''Mrs''"
    );
}

#[test]
fn test_leading_paren_disables_quoting() {
    let sub = Value::from("(SELECT id FROM Person.Contact)");
    assert_eq!(
        both(&sub),
        (
            "(SELECT id FROM Person.Contact)".to_string(),
            "(SELECT id FROM Person.Contact)".to_string()
        )
    );

    // Only the first character counts.
    assert_eq!(
        render_value(&" (1)".into(), Quoting::Quoted).unwrap(),
        "' (1)'"
    );
}

#[test]
fn test_display_values() {
    assert_eq!(
        both(&Value::display(Money(12))),
        ("'12.00'".to_string(), "12.00".to_string())
    );
    assert_eq!(
        render_value(&Value::display(SubQuery), Quoting::Quoted).unwrap(),
        "(SELECT MAX(Price) FROM Stock.Product)"
    );
}

#[test]
fn test_timestamp_and_uuid() {
    let ts = Utc.with_ymd_and_hms(2020, 11, 2, 8, 30, 0).unwrap();
    assert_eq!(
        both(&ts.into()),
        (
            "'2020-11-02T08:30:00Z'".to_string(),
            "2020-11-02T08:30:00Z".to_string()
        )
    );

    let id = Uuid::nil();
    assert_eq!(
        render_value(&id.into(), Quoting::Quoted).unwrap(),
        "'00000000-0000-0000-0000-000000000000'"
    );
}

#[test]
fn test_reference_dereferenced_once() {
    assert_eq!(
        both(&Value::reference("Susan")),
        ("'Susan'".to_string(), "Susan".to_string())
    );
    assert_eq!(both(&Some(99u16).into()), ("99".to_string(), "99".to_string()));
    assert_eq!(
        render_value(&Box::new(Value::from(-3i32)).into(), Quoting::Quoted).unwrap(),
        "-3"
    );
}

#[test]
fn test_null_reference_is_an_error() {
    let err = render_value(&Value::null(), Quoting::Quoted).unwrap_err();
    assert_eq!(err, RenderError::NullReference);
    assert!(err.is_null_reference());
    assert!(!err.is_unsupported());
    assert!(Value::from(None::<i32>).is_null());
}

#[test]
fn test_nested_reference_is_unsupported() {
    let nested = Value::reference(Value::reference(1i32));
    let err = render_value(&nested, Quoting::Unquoted).unwrap_err();
    assert!(err.is_unsupported());

}

#[test]
fn test_reference_to_null_is_null_reference() {
    let nested_null: Value = Some(None::<i32>).into();
    assert!(render_value(&nested_null, Quoting::Unquoted)
        .unwrap_err()
        .is_null_reference());
    assert_eq!(
        render_value(&Value::reference(Value::null()), Quoting::Quoted).unwrap_err(),
        RenderError::NullReference
    );
}

#[test]
fn test_unsupported_types() {
    for value in [Value::from(1.5f64), Value::from(2.5f32), Value::from(true)] {
        assert!(render_value(&value, Quoting::Quoted).unwrap_err().is_unsupported());
    }
    assert_eq!(
        render_value(&1.5f64.into(), Quoting::Quoted).unwrap_err(),
        RenderError::unsupported("f64")
    );
}

#[test]
fn test_render_is_idempotent() {
    let value = Value::display(Money(7));
    let first = render_value(&value, Quoting::Quoted).unwrap();
    let second = render_value(&value, Quoting::Quoted).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_debug_output() {
    assert_eq!(format!("{:?}", Value::from(3i32)), "Int(3)");
    assert_eq!(
        format!("{:?}", Value::display(Money(1))),
        "Display(\"1.00\")"
    );
    assert_eq!(format!("{:?}", Value::null()), "Ref(None)");
}
