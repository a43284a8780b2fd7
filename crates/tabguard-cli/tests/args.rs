use tabguard_cli::args::parse_column_type;
use tabguard_model::ScalarType;

#[test]
fn accepts_names_and_aliases() {
    let cases = [
        ("id=integer", ("id", ScalarType::Integer)),
        ("score=Double", ("score", ScalarType::Float)),
        ("label=text", ("label", ScalarType::String)),
        ("created=timestamp", ("created", ScalarType::Datetime)),
        ("active=bool", ("active", ScalarType::Boolean)),
    ];
    for (input, (column, ty)) in cases {
        assert_eq!(parse_column_type(input), Ok((column.to_string(), ty)), "{input}");
    }
}

#[test]
fn splits_on_last_equals_sign() {
    assert_eq!(
        parse_column_type("a=b=float"),
        Ok(("a=b".to_string(), ScalarType::Float))
    );
}

#[test]
fn rejects_malformed_values() {
    assert_eq!(
        parse_column_type("customer_id"),
        Err("expected COLUMN=TYPE, got 'customer_id'".to_string())
    );
    assert_eq!(
        parse_column_type("=integer"),
        Err("missing column name in '=integer'".to_string())
    );
    assert_eq!(
        parse_column_type("id=decimal"),
        Err("unknown scalar type: decimal".to_string())
    );
}
