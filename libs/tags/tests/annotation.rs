use annotated_tags::{check, Annotation, Error};
use annotated_units::{ParseOptions, UnitExpr};

const ACTIVE: [&str; 3] = ["USD", "EUR", "JPY"];

#[test]
fn unit_annotation() {
    let annotation = Annotation::parse("unit:m/s\u{00B2}").unwrap();
    let expected: UnitExpr = "m/s\u{00B2}".parse().unwrap();
    assert_eq!(annotation, Annotation::Unit { expr: expected });
    assert_eq!(annotation.namespace(), "unit");
    assert_eq!(annotation.to_string(), "unit:m/s\u{00B2}");
    assert_eq!(
        annotation.canonical_unit().unwrap().text,
        "m\u{22C5}s\u{207B}\u{00B2}"
    );
}

#[test]
fn unit_error_offsets_cover_the_whole_tag() {
    let err = Annotation::parse("unit:m//s").unwrap_err();
    assert!(matches!(&err, Error::Unit { source, .. } if source.is_syntax()));
    // "unit:" is 5 bytes, the second '/' is byte 2 of the payload.
    assert_eq!(err.pos(), Some(7));

    let err = Annotation::parse("unit:").unwrap_err();
    assert!(matches!(&err, Error::Unit { source, .. } if source.is_syntax()));

    let err = Annotation::parse("unit:Xyz").unwrap_err();
    assert!(matches!(&err, Error::Unit { source, .. } if source.is_lex()));
    assert_eq!(err.pos(), Some(5));
}

#[test]
fn angle_annotation_must_be_dimensionless() {
    assert!(Annotation::parse("math:angle:rad").is_ok());
    assert!(Annotation::parse("math:angle:\u{03C4}").is_ok());
    assert!(Annotation::parse("math:angle:mrad").is_ok());
    assert_eq!(
        Annotation::parse("math:angle:m").unwrap_err(),
        Error::AngleNotDimensionless { unit: "m".into() }
    );

    let err = Annotation::parse("math:angle:ra").unwrap_err();
    assert_eq!(err.pos(), Some(11));
}

#[test]
fn angle_annotation_needs_angle_symbols() {
    assert!(Annotation::parse("math:angle:sr").is_ok());
    assert!(Annotation::parse("math:angle:rad\u{22C5}sr").is_ok());

    // Dimensionless in SI terms, but not angles.
    for payload in ["B", "KiB", "m/m", "Hz\u{22C5}s", "rad/rad"] {
        assert_eq!(
            Annotation::parse(&format!("math:angle:{payload}")).unwrap_err(),
            Error::AngleNotDimensionless {
                unit: payload.to_string()
            },
            "{payload}"
        );
    }
}

#[test]
fn currency_annotation() {
    let annotation = check("currency:EUR", &ParseOptions::default(), &ACTIVE).unwrap();
    assert_eq!(annotation.namespace(), "currency");
    assert_eq!(annotation.to_string(), "currency:EUR");

    let err = Annotation::parse("currency:eur").unwrap_err();
    assert!(matches!(err, Error::Currency(ref e) if e.is_shape()));

    // Shape-valid codes parse; activity needs the external set.
    let annotation = Annotation::parse("currency:ZZZ").unwrap();
    let err = annotation.validate_with(&ACTIVE).unwrap_err();
    assert!(matches!(err, Error::Currency(ref e) if e.is_unknown_code()));
}

#[test]
fn other_type_names_are_opaque() {
    let annotation = Annotation::parse("input:email").unwrap();
    assert_eq!(
        annotation,
        Annotation::Opaque {
            namespace: "input".into(),
            value: "email".into()
        }
    );
    assert!(annotation.canonical_unit().is_none());
    assert!(annotation.validate_with(&ACTIVE).is_ok());

    let annotation = Annotation::parse("schema:Person:givenName").unwrap();
    assert_eq!(annotation.namespace(), "schema");
    assert_eq!(annotation.to_string(), "schema:Person:givenName");
}

#[test]
fn malformed_tags() {
    assert_eq!(
        Annotation::parse("meters").unwrap_err(),
        Error::MissingNamespace("meters".into())
    );
    assert_eq!(
        Annotation::parse(":x").unwrap_err(),
        Error::MissingNamespace(":x".into())
    );
    assert_eq!(
        Annotation::parse("time:").unwrap_err(),
        Error::EmptyPayload {
            namespace: "time".into()
        }
    );
}

#[test]
fn strict_division_applies_to_tags() {
    let strict = ParseOptions::strict();
    assert!(check("unit:m/s/s", &ParseOptions::default(), &ACTIVE).is_ok());
    let err = check("unit:m/s/s", &strict, &ACTIVE).unwrap_err();
    assert_eq!(err.pos(), Some(8));
}
