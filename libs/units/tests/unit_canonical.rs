//! Unit tests for canonicalization and equivalence

use annotated_units::{
    canonicalize, canonicalize_str, equivalent, parse, CanonicalUnit, MetricSymbol, Scale,
    SiDimensions, UnitSymbol,
};

fn canon(input: &str) -> CanonicalUnit {
    canonicalize_str(input).unwrap_or_else(|e| panic!("failed to canonicalize {input:?}: {e}"))
}

#[test]
fn test_commutative_equivalence() {
    assert_eq!(canon("m\u{22C5}s"), canon("s\u{22C5}m"));
}

#[test]
fn test_inverse_cancellation() {
    let unit = canon("m/m");
    assert!(unit.dims.is_empty());
    assert!(unit.is_dimensionless());
    assert_eq!(unit.text, "");
    assert_eq!(unit.scale, Scale::ONE);
}

#[test]
fn test_exponent_sign() {
    assert_eq!(canon("m/s\u{00B2}"), canon("m\u{22C5}s\u{207B}\u{00B2}"));
    assert_eq!(canon("m/s\u{00B2}").text, "m\u{22C5}s\u{207B}\u{00B2}");
}

#[test]
fn test_grouping_is_transparent() {
    assert_eq!(canon("(m\u{22C5}s)/A"), canon("m\u{22C5}(s/A)"));
    assert_eq!(canon("m/(s\u{22C5}A)"), canon("m/s/A"));
    assert_eq!(canon("(m/s)\u{00B2}"), canon("m\u{00B2}\u{22C5}s\u{207B}\u{00B2}"));
    assert_eq!(canon("m/(s/A)"), canon("m\u{22C5}A/s"));
}

#[test]
fn test_repeated_symbols_merge() {
    let unit = canon("m\u{22C5}m\u{22C5}m");
    assert_eq!(unit.text, "m\u{00B3}");
    assert_eq!(unit.dims.get(UnitSymbol::Metric(MetricSymbol::Metre)), 3);
}

#[test]
fn test_canonical_text_ordering() {
    // Ordered by symbol spelling, then prefix spelling.
    assert_eq!(canon("s\u{22C5}kg\u{22C5}A").text, "A\u{22C5}kg\u{22C5}s");
    assert_eq!(canon("km/m").text, "m\u{207B}\u{00B9}\u{22C5}km");
}

#[test]
fn test_prefix_scale() {
    let unit = canon("km/m");
    assert!(unit.dims.is_empty());
    assert_eq!(unit.scale, Scale { pow10: 3, pow2: 0 });

    let unit = canon("KiB/s");
    assert_eq!(unit.scale, Scale { pow10: 0, pow2: 10 });
    assert_eq!(unit.scale.to_string(), "2\u{00B9}\u{2070}");

    let unit = canon("mm\u{00B2}");
    assert_eq!(unit.scale, Scale { pow10: -6, pow2: 0 });
}

#[test]
fn test_equivalence_uses_dims_and_scale() {
    // Different prefix distribution, same aggregate scale.
    assert!(equivalent("mm\u{22C5}km", "m\u{00B2}").unwrap());
    assert!(!equivalent("mm", "m").unwrap());
    assert!(!equivalent("m", "s").unwrap());
    assert!(equivalent("m/s/s", "m/s\u{00B2}").unwrap());
    assert!(equivalent("kB", "B").is_err());
}

#[test]
fn test_idempotence() {
    for input in [
        "kg\u{22C5}m/s\u{00B2}",
        "W/(m\u{00B2}\u{22C5}K)",
        "(KiB/s)\u{207B}\u{00B3}",
        "\u{03BC}mol/(m\u{00B3}\u{22C5}s)",
        "km/m",
        "\u{03C4}/s",
    ] {
        let first = canon(input);
        let second = canonicalize(&parse(&first.text).unwrap());
        assert_eq!(first, second, "canonical form of {input:?} is not stable");
    }
}

#[test]
fn test_micro_sign_spellings_canonicalize_alike() {
    assert_eq!(canon("\u{00B5}s"), canon("\u{03BC}s"));
    assert_eq!(canon("\u{00B5}s").text, "\u{03BC}s");
    assert_eq!(canon("k\u{2126}").text, "k\u{03A9}");
}

#[test]
fn test_si_dimensions() {
    let newton = canon("N").si_dimensions();
    let derived = canon("kg\u{22C5}m/s\u{00B2}").si_dimensions();
    assert_eq!(newton, derived);
    assert_eq!(newton, SiDimensions([-2, 1, 1, 0, 0, 0, 0]));
    assert_eq!(newton.to_string(), "s\u{207B}\u{00B2}\u{22C5}m\u{22C5}kg");

    // Equal SI dimensions do not make units equivalent.
    assert!(!equivalent("N", "kg\u{22C5}m/s\u{00B2}").unwrap());

    assert!(canon("rad").si_dimensions().is_dimensionless());
    assert!(canon("\u{03C4}").si_dimensions().is_dimensionless());
    assert!(canon("MiB").si_dimensions().is_dimensionless());
    assert_eq!(canon("Hz").si_dimensions(), canon("Bq").si_dimensions());
}

#[test]
fn test_long_product_chain() {
    let input = vec!["m"; 1000].join("\u{22C5}");
    let unit = canon(&input);
    assert_eq!(unit.text, "m\u{00B9}\u{2070}\u{2070}\u{2070}");
}

#[test]
fn test_canonical_text_reparses_at_exponent_limit() {
    // m^2147483646 ⋅ km ⋅ m
    let input = "m\u{00B2}\u{00B9}\u{2074}\u{2077}\u{2074}\u{2078}\u{00B3}\u{2076}\u{2074}\u{2076}\u{22C5}km\u{22C5}m";
    let unit = canon(input);
    assert_eq!(
        unit.text,
        "m\u{00B2}\u{00B9}\u{2074}\u{2077}\u{2074}\u{2078}\u{00B3}\u{2076}\u{2074}\u{2077}\u{22C5}km"
    );
    assert_eq!(canon(&unit.text), unit);
    assert_eq!(unit.dims.get(UnitSymbol::Metric(MetricSymbol::Metre)), 1 << 31);
}

#[test]
fn test_hand_built_overflow_saturates() {
    use annotated_units::{UnitExpr, UnitLiteral};

    let metre = UnitLiteral::Metric {
        prefix: None,
        symbol: MetricSymbol::Metre,
    };
    let big = UnitExpr::factor(metre, i32::MAX);
    let expr = UnitExpr::group(UnitExpr::group(big, i32::MAX), i32::MAX);
    let unit = canonicalize(&expr);
    assert_eq!(unit.factors[0].exponent, i64::MAX);
}
