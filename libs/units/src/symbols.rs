//! Closed symbol tables for the unit grammar
//!
//! Every Unicode scalar the grammar gives meaning to (prefixes, unit
//! symbols, superscript digits, operators) is defined here and nowhere else.
//! Lookups go through compile-time perfect hash maps (phf).

use crate::canonical::SiDimensions;
use phf::phf_map;
use std::fmt;

/// `⋅` DOT OPERATOR, multiplicative composition.
pub const PRODUCT_OPERATOR: char = '\u{22C5}';
/// Divisive composition.
pub const QUOTIENT_OPERATOR: char = '/';
/// `⁻` SUPERSCRIPT MINUS, negates an exponent.
pub const SUPERSCRIPT_MINUS: char = '\u{207B}';
pub const GROUP_OPEN: char = '(';
pub const GROUP_CLOSE: char = ')';

static SUPERSCRIPT_DIGITS: phf::Map<char, u8> = phf_map! {
    '\u{2070}' => 0,
    '\u{00B9}' => 1,
    '\u{00B2}' => 2,
    '\u{00B3}' => 3,
    '\u{2074}' => 4,
    '\u{2075}' => 5,
    '\u{2076}' => 6,
    '\u{2077}' => 7,
    '\u{2078}' => 8,
    '\u{2079}' => 9,
};

const SUPERSCRIPT_BY_DIGIT: [char; 10] = [
    '\u{2070}', '\u{00B9}', '\u{00B2}', '\u{00B3}', '\u{2074}', '\u{2075}', '\u{2076}',
    '\u{2077}', '\u{2078}', '\u{2079}',
];

/// Characters people commonly type instead of `⋅`.
const LOOKALIKE_PRODUCT_OPERATORS: [char; 4] = ['*', '.', '\u{00B7}', '\u{00D7}'];

pub fn superscript_digit(c: char) -> Option<u8> {
    SUPERSCRIPT_DIGITS.get(&c).copied()
}

pub fn is_superscript(c: char) -> bool {
    c == SUPERSCRIPT_MINUS || SUPERSCRIPT_DIGITS.contains_key(&c)
}

pub fn is_lookalike_product(c: char) -> bool {
    LOOKALIKE_PRODUCT_OPERATORS.contains(&c)
}

/// Characters that may appear inside a unit literal.
pub fn is_literal_char(c: char) -> bool {
    c.is_alphabetic() && !is_superscript(c)
}

/// Render `exponent` with superscript digits. Nothing is written for 1.
pub fn write_exponent<W: fmt::Write>(out: &mut W, exponent: i64) -> fmt::Result {
    if exponent == 1 {
        return Ok(());
    }
    if exponent < 0 {
        out.write_char(SUPERSCRIPT_MINUS)?;
    }
    for b in exponent.unsigned_abs().to_string().bytes() {
        out.write_char(SUPERSCRIPT_BY_DIGIT[(b - b'0') as usize])?;
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricPrefix {
    Quetta,
    Ronna,
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deca,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
    Ronto,
    Quecto,
}

/// Metric prefix spellings, longest first so that `da` wins over `d`.
const METRIC_PREFIXES: &[(&str, MetricPrefix)] = &[
    ("da", MetricPrefix::Deca),
    ("Q", MetricPrefix::Quetta),
    ("R", MetricPrefix::Ronna),
    ("Y", MetricPrefix::Yotta),
    ("Z", MetricPrefix::Zetta),
    ("E", MetricPrefix::Exa),
    ("P", MetricPrefix::Peta),
    ("T", MetricPrefix::Tera),
    ("G", MetricPrefix::Giga),
    ("M", MetricPrefix::Mega),
    ("k", MetricPrefix::Kilo),
    ("h", MetricPrefix::Hecto),
    ("d", MetricPrefix::Deci),
    ("c", MetricPrefix::Centi),
    ("m", MetricPrefix::Milli),
    ("\u{03BC}", MetricPrefix::Micro),
    ("\u{00B5}", MetricPrefix::Micro),
    ("n", MetricPrefix::Nano),
    ("p", MetricPrefix::Pico),
    ("f", MetricPrefix::Femto),
    ("a", MetricPrefix::Atto),
    ("z", MetricPrefix::Zepto),
    ("y", MetricPrefix::Yocto),
    ("r", MetricPrefix::Ronto),
    ("q", MetricPrefix::Quecto),
];

impl MetricPrefix {
    pub const ALL: [MetricPrefix; 24] = [
        MetricPrefix::Quetta,
        MetricPrefix::Ronna,
        MetricPrefix::Yotta,
        MetricPrefix::Zetta,
        MetricPrefix::Exa,
        MetricPrefix::Peta,
        MetricPrefix::Tera,
        MetricPrefix::Giga,
        MetricPrefix::Mega,
        MetricPrefix::Kilo,
        MetricPrefix::Hecto,
        MetricPrefix::Deca,
        MetricPrefix::Deci,
        MetricPrefix::Centi,
        MetricPrefix::Milli,
        MetricPrefix::Micro,
        MetricPrefix::Nano,
        MetricPrefix::Pico,
        MetricPrefix::Femto,
        MetricPrefix::Atto,
        MetricPrefix::Zepto,
        MetricPrefix::Yocto,
        MetricPrefix::Ronto,
        MetricPrefix::Quecto,
    ];

    /// Canonical spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            MetricPrefix::Quetta => "Q",
            MetricPrefix::Ronna => "R",
            MetricPrefix::Yotta => "Y",
            MetricPrefix::Zetta => "Z",
            MetricPrefix::Exa => "E",
            MetricPrefix::Peta => "P",
            MetricPrefix::Tera => "T",
            MetricPrefix::Giga => "G",
            MetricPrefix::Mega => "M",
            MetricPrefix::Kilo => "k",
            MetricPrefix::Hecto => "h",
            MetricPrefix::Deca => "da",
            MetricPrefix::Deci => "d",
            MetricPrefix::Centi => "c",
            MetricPrefix::Milli => "m",
            MetricPrefix::Micro => "\u{03BC}",
            MetricPrefix::Nano => "n",
            MetricPrefix::Pico => "p",
            MetricPrefix::Femto => "f",
            MetricPrefix::Atto => "a",
            MetricPrefix::Zepto => "z",
            MetricPrefix::Yocto => "y",
            MetricPrefix::Ronto => "r",
            MetricPrefix::Quecto => "q",
        }
    }

    /// Power of ten this prefix scales by.
    pub fn power_of_ten(self) -> i64 {
        match self {
            MetricPrefix::Quetta => 30,
            MetricPrefix::Ronna => 27,
            MetricPrefix::Yotta => 24,
            MetricPrefix::Zetta => 21,
            MetricPrefix::Exa => 18,
            MetricPrefix::Peta => 15,
            MetricPrefix::Tera => 12,
            MetricPrefix::Giga => 9,
            MetricPrefix::Mega => 6,
            MetricPrefix::Kilo => 3,
            MetricPrefix::Hecto => 2,
            MetricPrefix::Deca => 1,
            MetricPrefix::Deci => -1,
            MetricPrefix::Centi => -2,
            MetricPrefix::Milli => -3,
            MetricPrefix::Micro => -6,
            MetricPrefix::Nano => -9,
            MetricPrefix::Pico => -12,
            MetricPrefix::Femto => -15,
            MetricPrefix::Atto => -18,
            MetricPrefix::Zepto => -21,
            MetricPrefix::Yocto => -24,
            MetricPrefix::Ronto => -27,
            MetricPrefix::Quecto => -30,
        }
    }
}

/// The seven SI base symbols plus the named derived units.
///
/// `Gram` rather than kilogram is the symbol; `kg` is the `k` prefix on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricSymbol {
    Second,
    Metre,
    Gram,
    Ampere,
    Kelvin,
    Mole,
    Candela,
    Radian,
    Steradian,
    Hertz,
    Newton,
    Pascal,
    Joule,
    Watt,
    Coulomb,
    Volt,
    Farad,
    Ohm,
    Siemens,
    Weber,
    Tesla,
    Henry,
    Lumen,
    Lux,
    Becquerel,
    Gray,
    Sievert,
    Katal,
}

static METRIC_SYMBOLS: phf::Map<&'static str, MetricSymbol> = phf_map! {
    "s" => MetricSymbol::Second,
    "m" => MetricSymbol::Metre,
    "g" => MetricSymbol::Gram,
    "A" => MetricSymbol::Ampere,
    "K" => MetricSymbol::Kelvin,
    "mol" => MetricSymbol::Mole,
    "cd" => MetricSymbol::Candela,
    "rad" => MetricSymbol::Radian,
    "sr" => MetricSymbol::Steradian,
    "Hz" => MetricSymbol::Hertz,
    "N" => MetricSymbol::Newton,
    "Pa" => MetricSymbol::Pascal,
    "J" => MetricSymbol::Joule,
    "W" => MetricSymbol::Watt,
    "C" => MetricSymbol::Coulomb,
    "V" => MetricSymbol::Volt,
    "F" => MetricSymbol::Farad,
    "\u{03A9}" => MetricSymbol::Ohm,
    "\u{2126}" => MetricSymbol::Ohm,
    "S" => MetricSymbol::Siemens,
    "Wb" => MetricSymbol::Weber,
    "T" => MetricSymbol::Tesla,
    "H" => MetricSymbol::Henry,
    "lm" => MetricSymbol::Lumen,
    "lx" => MetricSymbol::Lux,
    "Bq" => MetricSymbol::Becquerel,
    "Gy" => MetricSymbol::Gray,
    "Sv" => MetricSymbol::Sievert,
    "kat" => MetricSymbol::Katal,
};

impl MetricSymbol {
    pub const ALL: [MetricSymbol; 28] = [
        MetricSymbol::Second,
        MetricSymbol::Metre,
        MetricSymbol::Gram,
        MetricSymbol::Ampere,
        MetricSymbol::Kelvin,
        MetricSymbol::Mole,
        MetricSymbol::Candela,
        MetricSymbol::Radian,
        MetricSymbol::Steradian,
        MetricSymbol::Hertz,
        MetricSymbol::Newton,
        MetricSymbol::Pascal,
        MetricSymbol::Joule,
        MetricSymbol::Watt,
        MetricSymbol::Coulomb,
        MetricSymbol::Volt,
        MetricSymbol::Farad,
        MetricSymbol::Ohm,
        MetricSymbol::Siemens,
        MetricSymbol::Weber,
        MetricSymbol::Tesla,
        MetricSymbol::Henry,
        MetricSymbol::Lumen,
        MetricSymbol::Lux,
        MetricSymbol::Becquerel,
        MetricSymbol::Gray,
        MetricSymbol::Sievert,
        MetricSymbol::Katal,
    ];

    pub fn from_symbol(s: &str) -> Option<Self> {
        METRIC_SYMBOLS.get(s).copied()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MetricSymbol::Second => "s",
            MetricSymbol::Metre => "m",
            MetricSymbol::Gram => "g",
            MetricSymbol::Ampere => "A",
            MetricSymbol::Kelvin => "K",
            MetricSymbol::Mole => "mol",
            MetricSymbol::Candela => "cd",
            MetricSymbol::Radian => "rad",
            MetricSymbol::Steradian => "sr",
            MetricSymbol::Hertz => "Hz",
            MetricSymbol::Newton => "N",
            MetricSymbol::Pascal => "Pa",
            MetricSymbol::Joule => "J",
            MetricSymbol::Watt => "W",
            MetricSymbol::Coulomb => "C",
            MetricSymbol::Volt => "V",
            MetricSymbol::Farad => "F",
            MetricSymbol::Ohm => "\u{03A9}",
            MetricSymbol::Siemens => "S",
            MetricSymbol::Weber => "Wb",
            MetricSymbol::Tesla => "T",
            MetricSymbol::Henry => "H",
            MetricSymbol::Lumen => "lm",
            MetricSymbol::Lux => "lx",
            MetricSymbol::Becquerel => "Bq",
            MetricSymbol::Gray => "Gy",
            MetricSymbol::Sievert => "Sv",
            MetricSymbol::Katal => "kat",
        }
    }

    /// Exponents over the SI base quantities `(s, m, kg, A, K, mol, cd)`.
    pub fn si_dimensions(self) -> SiDimensions {
        let d = match self {
            MetricSymbol::Second => [1, 0, 0, 0, 0, 0, 0],
            MetricSymbol::Metre => [0, 1, 0, 0, 0, 0, 0],
            MetricSymbol::Gram => [0, 0, 1, 0, 0, 0, 0],
            MetricSymbol::Ampere => [0, 0, 0, 1, 0, 0, 0],
            MetricSymbol::Kelvin => [0, 0, 0, 0, 1, 0, 0],
            MetricSymbol::Mole => [0, 0, 0, 0, 0, 1, 0],
            MetricSymbol::Candela => [0, 0, 0, 0, 0, 0, 1],
            MetricSymbol::Radian | MetricSymbol::Steradian => [0; 7],
            MetricSymbol::Hertz | MetricSymbol::Becquerel => [-1, 0, 0, 0, 0, 0, 0],
            MetricSymbol::Newton => [-2, 1, 1, 0, 0, 0, 0],
            MetricSymbol::Pascal => [-2, -1, 1, 0, 0, 0, 0],
            MetricSymbol::Joule => [-2, 2, 1, 0, 0, 0, 0],
            MetricSymbol::Watt => [-3, 2, 1, 0, 0, 0, 0],
            MetricSymbol::Coulomb => [1, 0, 0, 1, 0, 0, 0],
            MetricSymbol::Volt => [-3, 2, 1, -1, 0, 0, 0],
            MetricSymbol::Farad => [4, -2, -1, 2, 0, 0, 0],
            MetricSymbol::Ohm => [-3, 2, 1, -2, 0, 0, 0],
            MetricSymbol::Siemens => [3, -2, -1, 2, 0, 0, 0],
            MetricSymbol::Weber => [-2, 2, 1, -1, 0, 0, 0],
            MetricSymbol::Tesla => [-2, 0, 1, -1, 0, 0, 0],
            MetricSymbol::Henry => [-2, 2, 1, -2, 0, 0, 0],
            MetricSymbol::Lumen => [0, 0, 0, 0, 0, 0, 1],
            MetricSymbol::Lux => [0, -2, 0, 0, 0, 0, 1],
            MetricSymbol::Gray | MetricSymbol::Sievert => [-2, 2, 0, 0, 0, 0, 0],
            MetricSymbol::Katal => [-1, 0, 0, 0, 0, 1, 0],
        };
        SiDimensions(d)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryPrefix {
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

const BINARY_PREFIXES: &[(&str, BinaryPrefix)] = &[
    ("Ki", BinaryPrefix::Kibi),
    ("Mi", BinaryPrefix::Mebi),
    ("Gi", BinaryPrefix::Gibi),
    ("Ti", BinaryPrefix::Tebi),
    ("Pi", BinaryPrefix::Pebi),
    ("Ei", BinaryPrefix::Exbi),
    ("Zi", BinaryPrefix::Zebi),
    ("Yi", BinaryPrefix::Yobi),
];

impl BinaryPrefix {
    pub const ALL: [BinaryPrefix; 8] = [
        BinaryPrefix::Kibi,
        BinaryPrefix::Mebi,
        BinaryPrefix::Gibi,
        BinaryPrefix::Tebi,
        BinaryPrefix::Pebi,
        BinaryPrefix::Exbi,
        BinaryPrefix::Zebi,
        BinaryPrefix::Yobi,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryPrefix::Kibi => "Ki",
            BinaryPrefix::Mebi => "Mi",
            BinaryPrefix::Gibi => "Gi",
            BinaryPrefix::Tebi => "Ti",
            BinaryPrefix::Pebi => "Pi",
            BinaryPrefix::Exbi => "Ei",
            BinaryPrefix::Zebi => "Zi",
            BinaryPrefix::Yobi => "Yi",
        }
    }

    /// Power of two this prefix scales by.
    pub fn power_of_two(self) -> i64 {
        match self {
            BinaryPrefix::Kibi => 10,
            BinaryPrefix::Mebi => 20,
            BinaryPrefix::Gibi => 30,
            BinaryPrefix::Tebi => 40,
            BinaryPrefix::Pebi => 50,
            BinaryPrefix::Exbi => 60,
            BinaryPrefix::Zebi => 70,
            BinaryPrefix::Yobi => 80,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinarySymbol {
    Byte,
}

impl BinarySymbol {
    pub fn from_symbol(s: &str) -> Option<Self> {
        (s == "B").then_some(BinarySymbol::Byte)
    }

    pub fn symbol(self) -> &'static str {
        "B"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OtherSymbol {
    /// `τ`, one full turn.
    Turn,
}

impl OtherSymbol {
    pub fn from_symbol(s: &str) -> Option<Self> {
        (s == "\u{03C4}").then_some(OtherSymbol::Turn)
    }

    pub fn symbol(self) -> &'static str {
        "\u{03C4}"
    }
}

/// A resolved atomic unit: prefix (if any) and symbol, tagged by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitLiteral {
    Metric {
        prefix: Option<MetricPrefix>,
        symbol: MetricSymbol,
    },
    Binary {
        prefix: Option<BinaryPrefix>,
        symbol: BinarySymbol,
    },
    Other {
        symbol: OtherSymbol,
    },
}

/// Unit identity with any prefix factored out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitSymbol {
    Metric(MetricSymbol),
    Binary(BinarySymbol),
    Other(OtherSymbol),
}

impl UnitSymbol {
    pub fn symbol(self) -> &'static str {
        match self {
            UnitSymbol::Metric(s) => s.symbol(),
            UnitSymbol::Binary(s) => s.symbol(),
            UnitSymbol::Other(s) => s.symbol(),
        }
    }

    pub fn si_dimensions(self) -> SiDimensions {
        match self {
            UnitSymbol::Metric(s) => s.si_dimensions(),
            UnitSymbol::Binary(_) | UnitSymbol::Other(_) => SiDimensions::ZERO,
        }
    }

    /// `rad`, `sr` or `τ`.
    pub fn is_angle(self) -> bool {
        matches!(
            self,
            UnitSymbol::Metric(MetricSymbol::Radian | MetricSymbol::Steradian)
                | UnitSymbol::Other(OtherSymbol::Turn)
        )
    }
}

impl fmt::Display for UnitSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl UnitLiteral {
    /// Resolve literal text against the closed tables.
    ///
    /// Metric readings are tried first, then binary, then other. Within a
    /// kind the longest prefix that leaves a valid symbol wins, and the
    /// unprefixed reading is tried last.
    pub fn resolve(text: &str) -> Option<Self> {
        Self::resolve_metric(text)
            .or_else(|| Self::resolve_binary(text))
            .or_else(|| {
                OtherSymbol::from_symbol(text).map(|symbol| UnitLiteral::Other { symbol })
            })
    }

    fn resolve_metric(text: &str) -> Option<Self> {
        for (spelling, prefix) in METRIC_PREFIXES {
            if let Some(symbol) = text
                .strip_prefix(spelling)
                .and_then(MetricSymbol::from_symbol)
            {
                return Some(UnitLiteral::Metric {
                    prefix: Some(*prefix),
                    symbol,
                });
            }
        }
        MetricSymbol::from_symbol(text).map(|symbol| UnitLiteral::Metric {
            prefix: None,
            symbol,
        })
    }

    fn resolve_binary(text: &str) -> Option<Self> {
        for (spelling, prefix) in BINARY_PREFIXES {
            if let Some(symbol) = text
                .strip_prefix(spelling)
                .and_then(BinarySymbol::from_symbol)
            {
                return Some(UnitLiteral::Binary {
                    prefix: Some(*prefix),
                    symbol,
                });
            }
        }
        BinarySymbol::from_symbol(text).map(|symbol| UnitLiteral::Binary {
            prefix: None,
            symbol,
        })
    }

    pub fn unit_symbol(&self) -> UnitSymbol {
        match *self {
            UnitLiteral::Metric { symbol, .. } => UnitSymbol::Metric(symbol),
            UnitLiteral::Binary { symbol, .. } => UnitSymbol::Binary(symbol),
            UnitLiteral::Other { symbol } => UnitSymbol::Other(symbol),
        }
    }

    /// Canonical prefix spelling, empty when unprefixed.
    pub fn prefix_symbol(&self) -> &'static str {
        match *self {
            UnitLiteral::Metric {
                prefix: Some(p), ..
            } => p.symbol(),
            UnitLiteral::Binary {
                prefix: Some(p), ..
            } => p.symbol(),
            _ => "",
        }
    }

    pub fn power_of_ten(&self) -> i64 {
        match *self {
            UnitLiteral::Metric {
                prefix: Some(p), ..
            } => p.power_of_ten(),
            _ => 0,
        }
    }

    pub fn power_of_two(&self) -> i64 {
        match *self {
            UnitLiteral::Binary {
                prefix: Some(p), ..
            } => p.power_of_two(),
            _ => 0,
        }
    }
}

impl fmt::Display for UnitLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix_symbol())?;
        f.write_str(self.unit_symbol().symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(prefix: Option<MetricPrefix>, symbol: MetricSymbol) -> Option<UnitLiteral> {
        Some(UnitLiteral::Metric { prefix, symbol })
    }

    #[test]
    fn test_bare_symbols_are_not_split() {
        assert_eq!(UnitLiteral::resolve("mol"), metric(None, MetricSymbol::Mole));
        assert_eq!(UnitLiteral::resolve("cd"), metric(None, MetricSymbol::Candela));
        assert_eq!(UnitLiteral::resolve("Pa"), metric(None, MetricSymbol::Pascal));
        assert_eq!(UnitLiteral::resolve("T"), metric(None, MetricSymbol::Tesla));
    }

    #[test]
    fn test_longest_prefix_wins() {
        assert_eq!(
            UnitLiteral::resolve("daN"),
            metric(Some(MetricPrefix::Deca), MetricSymbol::Newton)
        );
        assert_eq!(
            UnitLiteral::resolve("dam"),
            metric(Some(MetricPrefix::Deca), MetricSymbol::Metre)
        );
        assert_eq!(
            UnitLiteral::resolve("dm"),
            metric(Some(MetricPrefix::Deci), MetricSymbol::Metre)
        );
    }

    #[test]
    fn test_micro_and_ohm_spellings() {
        let greek = UnitLiteral::resolve("\u{03BC}s");
        let sign = UnitLiteral::resolve("\u{00B5}s");
        assert_eq!(greek, sign);
        assert_eq!(greek, metric(Some(MetricPrefix::Micro), MetricSymbol::Second));
        assert_eq!(
            UnitLiteral::resolve("k\u{2126}"),
            UnitLiteral::resolve("k\u{03A9}")
        );
    }

    #[test]
    fn test_binary_and_other() {
        assert_eq!(
            UnitLiteral::resolve("KiB"),
            Some(UnitLiteral::Binary {
                prefix: Some(BinaryPrefix::Kibi),
                symbol: BinarySymbol::Byte
            })
        );
        assert_eq!(
            UnitLiteral::resolve("\u{03C4}"),
            Some(UnitLiteral::Other {
                symbol: OtherSymbol::Turn
            })
        );
        // Metric prefixes never combine with the byte.
        assert_eq!(UnitLiteral::resolve("kB"), None);
        assert_eq!(UnitLiteral::resolve("k\u{03C4}"), None);
        assert_eq!(UnitLiteral::resolve("Kim"), None);
    }

    #[test]
    fn test_every_prefixed_literal_resolves_to_itself() {
        for prefix in MetricPrefix::ALL {
            for symbol in MetricSymbol::ALL {
                let literal = UnitLiteral::Metric {
                    prefix: Some(prefix),
                    symbol,
                };
                assert_eq!(UnitLiteral::resolve(&literal.to_string()), Some(literal));
            }
        }
        for prefix in BinaryPrefix::ALL {
            let literal = UnitLiteral::Binary {
                prefix: Some(prefix),
                symbol: BinarySymbol::Byte,
            };
            assert_eq!(UnitLiteral::resolve(&literal.to_string()), Some(literal));
        }
    }

    #[test]
    fn test_write_exponent() {
        let mut out = String::new();
        write_exponent(&mut out, -12).unwrap();
        assert_eq!(out, "\u{207B}\u{00B9}\u{00B2}");

        let mut out = String::new();
        write_exponent(&mut out, 1).unwrap();
        assert_eq!(out, "");
    }
}
