//! CSS units and numeric values carrying a unit.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use rust_decimal::prelude::*;

use crate::version::CssVersion;
use crate::{Error, Result};

/// Maximum number of fraction digits kept when formatting or dividing.
pub const MAXIMUM_FRACTION_DIGITS: u32 = 16;

/// The dimension a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaUnit {
    FontRelativeLength,
    AbsoluteLength,
    ViewportRelativeLength,
    Percentage,
    Angle,
    Time,
    Frequency,
    Resolution,
    Flex,
}

/// A CSS unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Em,
    Ex,
    Px,
    Rem,
    Vw,
    Vh,
    Vmin,
    Ch,
    In,
    Cm,
    Mm,
    Pt,
    Pc,
    Percentage,
    Deg,
    Rad,
    Grad,
    Turn,
    Ms,
    S,
    Hz,
    Khz,
    Dpi,
    Dpcm,
    Dppx,
    Fr,
}

/// Unit names sorted longest first, so suffix matching prefers `vmin` over `in`.
static UNITS_LONGEST_FIRST: LazyLock<Vec<Unit>> = LazyLock::new(|| {
    let mut units = Unit::ALL.to_vec();
    units.sort_by(|a, b| b.name().len().cmp(&a.name().len()).then(a.name().cmp(b.name())));
    units
});

static UNITS_BY_NAME: LazyLock<HashMap<&'static str, Unit>> =
    LazyLock::new(|| Unit::ALL.iter().map(|u| (u.name(), *u)).collect());

impl Unit {
    /// All units.
    pub const ALL: [Unit; 26] = [
        Unit::Em,
        Unit::Ex,
        Unit::Px,
        Unit::Rem,
        Unit::Vw,
        Unit::Vh,
        Unit::Vmin,
        Unit::Ch,
        Unit::In,
        Unit::Cm,
        Unit::Mm,
        Unit::Pt,
        Unit::Pc,
        Unit::Percentage,
        Unit::Deg,
        Unit::Rad,
        Unit::Grad,
        Unit::Turn,
        Unit::Ms,
        Unit::S,
        Unit::Hz,
        Unit::Khz,
        Unit::Dpi,
        Unit::Dpcm,
        Unit::Dppx,
        Unit::Fr,
    ];

    /// The unit suffix as written in CSS.
    pub const fn name(&self) -> &'static str {
        match self {
            Unit::Em => "em",
            Unit::Ex => "ex",
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Vmin => "vmin",
            Unit::Ch => "ch",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Percentage => "%",
            Unit::Deg => "deg",
            Unit::Rad => "rad",
            Unit::Grad => "grad",
            Unit::Turn => "turn",
            Unit::Ms => "ms",
            Unit::S => "s",
            Unit::Hz => "hz",
            Unit::Khz => "khz",
            Unit::Dpi => "dpi",
            Unit::Dpcm => "dpcm",
            Unit::Dppx => "dppx",
            Unit::Fr => "fr",
        }
    }

    pub const fn meta_unit(&self) -> MetaUnit {
        match self {
            Unit::Em | Unit::Ex | Unit::Rem | Unit::Ch => MetaUnit::FontRelativeLength,
            Unit::Px | Unit::In | Unit::Cm | Unit::Mm | Unit::Pt | Unit::Pc => {
                MetaUnit::AbsoluteLength
            }
            Unit::Vw | Unit::Vh | Unit::Vmin => MetaUnit::ViewportRelativeLength,
            Unit::Percentage => MetaUnit::Percentage,
            Unit::Deg | Unit::Rad | Unit::Grad | Unit::Turn => MetaUnit::Angle,
            Unit::Ms | Unit::S => MetaUnit::Time,
            Unit::Hz | Unit::Khz => MetaUnit::Frequency,
            Unit::Dpi | Unit::Dpcm | Unit::Dppx => MetaUnit::Resolution,
            Unit::Fr => MetaUnit::Flex,
        }
    }

    /// The first CSS version that defines this unit.
    pub const fn min_version(&self) -> CssVersion {
        match self {
            Unit::Em
            | Unit::Ex
            | Unit::Px
            | Unit::In
            | Unit::Cm
            | Unit::Mm
            | Unit::Pt
            | Unit::Pc
            | Unit::Percentage => CssVersion::Css10,
            Unit::Deg | Unit::Rad | Unit::Grad | Unit::Ms | Unit::S | Unit::Hz | Unit::Khz => {
                CssVersion::Css21
            }
            Unit::Rem
            | Unit::Vw
            | Unit::Vh
            | Unit::Vmin
            | Unit::Ch
            | Unit::Turn
            | Unit::Dpi
            | Unit::Dpcm
            | Unit::Dppx
            | Unit::Fr => CssVersion::Css30,
        }
    }

    /// Look up a unit by its exact name.
    pub fn from_name(name: &str) -> Option<Unit> {
        UNITS_BY_NAME.get(name).copied()
    }

    /// Find the unit a CSS value ends with, preferring the longest match.
    ///
    /// `"12vmin"` matches [`Unit::Vmin`], not [`Unit::In`].
    pub fn find_suffix(value: &str) -> Option<Unit> {
        UNITS_LONGEST_FIRST
            .iter()
            .copied()
            .find(|u| value.ends_with(u.name()))
    }

    /// Format an integer with this unit (e.g., `0px`).
    pub fn format_int(&self, value: i64) -> String {
        format!("{}{}", value, self.name())
    }

    /// Format a decimal with this unit, dropping trailing zeros.
    pub fn format_decimal(&self, value: Decimal) -> String {
        format!("{}{}", format_decimal(value), self.name())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format a decimal the way CSS expects: no grouping, `.` as separator, at
/// most [`MAXIMUM_FRACTION_DIGITS`] fraction digits, no trailing zeros.
pub fn format_decimal(value: Decimal) -> String {
    value
        .round_dp_with_strategy(MAXIMUM_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// A numeric value together with its unit (e.g., `12.5px`).
///
/// Arithmetic keeps the unit of the left operand. Division rounds half-up to
/// [`MAXIMUM_FRACTION_DIGITS`] fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueWithUnit {
    value: Decimal,
    unit: Unit,
}

impl ValueWithUnit {
    pub fn new(value: Decimal, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The value truncated to an integer, if it fits.
    pub fn as_int(&self) -> Option<i64> {
        self.value.trunc().to_i64()
    }

    /// The value as a float.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.to_f64()
    }

    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = value;
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn add(&self, delta: Decimal) -> Result<Self> {
        let value = self
            .value
            .checked_add(delta)
            .ok_or_else(|| Error::invalid_argument("numeric overflow in add"))?;
        Ok(Self::new(value, self.unit))
    }

    pub fn subtract(&self, delta: Decimal) -> Result<Self> {
        let value = self
            .value
            .checked_sub(delta)
            .ok_or_else(|| Error::invalid_argument("numeric overflow in subtract"))?;
        Ok(Self::new(value, self.unit))
    }

    pub fn multiply(&self, factor: Decimal) -> Result<Self> {
        let value = self
            .value
            .checked_mul(factor)
            .ok_or_else(|| Error::invalid_argument("numeric overflow in multiply"))?;
        Ok(Self::new(value, self.unit))
    }

    /// Divide by `divisor`, rounding half-up to 16 fraction digits.
    pub fn divide(&self, divisor: Decimal) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::invalid_argument("division by zero"));
        }
        let value = self
            .value
            .checked_div(divisor)
            .ok_or_else(|| Error::invalid_argument("numeric overflow in divide"))?
            .round_dp_with_strategy(MAXIMUM_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
        Ok(Self::new(value, self.unit))
    }

    /// The value formatted for CSS output (e.g., `1.5em`).
    pub fn formatted(&self) -> String {
        self.unit.format_decimal(self.value)
    }
}

impl fmt::Display for ValueWithUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_lookup() {
        assert_eq!(Unit::from_name("px"), Some(Unit::Px));
        assert_eq!(Unit::from_name("%"), Some(Unit::Percentage));
        assert_eq!(Unit::from_name("PX"), None);
        assert_eq!(Unit::find_suffix("12vmin"), Some(Unit::Vmin));
        assert_eq!(Unit::find_suffix("3khz"), Some(Unit::Khz));
        assert_eq!(Unit::find_suffix("3dppx"), Some(Unit::Dppx));
        assert_eq!(Unit::find_suffix("12"), None);
    }

    #[test]
    fn test_unit_metadata() {
        assert_eq!(Unit::Rem.meta_unit(), MetaUnit::FontRelativeLength);
        assert_eq!(Unit::Turn.min_version(), CssVersion::Css30);
        assert_eq!(Unit::Deg.min_version(), CssVersion::Css21);
        assert_eq!(Unit::Fr.meta_unit(), MetaUnit::Flex);
        assert_eq!(Unit::Px.format_int(0), "0px");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(Decimal::new(150, 2)), "1.5");
        assert_eq!(format_decimal(Decimal::new(-25, 1)), "-2.5");
        assert_eq!(format_decimal(Decimal::ZERO), "0");
        assert_eq!(Unit::Em.format_decimal(Decimal::new(1200, 3)), "1.2em");
    }

    #[test]
    fn test_arithmetic_keeps_unit() {
        let v = ValueWithUnit::new(Decimal::from(10), Unit::Px);
        assert_eq!(v.add(Decimal::from(5)).unwrap().formatted(), "15px");
        assert_eq!(v.subtract(Decimal::from(15)).unwrap().formatted(), "-5px");
        assert_eq!(v.multiply(Decimal::new(15, 1)).unwrap().formatted(), "15px");
        assert_eq!(v.divide(Decimal::from(4)).unwrap().formatted(), "2.5px");
        assert_eq!(v.divide(Decimal::from(3)).unwrap().unit(), Unit::Px);
    }

    #[test]
    fn test_divide_rounds_half_up() {
        let v = ValueWithUnit::new(Decimal::from(1), Unit::Em);
        let third = v.divide(Decimal::from(3)).unwrap();
        assert_eq!(third.value(), Decimal::from_str("0.3333333333333333").unwrap());
        let two_thirds = ValueWithUnit::new(Decimal::from(2), Unit::Em)
            .divide(Decimal::from(3))
            .unwrap();
        assert_eq!(two_thirds.value(), Decimal::from_str("0.6666666666666667").unwrap());
    }

    #[test]
    fn test_divide_twice() {
        let v = ValueWithUnit::new(Decimal::from(100), Unit::Percentage);
        let d = Decimal::from(7);
        let twice = v.divide(d).unwrap().divide(d).unwrap();
        let direct = (Decimal::from(100) / d / d)
            .round_dp_with_strategy(MAXIMUM_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
        let diff = (twice.value() - direct).abs();
        assert!(diff <= Decimal::new(1, MAXIMUM_FRACTION_DIGITS));
        assert_eq!(twice.unit(), Unit::Percentage);
    }

    #[test]
    fn test_divide_by_zero() {
        let v = ValueWithUnit::new(Decimal::from(1), Unit::S);
        assert!(v.divide(Decimal::ZERO).is_err());
    }
}
