use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode, ToPrimitive};
use std::fmt;
use std::str::FromStr;

/// Units per whole currency amount: four fractional digits.
const SCALE: i64 = 10_000;
/// Units per cent, used when rendering currency with two digits.
const UNITS_PER_CENT: i64 = SCALE / 100;
/// Fractional digits kept when parsing.
const FRACTION_DIGITS: i64 = 4;
/// A parsed value below 10^-5 rounds to zero; one at or above 10^16 cannot fit.
const MIN_MAGNITUDE: i64 = -5;
const MAX_MAGNITUDE: i64 = 16;

/// Fixed-point monetary value stored in 1/10_000 units.
///
/// Balances never go through floating point: text is parsed with
/// `BigDecimal`, rounded to four places and stored as an `i64`. Arithmetic
/// is only exposed in checked form so a balance can never wrap.
///
/// # Examples
/// ```
/// use bank_ledger::common::money::Money;
///
/// let amount: Money = "12.5".parse().unwrap();
/// assert_eq!(amount.as_i64(), 125_000);
/// assert_eq!(amount.to_string_4dp(), "12.5000");
/// assert_eq!(amount.to_string_2dp(), "12.50");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Whole currency amount, e.g. `Money::whole(100)` is 100.0000.
    pub fn whole(value: i64) -> Option<Self> {
        value.checked_mul(SCALE).map(Self)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn to_string_4dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.4}", bd)
    }

    /// Currency rendering with two places, rounding half away from zero.
    pub fn to_string_2dp(&self) -> String {
        let half = UNITS_PER_CENT / 2;
        let abs = self.0.unsigned_abs();
        let cents = (abs + half as u64) / UNITS_PER_CENT as u64;
        let sign = if self.0 < 0 && cents > 0 { "-" } else { "" };
        format!("{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

impl FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Bound the decimal exponent before rescaling; `1e30000000` is a
        // valid BigDecimal that would otherwise expand to millions of digits.
        let (mantissa, scale) = bd.as_bigint_and_exponent();
        let digits = mantissa.magnitude().to_string();
        if digits == "0" {
            return Ok(Money::zero());
        }
        let magnitude = (digits.len() as i64).saturating_sub(scale);
        if magnitude > MAX_MAGNITUDE {
            return Err(ParseBigDecimalError::Other("amount overflow".into()));
        }
        if magnitude <= MIN_MAGNITUDE {
            return Ok(Money::zero());
        }

        // Half away from zero, matching `to_string_2dp`.
        let (units, _) = bd
            .with_scale_round(FRACTION_DIGITS, RoundingMode::HalfUp)
            .as_bigint_and_exponent();
        let value = units
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_4dp())
    }
}
