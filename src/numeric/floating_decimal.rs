// ============================================================================
// Floating Decimal
// Arbitrary-precision decimal arithmetic with context-controlled rounding
// ============================================================================

use super::context::PrecisionContext;
use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Arbitrary-precision decimal number.
///
/// Internally stores `significand × 10^exponent` with a signed
/// arbitrary-precision significand. Construction from a string or integer is
/// exact; every arithmetic operation rounds its result to the precision of
/// the supplied [`PrecisionContext`] using round-half-to-even, and enforces
/// the context's exponent bounds.
///
/// Values are immutable: every operation produces a new `FloatingDecimal`.
/// Equality and ordering compare exact values at full stored precision, so
/// `1.20E+2` and `120` compare equal.
///
/// # Example
/// ```
/// use constants_verifier::numeric::{FloatingDecimal, PrecisionContext};
///
/// let ctx = PrecisionContext::default();
/// let a: FloatingDecimal = "6.67430e-11".parse().unwrap();
/// let b: FloatingDecimal = "6.67270e-11".parse().unwrap();
/// let diff = a.checked_sub(&b, &ctx).unwrap();
/// assert_eq!(diff.to_scientific_string(2), "1.60E-14");
/// ```
#[derive(Debug, Clone)]
pub struct FloatingDecimal {
    significand: BigInt,
    exponent: i64,
}

/// 10^n as a big integer
fn pow10(n: u64) -> BigInt {
    BigInt::from(10u32).pow(n as u32)
}

/// Number of decimal digits in |n| (1 for zero)
fn digit_count(n: &BigInt) -> u64 {
    n.magnitude().to_str_radix(10).len() as u64
}

/// Round a non-negative magnitude to `keep` digits, half-to-even.
///
/// `sticky` records whether a nonzero tail below the given magnitude was
/// already discarded (division remainders); a tie with a sticky tail is above
/// the halfway point and rounds up. Returns the rounded magnitude and the
/// number of digits dropped (including a possible extra carry digit).
fn round_magnitude(magnitude: BigInt, keep: u64, sticky: bool) -> (BigInt, i64) {
    let digits = digit_count(&magnitude);
    if digits <= keep {
        debug_assert!(!sticky, "sticky tail requires excess digits to round");
        return (magnitude, 0);
    }
    let drop = digits - keep;
    let scale = pow10(drop);
    let (mut kept, rem) = magnitude.div_rem(&scale);
    let twice = &rem * 2u8;
    let round_up = match twice.cmp(&scale) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => sticky || kept.is_odd(),
    };
    if round_up {
        kept += 1u8;
    }
    let mut shifted = drop as i64;
    if digit_count(&kept) > keep {
        // carry rippled into a new leading digit (999… -> 1000…)
        kept /= 10u8;
        shifted += 1;
    }
    (kept, shifted)
}

impl FloatingDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value zero.
    pub fn zero() -> Self {
        Self {
            significand: BigInt::zero(),
            exponent: 0,
        }
    }

    /// The value one.
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Create from an integer value, exactly.
    pub fn from_integer(value: i64) -> Self {
        Self {
            significand: BigInt::from(value),
            exponent: 0,
        }
    }

    /// Create from a raw significand and base-10 exponent, exactly.
    ///
    /// Use this when you already hold the scaled representation.
    pub fn from_parts(significand: BigInt, exponent: i64) -> Self {
        Self {
            significand,
            exponent,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.significand.is_zero()
    }

    /// Check if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.significand.is_negative()
    }

    /// Check if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.significand.is_positive()
    }

    /// Exponent of the leading significant digit (0 for zero).
    pub fn adjusted_exponent(&self) -> i64 {
        if self.is_zero() {
            0
        } else {
            self.exponent + digit_count(&self.significand) as i64 - 1
        }
    }

    /// Absolute value, exact.
    pub fn abs(&self) -> Self {
        Self {
            significand: self.significand.abs(),
            exponent: self.exponent,
        }
    }

    // ========================================================================
    // Context-rounded arithmetic
    // ========================================================================

    /// Round an exact `significand × 10^exponent` result into the context.
    fn round_to_context(
        significand: BigInt,
        exponent: i64,
        ctx: &PrecisionContext,
        sticky: bool,
    ) -> NumericResult<Self> {
        if significand.is_zero() {
            return Ok(Self::zero());
        }
        let negative = significand.is_negative();
        let (magnitude, shifted) =
            round_magnitude(significand.abs(), ctx.precision() as u64, sticky);
        let exponent = exponent + shifted;
        let adjusted = exponent + digit_count(&magnitude) as i64 - 1;
        if adjusted > ctx.emax() {
            return Err(NumericError::Overflow);
        }
        if adjusted < ctx.emin() {
            return Err(NumericError::Underflow);
        }
        let significand = if negative { -magnitude } else { magnitude };
        Ok(Self {
            significand,
            exponent,
        })
    }

    /// Align two operands on a common exponent, exactly.
    fn aligned(&self, rhs: &Self) -> (BigInt, BigInt, i64) {
        let exponent = self.exponent.min(rhs.exponent);
        let a = &self.significand * pow10((self.exponent - exponent) as u64);
        let b = &rhs.significand * pow10((rhs.exponent - exponent) as u64);
        (a, b, exponent)
    }

    /// Checked addition, rounded to context precision.
    ///
    /// # Errors
    /// `Overflow`/`Underflow` if the result exponent leaves the context range.
    pub fn checked_add(&self, rhs: &Self, ctx: &PrecisionContext) -> NumericResult<Self> {
        let (a, b, exponent) = self.aligned(rhs);
        Self::round_to_context(a + b, exponent, ctx, false)
    }

    /// Checked subtraction, rounded to context precision.
    ///
    /// # Errors
    /// `Overflow`/`Underflow` if the result exponent leaves the context range.
    pub fn checked_sub(&self, rhs: &Self, ctx: &PrecisionContext) -> NumericResult<Self> {
        let (a, b, exponent) = self.aligned(rhs);
        Self::round_to_context(a - b, exponent, ctx, false)
    }

    /// Checked multiplication, rounded to context precision.
    ///
    /// # Errors
    /// `Overflow`/`Underflow` if the result exponent leaves the context range.
    pub fn checked_mul(&self, rhs: &Self, ctx: &PrecisionContext) -> NumericResult<Self> {
        let significand = &self.significand * &rhs.significand;
        let exponent = self.exponent + rhs.exponent;
        Self::round_to_context(significand, exponent, ctx, false)
    }

    /// Checked division, correctly rounded to context precision.
    ///
    /// The dividend is scaled so the raw quotient carries at least one digit
    /// beyond the context precision; the remainder then feeds the final
    /// rounding as a sticky tail, so the result is the exact quotient rounded
    /// half-to-even.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is exactly zero
    /// - `Overflow`/`Underflow` if the result exponent leaves the context range
    pub fn checked_div(&self, rhs: &Self, ctx: &PrecisionContext) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let da = digit_count(&self.significand) as i64;
        let db = digit_count(&rhs.significand) as i64;
        let shift = db - da + ctx.precision() as i64 + 1;
        let (num, den) = if shift >= 0 {
            (self.significand.abs() * pow10(shift as u64), rhs.significand.abs())
        } else {
            (self.significand.abs(), rhs.significand.abs() * pow10((-shift) as u64))
        };
        let (quotient, remainder) = num.div_rem(&den);
        let exponent = self.exponent - rhs.exponent - shift;
        let negative = self.is_negative() != rhs.is_negative();
        let significand = if negative { -quotient } else { quotient };
        Self::round_to_context(significand, exponent, ctx, !remainder.is_zero())
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render in scientific notation with a caller-chosen fraction width.
    ///
    /// Produces `d.ddd…Esnn` with exactly `digits_after_point` fractional
    /// digits, an explicit exponent sign, and at least two exponent digits.
    /// Displayed digits are rounded half-to-even, never truncated.
    pub fn to_scientific_string(&self, digits_after_point: usize) -> String {
        let want = digits_after_point as u64 + 1;
        if self.is_zero() {
            return if digits_after_point == 0 {
                "0E+00".to_string()
            } else {
                format!("0.{}E+00", "0".repeat(digits_after_point))
            };
        }
        let mut adjusted = self.adjusted_exponent();
        let digits = digit_count(&self.significand);
        let mut magnitude = self.significand.abs();
        if digits > want {
            let (rounded, shifted) = round_magnitude(magnitude, want, false);
            // a rounding carry can move the decimal point up one place
            adjusted = self.exponent + shifted + digit_count(&rounded) as i64 - 1;
            magnitude = rounded;
        } else if digits < want {
            magnitude *= pow10(want - digits);
        }
        let rendered = magnitude.to_str_radix(10);
        let (head, tail) = rendered.split_at(1);
        let sign = if self.is_negative() { "-" } else { "" };
        let exp_sign = if adjusted < 0 { '-' } else { '+' };
        if tail.is_empty() {
            format!("{}{}E{}{:02}", sign, head, exp_sign, adjusted.unsigned_abs())
        } else {
            format!("{}{}.{}E{}{:02}", sign, head, tail, exp_sign, adjusted.unsigned_abs())
        }
    }

    // ========================================================================
    // Conversion to/from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert from `rust_decimal::Decimal`, exactly.
    ///
    /// This is intended for API boundaries (values arriving on the standard
    /// ecosystem decimal type).
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self {
            significand: BigInt::from(d.mantissa()),
            exponent: -(d.scale() as i64),
        }
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries and display-precision consumers.
    ///
    /// # Errors
    /// `PrecisionLoss` if the value does not fit the 96-bit mantissa or the
    /// 0–28 scale range of `rust_decimal`.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        if self.is_zero() {
            return Ok(rust_decimal::Decimal::ZERO);
        }
        let mut significand = self.significand.clone();
        let mut exponent = self.exponent;
        if exponent > 0 {
            significand *= pow10(exponent as u64);
            exponent = 0;
        }
        while exponent < -28 && (&significand % 10u8).is_zero() {
            significand /= 10u8;
            exponent += 1;
        }
        if exponent < -28 {
            return Err(NumericError::PrecisionLoss);
        }
        let mantissa = significand.to_i128().ok_or(NumericError::PrecisionLoss)?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, (-exponent) as u32)
            .map_err(|_| NumericError::PrecisionLoss)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for FloatingDecimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for FloatingDecimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatingDecimal {}

impl PartialOrd for FloatingDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatingDecimal {
    /// Exact value comparison at full stored precision.
    fn cmp(&self, other: &Self) -> Ordering {
        let sign_order = self.significand.sign().cmp(&other.significand.sign());
        if sign_order != Ordering::Equal {
            return sign_order;
        }
        if self.is_zero() {
            return Ordering::Equal;
        }
        let la = self.adjusted_exponent();
        let ra = other.adjusted_exponent();
        if la != ra {
            return if self.is_positive() {
                la.cmp(&ra)
            } else {
                ra.cmp(&la)
            };
        }
        let (a, b, _) = self.aligned(other);
        a.cmp(&b)
    }
}

impl Neg for FloatingDecimal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            significand: -self.significand,
            exponent: self.exponent,
        }
    }
}

impl fmt::Display for FloatingDecimal {
    /// Scientific notation carrying every stored digit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = digit_count(&self.significand);
        write!(f, "{}", self.to_scientific_string(digits as usize - 1))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for FloatingDecimal {
    type Err = NumericError;

    /// Parse from a decimal string, exactly.
    ///
    /// Accepts an optional sign, an optional fraction, and an optional
    /// `e`/`E` exponent:
    /// - "299792458" -> 299792458
    /// - "6.67430e-11" -> 6.67430 × 10⁻¹¹
    /// - "-0.015625" -> -0.015625
    ///
    /// All given digits are retained; rounding to working precision happens
    /// on the first arithmetic operation, not at construction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (is_negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (mantissa_str, exp_shift) = if let Some(pos) = s.find(['e', 'E']) {
            let exp: i64 = s[pos + 1..].parse().map_err(|_| NumericError::InvalidInput)?;
            (&s[..pos], exp)
        } else {
            (s, 0)
        };

        let (int_str, frac_str) = if let Some(pos) = mantissa_str.find('.') {
            (&mantissa_str[..pos], &mantissa_str[pos + 1..])
        } else {
            (mantissa_str, "")
        };
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let digits: String = [int_str, frac_str].concat();
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumericError::InvalidInput);
        }

        let significand = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or(NumericError::InvalidInput)?;
        let exponent = exp_shift - frac_str.len() as i64;

        Ok(Self {
            significand: if is_negative { -significand } else { significand },
            exponent,
        })
    }
}

// ============================================================================
// Serde (string form, optional)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for FloatingDecimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FloatingDecimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ctx() -> PrecisionContext {
        PrecisionContext::default()
    }

    fn dec(s: &str) -> FloatingDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_integer() {
        let x = FloatingDecimal::from_integer(299_792_458);
        assert_eq!(x.to_scientific_string(8), "2.99792458E+08");
        assert!(x.is_positive());
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(dec("42"), FloatingDecimal::from_integer(42));
        assert_eq!(dec("6.67430e-11"), dec("667430E-16"));
        assert_eq!(dec("-0.001"), dec("-1e-3"));
        assert_eq!(dec("+1.5"), dec("1.5"));
        assert_eq!(dec("0.00"), FloatingDecimal::zero());
    }

    #[test]
    fn test_parse_invalid() {
        for bad in ["", "-", "abc", "1.2.3", "1e", "1e+", "--5", "0x10"] {
            assert_eq!(
                bad.parse::<FloatingDecimal>(),
                Err(NumericError::InvalidInput),
                "input {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_add_sub() {
        let c = ctx();
        let a = dec("1.5");
        let b = dec("2.25");
        assert_eq!(a.checked_add(&b, &c).unwrap(), dec("3.75"));
        assert_eq!(a.checked_sub(&b, &c).unwrap(), dec("-0.75"));
        // exact alignment across exponents
        let small = dec("1e-20");
        let sum = dec("1").checked_add(&small, &c).unwrap();
        assert_eq!(sum.to_scientific_string(20), "1.00000000000000000001E+00");
    }

    #[test]
    fn test_mul_div() {
        let c = ctx();
        let a = dec("0.25");
        let b = dec("64");
        assert_eq!(a.checked_mul(&b, &c).unwrap(), dec("16"));
        assert_eq!(b.checked_div(&a, &c).unwrap(), dec("256"));
    }

    #[test]
    fn test_div_repeating() {
        let c = ctx();
        let third = dec("1").checked_div(&dec("3"), &c).unwrap();
        // 34 significant digits, all threes
        assert_eq!(
            third.to_scientific_string(33),
            "3.333333333333333333333333333333333E-01"
        );
        let two_thirds = dec("2").checked_div(&dec("3"), &c).unwrap();
        // final digit rounds up
        assert_eq!(
            two_thirds.to_scientific_string(33),
            "6.666666666666666666666666666666667E-01"
        );
    }

    #[test]
    fn test_div_by_zero() {
        let c = ctx();
        assert_eq!(
            dec("1").checked_div(&FloatingDecimal::zero(), &c),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            dec("1").checked_div(&dec("0.000"), &c),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_round_half_even_mul() {
        // precision 2: ties resolve toward the even last digit
        let c = PrecisionContext::with_precision(2).unwrap();
        let one = FloatingDecimal::one();
        assert_eq!(
            dec("1.25").checked_mul(&one, &c).unwrap(),
            dec("1.2")
        );
        assert_eq!(
            dec("1.35").checked_mul(&one, &c).unwrap(),
            dec("1.4")
        );
        assert_eq!(
            dec("-1.25").checked_mul(&one, &c).unwrap(),
            dec("-1.2")
        );
        // above the tie rounds up regardless of parity
        assert_eq!(
            dec("1.251").checked_mul(&one, &c).unwrap(),
            dec("1.3")
        );
    }

    #[test]
    fn test_div_sticky_breaks_tie() {
        let c = PrecisionContext::with_precision(1).unwrap();
        // 0.45 / 1: exact tie at the kept digit, 4 is even, stays down
        let q = dec("0.45").checked_div(&dec("1"), &c).unwrap();
        assert_eq!(q.to_scientific_string(0), "4E-01");
        // a nonzero tail behind the tie digit pushes the quotient above the
        // halfway point, so it rounds up despite the even kept digit
        let q = dec("0.4500000000001").checked_div(&dec("1"), &c).unwrap();
        assert_eq!(q.to_scientific_string(0), "5E-01");
    }

    #[test]
    fn test_rounding_carry() {
        // 9.99 rounded to 2 digits carries into a new leading digit
        let c = PrecisionContext::with_precision(2).unwrap();
        let x = dec("9.99").checked_mul(&FloatingDecimal::one(), &c).unwrap();
        assert_eq!(x, dec("10"));
        assert_eq!(x.to_scientific_string(1), "1.0E+01");
    }

    #[test]
    fn test_exponent_bounds() {
        let c = PrecisionContext::new(34, -10, 10).unwrap();
        let big = dec("1e6");
        assert_eq!(big.checked_mul(&big, &c), Err(NumericError::Overflow));
        let small = dec("1e-6");
        assert_eq!(small.checked_mul(&small, &c), Err(NumericError::Underflow));
        // within bounds passes
        assert!(big.checked_mul(&small, &c).is_ok());
    }

    #[test]
    fn test_abs_neg() {
        let x = dec("-2.5");
        assert_eq!(x.abs(), dec("2.5"));
        assert_eq!(-x, dec("2.5"));
        assert_eq!(FloatingDecimal::zero().abs(), FloatingDecimal::zero());
    }

    #[test]
    fn test_comparison() {
        assert!(dec("1e-30") > FloatingDecimal::zero());
        assert!(dec("-1e30") < dec("-1e-30"));
        assert!(dec("6.674e-11") > dec("6.673e-11"));
        assert_eq!(dec("1.20e2"), dec("120"));
        assert!(dec("2") > dec("-3"));
    }

    #[test]
    fn test_scientific_string_display_rounding() {
        assert_eq!(dec("1.25").to_scientific_string(1), "1.2E+00");
        assert_eq!(dec("1.35").to_scientific_string(1), "1.4E+00");
        assert_eq!(dec("9.99").to_scientific_string(1), "1.0E+01");
        assert_eq!(dec("-9.996").to_scientific_string(2), "-1.00E+01");
        assert_eq!(dec("6.62607015e-34").to_scientific_string(8), "6.62607015E-34");
        assert_eq!(dec("137.035999177").to_scientific_string(9), "1.370359992E+02");
        assert_eq!(FloatingDecimal::zero().to_scientific_string(4), "0.0000E+00");
        assert_eq!(FloatingDecimal::zero().to_scientific_string(0), "0E+00");
    }

    #[test]
    fn test_display_full_precision() {
        assert_eq!(dec("6.67430e-11").to_string(), "6.67430E-11");
        assert_eq!(dec("-120").to_string(), "-1.20E+02");
        assert_eq!(dec("0").to_string(), "0E+00");
    }

    #[test]
    fn test_render_parse_round_trip_at_precision() {
        let c = ctx();
        let x = dec("2").checked_div(&dec("3"), &c).unwrap();
        let rendered = x.to_scientific_string(c.precision() as usize - 1);
        let reparsed: FloatingDecimal = rendered.parse().unwrap();
        assert_eq!(reparsed, x);
    }

    #[test]
    fn test_from_decimal() {
        let d = rust_decimal::Decimal::new(12345, 2); // 123.45
        let x = FloatingDecimal::from_decimal(d);
        assert_eq!(x, dec("123.45"));
    }

    #[test]
    fn test_to_decimal() {
        let x = dec("123.456");
        assert_eq!(x.to_decimal().unwrap().to_string(), "123.456");
        // 10^-34 exceeds rust_decimal's scale range
        assert_eq!(
            dec("6.62607015e-34").to_decimal(),
            Err(NumericError::PrecisionLoss)
        );
        // trailing zeros are shed to fit the scale range
        assert_eq!(dec("1e-30").to_decimal(), Err(NumericError::PrecisionLoss));
        assert_eq!(
            dec("1000e-30").to_decimal().unwrap(),
            rust_decimal::Decimal::try_from_i128_with_scale(1, 27).unwrap()
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_round_trip() {
        let x = dec("6.67430e-11");
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "\"6.67430E-11\"");
        let back: FloatingDecimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }

    proptest! {
        /// Render-at-full-precision then parse reproduces the stored value.
        #[test]
        fn prop_render_parse_round_trip(sig in -1_000_000_000i64..1_000_000_000, exp in -40i64..40) {
            let x = FloatingDecimal::from_parts(BigInt::from(sig), exp);
            let reparsed: FloatingDecimal = x.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, x);
        }

        /// Addition then subtraction of the same operand is the identity
        /// whenever both values fit the working precision exactly.
        #[test]
        fn prop_add_sub_inverse(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let c = PrecisionContext::default();
            let x = FloatingDecimal::from_integer(a);
            let y = FloatingDecimal::from_integer(b);
            let back = x.checked_add(&y, &c).unwrap().checked_sub(&y, &c).unwrap();
            prop_assert_eq!(back, x);
        }

        /// Ordering matches integer ordering and negation reverses it.
        #[test]
        fn prop_ordering(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let x = FloatingDecimal::from_integer(a);
            let y = FloatingDecimal::from_integer(b);
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
            prop_assert_eq!((-x).cmp(&(-y)), b.cmp(&a));
        }
    }
}
