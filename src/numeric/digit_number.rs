// ============================================================================
// Digit Number
// Fixed-shape decimal value stored as separate integer and fractional digits
// ============================================================================

use super::errors::{DigitPart, NumericError, NumericResult};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Inline capacity covers the widest operands the quiz generates (18 digits).
type Digits = SmallVec<[u8; 20]>;

/// Relative tolerance used by equality, matching `math.isclose` defaults.
const REL_TOLERANCE: f64 = 1e-9;

/// Decimal number whose digits are individually addressable.
///
/// Integer digits are stored least-significant first, fractional digits
/// most-significant first, so position 0 is always the digit closest to the
/// decimal point. Both sequences keep the length they were built with.
///
/// The numeric value is
/// `sign × (Σ integer[i]·10^i + Σ fractional[i]·10^-(i+1))`.
///
/// # Example
/// ```
/// use mindcalc::numeric::{DigitNumber, DigitPart};
///
/// let x = DigitNumber::try_from(3.14).unwrap();
/// assert_eq!(x.digit(0, DigitPart::Integer), Ok(3));
/// assert_eq!(x.digit(1, DigitPart::Fractional), Ok(4));
///
/// let sum = x.checked_add(1.86).unwrap();
/// assert_eq!(sum.value(), 5.0);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DigitNumber {
    negative: bool,
    integer: Digits,
    fractional: Digits,
}

// ============================================================================
// Operand Coercion
// ============================================================================

/// Anything that can stand on the right-hand side of a digit-number operator.
///
/// Scalars and strings are decomposed into a [`DigitNumber`] first.
pub trait Operand {
    fn into_digit_number(self) -> NumericResult<DigitNumber>;
}

impl Operand for DigitNumber {
    #[inline]
    fn into_digit_number(self) -> NumericResult<DigitNumber> {
        Ok(self)
    }
}

impl Operand for &DigitNumber {
    #[inline]
    fn into_digit_number(self) -> NumericResult<DigitNumber> {
        Ok(self.clone())
    }
}

impl Operand for f64 {
    fn into_digit_number(self) -> NumericResult<DigitNumber> {
        DigitNumber::try_from(self)
    }
}

impl Operand for &str {
    fn into_digit_number(self) -> NumericResult<DigitNumber> {
        self.parse()
    }
}

impl Operand for String {
    fn into_digit_number(self) -> NumericResult<DigitNumber> {
        self.parse()
    }
}

impl Operand for Decimal {
    fn into_digit_number(self) -> NumericResult<DigitNumber> {
        DigitNumber::try_from(self)
    }
}

macro_rules! integer_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DigitNumber {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_integer(value as i128)
                }
            }

            impl Operand for $t {
                #[inline]
                fn into_digit_number(self) -> NumericResult<DigitNumber> {
                    Ok(DigitNumber::from(self))
                }
            }
        )*
    };
}

integer_operand!(i32, i64, i128, u8, u32, u64, usize);

impl DigitNumber {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a zero-valued number with the given digit counts.
    pub fn zeroed(integer_length: usize, fractional_length: usize) -> Self {
        Self {
            negative: false,
            integer: SmallVec::from_elem(0, integer_length),
            fractional: SmallVec::from_elem(0, fractional_length),
        }
    }

    /// Create a zero-valued number from optional digit counts.
    ///
    /// A missing count means an empty part.
    ///
    /// # Errors
    /// Returns `InvalidInput` when neither length is supplied.
    pub fn with_lengths(
        integer_length: Option<usize>,
        fractional_length: Option<usize>,
    ) -> NumericResult<Self> {
        if integer_length.is_none() && fractional_length.is_none() {
            return Err(NumericError::InvalidInput);
        }
        Ok(Self::zeroed(
            integer_length.unwrap_or(0),
            fractional_length.unwrap_or(0),
        ))
    }

    /// Create a non-negative number from an integer part and a fraction
    /// written with exactly `fractional_length` digits.
    ///
    /// ```
    /// use mindcalc::numeric::DigitNumber;
    ///
    /// // 123.05
    /// let x = DigitNumber::from_parts(123, 5, 2).unwrap();
    /// assert_eq!(x.fractional_length(), 2);
    /// assert_eq!(x.value(), 123.05);
    /// ```
    ///
    /// # Errors
    /// Returns `InvalidInput` if `fraction` needs more than
    /// `fractional_length` digits.
    pub fn from_parts(integer: u64, fraction: u64, fractional_length: usize) -> NumericResult<Self> {
        let fraction_str = if fractional_length == 0 {
            if fraction != 0 {
                return Err(NumericError::InvalidInput);
            }
            String::new()
        } else {
            format!("{:0>width$}", fraction, width = fractional_length)
        };
        if fraction_str.len() > fractional_length {
            return Err(NumericError::InvalidInput);
        }

        Ok(Self {
            negative: false,
            integer: integer_digits(integer as u128),
            fractional: fraction_str.bytes().map(|b| b - b'0').collect(),
        })
    }

    fn from_integer(value: i128) -> Self {
        Self {
            negative: value < 0,
            integer: integer_digits(value.unsigned_abs()),
            fractional: SmallVec::from_elem(0, 1),
        }
    }

    /// Build the number that holds an arithmetic result.
    fn from_result(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::Overflow);
        }
        Self::try_from(value)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The real value represented by the digits.
    pub fn value(&self) -> f64 {
        // The rendered literal is always well-formed decimal text.
        self.to_literal().parse().unwrap_or_default()
    }

    /// Signed integer value, truncated toward zero.
    ///
    /// # Errors
    /// Returns `Overflow` if the integer digits do not fit an `i128`.
    pub fn integer_part(&self) -> NumericResult<i128> {
        let magnitude = self
            .integer
            .iter()
            .rev()
            .try_fold(0i128, |acc, &d| {
                acc.checked_mul(10)?.checked_add(d as i128)
            })
            .ok_or(NumericError::Overflow)?;
        Ok(if self.negative { -magnitude } else { magnitude })
    }

    /// Fractional digits read as one contiguous integer (`3.014` -> `14`).
    ///
    /// # Errors
    /// Returns `Overflow` if the fractional digits do not fit a `u128`.
    pub fn decimal_part(&self) -> NumericResult<u128> {
        self.fractional
            .iter()
            .try_fold(0u128, |acc, &d| acc.checked_mul(10)?.checked_add(d as u128))
            .ok_or(NumericError::Overflow)
    }

    #[inline]
    pub fn integer_length(&self) -> usize {
        self.integer.len()
    }

    #[inline]
    pub fn fractional_length(&self) -> usize {
        self.fractional.len()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.integer.iter().chain(self.fractional.iter()).all(|&d| d == 0)
    }

    /// True when any fractional digit is non-zero.
    pub fn has_fraction(&self) -> bool {
        self.fractional.iter().any(|&d| d != 0)
    }

    // ========================================================================
    // Digit Access
    // ========================================================================

    /// Read the digit at `position` of the given part.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if `position` is outside the part's length.
    pub fn digit(&self, position: usize, part: DigitPart) -> NumericResult<u8> {
        let digits = self.digits(part);
        digits
            .get(position)
            .copied()
            .ok_or(NumericError::IndexOutOfRange {
                part,
                position,
                length: digits.len(),
            })
    }

    /// Overwrite the digit at `position` of the given part.
    ///
    /// # Errors
    /// - `InvalidDigit` if `digit > 9`
    /// - `IndexOutOfRange` if `position` is outside the part's length
    pub fn set_digit(&mut self, position: usize, part: DigitPart, digit: u8) -> NumericResult<()> {
        if digit > 9 {
            return Err(NumericError::InvalidDigit(digit));
        }
        let digits = match part {
            DigitPart::Integer => &mut self.integer,
            DigitPart::Fractional => &mut self.fractional,
        };
        let length = digits.len();
        let slot = digits
            .get_mut(position)
            .ok_or(NumericError::IndexOutOfRange {
                part,
                position,
                length,
            })?;
        *slot = digit;
        Ok(())
    }

    #[inline]
    pub fn integer_digit(&self, position: usize) -> NumericResult<u8> {
        self.digit(position, DigitPart::Integer)
    }

    #[inline]
    pub fn set_integer_digit(&mut self, position: usize, digit: u8) -> NumericResult<()> {
        self.set_digit(position, DigitPart::Integer, digit)
    }

    #[inline]
    pub fn fractional_digit(&self, position: usize) -> NumericResult<u8> {
        self.digit(position, DigitPart::Fractional)
    }

    #[inline]
    pub fn set_fractional_digit(&mut self, position: usize, digit: u8) -> NumericResult<()> {
        self.set_digit(position, DigitPart::Fractional, digit)
    }

    fn digits(&self, part: DigitPart) -> &Digits {
        match part {
            DigitPart::Integer => &self.integer,
            DigitPart::Fractional => &self.fractional,
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Fails if `rhs` cannot be coerced, or with `Overflow` when the sum is
    /// not finite.
    pub fn checked_add<T: Operand>(&self, rhs: T) -> NumericResult<Self> {
        let rhs = rhs.into_digit_number()?;
        Self::from_result(self.value() + rhs.value())
    }

    /// Checked subtraction. Negative results are allowed.
    pub fn checked_sub<T: Operand>(&self, rhs: T) -> NumericResult<Self> {
        let rhs = rhs.into_digit_number()?;
        Self::from_result(self.value() - rhs.value())
    }

    /// Checked multiplication.
    pub fn checked_mul<T: Operand>(&self, rhs: T) -> NumericResult<Self> {
        let rhs = rhs.into_digit_number()?;
        Self::from_result(self.value() * rhs.value())
    }

    /// Checked true division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the divisor's value is zero.
    pub fn checked_div<T: Operand>(&self, rhs: T) -> NumericResult<Self> {
        let rhs = rhs.into_digit_number()?;
        let divisor = rhs.value();
        if divisor == 0.0 {
            return Err(NumericError::DivisionByZero);
        }
        Self::from_result(self.value() / divisor)
    }

    /// Integer division rounding toward negative infinity.
    ///
    /// # Errors
    /// - `InvalidOperand` if either operand has a non-zero fractional digit
    /// - `DivisionByZero` if the divisor is zero
    pub fn checked_floor_div<T: Operand>(&self, rhs: T) -> NumericResult<Self> {
        let (a, b) = self.integer_operands(rhs)?;
        let quotient = a.checked_div(b).ok_or(NumericError::Overflow)?;
        let quotient = if a % b != 0 && ((a < 0) != (b < 0)) {
            quotient - 1
        } else {
            quotient
        };
        Ok(Self::from_integer(quotient))
    }

    /// Integer remainder whose sign follows the divisor.
    ///
    /// # Errors
    /// Same conditions as [`checked_floor_div`](Self::checked_floor_div).
    pub fn checked_rem<T: Operand>(&self, rhs: T) -> NumericResult<Self> {
        let (a, b) = self.integer_operands(rhs)?;
        let remainder = a.checked_rem(b).ok_or(NumericError::Overflow)?;
        let remainder = if remainder != 0 && ((remainder < 0) != (b < 0)) {
            remainder + b
        } else {
            remainder
        };
        Ok(Self::from_integer(remainder))
    }

    fn integer_operands<T: Operand>(&self, rhs: T) -> NumericResult<(i128, i128)> {
        let rhs = rhs.into_digit_number()?;
        if self.has_fraction() || rhs.has_fraction() {
            return Err(NumericError::InvalidOperand);
        }
        let divisor = rhs.integer_part()?;
        if divisor == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Ok((self.integer_part()?, divisor))
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Plain decimal text of the digits, e.g. `-12.50`.
    fn to_literal(&self) -> String {
        let mut out = String::with_capacity(self.integer.len() + self.fractional.len() + 2);
        if self.negative {
            out.push('-');
        }
        if self.integer.is_empty() {
            out.push('0');
        }
        out.extend(self.integer.iter().rev().map(|&d| char::from(b'0' + d)));
        if !self.fractional.is_empty() {
            out.push('.');
            out.extend(self.fractional.iter().map(|&d| char::from(b'0' + d)));
        }
        out
    }

    /// Convert to `rust_decimal::Decimal`, keeping every fractional digit.
    ///
    /// # Errors
    /// Returns `Overflow` if the digits exceed `Decimal`'s 28-digit range.
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        Decimal::from_str_exact(&self.to_literal()).map_err(|_| NumericError::Overflow)
    }
}

/// Decimal digits of `value`, least significant first. Zero has one digit.
fn integer_digits(mut value: u128) -> Digits {
    let mut digits = Digits::new();
    loop {
        digits.push((value % 10) as u8);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits
}

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for DigitNumber {
    type Err = NumericError;

    /// Decompose a decimal literal such as `"42"`, `"-3.14"` or `"7."`.
    ///
    /// A literal without a decimal point gets a single zero fractional digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() || body == "." {
            return Err(NumericError::InvalidInput);
        }

        let (int_str, frac_str) = match body.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (body, "0"),
        };

        let parse_digits = |part: &str| -> NumericResult<Digits> {
            part.bytes()
                .map(|b| {
                    if b.is_ascii_digit() {
                        Ok(b - b'0')
                    } else {
                        Err(NumericError::InvalidInput)
                    }
                })
                .collect()
        };

        let mut integer = parse_digits(int_str)?;
        integer.reverse();
        let fractional = parse_digits(frac_str)?;

        let mut number = Self {
            negative,
            integer,
            fractional,
        };
        if number.is_zero() {
            number.negative = false;
        }
        Ok(number)
    }
}

impl TryFrom<&str> for DigitNumber {
    type Error = NumericError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<f64> for DigitNumber {
    type Error = NumericError;

    /// Decompose the shortest decimal text that round-trips to `value`.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN and infinities.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        value.to_string().parse()
    }
}

impl TryFrom<Decimal> for DigitNumber {
    type Error = NumericError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        value.to_string().parse()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DigitNumber {
    /// Zero, shaped like the literal `0`.
    #[inline]
    fn default() -> Self {
        Self::from_integer(0)
    }
}

impl PartialEq for DigitNumber {
    /// Values are equal within `10^-max(fractional lengths)`.
    fn eq(&self, other: &Self) -> bool {
        let places = self.fractional_length().max(other.fractional_length());
        let abs_tolerance = 10f64.powi(-(places.min(i32::MAX as usize) as i32));
        is_close(self.value(), other.value(), abs_tolerance)
    }
}

impl PartialEq<f64> for DigitNumber {
    fn eq(&self, other: &f64) -> bool {
        DigitNumber::try_from(*other).is_ok_and(|other| *self == other)
    }
}

impl PartialOrd for DigitNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.value().partial_cmp(&other.value())
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.value() < other.value()
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.value() > other.value()
    }

    fn le(&self, other: &Self) -> bool {
        self.lt(other) || self == other
    }

    fn ge(&self, other: &Self) -> bool {
        self.gt(other) || self == other
    }
}

fn is_close(a: f64, b: f64, abs_tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    diff <= (REL_TOLERANCE * a.abs().max(b.abs())).max(abs_tolerance)
}

impl Neg for DigitNumber {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

// Infallible operators for ergonomics (panic on non-finite results - use checked_* in library code)
impl Add for DigitNumber {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("DigitNumber addition overflow")
    }
}

impl Sub for DigitNumber {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("DigitNumber subtraction overflow")
    }
}

impl Mul for DigitNumber {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).expect("DigitNumber multiplication overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DigitNumber {
    /// Shortest round-trip value, always with a fractional part (`5.0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        if value.fract() == 0.0 {
            write!(f, "{:.1}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}

impl fmt::Debug for DigitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitNumber({})", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
