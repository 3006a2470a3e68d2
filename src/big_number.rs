//! # BigNumber
//! Immutable arbitrary-precision signed decimal integers in sign-magnitude
//! form. Digits are stored base ten, least significant first, with no
//! most-significant zeros except for the single-digit zero itself. Zero is
//! always stored non-negative.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Div, DivAssign,
    Mul, MulAssign,
    Neg,
    Sub, SubAssign,
};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::cache::{NEG_CACHE, NEG_ONE, ONE, POS_CACHE, ZERO};
use crate::constants::{FORMAT_CONTEXT_CHARS, MAX_CONSTANT};
use crate::error::BigNumberError;
use crate::magnitude;

#[derive(Debug)]
pub struct BigNumber {
    /// `true` means non-negative.
    sign: bool,
    /// Base-10 digits, index 0 is the least significant.
    digits: Vec<u8>,
    /// Lazily rendered canonical decimal text; derived, never authoritative.
    text: OnceLock<String>,
}

impl Clone for BigNumber {
    fn clone(&self) -> Self {
        BigNumber {
            sign: self.sign,
            digits: self.digits.clone(),
            text: OnceLock::new(),
        }
    }
}

// construction
impl BigNumber {
    /// `digits` must already be canonical.
    fn new(digits: Vec<u8>, sign: bool) -> Self {
        BigNumber { sign, digits, text: OnceLock::new() }
    }

    /// Strips most-significant zeros and forces the canonical sign for zero.
    fn canonical(mut digits: Vec<u8>, sign: bool) -> Self {
        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        let sign = sign || digits[..] == [0];
        BigNumber::new(digits, sign)
    }

    /// Direct constructor for the small-value caches; must not route through
    /// `value_of`, which reads those caches.
    pub(crate) fn from_small(val: u8, non_negative: bool) -> Self {
        let digits = if val < 10 {
            vec![val]
        } else {
            vec![val % 10, val / 10]
        };
        BigNumber::new(digits, non_negative || val == 0)
    }

    /// Builds a value from explicit digits, least significant first, with
    /// `sign == true` meaning non-negative. Rejects digits outside `0..=9`;
    /// the result is canonicalized like every other entry point.
    pub fn from_digits(digits: Vec<u8>, sign: bool) -> Result<Self, BigNumberError> {
        if digits.is_empty() {
            return Err(BigNumberError::EmptyDigits);
        }
        if let Some(&digit) = digits.iter().find(|d| **d > 9) {
            return Err(BigNumberError::InvalidDigit { digit });
        }
        Ok(BigNumber::canonical(digits, sign))
    }

    /// Parses decimal text: an optional single leading `+` or `-`, then at
    /// least one digit. Leading zeros are stripped; an all-zero body
    /// canonicalizes to non-negative zero.
    pub fn parse(input: &str) -> Result<Self, BigNumberError> {
        let (sign, body) = match input.as_bytes().first() {
            Some(b'-') => (false, &input[1..]),
            Some(b'+') => (true, &input[1..]),
            _ => (true, input),
        };
        if body.is_empty() {
            return Err(BigNumberError::Format { snippet: input.to_string() });
        }
        let chars: Vec<char> = body.chars().collect();
        if let Some(bad) = chars.iter().position(|c| !c.is_ascii_digit()) {
            let lo = bad.saturating_sub(FORMAT_CONTEXT_CHARS);
            let hi = (bad + FORMAT_CONTEXT_CHARS).min(chars.len());
            let snippet = chars[lo..hi].iter().collect();
            return Err(BigNumberError::Format { snippet });
        }
        let trimmed = body.trim_start_matches('0');
        if trimmed.is_empty() {
            return Ok(ZERO.clone());
        }
        let digits = trimmed.bytes().rev().map(|b| b - b'0').collect();
        Ok(BigNumber::new(digits, sign))
    }

    fn value_of(val: u64, non_negative: bool) -> BigNumber {
        if val == 0 {
            return ZERO.clone();
        }
        if val <= MAX_CONSTANT as u64 {
            return if non_negative {
                POS_CACHE[val as usize].clone()
            } else {
                NEG_CACHE[val as usize].clone()
            };
        }
        let mut digits = Vec::new();
        let mut v = val;
        while v != 0 {
            digits.push((v % 10) as u8);
            v /= 10;
        }
        BigNumber::new(digits, non_negative)
    }
}

macro_rules! impl_from_unsigned {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigNumber {
        fn from(val: $u) -> Self {
            BigNumber::value_of(val as u64, true)
        }
    }
    )*
    };
}

macro_rules! impl_from_signed {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigNumber {
        fn from(val: $i) -> Self {
            BigNumber::value_of(val.unsigned_abs() as u64, val >= 0)
        }
    }
    )*
    };
}
impl_from_unsigned!(u8, u16, u32, usize, u64);
impl_from_signed!(i8, i16, i32, isize, i64);

impl FromStr for BigNumber {
    type Err = BigNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigNumber::parse(s)
    }
}

// rendering
impl BigNumber {
    /// Canonical decimal text: optional leading `-`, digits most significant
    /// first, no leading zeros except for the value zero. Rendered once and
    /// cached.
    pub fn to_text(&self) -> &str {
        self.text.get_or_init(|| {
            let mut s = String::with_capacity(self.digits.len() + 1);
            if !self.sign {
                s.push('-');
            }
            for d in self.digits.iter().rev() {
                s.push(char::from(b'0' + d));
            }
            s
        })
    }

    /// Unsigned decimal text of the magnitude, for the string-arithmetic
    /// helpers.
    fn magnitude_text(&self) -> String {
        self.digits.iter().rev().map(|d| char::from(b'0' + d)).collect()
    }

    /// Rebuilds a value from a canonical magnitude string produced by the
    /// helpers.
    fn from_magnitude_text(mag: &str, sign: bool) -> BigNumber {
        let digits = mag.bytes().rev().map(|b| b - b'0').collect();
        BigNumber::canonical(digits, sign)
    }
}

impl Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_text())
    }
}

// predicates and accessors
impl BigNumber {
    pub fn is_zero(&self) -> bool {
        self.digits[..] == [0]
    }

    pub fn is_negative(&self) -> bool {
        !self.sign
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.sign {
            1
        } else {
            -1
        }
    }

    pub fn abs(&self) -> BigNumber {
        BigNumber::new(self.digits.clone(), true)
    }
}

// comparison
impl BigNumber {
    /// Compares magnitudes: more digits wins (canonical form has no leading
    /// zeros), then the first differing digit from the most significant end.
    fn cmp_magnitude(&self, other: &BigNumber) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for BigNumber {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.digits == other.digits
    }
}
impl Eq for BigNumber {}

impl Ord for BigNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self.cmp_magnitude(other),
            // for negatives the larger magnitude is the smaller value
            (false, false) => self.cmp_magnitude(other).reverse(),
        }
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// negation
impl Neg for BigNumber {
    type Output = BigNumber;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        BigNumber::new(self.digits, !self.sign)
    }
}

impl Neg for &BigNumber {
    type Output = BigNumber;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// addition
impl Add for BigNumber {
    type Output = BigNumber;

    fn add(self, val: Self) -> Self::Output {
        if val.is_zero() {
            return self;
        }
        if self.is_zero() {
            return val;
        }

        if self.sign == val.sign {
            let sign = self.sign;
            return BigNumber::new(
                BigNumber::add_digits(&self.digits, &val.digits),
                sign,
            );
        }

        match self.cmp_magnitude(&val) {
            Ordering::Less => {
                let sign = val.sign;
                BigNumber::canonical(
                    BigNumber::sub_digits(&val.digits, &self.digits),
                    sign,
                )
            }
            Ordering::Equal => ZERO.clone(),
            Ordering::Greater => {
                let sign = self.sign;
                BigNumber::canonical(
                    BigNumber::sub_digits(&self.digits, &val.digits),
                    sign,
                )
            }
        }
    }
}

impl BigNumber {
    fn add_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0;
        for (i, &d) in long.iter().enumerate() {
            let mut sum = d + carry;
            if i < short.len() {
                sum += short[i];
            }
            if sum >= 10 {
                sum -= 10;
                carry = 1;
            } else {
                carry = 0;
            }
            result.push(sum);
        }
        if carry != 0 {
            result.push(carry);
        }
        result
    }

    /// `big` must have the larger (or equal) magnitude. May leave
    /// most-significant zeros; callers canonicalize.
    fn sub_digits(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0;
        for (i, &d) in big.iter().enumerate() {
            let mut take = borrow;
            if i < little.len() {
                take += little[i];
            }
            if d < take {
                result.push(d + 10 - take);
                borrow = 1;
            } else {
                result.push(d - take);
                borrow = 0;
            }
        }
        result
    }
}

impl AddAssign for BigNumber {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Add for &BigNumber {
    type Output = BigNumber;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl AddAssign<&BigNumber> for BigNumber {
    fn add_assign(&mut self, rhs: &BigNumber) {
        *self = self.clone() + rhs.clone();
    }
}

// subtraction reduces to addition of the negation
impl Sub for BigNumber {
    type Output = BigNumber;

    fn sub(self, val: Self) -> Self::Output {
        self + (-val)
    }
}

impl SubAssign for BigNumber {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Sub for &BigNumber {
    type Output = BigNumber;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl SubAssign<&BigNumber> for BigNumber {
    fn sub_assign(&mut self, rhs: &BigNumber) {
        *self = self.clone() - rhs.clone();
    }
}

// multiplication
impl Mul for BigNumber {
    type Output = BigNumber;

    fn mul(self, val: Self) -> Self::Output {
        if self.is_zero() || val.is_zero() {
            return ZERO.clone();
        }
        if self == *ONE {
            return val;
        }
        if val == *ONE {
            return self;
        }
        if self == *NEG_ONE {
            return -val;
        }
        if val == *NEG_ONE {
            return -self;
        }

        let sign = self.sign == val.sign;
        let product = magnitude::mul(&self.magnitude_text(), &val.magnitude_text());
        BigNumber::from_magnitude_text(&product, sign)
    }
}

impl MulAssign for BigNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl Mul for &BigNumber {
    type Output = BigNumber;

    fn mul(self, rhs: Self) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl MulAssign<&BigNumber> for BigNumber {
    fn mul_assign(&mut self, rhs: &BigNumber) {
        *self = self.clone() * rhs.clone();
    }
}

// division
impl BigNumber {
    /// Truncating integer division, toward zero. The remainder is discarded.
    pub fn checked_div(&self, val: &BigNumber) -> Result<BigNumber, BigNumberError> {
        if val.is_zero() {
            return Err(BigNumberError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(ZERO.clone());
        }
        let sign = self.sign == val.sign;
        let quotient = magnitude::div(&self.magnitude_text(), &val.magnitude_text());
        Ok(BigNumber::from_magnitude_text(&quotient, sign))
    }
}

impl Div for BigNumber {
    type Output = BigNumber;

    /// Panics on a zero divisor; use [`BigNumber::checked_div`] to handle
    /// that case as an error.
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(&rhs) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{e}"),
        }
    }
}

impl DivAssign for BigNumber {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs;
    }
}

impl Div for &BigNumber {
    type Output = BigNumber;

    fn div(self, rhs: Self) -> Self::Output {
        self.clone() / rhs.clone()
    }
}

impl DivAssign<&BigNumber> for BigNumber {
    fn div_assign(&mut self, rhs: &BigNumber) {
        *self = self.clone() / rhs.clone();
    }
}

#[test]
fn test_parse_canonical() {
    assert_eq!(BigNumber::parse("123").unwrap().to_text(), "123");
    assert_eq!(BigNumber::parse("+123").unwrap().to_text(), "123");
    assert_eq!(BigNumber::parse("-123").unwrap().to_text(), "-123");
    assert_eq!(BigNumber::parse("00000123").unwrap().to_text(), "123");
    assert_eq!(BigNumber::parse("0").unwrap().to_text(), "0");
    assert_eq!(BigNumber::parse("-0").unwrap().to_text(), "0");
    assert_eq!(BigNumber::parse("+0000").unwrap().to_text(), "0");
    assert!(!BigNumber::parse("-0000").unwrap().is_negative());
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(matches!(
        BigNumber::parse(""),
        Err(BigNumberError::Format { .. })
    ));
    assert!(matches!(
        BigNumber::parse("+"),
        Err(BigNumberError::Format { .. })
    ));
    assert!(matches!(
        BigNumber::parse("-"),
        Err(BigNumberError::Format { .. })
    ));
    assert!(matches!(
        BigNumber::parse("+-12"),
        Err(BigNumberError::Format { .. })
    ));

    // the diagnostic points at the offending character with context
    let err = BigNumber::parse("12a34").unwrap_err();
    assert_eq!(err.to_string(), "For input string: \"12a34\"");

    let err = BigNumber::parse("123456789x123456789").unwrap_err();
    match err {
        BigNumberError::Format { snippet } => assert_eq!(snippet, "6789x123"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_from_digits() {
    let n = BigNumber::from_digits(vec![3, 2, 1], true).unwrap();
    assert_eq!(n.to_text(), "123");

    let n = BigNumber::from_digits(vec![3, 2, 1, 0, 0], false).unwrap();
    assert_eq!(n.to_text(), "-123");

    // zero canonicalizes to non-negative
    let n = BigNumber::from_digits(vec![0, 0, 0], false).unwrap();
    assert_eq!(n.to_text(), "0");
    assert!(!n.is_negative());

    assert_eq!(
        BigNumber::from_digits(vec![1, 12, 3], true),
        Err(BigNumberError::InvalidDigit { digit: 12 })
    );

    let err = BigNumber::from_digits(vec![], true).unwrap_err();
    assert_eq!(err, BigNumberError::EmptyDigits);
    assert_eq!(err.to_string(), "empty digit sequence");
}

#[test]
fn test_from_machine_integers() {
    assert_eq!(BigNumber::from(0u8).to_text(), "0");
    assert_eq!(BigNumber::from(16u32).to_text(), "16");
    assert_eq!(BigNumber::from(-16i32).to_text(), "-16");
    assert_eq!(BigNumber::from(u64::MAX).to_text(), "18446744073709551615");
    assert_eq!(
        BigNumber::from(i64::MIN).to_text(),
        "-9223372036854775808"
    );
}

#[test]
fn test_round_trip() {
    for s in ["0", "1", "-1", "42", "-9000000000000000000001", "123456789"] {
        let n = BigNumber::parse(s).unwrap();
        assert_eq!(BigNumber::parse(n.to_text()).unwrap(), n);
        assert_eq!(n.to_text(), s);
    }
}

#[test]
fn test_compare() {
    let parse = |s| BigNumber::parse(s).unwrap();
    assert!(parse("2") > parse("1"));
    assert!(parse("10") > parse("9"));
    assert!(parse("-10") < parse("-9"));
    assert!(parse("-1") < parse("0"));
    assert!(parse("0") < parse("1"));
    assert!(parse("1") > parse("-1000"));
    assert_eq!(parse("007"), parse("7"));
    assert_eq!(parse("123").cmp(&parse("123")), Ordering::Equal);
}

#[test]
fn test_add_sub() {
    let parse = |s| BigNumber::parse(s).unwrap();
    assert_eq!((parse("999") + parse("1")).to_text(), "1000");
    assert_eq!((parse("-1234") + parse("+1234")).to_text(), "0");
    assert_eq!((parse("1000") - parse("1")).to_text(), "999");
    assert_eq!((parse("1") - parse("1000")).to_text(), "-999");
    assert_eq!((parse("-5") + parse("-7")).to_text(), "-12");
    assert_eq!((parse("-5") - parse("-7")).to_text(), "2");
    assert_eq!((parse("123") + parse("0")).to_text(), "123");

    let mut n = parse("10");
    n += parse("5");
    n -= parse("20");
    assert_eq!(n.to_text(), "-5");
}

#[test]
fn test_mul() {
    let parse = |s| BigNumber::parse(s).unwrap();
    assert_eq!((parse("147") * parse("-9")).to_text(), "-1323");
    assert_eq!((parse("-147") * parse("-9")).to_text(), "1323");
    assert_eq!((parse("147") * parse("0")).to_text(), "0");
    assert_eq!((parse("1") * parse("-42")).to_text(), "-42");
    assert_eq!((parse("-1") * parse("-42")).to_text(), "42");
    assert_eq!(
        (parse("123456789") * parse("987654321")).to_text(),
        "121932631112635269"
    );
}

#[test]
fn test_div() {
    let parse = |s| BigNumber::parse(s).unwrap();
    assert_eq!((parse("100") / parse("7")).to_text(), "14");
    // truncation is toward zero, not floor
    assert_eq!((parse("-100") / parse("7")).to_text(), "-14");
    assert_eq!((parse("100") / parse("-7")).to_text(), "-14");
    assert_eq!((parse("-100") / parse("-7")).to_text(), "14");
    assert_eq!((parse("3") / parse("7")).to_text(), "0");
    assert_eq!((parse("-3") / parse("7")).to_text(), "0");
    assert_eq!((parse("7") / parse("-7")).to_text(), "-1");
    assert_eq!(
        parse("5").checked_div(&parse("0")),
        Err(BigNumberError::DivisionByZero)
    );
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_panics_on_zero() {
    let _ = BigNumber::from(5u8) / BigNumber::from(0u8);
}

#[test]
fn test_abs_signum_neg() {
    let parse = |s| BigNumber::parse(s).unwrap();
    assert_eq!(parse("-42").abs().to_text(), "42");
    assert_eq!(parse("42").abs().to_text(), "42");
    assert_eq!(parse("-42").signum(), -1);
    assert_eq!(parse("42").signum(), 1);
    assert_eq!(parse("0").signum(), 0);
    assert_eq!((-parse("42")).to_text(), "-42");
    assert_eq!((-parse("0")).to_text(), "0");
}

#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    fn big(v: i64) -> BigNumber {
        BigNumber::from(v)
    }

    proptest! {
        #[test]
        fn parse_to_text_round_trip(v in any::<i128>()) {
            let s = v.to_string();
            let n = BigNumber::parse(&s).unwrap();
            prop_assert_eq!(n.to_text(), s.as_str());
        }

        #[test]
        fn add_commutes_and_matches_native(a in any::<i64>(), b in any::<i64>()) {
            let sum = big(a) + big(b);
            prop_assert_eq!(&sum, &(big(b) + big(a)));
            prop_assert_eq!(sum.to_text(), (a as i128 + b as i128).to_string());
        }

        #[test]
        fn add_associates(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
            let left = (big(a.into()) + big(b.into())) + big(c.into());
            let right = big(a.into()) + (big(b.into()) + big(c.into()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn additive_identity_and_inverse(a in any::<i64>()) {
            prop_assert_eq!(&(big(a) + ZERO.clone()), &big(a));
            prop_assert!((big(a) + (-big(a))).is_zero());
        }

        #[test]
        fn mul_commutes_and_matches_native(a in any::<i64>(), b in any::<i64>()) {
            let product = big(a) * big(b);
            prop_assert_eq!(&product, &(big(b) * big(a)));
            prop_assert_eq!(product.to_text(), (a as i128 * b as i128).to_string());
        }

        #[test]
        fn mul_associates(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            // 19-digit operands make every intermediate product recurse
            let left = (big(a) * big(b)) * big(c);
            let right = big(a) * (big(b) * big(c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn multiplicative_identity_and_annihilator(a in any::<i64>()) {
            prop_assert_eq!(&(big(a) * ONE.clone()), &big(a));
            prop_assert!((big(a) * ZERO.clone()).is_zero());
        }

        #[test]
        fn mul_sign_rule(a in any::<i64>(), b in any::<i64>()) {
            prop_assume!(a != 0 && b != 0);
            let product = big(a) * big(b);
            prop_assert_eq!(product.is_negative(), (a < 0) != (b < 0));
        }

        #[test]
        fn div_truncates(a in any::<i64>(), b in any::<i64>()) {
            prop_assume!(b != 0);
            let quotient = big(a).checked_div(&big(b)).unwrap();
            prop_assert_eq!(quotient.to_text(), (a as i128 / b as i128).to_string());
            // multiplying back differs from a by less than |b|
            let residue = big(a) - quotient * big(b);
            prop_assert!(residue.abs() < big(b).abs());
            if !residue.is_zero() {
                prop_assert_eq!(residue.is_negative(), a < 0);
            }
        }

        #[test]
        fn compare_agrees_with_subtract(a in any::<i64>(), b in any::<i64>()) {
            let diff = big(a) - big(b);
            prop_assert_eq!(big(a).cmp(&big(b)) == Ordering::Less, diff.is_negative());
            prop_assert_eq!(big(a) == big(b), diff.is_zero());
        }

        #[test]
        fn karatsuba_matches_native_on_wide_operands(
            a in any::<u64>(), b in any::<u64>()
        ) {
            // products of 20-digit operands go through several splits
            let wide_a = BigNumber::from(a) * BigNumber::from(a);
            let wide_b = BigNumber::from(b) * BigNumber::from(b);
            let expected = (a as u128 * a as u128).to_string();
            prop_assert_eq!(wide_a.to_text(), expected);
            let product = wide_a * wide_b;
            let parsed = BigNumber::parse(product.to_text()).unwrap();
            prop_assert_eq!(parsed, product);
        }
    }
}
