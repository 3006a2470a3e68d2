//! Arithmetic over raw decimal magnitude strings.
//!
//! Every function here operates on canonical, most-significant-digit-first
//! ASCII digit strings: `"0"` for zero, no leading zeros otherwise, no sign.
//! Validation happens once at the public [`crate::BigNumber`] boundary;
//! these helpers trust their input and never re-parse.

use std::cmp::Ordering;

use crate::constants::KARATSUBA_BASE_DIGITS;

/// Compares two magnitudes: by length first, then lexicographically.
/// Canonical form has no leading zeros, so more digits means larger.
pub(crate) fn cmp(x: &str, y: &str) -> Ordering {
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Schoolbook addition with carry propagation from the least significant end.
pub(crate) fn add(x: &str, y: &str) -> String {
    let xb = x.as_bytes();
    let yb = y.as_bytes();
    let mut out = Vec::with_capacity(xb.len().max(yb.len()) + 1);
    let mut i = xb.len();
    let mut j = yb.len();
    let mut carry = 0u8;
    while i > 0 || j > 0 || carry > 0 {
        let mut sum = carry;
        if i > 0 {
            i -= 1;
            sum += xb[i] - b'0';
        }
        if j > 0 {
            j -= 1;
            sum += yb[j] - b'0';
        }
        carry = sum / 10;
        out.push(b'0' + sum % 10);
    }
    // digits were produced least significant first
    out.into_iter().rev().map(char::from).collect()
}

/// Subtraction with borrow propagation. The caller guarantees `x >= y`;
/// a borrow reduces the next more-significant minuend digit by one, wrapping
/// the current digit by ten.
pub(crate) fn sub(x: &str, y: &str) -> String {
    let xb = x.as_bytes();
    let yb = y.as_bytes();
    let mut out = Vec::with_capacity(xb.len());
    let mut j = yb.len();
    let mut borrow = 0u8;
    for i in (0..xb.len()).rev() {
        let mut take = borrow;
        if j > 0 {
            j -= 1;
            take += yb[j] - b'0';
        }
        let d = xb[i] - b'0';
        if d < take {
            out.push(b'0' + d + 10 - take);
            borrow = 1;
        } else {
            out.push(b'0' + d - take);
            borrow = 0;
        }
    }
    // strip what will become leading zeros once reversed
    while out.len() > 1 && out.last() == Some(&b'0') {
        out.pop();
    }
    out.into_iter().rev().map(char::from).collect()
}

/// Karatsuba multiplication over decimal strings.
///
/// Below [`KARATSUBA_BASE_DIGITS`] the product fits native arithmetic.
/// Otherwise both operands are zero-extended on the most-significant side to
/// the common length `n` and split as `x = a * 10^m + b` with `m = n - n/2`;
/// the cross term is recovered from a single extra product of the half sums.
pub(crate) fn mul(x: &str, y: &str) -> String {
    if x == "0" || y == "0" {
        return String::from("0");
    }
    if x.len() < KARATSUBA_BASE_DIGITS && y.len() < KARATSUBA_BASE_DIGITS {
        return (to_native(x) * to_native(y)).to_string();
    }

    let n = x.len().max(y.len());
    let m = n - n / 2;
    let xp = padded(x, n);
    let yp = padded(y, n);
    let (xh, xl) = xp.split_at(n / 2);
    let (yh, yl) = yp.split_at(n / 2);
    let (xh, xl) = (trimmed(xh), trimmed(xl));
    let (yh, yl) = (trimmed(yh), trimmed(yl));

    let z2 = mul(xh, yh);
    let z0 = mul(xl, yl);
    // (a + b)(c + d) - z2 - z0 = ad + bc, never negative
    let cross = mul(&add(xh, xl), &add(yh, yl));
    let z1 = sub(&sub(&cross, &z2), &z0);

    add(&add(&shifted(&z2, 2 * m), &shifted(&z1, m)), &z0)
}

/// Long division, truncating. The caller guarantees `y != "0"`.
///
/// One quotient digit per position, found by repeated subtraction of the
/// right-shifted divisor; each count stays in `0..=9` because digits are
/// base ten.
pub(crate) fn div(x: &str, y: &str) -> String {
    match cmp(x, y) {
        Ordering::Less => return String::from("0"),
        Ordering::Equal => return String::from("1"),
        Ordering::Greater => {}
    }

    let mut places = x.len() - y.len() + 1;
    if cmp(&x[..y.len()], y) == Ordering::Less {
        places -= 1;
    }

    let mut remainder = x.to_string();
    let mut quotient = String::with_capacity(places);
    for pos in (0..places).rev() {
        let trial = shifted(y, pos);
        let mut digit = 0u8;
        while cmp(&remainder, &trial) != Ordering::Less {
            remainder = sub(&remainder, &trial);
            digit += 1;
        }
        quotient.push(char::from(b'0' + digit));
    }
    quotient
}

/// Value of a short canonical magnitude; only called below the Karatsuba
/// base-case threshold.
fn to_native(s: &str) -> u64 {
    s.bytes().fold(0u64, |n, b| n * 10 + u64::from(b - b'0'))
}

/// Zero-extends on the most-significant side to `width`.
fn padded(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    for _ in s.len()..width {
        out.push('0');
    }
    out.push_str(s);
    out
}

/// Strips leading zeros, mapping an all-zero slice to `"0"`.
fn trimmed(s: &str) -> &str {
    let t = s.trim_start_matches('0');
    if t.is_empty() {
        "0"
    } else {
        t
    }
}

/// Appends `zeros` trailing zeros, i.e. multiplies by `10^zeros`.
fn shifted(s: &str, zeros: usize) -> String {
    if s == "0" {
        return String::from("0");
    }
    let mut out = String::with_capacity(s.len() + zeros);
    out.push_str(s);
    for _ in 0..zeros {
        out.push('0');
    }
    out
}

#[test]
fn test_cmp() {
    assert_eq!(cmp("123", "99"), Ordering::Greater);
    assert_eq!(cmp("99", "123"), Ordering::Less);
    assert_eq!(cmp("123", "124"), Ordering::Less);
    assert_eq!(cmp("123", "123"), Ordering::Equal);
    assert_eq!(cmp("0", "1"), Ordering::Less);
}

#[test]
fn test_add() {
    assert_eq!(add("0", "0"), "0");
    assert_eq!(add("999", "1"), "1000");
    assert_eq!(add("1", "999"), "1000");
    assert_eq!(add("123456789", "987654321"), "1111111110");
}

#[test]
fn test_sub() {
    assert_eq!(sub("1000", "1"), "999");
    assert_eq!(sub("123", "123"), "0");
    assert_eq!(sub("10000", "9999"), "1");
    assert_eq!(sub("1111111110", "987654321"), "123456789");
}

#[test]
fn test_mul_base_case() {
    assert_eq!(mul("0", "9999"), "0");
    assert_eq!(mul("9999", "0"), "0");
    assert_eq!(mul("1323", "1"), "1323");
    assert_eq!(mul("147", "9"), "1323");
    assert_eq!(mul("9999", "9999"), "99980001");
}

#[test]
fn test_mul_recursive() {
    // crosses the base-case threshold on one then both sides
    assert_eq!(mul("12345", "9"), "111105");
    assert_eq!(mul("123456789", "987654321"), "121932631112635269");
    // (10^20 - 1)^2 = 10^40 - 2 * 10^20 + 1
    let nines = "9".repeat(20);
    let expected = format!("{}8{}1", "9".repeat(19), "0".repeat(19));
    assert_eq!(mul(&nines, &nines), expected);
    // powers of ten exercise the zero-heavy split paths
    let pow = format!("1{}", "0".repeat(30));
    let sq = format!("1{}", "0".repeat(60));
    assert_eq!(mul(&pow, &pow), sq);
}

#[test]
fn test_div() {
    assert_eq!(div("100", "7"), "14");
    assert_eq!(div("99", "100"), "0");
    assert_eq!(div("100", "100"), "1");
    assert_eq!(div("1000000", "1000"), "1000");
    // repunit: (10^18 - 1) / 9
    assert_eq!(div(&"9".repeat(18), "9"), "1".repeat(18));
    assert_eq!(
        div("123456789012345678901234567890", "987654321"),
        "124999998873437499901"
    );
}
