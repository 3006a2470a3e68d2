//! Big Number \
//! This crate provides:
//! - [`BigNumber`]: Immutable arbitrary-precision signed decimal integers in
//!   sign-magnitude form, with parsing, total ordering and the four basic
//!   arithmetic operations. Multiplication uses a Karatsuba-style recursion
//!   over decimal digit strings; division is truncating long division.
//!
//! # Example
//! ```
//! use big_number::BigNumber;
//!
//! let a: BigNumber = "10000000000000".parse().unwrap();
//! let b: BigNumber = "-900000000000".parse().unwrap();
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! ```

mod big_number;
mod cache;
mod constants;
mod error;
mod magnitude;

pub use big_number::BigNumber;
pub use cache::{NEG_ONE, ONE, ZERO};
pub use error::BigNumberError;

#[cfg(test)]
mod tests {
    use crate::{BigNumber, NEG_ONE, ONE, ZERO};

    #[test]
    fn it_works() {
        let a: BigNumber = "10000000000000".parse().unwrap();
        let b: BigNumber = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_text(), "10900000000000");
        assert_eq!((&a - &b).to_text(), "9100000000000");
        assert_eq!((&a * &b).to_text(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_text(), "11");
    }

    #[test]
    fn shared_constants() {
        assert_eq!(ZERO.to_text(), "0");
        assert_eq!(ONE.to_text(), "1");
        assert_eq!(NEG_ONE.to_text(), "-1");
        assert_eq!(&*ONE + &*NEG_ONE, *ZERO);
    }
}
