use lazy_static::lazy_static;

use crate::constants::MAX_CONSTANT;
use crate::BigNumber;

lazy_static! {
    /// The canonical zero. Always non-negative.
    pub static ref ZERO: BigNumber = BigNumber::from_small(0, true);
    /// The multiplicative identity.
    pub static ref ONE: BigNumber = BigNumber::from_small(1, true);
    /// Negative one.
    pub static ref NEG_ONE: BigNumber = BigNumber::from_small(1, false);

    pub(crate) static ref POS_CACHE: [BigNumber; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigNumber::from_small(i as u8, true));
    pub(crate) static ref NEG_CACHE: [BigNumber; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigNumber::from_small(i as u8, false));
}
