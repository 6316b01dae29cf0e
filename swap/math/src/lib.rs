mod error;
mod multiply_ratio;
mod next;
mod number;

pub use {error::*, multiply_ratio::*, next::*, number::*};
