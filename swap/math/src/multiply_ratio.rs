use crate::{MathResult, NextNumber, Number, PrevNumber};

/// Describes operations where a number is multiplied by a numerator then
/// immediately divided by a denominator.
///
/// This is different from applying a multiplication and a division
/// sequentially, because the multiplication part can overflow. Implementations
/// perform the multiplication in the next bigger word size, and only narrow
/// the quotient back down.
pub trait MultiplyRatio: Sized {
    fn checked_multiply_ratio_floor(self, numerator: Self, denominator: Self) -> MathResult<Self>;
}

impl<T> MultiplyRatio for T
where
    T: NextNumber + Copy,
    T::Next: Number + PrevNumber<Prev = T>,
{
    fn checked_multiply_ratio_floor(self, numerator: Self, denominator: Self) -> MathResult<Self> {
        self.into_next()
            .checked_mul(numerator.into_next())?
            .checked_div(denominator.into_next())?
            .checked_into_prev()
    }
}

// ----------------------------------- tests -----------------------------------
