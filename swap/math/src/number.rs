use crate::{MathError, MathResult};

/// Unsigned integer arithmetic that reports failure instead of panicking or
/// wrapping around, so it can be propagated with `?`.
pub trait Number: Sized + Copy {
    fn is_zero(&self) -> bool;

    fn checked_add(self, other: Self) -> MathResult<Self>;

    fn checked_sub(self, other: Self) -> MathResult<Self>;

    fn checked_mul(self, other: Self) -> MathResult<Self>;

    fn checked_div(self, other: Self) -> MathResult<Self>;

    #[inline]
    fn is_non_zero(&self) -> bool {
        !self.is_zero()
    }

    /// Leaves `self` untouched on failure.
    fn checked_add_assign(&mut self, other: Self) -> MathResult<()> {
        *self = self.checked_add(other)?;
        Ok(())
    }

    /// Leaves `self` untouched on failure.
    fn checked_sub_assign(&mut self, other: Self) -> MathResult<()> {
        *self = self.checked_sub(other)?;
        Ok(())
    }
}

macro_rules! impl_number {
    ($($t:ty),+) => {
        $(
            impl Number for $t {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn checked_add(self, other: Self) -> MathResult<Self> {
                    <$t>::checked_add(self, other)
                        .ok_or_else(|| MathError::overflow('+', self, other))
                }

                fn checked_sub(self, other: Self) -> MathResult<Self> {
                    <$t>::checked_sub(self, other)
                        .ok_or_else(|| MathError::overflow('-', self, other))
                }

                fn checked_mul(self, other: Self) -> MathResult<Self> {
                    <$t>::checked_mul(self, other)
                        .ok_or_else(|| MathError::overflow('*', self, other))
                }

                fn checked_div(self, other: Self) -> MathResult<Self> {
                    <$t>::checked_div(self, other)
                        .ok_or_else(|| MathError::division_by_zero(self))
                }
            }
        )+
    };
}

// Token amounts and ids are `u64`; `u128` holds their products.
impl_number!(u64, u128);

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{MathError, Number},
        test_case::test_case,
    };

    #[test_case(u64::MAX, 1 ; "max plus one")]
    #[test_case(u64::MAX - 5, 6 ; "near max")]
    fn checked_add_overflows(a: u64, b: u64) {
        assert!(matches!(
            Number::checked_add(a, b),
            Err(MathError::Overflow { op: '+', .. })
        ));
    }

    #[test]
    fn checked_sub_assign_works() {
        let mut value = 100_u64;
        value.checked_sub_assign(30).unwrap();
        assert_eq!(value, 70);

        let err = value.checked_sub_assign(71).unwrap_err();
        assert_eq!(err.to_string(), "u64 overflow: 70 - 71");
        assert_eq!(value, 70);
    }

    #[test]
    fn checked_div_by_zero() {
        assert_eq!(
            Number::checked_div(7_u128, 0),
            Err(MathError::DivisionByZero {
                lhs: "7".to_string()
            })
        );
    }

    #[test]
    fn zero_checks() {
        assert!(0_u64.is_zero());
        assert!(5_u64.is_non_zero());
        assert!(!Number::is_zero(&1_u128));
    }
}
