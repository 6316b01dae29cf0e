use crate::{MathError, MathResult};

/// Describes a number type that can be losslessly cast into a type of a
/// bigger word size.
///
/// E.g. `u64` can be safely cast into `u128`, so [`NextNumber`] is
/// implemented for `u64` with `Next` being `u128`.
pub trait NextNumber {
    type Next;

    fn into_next(self) -> Self::Next;
}

/// Describes a number type that can be cast into a type of a smaller word
/// size, failing if the value doesn't fit.
pub trait PrevNumber: Sized {
    type Prev;

    fn checked_into_prev(self) -> MathResult<Self::Prev>;
}

macro_rules! impl_next {
    ($this:ty => $next:ty) => {
        impl NextNumber for $this {
            type Next = $next;

            #[inline]
            fn into_next(self) -> Self::Next {
                self.into()
            }
        }

        impl PrevNumber for $next {
            type Prev = $this;

            fn checked_into_prev(self) -> MathResult<Self::Prev> {
                <$this>::try_from(self)
                    .map_err(|_| MathError::narrowing::<$this>(self))
            }
        }
    };
}

impl_next!(u64 => u128);
