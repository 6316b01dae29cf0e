use {
    std::{any::type_name, fmt::Display},
    thiserror::Error,
};

/// Arithmetic that would otherwise wrap around, panic, or lose precision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("{ty} overflow: {lhs} {op} {rhs}")]
    Overflow {
        ty: &'static str,
        op: char,
        lhs: String,
        rhs: String,
    },

    #[error("division by zero: {lhs} / 0")]
    DivisionByZero { lhs: String },

    #[error("{value} does not fit in {ty}")]
    Narrowing { ty: &'static str, value: String },
}

impl MathError {
    pub fn overflow<T>(op: char, lhs: T, rhs: T) -> Self
    where
        T: Display,
    {
        Self::Overflow {
            ty: type_name::<T>(),
            op,
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }

    pub fn division_by_zero(lhs: impl Display) -> Self {
        Self::DivisionByZero {
            lhs: lhs.to_string(),
        }
    }

    /// `value` was to be narrowed into a `T` but is out of its range.
    pub fn narrowing<T>(value: impl Display) -> Self {
        Self::Narrowing {
            ty: type_name::<T>(),
            value: value.to_string(),
        }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;
