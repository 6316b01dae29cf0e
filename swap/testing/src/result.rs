use {
    std::fmt::{Debug, Display},
    swap_app::AppError,
    swap_pool::{ErrorKind, PoolError},
};

/// Errors that fall into one of the [`ErrorKind`] categories.
pub trait HasErrorKind {
    fn kind(&self) -> ErrorKind;
}

impl HasErrorKind for PoolError {
    fn kind(&self) -> ErrorKind {
        PoolError::kind(self)
    }
}

impl HasErrorKind for AppError {
    fn kind(&self) -> ErrorKind {
        AppError::kind(self)
    }
}

/// Addition methods for result types.
/// Useful for testing, improving code readability.
pub trait ResultExt: Sized {
    type Success;
    type Error;

    /// Ensure the result is ok; return the value.
    fn should_succeed(self) -> Self::Success;

    /// Ensure the result is ok, and matches the expect value.
    fn should_succeed_and_equal<U>(self, expect: U) -> Self::Success
    where
        Self::Success: Debug + PartialEq<U>,
        U: Debug,
    {
        let success = self.should_succeed();
        assert_eq!(
            success, expect,
            "success as expected, but with different value! expecting: {expect:?}, got: {success:?}"
        );
        success
    }

    /// Ensure the result is error; return the error.
    fn should_fail(self) -> Self::Error;

    /// Ensure the result is error, and the error message contains the expect
    /// value as a substring.
    fn should_fail_with_error<U>(self, expect: U) -> Self::Error
    where
        Self::Error: Display,
        U: Display,
    {
        let error = self.should_fail();
        assert!(
            error.to_string().contains(&expect.to_string()),
            "fail as expected, but with wrong error! expecting: {expect}, got: {error}"
        );
        error
    }

    /// Ensure the result is error of the given kind.
    fn should_fail_with_kind(self, kind: ErrorKind) -> Self::Error
    where
        Self::Error: Display + HasErrorKind,
    {
        let error = self.should_fail();
        assert_eq!(
            error.kind(),
            kind,
            "fail as expected, but with wrong kind of error! expecting: {kind:?}, got: {error}"
        );
        error
    }

    /// Ensure the result is error of the given kind, and the error message
    /// contains the expect value as a substring.
    fn should_fail_with<U>(self, kind: ErrorKind, expect: U) -> Self::Error
    where
        Self::Error: Display + HasErrorKind,
        U: Display,
    {
        let error = self.should_fail_with_kind(kind);
        assert!(
            error.to_string().contains(&expect.to_string()),
            "fail as expected, but with wrong error! expecting: {expect}, got: {error}"
        );
        error
    }
}

impl<T, E> ResultExt for Result<T, E>
where
    T: Debug,
    E: Display,
{
    type Error = E;
    type Success = T;

    fn should_succeed(self) -> Self::Success {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => panic!("expecting ok, got error: {err}"),
        }
    }

    fn should_fail(self) -> Self::Error {
        match self {
            Self::Err(err) => err,
            Self::Ok(value) => panic!("expecting error, got ok: {value:?}"),
        }
    }
}
