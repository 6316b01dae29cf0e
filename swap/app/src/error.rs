use {
    swap_pool::{ErrorKind, PoolError},
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error("failed to dispatch {count} transfer(s): {reason}")]
    Transfer { count: usize, reason: String },
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Pool(err) => err.kind(),
            AppError::Transfer { .. } => ErrorKind::Transfer,
        }
    }
}

pub type AppResult<T> = core::result::Result<T, AppError>;
