use {
    serde::Serialize,
    swap_math::MathError,
    swap_storage::StdError,
    swap_types::{MemoError, Name, PairId, Symbol, TokenId, TokenIdentity},
    thiserror::Error,
};

/// The category a [`PoolError`] falls into.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    Arithmetic,
    Unauthorized,
    Storage,
    /// Raised by the host when an outbound transfer can't be dispatched.
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    InvalidMemo(#[from] MemoError),

    #[error("token not added: {token}")]
    TokenNotFound { token: TokenIdentity },

    #[error("token id not exist: {token_id}")]
    TokenIdNotFound { token_id: TokenId },

    #[error("token pair not created: ({token1_id}, {token2_id})")]
    PairNotCreated {
        token1_id: TokenId,
        token2_id: TokenId,
    },

    #[error("token pair id not exist: {pair_id}")]
    PairNotFound { pair_id: PairId },

    #[error("no asset deposited to the pair: owner {owner}, pair {pair_id}")]
    EscrowNotFound { owner: Name, pair_id: PairId },

    #[error("symbol is invalid: {symbol}")]
    InvalidSymbol { symbol: Symbol },

    #[error("cannot create pair with the same token: {token}")]
    SameToken { token: TokenIdentity },

    #[error("token is not in the pair: token {token_id}, pair {pair_id}")]
    TokenNotInPair { token_id: TokenId, pair_id: PairId },

    #[error("insufficient liquidity: requested {requested}, available {available}")]
    InsufficientLiquidity { requested: u64, available: u64 },

    #[error("pair {pair_id} has no liquidity")]
    EmptyPool { pair_id: PairId },

    #[error("pair {pair_id} has a zero reserve but outstanding liquidity")]
    InconsistentReserves { pair_id: PairId },

    #[error("swap would drain the output reserve of pair {pair_id}")]
    PoolDrained { pair_id: PairId },

    #[error("deposit into pair {pair_id} would mint zero liquidity")]
    ZeroLiquidityMinted { pair_id: PairId },

    #[error("unauthorized: {sender} cannot act for {owner}")]
    Unauthorized { owner: Name, sender: Name },
}

impl PoolError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PoolError::Math(_) => ErrorKind::Arithmetic,
            PoolError::Std(StdError::Math(_)) => ErrorKind::Arithmetic,
            PoolError::Std(_) => ErrorKind::Storage,
            PoolError::TokenNotFound { .. }
            | PoolError::TokenIdNotFound { .. }
            | PoolError::PairNotCreated { .. }
            | PoolError::PairNotFound { .. }
            | PoolError::EscrowNotFound { .. } => ErrorKind::NotFound,
            PoolError::InvalidMemo(_)
            | PoolError::InvalidSymbol { .. }
            | PoolError::SameToken { .. }
            | PoolError::TokenNotInPair { .. }
            | PoolError::InsufficientLiquidity { .. }
            | PoolError::EmptyPool { .. }
            | PoolError::InconsistentReserves { .. }
            | PoolError::PoolDrained { .. }
            | PoolError::ZeroLiquidityMinted { .. } => ErrorKind::InvalidArgument,
            PoolError::Unauthorized { .. } => ErrorKind::Unauthorized,
        }
    }
}

pub type PoolResult<T> = core::result::Result<T, PoolError>;
