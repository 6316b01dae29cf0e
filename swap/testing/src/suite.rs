use {
    crate::RecordingGateway,
    serde::de::DeserializeOwned,
    swap_app::{App, AppError, AppResult},
    swap_pool::{PoolError, SenderAuthorizer},
    swap_storage::{MemStorage, Order, Record, StdError, Storage},
    swap_types::{
        EscrowEntry, ExecuteMsg, Name, PairId, PairRecord, QueryMsg, Response, TokenIdentity,
        Transfer, TransferNotice,
    },
};

pub const CONTRACT: &str = "simpleswap";

/// Parse a name, panicking if it's invalid.
pub fn name(s: &str) -> Name {
    s.parse()
        .unwrap_or_else(|err| panic!("invalid name `{s}`: {err}"))
}

/// Build a token identity from an issuer and a `<precision>,<CODE>` symbol.
pub fn token(issuer: &str, symbol: &str) -> TokenIdentity {
    let symbol = symbol
        .parse()
        .unwrap_or_else(|err| panic!("invalid symbol `{symbol}`: {err}"));

    TokenIdentity::new(name(issuer), symbol)
}

/// A pool host over an in-memory store, with a gateway that records every
/// outbound transfer.
pub struct TestSuite {
    pub app: App<MemStorage, RecordingGateway, SenderAuthorizer>,
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSuite {
    pub fn new() -> Self {
        Self::with_gateway(RecordingGateway::new())
    }

    pub fn with_gateway(gateway: RecordingGateway) -> Self {
        Self {
            app: App::new(MemStorage::new(), gateway, SenderAuthorizer, name(CONTRACT)),
        }
    }

    pub fn contract(&self) -> Name {
        self.app.contract()
    }

    pub fn execute(&self, sender: &str, msg: ExecuteMsg) -> AppResult<Response> {
        self.app.execute(name(sender), msg)
    }

    pub fn register_token(&self, token: TokenIdentity) -> AppResult<Response> {
        self.execute(CONTRACT, ExecuteMsg::RegisterToken { token })
    }

    pub fn create_pair(&self, token1: TokenIdentity, token2: TokenIdentity) -> AppResult<Response> {
        self.execute(CONTRACT, ExecuteMsg::CreatePair { token1, token2 })
    }

    /// Send `amount` of `token` from `from` to the pool, with a memo.
    pub fn transfer(
        &self,
        token: TokenIdentity,
        from: &str,
        amount: u64,
        memo: &str,
    ) -> AppResult<Response> {
        self.app.notify_transfer(token.issuer, TransferNotice {
            from: name(from),
            to: self.contract(),
            quantity: token.asset(amount),
            memo: memo.to_string(),
        })
    }

    pub fn deposit(&self, owner: &str, pair_id: PairId) -> AppResult<Response> {
        self.execute(owner, ExecuteMsg::Deposit {
            owner: name(owner),
            pair_id,
        })
    }

    pub fn withdraw(&self, owner: &str, pair_id: PairId, liquidity: u64) -> AppResult<Response> {
        self.execute(owner, ExecuteMsg::Withdraw {
            owner: name(owner),
            pair_id,
            liquidity,
        })
    }

    pub fn query<R>(&self, msg: QueryMsg) -> AppResult<R>
    where
        R: DeserializeOwned,
    {
        let value = self.app.query(msg)?;

        serde_json::from_value(value).map_err(|err| {
            AppError::from(PoolError::from(StdError::deserialize::<R, _>("json", err)))
        })
    }

    pub fn query_pair(&self, pair_id: PairId) -> AppResult<PairRecord> {
        self.query(QueryMsg::Pair { pair_id })
    }

    pub fn query_escrow(&self, owner: &str, pair_id: PairId) -> AppResult<EscrowEntry> {
        self.query(QueryMsg::Escrow {
            owner: name(owner),
            pair_id,
        })
    }

    /// Transfers dispatched since the last call.
    pub fn take_transfers(&self) -> Vec<Transfer> {
        self.app.gateway().take()
    }

    /// Every record in the store, in key order.
    pub fn snapshot(&self) -> Vec<Record> {
        let storage = self.app.storage();
        let records = storage.scan(None, None, Order::Ascending).collect();
        records
    }
}
