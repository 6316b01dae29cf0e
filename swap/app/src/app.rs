use {
    crate::{AppError, AppResult, TransferGateway},
    serde_json::Value as Json,
    std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
    swap_pool::{Authorizer, MutableCtx, PoolResult, SenderAuthorizer},
    swap_storage::{Buffer, Storage},
    swap_types::{ExecuteMsg, Name, QueryMsg, Response, TransferNotice},
};

/// The host that runs pool operations one at a time, each all-or-nothing.
///
/// Every mutating operation holds the store's write lock from start to
/// finish, and writes into a [`Buffer`] over the store. The buffer is only
/// committed once the operation succeeded and the gateway accepted the whole
/// batch of transfers it asked for; otherwise it is dropped with all its
/// writes.
pub struct App<S, G, A = SenderAuthorizer> {
    storage: RwLock<S>,
    gateway: G,
    authorizer: A,
    contract: Name,
}

impl<S, G, A> App<S, G, A> {
    pub fn new(storage: S, gateway: G, authorizer: A, contract: Name) -> Self {
        Self {
            storage: RwLock::new(storage),
            gateway,
            authorizer,
            contract,
        }
    }

    /// The pool's own account.
    pub fn contract(&self) -> Name {
        self.contract
    }

    /// Read access to the store. Blocks while an operation is in progress.
    pub fn storage(&self) -> RwLockReadGuard<'_, S> {
        // The store is only written in `Buffer::commit`, so a panic anywhere
        // else while the lock was held left it as it was.
        self.storage.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn storage_mut(&self) -> RwLockWriteGuard<'_, S> {
        self.storage.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}

impl<S, G, A> App<S, G, A>
where
    S: Storage,
    G: TransferGateway,
    A: Authorizer,
{
    pub fn execute(&self, sender: Name, msg: ExecuteMsg) -> AppResult<Response> {
        tracing::info!(sender = sender.to_string(), ?msg, "Executing");

        self.apply(sender, |ctx| swap_pool::execute(ctx, msg))
    }

    /// Deliver a notice that `notice.quantity` of the token issued by
    /// `token_contract` has moved.
    pub fn notify_transfer(
        &self,
        token_contract: Name,
        notice: TransferNotice,
    ) -> AppResult<Response> {
        tracing::info!(
            token_contract = token_contract.to_string(),
            from = notice.from.to_string(),
            to = notice.to.to_string(),
            quantity = notice.quantity.to_string(),
            memo = notice.memo.as_str(),
            "Received transfer notice"
        );

        self.apply(token_contract, |ctx| swap_pool::receive_transfer(ctx, notice))
    }

    pub fn query(&self, msg: QueryMsg) -> AppResult<Json> {
        swap_pool::query(&*self.storage(), msg).map_err(Into::into)
    }

    fn apply<F>(&self, sender: Name, action: F) -> AppResult<Response>
    where
        F: FnOnce(MutableCtx) -> PoolResult<Response>,
    {
        let mut storage = self.storage_mut();
        let mut buffer = Buffer::new(&mut *storage);

        let ctx = MutableCtx {
            storage: &mut buffer,
            contract: self.contract,
            sender,
            authorizer: &self.authorizer,
        };

        let response = action(ctx).inspect_err(|err| {
            tracing::warn!(
                err = err.to_string(),
                "Operation failed! State changes discarded"
            );
        })?;

        if !response.messages.is_empty() {
            tracing::debug!(
                transfers = response.messages.len(),
                "Dispatching transfers"
            );

            if let Err(err) = self.gateway.transfer_all(self.contract, &response.messages) {
                tracing::warn!(
                    err = err.to_string(),
                    "Transfers failed! State changes discarded"
                );

                return Err(AppError::Transfer {
                    count: response.messages.len(),
                    reason: err.to_string(),
                });
            }
        }

        buffer.commit();

        tracing::info!(
            transfers = response.messages.len(),
            events = response.events.len(),
            "Committed"
        );

        Ok(response)
    }
}
