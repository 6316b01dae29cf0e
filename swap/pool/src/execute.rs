use {
    crate::{
        Authorizer, PAIRS, PoolError, PoolResult, create_pair, load_escrow, load_token,
        provide_liquidity, redeem, register_token, resolve_by_id, resolve_token, settle, stage,
        swap, withdraw_liquidity,
    },
    swap_math::Number,
    swap_storage::Storage,
    swap_types::{
        Event, ExecuteMsg, IgnoreReason, Memo, Name, PairId, Response, TokenIdentity, Transfer,
        TransferNotice,
    },
};

/// Everything an operation needs from its environment.
pub struct MutableCtx<'a> {
    pub storage: &'a mut dyn Storage,
    /// The pool's own account.
    pub contract: Name,
    /// Who invoked the operation. For transfer notices, this is the token
    /// contract that emitted the notice.
    pub sender: Name,
    pub authorizer: &'a dyn Authorizer,
}

pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> PoolResult<Response> {
    match msg {
        ExecuteMsg::RegisterToken { token } => execute_register_token(ctx, token),
        ExecuteMsg::CreatePair { token1, token2 } => execute_create_pair(ctx, token1, token2),
        ExecuteMsg::Deposit { owner, pair_id } => deposit(ctx, owner, pair_id),
        ExecuteMsg::Withdraw {
            owner,
            pair_id,
            liquidity,
        } => withdraw(ctx, owner, pair_id, liquidity),
    }
}

fn execute_register_token(ctx: MutableCtx, token: TokenIdentity) -> PoolResult<Response> {
    let token_id = register_token(ctx.storage, token)?;

    #[cfg(feature = "tracing")]
    {
        tracing::info!(token_id, token = token.to_string(), "Registered token");
    }

    Ok(Response::new().add_event(Event::TokenRegistered { token_id, token }))
}

fn execute_create_pair(
    ctx: MutableCtx,
    token1: TokenIdentity,
    token2: TokenIdentity,
) -> PoolResult<Response> {
    let pair = create_pair(ctx.storage, &token1, &token2)?;

    #[cfg(feature = "tracing")]
    {
        tracing::info!(
            pair_id = pair.id,
            token1_id = pair.token1_id,
            token2_id = pair.token2_id,
            "Created pair"
        );
    }

    Ok(Response::new().add_event(Event::PairCreated {
        pair_id: pair.id,
        token1_id: pair.token1_id,
        token2_id: pair.token2_id,
    }))
}

fn deposit(ctx: MutableCtx, owner: Name, pair_id: PairId) -> PoolResult<Response> {
    ctx.authorizer.require_auth(ctx.sender, owner)?;

    let entry = load_escrow(ctx.storage, owner, pair_id)?;
    let mut pair = resolve_by_id(ctx.storage, pair_id)?;

    // The owner's full staged balances go in. Whatever the pool ratio doesn't
    // consume is sent back.
    let provision = provide_liquidity(&mut pair, entry.staged1, entry.staged2)?;
    let refund1 = Number::checked_sub(entry.staged1, provision.consumed1)?;
    let refund2 = Number::checked_sub(entry.staged2, provision.consumed2)?;

    PAIRS.save(ctx.storage, pair_id, &pair)?;

    settle(
        ctx.storage,
        owner,
        pair_id,
        entry.staged1,
        entry.staged2,
        provision.minted,
    )?;

    let token1 = load_token(ctx.storage, pair.token1_id)?.identity;
    let token2 = load_token(ctx.storage, pair.token2_id)?.identity;

    #[cfg(feature = "tracing")]
    {
        tracing::info!(
            owner = owner.to_string(),
            pair_id,
            amount1 = provision.consumed1,
            amount2 = provision.consumed2,
            minted = provision.minted,
            "Deposited liquidity"
        );
    }

    Ok(Response::new()
        .add_transfer(Transfer::new(owner, token1, refund1))
        .add_transfer(Transfer::new(owner, token2, refund2))
        .add_event(Event::Deposited {
            owner,
            pair_id,
            amount1: provision.consumed1,
            amount2: provision.consumed2,
            refund1,
            refund2,
            minted: provision.minted,
        }))
}

fn withdraw(ctx: MutableCtx, owner: Name, pair_id: PairId, liquidity: u64) -> PoolResult<Response> {
    ctx.authorizer.require_auth(ctx.sender, owner)?;

    let entry = load_escrow(ctx.storage, owner, pair_id)?;

    if liquidity > entry.liquidity {
        return Err(PoolError::InsufficientLiquidity {
            requested: liquidity,
            available: entry.liquidity,
        });
    }

    let mut pair = resolve_by_id(ctx.storage, pair_id)?;
    let (amount1, amount2) = withdraw_liquidity(&mut pair, liquidity)?;

    PAIRS.save(ctx.storage, pair_id, &pair)?;

    redeem(ctx.storage, owner, pair_id, liquidity)?;

    let token1 = load_token(ctx.storage, pair.token1_id)?.identity;
    let token2 = load_token(ctx.storage, pair.token2_id)?.identity;

    #[cfg(feature = "tracing")]
    {
        tracing::info!(
            owner = owner.to_string(),
            pair_id,
            liquidity,
            amount1,
            amount2,
            "Withdrew liquidity"
        );
    }

    Ok(Response::new()
        .add_transfer(Transfer::new(owner, token1, amount1))
        .add_transfer(Transfer::new(owner, token2, amount2))
        .add_event(Event::Withdrawn {
            owner,
            pair_id,
            liquidity,
            amount1,
            amount2,
        }))
}

/// Handle a notice that some token moved. `ctx.sender` is the token contract.
///
/// The memo decides what happens: `D<pair id>` stages the amount for a later
/// deposit, `S<pair id>` swaps it right away. Transfers the pool sent itself,
/// transfers to someone else, and memos it doesn't understand change nothing.
pub fn receive_transfer(ctx: MutableCtx, notice: TransferNotice) -> PoolResult<Response> {
    if notice.from == ctx.contract {
        return Ok(ignored(notice.from, IgnoreReason::OutgoingTransfer));
    }

    if notice.to != ctx.contract {
        return Ok(ignored(notice.from, IgnoreReason::NotRecipient));
    }

    let (pair_id, is_swap) = match notice.memo.parse::<Memo>()? {
        Memo::Donation => return Ok(ignored(notice.from, IgnoreReason::Donation)),
        Memo::Unrecognized => return Ok(ignored(notice.from, IgnoreReason::UnrecognizedMemo)),
        Memo::Deposit(pair_id) => (pair_id, false),
        Memo::Swap(pair_id) => (pair_id, true),
    };

    let token = TokenIdentity::new(ctx.sender, notice.quantity.symbol);
    let token_id = resolve_token(ctx.storage, &token)?;
    let mut pair = resolve_by_id(ctx.storage, pair_id)?;
    let amount = notice.quantity.amount;

    if !is_swap {
        if !stage(ctx.storage, notice.from, &pair, token_id, amount)? {
            return Ok(ignored(notice.from, IgnoreReason::TokenNotInPair));
        }

        #[cfg(feature = "tracing")]
        {
            tracing::info!(
                owner = notice.from.to_string(),
                pair_id,
                token_id,
                amount,
                "Staged deposit"
            );
        }

        return Ok(Response::new().add_event(Event::Staged {
            owner: notice.from,
            pair_id,
            token_id,
            amount,
        }));
    }

    let outcome = swap(&mut pair, token_id, amount)?;

    PAIRS.save(ctx.storage, pair_id, &pair)?;

    let token_out = load_token(ctx.storage, outcome.token_out)?.identity;

    #[cfg(feature = "tracing")]
    {
        tracing::info!(
            sender = notice.from.to_string(),
            pair_id,
            amount_in = outcome.amount_in,
            amount_out = outcome.amount_out,
            "Swapped"
        );
    }

    Ok(Response::new()
        .add_transfer(Transfer::new(notice.from, token_out, outcome.amount_out))
        .add_event(Event::Swapped {
            sender: notice.from,
            pair_id,
            token_in: outcome.token_in,
            amount_in: outcome.amount_in,
            token_out: outcome.token_out,
            amount_out: outcome.amount_out,
        }))
}

fn ignored(from: Name, reason: IgnoreReason) -> Response {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(from = from.to_string(), ?reason, "Ignored transfer");
    }

    Response::new().add_event(Event::TransferIgnored { from, reason })
}
