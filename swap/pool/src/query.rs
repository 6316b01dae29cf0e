use {
    crate::{
        ESCROWS, PAIRS, PoolResult, TOKENS, load_escrow, load_token, resolve_by_id,
        resolve_by_ids, resolve_token, swap,
    },
    serde::Serialize,
    serde_json::Value as Json,
    std::collections::BTreeMap,
    swap_storage::{Order, StdError, StdResult, Storage},
    swap_types::{
        EscrowEntry, Name, PairId, PairRecord, QueryMsg, SwapOutcome, TokenId, TokenIdentity,
        TokenRecord,
    },
};

pub fn query(storage: &dyn Storage, msg: QueryMsg) -> PoolResult<Json> {
    match msg {
        QueryMsg::Token { token_id } => {
            let res = load_token(storage, token_id)?;
            to_json_value(&res)
        },
        QueryMsg::Tokens {} => {
            let res = query_tokens(storage)?;
            to_json_value(&res)
        },
        QueryMsg::ResolveToken { token } => {
            let res = resolve_token(storage, &token)?;
            to_json_value(&res)
        },
        QueryMsg::Pair { pair_id } => {
            let res = resolve_by_id(storage, pair_id)?;
            to_json_value(&res)
        },
        QueryMsg::PairByTokens {
            token1_id,
            token2_id,
        } => {
            let res = resolve_by_ids(storage, token1_id, token2_id)?;
            to_json_value(&res)
        },
        QueryMsg::Pairs {} => {
            let res = query_pairs(storage)?;
            to_json_value(&res)
        },
        QueryMsg::Escrow { owner, pair_id } => {
            let res = load_escrow(storage, owner, pair_id)?;
            to_json_value(&res)
        },
        QueryMsg::Escrows { owner } => {
            let res = query_escrows(storage, owner)?;
            to_json_value(&res)
        },
        QueryMsg::SimulateSwap {
            pair_id,
            token,
            amount_in,
        } => {
            let res = query_simulate_swap(storage, pair_id, &token, amount_in)?;
            to_json_value(&res)
        },
    }
}

fn to_json_value<T>(data: &T) -> PoolResult<Json>
where
    T: Serialize,
{
    serde_json::to_value(data)
        .map_err(|err| StdError::serialize::<T, _>("json", err).into())
}

fn query_tokens(storage: &dyn Storage) -> StdResult<Vec<TokenRecord>> {
    TOKENS
        .range(storage, Order::Ascending)
        .map(|res| res.map(|(_, token)| token))
        .collect()
}

fn query_pairs(storage: &dyn Storage) -> StdResult<Vec<PairRecord>> {
    PAIRS
        .range(storage, Order::Ascending)
        .map(|res| res.map(|(_, pair)| pair))
        .collect()
}

fn query_escrows(storage: &dyn Storage, owner: Name) -> StdResult<BTreeMap<PairId, EscrowEntry>> {
    ESCROWS
        .prefix(owner)
        .range(storage, Order::Ascending)
        .collect()
}

fn query_simulate_swap(
    storage: &dyn Storage,
    pair_id: PairId,
    token: &TokenIdentity,
    amount_in: u64,
) -> PoolResult<SwapOutcome> {
    let token_id: TokenId = resolve_token(storage, token)?;
    let mut pair = resolve_by_id(storage, pair_id)?;

    swap(&mut pair, token_id, amount_in)
}
