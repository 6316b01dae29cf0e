use {
    crate::{PAIRS, PoolError, PoolResult, resolve_token},
    swap_math::Number,
    swap_storage::{Order, Storage},
    swap_types::{PairId, PairRecord, TokenId, TokenIdentity, token_pair_key},
};

/// Create an empty pool for two registered tokens, in the order given.
///
/// Pairs aren't deduplicated: creating the same pair twice yields two ids.
pub fn create_pair(
    storage: &mut dyn Storage,
    token1: &TokenIdentity,
    token2: &TokenIdentity,
) -> PoolResult<PairRecord> {
    for token in [token1, token2] {
        if !token.symbol.is_valid() {
            return Err(PoolError::InvalidSymbol {
                symbol: token.symbol,
            });
        }
    }

    if token1 == token2 {
        return Err(PoolError::SameToken { token: *token1 });
    }

    let token1_id = resolve_token(storage, token1)?;
    let token2_id = resolve_token(storage, token2)?;

    let pair_id = match PAIRS.keys(storage, Order::Descending).next().transpose()? {
        Some(id) => Number::checked_add(id, 1)?,
        None => 1,
    };

    let pair = PairRecord::new(pair_id, token1_id, token2_id);

    PAIRS.save(storage, pair_id, &pair)?;

    Ok(pair)
}

/// Find the lowest-id pair created for exactly this order of token ids.
pub fn resolve_by_ids(
    storage: &dyn Storage,
    token1_id: TokenId,
    token2_id: TokenId,
) -> PoolResult<PairRecord> {
    PAIRS
        .idx
        .token_pair
        .prefix(token_pair_key(token1_id, token2_id))
        .first(storage)?
        .map(|(_, pair)| pair)
        .ok_or(PoolError::PairNotCreated {
            token1_id,
            token2_id,
        })
}

pub fn resolve_by_id(storage: &dyn Storage, pair_id: PairId) -> PoolResult<PairRecord> {
    PAIRS
        .may_load(storage, pair_id)?
        .ok_or(PoolError::PairNotFound { pair_id })
}

// ----------------------------------- tests -----------------------------------
