//! The constant-product arithmetic, on pair records alone. Nothing here
//! touches storage.

use {
    crate::{PoolError, PoolResult},
    swap_math::{MultiplyRatio, Number},
    swap_types::{PairRecord, SwapOutcome, TokenId},
};

/// Which side of a pair a token sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

pub fn side_of(pair: &PairRecord, token_id: TokenId) -> PoolResult<Side> {
    if token_id == pair.token1_id {
        Ok(Side::First)
    } else if token_id == pair.token2_id {
        Ok(Side::Second)
    } else {
        Err(PoolError::TokenNotInPair {
            token_id,
            pair_id: pair.id,
        })
    }
}

/// Amounts a deposit put into the reserves, and the liquidity it minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provision {
    pub minted: u64,
    pub consumed1: u64,
    pub consumed2: u64,
}

fn ensure_reserves(pair: &PairRecord) -> PoolResult<()> {
    if pair.reserve1.is_zero() || pair.reserve2.is_zero() {
        return Err(PoolError::InconsistentReserves { pair_id: pair.id });
    }

    Ok(())
}

/// Add liquidity to the pair.
///
/// An empty pool takes both amounts whole and mints `min(amount1, amount2)`.
/// Otherwise the deposit mints the smaller of the two proportional shares and
/// only consumes what that share is worth on each side, rounding down; the
/// caller refunds the rest.
pub fn provide_liquidity(
    pair: &mut PairRecord,
    amount1: u64,
    amount2: u64,
) -> PoolResult<Provision> {
    let provision = if pair.total_liquidity.is_zero() {
        if pair.reserve1.is_non_zero() || pair.reserve2.is_non_zero() {
            return Err(PoolError::InconsistentReserves { pair_id: pair.id });
        }

        Provision {
            minted: amount1.min(amount2),
            consumed1: amount1,
            consumed2: amount2,
        }
    } else {
        ensure_reserves(pair)?;

        let supply = pair.total_liquidity;
        let minted = amount1
            .checked_multiply_ratio_floor(supply, pair.reserve1)?
            .min(amount2.checked_multiply_ratio_floor(supply, pair.reserve2)?);

        Provision {
            minted,
            consumed1: pair.reserve1.checked_multiply_ratio_floor(minted, supply)?,
            consumed2: pair.reserve2.checked_multiply_ratio_floor(minted, supply)?,
        }
    };

    if provision.minted.is_zero() {
        return Err(PoolError::ZeroLiquidityMinted { pair_id: pair.id });
    }

    pair.reserve1.checked_add_assign(provision.consumed1)?;
    pair.reserve2.checked_add_assign(provision.consumed2)?;
    pair.total_liquidity.checked_add_assign(provision.minted)?;

    Ok(provision)
}

/// Burn liquidity for a pro-rata share of both reserves, rounded down.
pub fn withdraw_liquidity(pair: &mut PairRecord, liquidity: u64) -> PoolResult<(u64, u64)> {
    let supply = pair.total_liquidity;

    if supply.is_zero() {
        return Err(PoolError::EmptyPool { pair_id: pair.id });
    }

    if liquidity > supply {
        return Err(PoolError::InsufficientLiquidity {
            requested: liquidity,
            available: supply,
        });
    }

    let amount1 = pair.reserve1.checked_multiply_ratio_floor(liquidity, supply)?;
    let amount2 = pair.reserve2.checked_multiply_ratio_floor(liquidity, supply)?;

    pair.reserve1.checked_sub_assign(amount1)?;
    pair.reserve2.checked_sub_assign(amount2)?;
    pair.total_liquidity.checked_sub_assign(liquidity)?;

    Ok((amount1, amount2))
}

/// Swap `amount_in` of one side for the other.
///
/// ```plain
/// new_input_reserve  = input_reserve + amount_in
/// new_output_reserve = floor(output_reserve * input_reserve / new_input_reserve)
/// amount_out         = output_reserve - new_output_reserve
/// ```
///
/// Flooring keeps the reserve product from rising, and it drops by less
/// than `new_input_reserve`.
pub fn swap(pair: &mut PairRecord, token_id: TokenId, amount_in: u64) -> PoolResult<SwapOutcome> {
    let side = side_of(pair, token_id)?;

    if pair.total_liquidity.is_zero() {
        return Err(PoolError::EmptyPool { pair_id: pair.id });
    }

    ensure_reserves(pair)?;

    let (input_reserve, output_reserve, token_out) = match side {
        Side::First => (pair.reserve1, pair.reserve2, pair.token2_id),
        Side::Second => (pair.reserve2, pair.reserve1, pair.token1_id),
    };

    let new_input_reserve = Number::checked_add(input_reserve, amount_in)?;
    let new_output_reserve =
        output_reserve.checked_multiply_ratio_floor(input_reserve, new_input_reserve)?;

    // A zero reserve beside outstanding liquidity would leave the pool unable
    // to price either side.
    if new_output_reserve.is_zero() {
        return Err(PoolError::PoolDrained { pair_id: pair.id });
    }

    let amount_out = Number::checked_sub(output_reserve, new_output_reserve)?;

    match side {
        Side::First => {
            pair.reserve1 = new_input_reserve;
            pair.reserve2 = new_output_reserve;
        },
        Side::Second => {
            pair.reserve2 = new_input_reserve;
            pair.reserve1 = new_output_reserve;
        },
    }

    Ok(SwapOutcome {
        token_in: token_id,
        amount_in,
        token_out,
        amount_out,
        reserve1: pair.reserve1,
        reserve2: pair.reserve2,
    })
}

// ----------------------------------- tests -----------------------------------
