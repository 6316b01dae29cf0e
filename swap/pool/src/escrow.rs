use {
    crate::{ESCROWS, PoolError, PoolResult},
    swap_math::Number,
    swap_storage::Storage,
    swap_types::{EscrowEntry, Name, PairId, PairRecord, TokenId},
};

/// Credit an amount received from `owner` toward a future deposit into
/// `pair`.
///
/// Tokens that are in neither side of the pair are not credited and no entry
/// is created. Returns whether anything was credited.
pub fn stage(
    storage: &mut dyn Storage,
    owner: Name,
    pair: &PairRecord,
    token_id: TokenId,
    amount: u64,
) -> PoolResult<bool> {
    let is_token1 = token_id == pair.token1_id;
    if !is_token1 && token_id != pair.token2_id {
        return Ok(false);
    }

    let mut entry = ESCROWS
        .may_load(storage, (owner, pair.id))?
        .unwrap_or_default();

    if is_token1 {
        entry.staged1.checked_add_assign(amount)?;
    } else {
        entry.staged2.checked_add_assign(amount)?;
    }

    ESCROWS.save(storage, (owner, pair.id), &entry)?;

    Ok(true)
}

/// Move staged amounts out of escrow and record the liquidity they minted.
pub fn settle(
    storage: &mut dyn Storage,
    owner: Name,
    pair_id: PairId,
    amount1: u64,
    amount2: u64,
    liquidity: u64,
) -> PoolResult<EscrowEntry> {
    let mut entry = load_escrow(storage, owner, pair_id)?;

    entry.staged1.checked_sub_assign(amount1)?;
    entry.staged2.checked_sub_assign(amount2)?;
    entry.liquidity.checked_add_assign(liquidity)?;

    ESCROWS.save(storage, (owner, pair_id), &entry)?;

    Ok(entry)
}

/// Reduce the owner's recorded liquidity claim.
pub fn redeem(
    storage: &mut dyn Storage,
    owner: Name,
    pair_id: PairId,
    liquidity: u64,
) -> PoolResult<EscrowEntry> {
    let mut entry = load_escrow(storage, owner, pair_id)?;

    entry.liquidity.checked_sub_assign(liquidity)?;

    ESCROWS.save(storage, (owner, pair_id), &entry)?;

    Ok(entry)
}

pub fn load_escrow(storage: &dyn Storage, owner: Name, pair_id: PairId) -> PoolResult<EscrowEntry> {
    ESCROWS
        .may_load(storage, (owner, pair_id))?
        .ok_or(PoolError::EscrowNotFound { owner, pair_id })
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::ErrorKind,
        swap_storage::MemStorage,
    };

    fn alice() -> Name {
        "alice".parse().unwrap()
    }

    #[test]
    fn stage_credits_matching_side() {
        let mut storage = MemStorage::new();
        let pair = PairRecord::new(1, 10, 20);

        assert!(stage(&mut storage, alice(), &pair, 10, 100).unwrap());
        assert!(stage(&mut storage, alice(), &pair, 20, 50).unwrap());
        assert!(stage(&mut storage, alice(), &pair, 10, 1).unwrap());

        assert_eq!(load_escrow(&storage, alice(), 1).unwrap(), EscrowEntry {
            staged1: 101,
            staged2: 50,
            liquidity: 0,
        });
    }

    #[test]
    fn stage_ignores_foreign_token() {
        let mut storage = MemStorage::new();
        let pair = PairRecord::new(1, 10, 20);

        assert!(!stage(&mut storage, alice(), &pair, 30, 100).unwrap());

        let err = load_escrow(&storage, alice(), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn settle_and_redeem() {
        let mut storage = MemStorage::new();
        let pair = PairRecord::new(1, 10, 20);

        stage(&mut storage, alice(), &pair, 10, 100).unwrap();
        stage(&mut storage, alice(), &pair, 20, 80).unwrap();

        let entry = settle(&mut storage, alice(), 1, 100, 80, 80).unwrap();
        assert_eq!(entry, EscrowEntry {
            staged1: 0,
            staged2: 0,
            liquidity: 80,
        });

        let entry = redeem(&mut storage, alice(), 1, 30).unwrap();
        assert_eq!(entry.liquidity, 50);

        let err = redeem(&mut storage, alice(), 1, 51).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn settle_without_entry_is_not_found() {
        let mut storage = MemStorage::new();

        let err = settle(&mut storage, alice(), 1, 0, 0, 0).unwrap_err();
        assert_eq!(err, PoolError::EscrowNotFound {
            owner: alice(),
            pair_id: 1,
        });
    }
}
