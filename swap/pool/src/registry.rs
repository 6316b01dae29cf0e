use {
    crate::{PoolError, PoolResult, TOKENS},
    swap_math::Number,
    swap_storage::{Order, Storage},
    swap_types::{TokenId, TokenIdentity, TokenRecord},
};

/// Register a token identity under the next free id.
///
/// There is no duplicate check; an identity registered twice gets two ids,
/// and [`resolve_token`] returns the earlier one.
pub fn register_token(storage: &mut dyn Storage, identity: TokenIdentity) -> PoolResult<TokenId> {
    if !identity.symbol.is_valid() {
        return Err(PoolError::InvalidSymbol {
            symbol: identity.symbol,
        });
    }

    let token_id = next_token_id(storage)?;

    TOKENS.save(storage, token_id, &TokenRecord {
        id: token_id,
        identity,
    })?;

    Ok(token_id)
}

/// Find the lowest token id registered under an identity.
pub fn resolve_token(storage: &dyn Storage, identity: &TokenIdentity) -> PoolResult<TokenId> {
    TOKENS
        .idx
        .identity
        .prefix(identity.key())
        .keys(storage, Order::Ascending)
        .next()
        .transpose()?
        .ok_or(PoolError::TokenNotFound { token: *identity })
}

pub fn load_token(storage: &dyn Storage, token_id: TokenId) -> PoolResult<TokenRecord> {
    TOKENS
        .may_load(storage, token_id)?
        .ok_or(PoolError::TokenIdNotFound { token_id })
}

fn next_token_id(storage: &dyn Storage) -> PoolResult<TokenId> {
    let last = TOKENS
        .keys(storage, Order::Descending)
        .next()
        .transpose()?;

    match last {
        Some(id) => Ok(Number::checked_add(id, 1)?),
        None => Ok(1),
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::ErrorKind,
        swap_storage::MemStorage,
        test_case::test_case,
    };

    fn token(issuer: &str, symbol: &str) -> TokenIdentity {
        TokenIdentity::new(issuer.parse().unwrap(), symbol.parse().unwrap())
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut storage = MemStorage::new();

        assert_eq!(register_token(&mut storage, token("eosio.token", "4,EOS")).unwrap(), 1);
        assert_eq!(register_token(&mut storage, token("tethertether", "4,USDT")).unwrap(), 2);

        assert_eq!(resolve_token(&storage, &token("tethertether", "4,USDT")).unwrap(), 2);
        assert_eq!(load_token(&storage, 1).unwrap().identity, token("eosio.token", "4,EOS"));
    }

    #[test]
    fn duplicates_resolve_to_earliest() {
        let mut storage = MemStorage::new();
        let eos = token("eosio.token", "4,EOS");

        register_token(&mut storage, eos).unwrap();
        register_token(&mut storage, token("other", "4,ABC")).unwrap();
        register_token(&mut storage, eos).unwrap();

        assert_eq!(load_token(&storage, 3).unwrap().identity, eos);
        assert_eq!(resolve_token(&storage, &eos).unwrap(), 1);
    }

    #[test]
    fn precision_is_part_of_identity() {
        let mut storage = MemStorage::new();
        register_token(&mut storage, token("eosio.token", "4,EOS")).unwrap();

        let err = resolve_token(&storage, &token("eosio.token", "3,EOS")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test_case("4,eos" ; "lowercase")]
    #[test_case("4," ; "empty")]
    fn invalid_symbol_is_rejected(symbol: &str) {
        let mut storage = MemStorage::new();

        let err = register_token(&mut storage, token("eosio.token", symbol)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(TOKENS.is_empty(&storage));
    }
}
