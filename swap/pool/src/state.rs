use {
    swap_storage::{Index, IndexList, IndexedMap, Map, MultiIndex},
    swap_types::{EscrowEntry, Name, PairId, PairRecord, TokenId, TokenRecord},
};

// token_id => token
pub const TOKENS: IndexedMap<TokenId, TokenRecord, TokenIndexes<'static>> =
    IndexedMap::new("token", TokenIndexes {
        identity: MultiIndex::new(|_, token| token.identity.key(), "token", "token__identity"),
    });

// pair_id => pair
pub const PAIRS: IndexedMap<PairId, PairRecord, PairIndexes<'static>> =
    IndexedMap::new("pair", PairIndexes {
        token_pair: MultiIndex::new(|_, pair| pair.token_pair_key(), "pair", "pair__tokens"),
    });

// (owner, pair_id) => escrow
pub const ESCROWS: Map<(Name, PairId), EscrowEntry> = Map::new("escrow");

pub struct TokenIndexes<'a> {
    /// Canonical identity key. Not unique: an identity may be registered more
    /// than once.
    pub identity: MultiIndex<'a, TokenId, u128, TokenRecord>,
}

impl IndexList<TokenId, TokenRecord> for TokenIndexes<'_> {
    fn get_indexes(&self) -> Box<dyn Iterator<Item = &'_ dyn Index<TokenId, TokenRecord>> + '_> {
        let v: Vec<&dyn Index<TokenId, TokenRecord>> = vec![&self.identity];
        Box::new(v.into_iter())
    }
}

pub struct PairIndexes<'a> {
    /// `token1_id * 2^64 + token2_id`. Not unique either.
    pub token_pair: MultiIndex<'a, PairId, u128, PairRecord>,
}

impl IndexList<PairId, PairRecord> for PairIndexes<'_> {
    fn get_indexes(&self) -> Box<dyn Iterator<Item = &'_ dyn Index<PairId, PairRecord>> + '_> {
        let v: Vec<&dyn Index<PairId, PairRecord>> = vec![&self.token_pair];
        Box::new(v.into_iter())
    }
}
