use {
    crate::{Asset, Name, Symbol},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Identifier of a registered token.
pub type TokenId = u64;

/// Identifier of a token pair.
pub type PairId = u64;

// ------------------------------ token identity -------------------------------

/// A fungible asset as identified by the account that issues it and its
/// symbol.
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Hash,
)]
#[serde(deny_unknown_fields)]
pub struct TokenIdentity {
    pub issuer: Name,
    pub symbol: Symbol,
}

impl TokenIdentity {
    pub const fn new(issuer: Name, symbol: Symbol) -> Self {
        Self { issuer, symbol }
    }

    /// The canonical 128-bit form used for uniqueness lookups:
    ///
    /// ```plain
    /// issuer * 2^64 + symbol_raw
    /// ```
    pub const fn key(&self) -> u128 {
        ((self.issuer.raw() as u128) << 64) | self.symbol.raw() as u128
    }

    /// An amount of this token, as the issuer's transfer mechanism sees it.
    pub const fn asset(&self, amount: u64) -> Asset {
        Asset::new(amount, self.symbol)
    }
}

impl fmt::Display for TokenIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbol, self.issuer)
    }
}

// ---------------------------------- records ----------------------------------

#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub id: TokenId,
    pub identity: TokenIdentity,
}

/// Reserve state of an ordered pair of tokens.
///
/// `reserve1 == 0 && reserve2 == 0` holds exactly when `total_liquidity == 0`.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct PairRecord {
    pub id: PairId,
    pub token1_id: TokenId,
    pub token2_id: TokenId,
    pub reserve1: u64,
    pub reserve2: u64,
    pub total_liquidity: u64,
}

impl PairRecord {
    pub const fn new(id: PairId, token1_id: TokenId, token2_id: TokenId) -> Self {
        Self {
            id,
            token1_id,
            token2_id,
            reserve1: 0,
            reserve2: 0,
            total_liquidity: 0,
        }
    }

    /// Key of the ordered token pair: `token1_id * 2^64 + token2_id`.
    pub const fn token_pair_key(&self) -> u128 {
        token_pair_key(self.token1_id, self.token2_id)
    }
}

pub const fn token_pair_key(token1_id: TokenId, token2_id: TokenId) -> u128 {
    ((token1_id as u128) << 64) | token2_id as u128
}

/// One owner's balances against one pair.
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Default, Clone, PartialEq, Eq,
)]
pub struct EscrowEntry {
    /// Token1 received but not yet settled into the pool.
    pub staged1: u64,
    /// Token2 received but not yet settled into the pool.
    pub staged2: u64,
    /// Outstanding liquidity claim.
    pub liquidity: u64,
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_layout() {
        let eos = TokenIdentity::new(
            "eosio.token".parse().unwrap(),
            "4,EOS".parse().unwrap(),
        );
        assert_eq!(eos.key() >> 64, 0x5530ea033482a600);
        assert_eq!(eos.key() as u64, 0x53_4f_45_04);
        assert_eq!(eos.to_string(), "4,EOS@eosio.token");
    }

    #[test]
    fn token_pair_key_is_ordered() {
        assert_ne!(token_pair_key(1, 2), token_pair_key(2, 1));
        assert_eq!(PairRecord::new(9, 1, 2).token_pair_key(), (1 << 64) | 2);
    }
}
