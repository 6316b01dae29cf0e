use {
    crate::{Asset, Name, PairId, TokenId, TokenIdentity},
    serde::{Deserialize, Serialize},
    std::fmt,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Register a token identity and assign it the next token id.
    ///
    /// Re-registering an identity creates a second record.
    RegisterToken { token: TokenIdentity },
    /// Create an empty pool for the ordered pair of registered tokens.
    CreatePair {
        token1: TokenIdentity,
        token2: TokenIdentity,
    },
    /// Settle everything the owner has staged into the pair, minting
    /// liquidity and refunding whatever the pool ratio doesn't consume.
    Deposit { owner: Name, pair_id: PairId },
    /// Burn part of the owner's liquidity claim for a share of the reserves.
    Withdraw {
        owner: Name,
        pair_id: PairId,
        liquidity: u64,
    },
}

/// Notification that `quantity` of a token moved from `from` to `to`.
///
/// The token contract that emitted the notification is passed alongside,
/// since that is what identifies the token together with the symbol.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TransferNotice {
    pub from: Name,
    pub to: Name,
    pub quantity: Asset,
    #[serde(default)]
    pub memo: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// A token record by id.
    Token { token_id: TokenId },
    /// All token records, ascending by id.
    Tokens {},
    /// The lowest token id registered under an identity.
    ResolveToken { token: TokenIdentity },
    /// A pair record by id.
    Pair { pair_id: PairId },
    /// The lowest pair id created for an ordered pair of token ids.
    PairByTokens {
        token1_id: TokenId,
        token2_id: TokenId,
    },
    /// All pair records, ascending by id.
    Pairs {},
    /// One owner's escrow entry in a pair.
    Escrow { owner: Name, pair_id: PairId },
    /// All of one owner's escrow entries, keyed by pair id.
    Escrows { owner: Name },
    /// Compute a swap against the current reserves without applying it.
    SimulateSwap {
        pair_id: PairId,
        token: TokenIdentity,
        amount_in: u64,
    },
}

/// An outbound transfer the pool asks the host to perform on its behalf.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub to: Name,
    pub token: TokenIdentity,
    pub amount: u64,
}

impl Transfer {
    pub const fn new(to: Name, token: TokenIdentity, amount: u64) -> Self {
        Self { to, token, amount }
    }

    pub const fn quantity(&self) -> Asset {
        self.token.asset(self.amount)
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) to {}", self.quantity(), self.token.issuer, self.to)
    }
}

/// Result of running the swap formula against a pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    pub token_in: TokenId,
    pub amount_in: u64,
    pub token_out: TokenId,
    pub amount_out: u64,
    /// Reserve of token1 after the swap.
    pub reserve1: u64,
    /// Reserve of token2 after the swap.
    pub reserve2: u64,
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn execute_msg_json_shape() {
        let msg = serde_json::from_value::<ExecuteMsg>(json!({
            "withdraw": {
                "owner": "alice",
                "pair_id": 1,
                "liquidity": 20,
            }
        }))
        .unwrap();

        assert_eq!(msg, ExecuteMsg::Withdraw {
            owner: "alice".parse().unwrap(),
            pair_id: 1,
            liquidity: 20,
        });
    }

    #[test]
    fn notice_memo_defaults_to_empty() {
        let notice = serde_json::from_value::<TransferNotice>(json!({
            "from": "alice",
            "to": "simpleswap",
            "quantity": "1.0000 EOS",
        }))
        .unwrap();

        assert_eq!(notice.memo, "");
        assert_eq!(notice.quantity.amount, 10000);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res = serde_json::from_value::<QueryMsg>(json!({
            "pair": { "pair_id": 1, "extra": true }
        }));
        assert!(res.is_err());
    }
}
