use {
    crate::{Name, PairId, TokenId, TokenIdentity},
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    TokenRegistered {
        token_id: TokenId,
        token: TokenIdentity,
    },
    PairCreated {
        pair_id: PairId,
        token1_id: TokenId,
        token2_id: TokenId,
    },
    Staged {
        owner: Name,
        pair_id: PairId,
        token_id: TokenId,
        amount: u64,
    },
    Deposited {
        owner: Name,
        pair_id: PairId,
        /// Amounts moved into the reserves.
        amount1: u64,
        amount2: u64,
        /// Amounts sent back because the pool ratio didn't need them.
        refund1: u64,
        refund2: u64,
        minted: u64,
    },
    Withdrawn {
        owner: Name,
        pair_id: PairId,
        liquidity: u64,
        amount1: u64,
        amount2: u64,
    },
    Swapped {
        sender: Name,
        pair_id: PairId,
        token_in: TokenId,
        amount_in: u64,
        token_out: TokenId,
        amount_out: u64,
    },
    TransferIgnored {
        from: Name,
        reason: IgnoreReason,
    },
}

/// Why an incoming transfer notification changed nothing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The transfer was sent by the pool itself, e.g. a payout.
    OutgoingTransfer,
    /// The pool is neither sender nor recipient.
    NotRecipient,
    /// Empty memo.
    Donation,
    /// The memo isn't one the pool understands.
    UnrecognizedMemo,
    /// A deposit memo named a pair the token isn't part of. The amount stays
    /// with the pool uncredited.
    TokenNotInPair,
}
