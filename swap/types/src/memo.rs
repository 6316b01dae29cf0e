use {crate::PairId, std::str::FromStr, thiserror::Error};

/// The instruction carried by the memo of an incoming transfer.
///
/// | Memo | Meaning |
/// |---|---|
/// | empty | donation |
/// | `D<pair id>` | stage into the pair's escrow |
/// | `S<pair id>` | swap against the pair |
/// | anything else | not for us |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Memo {
    Donation,
    Deposit(PairId),
    Swap(PairId),
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid memo `{memo}`: pair id must be a run of digits fitting in u64")]
pub struct MemoError {
    pub memo: String,
}

impl FromStr for Memo {
    type Err = MemoError;

    fn from_str(memo: &str) -> Result<Self, Self::Err> {
        if memo.is_empty() {
            return Ok(Memo::Donation);
        }

        let (make, digits): (fn(PairId) -> Memo, _) = if let Some(rest) = memo.strip_prefix('D') {
            (Memo::Deposit, rest)
        } else if let Some(rest) = memo.strip_prefix('S') {
            (Memo::Swap, rest)
        } else {
            return Ok(Memo::Unrecognized);
        };

        // `u64::from_str` accepts a leading `+`, which we don't.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MemoError {
                memo: memo.to_string(),
            });
        }

        digits.parse().map(make).map_err(|_| MemoError {
            memo: memo.to_string(),
        })
    }
}

// ----------------------------------- tests -----------------------------------
