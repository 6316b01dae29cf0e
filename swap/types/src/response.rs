use {
    crate::{Event, Transfer},
    serde::{Deserialize, Serialize},
    swap_math::Number,
};

/// What a successful operation asks of the host: transfers to dispatch, and
/// events describing the state change.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Response {
    pub messages: Vec<Transfer>,
    pub events: Vec<Event>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transfer, unless it moves nothing.
    pub fn add_transfer(mut self, transfer: Transfer) -> Self {
        if transfer.amount.is_non_zero() {
            self.messages.push(transfer);
        }
        self
    }

    pub fn add_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, crate::TokenIdentity};

    #[test]
    fn zero_transfers_are_skipped() {
        let eos = TokenIdentity::new("eosio.token".parse().unwrap(), "4,EOS".parse().unwrap());
        let alice = "alice".parse().unwrap();

        let res = Response::new()
            .add_transfer(Transfer::new(alice, eos, 0))
            .add_transfer(Transfer::new(alice, eos, 7));

        assert_eq!(res.messages, vec![Transfer::new(alice, eos, 7)]);
    }
}
