use {
    swap_pool::ErrorKind,
    swap_testing::{CONTRACT, ResultExt, TestSuite, name, token},
    swap_types::{Event, IgnoreReason, TokenIdentity, TransferNotice},
    test_case::test_case,
};

fn eos() -> TokenIdentity {
    token("eosio.token", "4,EOS")
}

fn usd() -> TokenIdentity {
    token("usd.token", "2,USD")
}

fn setup() -> TestSuite {
    let suite = TestSuite::new();

    suite.register_token(eos()).should_succeed();
    suite.register_token(usd()).should_succeed();
    suite.create_pair(eos(), usd()).should_succeed();

    suite
}

#[test_case("", IgnoreReason::Donation ; "empty memo")]
#[test_case("hello", IgnoreReason::UnrecognizedMemo ; "free text")]
#[test_case("d1", IgnoreReason::UnrecognizedMemo ; "lowercase prefix")]
#[test_case("X1", IgnoreReason::UnrecognizedMemo ; "unknown prefix")]
fn memos_that_change_nothing(memo: &str, reason: IgnoreReason) {
    let suite = setup();
    let before = suite.snapshot();

    let res = suite.transfer(eos(), "alice", 100, memo).should_succeed();

    assert_eq!(res.events, vec![Event::TransferIgnored {
        from: name("alice"),
        reason,
    }]);
    assert!(res.messages.is_empty());
    assert_eq!(suite.snapshot(), before);
}

#[test_case("D" ; "missing pair id")]
#[test_case("Dabc" ; "non-numeric pair id")]
#[test_case("S+1" ; "signed pair id")]
#[test_case("S1 " ; "trailing space")]
#[test_case("D18446744073709551616" ; "pair id overflows")]
fn malformed_pair_ids_are_rejected(memo: &str) {
    let suite = setup();

    suite
        .transfer(eos(), "alice", 100, memo)
        .should_fail_with(ErrorKind::InvalidArgument, "invalid memo");
}

#[test]
fn outgoing_transfers_are_ignored() {
    let suite = setup();
    let before = suite.snapshot();

    let res = suite
        .app
        .notify_transfer(name("eosio.token"), TransferNotice {
            from: name(CONTRACT),
            to: name("alice"),
            quantity: eos().asset(100),
            memo: "S1".to_string(),
        })
        .should_succeed();

    assert_eq!(res.events, vec![Event::TransferIgnored {
        from: name(CONTRACT),
        reason: IgnoreReason::OutgoingTransfer,
    }]);
    assert_eq!(suite.snapshot(), before);
}

#[test]
fn transfers_between_others_are_ignored() {
    let suite = setup();
    let before = suite.snapshot();

    let res = suite
        .app
        .notify_transfer(name("eosio.token"), TransferNotice {
            from: name("alice"),
            to: name("bob"),
            quantity: eos().asset(100),
            memo: "D1".to_string(),
        })
        .should_succeed();

    assert_eq!(res.events, vec![Event::TransferIgnored {
        from: name("alice"),
        reason: IgnoreReason::NotRecipient,
    }]);
    assert_eq!(suite.snapshot(), before);
}

#[test]
fn unregistered_tokens_are_rejected() {
    let suite = setup();

    // Right symbol, wrong issuer.
    suite
        .transfer(token("fake.token", "4,EOS"), "alice", 100, "D1")
        .should_fail_with(ErrorKind::NotFound, "token not added");

    // Right issuer, wrong precision.
    suite
        .transfer(token("eosio.token", "3,EOS"), "alice", 100, "D1")
        .should_fail_with_kind(ErrorKind::NotFound);
}

#[test]
fn staging_into_an_unknown_pair_fails() {
    let suite = setup();

    suite
        .transfer(eos(), "alice", 100, "D2")
        .should_fail_with(ErrorKind::NotFound, "token pair id not exist");
}

#[test]
fn staging_a_token_outside_the_pair_credits_nothing() {
    let suite = setup();
    let btc = token("btc.token", "8,BTC");

    suite.register_token(btc).should_succeed();

    let res = suite.transfer(btc, "alice", 100, "D1").should_succeed();

    assert_eq!(res.events, vec![Event::TransferIgnored {
        from: name("alice"),
        reason: IgnoreReason::TokenNotInPair,
    }]);

    suite
        .query_escrow("alice", 1)
        .should_fail_with_kind(ErrorKind::NotFound);
}

#[test]
fn staging_emits_an_event() {
    let suite = setup();

    let res = suite.transfer(usd(), "alice", 250, "D1").should_succeed();

    assert_eq!(res.events, vec![Event::Staged {
        owner: name("alice"),
        pair_id: 1,
        token_id: 2,
        amount: 250,
    }]);
}
