use {
    std::collections::BTreeMap,
    swap_pool::ErrorKind,
    swap_testing::{ResultExt, TestSuite, name, setup_tracing_subscriber, token},
    swap_types::{
        EscrowEntry, Event, ExecuteMsg, PairId, PairRecord, QueryMsg, TokenIdentity, Transfer,
    },
    test_case::test_case,
};

fn eos() -> TokenIdentity {
    token("eosio.token", "4,EOS")
}

fn usd() -> TokenIdentity {
    token("usd.token", "2,USD")
}

/// Register EOS and USD and create an empty EOS/USD pair, which gets id 1.
fn setup() -> TestSuite {
    setup_tracing_subscriber(tracing::Level::DEBUG);

    let suite = TestSuite::new();
    suite.register_token(eos()).should_succeed();
    suite.register_token(usd()).should_succeed();
    suite.create_pair(eos(), usd()).should_succeed();
    suite
}

fn provide(suite: &TestSuite, owner: &str, amount1: u64, amount2: u64) {
    suite.transfer(eos(), owner, amount1, "D1").should_succeed();
    suite.transfer(usd(), owner, amount2, "D1").should_succeed();
    suite.deposit(owner, 1).should_succeed();
}

#[test_case(100, 100, 100 ; "balanced")]
#[test_case(1000, 500, 500 ; "more of token1")]
#[test_case(3, 70, 3 ; "more of token2")]
fn bootstrapping_deposit(amount1: u64, amount2: u64, minted: u64) {
    let suite = setup();

    suite.transfer(eos(), "alice", amount1, "D1").should_succeed();
    suite.transfer(usd(), "alice", amount2, "D1").should_succeed();

    suite
        .query_escrow("alice", 1)
        .should_succeed_and_equal(EscrowEntry {
            staged1: amount1,
            staged2: amount2,
            liquidity: 0,
        });

    let res = suite.deposit("alice", 1).should_succeed();

    assert!(res.messages.is_empty());
    assert_eq!(res.events, vec![Event::Deposited {
        owner: name("alice"),
        pair_id: 1,
        amount1,
        amount2,
        refund1: 0,
        refund2: 0,
        minted,
    }]);

    suite.query_pair(1).should_succeed_and_equal(PairRecord {
        reserve1: amount1,
        reserve2: amount2,
        total_liquidity: minted,
        ..PairRecord::new(1, 1, 2)
    });

    suite
        .query_escrow("alice", 1)
        .should_succeed_and_equal(EscrowEntry {
            staged1: 0,
            staged2: 0,
            liquidity: minted,
        });
}

#[test]
fn staged_amounts_accumulate() {
    let suite = setup();

    suite.transfer(eos(), "alice", 30, "D1").should_succeed();
    suite.transfer(eos(), "alice", 12, "D1").should_succeed();
    suite.transfer(usd(), "alice", 5, "D1").should_succeed();

    suite
        .query_escrow("alice", 1)
        .should_succeed_and_equal(EscrowEntry {
            staged1: 42,
            staged2: 5,
            liquidity: 0,
        });

    // Staging moves nothing into the reserves.
    suite
        .query_pair(1)
        .should_succeed_and_equal(PairRecord::new(1, 1, 2));
}

#[test]
fn proportional_deposit_refunds_the_excess() {
    let suite = setup();

    provide(&suite, "alice", 100, 100);

    suite.transfer(eos(), "bob", 50, "D1").should_succeed();
    suite.transfer(usd(), "bob", 30, "D1").should_succeed();

    let res = suite.deposit("bob", 1).should_succeed();

    // Only 30 of each side is needed at a 1:1 ratio. The 20 EOS left over is
    // sent back; the zero USD refund is not.
    assert_eq!(res.messages, vec![Transfer::new(name("bob"), eos(), 20)]);
    assert_eq!(suite.take_transfers(), vec![Transfer::new(name("bob"), eos(), 20)]);

    suite.query_pair(1).should_succeed_and_equal(PairRecord {
        reserve1: 130,
        reserve2: 130,
        total_liquidity: 130,
        ..PairRecord::new(1, 1, 2)
    });

    suite
        .query_escrow("bob", 1)
        .should_succeed_and_equal(EscrowEntry {
            staged1: 0,
            staged2: 0,
            liquidity: 30,
        });
}

#[test]
fn deposit_minting_nothing_is_rejected() {
    let suite = setup();

    provide(&suite, "alice", 1000, 1000);

    // 1 * 1000 / 1000 = 1 on the first side, but nothing of the second.
    suite.transfer(eos(), "bob", 1, "D1").should_succeed();

    suite
        .deposit("bob", 1)
        .should_fail_with(ErrorKind::InvalidArgument, "mint zero liquidity");
}

#[test]
fn deposit_without_escrow_fails() {
    let suite = setup();

    suite
        .deposit("alice", 1)
        .should_fail_with_kind(ErrorKind::NotFound);
}

#[test]
fn deposit_for_someone_else_is_unauthorized() {
    let suite = setup();

    suite.transfer(eos(), "alice", 10, "D1").should_succeed();
    suite.transfer(usd(), "alice", 10, "D1").should_succeed();

    suite
        .execute("bob", ExecuteMsg::Deposit {
            owner: name("alice"),
            pair_id: 1,
        })
        .should_fail_with_kind(ErrorKind::Unauthorized);
}

#[test]
fn partial_withdrawal() {
    let suite = setup();

    provide(&suite, "alice", 50, 50);

    let res = suite.withdraw("alice", 1, 20).should_succeed();

    assert_eq!(res.events, vec![Event::Withdrawn {
        owner: name("alice"),
        pair_id: 1,
        liquidity: 20,
        amount1: 20,
        amount2: 20,
    }]);
    assert_eq!(suite.take_transfers(), vec![
        Transfer::new(name("alice"), eos(), 20),
        Transfer::new(name("alice"), usd(), 20),
    ]);

    suite.query_pair(1).should_succeed_and_equal(PairRecord {
        reserve1: 30,
        reserve2: 30,
        total_liquidity: 30,
        ..PairRecord::new(1, 1, 2)
    });

    suite
        .query_escrow("alice", 1)
        .should_succeed_and_equal(EscrowEntry {
            staged1: 0,
            staged2: 0,
            liquidity: 30,
        });
}

#[test]
fn withdrawing_the_whole_balance_empties_the_pool() {
    let suite = setup();

    provide(&suite, "alice", 50, 50);

    suite.withdraw("alice", 1, 50).should_succeed();

    suite
        .query_pair(1)
        .should_succeed_and_equal(PairRecord::new(1, 1, 2));

    suite
        .query_escrow("alice", 1)
        .should_succeed_and_equal(EscrowEntry::default());

    suite
        .withdraw("alice", 1, 1)
        .should_fail_with_kind(ErrorKind::InvalidArgument);

    // An emptied pool can be bootstrapped again.
    provide(&suite, "bob", 7, 9);

    suite.query_pair(1).should_succeed_and_equal(PairRecord {
        reserve1: 7,
        reserve2: 9,
        total_liquidity: 7,
        ..PairRecord::new(1, 1, 2)
    });
}

#[test]
fn cannot_withdraw_more_than_owned() {
    let suite = setup();

    provide(&suite, "alice", 100, 100);
    provide(&suite, "bob", 10, 10);

    suite
        .withdraw("bob", 1, 11)
        .should_fail_with(ErrorKind::InvalidArgument, "insufficient liquidity");

    suite
        .withdraw("carol", 1, 1)
        .should_fail_with_kind(ErrorKind::NotFound);
}

#[test]
fn escrows_are_listed_per_owner() {
    let suite = setup();

    suite.register_token(token("btc.token", "8,BTC")).should_succeed();
    suite.create_pair(token("btc.token", "8,BTC"), usd()).should_succeed();

    suite.transfer(eos(), "alice", 5, "D1").should_succeed();
    suite.transfer(usd(), "alice", 6, "D2").should_succeed();

    suite
        .query::<BTreeMap<PairId, EscrowEntry>>(QueryMsg::Escrows {
            owner: name("alice"),
        })
        .should_succeed_and_equal(BTreeMap::from([
            (1, EscrowEntry {
                staged1: 5,
                staged2: 0,
                liquidity: 0,
            }),
            (2, EscrowEntry {
                staged1: 0,
                staged2: 6,
                liquidity: 0,
            }),
        ]));

    suite
        .query::<BTreeMap<PairId, EscrowEntry>>(QueryMsg::Escrows {
            owner: name("bob"),
        })
        .should_succeed_and_equal(BTreeMap::new());
}
