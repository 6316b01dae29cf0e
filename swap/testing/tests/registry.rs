use {
    swap_pool::ErrorKind,
    swap_testing::{ResultExt, TestSuite, token},
    swap_types::{Event, PairRecord, QueryMsg, SymbolCode, TokenId, TokenRecord},
};

#[test]
fn registering_tokens() {
    let suite = TestSuite::new();

    let res = suite
        .register_token(token("eosio.token", "4,EOS"))
        .should_succeed();

    assert_eq!(res.events, vec![Event::TokenRegistered {
        token_id: 1,
        token: token("eosio.token", "4,EOS"),
    }]);

    suite
        .register_token(token("usd.token", "2,USD"))
        .should_succeed();

    suite
        .query::<Vec<TokenRecord>>(QueryMsg::Tokens {})
        .should_succeed_and_equal(vec![
            TokenRecord {
                id: 1,
                identity: token("eosio.token", "4,EOS"),
            },
            TokenRecord {
                id: 2,
                identity: token("usd.token", "2,USD"),
            },
        ]);
}

#[test]
fn duplicate_registration_resolves_to_the_earliest_id() {
    let suite = TestSuite::new();
    let eos = token("eosio.token", "4,EOS");

    suite.register_token(eos).should_succeed();
    suite
        .register_token(token("usd.token", "2,USD"))
        .should_succeed();
    suite.register_token(eos).should_succeed();

    // Both records exist.
    for token_id in [1, 3] {
        suite
            .query::<TokenRecord>(QueryMsg::Token { token_id })
            .should_succeed_and_equal(TokenRecord {
                id: token_id,
                identity: eos,
            });
    }

    suite
        .query::<TokenId>(QueryMsg::ResolveToken { token: eos })
        .should_succeed_and_equal(1);
}

#[test]
fn invalid_symbols_are_rejected() {
    let suite = TestSuite::new();
    let mut bad = token("eosio.token", "4,EOS");
    bad.symbol.code = SymbolCode::from_raw(0);

    suite
        .register_token(bad)
        .should_fail_with_kind(ErrorKind::InvalidArgument);

    suite
        .query::<Vec<TokenRecord>>(QueryMsg::Tokens {})
        .should_succeed_and_equal(Vec::<TokenRecord>::new());
}

#[test]
fn creating_pairs() {
    let suite = TestSuite::new();
    let eos = token("eosio.token", "4,EOS");
    let usd = token("usd.token", "2,USD");

    suite.register_token(eos).should_succeed();
    suite.register_token(usd).should_succeed();

    let res = suite.create_pair(usd, eos).should_succeed();

    assert_eq!(res.events, vec![Event::PairCreated {
        pair_id: 1,
        token1_id: 2,
        token2_id: 1,
    }]);

    suite
        .query_pair(1)
        .should_succeed_and_equal(PairRecord::new(1, 2, 1));

    // The pair is ordered: (EOS, USD) is a different pair from (USD, EOS).
    suite
        .query::<PairRecord>(QueryMsg::PairByTokens {
            token1_id: 1,
            token2_id: 2,
        })
        .should_fail_with_kind(ErrorKind::NotFound);

    // Duplicates are allowed, and lookups by tokens find the earliest.
    suite.create_pair(usd, eos).should_succeed();

    suite
        .query::<PairRecord>(QueryMsg::PairByTokens {
            token1_id: 2,
            token2_id: 1,
        })
        .should_succeed_and_equal(PairRecord::new(1, 2, 1));

    suite
        .query::<Vec<PairRecord>>(QueryMsg::Pairs {})
        .should_succeed_and_equal(vec![PairRecord::new(1, 2, 1), PairRecord::new(2, 2, 1)]);
}

#[test]
fn pairs_need_two_registered_tokens() {
    let suite = TestSuite::new();
    let eos = token("eosio.token", "4,EOS");

    suite.register_token(eos).should_succeed();

    suite
        .create_pair(eos, eos)
        .should_fail_with(ErrorKind::InvalidArgument, "same token");

    suite
        .create_pair(eos, token("usd.token", "2,USD"))
        .should_fail_with(ErrorKind::NotFound, "token not added");

    suite
        .query_pair(1)
        .should_fail_with_kind(ErrorKind::NotFound);
}
