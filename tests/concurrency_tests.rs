mod support;

use std::collections::HashSet;
use std::thread;

use parimutuel::domain::{GameId, Pools, Selection, UserId};
use parimutuel::ledger::Ledger;
use parimutuel::testkit::domain as fixtures;

use support::ledger::{balance, bet};

const THREADS: u64 = 16;
const BETS_PER_THREAD: u64 = 50;
const STAKE: i64 = 3;
const GAME: GameId = GameId::new(1);

fn ledger_with_users(users: u64, balance: u64) -> Ledger {
    (0..users)
        .fold(Ledger::builder("admin"), |builder, user| {
            builder.wallet(UserId::new(user), balance)
        })
        .game(fixtures::game(GAME, Pools::default()))
        .build()
}

#[test]
fn concurrent_bets_lose_no_updates() {
    let ledger = ledger_with_users(THREADS, 10_000);

    thread::scope(|scope| {
        for user in 0..THREADS {
            let ledger = &ledger;
            scope.spawn(move || {
                for _ in 0..BETS_PER_THREAD {
                    ledger
                        .place_bet(bet(UserId::new(user), GAME, "home", STAKE))
                        .expect("bet accepted");
                }
            });
        }
    });

    let n = THREADS * BETS_PER_THREAD;
    let game = ledger.game(GAME).unwrap().game;
    assert_eq!(game.pools().home, n * STAKE as u64);
    assert_eq!(ledger.bet_count() as u64, n);

    for user in 0..THREADS {
        assert_eq!(
            balance(&ledger, UserId::new(user)),
            10_000 - BETS_PER_THREAD * STAKE as u64
        );
    }
}

#[test]
fn concurrent_bets_get_unique_sequential_ids() {
    let ledger = ledger_with_users(THREADS, 10_000);

    thread::scope(|scope| {
        for user in 0..THREADS {
            let ledger = &ledger;
            scope.spawn(move || {
                for i in 0..BETS_PER_THREAD {
                    let selection = ["home", "away", "draw"][(i % 3) as usize];
                    ledger
                        .place_bet(bet(UserId::new(user), GAME, selection, 1))
                        .expect("bet accepted");
                }
            });
        }
    });

    let ids: HashSet<u64> = ledger
        .bets_for_game(GAME)
        .iter()
        .map(|b| b.id().value())
        .collect();
    let n = THREADS * BETS_PER_THREAD;
    assert_eq!(ids, (1..=n).collect::<HashSet<_>>());
}

#[test]
fn concurrent_overdraft_attempts_never_go_negative() {
    // One wallet shared by every thread, funded for exactly 10 bets.
    let ledger = Ledger::builder("admin")
        .wallet(UserId::new(1), 10 * STAKE as u64)
        .game(fixtures::game(GAME, Pools::default()))
        .build();

    let accepted: u64 = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let ledger = &ledger;
                scope.spawn(move || {
                    (0..5)
                        .filter(|_| {
                            ledger
                                .place_bet(bet(UserId::new(1), GAME, "away", STAKE))
                                .is_ok()
                        })
                        .count() as u64
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    assert_eq!(accepted, 10);
    assert_eq!(balance(&ledger, UserId::new(1)), 0);
    assert_eq!(
        ledger.game(GAME).unwrap().game.pools().away,
        10 * STAKE as u64
    );
}

#[test]
fn settlement_racing_bets_is_all_or_nothing() {
    let ledger = ledger_with_users(THREADS, 10_000);

    thread::scope(|scope| {
        for user in 0..THREADS {
            let ledger = &ledger;
            scope.spawn(move || {
                for _ in 0..BETS_PER_THREAD {
                    // Bets after settlement are rejected; that is expected here.
                    let _ = ledger.place_bet(bet(UserId::new(user), GAME, "home", 1));
                }
            });
        }
        scope.spawn(|| {
            ledger.settle("admin", GAME, Selection::Home).unwrap();
        });
    });

    // Every accepted bet backed the winner, so each bettor is paid
    // `floor(stake * total / home_pool)` = stake; the whole pool comes back.
    let pools = ledger.game(GAME).unwrap().game.pools();
    let accepted = ledger.bet_count() as u64;
    assert_eq!(pools.home, accepted);
    for user in 0..THREADS {
        assert_eq!(balance(&ledger, UserId::new(user)), 10_000);
    }
}
