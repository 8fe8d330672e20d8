//! Perft harness.
//!
//! Counts leaf nodes of the full legal-move tree over a table of standard
//! positions and compares them against known answers. Any off-by-one in move
//! generation, make/undo, or the legality filter changes a count and shows up
//! immediately.

use std::time::Instant;

use crate::position::{Position, STARTING_FEN};

struct Scenario {
    name: &'static str,
    fen: &'static str,
    depths: &'static [(u32, u64)],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "initial position",
        fen: STARTING_FEN,
        depths: &[(1, 20), (2, 400), (3, 8_902), (4, 197_281), (5, 4_865_609)],
    },
    Scenario {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depths: &[(1, 48), (2, 2_039), (3, 97_862)],
    },
    Scenario {
        name: "rook endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depths: &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    },
    Scenario {
        name: "promotion",
        fen: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
        depths: &[(1, 24), (2, 496), (3, 9_483)],
    },
    Scenario {
        name: "castling",
        fen: "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        depths: &[(1, 26), (2, 568), (3, 13_744)],
    },
];

/// Run the whole suite, printing per-depth node counts and timing. Returns
/// false when any count disagrees with the reference.
pub fn run() -> bool {
    let mut all_ok = true;

    for scenario in SCENARIOS {
        println!("{} ({})", scenario.name, scenario.fen);
        let mut position = Position::from_fen(scenario.fen).expect("suite FEN parses");

        for &(depth, expected) in scenario.depths {
            let start = Instant::now();
            let nodes = position.perft(depth);
            let elapsed = start.elapsed();
            let nps = (nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON)) as u64;

            if nodes == expected {
                println!("  depth {depth}: {nodes} nodes in {elapsed:.2?} ({nps} nps)");
            } else {
                all_ok = false;
                println!("  depth {depth}: {nodes} nodes in {elapsed:.2?}, expected {expected}");
            }
        }
    }

    if all_ok {
        println!("all perft counts match");
    } else {
        log::error!("perft mismatch");
        println!("PERFT MISMATCH");
    }
    all_ok
}
