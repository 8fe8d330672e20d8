//! Position module tests, split by category:
//! - `fen.rs` - FEN parsing and serialization
//! - `moves.rs` - move encoding, notation, and MVV-LVA ordering
//! - `make_unmake.rs` - make/undo correctness and reversibility
//! - `movegen.rs` - move generation and the legality filter
//! - `perft.rs` - node-count vectors
//! - `proptest.rs` - property-based tests

mod movegen;
