use std::env;
use std::process;
use std::sync::Arc;

use parking_lot::Mutex;

use cadence::engine::Cadence;
use cadence::perft;
use cadence::uci::{Receiver, Sender, StdinReader, StdoutWriter};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => run_uci(),
        [command] if command.eq_ignore_ascii_case("perft") => {
            if !perft::run() {
                process::exit(1);
            }
        }
        _ => {
            eprintln!("Usage: cadence [perft]");
            process::exit(1);
        }
    }
}

fn run_uci() {
    let sender = Arc::new(Mutex::new(Sender::new(Box::new(StdoutWriter::new()))));
    let engine = Cadence::new(Arc::clone(&sender));
    let mut receiver = Receiver::new(StdinReader::new(), sender, engine);
    if let Err(err) = receiver.run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
