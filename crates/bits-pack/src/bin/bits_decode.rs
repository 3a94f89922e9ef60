//! `bits-decode` — decode one BITS transmission and report both metrics.
//!
//! Usage:
//!   bits-decode [FILE]
//!
//! Reads a single line of hex from FILE (stdin when omitted), decodes the
//! packet tree once, and prints the version sum and the evaluated value.
//! Set `RUST_LOG=debug` for decoder tracing.

use bits_pack::{evaluate, version_sum, BitsDecoder};
use std::io::Read;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut input = String::new();
    if let Some(path) = args.get(1) {
        match std::fs::read_to_string(path) {
            Ok(s) => input = s,
            Err(e) => {
                eprintln!("{path}: {e}");
                std::process::exit(1);
            }
        }
    } else if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let packet = match BitsDecoder::new().decode_hex(input.trim()) {
        Ok(packet) => packet,
        Err(e) => {
            eprintln!("decode failed: {e}");
            std::process::exit(1);
        }
    };

    println!("version sum: {}", version_sum(&packet));
    match evaluate(&packet) {
        Ok(value) => println!("value: {value}"),
        Err(e) => {
            eprintln!("evaluate failed: {e}");
            std::process::exit(1);
        }
    }
}
