//! `rz-replay`: replay a gesture script and print each callback as a JSON line.
//!
//! Usage: `rz-replay [script.json]`. Reads stdin when no path is given.
//! Set `RUST_LOG=debug` (or `trace`) to watch the engine work.

use std::io::{Read, Write};

fn main() {
    env_logger::init();

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}")),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map(|_| text)
                .map_err(|e| format!("stdin: {e}"))
        }
    };

    let result = text
        .and_then(|text| rz_replay::replay_str(&text))
        .and_then(|replay| replay.to_json_lines());

    match result {
        Ok(lines) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = out.write_all(lines.as_bytes()) {
                eprintln!("rz-replay error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("rz-replay error: {e}");
            std::process::exit(1);
        }
    }
}
