// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

use std::io;
use std::io::BufRead;
use std::io::Write;
use std::process::ExitCode;

use strand::Representation;
use strand::RopeBuilder;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut builder = RopeBuilder::new();
    let mut line = Vec::new();
    let mut number = 0;

    loop {
        match input.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => number += 1,
            Err(error) => {
                eprintln!("read failed: {}", error);
                return ExitCode::FAILURE;
            }
        }
        match std::mem::take(&mut line).try_decode() {
            Ok(rope) => {
                for chunk in rope.chunks() {
                    builder.push_str(chunk.as_str());
                }
            }
            Err(error) => {
                eprintln!("line {}: {}", number, error);
                return ExitCode::FAILURE;
            }
        }
    }

    let rope = builder.finish();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    if let Err(error) = rope.write_to(&mut output).and_then(|_| output.flush()) {
        eprintln!("write failed: {}", error);
        return ExitCode::FAILURE;
    }

    eprintln!("lines:  {}", number);
    eprintln!("width:  {}", rope.width());
    eprintln!("bytes:  {}", rope.len_bytes());
    eprintln!("chunks: {}", rope.chunks().count());
    eprintln!("blake3: {}", rope.digest());
    return ExitCode::SUCCESS;
}
