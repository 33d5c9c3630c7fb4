use std::io::{BufRead, BufReader, Read};

use leveled_log::{LogResult, Stream};

/// Copies every non-blank input line to `stream`. Returns the number of
/// lines written. Invalid UTF-8 is replaced, not rejected.
pub fn run<R: Read>(input: R, stream: &Stream) -> LogResult<usize> {
    let mut input = BufReader::new(input);
    let mut buf = Vec::new();
    let mut written = 0;

    loop {
        buf.clear();
        let n = input.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let msg = line.trim_end_matches(&['\r', '\n'][..]);
        if msg.trim().is_empty() {
            continue;
        }
        stream.print(msg);
        written += 1;
    }

    tracing::debug!(lines = written, stream = %stream.level(), "input drained");
    Ok(written)
}
