//! Line-oriented shell transport: one message per input line, one reply
//! per output line.
use std::borrow::Cow;
use std::io::{BufRead, Write};

use tracing::{error, warn};

use halbot_dispatch::Dispatcher;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellStats {
    pub messages: usize,
    pub replies: usize,
    pub failures: usize,
}

/// Dispatch every line from `input`; replies go to `output`, handler
/// failures are logged and the loop moves on. Bytes that are not UTF-8
/// are replaced with U+FFFD rather than ending the session.
pub fn run_shell<R: BufRead, W: Write>(dispatcher: &Dispatcher, mut input: R, mut output: W) -> std::io::Result<ShellStats> {
    let mut stats = ShellStats::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 { break; }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("input line was not valid UTF-8, decoded lossily");
        }
        let message = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        if message.is_empty() { continue; }
        stats.messages += 1;
        match dispatcher.dispatch(message) {
            Ok(Some(reply)) => {
                writeln!(output, "{}", reply)?;
                output.flush()?;
                stats.replies += 1;
            }
            Ok(None) => {}
            Err(e) => {
                error!(%message, error = %e, "handler failed");
                stats.failures += 1;
            }
        }
    }
    Ok(stats)
}
