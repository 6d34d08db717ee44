use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use menagerie::animal::{CAT_SOUND, DOG_SOUND};

/// Parse one announcement line back into `(index, sound)`.
///
/// Rejects anything that is not exactly `<index padded to 3>: <known sound>`.
#[allow(dead_code)]
pub fn parse_line(line: &str) -> Option<(i64, &str)> {
    let (head, sound) = line.split_once(": ")?;
    if head.len() < 3 || !head.ends_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let index = head.trim_start().parse::<i64>().ok()?;
    if format!("{index:>3}") != head {
        return None;
    }
    if sound != CAT_SOUND && sound != DOG_SOUND {
        return None;
    }
    Some((index, sound))
}

/// A writer that pushes one byte at a time with a pause in between, so any
/// writer not holding the lock for the whole line would interleave.
#[allow(dead_code)]
pub struct TrickleWriter {
    pub buf: Arc<Mutex<Vec<u8>>>,
    pub pause: Duration,
}

impl Write for TrickleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let Some(first) = data.first() else {
            return Ok(0);
        };
        self.buf
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(*first);
        std::thread::sleep(self.pause);
        Ok(1)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
