use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use crate::animal::{format_line, SharedAnimal};
use crate::error::{AnnounceError, Result};
use crate::latch::CompletionLatch;

/// How a sequence of animals should be driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sequential,
    Concurrent,
}

/// Outcome of a concurrent announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnounceReport {
    pub launched: usize,
    pub completed: usize,
}

/// Announce every animal one after another, in input order.
///
/// Returns the number of lines written.
pub fn announce_in_order<W: Write + ?Sized>(animals: &[SharedAnimal], out: &mut W) -> Result<usize> {
    debug!(count = animals.len(), "announcing in order");
    for animal in animals {
        writeln!(out, "{}", format_line(animal.as_ref())).map_err(|source| {
            AnnounceError::Write {
                index: animal.index(),
                source,
            }
        })?;
    }
    out.flush().map_err(|source| AnnounceError::Write {
        index: animals.last().map(|a| a.index()).unwrap_or_default(),
        source,
    })?;
    Ok(animals.len())
}

/// Announce every animal at once, one thread per animal.
///
/// Every thread is launched before the caller blocks. Each thread holds the
/// sink lock only while writing its own line, so lines never interleave, but
/// their relative order is unspecified. The call returns only after every
/// thread has signalled completion and been joined.
///
/// All threads run to completion even when one fails; the first failure in
/// launch order is then returned.
pub fn announce_concurrently<W>(animals: &[SharedAnimal], sink: Arc<Mutex<W>>) -> Result<AnnounceReport>
where
    W: Write + Send + 'static,
{
    let launched = animals.len();
    debug!(count = launched, "announcing concurrently");

    let latch = Arc::new(CompletionLatch::new(launched));
    let completed = Arc::new(AtomicUsize::new(0));
    let mut handles: Vec<(i64, JoinHandle<io::Result<()>>)> = Vec::with_capacity(launched);
    let mut spawn_error = None;

    for (pos, animal) in animals.iter().enumerate() {
        let index = animal.index();
        let task = {
            let animal = Arc::clone(animal);
            let sink = Arc::clone(&sink);
            let latch = Arc::clone(&latch);
            let completed = Arc::clone(&completed);
            move || -> io::Result<()> {
                let _done = latch.guard();
                let kind = animal.kind();
                trace!(index, %kind, "spawned");

                trace!(index, %kind, "awaiting lock");
                let mut out = sink.lock().unwrap_or_else(PoisonError::into_inner);

                trace!(index, %kind, "writing");
                writeln!(out, "{}", format_line(animal.as_ref()))?;
                out.flush()?;
                drop(out);

                completed.fetch_add(1, Ordering::SeqCst);
                trace!(index, %kind, "done");
                Ok(())
            }
        };

        match thread::Builder::new()
            .name(format!("announce-{index}"))
            .spawn(task)
        {
            Ok(handle) => handles.push((index, handle)),
            Err(source) => {
                // Release the slots of every thread that will never run.
                for _ in pos..launched {
                    latch.count_down();
                }
                spawn_error = Some(AnnounceError::Spawn { index, source });
                break;
            }
        }
    }

    latch.wait();

    let mut first_error = spawn_error;
    for (index, handle) in handles {
        let outcome = match handle.join() {
            Ok(Ok(())) => continue,
            Ok(Err(source)) => AnnounceError::Write { index, source },
            Err(_) => AnnounceError::TaskPanicked { index },
        };
        debug!(index, error = %outcome, "announcer failed");
        first_error.get_or_insert(outcome);
    }

    if let Some(err) = first_error {
        return Err(err);
    }

    let report = AnnounceReport {
        launched,
        completed: completed.load(Ordering::SeqCst),
    };
    debug!(launched = report.launched, completed = report.completed, "all announcers finished");
    Ok(report)
}

/// Drive the animals to the process stdout in the requested mode.
pub fn announce_stdout(animals: &[SharedAnimal], mode: Mode) -> Result<usize> {
    match mode {
        Mode::Sequential => announce_in_order(animals, &mut io::stdout().lock()),
        Mode::Concurrent => {
            let report = announce_concurrently(animals, Arc::new(Mutex::new(io::stdout())))?;
            Ok(report.completed)
        }
    }
}
