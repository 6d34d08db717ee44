use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// A one-shot countdown barrier.
///
/// Starts `Counting(n)` and moves to `Released` once `n` completions have been
/// signalled. Waiters block until release; a latch created with zero is
/// released from the start.
#[derive(Debug)]
pub struct CompletionLatch {
    remaining: Mutex<usize>,
    released: Condvar,
}

impl CompletionLatch {
    pub fn new(count: usize) -> Self {
        Self {
            remaining: Mutex::new(count),
            released: Condvar::new(),
        }
    }

    // Only counters live behind this lock, so a poisoned guard is still sound.
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.remaining.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn count_down(&self) {
        let mut remaining = self.lock();
        *remaining = remaining.saturating_sub(1);
        if *remaining == 0 {
            self.released.notify_all();
        }
    }

    #[cfg(test)]
    fn remaining(&self) -> usize {
        *self.lock()
    }

    pub fn wait(&self) {
        let mut remaining = self.lock();
        while *remaining > 0 {
            remaining = self
                .released
                .wait(remaining)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// A guard that counts the latch down when dropped, including on unwind.
    pub fn guard(&self) -> CompletionGuard<'_> {
        CompletionGuard { latch: self }
    }
}

#[must_use]
pub struct CompletionGuard<'a> {
    latch: &'a CompletionLatch,
}

impl Drop for CompletionGuard<'_> {
    fn drop(&mut self) {
        self.latch.count_down();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn zero_latch_does_not_block() {
        let latch = CompletionLatch::new(0);
        latch.wait();
        assert_eq!(latch.remaining(), 0);
    }

    #[test]
    fn count_down_saturates_at_zero() {
        let latch = CompletionLatch::new(1);
        latch.count_down();
        latch.count_down();
        assert_eq!(latch.remaining(), 0);
    }

    #[test]
    fn wait_returns_after_all_threads_signal() {
        let latch = Arc::new(CompletionLatch::new(5));
        let done = Arc::new(AtomicUsize::new(0));

        for i in 0..5u64 {
            let latch = Arc::clone(&latch);
            let done = Arc::clone(&done);
            std::thread::spawn(move || {
                let _guard = latch.guard();
                std::thread::sleep(Duration::from_millis(5 * i));
                done.fetch_add(1, Ordering::SeqCst);
            });
        }

        latch.wait();
        assert_eq!(done.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn guard_signals_when_thread_panics() {
        let latch = Arc::new(CompletionLatch::new(1));
        let worker = {
            let latch = Arc::clone(&latch);
            std::thread::spawn(move || {
                let _guard = latch.guard();
                panic!("simulated panic");
            })
        };

        latch.wait();
        assert!(worker.join().is_err());
        assert_eq!(latch.remaining(), 0);
    }
}
