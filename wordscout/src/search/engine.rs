use crossbeam_channel::{unbounded, RecvTimeoutError};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::worker::{scan_unit, WorkerMessage};
use crate::config::FinderConfig;
use crate::errors::{FinderError, FinderResult};
use crate::index::WordIndex;
use crate::partition::plan_units;
use crate::results::Tally;

/// Runs the concurrent compound-word search and returns the merged result.
///
/// One worker thread is spawned per configured task, each bound to one work
/// unit for its whole life; there is no work stealing or re-balancing. All
/// workers report over a single channel, and the coordinator merges longest
/// word advertisements as they arrive.
///
/// Partitioning failures are fatal and propagate. Workers that time out or
/// panic degrade the run instead: their counts are excluded, a warning is
/// logged, and the tally from the remaining workers is returned.
pub fn find_compound_words(index: Arc<WordIndex>, config: &FinderConfig) -> FinderResult<Tally> {
    let number_of_tasks = config.thread_count.get();
    info!(
        "Starting search across {} words with {} workers ({:?} partitioning)",
        index.len(),
        number_of_tasks,
        config.strategy
    );

    let units = plan_units(index.len(), number_of_tasks, config.strategy)?;
    let deadline = Instant::now() + config.worker_timeout;
    let (sender, receiver) = unbounded::<WorkerMessage>();

    let mut handles = Vec::with_capacity(units.len());
    for (worker, unit) in units.into_iter().enumerate() {
        let sender = sender.clone();
        let index = Arc::clone(&index);
        let handle = thread::Builder::new()
            .name(format!("wordscout-worker-{worker}"))
            .spawn(move || {
                // Contain panics so one poisoned unit cannot take down the
                // process; the coordinator notices the missing report.
                let scan = catch_unwind(AssertUnwindSafe(|| {
                    scan_unit(worker, &index, unit, &sender);
                }));
                if scan.is_err() {
                    warn!("{}", FinderError::WorkerPanic { worker });
                }
            })
            .map_err(FinderError::IoError)?;
        handles.push(handle);
    }
    // Drop the coordinator's sender so channel disconnection tracks worker
    // exits alone.
    drop(sender);

    let mut merged = Tally::new();
    let mut finished = vec![false; number_of_tasks];
    let mut finished_count = 0;
    let mut timed_out = false;

    while finished_count < number_of_tasks {
        match receiver.recv_deadline(deadline) {
            Ok(WorkerMessage::Longest { worker, words }) => {
                debug!("Worker {} advertised {} longest word(s)", worker, words.len());
                merged.absorb(words);
            }
            Ok(WorkerMessage::Finished { worker, tally }) => {
                finished[worker] = true;
                finished_count += 1;
                merged.compound_word_count += tally.compound_word_count;
            }
            Err(RecvTimeoutError::Timeout) => {
                timed_out = true;
                warn!(
                    "{}",
                    FinderError::WorkerTimeout {
                        pending: number_of_tasks - finished_count,
                        timeout: config.worker_timeout,
                    }
                );
                break;
            }
            Err(RecvTimeoutError::Disconnected) => {
                // Every sender is gone but not every worker reported: the
                // missing ones died mid-scan.
                for (worker, done) in finished.iter().enumerate() {
                    if !done {
                        warn!("{}", FinderError::WorkerPanic { worker });
                    }
                }
                break;
            }
        }
    }

    if !timed_out {
        // All workers have exited or are about to; reap the threads.
        for handle in handles {
            let _ = handle.join();
        }
    }
    // On timeout the stragglers are left running detached; their eventual
    // results are discarded with the channel.

    info!(
        "Search complete. Found {} compound words, {} tied for longest",
        merged.compound_word_count,
        merged.longest_words.len()
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::PartitionStrategy;
    use std::num::NonZeroUsize;
    use std::time::Duration;

    #[test]
    fn test_search_small_list() {
        let index = Arc::new(
            WordIndex::build(["a", "b", "ab", "abc", "c", "bc"]).unwrap(),
        );
        let config = FinderConfig {
            thread_count: NonZeroUsize::new(2).unwrap(),
            strategy: PartitionStrategy::Step,
            worker_timeout: Duration::from_secs(10),
            log_level: "warn".to_string(),
        };

        let tally = find_compound_words(index, &config).unwrap();
        assert_eq!(tally.compound_word_count, 3);
        assert_eq!(tally.longest_words.len(), 1);
        assert!(tally.longest_words.contains("abc"));
    }
}
