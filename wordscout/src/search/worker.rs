use crossbeam_channel::Sender;
use std::collections::HashSet;
use tracing::debug;

use super::matcher::is_compound;
use crate::index::WordIndex;
use crate::partition::WorkUnit;
use crate::results::Tally;

/// Messages a worker sends to the coordinator over the shared channel.
///
/// The channel preserves per-sender order, so a worker's `Longest`
/// advertisement is always received before its `Finished` report.
#[derive(Debug)]
pub(crate) enum WorkerMessage {
    /// One-time advertisement of the longest compound words this worker
    /// found in its unit. Possibly empty.
    Longest {
        worker: usize,
        words: HashSet<String>,
    },
    /// The worker exhausted its unit; its tally is final.
    Finished { worker: usize, tally: Tally },
}

/// Scans one work unit and reports through `sender`.
///
/// Sends exactly one `Longest` advertisement and exactly one `Finished`
/// message. The advertisement fires as soon as the worker can prove it has
/// seen all of its longest words: because the index is sorted longest-first,
/// the first confirmed compound word that is shorter than the running
/// longest ends the hunt. Counting continues to the end of the unit either
/// way.
pub(crate) fn scan_unit(
    worker: usize,
    index: &WordIndex,
    unit: WorkUnit,
    sender: &Sender<WorkerMessage>,
) {
    debug!(
        "TASK[started] worker {} scanning positions {}..{} (stride {})",
        worker, unit.start, unit.end, unit.stride
    );

    let mut tally = Tally::new();
    let mut looking_for_longest = true;

    for position in unit.positions() {
        let Ok(word) = index.get(position) else {
            // Planned units never exceed the index.
            break;
        };
        if !is_compound(word, index) {
            continue;
        }
        tally.record_compound();

        if looking_for_longest && !tally.observe_longest(word) {
            debug!(
                "TASK[checkpoint] worker {} has found all of its longest words",
                worker
            );
            looking_for_longest = false;
            // Fire-and-forget on an unbounded channel: the send never blocks
            // the remainder of the scan.
            let _ = sender.send(WorkerMessage::Longest {
                worker,
                words: tally.longest_words.clone(),
            });
        }
    }

    // No compound word ever fell short of the running longest (or none was
    // found at all), so the advertisement goes out at the end instead.
    if looking_for_longest {
        let _ = sender.send(WorkerMessage::Longest {
            worker,
            words: tally.longest_words.clone(),
        });
    }

    debug!(
        "TASK[completed] worker {} found {} compound words",
        worker, tally.compound_word_count
    );
    let _ = sender.send(WorkerMessage::Finished { worker, tally });
}
