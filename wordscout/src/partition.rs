/// This module splits the word index into work units for the worker pool.
///
/// Two interchangeable strategies are supported, chosen at configuration
/// time through a plain enum rather than the reflective factory a Java
/// codebase might reach for:
///
/// - [`PartitionStrategy::Range`] gives each worker one contiguous slice of
///   the sorted list. Simple, but the longest words all land in the first
///   worker's slice.
/// - [`PartitionStrategy::Step`] gives worker `i` positions `i, i+n, i+2n, …`
///   for `n` workers. Because the list is sorted longest-first, every worker
///   sees a representative spread of lengths and reaches the true longest
///   word sooner in expectation. This is the default.
use serde::Deserialize;
use std::str::FromStr;
use tracing::debug;

use crate::errors::{FinderError, FinderResult};

/// Policy for dividing the word list among workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionStrategy {
    /// Contiguous, near-equal sub-ranges.
    Range,
    /// Interleaved residue classes: start `i`, stride `numberOfTasks`.
    #[default]
    Step,
}

impl FromStr for PartitionStrategy {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "range" => Ok(Self::Range),
            "step" => Ok(Self::Step),
            other => Err(FinderError::config_error(format!(
                "unknown partition strategy '{other}', expected 'range' or 'step'"
            ))),
        }
    }
}

/// One worker's assigned subset of word-list positions.
///
/// Range units have `stride == 1`; step units run to the end of the list
/// with `stride == numberOfTasks`. A unit is consumed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkUnit {
    pub start: usize,
    pub end: usize,
    pub stride: usize,
}

impl WorkUnit {
    /// The positions this unit covers, in scan order.
    pub fn positions(&self) -> impl Iterator<Item = usize> {
        (self.start..self.end).step_by(self.stride)
    }

    /// Number of positions in the unit.
    pub fn len(&self) -> usize {
        if self.start >= self.end {
            0
        } else {
            (self.end - self.start).div_ceil(self.stride)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Plans `number_of_tasks` work units covering `number_of_words` positions,
/// each exactly once.
///
/// Fails with [`FinderError::InvalidTaskCount`] when `number_of_tasks < 1`
/// and [`FinderError::InvalidWordIndex`] when there are no words to split.
/// More tasks than words is fine: the surplus units come back empty and
/// their workers complete trivially.
pub fn plan_units(
    number_of_words: usize,
    number_of_tasks: usize,
    strategy: PartitionStrategy,
) -> FinderResult<Vec<WorkUnit>> {
    if number_of_tasks < 1 {
        return Err(FinderError::invalid_task_count(number_of_tasks));
    }
    if number_of_words == 0 {
        return Err(FinderError::InvalidWordIndex);
    }

    let units: Vec<WorkUnit> = match strategy {
        PartitionStrategy::Range => {
            // Divide as equally as possible; the first `remainder` units each
            // take one extra word.
            let per_task = number_of_words / number_of_tasks;
            let remainder = number_of_words % number_of_tasks;
            debug!(
                "Each task will process at least {} words, there is a remainder of {}",
                per_task, remainder
            );

            let mut units = Vec::with_capacity(number_of_tasks);
            let mut start = 0;
            for i in 0..number_of_tasks {
                let end = start + per_task + usize::from(i < remainder);
                units.push(WorkUnit {
                    start,
                    end,
                    stride: 1,
                });
                start = end;
            }
            units
        }
        PartitionStrategy::Step => (0..number_of_tasks)
            .map(|i| WorkUnit {
                start: i,
                end: number_of_words,
                stride: number_of_tasks,
            })
            .collect(),
    };

    debug!(
        "Planned {} work units over {} words using {:?} partitioning",
        units.len(),
        number_of_words,
        strategy
    );
    Ok(units)
}
