/// This module defines custom error types for wordscout, demonstrating Rust's error handling
/// compared to Java's exception system.
///
/// # Rust vs Java Error Handling
///
/// Java signals failures with thrown exceptions:
/// ```java
/// try {
///     List<Callable<Result>> tasks = mapper.mapTasks(words, numberOfTasks);
/// } catch (IllegalArgumentException ex) {
///     // Handle a bad task count or missing word list
/// }
/// ```
///
/// Rust uses Result types with custom errors:
/// ```rust,ignore
/// match plan_units(index.len(), number_of_tasks, strategy) {
///     Ok(units) => // Dispatch the units,
///     Err(FinderError::InvalidTaskCount(n)) => // Handle a bad task count,
///     Err(e) => // Handle other errors
/// }
/// ```
///
/// Unlike Java's unchecked exceptions, every fallible call here is visible in
/// the signature and must be handled or propagated with `?`.
use std::time::Duration;
use thiserror::Error;

/// Result type for compound-word search operations
pub type FinderResult<T> = Result<T, FinderError>;

/// Errors that can occur while indexing, partitioning, or searching a word list
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Number of tasks must be greater than 0 (>0), got {0}")]
    InvalidTaskCount(usize),
    #[error("Cannot partition an empty word index")]
    InvalidWordIndex,
    #[error("Word list contained no usable words after trimming")]
    EmptyWordList,
    #[error("Word index {index} is out of range for a list of {len} words")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{pending} worker(s) did not finish within {timeout:?}; their counts are excluded")]
    WorkerTimeout { pending: usize, timeout: Duration },
    #[error("Worker {worker} failed before reporting a result; its counts are excluded")]
    WorkerPanic { worker: usize },
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FinderError {
    pub fn invalid_task_count(got: usize) -> Self {
        Self::InvalidTaskCount(got)
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
