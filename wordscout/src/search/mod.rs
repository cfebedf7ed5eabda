/// This module implements the concurrent compound-word search, demonstrating
/// Rust's thread and channel primitives compared to Java's executor
/// framework.
///
/// # Java vs Rust Concurrency
///
/// In Java this shape of search is typically an `ExecutorService` with
/// callables, listener callbacks fired from worker threads, and a
/// `synchronized` block guarding the shared longest-word list:
/// ```java
/// ExecutorService executor = Executors.newFixedThreadPool(numberOfThreads);
/// List<Future<Result>> results = executor.invokeAll(tasks, 1, TimeUnit.HOURS);
/// ```
///
/// Here the listener pattern becomes explicit message passing: each worker
/// owns its data exclusively, sends its advertisement and final tally over a
/// channel, and the coordinator is the only thread that ever touches the
/// merged result. The compiler enforces what `synchronized` only promises:
/// ```rust,ignore
/// let (sender, receiver) = crossbeam_channel::unbounded();
/// // workers: sender.send(WorkerMessage::Longest { .. })
/// // coordinator: receiver.recv_deadline(deadline)
/// ```
///
/// The countdown of workers still running is a local counter in the receive
/// loop rather than a volatile field, and "all workers reported" falls out
/// of the channel draining.
pub mod engine;
pub mod matcher;
pub(crate) mod worker;

pub use engine::find_compound_words;
pub use matcher::is_compound;
