pub mod config;
pub mod errors;
pub mod index;
pub mod partition;
pub mod results;
pub mod search;

pub use config::{CliOverrides, FinderConfig};
pub use errors::{FinderError, FinderResult};
pub use index::WordIndex;
pub use partition::{plan_units, PartitionStrategy, WorkUnit};
pub use results::Tally;
pub use search::find_compound_words;
