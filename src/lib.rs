pub mod error;
pub mod fetch;
pub mod monarch;
pub mod run;
pub mod stats;

pub use error::{KingsError, KingsResult};
pub use monarch::{parse_monarchs, Monarch, RawRecord};
pub use run::{run, RunOutcome};
pub use stats::Summary;
