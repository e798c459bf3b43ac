pub mod types;
pub mod years;

pub use types::{Monarch, RawRecord};
pub use years::{current_year, parse_years};

use crate::error::KingsResult;
use tracing::info;

/// Decode the JSON array and normalize every record. The first bad record fails the whole batch.
pub fn parse_monarchs(body: &str, current_year: i32) -> KingsResult<Vec<Monarch>> {
    let raw: Vec<RawRecord> = serde_json::from_str(body)?;
    let monarchs = raw
        .into_iter()
        .map(|r| Monarch::from_raw(r, current_year))
        .collect::<KingsResult<Vec<_>>>()?;
    info!(count = monarchs.len(), "parsed monarchs");
    Ok(monarchs)
}
