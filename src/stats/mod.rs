// src/stats/mod.rs

use crate::error::{KingsError, KingsResult};
use crate::monarch::Monarch;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

/// The four figures printed at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub distinct_monarchs: usize,
    pub longest_ruling_monarch: String,
    pub longest_ruling_house: String,
    pub most_common_first_name: String,
}

impl Summary {
    pub fn compute(monarchs: &[Monarch]) -> KingsResult<Self> {
        let distinct_monarchs = distinct_monarchs(monarchs);
        let (monarch, reign) = longest_ruling_monarch(monarchs).ok_or(KingsError::EmptyDataset)?;
        let (house, house_total) =
            longest_ruling_house(monarchs).ok_or(KingsError::EmptyDataset)?;
        let (first_name, count) =
            most_common_first_name(monarchs).ok_or(KingsError::EmptyDataset)?;

        debug!(distinct_monarchs, "distinct names");
        debug!(name = %monarch.name, years = reign, "longest ruling monarch");
        debug!(%house, years = house_total, "longest ruling house");
        debug!(%first_name, count, "most common first name");

        Ok(Self {
            distinct_monarchs,
            longest_ruling_monarch: monarch.name.clone(),
            longest_ruling_house: house.to_string(),
            most_common_first_name: first_name.to_string(),
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of monarchs: {}", self.distinct_monarchs)?;
        writeln!(f, "Longest ruling monarch: {}", self.longest_ruling_monarch)?;
        writeln!(f, "Longest ruling house: {}", self.longest_ruling_house)?;
        write!(f, "Most common first name: {}", self.most_common_first_name)
    }
}

/// Number of distinct `name` values.
pub fn distinct_monarchs(monarchs: &[Monarch]) -> usize {
    monarchs
        .iter()
        .map(|m| m.name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Monarch with the longest reign, with its length. Ties go to the earliest record.
pub fn longest_ruling_monarch(monarchs: &[Monarch]) -> Option<(&Monarch, i64)> {
    first_max(monarchs.iter().map(|m| (m, m.reign_length())))
}

/// House with the largest summed reign length, with that sum.
pub fn longest_ruling_house(monarchs: &[Monarch]) -> Option<(&str, i64)> {
    let groups = group_in_order(monarchs, |m| m.house.as_str(), |m| m.reign_length());
    first_max(groups.into_iter())
}

/// Most frequent first name, with its count.
pub fn most_common_first_name(monarchs: &[Monarch]) -> Option<(&str, i64)> {
    let groups = group_in_order(monarchs, Monarch::first_name, |_| 1);
    first_max(groups.into_iter())
}

/// Sum `value` per key, keeping keys in order of first appearance.
fn group_in_order<'a>(
    monarchs: &'a [Monarch],
    key: impl Fn(&'a Monarch) -> &'a str,
    value: impl Fn(&Monarch) -> i64,
) -> Vec<(&'a str, i64)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, i64)> = Vec::new();
    for m in monarchs {
        let k = key(m);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k, 0));
            groups.len() - 1
        });
        groups[slot].1 += value(m);
    }
    groups
}

// `Iterator::max_by_key` keeps the last of equal elements; we want the first.
fn first_max<T>(items: impl Iterator<Item = (T, i64)>) -> Option<(T, i64)> {
    items.fold(None, |best, (item, score)| match best {
        Some((_, top)) if score <= top => best,
        _ => Some((item, score)),
    })
}
