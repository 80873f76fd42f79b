//! CLI subcommand implementations.

use wegli_api::{Client, Mapping, ReqwestTransport};

pub mod charges;
pub mod districts;
pub mod notices;

/// The client every subcommand talks to.
pub type WegliClient = Client<ReqwestTransport>;

/// Keeps the mappings whose string `field` contains `needle`, ignoring case.
pub(crate) fn filter_by_text(maps: Vec<Mapping>, field: &str, needle: &str) -> Vec<Mapping> {
    let needle = needle.to_lowercase();
    maps.into_iter()
        .filter(|map| {
            map.get(field)
                .and_then(|v| v.as_str())
                .is_some_and(|s| s.to_lowercase().contains(&needle))
        })
        .collect()
}
