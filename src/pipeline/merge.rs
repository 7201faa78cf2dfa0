// src/pipeline/merge.rs
//
// Inner join of title records to population records on the reconciled
// name, plus the per-capita metric. Rows with no match on the other
// side are dropped from the output, not reported as failures; the
// dropped names come back to the caller so the runner can log them.

use std::collections::HashMap;

use crate::data::{MergedRecord, PopulationRecord, TitleRecord};

pub struct MergeResult {
    pub records: Vec<MergedRecord>,
    /// Federations with no population match (includes the four UK
    /// constituents by construction).
    pub dropped_federations: Vec<String>,
    /// Countries no federation claimed.
    pub dropped_countries: Vec<String>,
}

/// `titled_per_million = total_titled / (population / 1_000_000)`.
/// A zero population divides to +inf (classified as the top band
/// downstream); 0/0 gives NaN and stays bandless.
pub fn inner_join(titles: &[TitleRecord], pops: &[PopulationRecord]) -> MergeResult {
    let mut by_country: HashMap<&str, u64> = HashMap::new();
    for p in pops {
        by_country.entry(p.country.as_str()).or_insert(p.population);
    }

    let mut records = Vec::new();
    let mut dropped_federations = Vec::new();
    let mut matched: HashMap<&str, bool> = HashMap::new();

    for t in titles {
        match by_country.get(t.federation.as_str()) {
            Some(&population) => {
                matched.insert(t.federation.as_str(), true);
                let total_titled = t.total_titled.unwrap_or(0);
                let titled_per_million =
                    total_titled as f64 / (population as f64 / 1_000_000.0);
                records.push(MergedRecord {
                    name: t.federation.clone(),
                    gm_count: t.gm_count.unwrap_or(0),
                    im_count: t.im_count.unwrap_or(0),
                    total_titled,
                    population,
                    titled_per_million,
                    band: None,
                });
            }
            None => dropped_federations.push(t.federation.clone()),
        }
    }

    let dropped_countries = pops
        .iter()
        .filter(|p| !matched.contains_key(p.country.as_str()))
        .map(|p| p.country.clone())
        .collect();

    MergeResult { records, dropped_federations, dropped_countries }
}
