// src/data.rs
//
// Record types carried through the pipeline. Each stage consumes one
// set of records and builds the next; nothing here is shared or cached.

use crate::pipeline::classify::Band;

/// One row of the FIDE federation ranking table.
/// Numeric cells are lenient: unparseable → None, never an error.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleRecord {
    pub federation: String,
    pub rank: Option<u32>,          // None for the injected UK aggregate
    pub average_rating: Option<f64>,
    pub gm_count: Option<u32>,
    pub im_count: Option<u32>,
    pub total_titled: Option<u32>,
}

impl TitleRecord {
    pub fn named(federation: &str) -> Self {
        Self {
            federation: s!(federation),
            rank: None,
            average_rating: None,
            gm_count: None,
            im_count: None,
            total_titled: None,
        }
    }
}

/// One row of the population list.
#[derive(Clone, Debug, PartialEq)]
pub struct PopulationRecord {
    pub country: String,
    pub population: u64,
}

/// Inner-join result: one per name present on both sides.
#[derive(Clone, Debug, PartialEq)]
pub struct MergedRecord {
    pub name: String,
    pub gm_count: u32,
    pub im_count: u32,
    pub total_titled: u32,
    pub population: u64,
    pub titled_per_million: f64,    // +inf when population == 0
    pub band: Option<Band>,         // None only for a non-finite NaN metric
}
