// src/pipeline/mod.rs
//
// Pure local transforms between the two scraped tables and the figure:
// UK aggregation, name reconciliation, the inner join with its
// per-million metric, and band classification. No IO here.

pub mod aggregate;
pub mod names;
pub mod merge;
pub mod classify;
