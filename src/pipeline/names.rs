// src/pipeline/names.rs
//
// Hand-maintained spelling corrections. Three datasets must agree on
// one canonical name per country: the FIDE federation list, the
// population list, and the world-boundaries names ("Czechia",
// "Bosnia & Herzegovina", "Dem. Rep. Congo", ...). Applied identically
// to both scraped sides; unmapped names pass through. No key is also a
// value, so applying the table twice is a no-op.

use crate::data::{PopulationRecord, TitleRecord};

pub const CORRECTIONS: [(&str, &str); 21] = [
    ("United States", "United States of America"),
    ("Dominican Republic", "Dominican Rep."),
    ("Hong Kong (China)", "Hong Kong, China"),
    ("Trinidad and Tobago", "Trinidad & Tobago"),
    ("Guernsey (UK)", "Guernsey"),
    ("Aruba (Netherlands)", "Aruba"),
    ("Brunei", "Brunei Darussalam"),
    ("Guam (US)", "Guam"),
    ("Chinese Taipei", "Taiwan"),
    ("East Timor", "Timor-Leste"),
    ("Puerto Rico (US)", "Puerto Rico"),
    ("Bosnia and Herzegovina", "Bosnia & Herzegovina"),
    ("Jersey (UK)", "Jersey"),
    ("Bermuda (UK)", "Bermuda"),
    ("U.S. Virgin Islands (US)", "US Virgin Islands"),
    ("Faroe Islands (Denmark)", "Faroe Islands"),
    ("Macau (China)", "Macau"),
    ("Democratic Republic of the Congo", "Dem. Rep. Congo"),
    ("South Sudan", "S. Sudan"),
    ("Ivory Coast", "Côte d'Ivoire"),
    ("Czech Republic", "Czechia"),
];

/// Canonical spelling for a name; unmapped names pass through.
pub fn canonical(name: &str) -> &str {
    CORRECTIONS
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

pub fn reconcile_titles(titles: &mut [TitleRecord]) {
    for r in titles.iter_mut() {
        let fixed = canonical(&r.federation);
        if fixed != r.federation {
            r.federation = s!(fixed);
        }
    }
}

pub fn reconcile_population(pops: &mut [PopulationRecord]) {
    for r in pops.iter_mut() {
        let fixed = canonical(&r.country);
        if fixed != r.country {
            r.country = s!(fixed);
        }
    }
}
