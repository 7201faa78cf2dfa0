// src/specs/population.rs
//
// Wikipedia "List of countries and dependencies by population".
//
// Page contract: the FIRST <table> is the population list. Its header
// may span several rows; flatten each column by joining the distinct
// header texts top-down with `_`, then locate the location and
// population columns by their exact flattened labels. Header drift on
// the source page is a hard error.
//
// Data rows: footnote brackets, commas and NBSP are stripped before
// parsing; a row whose population cell still won't parse is skipped.

use std::error::Error;

use crate::core::{html, net};
use crate::core::sanitize::{normalize_ws, parse_u64_lenient, strip_brackets};
use crate::data::PopulationRecord;
use crate::params::WIKI_POPULATION_URL;

pub const TABLE_INDEX: usize = 0;
pub const LOCATION_LABEL: &str = "Location";
pub const POPULATION_LABEL: &str = "Population";

pub fn fetch() -> Result<Vec<PopulationRecord>, Box<dyn Error>> {
    let doc = net::http_get(WIKI_POPULATION_URL)?;
    parse_document(&doc)
}

pub fn parse_document(doc: &str) -> Result<Vec<PopulationRecord>, Box<dyn Error>> {
    let table = html::nth_table(doc, TABLE_INDEX).ok_or("population table not found")?;
    let trs = html::table_rows(table);

    // Header rows = leading rows with no <td>; the first row carrying
    // a <td> starts the data.
    let mut header_rows: Vec<Vec<String>> = Vec::new();
    let mut data_start = trs.len();
    for (i, tr) in trs.iter().enumerate() {
        if html::to_lower(tr).contains("<td") {
            data_start = i;
            break;
        }
        header_rows.push(html::row_cells(tr));
    }
    if header_rows.is_empty() {
        return Err("population table has no header row".into());
    }

    let labels = flatten_header(&header_rows);
    let loc = column_index(&labels, LOCATION_LABEL)?;
    let pop = column_index(&labels, POPULATION_LABEL)?;

    let mut out = Vec::new();
    for tr in &trs[data_start..] {
        let cells = html::row_cells(tr);
        let country = normalize_ws(&strip_brackets(
            cells.get(loc).map(String::as_str).unwrap_or(""),
        ));
        if country.is_empty() { continue; }
        let Some(population) = cells.get(pop).and_then(|c| parse_u64_lenient(c)) else {
            continue; // unparseable population: skip the row, not an error
        };
        out.push(PopulationRecord { country, population });
    }
    Ok(out)
}

/// Join the distinct per-column header texts top-down with `_`
/// ("Population" over "Estimate" → "Population_Estimate"; a single-row
/// header flattens to itself).
fn flatten_header(header_rows: &[Vec<String>]) -> Vec<String> {
    let width = header_rows.iter().map(|r| r.len()).max().unwrap_or(0);
    (0..width)
        .map(|i| {
            let mut parts: Vec<&str> = Vec::new();
            for hr in header_rows {
                if let Some(t) = hr.get(i) {
                    if !t.is_empty() && parts.last() != Some(&t.as_str()) {
                        parts.push(t);
                    }
                }
            }
            parts.join("_")
        })
        .collect()
}

fn column_index(labels: &[String], wanted: &str) -> Result<usize, Box<dyn Error>> {
    labels
        .iter()
        .position(|l| l == wanted)
        .ok_or_else(|| {
            format!("population table header drift: no {wanted:?} column (saw {labels:?})").into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_header_flattens_to_itself() {
        let doc = "<table>\
            <tr><th>Location</th><th>Population</th><th>Date</th></tr>\
            <tr><td><a>China</a>[b]</td><td>1,402,112,000</td><td>2020</td></tr>\
            <tr><td>Monaco</td><td>38,300</td><td>2020</td></tr>\
            </table>";
        let recs = parse_document(doc).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].country, "China");
        assert_eq!(recs[0].population, 1_402_112_000);
        assert_eq!(recs[1].population, 38_300);
    }

    #[test]
    fn two_level_header_joins_with_underscore() {
        let rows = vec![
            vec![s!("Location"), s!("Population"), s!("Population")],
            vec![s!("Location"), s!("Estimate"), s!("Census")],
        ];
        assert_eq!(
            flatten_header(&rows),
            vec![s!("Location"), s!("Population_Estimate"), s!("Population_Census")]
        );
    }

    #[test]
    fn header_drift_is_a_hard_error() {
        let doc = "<table>\
            <tr><th>Country</th><th>Inhabitants</th></tr>\
            <tr><td>France</td><td>68,000,000</td></tr>\
            </table>";
        assert!(parse_document(doc).is_err());
    }

    #[test]
    fn unparseable_population_rows_are_skipped() {
        let doc = "<table>\
            <tr><th>Location</th><th>Population</th></tr>\
            <tr><td>Atlantis</td><td>unknown</td></tr>\
            <tr><td>France</td><td>68,000,000</td></tr>\
            </table>";
        let recs = parse_document(doc).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].country, "France");
    }
}
