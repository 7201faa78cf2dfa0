// src/specs/federations.rs
//
// FIDE federation ranking page.
//
// Page contract (fixed, brittle, accepted):
// - the ranking lives in the FIFTH <table> on the page;
// - its SECOND row is the header, data starts at the third;
// - columns that are empty in every data row are dropped;
// - exactly six columns must remain: Rank, Federation, Average, GMs,
//   IMs, Total Titled.
//
// Numeric cells coerce leniently (missing, never an error). A missing
// table or a column-count mismatch is a hard error — no retry.

use std::error::Error;

use crate::core::{html, net};
use crate::core::sanitize::{normalize_ws, parse_f64_lenient, parse_u32_lenient};
use crate::data::TitleRecord;
use crate::params::FIDE_RANKING_URL;

pub const TABLE_INDEX: usize = 4;
pub const HEADER_ROW: usize = 1;
pub const COLUMNS: [&str; 6] = ["Rank", "Federation", "Average", "GMs", "IMs", "Total Titled"];

pub fn fetch() -> Result<Vec<TitleRecord>, Box<dyn Error>> {
    let doc = net::http_get(FIDE_RANKING_URL)?;
    parse_document(&doc)
}

pub fn parse_document(doc: &str) -> Result<Vec<TitleRecord>, Box<dyn Error>> {
    let table = html::nth_table(doc, TABLE_INDEX)
        .ok_or("federation ranking table not found (page has fewer than five tables)")?;

    let rows: Vec<Vec<String>> = html::table_rows(table)
        .into_iter()
        .map(html::row_cells)
        .collect();
    if rows.len() <= HEADER_ROW + 1 {
        return Err("federation ranking table has no data rows".into());
    }
    let data = &rows[HEADER_ROW + 1..];

    // Drop columns with no content in any data row, then require the
    // six-column shape the renames assume.
    let width = data.iter().map(|r| r.len()).max().unwrap_or(0);
    let keep: Vec<usize> = (0..width)
        .filter(|&i| data.iter().any(|r| r.get(i).is_some_and(|c| !c.is_empty())))
        .collect();
    if keep.len() != COLUMNS.len() {
        return Err(format!(
            "federation ranking table: expected {} columns, found {}",
            COLUMNS.len(),
            keep.len()
        )
        .into());
    }

    let mut out = Vec::with_capacity(data.len());
    for r in data {
        let cell = |k: usize| r.get(keep[k]).map(String::as_str).unwrap_or("");
        let federation = normalize_ws(cell(1));
        if federation.is_empty() { continue; }
        out.push(TitleRecord {
            federation,
            rank: parse_u32_lenient(cell(0)),
            average_rating: parse_f64_lenient(cell(2)),
            gm_count: parse_u32_lenient(cell(3)),
            im_count: parse_u32_lenient(cell(4)),
            total_titled: parse_u32_lenient(cell(5)),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking_doc(body_rows: &str) -> String {
        let filler = "<table><tr><td>menu</td></tr></table>".repeat(4);
        format!(
            "<html>{filler}<table>\
             <tr><td colspan=6>Top federations</td></tr>\
             <tr><td>Rank</td><td>Federation</td><td>Average</td>\
                 <td>GMs</td><td>IMs</td><td>Total Titled</td></tr>\
             {body_rows}</table></html>"
        )
    }

    #[test]
    fn parses_fifth_table_second_row_header() {
        let doc = ranking_doc(
            "<tr><td>1</td><td><a href=x>Russia</a></td><td>2602</td>\
                 <td>246</td><td>513</td><td>2845</td></tr>\
             <tr><td>2</td><td>Germany</td><td>2549</td>\
                 <td>96</td><td>250</td><td>1693</td></tr>",
        );
        let recs = parse_document(&doc).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].federation, "Russia");
        assert_eq!(recs[0].rank, Some(1));
        assert_eq!(recs[0].gm_count, Some(246));
        assert_eq!(recs[1].total_titled, Some(1693));
    }

    #[test]
    fn unparseable_numbers_become_missing() {
        let doc = ranking_doc(
            "<tr><td>1</td><td>Andorra</td><td>—</td>\
                 <td>n/a</td><td>3</td><td>12</td></tr>",
        );
        let recs = parse_document(&doc).unwrap();
        assert_eq!(recs[0].average_rating, None);
        assert_eq!(recs[0].gm_count, None);
        assert_eq!(recs[0].im_count, Some(3));
    }

    #[test]
    fn empty_columns_are_dropped_before_renaming() {
        // A decorative empty column between Rank and Federation.
        let filler = "<table><tr><td>x</td></tr></table>".repeat(4);
        let doc = format!(
            "{filler}<table>\
             <tr><td colspan=7>Top federations</td></tr>\
             <tr><td>Rank</td><td></td><td>Federation</td><td>Average</td>\
                 <td>GMs</td><td>IMs</td><td>Total Titled</td></tr>\
             <tr><td>1</td><td></td><td>Spain</td><td>2490</td>\
                 <td>55</td><td>140</td><td>900</td></tr></table>"
        );
        let recs = parse_document(&doc).unwrap();
        assert_eq!(recs[0].federation, "Spain");
        assert_eq!(recs[0].total_titled, Some(900));
    }

    #[test]
    fn missing_table_is_a_hard_error() {
        let doc = "<table><tr><td>only one</td></tr></table>";
        assert!(parse_document(doc).is_err());
    }
}
