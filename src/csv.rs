// src/csv.rs
use std::io::{self, Write};

use crate::data::MergedRecord;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn rows_to_string(rows: &[Vec<String>], headers: &Option<Vec<String>>, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Merged-table shape ---------------- */

pub fn merged_headers() -> Vec<String> {
    ["Country", "GMs", "IMs", "Total Titled", "Population", "Per Million", "Band"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn merged_rows(records: &[MergedRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.gm_count.to_string(),
                r.im_count.to_string(),
                r.total_titled.to_string(),
                r.population.to_string(),
                format!("{:.3}", r.titled_per_million),
                r.band.map(|b| s!(b.label())).unwrap_or_default(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::classify::Band;

    #[test]
    fn quotes_only_when_needed() {
        let rows = vec![vec![s!("Bosnia & Herzegovina"), s!("a,b"), s!("plain")]];
        let txt = rows_to_string(&rows, &None, ',');
        assert_eq!(txt, "Bosnia & Herzegovina,\"a,b\",plain\n");
    }

    #[test]
    fn merged_rows_carry_metric_and_band_label() {
        let rec = MergedRecord {
            name: s!("France"),
            gm_count: 50,
            im_count: 100,
            total_titled: 40,
            population: 68_000_000,
            titled_per_million: 40.0 / 68.0,
            band: Some(Band::Under1),
        };
        let rows = merged_rows(&[rec]);
        assert_eq!(rows[0][0], "France");
        assert_eq!(rows[0][5], "0.588");
        assert_eq!(rows[0][6], "0.25-1");
    }
}
