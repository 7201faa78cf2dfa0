// src/core/html.rs
//
// Hand-rolled, case-insensitive HTML slicing. No DOM, no regex:
// scan for tag blocks and strip markup from what's inside. ASCII
// lowercasing keeps byte offsets stable against the original text.

use super::sanitize::normalize_entities;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Inner content of the `index`-th `<table>` on the page (0-based,
/// document order). Both source parsers select their table by
/// position; if the page layout shifts, parsing fails loudly.
pub fn nth_table(doc: &str, index: usize) -> Option<&str> {
    let lc = to_lower(doc);
    let mut pos = 0usize;
    let mut seen = 0usize;
    loop {
        let start = lc[pos..].find("<table")? + pos;
        if seen == index {
            let open_end = doc[start..].find('>')? + start + 1;
            let close = lc[open_end..].find("</table")? + open_end;
            return Some(&doc[open_end..close]);
        }
        seen += 1;
        pos = start + "<table".len();
    }
}

/// All `<tr>…</tr>` blocks of a table, in order.
pub fn table_rows(table_inner: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table_inner, "<tr", "</tr>", pos) {
        out.push(&table_inner[tr_s..tr_e]);
        pos = tr_e;
    }
    out
}

/// Cell texts of one row: `<td>` and `<th>` in document order,
/// entity-decoded, tag-stripped, whitespace-collapsed.
pub fn row_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    loop {
        let td = next_tag_block_ci(tr, "<td", "</td>", pos);
        let th = next_tag_block_ci(tr, "<th", "</th>", pos);
        let (s, e) = match (td, th) {
            (Some(a), Some(b)) => {
                if a.0 < b.0 { a } else { b }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => break,
        };
        let block = &tr[s..e];
        cells.push(strip_tags(normalize_entities(&inner_after_open_tag(block))));
        pos = e;
    }
    cells
}
