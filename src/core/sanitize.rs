// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace('\u{a0}', " ")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove any `[ ... ]` bracket tags (e.g. footnote markers `[5]`, `[b]`).
/// Greedy within each bracket pair, no nesting.
pub fn strip_brackets(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_bracket = false;
    for ch in s.chars() {
        match ch {
            '[' => in_bracket = true,
            ']' => in_bracket = false,
            _ if !in_bracket => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}

/* ---------------- Lenient numeric coercion ----------------
   Scraped cells carry thousands separators, footnotes and stray
   markup; a cell that won't parse becomes "missing", never an error. */

fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn parse_u32_lenient(s: &str) -> Option<u32> {
    let t = digits_only(&strip_brackets(s));
    if t.is_empty() { None } else { t.parse().ok() }
}

pub fn parse_u64_lenient(s: &str) -> Option<u64> {
    let t = digits_only(&strip_brackets(s));
    if t.is_empty() { None } else { t.parse().ok() }
}

pub fn parse_f64_lenient(s: &str) -> Option<f64> {
    let t: String = strip_brackets(s)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if t.is_empty() { return None; }
    t.parse().ok()
}
