// src/pipeline/aggregate.rs
//
// FIDE ranks England, Scotland, Wales and Northern Ireland as separate
// federations; the population side only knows the United Kingdom. Sum
// the constituents into one appended row. The four original rows stay
// in the set — only "United Kingdom" can match the population side, so
// the join resolves the duplication by key.

use crate::data::TitleRecord;

pub const UK_LABEL: &str = "United Kingdom";
pub const UK_CONSTITUENTS: [&str; 4] = ["England", "Scotland", "Wales", "Northern Ireland"];

/// Append the aggregated UK row. Missing counts sum as zero; the
/// aggregate carries no rank or average rating.
pub fn append_uk_total(titles: &mut Vec<TitleRecord>) {
    let mut gm = 0u32;
    let mut im = 0u32;
    let mut total = 0u32;
    for r in titles
        .iter()
        .filter(|r| UK_CONSTITUENTS.contains(&r.federation.as_str()))
    {
        gm += r.gm_count.unwrap_or(0);
        im += r.im_count.unwrap_or(0);
        total += r.total_titled.unwrap_or(0);
    }
    titles.push(TitleRecord {
        federation: s!(UK_LABEL),
        rank: None,
        average_rating: None,
        gm_count: Some(gm),
        im_count: Some(im),
        total_titled: Some(total),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, gm: u32, im: u32, total: u32) -> TitleRecord {
        TitleRecord {
            gm_count: Some(gm),
            im_count: Some(im),
            total_titled: Some(total),
            ..TitleRecord::named(name)
        }
    }

    #[test]
    fn uk_total_is_the_sum_of_the_four_constituents() {
        let mut titles = vec![
            rec("England", 40, 90, 500),
            rec("France", 50, 100, 700),
            rec("Scotland", 2, 8, 60),
            rec("Wales", 0, 3, 25),
            rec("Northern Ireland", 0, 1, 10),
        ];
        append_uk_total(&mut titles);
        let uk = titles.last().unwrap();
        assert_eq!(uk.federation, UK_LABEL);
        assert_eq!(uk.gm_count, Some(42));
        assert_eq!(uk.im_count, Some(102));
        assert_eq!(uk.total_titled, Some(595));
        // constituents stay in place
        assert!(titles.iter().any(|r| r.federation == "England"));
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn missing_counts_sum_as_zero() {
        let mut titles = vec![
            TitleRecord::named("England"),
            rec("Wales", 1, 2, 3),
        ];
        append_uk_total(&mut titles);
        let uk = titles.last().unwrap();
        assert_eq!(uk.gm_count, Some(1));
        assert_eq!(uk.total_titled, Some(3));
    }
}
