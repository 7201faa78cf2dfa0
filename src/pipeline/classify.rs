// src/pipeline/classify.rs
//
// Seven ordered density bands over [0, ∞), half-open with inclusive
// lower edge: [0,0.25) [0.25,1) [1,2) [2,5) [5,15) [15,30) [30,∞).
// A value exactly on a boundary lands in the higher band. Each band
// carries one fixed fill color; shapes with no band (no merged record,
// or a NaN metric) fall back to the lowest-band hue, and Greenland is
// always painted the "no data" silver.

use crate::data::MergedRecord;

pub const FALLBACK_COLOR: &str = "#FF5B00";
pub const NO_DATA_COLOR: &str = "#C0C0C0";
pub const NO_DATA_LABEL: &str = "no data";
pub const NO_DATA_NAME: &str = "Greenland";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Band {
    Under025,
    Under1,
    Under2,
    Under5,
    Under15,
    Under30,
    Over30,
}

impl Band {
    /// Legend order: densest band first, matching the figure.
    pub const LEGEND: [Band; 7] = [
        Band::Over30,
        Band::Under30,
        Band::Under15,
        Band::Under5,
        Band::Under2,
        Band::Under1,
        Band::Under025,
    ];

    /// Closed-on-left binning; +inf classifies as `Over30`, NaN has no
    /// band.
    pub fn classify(v: f64) -> Option<Band> {
        if v.is_nan() {
            return None;
        }
        Some(if v >= 30.0 {
            Band::Over30
        } else if v >= 15.0 {
            Band::Under30
        } else if v >= 5.0 {
            Band::Under15
        } else if v >= 2.0 {
            Band::Under5
        } else if v >= 1.0 {
            Band::Under2
        } else if v >= 0.25 {
            Band::Under1
        } else {
            Band::Under025
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::Under025 => "0-0.25",
            Band::Under1 => "0.25-1",
            Band::Under2 => "1-2",
            Band::Under5 => "2-5",
            Band::Under15 => "5-15",
            Band::Under30 => "15-30",
            Band::Over30 => "30+",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Band::Under025 => "#FF5B00",
            Band::Under1 => "#FF852F",
            Band::Under2 => "#FFD215",
            Band::Under5 => "#D3FF00",
            Band::Under15 => "#007F00",
            Band::Under30 => "#003C00",
            Band::Over30 => "#001A00",
        }
    }
}

/// Assign a band to every merged record in place.
pub fn apply(records: &mut [MergedRecord]) {
    for r in records.iter_mut() {
        r.band = Band::classify(r.titled_per_million);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_land_in_the_higher_band() {
        for (b, expect) in [
            (0.25, Band::Under1),
            (1.0, Band::Under2),
            (2.0, Band::Under5),
            (5.0, Band::Under15),
            (15.0, Band::Under30),
            (30.0, Band::Over30),
        ] {
            assert_eq!(Band::classify(b), Some(expect), "boundary {b}");
        }
    }

    #[test]
    fn zero_is_included_in_the_lowest_band() {
        assert_eq!(Band::classify(0.0), Some(Band::Under025));
    }

    #[test]
    fn infinite_metric_is_the_top_band_and_nan_has_none() {
        assert_eq!(Band::classify(f64::INFINITY), Some(Band::Over30));
        assert_eq!(Band::classify(f64::NAN), None);
    }

    #[test]
    fn interior_values() {
        assert_eq!(Band::classify(0.588), Some(Band::Under1));
        assert_eq!(Band::classify(1.9), Some(Band::Under2));
        assert_eq!(Band::classify(29.999), Some(Band::Under30));
        assert_eq!(Band::classify(1234.5), Some(Band::Over30));
    }
}
