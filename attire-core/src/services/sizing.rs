// File: attire-core/src/services/sizing.rs
//
// International size-conversion charts and the recommendation lookup.
// Charts are static rule tables keyed by (region, gender); every range is
// validated at construction so a malformed chart can never reach a lookup.
//
// Only the chest measurement drives the recommendation. The converter form
// still collects waist/hips/shoulder/inseam (see `Measurements`), and the
// lookup deliberately ignores them — a documented limitation carried over
// from the sizing data, not a bug.

use tracing::debug;

use attire_common::Error;
use attire_common::models::{Gender, MeasurementRange, Region, SizeBand};

/// Outcome of a successful lookup: either the first band whose chest range
/// contains the measurement, or an explicit "no band matched".
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation<'a> {
    Band(&'a SizeBand),
    Undetermined,
}

/// Raw chart row as authored: labels plus `"low-high"` range strings.
type RawBand = (&'static str, &'static str, &'static str, &'static str, &'static str);

const SOUTH_ASIA_WOMEN: &[RawBand] = &[
    ("XS/0-2", "S", "32-33", "24-25", "35-36"),
    ("S/4-6", "M", "34-35", "26-27", "37-38"),
    ("M/8-10", "L", "36-37", "28-29", "39-40"),
    ("L/12-14", "XL", "38-40", "30-32", "41-43"),
    ("XL/16-18", "XXL", "41-43", "33-35", "44-46"),
];

const SOUTH_ASIA_MEN: &[RawBand] = &[
    ("XS/34", "36", "34-36", "28-30", "17-17.5"),
    ("S/36", "38", "36-38", "30-32", "17.5-18"),
    ("M/38-40", "40", "38-40", "32-34", "18-18.5"),
    ("L/42-44", "42", "42-44", "36-38", "18.5-19"),
    ("XL/46", "44", "46-48", "40-42", "19-19.5"),
];

const WEST_AFRICA_WOMEN: &[RawBand] = &[
    ("XS/0-2", "8/30", "32-33", "24-25", "35-36"),
    ("S/4-6", "10/32", "34-35", "26-27", "37-38"),
    ("M/8-10", "12/34", "36-37", "28-29", "39-40"),
    ("L/12-14", "14/36", "38-40", "30-32", "41-43"),
    ("XL/16-18", "16/38", "41-43", "33-35", "44-46"),
];

const WEST_AFRICA_MEN: &[RawBand] = &[
    ("XS/34", "S/Small", "34-36", "28-30", "17-17.5"),
    ("S/36", "M/Medium", "36-38", "30-32", "17.5-18"),
    ("M/38-40", "L/Large", "38-40", "32-34", "18-18.5"),
    ("L/42-44", "XL/X-Large", "42-44", "36-38", "18.5-19"),
    ("XL/46", "XXL/XX-Large", "46-48", "40-42", "19-19.5"),
];

const EAST_ASIA_WOMEN: &[RawBand] = &[
    ("XS/0-2", "S/36", "32-33", "24-25", "35-36"),
    ("S/4-6", "M/38", "34-35", "26-27", "37-38"),
    ("M/8-10", "L/40", "36-37", "28-29", "39-40"),
    ("L/12-14", "XL/42", "38-40", "30-32", "41-43"),
    ("XL/16-18", "XXL/44", "41-43", "33-35", "44-46"),
];

const EAST_ASIA_MEN: &[RawBand] = &[
    ("XS/34", "165/84A", "34-36", "28-30", "17-17.5"),
    ("S/36", "170/88A", "36-38", "30-32", "17.5-18"),
    ("M/38-40", "175/92A", "38-40", "32-34", "18-18.5"),
    ("L/42-44", "180/96A", "42-44", "36-38", "18.5-19"),
    ("XL/46", "185/100A", "46-48", "40-42", "19-19.5"),
];

/// All charts the size guide knows about, in listed order.
pub struct SizeChartSet {
    charts: Vec<((Region, Gender), Vec<SizeBand>)>,
}

impl SizeChartSet {
    /// The built-in conversion tables.
    pub fn builtin() -> Result<Self, Error> {
        let mut set = Self { charts: Vec::new() };
        set.insert(Region::SouthAsia, Gender::Women, SOUTH_ASIA_WOMEN)?;
        set.insert(Region::SouthAsia, Gender::Men, SOUTH_ASIA_MEN)?;
        set.insert(Region::WestAfrica, Gender::Women, WEST_AFRICA_WOMEN)?;
        set.insert(Region::WestAfrica, Gender::Men, WEST_AFRICA_MEN)?;
        set.insert(Region::EastAsia, Gender::Women, EAST_ASIA_WOMEN)?;
        set.insert(Region::EastAsia, Gender::Men, EAST_ASIA_MEN)?;
        Ok(set)
    }

    /// Parses and validates one chart, then adds it under (region, gender).
    pub fn insert(
        &mut self,
        region: Region,
        gender: Gender,
        rows: &[RawBand],
    ) -> Result<(), Error> {
        let bands = parse_chart(rows)?;
        validate_chart(region, gender, &bands)?;
        self.charts.push(((region, gender), bands));
        Ok(())
    }

    /// Regions that have at least one chart, in listed order.
    pub fn regions(&self) -> Vec<Region> {
        let mut out = Vec::new();
        for ((region, _), _) in &self.charts {
            if !out.contains(region) {
                out.push(*region);
            }
        }
        out
    }

    pub fn chart(&self, region: Region, gender: Gender) -> Option<&[SizeBand]> {
        self.charts
            .iter()
            .find(|((r, g), _)| *r == region && *g == gender)
            .map(|(_, bands)| bands.as_slice())
    }

    /// Scans the chart's bands in listed order and returns the first whose
    /// chest range contains the measurement (range bounds inclusive).
    ///
    /// Errors: `Parse` when the chest input is not a number, `NotFound` when
    /// no chart exists for the (region, gender) pair.
    pub fn recommend(
        &self,
        region: Region,
        gender: Gender,
        chest_input: &str,
    ) -> Result<Recommendation<'_>, Error> {
        let chest: f64 = chest_input
            .trim()
            .parse()
            .map_err(|_| Error::Parse(format!("Unreadable chest measurement: '{}'", chest_input)))?;

        let chart = self.chart(region, gender).ok_or_else(|| {
            Error::NotFound(format!("No size chart for {} ({})", region, gender))
        })?;

        for band in chart {
            if band.chest.contains(chest) {
                debug!("recommend: chest={} -> {} / {}", chest, band.us, band.native);
                return Ok(Recommendation::Band(band));
            }
        }
        debug!("recommend: chest={} matched no band", chest);
        Ok(Recommendation::Undetermined)
    }
}

fn parse_chart(rows: &[RawBand]) -> Result<Vec<SizeBand>, Error> {
    rows.iter()
        .map(|(us, native, chest, waist, hips_or_shoulder)| {
            Ok(SizeBand {
                us: us.to_string(),
                native: native.to_string(),
                chest: MeasurementRange::parse(chest)?,
                waist: MeasurementRange::parse(waist)?,
                hips_or_shoulder: MeasurementRange::parse(hips_or_shoulder)?,
            })
        })
        .collect()
}

/// A chart is usable only if no chest range overlaps another beyond a shared
/// endpoint; otherwise the first-match scan would silently shadow later
/// bands.
fn validate_chart(region: Region, gender: Gender, bands: &[SizeBand]) -> Result<(), Error> {
    for (i, a) in bands.iter().enumerate() {
        for b in &bands[i + 1..] {
            if a.chest.overlaps(&b.chest) {
                return Err(Error::InvalidInput(format!(
                    "Size chart {} ({}): chest ranges {} and {} overlap",
                    region, gender, a.chest, b.chest
                )));
            }
        }
    }
    Ok(())
}
