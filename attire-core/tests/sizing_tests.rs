// tests/sizing_tests.rs

use attire_common::Error;
use attire_common::models::{Gender, MeasurementRange, Region};
use attire_core::services::sizing::{Recommendation, SizeChartSet};

fn charts() -> SizeChartSet {
    SizeChartSet::builtin().expect("built-in charts must validate")
}

#[test]
fn builtin_charts_cover_three_regions_both_genders() {
    let charts = charts();
    assert_eq!(
        charts.regions(),
        vec![Region::SouthAsia, Region::WestAfrica, Region::EastAsia]
    );
    for region in charts.regions() {
        assert!(charts.chart(region, Gender::Women).is_some());
        assert!(charts.chart(region, Gender::Men).is_some());
        assert_eq!(charts.chart(region, Gender::Women).unwrap().len(), 5);
    }
    assert!(charts.chart(Region::Europe, Gender::Women).is_none());
}

#[test]
fn chest_36_south_asia_women_lands_in_the_m_band() {
    let charts = charts();
    // 36 is past the S/4-6 band (34-35) and on the inclusive low edge of
    // the next one
    match charts.recommend(Region::SouthAsia, Gender::Women, "36").unwrap() {
        Recommendation::Band(band) => {
            assert_eq!(band.us, "M/8-10");
            assert_eq!(band.native, "L");
        }
        Recommendation::Undetermined => panic!("chest=36 must match a band"),
    }
}

#[test]
fn chest_35_stays_in_the_s_band() {
    let charts = charts();
    match charts.recommend(Region::SouthAsia, Gender::Women, "35").unwrap() {
        Recommendation::Band(band) => {
            assert_eq!(band.us, "S/4-6");
            assert_eq!(band.native, "M");
        }
        Recommendation::Undetermined => panic!("chest=35 must match a band"),
    }
}

#[test]
fn shared_mens_boundary_goes_to_the_earlier_band() {
    let charts = charts();
    // men's bands touch at 36 (34-36 then 36-38); listed order wins
    match charts.recommend(Region::EastAsia, Gender::Men, "36").unwrap() {
        Recommendation::Band(band) => assert_eq!(band.us, "XS/34"),
        Recommendation::Undetermined => panic!("chest=36 must match a band"),
    }
}

#[test]
fn out_of_range_chest_is_undetermined() {
    let charts = charts();
    // between the women's L (38-40) and XL (41-43) bands
    assert_eq!(
        charts
            .recommend(Region::SouthAsia, Gender::Women, "40.5")
            .unwrap(),
        Recommendation::Undetermined
    );
    assert_eq!(
        charts.recommend(Region::WestAfrica, Gender::Men, "80").unwrap(),
        Recommendation::Undetermined
    );
}

#[test]
fn unreadable_chest_is_a_parse_error() {
    let charts = charts();
    let err = charts
        .recommend(Region::SouthAsia, Gender::Women, "about yay big")
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));

    let err = charts.recommend(Region::SouthAsia, Gender::Women, "").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn missing_chart_is_not_found() {
    let charts = charts();
    let err = charts
        .recommend(Region::Oceania, Gender::Women, "36")
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn malformed_charts_are_rejected_at_construction() {
    let mut set = SizeChartSet::builtin().unwrap();

    // range ends before it starts
    let err = set
        .insert(
            Region::Europe,
            Gender::Women,
            &[("XS", "34", "33-32", "24-25", "35-36")],
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    // interior chest overlap between bands
    let err = set
        .insert(
            Region::Europe,
            Gender::Men,
            &[
                ("S", "36", "34-37", "28-30", "17-18"),
                ("M", "38", "36-39", "30-32", "18-19"),
            ],
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    // not a range at all
    let err = set
        .insert(
            Region::Europe,
            Gender::Women,
            &[("XS", "34", "thirty", "24-25", "35-36")],
        )
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn measurement_range_edges_are_inclusive() {
    let range = MeasurementRange::parse("34-35").unwrap();
    assert!(range.contains(34.0));
    assert!(range.contains(35.0));
    assert!(!range.contains(35.5));
    assert!(!range.contains(33.9));

    // fractional bounds, as in the shoulder columns
    let range = MeasurementRange::parse("17-17.5").unwrap();
    assert!(range.contains(17.5));
    assert!(!range.contains(17.6));
}
