//! Full ranked catalogs for known inputs.
//!
//! Each row pins family, ratio, projected height, whole-pixel difference and
//! the percent string. Heights are compared to 1e-9; everything else exactly.

use aspratio::{CatalogConfig, RatioRecord, compute_catalog};

/// (type, ratio_x, ratio_y, height, difference_y, difference_y_percent)
type Row = (&'static str, f64, f64, f64, f64, &'static str);

const SIXTEEN_NINE_AT_1080: &[Row] = &[
    ("original", 16.0, 9.0, 607.5, 0.0, "0%"),
    ("whole", 16.0, 9.0, 607.5, 0.0, "0%"),
    ("decimal", 1.778, 1.0, 607.4240719910011, 0.0, "0%"),
    ("nearby", 16.0, 9.0, 607.5, 0.0, "0%"),
    ("nearby", 17.0, 10.0, 635.2941176470589, 28.0, "4.60905349794%"),
    ("nearby", 15.0, 8.0, 576.0, -32.0, "-5.26748971193%"),
    ("nearby", 17.0, 9.0, 571.7647058823529, -36.0, "-5.92592592593%"),
    ("nearby", 5.0, 3.0, 648.0, 41.0, "6.74897119342%"),
    ("golden", 1.618, 1.0, 667.4907292954264, 60.0, "9.87654320988%"),
    ("nearby", 2.0, 1.0, 540.0, -68.0, "-11.1934156379%"),
    ("nearby", 8.0, 5.0, 675.0, 68.0, "11.1934156379%"),
    ("nearby", 17.0, 8.0, 508.2352941176471, -99.0, "-16.2962962963%"),
    ("nearby", 3.0, 2.0, 720.0, 113.0, "18.6008230453%"),
];

const SEVEN_SIXTY_EIGHT_BY_634: &[Row] = &[
    ("original", 768.0, 634.0, 634.0, 0.0, "0%"),
    ("whole", 384.0, 317.0, 634.0, 0.0, "0%"),
    ("decimal", 1.211, 1.0, 634.186622625929, 0.0, "0%"),
    ("nearby", 6.0, 5.0, 640.0, 6.0, "0.946372239748%"),
    ("nearby", 11.0, 9.0, 628.3636363636364, -6.0, "-0.946372239748%"),
    ("nearby", 5.0, 4.0, 614.4000000000001, -20.0, "-3.15457413249%"),
    ("nearby", 7.0, 6.0, 658.2857142857142, 24.0, "3.78548895899%"),
    ("nearby", 9.0, 7.0, 597.3333333333334, -37.0, "-5.83596214511%"),
    ("nearby", 8.0, 7.0, 672.0, 38.0, "5.99369085174%"),
    ("nearby", 9.0, 8.0, 682.6666666666666, 49.0, "7.72870662461%"),
    ("nearby", 10.0, 9.0, 691.2, 57.0, "8.9905362776%"),
    ("nearby", 4.0, 3.0, 576.0, -58.0, "-9.14826498423%"),
    ("nearby", 11.0, 10.0, 698.1818181818181, 64.0, "10.094637224%"),
    ("golden", 1.618, 1.0, 474.6600741656365, -159.0, "-25.0788643533%"),
];

const THREE_TWENTY_BY_199: &[Row] = &[
    ("original", 320.0, 199.0, 199.0, 0.0, "0%"),
    ("whole", 320.0, 199.0, 199.0, 0.0, "0%"),
    ("decimal", 1.608, 1.0, 199.0049751243781, 0.0, "0%"),
    ("golden", 1.618, 1.0, 197.77503090234856, -1.0, "-0.502512562814%"),
    ("nearby", 8.0, 5.0, 200.0, 1.0, "0.502512562814%"),
    ("nearby", 13.0, 8.0, 196.92307692307693, -2.0, "-1.00502512563%"),
    ("nearby", 11.0, 7.0, 203.63636363636363, 5.0, "2.51256281407%"),
    ("nearby", 5.0, 3.0, 192.0, -7.0, "-3.5175879397%"),
    ("nearby", 14.0, 9.0, 205.71428571428572, 7.0, "3.5175879397%"),
    ("nearby", 12.0, 7.0, 186.66666666666669, -12.0, "-6.03015075377%"),
    ("nearby", 3.0, 2.0, 213.33333333333331, 14.0, "7.0351758794%"),
    ("nearby", 7.0, 4.0, 182.85714285714283, -16.0, "-8.04020100503%"),
    ("nearby", 16.0, 9.0, 180.0, -19.0, "-9.54773869347%"),
    ("nearby", 16.0, 11.0, 220.0, 21.0, "10.5527638191%"),
];

const NINE_SIXTY_BY_555: &[Row] = &[
    ("original", 960.0, 555.0, 555.0, 0.0, "0%"),
    ("whole", 64.0, 37.0, 555.0, 0.0, "0%"),
    ("decimal", 1.73, 1.0, 554.9132947976879, 0.0, "0%"),
    ("nearby", 12.0, 7.0, 560.0, 5.0, "0.900900900901%"),
    ("nearby", 7.0, 4.0, 548.5714285714286, -6.0, "-1.08108108108%"),
    ("nearby", 5.0, 3.0, 576.0, 21.0, "3.78378378378%"),
    ("nearby", 9.0, 5.0, 533.3333333333334, -22.0, "-3.96396396396%"),
    ("nearby", 11.0, 6.0, 523.6363636363636, -31.0, "-5.58558558559%"),
    ("nearby", 13.0, 8.0, 590.7692307692308, 36.0, "6.48648648649%"),
    ("golden", 1.618, 1.0, 593.3250927070457, 38.0, "6.84684684685%"),
    ("nearby", 13.0, 7.0, 516.9230769230769, -38.0, "-6.84684684685%"),
    ("nearby", 8.0, 5.0, 600.0, 45.0, "8.10810810811%"),
    ("nearby", 11.0, 7.0, 610.9090909090909, 56.0, "10.0900900901%"),
    ("nearby", 14.0, 9.0, 617.1428571428572, 62.0, "11.1711711712%"),
];

fn assert_catalog(records: &[RatioRecord], expected: &[Row]) {
    assert_eq!(records.len(), expected.len(), "catalog length");
    for (i, (record, row)) in records.iter().zip(expected).enumerate() {
        let (kind, x, y, height, diff, percent) = *row;
        assert_eq!(record.kind.as_str(), kind, "row {i} type");
        assert_eq!((record.ratio_x, record.ratio_y), (x, y), "row {i} ratio");
        assert!(
            (record.height - height).abs() < 1e-9,
            "row {i} height {} != {height}",
            record.height
        );
        assert_eq!(record.difference_y, diff, "row {i} difference");
        assert_eq!(record.difference_y_percent, percent, "row {i} percent");
    }
}

#[test]
fn sixteen_nine_projected_to_1080() {
    let config = CatalogConfig::default().target_width(1080.0);
    let records = compute_catalog(16.0, 9.0, &config).unwrap();
    assert!(records.iter().all(|r| r.width == 1080.0));
    assert_catalog(&records, SIXTEEN_NINE_AT_1080);
}

#[test]
fn seven_sixty_eight_by_634() {
    let records = compute_catalog(768.0, 634.0, &CatalogConfig::default()).unwrap();
    assert!(records.iter().all(|r| r.width == 768.0));
    assert_catalog(&records, SEVEN_SIXTY_EIGHT_BY_634);
}

#[test]
fn three_twenty_by_199_golden_ties_nearby() {
    // Golden (-1) and 8:5 (+1) tie on |difference|; golden was assembled first.
    let records = compute_catalog(320.0, 199.0, &CatalogConfig::default()).unwrap();
    assert_catalog(&records, THREE_TWENTY_BY_199);
}

#[test]
fn nine_sixty_by_555() {
    let records = compute_catalog(960.0, 555.0, &CatalogConfig::default()).unwrap();
    assert_catalog(&records, NINE_SIXTY_BY_555);
}

#[test]
fn target_width_changes_only_projection() {
    let base = CatalogConfig::default();
    let at_source = compute_catalog(16.0, 9.0, &base.target_width(16.0)).unwrap();
    let default = compute_catalog(16.0, 9.0, &base).unwrap();
    assert_eq!(at_source, default);

    let wide = compute_catalog(16.0, 9.0, &aspratio::set_target_width(&base, 1080.0)).unwrap();
    assert!(wide.iter().all(|r| r.width == 1080.0));
    assert_eq!(base.target_width, None);
}
