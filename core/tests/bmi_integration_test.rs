//! Integration tests for the BMI calculator

mod common;

use healthy_coder_core::{
    bmi_scores, find_worst_bmi_coder, is_diet_recommended, Coder, HeightUnit, WeightUnit,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DietRecommendedRow {
    weight: f64,
    height: f64,
}

#[test]
fn test_diet_recommended_from_csv() {
    common::init_tracing();

    let mut reader = csv::Reader::from_path(common::data_file("diet-recommended-input-data.csv"))
        .expect("Failed to open CSV fixture");

    let mut rows = 0;
    for record in reader.deserialize() {
        let row: DietRecommendedRow = record.expect("Failed to parse CSV row");
        assert!(
            is_diet_recommended(row.weight, row.height).unwrap(),
            "weight={}, height={} should be recommended a diet",
            row.weight,
            row.height
        );
        rows += 1;
    }
    assert_eq!(rows, 5);
}

#[test]
fn test_worst_coder_and_scores_agree() {
    common::init_tracing();

    let coders = vec![
        Coder::new(1.80, 60.0),
        Coder::new(1.82, 98.0),
        Coder::new(1.82, 64.7),
    ];

    let worst = find_worst_bmi_coder(&coders).unwrap().unwrap();
    let scores = bmi_scores(&coders).unwrap();

    assert_eq!(worst, &Coder::new(1.82, 98.0));
    assert_eq!(scores, vec![18.52, 29.59, 19.53]);

    let max_score = scores.iter().cloned().fold(f64::MIN, f64::max);
    assert_eq!(max_score, 29.59);
}

#[test]
fn test_imperial_coder_scores() {
    common::init_tracing();

    // 6 ft, 200 lbs -> BMI 27.12
    let coder = Coder::from_units(72.0, HeightUnit::Inches, 200.0, WeightUnit::Lbs);
    assert_eq!(bmi_scores(&[coder]).unwrap(), vec![27.12]);
    assert!(is_diet_recommended(coder.weight(), coder.height()).unwrap());
}

#[test]
fn test_zero_height_propagates_from_batch() {
    common::init_tracing();

    let coders = [Coder::new(1.80, 60.0), Coder::new(0.0, 70.0)];
    assert!(bmi_scores(&coders).unwrap_err().is_arithmetic());
}
