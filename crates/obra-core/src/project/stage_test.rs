use super::*;
use rust_decimal_macros::dec;

fn stage(estimated: Decimal, actual: Decimal) -> ProjectStage {
    ProjectStage {
        id: StageId::new("s1"),
        name: "Fundação".to_string(),
        progress: Progress::COMPLETE,
        estimated_cost: estimated,
        actual_cost: actual,
    }
}

#[test]
fn test_progress_bounds() {
    assert_eq!(Progress::new(0).unwrap(), Progress::ZERO);
    assert_eq!(Progress::new(100).unwrap().percent(), 100);
    assert!(matches!(
        Progress::new(101),
        Err(CoreError::ProgressOutOfRange { value: 101 })
    ));
    assert!(Progress::new(-1).is_err());
}

#[test]
fn test_progress_deserialize_out_of_range_fails() {
    assert!(serde_json::from_str::<Progress>("65").is_ok());
    let err = serde_json::from_str::<Progress>("150").unwrap_err();
    assert!(err.to_string().contains("between 0 and 100"));
}

#[test]
fn test_progress_display() {
    assert_eq!(Progress::new(65).unwrap().to_string(), "65%");
    assert!(Progress::COMPLETE.is_complete());
}

#[test]
fn test_variance_over_budget() {
    let s = stage(dec!(1500000), dec!(1550000));
    assert_eq!(s.variance(), dec!(50000));
    assert!(s.is_over_budget());
}

#[test]
fn test_variance_under_budget_is_negative() {
    let s = stage(dec!(4000000), dec!(2800000));
    assert_eq!(s.variance(), dec!(-1200000));
    assert!(!s.is_over_budget());
}
