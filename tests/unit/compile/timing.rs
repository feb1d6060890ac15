use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn pad_amount_only_for_positive_explicit() {
    assert_eq!(
        pad_amount(&TimeValue::frames(12.0)),
        Some(PadAmount::Frames(12))
    );
    assert_eq!(
        pad_amount(&TimeValue::seconds(0.5)),
        Some(PadAmount::Seconds(0.5))
    );
    assert_eq!(pad_amount(&TimeValue::ZERO), None);
    assert_eq!(pad_amount(&TimeValue::percent(10.0)), None);
    assert_eq!(pad_amount(&TimeValue::FIT), None);
}

#[test]
fn end_point_keeps_unit() {
    assert_eq!(
        end_point(&TimeValue::frames(90.0)),
        Some(TimePoint::Frame(90))
    );
    assert_eq!(
        end_point(&TimeValue::seconds(5.0)),
        Some(TimePoint::Second(5.0))
    );
    assert_eq!(end_point(&TimeValue::SOURCE), None);
}

#[test]
fn millis_rounds_to_nearest() {
    assert_eq!(millis(&TimeValue::seconds(1.2345), fps30()), 1235);
    assert_eq!(millis(&TimeValue::seconds(1.2344), fps30()), 1234);
    assert_eq!(millis(&TimeValue::frames(10.0), Fps::new(30000, 1001).unwrap()), 334);
    assert_eq!(millis(&TimeValue::frames(15.0), fps30()), 500);
    assert_eq!(millis(&TimeValue::FIT, fps30()), 0);
}

#[test]
fn summed_seconds_round_to_intended_millis() {
    assert_eq!(secs_to_millis(0.7 + 0.1), 800);
    assert_eq!(secs_to_millis(-0.2), 0);
}

#[test]
fn explicit_secs_ignores_policies() {
    assert_eq!(explicit_secs(&TimeValue::frames(60.0), fps30()), 2.0);
    assert_eq!(explicit_secs(&TimeValue::percent(50.0), fps30()), 0.0);
}
