use super::*;

#[test]
fn parses_every_unit() {
    let cases = [
        ("12px", 12, GraphicUnit::Pixel),
        ("-4px", -4, GraphicUnit::Pixel),
        ("50%", 50, GraphicUnit::Percent),
        ("10rw", 10, GraphicUnit::ResWidth),
        ("20rh", 20, GraphicUnit::ResHeight),
        ("30rmin", 30, GraphicUnit::ResMin),
        ("40rmax", 40, GraphicUnit::ResMax),
        ("0", 0, GraphicUnit::Pixel),
        ("auto", -1, GraphicUnit::Auto),
    ];
    for (lit, value, unit) in cases {
        let v: GraphicValue = lit.parse().unwrap();
        assert_eq!((v.value(), v.unit()), (value, unit), "{lit}");
    }
}

#[test]
fn rejects_unknown_suffix_and_fractions() {
    for bad in ["12pt", "1.5px", "px", "12", "", "autox"] {
        let err = bad.parse::<GraphicValue>().unwrap_err();
        assert!(
            matches!(err, VsmlError::ValueParse { kind: "graphic", .. }),
            "{bad}: {err:?}"
        );
    }
}

#[test]
fn render_then_parse_is_stable() {
    for lit in ["0", "7px", "-3px", "25%", "1rw", "2rh", "3rmin", "4rmax", "auto"] {
        let v: GraphicValue = lit.parse().unwrap();
        let again: GraphicValue = v.to_string().parse().unwrap();
        assert_eq!(again, v, "{lit}");
    }
}

#[test]
fn to_pixel_only_trusts_pixel_unit() {
    let units = [
        GraphicUnit::Auto,
        GraphicUnit::Percent,
        GraphicUnit::Pixel,
        GraphicUnit::ResWidth,
        GraphicUnit::ResHeight,
        GraphicUnit::ResMin,
        GraphicUnit::ResMax,
    ];
    for unit in units {
        let v = GraphicValue::new(37, unit);
        let expected = if unit == GraphicUnit::Pixel { 37 } else { 99 };
        assert_eq!(v.to_pixel(99), expected, "{unit:?}");
    }
}

#[test]
fn arithmetic_is_pure_and_pixel_based() {
    let a = GraphicValue::px(10);
    let b: GraphicValue = "50%".parse().unwrap();

    assert_eq!(a + GraphicValue::px(5), GraphicValue::px(15));
    assert_eq!(a - GraphicValue::px(15), GraphicValue::px(-5));
    assert_eq!(a + b, GraphicValue::px(10));

    let neg = -a;
    assert_eq!(neg, GraphicValue::px(-10));
    assert_eq!(a, GraphicValue::px(10));

    let neg_pct = -b;
    assert_eq!(neg_pct.unit(), GraphicUnit::Pixel);
    assert_eq!(b.unit(), GraphicUnit::Percent);
}

#[test]
fn positivity_ignores_resolution_units() {
    assert!(GraphicValue::px(1).is_positive());
    assert!("1%".parse::<GraphicValue>().unwrap().is_positive());
    assert!(!"1rw".parse::<GraphicValue>().unwrap().is_positive());
    assert!(!GraphicValue::AUTO.is_positive());
    assert_eq!(GraphicValue::px(3).cmp_px(&GraphicValue::AUTO), Ordering::Greater);
}
