use crate::helpers::parse;
use mw_commons::domain::{ACCESS, AIRTEL, MTL, TNM};

#[test]
fn tnm_owns_the_88_range() {
    let carrier = parse("+265-888-800-900").carrier().unwrap();

    assert_eq!(carrier.short_name, "TNM");
    assert_eq!(carrier.full_name, "Telekom Networks Malawi");
}

#[test]
fn each_range_resolves_to_its_carrier() {
    let test_cases = vec![
        ("1234567", &MTL),
        ("0881234567", &TNM),
        ("0311234567", &TNM),
        ("0981234567", &AIRTEL),
        ("0991234567", &AIRTEL),
        ("212345678", &ACCESS),
    ];

    for (source, expected) in test_cases {
        assert_eq!(
            parse(source).carrier(),
            Ok(expected),
            "Wrong carrier for {}",
            source
        );
    }
}
