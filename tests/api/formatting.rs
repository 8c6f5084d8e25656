use crate::helpers::parse;

#[test]
fn internationalized_form_of_a_mobile_number() {
    let phone_number = parse("0888800900");

    assert_eq!(phone_number.to_internationalized(false), "265888800900");
    assert_eq!(phone_number.to_internationalized(true), "+265-88-880-0900");
}

#[test]
fn localized_form_of_a_mobile_number() {
    let phone_number = parse("+265888800900");

    assert_eq!(phone_number.to_localized(false), "0888800900");
    assert_eq!(phone_number.to_localized(true), "088-880-0900");
}

#[test]
fn internationalized_form_concatenates_country_code_operator_and_digits() {
    let phone_number = parse("+265-88-800-8001");

    assert_eq!(phone_number.operator_id(), "88");
    assert_eq!(phone_number.digits(), "8008001");
    assert_eq!(phone_number.to_internationalized(false), "265888008001");
    assert_eq!(phone_number.to_internationalized(true), "+265-88-800-8001");
}

#[test]
fn short_number_digits_are_kept_in_one_group() {
    let phone_number = parse("1234567");

    assert_eq!(phone_number.to_internationalized(false), "2651234567");
    assert_eq!(phone_number.to_internationalized(true), "+265-1-234567");
    assert_eq!(phone_number.to_localized(false), "01234567");
    assert_eq!(phone_number.to_localized(true), "01-234567");
}

#[test]
fn display_matches_the_humanized_local_form() {
    let phone_number = parse("265 999 123 456");

    assert_eq!(phone_number.to_string(), phone_number.to_localized(true));
    assert_eq!(phone_number.to_string(), "099-912-3456");
}
