use mw_commons::configuration::{FormatStyle, FormattingSettings};
use mw_commons::startup::format_numbers;

fn settings(style: FormatStyle, humanize: bool) -> FormattingSettings {
    FormattingSettings { style, humanize }
}

#[test]
fn valid_and_invalid_arguments_are_reported_separately() {
    let arguments = vec![
        "+265-888-800-900".to_string(),
        "088880090".to_string(),
        "212 345 678".to_string(),
        "+250-790-801-197".to_string(),
        "0991234567".to_string(),
    ];

    let formatted = format_numbers(&settings(FormatStyle::Localized, true), arguments);

    assert_eq!(
        formatted.lines,
        vec!["088-880-0900\tTNM", "0212-345678\tACL", "099-123-4567\tAIRTEL"]
    );
    assert_eq!(formatted.failures, 2);
    assert!(!formatted.is_success());
}

#[test]
fn the_configured_style_is_applied_to_every_line() {
    let arguments = ["0888800900", "1234567"];

    let formatted = format_numbers(&settings(FormatStyle::Internationalized, false), arguments);

    assert_eq!(formatted.lines, vec!["265888800900\tTNM", "2651234567\tMTL"]);
    assert!(formatted.is_success());
}

#[test]
fn no_arguments_is_a_success_with_no_output() {
    let formatted = format_numbers(&settings(FormatStyle::Localized, false), Vec::<String>::new());

    assert!(formatted.lines.is_empty());
    assert_eq!(formatted.failures, 0);
    assert!(formatted.is_success());
}
