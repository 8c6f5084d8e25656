use crate::domain::{Carrier, PhoneNumberError};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// The Malawian numbering plans we recognise, tried in order. The first one that matches wins.
///
/// They cannot be folded into a single pattern: both need `operator` and `digits` capture groups,
/// and a regex cannot declare the same group name twice.
static NUMBERING_PLANS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        // Mobile ranges: `+265`, `265` or `0` prefix, then a 7 digit subscriber number. Only the
        // start is anchored, trailing input is ignored.
        Regex::new(r"^(?:\+?265|0)(?P<operator>88|9[89]|31)(?P<digits>\d{7})")
            .expect("Failed to compile the mobile numbering plan"),
        // Short ranges: no prefix, a 6 digit subscriber number and nothing else.
        Regex::new(r"^(?P<operator>1|212)(?P<digits>\d{6})$")
            .expect("Failed to compile the short numbering plan"),
    ]
});

const COUNTRY_CODE: &str = "265";
const TRUNK_PREFIX: &str = "0";
const GROUP_SEPARATOR: &str = "-";
const GROUP_SIZE: usize = 3;

/// A phone number that belongs to one of the Malawian numbering plans.
///
/// The fields are private: the only way to build a `PhoneNumber` is [`PhoneNumber::parse`] (or one
/// of the conversion traits that delegate to it), so holding one is proof that the input was valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    operator_id: String,
    digits: String,
}

/// Returns `true` if `source` is a Malawian phone number, `false` otherwise. Never fails.
///
/// ```
/// use mw_commons::domain::is_valid_phone_number;
///
/// assert!(is_valid_phone_number("+265-888-800-900"));
/// assert!(is_valid_phone_number("0888800900"));
/// assert!(!is_valid_phone_number("088880090"));
/// assert!(!is_valid_phone_number("+250-790-801-197"));
/// ```
pub fn is_valid_phone_number(source: &str) -> bool {
    match_numbering_plan(&normalize(source)).is_some()
}

/// Strips every hyphen and every whitespace character. The ASCII information separators
/// (`\x1c` to `\x1f`) count as whitespace too.
pub fn normalize(source: &str) -> String {
    source
        .chars()
        .filter(|c| *c != '-' && !is_separator_whitespace(*c))
        .collect()
}

fn is_separator_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn match_numbering_plan(normalized: &str) -> Option<Captures<'_>> {
    NUMBERING_PLANS
        .iter()
        .find_map(|plan| plan.captures(normalized))
}

/// Splits `digits` into dash separated groups: three digits are peeled off the front for as long
/// as more than six remain, whatever is left becomes the last group.
///
/// Digits are counted as characters: any Unicode decimal digit is accepted, not only ASCII ones.
fn group_digits(digits: &str) -> String {
    let mut groups = Vec::new();
    let mut remaining = digits;

    while remaining.chars().count() > 2 * GROUP_SIZE {
        let boundary = remaining
            .char_indices()
            .nth(GROUP_SIZE)
            .map_or(remaining.len(), |(index, _)| index);
        let (group, rest) = remaining.split_at(boundary);
        groups.push(group);
        remaining = rest;
    }
    groups.push(remaining);

    groups.join(GROUP_SEPARATOR)
}

impl PhoneNumber {
    /// Returns a `PhoneNumber` if `source` matches one of the Malawian numbering plans once hyphens
    /// and whitespace have been removed.
    #[tracing::instrument(name = "Parsing a phone number", level = "debug")]
    pub fn parse(source: &str) -> Result<PhoneNumber, PhoneNumberError> {
        let normalized = normalize(source);
        match match_numbering_plan(&normalized) {
            Some(captures) => Ok(Self {
                operator_id: captures["operator"].to_string(),
                digits: captures["digits"].to_string(),
            }),
            None => {
                tracing::debug!("{:?} does not match any numbering plan", normalized);
                Err(PhoneNumberError::InvalidPhoneNumber(source.to_string()))
            }
        }
    }

    /// The operator code, e.g. `88` or `212`.
    pub fn operator_id(&self) -> &str {
        &self.operator_id
    }

    /// The subscriber digits that follow the operator code.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The number with the `265` country code in front.
    ///
    /// ```
    /// use mw_commons::domain::PhoneNumber;
    ///
    /// let phone_number = PhoneNumber::parse("0888800900").unwrap();
    /// assert_eq!(phone_number.to_internationalized(false), "265888800900");
    /// assert_eq!(phone_number.to_internationalized(true), "+265-88-880-0900");
    /// ```
    pub fn to_internationalized(&self, humanize: bool) -> String {
        if !humanize {
            return format!("{}{}{}", COUNTRY_CODE, self.operator_id, self.digits);
        }

        format!(
            "+{}-{}-{}",
            COUNTRY_CODE,
            self.operator_id,
            group_digits(&self.digits)
        )
    }

    /// The number as dialed from within Malawi, with a leading `0`.
    ///
    /// ```
    /// use mw_commons::domain::PhoneNumber;
    ///
    /// let phone_number = PhoneNumber::parse("+265888800900").unwrap();
    /// assert_eq!(phone_number.to_localized(false), "0888800900");
    /// assert_eq!(phone_number.to_localized(true), "088-880-0900");
    /// ```
    pub fn to_localized(&self, humanize: bool) -> String {
        if !humanize {
            return format!("{}{}{}", TRUNK_PREFIX, self.operator_id, self.digits);
        }

        format!(
            "{}{}-{}",
            TRUNK_PREFIX,
            self.operator_id,
            group_digits(&self.digits)
        )
    }

    /// The carrier that owns this number's operator code.
    pub fn carrier(&self) -> Result<&'static Carrier, PhoneNumberError> {
        Carrier::from_operator_id(&self.operator_id)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone_number: PhoneNumber) -> Self {
        phone_number.to_internationalized(false)
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_localized(true))
    }
}
