/// Everything that can go wrong when turning a string into a [`PhoneNumber`](super::PhoneNumber)
/// or a phone number into a [`Carrier`](super::Carrier).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    /// The input did not match any of the Malawian numbering plans. Carries the raw input, before
    /// any separators were stripped, so callers can report exactly what they were given.
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),
    /// The operator code does not belong to any known carrier.
    #[error("Invalid mobile carrier identifier {0}")]
    InvalidCarrierCode(String),
}
