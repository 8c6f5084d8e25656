mod carrier;
mod error;
mod phone_number;

pub use carrier::{Carrier, ACCESS, AIRTEL, MTL, TNM};
pub use error::PhoneNumberError;
pub use phone_number::{is_valid_phone_number, normalize, PhoneNumber};
