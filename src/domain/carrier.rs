use crate::domain::PhoneNumberError;

/// A Malawian telecommunications operator.
///
/// There is a fixed set of them, so the only way to get hold of a `Carrier` is through one of the
/// constants below or through [`Carrier::from_operator_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Carrier {
    pub short_name: &'static str,
    pub full_name: &'static str,
}

pub const MTL: Carrier = Carrier {
    short_name: "MTL",
    full_name: "Malawi Telecommunications Limited",
};

pub const TNM: Carrier = Carrier {
    short_name: "TNM",
    full_name: "Telekom Networks Malawi",
};

pub const AIRTEL: Carrier = Carrier {
    short_name: "AIRTEL",
    full_name: "Airtel Malawi",
};

pub const ACCESS: Carrier = Carrier {
    short_name: "ACL",
    full_name: "Access Communications Limited",
};

impl Carrier {
    /// Resolves an operator code (`88`, `1`, `212`, ...) to the carrier that owns the range.
    pub fn from_operator_id(operator_id: &str) -> Result<&'static Carrier, PhoneNumberError> {
        match operator_id {
            "1" => Ok(&MTL),
            "88" | "31" => Ok(&TNM),
            "98" | "99" => Ok(&AIRTEL),
            "212" => Ok(&ACCESS),
            other => {
                tracing::error!("No carrier is registered for operator code {}", other);
                Err(PhoneNumberError::InvalidCarrierCode(other.to_string()))
            }
        }
    }
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name)
    }
}
