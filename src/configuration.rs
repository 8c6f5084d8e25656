use crate::domain::PhoneNumber;
use serde_aux::field_attributes::deserialize_bool_from_anything;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub formatting: FormattingSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct FormattingSettings {
    pub style: FormatStyle,
    // Environment variables are always strings, `APP_FORMATTING__HUMANIZE=false` must still work.
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub humanize: bool,
}

/// Which of the two textual representations to print.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// `0` prefix, as dialed from within Malawi.
    Localized,
    /// `265` country code prefix.
    Internationalized,
}

impl FormatStyle {
    pub fn format(&self, phone_number: &PhoneNumber, humanize: bool) -> String {
        match self {
            FormatStyle::Localized => phone_number.to_localized(humanize),
            FormatStyle::Internationalized => phone_number.to_internationalized(humanize),
        }
    }
}

impl FormattingSettings {
    pub fn format(&self, phone_number: &PhoneNumber) -> String {
        self.style.format(phone_number, self.humanize)
    }
}

/// Reads the settings from `configuration/base.yaml`, if present, and from `APP_`-prefixed
/// environment variables. Environment variables take precedence.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("Failed to read current dir: {e}")))?;
    let configuration_directory = base_path.join("configuration");

    build_settings(
        config::Config::builder()
            .add_source(
                config::File::from(configuration_directory.join("base.yaml")).required(false),
            )
            // E.g. `APP_FORMATTING__STYLE=internationalized` would set `Settings.formatting.style`
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            ),
    )
}

/// Fills in the defaults and deserializes whatever sources `builder` was given.
fn build_settings(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, config::ConfigError> {
    builder
        .set_default("formatting.style", "localized")?
        .set_default("formatting.humanize", false)?
        .build()?
        .try_deserialize::<Settings>()
}
