use crate::configuration::FormattingSettings;
use crate::domain::PhoneNumber;

/// What `mw-phone` prints for a batch of command line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormattedNumbers {
    /// One `<formatted number>\t<carrier short name>` line per valid argument, in input order.
    pub lines: Vec<String>,
    /// How many arguments could not be parsed or had no carrier.
    pub failures: usize,
}

impl FormattedNumbers {
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}

/// Formats every source according to `settings`. Invalid sources are logged and counted, they do
/// not stop the rest of the batch from being processed.
#[tracing::instrument(name = "Formatting phone numbers", skip(settings, sources))]
pub fn format_numbers<I>(settings: &FormattingSettings, sources: I) -> FormattedNumbers
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut formatted = FormattedNumbers::default();

    for source in sources {
        let source = source.as_ref();
        match PhoneNumber::parse(source).and_then(|p| Ok((p.carrier()?, p))) {
            Ok((carrier, phone_number)) => formatted
                .lines
                .push(format!("{}\t{}", settings.format(&phone_number), carrier)),
            Err(e) => {
                tracing::warn!(error.message = %e, "Skipping {:?}", source);
                formatted.failures += 1;
            }
        }
    }

    formatted
}
