use ranktok::pretrained::{
    EncodingName,
    models::{MODEL_PREFIX_TO_ENCODING, MODEL_TO_ENCODING},
};
use strum::IntoEnumIterator;

/// What to list.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListTarget {
    /// Registered encodings.
    #[default]
    Encodings,

    /// Known models, with the encoding each uses.
    Models,
}

/// Args for the list command.
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// What to list.
    #[arg(value_enum, default_value_t = ListTarget::Encodings)]
    target: ListTarget,
}

impl ListArgs {
    /// Run the list command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        for line in list_lines(self.target) {
            println!("{line}");
        }
        Ok(())
    }
}

/// The listing, one entry per line.
///
/// Model prefixes are shown with a trailing `*`.
pub fn list_lines(target: ListTarget) -> Vec<String> {
    match target {
        ListTarget::Encodings => EncodingName::iter()
            .map(|encoding| {
                format!(
                    "{encoding}\t{} special words",
                    encoding.params().specials.len()
                )
            })
            .collect(),
        ListTarget::Models => MODEL_TO_ENCODING
            .iter()
            .map(|(model, encoding)| format!("{model}\t{encoding}"))
            .chain(
                MODEL_PREFIX_TO_ENCODING
                    .iter()
                    .map(|(prefix, encoding)| format!("{prefix}*\t{encoding}")),
            )
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use ranktok::pretrained::list_encoding_names;

    use super::*;

    #[test]
    fn test_list_encodings() {
        let lines = list_lines(ListTarget::Encodings);
        assert_eq!(lines.len(), list_encoding_names().len());
        assert!(lines.contains(&"cl100k_base\t5 special words".to_string()));
    }

    #[test]
    fn test_list_models() {
        let lines = list_lines(ListTarget::Models);
        assert_eq!(
            lines.len(),
            MODEL_TO_ENCODING.len() + MODEL_PREFIX_TO_ENCODING.len()
        );
        assert!(lines.contains(&"gpt-4\tcl100k_base".to_string()));
        assert!(lines.contains(&"gpt-4-*\tcl100k_base".to_string()));
    }
}
