use ranktok::SpecialSelection;

/// Parse a special-word selection.
///
/// `all` selects every special word; otherwise a comma separated list,
/// where an empty string selects none.
pub fn parse_special_selection(arg: &str) -> Result<SpecialSelection, String> {
    let arg = arg.trim();
    if arg.eq_ignore_ascii_case("all") {
        return Ok(SpecialSelection::All);
    }
    Ok(SpecialSelection::explicit(
        arg.split(',').map(str::trim).filter(|w| !w.is_empty()),
    ))
}

/// Special-word policy arg group.
#[derive(clap::Args, Debug)]
pub struct SpecialPolicyArgs {
    /// Special words to emit as reserved ids: "all", or a comma separated list.
    #[arg(long, default_value = "", value_parser = parse_special_selection)]
    allowed_special: SpecialSelection,

    /// Special words that fail the encode: "all" (every word not allowed),
    /// or a comma separated list.
    #[arg(long, default_value = "all", value_parser = parse_special_selection)]
    disallowed_special: SpecialSelection,
}

impl SpecialPolicyArgs {
    /// The allowed selection.
    pub fn allowed(&self) -> &SpecialSelection {
        &self.allowed_special
    }

    /// The disallowed selection.
    pub fn disallowed(&self) -> &SpecialSelection {
        &self.disallowed_special
    }
}
