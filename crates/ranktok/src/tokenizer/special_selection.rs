//! # Special Word Selection

use std::collections::BTreeSet;

/// Which special words a policy applies to.
///
/// Resolved against an encoding's special words before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialSelection {
    /// Every special word of the encoding.
    All,

    /// Exactly these words.
    Explicit(BTreeSet<String>),
}

impl Default for SpecialSelection {
    fn default() -> Self {
        Self::none()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SpecialSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::Explicit(iter.into_iter().map(|s| s.as_ref().to_string()).collect())
    }
}

impl SpecialSelection {
    /// The empty selection.
    pub fn none() -> Self {
        Self::Explicit(BTreeSet::new())
    }

    /// Select exactly `words`.
    pub fn explicit<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// Is this [`SpecialSelection::All`]?
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Resolve against the full set of special words.
    pub fn resolve(
        &self,
        universe: &BTreeSet<String>,
    ) -> BTreeSet<String> {
        match self {
            Self::All => universe.clone(),
            Self::Explicit(words) => words.clone(),
        }
    }
}

/// Resolve an `(allowed, disallowed)` policy pair.
///
/// A disallowed [`SpecialSelection::All`] means every special word
/// that is not allowed.
///
/// ## Returns
/// The concrete `(allowed, disallowed)` sets.
pub fn resolve_special_policy(
    allowed: &SpecialSelection,
    disallowed: &SpecialSelection,
    universe: &BTreeSet<String>,
) -> (BTreeSet<String>, BTreeSet<String>) {
    let allowed = allowed.resolve(universe);
    let disallowed = match disallowed {
        SpecialSelection::All => universe.difference(&allowed).cloned().collect(),
        SpecialSelection::Explicit(words) => words.clone(),
    };
    (allowed, disallowed)
}
