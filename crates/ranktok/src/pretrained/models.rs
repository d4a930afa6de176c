//! # Model Name Resolution
//!
//! Maps `OpenAI` model names to the encoding they were trained with.

use crate::{
    errors::{RTResult, RanktokError},
    pretrained::registry::EncodingName,
};

/// Exact model names.
pub const MODEL_TO_ENCODING: &[(&str, EncodingName)] = {
    use EncodingName::*;
    &[
        // chat
        ("gpt-4o", O200kBase),
        ("gpt-4.1", O200kBase),
        ("gpt-4.5", O200kBase),
        ("o1", O200kBase),
        ("o3", O200kBase),
        ("o4-mini", O200kBase),
        ("gpt-4", Cl100kBase),
        ("gpt-3.5-turbo", Cl100kBase),
        ("gpt-3.5", Cl100kBase),
        ("gpt-35-turbo", Cl100kBase),
        // base
        ("davinci-002", Cl100kBase),
        ("babbage-002", Cl100kBase),
        // embeddings
        ("text-embedding-ada-002", Cl100kBase),
        ("text-embedding-3-small", Cl100kBase),
        ("text-embedding-3-large", Cl100kBase),
        // text (deprecated)
        ("text-davinci-003", P50kBase),
        ("text-davinci-002", P50kBase),
        ("text-davinci-001", R50kBase),
        ("text-curie-001", R50kBase),
        ("text-babbage-001", R50kBase),
        ("text-ada-001", R50kBase),
        ("davinci", R50kBase),
        ("curie", R50kBase),
        ("babbage", R50kBase),
        ("ada", R50kBase),
        // code (deprecated)
        ("code-davinci-002", P50kBase),
        ("code-davinci-001", P50kBase),
        ("code-cushman-002", P50kBase),
        ("code-cushman-001", P50kBase),
        ("davinci-codex", P50kBase),
        ("cushman-codex", P50kBase),
        // edit (deprecated)
        ("text-davinci-edit-001", P50kEdit),
        ("code-davinci-edit-001", P50kEdit),
        // old embeddings (deprecated)
        ("text-similarity-davinci-001", R50kBase),
        ("text-similarity-curie-001", R50kBase),
        ("text-similarity-babbage-001", R50kBase),
        ("text-similarity-ada-001", R50kBase),
        ("text-search-davinci-doc-001", R50kBase),
        ("text-search-curie-doc-001", R50kBase),
        ("text-search-babbage-doc-001", R50kBase),
        ("text-search-ada-doc-001", R50kBase),
        ("code-search-babbage-code-001", R50kBase),
        ("code-search-ada-code-001", R50kBase),
        // open source
        ("gpt2", R50kBase),
    ]
};

/// Model name prefixes; the longest matching prefix wins.
pub const MODEL_PREFIX_TO_ENCODING: &[(&str, EncodingName)] = {
    use EncodingName::*;
    &[
        // chat
        ("o1-", O200kBase),
        ("o3-", O200kBase),
        ("o4-mini-", O200kBase),
        ("gpt-4o-", O200kBase),
        ("gpt-4.1-", O200kBase),
        ("gpt-4.5-", O200kBase),
        ("chatgpt-4o-", O200kBase),
        ("gpt-4-", Cl100kBase),
        ("gpt-3.5-turbo-", Cl100kBase),
        ("gpt-35-turbo-", Cl100kBase),
        // fine-tuned
        ("ft:gpt-4o", O200kBase),
        ("ft:gpt-4", Cl100kBase),
        ("ft:gpt-3.5-turbo", Cl100kBase),
        ("ft:davinci-002", Cl100kBase),
        ("ft:babbage-002", Cl100kBase),
    ]
};

/// Resolve the encoding for a model name.
///
/// The name is lowercased, then matched exactly against
/// [`MODEL_TO_ENCODING`], then by longest prefix against
/// [`MODEL_PREFIX_TO_ENCODING`].
///
/// ## Errors
/// * `UnknownModel` if neither table matches.
pub fn encoding_name_for_model(model: &str) -> RTResult<EncodingName> {
    let lower = model.to_lowercase();

    if let Some(&(_, encoding)) = MODEL_TO_ENCODING.iter().find(|(name, _)| *name == lower) {
        return Ok(encoding);
    }

    MODEL_PREFIX_TO_ENCODING
        .iter()
        .filter(|(prefix, _)| lower.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|&(_, encoding)| encoding)
        .ok_or_else(|| RanktokError::UnknownModel(model.to_string()))
}

/// The names of all exactly-known models.
pub fn list_model_names() -> Vec<&'static str> {
    MODEL_TO_ENCODING.iter().map(|(name, _)| *name).collect()
}
