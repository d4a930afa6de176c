//! # `OpenAI` Special Words

/// End of text.
pub const OA_ENDOFTEXT: &str = "<|endoftext|>";
/// Fill-in-the-middle prefix.
pub const OA_FIM_PREFIX: &str = "<|fim_prefix|>";
/// Fill-in-the-middle middle.
pub const OA_FIM_MIDDLE: &str = "<|fim_middle|>";
/// Fill-in-the-middle suffix.
pub const OA_FIM_SUFFIX: &str = "<|fim_suffix|>";
/// End of prompt.
pub const OA_ENDOFPROMPT: &str = "<|endofprompt|>";

/// "`r50k_base`" special words.
pub const OA_R50K_BASE_SPECIALS: &[(&str, usize)] = &[(OA_ENDOFTEXT, 50256)];

/// "`p50k_base`" special words.
pub const OA_P50K_BASE_SPECIALS: &[(&str, usize)] = &[(OA_ENDOFTEXT, 50256)];

/// "`p50k_edit`" special words.
pub const OA_P50K_EDIT_SPECIALS: &[(&str, usize)] = &[
    (OA_ENDOFTEXT, 50256),
    (OA_FIM_PREFIX, 50281),
    (OA_FIM_MIDDLE, 50282),
    (OA_FIM_SUFFIX, 50283),
];

/// "`cl100k_base`" special words.
pub const OA_CL100K_BASE_SPECIALS: &[(&str, usize)] = &[
    (OA_ENDOFTEXT, 100257),
    (OA_FIM_PREFIX, 100258),
    (OA_FIM_MIDDLE, 100259),
    (OA_FIM_SUFFIX, 100260),
    (OA_ENDOFPROMPT, 100276),
];

/// "`o200k_base`" special words.
pub const OA_O200K_BASE_SPECIALS: &[(&str, usize)] =
    &[(OA_ENDOFTEXT, 199999), (OA_ENDOFPROMPT, 200018)];
