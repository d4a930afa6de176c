//! # Public `OpenAI` Resources

use crate::pretrained::registry::ConstUrlResource;

/// The "`r50k_base.tiktoken`" rank file.
pub const OA_R50K_BASE_TIKTOKEN_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &["https://openaipublic.blob.core.windows.net/encodings/r50k_base.tiktoken"],
};

/// The "`p50k_base.tiktoken`" rank file.
pub const OA_P50K_BASE_TIKTOKEN_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &["https://openaipublic.blob.core.windows.net/encodings/p50k_base.tiktoken"],
};

/// The "`cl100k_base.tiktoken`" rank file.
pub const OA_CL100K_BASE_TIKTOKEN_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &["https://openaipublic.blob.core.windows.net/encodings/cl100k_base.tiktoken"],
};

/// The "`o200k_base.tiktoken`" rank file.
pub const OA_O200K_BASE_TIKTOKEN_RESOURCE: ConstUrlResource = ConstUrlResource {
    urls: &["https://openaipublic.blob.core.windows.net/encodings/o200k_base.tiktoken"],
};
