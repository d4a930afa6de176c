//! # Encoding Registry
//!
//! The named encodings this crate knows how to build, and what each needs:
//! a word pattern, special words, an optional expected vocabulary size, and
//! where its rank file lives.

use std::{io::BufRead, path::Path};

use strum::IntoEnumIterator;

#[cfg(feature = "download")]
use crate::disk_cache::RanktokDiskCache;
use crate::{
    errors::{RTResult, RanktokError},
    pretrained::openai::{
        OA_CL100K_BASE_PATTERN,
        OA_O200K_BASE_PATTERN,
        OA_P50K_BASE_PATTERN,
        OA_R50K_BASE_PATTERN,
        resources::{
            OA_CL100K_BASE_TIKTOKEN_RESOURCE,
            OA_O200K_BASE_TIKTOKEN_RESOURCE,
            OA_P50K_BASE_TIKTOKEN_RESOURCE,
            OA_R50K_BASE_TIKTOKEN_RESOURCE,
        },
        specials::{
            OA_CL100K_BASE_SPECIALS,
            OA_O200K_BASE_SPECIALS,
            OA_P50K_BASE_SPECIALS,
            OA_P50K_EDIT_SPECIALS,
            OA_R50K_BASE_SPECIALS,
        },
    },
    regex::ConstRegexWrapperPattern,
    spanning::SpanningConfig,
    tokenizer::Tokenizer,
    types::TokenType,
    vocab::{
        EncodingVocab,
        SpecialVocab,
        io::{load_base64_encoding_vocab_path, read_base64_encoding_vocab},
    },
};

/// A remote file, with mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstUrlResource {
    /// Mirrors of the file, tried in order.
    pub urls: &'static [&'static str],
}

/// Static description of a named encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstEncodingParams {
    /// The encoding name.
    pub name: &'static str,

    /// Expected `|ranks| + |specials|`, when the encoding declares it.
    pub explicit_n_vocab: Option<usize>,

    /// The word split pattern.
    pub pattern: ConstRegexWrapperPattern,

    /// Where the rank file lives.
    pub resource: ConstUrlResource,

    /// Special words and their ids.
    pub specials: &'static [(&'static str, usize)],
}

/// Cache context for downloaded rank files.
#[cfg(feature = "download")]
const OA_KEY: &str = "openai";

/// "`r50k_base`" (GPT-2).
pub const OA_R50K_BASE_PARAMS: ConstEncodingParams = ConstEncodingParams {
    name: "r50k_base",
    explicit_n_vocab: Some(50257),
    pattern: OA_R50K_BASE_PATTERN,
    resource: OA_R50K_BASE_TIKTOKEN_RESOURCE,
    specials: OA_R50K_BASE_SPECIALS,
};

/// "`p50k_base`".
pub const OA_P50K_BASE_PARAMS: ConstEncodingParams = ConstEncodingParams {
    name: "p50k_base",
    explicit_n_vocab: Some(50281),
    pattern: OA_P50K_BASE_PATTERN,
    resource: OA_P50K_BASE_TIKTOKEN_RESOURCE,
    specials: OA_P50K_BASE_SPECIALS,
};

/// "`p50k_edit`"; the "`p50k_base`" ranks with fill-in-the-middle words.
pub const OA_P50K_EDIT_PARAMS: ConstEncodingParams = ConstEncodingParams {
    name: "p50k_edit",
    explicit_n_vocab: None,
    pattern: OA_P50K_BASE_PATTERN,
    resource: OA_P50K_BASE_TIKTOKEN_RESOURCE,
    specials: OA_P50K_EDIT_SPECIALS,
};

/// "`cl100k_base`".
pub const OA_CL100K_BASE_PARAMS: ConstEncodingParams = ConstEncodingParams {
    name: "cl100k_base",
    explicit_n_vocab: None,
    pattern: OA_CL100K_BASE_PATTERN,
    resource: OA_CL100K_BASE_TIKTOKEN_RESOURCE,
    specials: OA_CL100K_BASE_SPECIALS,
};

/// "`o200k_base`".
pub const OA_O200K_BASE_PARAMS: ConstEncodingParams = ConstEncodingParams {
    name: "o200k_base",
    explicit_n_vocab: None,
    pattern: OA_O200K_BASE_PATTERN,
    resource: OA_O200K_BASE_TIKTOKEN_RESOURCE,
    specials: OA_O200K_BASE_SPECIALS,
};

/// The registered encodings.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[non_exhaustive]
pub enum EncodingName {
    /// GPT-2 "`r50k_base`".
    #[strum(serialize = "r50k_base")]
    R50kBase,

    /// "`p50k_base`".
    #[strum(serialize = "p50k_base")]
    P50kBase,

    /// "`p50k_edit`".
    #[strum(serialize = "p50k_edit")]
    P50kEdit,

    /// "`cl100k_base`".
    #[strum(serialize = "cl100k_base")]
    Cl100kBase,

    /// "`o200k_base`".
    #[strum(serialize = "o200k_base")]
    O200kBase,
}

impl EncodingName {
    /// Look up an encoding by its exact name.
    ///
    /// ## Errors
    /// * `UnknownEncoding` if no encoding has this name.
    pub fn from_name(name: &str) -> RTResult<Self> {
        name.parse()
            .map_err(|_| RanktokError::UnknownEncoding(name.to_string()))
    }

    /// Get the static parameters.
    pub fn params(&self) -> &'static ConstEncodingParams {
        use EncodingName::*;
        match self {
            R50kBase => &OA_R50K_BASE_PARAMS,
            P50kBase => &OA_P50K_BASE_PARAMS,
            P50kEdit => &OA_P50K_EDIT_PARAMS,
            Cl100kBase => &OA_CL100K_BASE_PARAMS,
            O200kBase => &OA_O200K_BASE_PARAMS,
        }
    }

    /// The encoding name.
    pub fn name(&self) -> &'static str {
        self.params().name
    }

    /// Build the special vocabulary.
    ///
    /// ## Errors
    /// * `TokenOutOfRange` if an id does not fit in `T`.
    pub fn special_vocab<T: TokenType>(&self) -> RTResult<SpecialVocab<T>> {
        let specials = self
            .params()
            .specials
            .iter()
            .map(|&(word, token)| {
                T::from_usize(token)
                    .map(|token| (word, token))
                    .ok_or(RanktokError::TokenOutOfRange)
            })
            .collect::<RTResult<Vec<_>>>()?;
        SpecialVocab::try_from_words(specials)
    }

    /// Build the spanning configuration.
    pub fn spanning_config<T: TokenType>(&self) -> RTResult<SpanningConfig<T>> {
        Ok(SpanningConfig::new(
            self.params().pattern.into(),
            self.special_vocab()?,
        ))
    }

    /// Read the vocabulary from a rank file reader.
    pub fn read_vocab<T: TokenType, R: BufRead>(
        &self,
        reader: R,
    ) -> RTResult<EncodingVocab<T>> {
        read_base64_encoding_vocab(reader, self.spanning_config()?)
    }

    /// Load the vocabulary from a rank file on disk.
    pub fn load_vocab_path<T: TokenType>(
        &self,
        path: impl AsRef<Path>,
    ) -> RTResult<EncodingVocab<T>> {
        load_base64_encoding_vocab_path(path, self.spanning_config()?)
    }

    /// Build a tokenizer over `vocab`, checking the expected vocabulary size.
    pub fn build_tokenizer<T: TokenType>(
        &self,
        vocab: EncodingVocab<T>,
    ) -> RTResult<Tokenizer<T>> {
        let params = self.params();
        Tokenizer::new(params.name, vocab, params.explicit_n_vocab)
    }

    /// Build a tokenizer from a rank file reader.
    pub fn read_tokenizer<T: TokenType, R: BufRead>(
        &self,
        reader: R,
    ) -> RTResult<Tokenizer<T>> {
        self.build_tokenizer(self.read_vocab(reader)?)
    }

    /// Build a tokenizer from a rank file on disk.
    pub fn load_path<T: TokenType>(
        &self,
        path: impl AsRef<Path>,
    ) -> RTResult<Tokenizer<T>> {
        self.build_tokenizer(self.load_vocab_path(path)?)
    }

    /// The cache path of this encoding's rank file.
    ///
    /// ## Arguments
    /// * `disk_cache` - The cache to look in.
    /// * `download` - Whether a missing file may be downloaded.
    #[cfg(feature = "download")]
    pub fn cached_path(
        &self,
        disk_cache: &mut RanktokDiskCache,
        download: bool,
    ) -> RTResult<std::path::PathBuf> {
        let params = self.params();
        disk_cache
            .load_cached_path(&[OA_KEY, params.name], params.resource.urls, download)
            .map_err(|err| RanktokError::External(format!("{err:#}")))
    }

    /// Load a tokenizer, downloading its rank file into `disk_cache` if needed.
    #[cfg(feature = "download")]
    pub fn load_tokenizer<T: TokenType>(
        &self,
        disk_cache: &mut RanktokDiskCache,
    ) -> RTResult<Tokenizer<T>> {
        let path = self.cached_path(disk_cache, true)?;
        self.load_path(path)
    }
}

/// The names of all registered encodings.
pub fn list_encoding_names() -> Vec<&'static str> {
    EncodingName::iter().map(|e| e.name()).collect()
}
