//! Supported languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A language with bundled morphology data, identified by ISO 639-3 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Language {
    Catalan,
    Czech,
    German,
    English,
    Finnish,
    French,
    SerboCroatian,
    Hungarian,
    Italian,
    Mongolian,
    Polish,
    Portuguese,
    Russian,
    Spanish,
    Swedish,
}

impl Language {
    /// All supported languages, ordered by code.
    pub const ALL: [Language; 15] = [
        Language::Catalan,
        Language::Czech,
        Language::German,
        Language::English,
        Language::Finnish,
        Language::French,
        Language::SerboCroatian,
        Language::Hungarian,
        Language::Italian,
        Language::Mongolian,
        Language::Polish,
        Language::Portuguese,
        Language::Russian,
        Language::Spanish,
        Language::Swedish,
    ];

    /// ISO 639-3 code (`"eng"`, `"deu"`, ...).
    pub fn code(self) -> &'static str {
        match self {
            Language::Catalan => "cat",
            Language::Czech => "ces",
            Language::German => "deu",
            Language::English => "eng",
            Language::Finnish => "fin",
            Language::French => "fra",
            Language::SerboCroatian => "hbs",
            Language::Hungarian => "hun",
            Language::Italian => "ita",
            Language::Mongolian => "mon",
            Language::Polish => "pol",
            Language::Portuguese => "por",
            Language::Russian => "rus",
            Language::Spanish => "spa",
            Language::Swedish => "swe",
        }
    }

    /// Full English name. The etymology graph is keyed by this, not the code.
    pub fn name(self) -> &'static str {
        match self {
            Language::Catalan => "Catalan",
            Language::Czech => "Czech",
            Language::German => "German",
            Language::English => "English",
            Language::Finnish => "Finnish",
            Language::French => "French",
            Language::SerboCroatian => "Serbo-Croatian",
            Language::Hungarian => "Hungarian",
            Language::Italian => "Italian",
            Language::Mongolian => "Mongolian",
            Language::Polish => "Polish",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Swedish => "Swedish",
        }
    }

    /// Resolve an ISO 639-3 code.
    ///
    /// Fails with [`Error::LanguageNotSupported`] for anything outside
    /// [`Language::ALL`]. Matching is case-insensitive.
    pub fn from_code(code: &str) -> Result<Self> {
        let wanted = code.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == wanted)
            .ok_or_else(|| Error::language_not_supported(code))
    }

    /// Comma-separated list of supported codes, for error messages.
    pub fn available_codes() -> String {
        Self::ALL.iter().map(|l| l.code()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(code: String) -> Result<Self> {
        Self::from_code(&code)
    }
}
