// Copyright (c) 2025 Lanai Suggest Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Case folding for trie keys.
//!
//! Keys are normalized before they reach the trie: surrounding whitespace is
//! trimmed and the text is lowercased according to a [`Locale`]. The trie's
//! own character comparisons are case-insensitive as well, see
//! [`compare_chars`].

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::LanaiTrieError;

/// Lowercasing rules used by the [`CaseFolder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Language-neutral Unicode lowercasing.
    #[default]
    Root,

    /// Turkish and Azerbaijani: `I` folds to dotless `ı`, `İ` folds to `i`.
    Turkic,
}

impl FromStr for Locale {
    type Err = LanaiTrieError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim().to_ascii_lowercase();
        let language = tag.split(['-', '_']).next().unwrap_or_default();
        match language {
            "" | "root" | "und" | "en" => Ok(Locale::Root),
            "tr" | "az" => Ok(Locale::Turkic),
            _ => Err(LanaiTrieError::UnknownLocale(tag)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Root => write!(f, "root"),
            Locale::Turkic => write!(f, "tr"),
        }
    }
}

/// Normalizes key text before insertion or lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseFolder {
    locale: Locale,
    enabled: bool,
}

impl CaseFolder {
    /// Creates a folder for the given locale.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            enabled: true,
        }
    }

    /// A folder that passes keys through untouched.
    pub fn disabled() -> Self {
        Self {
            locale: Locale::Root,
            enabled: false,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Trims and lowercases `key`, borrowing when it is already normalized.
    pub fn fold<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if !self.enabled {
            return Cow::Borrowed(key);
        }

        let trimmed = key.trim();
        let needs_lowering = trimmed.chars().any(|c| c.is_uppercase());
        if !needs_lowering {
            return Cow::Borrowed(trimmed);
        }

        match self.locale {
            Locale::Root => Cow::Owned(trimmed.to_lowercase()),
            Locale::Turkic => {
                let mut folded = String::with_capacity(trimmed.len());
                for c in trimmed.chars() {
                    match c {
                        'I' => folded.push('ı'),
                        'İ' => folded.push('i'),
                        _ => folded.extend(c.to_lowercase()),
                    }
                }
                Cow::Owned(folded)
            }
        }
    }
}

impl Default for CaseFolder {
    fn default() -> Self {
        Self::new(Locale::Root)
    }
}

/// Single-character lowercase used for discriminator ordering.
#[inline]
pub(crate) fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    c.to_lowercase().next().unwrap_or(c)
}

/// Case-insensitive character ordering shared by every trie walk.
#[inline]
pub(crate) fn compare_chars(a: char, b: char) -> Ordering {
    fold_char(a).cmp(&fold_char(b))
}

/// Signed distance between two discriminators under [`compare_chars`].
#[inline]
pub(crate) fn char_distance(from: char, to: char) -> i64 {
    i64::from(u32::from(fold_char(to))) - i64::from(u32::from(fold_char(from)))
}
