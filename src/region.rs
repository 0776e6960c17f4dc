//! Region table and locale resolution.
//!
//! Every region owns one host and an ordered list of locales. The first
//! locale of the list is the one used when the caller does not ask for any.

use crate::error::{Result, WowError};
use std::fmt;
use std::str::FromStr;

/// A geographic partition of the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    UnitedStates,
    Europe,
    Korea,
    Taiwan,
    China,
}

impl Region {
    /// All regions, in table order
    pub const ALL: [Region; 5] = [
        Region::UnitedStates,
        Region::Europe,
        Region::Korea,
        Region::Taiwan,
        Region::China,
    ];

    /// Identifiers accepted by [`Region::from_str`] for this region
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Region::UnitedStates => &["US", "United States"],
            Region::Europe => &["EU", "Europe"],
            Region::Korea => &["KR", "Korea"],
            Region::Taiwan => &["TW", "Taiwan"],
            Region::China => &["ZH", "CN", "China"],
        }
    }

    /// API host serving this region
    pub fn host(&self) -> &'static str {
        match self {
            Region::UnitedStates => "us.battle.net",
            Region::Europe => "eu.battle.net",
            Region::Korea => "kr.battle.net",
            Region::Taiwan => "tw.battle.net",
            Region::China => "www.battle.com.cn",
        }
    }

    /// Locales served by this region; the first one is the default
    pub fn locales(&self) -> &'static [&'static str] {
        match self {
            Region::UnitedStates => &["en_US", "es_MX", "pt_BR"],
            Region::Europe => &["en_GB", "es_ES", "fr_FR", "ru_RU", "de_DE", "pt_PT", "it_IT"],
            Region::Korea => &["ko_KR"],
            Region::Taiwan => &["zh_TW"],
            Region::China => &["zh_CN"],
        }
    }

    /// Locale used when none is requested
    pub fn default_locale(&self) -> &'static str {
        self.locales()[0]
    }

    /// Check `locale` against this region, choosing the default when empty.
    ///
    /// `region_name` is only used to name the region in the error, so callers
    /// see the identifier they passed in.
    pub fn resolve_locale(&self, region_name: &str, locale: &str) -> Result<&'static str> {
        if locale.is_empty() {
            return Ok(self.default_locale());
        }
        self.locales()
            .iter()
            .copied()
            .find(|valid| *valid == locale)
            .ok_or_else(|| WowError::InvalidLocale {
                locale: locale.to_string(),
                region: region_name.to_string(),
            })
    }
}

impl FromStr for Region {
    type Err = WowError;

    fn from_str(s: &str) -> Result<Self> {
        Region::ALL
            .into_iter()
            .find(|region| region.aliases().iter().any(|alias| *alias == s))
            .ok_or_else(|| WowError::InvalidRegion {
                region: s.to_string(),
            })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.aliases()[0])
    }
}

/// Resolve a region identifier and a locale in one step.
pub fn resolve(region: &str, locale: &str) -> Result<(Region, &'static str)> {
    let parsed: Region = region.parse()?;
    let locale = parsed.resolve_locale(region, locale)?;
    Ok((parsed, locale))
}
