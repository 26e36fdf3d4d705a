use super::Collation;
use crate::error::{Result, SortError};
use icu_collator::{Collator, CollatorOptions, Numeric};
use icu_locid::Locale;
use icu_provider::DataLocale;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Locale used when neither the options nor a rule name one.
pub const DEFAULT_LOCALE: &str = "en";

/// Locale-aware, case and accent sensitive collation backed by ICU4X.
pub struct LocaleCollator {
    locale: String,
    numeric: bool,
    inner: Collator,
}

impl LocaleCollator {
    /// Collator for a BCP-47 locale tag such as `sv` or `de-AT`.
    pub fn new(locale: &str) -> Result<Self> {
        Self::build(locale, false)
    }

    /// The default identity: natural ordering where digit runs compare by
    /// numeric value (`item2` < `item10`).
    pub fn natural() -> Result<Self> {
        Self::build(DEFAULT_LOCALE, true)
    }

    /// Collator for `locale` with numeric collation enabled.
    pub fn numeric(locale: &str) -> Result<Self> {
        Self::build(locale, true)
    }

    fn build(locale: &str, numeric: bool) -> Result<Self> {
        let parsed: Locale = locale.parse().map_err(|err: icu_locid::ParserError| {
            SortError::InvalidLocale {
                locale: locale.to_string(),
                reason: err.to_string(),
            }
        })?;

        let mut options = CollatorOptions::new();
        if numeric {
            options.numeric = Some(Numeric::On);
        }

        let inner = Collator::try_new(&DataLocale::from(&parsed), options).map_err(|err| {
            SortError::InvalidLocale {
                locale: locale.to_string(),
                reason: err.to_string(),
            }
        })?;

        Ok(Self {
            locale: parsed.to_string(),
            numeric,
            inner,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl fmt::Debug for LocaleCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCollator")
            .field("locale", &self.locale)
            .field("numeric", &self.numeric)
            .finish()
    }
}

impl Collation for LocaleCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        self.inner.compare(left, right)
    }

    fn name(&self) -> Cow<'_, str> {
        if self.numeric {
            Cow::Owned(format!("{}-u-kn", self.locale))
        } else {
            Cow::Borrowed(&self.locale)
        }
    }
}
