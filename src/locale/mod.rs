// ============================================================================
// Locale Identifier
// Unicode language-script-territory identifiers and CLDR parent chains
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// CLDR locales with irregular parents.
///
/// These cannot be derived by truncation and must be looked up by their
/// canonical identifier before the regular subtag-dropping rules apply.
/// Curated subset of the CLDR `parentLocales` table.
static PARENT_LOCALES: &[(&str, &str)] = &[
    ("en-150", "en-001"),
    ("en-AU", "en-001"),
    ("en-CA", "en-001"),
    ("en-GB", "en-001"),
    ("en-IN", "en-001"),
    ("en-NZ", "en-001"),
    ("es-AR", "es-419"),
    ("es-BO", "es-419"),
    ("es-CL", "es-419"),
    ("es-CO", "es-419"),
    ("es-MX", "es-419"),
    ("es-US", "es-419"),
    ("pt-AO", "pt-PT"),
    ("pt-MO", "pt-PT"),
    ("pt-MZ", "pt-PT"),
    ("sr-Latn", "en"),
];

/// A Unicode locale identifier.
///
/// All three parts are independently optional; a locale with every part
/// empty is the "root" sentinel. Instances are immutable values compared
/// structurally.
///
/// # Example
/// ```
/// use decimal_currency::locale::Locale;
///
/// let locale = Locale::new("SR_rs_LATN");
/// assert_eq!(locale.to_string(), "sr-Latn-RS");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    pub language: String,
    pub script: String,
    pub territory: String,
}

impl Locale {
    /// Parse a locale from its string representation.
    ///
    /// Input is case-insensitive and accepts `_` as a delimiter
    /// ("SR_rs_LATN" becomes "sr-Latn-RS"). The first segment is the
    /// language; later segments are classified by shape: four characters
    /// mean a script, two or three mean a territory (including numeric
    /// region codes like "419"). Anything else (variants) is ignored.
    pub fn new(id: &str) -> Self {
        let id = id.trim().to_lowercase().replace('_', "-");
        let mut locale = Locale::default();
        for (i, part) in id.split('-').enumerate() {
            if i == 0 {
                locale.language = part.to_string();
                continue;
            }
            match part.chars().count() {
                4 => locale.script = title_case(part),
                2 | 3 => locale.territory = part.to_uppercase(),
                _ => {}
            }
        }

        locale
    }

    /// Check whether all three parts are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.language.is_empty() && self.script.is_empty() && self.territory.is_empty()
    }

    /// Return the parent locale.
    ///
    /// Order:
    /// 1. Language - Script - Territory (e.g. "sr-Cyrl-RS")
    /// 2. Language - Script (e.g. "sr-Cyrl")
    /// 3. Language (e.g. "sr")
    /// 4. English ("en")
    /// 5. Empty locale ("")
    ///
    /// Locales with CLDR-irregular parents are resolved through an explicit
    /// override table first: the parent of "es-AR" is "es-419", and the
    /// parent of "sr-Latn" is "en".
    pub fn parent(&self) -> Locale {
        let id = self.to_string();
        if id.is_empty() || id == "en" {
            return Locale::default();
        }
        if let Ok(i) = PARENT_LOCALES.binary_search_by(|(child, _)| child.cmp(&id.as_str())) {
            return Locale::new(PARENT_LOCALES[i].1);
        }

        if !self.territory.is_empty() {
            Locale {
                language: self.language.clone(),
                script: self.script.clone(),
                territory: String::new(),
            }
        } else if !self.script.is_empty() {
            Locale {
                language: self.language.clone(),
                script: String::new(),
                territory: String::new(),
            }
        } else {
            Locale {
                language: "en".to_string(),
                script: String::new(),
                territory: String::new(),
            }
        }
    }
}

impl fmt::Display for Locale {
    /// Canonical form: language["-"script]["-"territory], empty parts omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.script.is_empty() {
            write!(f, "-{}", self.script)?;
        }
        if !self.territory.is_empty() {
            write!(f, "-{}", self.territory)?;
        }
        Ok(())
    }
}

impl From<&str> for Locale {
    fn from(id: &str) -> Self {
        Locale::new(id)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LocaleVisitor;

        impl de::Visitor<'_> for LocaleVisitor {
            type Value = Locale;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a locale identifier string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Locale, E> {
                Ok(Locale::new(v))
            }
        }

        deserializer.deserialize_str(LocaleVisitor)
    }
}

/// Uppercase the first character of an already-lowercased subtag.
fn title_case(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================
