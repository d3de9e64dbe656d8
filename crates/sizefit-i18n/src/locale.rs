use std::fmt;
use std::str::FromStr;

/// Supported display locales. English is the default and the fallback for
/// every lookup that misses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Ordered list of supported locales, default first.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Zh];

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Parse a locale tag, case-insensitive and tolerant of region
    /// subtags (`zh-CN` parses as `zh`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let language = normalized.split(['-', '_']).next().unwrap_or("");
        match language {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}
