//! UI language

use serde::{Deserialize, Serialize};

/// Supported languages. Arabic is the default and reads right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

/// Text direction of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Language {
    /// ISO 639-1 code, as used in translation language pairs
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }

    /// The other language
    pub fn toggle(&self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_arabic_rtl() {
        let lang = Language::default();
        assert_eq!(lang, Language::Ar);
        assert_eq!(lang.direction(), Direction::Rtl);
        assert_eq!(lang.toggle().direction(), Direction::Ltr);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for lang in [Language::Ar, Language::En] {
            assert_eq!(lang.toggle().toggle(), lang);
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code(" ar "), Some(Language::Ar));
        assert_eq!(Language::from_code("fr"), None);
    }
}
