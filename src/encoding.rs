//! Text encodings supported for report input and output.
//!
//! The upstream system exports either UTF-8 or Latin-1 files, so only
//! those labels are accepted. Latin-1 maps every byte straight to the
//! code point of the same value, which makes decoding total; encoding
//! back fails for characters above U+00FF.

use crate::error::{ReportError, Result};
use std::str::FromStr;

/// A supported text encoding, selected by its CLI label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8 (labels `utf-8`, `utf8`)
    #[default]
    Utf8,

    /// ISO-8859-1 (labels `latin-1`, `latin1`, `iso-8859-1`)
    Latin1,
}

impl Encoding {
    /// Resolves a user-supplied encoding label, case-insensitively.
    pub fn from_label(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Encoding::Latin1),
            _ => Err(ReportError::UnsupportedEncoding(label.to_string())),
        }
    }

    /// Canonical name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "latin-1",
        }
    }

    /// Decodes raw file bytes into text.
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes).map_err(|e| ReportError::Decode {
                encoding: self.name(),
                detail: e.utf8_error().to_string(),
            }),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    /// Encodes text into the bytes written to disk.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(u32::from(c)).map_err(|_| ReportError::Encode {
                        encoding: self.name(),
                        character: c,
                    })
                })
                .collect(),
        }
    }
}

impl FromStr for Encoding {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        Encoding::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_resolve_case_insensitively() {
        assert_eq!(Encoding::from_label("utf-8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::from_label("UTF8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::from_label("latin-1").unwrap(), Encoding::Latin1);
        assert_eq!(Encoding::from_label("Latin1").unwrap(), Encoding::Latin1);
        assert_eq!(
            Encoding::from_label("ISO-8859-1").unwrap(),
            Encoding::Latin1
        );
    }

    #[test]
    fn test_from_str_delegates_to_labels() {
        assert_eq!("utf8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert!("koi8-r".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = Encoding::from_label("utf-16").unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedEncoding(label) if label == "utf-16"));
    }

    #[test]
    fn test_latin1_round_trip() {
        let encoding = Encoding::Latin1;
        // "Nota crédito" in Latin-1: é is a single 0xE9 byte.
        let bytes = b"Nota cr\xe9dito".to_vec();
        let text = encoding.decode(bytes.clone()).unwrap();
        assert_eq!(text, "Nota crédito");
        assert_eq!(encoding.encode(&text).unwrap(), bytes);
    }

    #[test]
    fn test_latin1_rejects_wide_characters() {
        let err = Encoding::Latin1.encode("€").unwrap_err();
        assert!(matches!(
            err,
            ReportError::Encode {
                character: '€',
                ..
            }
        ));
    }

    #[test]
    fn test_utf8_rejects_invalid_bytes() {
        let err = Encoding::Utf8.decode(vec![0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, ReportError::Decode { .. }));
    }

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(Encoding::default(), Encoding::Utf8);
    }
}
