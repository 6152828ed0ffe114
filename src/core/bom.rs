//! Supported encodings and their BOM byte signatures.

use std::fmt;
use std::str::FromStr;

use crate::core::errors::Error;

/// UTF-8 BOM: EF BB BF
pub const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
/// UTF-16LE BOM: FF FE
pub const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
/// UTF-16BE BOM: FE FF
pub const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];

/// Encodings whose BOM this tool recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl BomEncoding {
    /// Returns the fixed byte signature marking a BOM for this encoding.
    pub fn signature(self) -> &'static [u8] {
        match self {
            BomEncoding::Utf8 => BOM_UTF8,
            BomEncoding::Utf16Le => BOM_UTF16_LE,
            BomEncoding::Utf16Be => BOM_UTF16_BE,
        }
    }
}

impl FromStr for BomEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf-8" => Ok(BomEncoding::Utf8),
            "utf-16le" => Ok(BomEncoding::Utf16Le),
            "utf-16be" => Ok(BomEncoding::Utf16Be),
            _ => Err(Error::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for BomEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BomEncoding::Utf8 => "utf-8",
            BomEncoding::Utf16Le => "utf-16le",
            BomEncoding::Utf16Be => "utf-16be",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signatures_match_the_unicode_standard() {
        assert_eq!(BomEncoding::Utf8.signature(), &[0xEF, 0xBB, 0xBF]);
        assert_eq!(BomEncoding::Utf16Le.signature(), &[0xFF, 0xFE]);
        assert_eq!(BomEncoding::Utf16Be.signature(), &[0xFE, 0xFF]);
    }

    #[test]
    fn parses_supported_identifiers() {
        assert_eq!("utf-8".parse::<BomEncoding>().unwrap(), BomEncoding::Utf8);
        assert_eq!("utf-16le".parse::<BomEncoding>().unwrap(), BomEncoding::Utf16Le);
        assert_eq!("utf-16be".parse::<BomEncoding>().unwrap(), BomEncoding::Utf16Be);
        // Case-insensitive, same as the other CLI string options
        assert_eq!("UTF-8".parse::<BomEncoding>().unwrap(), BomEncoding::Utf8);
    }

    #[test]
    fn rejects_unknown_identifiers() {
        for name in ["utf-32", "windows-1251", "ascii", ""] {
            match name.parse::<BomEncoding>() {
                Err(Error::UnsupportedEncoding(reported)) => assert_eq!(reported, name),
                other => panic!("expected UnsupportedEncoding for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn display_uses_cli_identifiers() {
        assert_eq!(BomEncoding::Utf8.to_string(), "utf-8");
        assert_eq!(BomEncoding::Utf16Le.to_string(), "utf-16le");
        assert_eq!(BomEncoding::Utf16Be.to_string(), "utf-16be");
    }
}
