// src/barcode.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ScanError;
use crate::types::ParsedScan;

const CYRILLIC_UPPER_BASE: u32 = 0x410;
const LATIN_UPPER_BASE: u32 = 0x41;

// Serial number, optionally one space and an http(s) link. Anchored on both ends.
static SCAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9]+)(?: (https?://\S+))?$").expect("scan pattern is valid")
});

/// Shifts every Cyrillic letter (А-Я, а-я, Ё, ё) by the fixed offset
/// `0x410 - 0x41`. Every other character passes through unchanged.
///
/// The same subtrahend is used for both cases, so the result is positional
/// rather than phonetic: `А` becomes `A` but `я` lands on U+0080.
pub fn normalize(raw: &str) -> String {
    raw.chars().map(shift_cyrillic).collect()
}

fn shift_cyrillic(ch: char) -> char {
    if !is_cyrillic_letter(ch) {
        return ch;
    }
    let shifted = u32::from(ch) - CYRILLIC_UPPER_BASE + LATIN_UPPER_BASE;
    char::from_u32(shifted).unwrap_or(ch)
}

fn is_cyrillic_letter(ch: char) -> bool {
    matches!(ch, 'А'..='я' | 'Ё' | 'ё')
}

/// Splits scanned text into a serial number and an optional link.
///
/// # Errors
///
/// Returns [`ScanError::Unparseable`] when the whole text does not match;
/// nothing is extracted from a partial match.
pub fn parse(text: &str) -> Result<ParsedScan, ScanError> {
    let captures = SCAN_PATTERN
        .captures(text)
        .ok_or_else(|| ScanError::Unparseable(text.to_string()))?;

    Ok(ParsedScan {
        serial_number: captures[1].to_string(),
        link: captures.get(2).map(|m| m.as_str().to_string()),
    })
}
