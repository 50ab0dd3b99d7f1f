//! Text encoding for the standard-14 fonts.
//!
//! The page fonts declare `WinAnsiEncoding`, so every string drawn with
//! `Tj` has to be converted from UTF-8 to single WinAnsi bytes.

/// Byte used for characters WinAnsi cannot represent.
const REPLACEMENT: u8 = b'?';

/// Encodes `text` as WinAnsi (Windows-1252) bytes.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        // Latin-1 upper half is shared with WinAnsi.
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '\u{20ac}' => 0x80,
        '\u{2026}' => 0x85,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2122}' => 0x99,
        _ => REPLACEMENT,
    }
}
