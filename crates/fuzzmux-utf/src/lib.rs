#![warn(clippy::pedantic)]

//! Width-generic UTF decoding iterators — the unit under test for the
//! fuzzmux harness.
//!
//! Each iterator walks a window of typed code units (`u8`, `u16` or
//! `u32`) and yields `char`s, replacing every ill-formed subsequence
//! with U+FFFD. Iteration terminates for all inputs and never indexes
//! outside the window; that is the property the fuzz targets hammer
//! on. [`transcoded_len`] gives the code-unit count of the decoded
//! text at a chosen output width.

/// Output code-unit width for [`transcoded_len`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    /// UTF-8 code units (1 byte each).
    One,
    /// UTF-16 code units (2 bytes each).
    Two,
    /// UTF-32 code units (4 bytes each).
    Four,
}

impl Width {
    /// Code units `c` occupies at this width.
    #[must_use]
    pub fn units(self, c: char) -> usize {
        match self {
            Self::One => c.len_utf8(),
            Self::Two => c.len_utf16(),
            Self::Four => 1,
        }
    }
}

/// Total code units the decoded text occupies when re-encoded at
/// `width`.
pub fn transcoded_len<I>(chars: I, width: Width) -> usize
where
    I: IntoIterator<Item = char>,
{
    chars.into_iter().map(|c| width.units(c)).sum()
}

/// Lossy UTF-8 decoder over a byte window.
///
/// Ill-formed input follows the maximal-subsequence convention: the
/// longest prefix of a truncated or broken sequence is consumed and
/// replaced by a single U+FFFD, and decoding resumes at the first
/// byte that was not part of it.
#[derive(Clone, Debug)]
pub struct Utf8Chars<'a> {
    rest: &'a [u8],
}

impl<'a> Utf8Chars<'a> {
    #[must_use]
    pub fn new(units: &'a [u8]) -> Self {
        Self { rest: units }
    }
}

impl Iterator for Utf8Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let &lead = self.rest.first()?;

        // (continuation count, valid range for the first continuation
        // byte). The tightened first-byte ranges reject overlongs
        // (E0, F0), surrogates (ED) and codepoints above U+10FFFF
        // (F4) without a separate scalar-value check afterwards.
        let (needed, lo, hi) = match lead {
            0x00..=0x7F => {
                self.rest = &self.rest[1..];
                return Some(char::from(lead));
            }
            0xC2..=0xDF => (1, 0x80, 0xBF),
            0xE0 => (2, 0xA0, 0xBF),
            0xE1..=0xEC | 0xEE..=0xEF => (2, 0x80, 0xBF),
            0xED => (2, 0x80, 0x9F),
            0xF0 => (3, 0x90, 0xBF),
            0xF1..=0xF3 => (3, 0x80, 0xBF),
            0xF4 => (3, 0x80, 0x8F),
            // Stray continuation byte, overlong lead (C0/C1) or
            // out-of-range lead (F5..FF)
            _ => {
                self.rest = &self.rest[1..];
                return Some(char::REPLACEMENT_CHARACTER);
            }
        };

        let mut cp = u32::from(lead) & (0x3F >> needed);
        let mut taken = 1;
        for i in 0..needed {
            let Some(&byte) = self.rest.get(taken) else {
                // Truncated sequence at the end of the window
                self.rest = &self.rest[taken..];
                return Some(char::REPLACEMENT_CHARACTER);
            };
            let (lo, hi) = if i == 0 { (lo, hi) } else { (0x80, 0xBF) };
            if byte < lo || byte > hi {
                // The offending byte is not consumed; it may start a
                // fresh sequence
                self.rest = &self.rest[taken..];
                return Some(char::REPLACEMENT_CHARACTER);
            }
            cp = (cp << 6) | u32::from(byte & 0x3F);
            taken += 1;
        }

        self.rest = &self.rest[taken..];
        // The range table above admits only valid scalar values
        Some(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}

/// Lossy UTF-16 decoder over a `u16` window.
///
/// Each unpaired surrogate decodes to one U+FFFD.
#[derive(Clone, Debug)]
pub struct Utf16Chars<'a> {
    rest: &'a [u16],
}

impl<'a> Utf16Chars<'a> {
    #[must_use]
    pub fn new(units: &'a [u16]) -> Self {
        Self { rest: units }
    }
}

impl Iterator for Utf16Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let (&unit, tail) = self.rest.split_first()?;

        if (0xD800..=0xDBFF).contains(&unit) {
            match tail.first() {
                Some(&low) if (0xDC00..=0xDFFF).contains(&low) => {
                    self.rest = &self.rest[2..];
                    let cp = 0x10000
                        + ((u32::from(unit) - 0xD800) << 10)
                        + (u32::from(low) - 0xDC00);
                    // Paired surrogates always form a valid scalar
                    Some(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
                }
                // High surrogate with no low surrogate after it
                _ => {
                    self.rest = tail;
                    Some(char::REPLACEMENT_CHARACTER)
                }
            }
        } else if (0xDC00..=0xDFFF).contains(&unit) {
            self.rest = tail;
            Some(char::REPLACEMENT_CHARACTER)
        } else {
            self.rest = tail;
            Some(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER))
        }
    }
}

/// Lossy UTF-32 decoder over a `u32` window.
///
/// Surrogate values and values above U+10FFFF decode to U+FFFD, one
/// per unit.
#[derive(Clone, Debug)]
pub struct Utf32Chars<'a> {
    rest: &'a [u32],
}

impl<'a> Utf32Chars<'a> {
    #[must_use]
    pub fn new(units: &'a [u32]) -> Self {
        Self { rest: units }
    }
}

impl Iterator for Utf32Chars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let (&unit, tail) = self.rest.split_first()?;
        self.rest = tail;
        Some(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER))
    }
}
