//! Jamo tables and Unicode constants for Hangul syllable arithmetic.
//!
//! Precomposed syllables occupy `U+AC00..=U+D7A3` and are laid out as
//!
//! ```text
//! syllable = 0xAC00 + (initial * 21 + medial) * 28 + final
//! ```
//!
//! where `final == 0` means the block has no final consonant. The jamo
//! themselves are expressed as Hangul Compatibility Jamo (`U+3131..=U+3163`),
//! which is what users see when typing a single consonant or vowel.

/// First precomposed syllable (가).
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed syllable (힣).
pub const SYLLABLE_LAST: u32 = 0xD7A3;

pub(crate) const MEDIAL_COUNT: u32 = 21;
pub(crate) const FINAL_COUNT: u32 = 28;

/// First compatibility consonant (ㄱ).
pub(crate) const COMPAT_CONSONANT_FIRST: u32 = 0x3131;
/// Last compatibility consonant (ㅎ).
pub(crate) const COMPAT_CONSONANT_LAST: u32 = 0x314E;
/// First compatibility vowel (ㅏ).
pub(crate) const COMPAT_VOWEL_FIRST: u32 = 0x314F;
/// Last modern compatibility vowel (ㅣ).
pub(crate) const COMPAT_VOWEL_LAST: u32 = 0x3163;

// Conjoining jamo (as produced by NFD normalization).
pub(crate) const CONJOINING_INITIAL_FIRST: u32 = 0x1100;
pub(crate) const CONJOINING_MEDIAL_FIRST: u32 = 0x1161;
pub(crate) const CONJOINING_FINAL_FIRST: u32 = 0x11A8;

/// Initial consonants in syllable-index order.
pub(crate) const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Medial vowels in syllable-index order.
pub(crate) const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Final consonants in syllable-index order, starting at index 1.
pub(crate) const FINALS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Compound jamo and the two basic jamo they are written with.
///
/// Covers consonant clusters that only occur as finals, and compound vowels.
/// Tense consonants (`ㄲ`, `ㄸ`, `ㅃ`, `ㅆ`, `ㅉ`) are single jamo and never
/// split.
pub(crate) const COMPOUNDS: [(char, [char; 2]); 18] = [
    // final clusters
    ('ㄳ', ['ㄱ', 'ㅅ']),
    ('ㄵ', ['ㄴ', 'ㅈ']),
    ('ㄶ', ['ㄴ', 'ㅎ']),
    ('ㄺ', ['ㄹ', 'ㄱ']),
    ('ㄻ', ['ㄹ', 'ㅁ']),
    ('ㄼ', ['ㄹ', 'ㅂ']),
    ('ㄽ', ['ㄹ', 'ㅅ']),
    ('ㄾ', ['ㄹ', 'ㅌ']),
    ('ㄿ', ['ㄹ', 'ㅍ']),
    ('ㅀ', ['ㄹ', 'ㅎ']),
    ('ㅄ', ['ㅂ', 'ㅅ']),
    // compound vowels
    ('ㅘ', ['ㅗ', 'ㅏ']),
    ('ㅙ', ['ㅗ', 'ㅐ']),
    ('ㅚ', ['ㅗ', 'ㅣ']),
    ('ㅝ', ['ㅜ', 'ㅓ']),
    ('ㅞ', ['ㅜ', 'ㅔ']),
    ('ㅟ', ['ㅜ', 'ㅣ']),
    ('ㅢ', ['ㅡ', 'ㅣ']),
];

/// Split a compound jamo into its two basic parts.
#[inline]
pub(crate) fn split_compound(jamo: char) -> Option<[char; 2]> {
    COMPOUNDS
        .iter()
        .find(|(compound, _)| *compound == jamo)
        .map(|(_, parts)| *parts)
}

/// Combine two basic jamo into the compound they spell, if any.
#[inline]
pub(crate) fn combine(first: char, second: char) -> Option<char> {
    COMPOUNDS
        .iter()
        .find(|(_, parts)| parts[0] == first && parts[1] == second)
        .map(|(compound, _)| *compound)
}

#[inline]
pub(crate) fn initial_index(jamo: char) -> Option<u32> {
    INITIALS.iter().position(|&c| c == jamo).map(|i| i as u32)
}

#[inline]
pub(crate) fn medial_index(jamo: char) -> Option<u32> {
    MEDIALS.iter().position(|&c| c == jamo).map(|i| i as u32)
}

/// Index of a final consonant, counting from 1 (0 is "no final").
#[inline]
pub(crate) fn final_index(jamo: char) -> Option<u32> {
    FINALS.iter().position(|&c| c == jamo).map(|i| i as u32 + 1)
}
