//! Hangul decomposition into jamo and reassembly into syllable blocks.
//!
//! Each Hangul syllable block is built from two or three jamo: an initial
//! consonant, a medial vowel and an optional final consonant. Some of those
//! jamo are themselves compounds of two basic jamo (final clusters like `ㄺ`,
//! compound vowels like `ㅘ`). Fuzzy matching works on the split sequence, so
//! that a one-stroke slip costs one edit instead of a whole block. Tense
//! consonants like `ㄲ` are single jamo and stay whole.
//!
//! # Usage
//!
//! ```rust
//! use jamo_match::hangul::{assemble, disassemble};
//!
//! let jamo = disassemble("닭");
//! assert_eq!(jamo, vec!['ㄷ', 'ㅏ', 'ㄹ', 'ㄱ']);
//! assert_eq!(assemble(&jamo), "닭");
//! ```
//!
//! # Representation
//!
//! Jamo are returned as Hangul Compatibility Jamo (`U+3131..=U+3163`). Input
//! in conjoining form (`U+1100` block, e.g. after NFD normalization) is mapped
//! onto the same symbols, so precomposed and decomposed spellings of a word
//! disassemble identically.

mod compose;
mod decompose;
mod tables;

use smallvec::SmallVec;

pub use compose::{assemble, compose_syllable};
pub use decompose::{decompose_syllable, disassemble, disassemble_char, disassemble_grouped};
pub use tables::{SYLLABLE_BASE, SYLLABLE_LAST};

use tables::{
    COMPAT_CONSONANT_FIRST, COMPAT_CONSONANT_LAST, COMPAT_VOWEL_FIRST, COMPAT_VOWEL_LAST,
};

/// Jamo of a single character; a syllable never needs more than five.
pub type JamoGroup = SmallVec<[char; 5]>;

/// Returns true for a precomposed Hangul syllable (`가..=힣`).
#[inline]
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Returns true for a modern compatibility consonant (`ㄱ..=ㅎ`), compound
/// consonants included.
#[inline]
pub fn is_consonant(c: char) -> bool {
    (COMPAT_CONSONANT_FIRST..=COMPAT_CONSONANT_LAST).contains(&(c as u32))
}

/// Returns true for a modern compatibility vowel (`ㅏ..=ㅣ`).
#[inline]
pub fn is_vowel(c: char) -> bool {
    (COMPAT_VOWEL_FIRST..=COMPAT_VOWEL_LAST).contains(&(c as u32))
}

/// Returns true for any modern compatibility jamo.
#[inline]
pub fn is_jamo(c: char) -> bool {
    is_consonant(c) || is_vowel(c)
}

/// Returns true if the text contains at least one syllable or jamo.
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(|c| is_syllable(c) || is_jamo(c))
}
