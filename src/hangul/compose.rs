//! Reassembly of jamo sequences into syllable blocks.
//!
//! Assembly reads a flat jamo sequence the way a Korean input method does:
//!
//! - a consonant directly before a vowel opens the next syllable;
//! - otherwise the preceding syllable takes up to two consonants as its final,
//!   combining them into a cluster (`ㄺ`, `ㅄ`, ...) when they form one;
//! - vowel pairs that spell a compound vowel combine (`ㅗㅏ → ㅘ`);
//! - anything that cannot join a syllable is emitted as a standalone jamo.
//!
//! Tense consonants arrive as single jamo (`ㄲ`), so two plain consonants are
//! never merged into one (`ㄱㄱ` stays two jamo). The reassembled string
//! always disassembles back into the same jamo.

use super::tables::{
    combine, final_index, initial_index, medial_index, FINAL_COUNT, MEDIAL_COUNT, SYLLABLE_BASE,
};
use super::{is_consonant, is_vowel};

/// Compose a syllable block from its jamo.
///
/// `initial`, `medial` and `final_jamo` must be jamo that are valid in their
/// position (compound vowels and tense or clustered consonants included).
/// Returns `None` otherwise.
///
/// # Example
///
/// ```rust
/// use jamo_match::hangul::compose_syllable;
///
/// assert_eq!(compose_syllable('ㄷ', 'ㅏ', Some('ㄺ')), Some('닭'));
/// assert_eq!(compose_syllable('ㄱ', 'ㅏ', None), Some('가'));
/// assert_eq!(compose_syllable('ㄳ', 'ㅏ', None), None);
/// ```
pub fn compose_syllable(initial: char, medial: char, final_jamo: Option<char>) -> Option<char> {
    let l = initial_index(initial)?;
    let v = medial_index(medial)?;
    let t = match final_jamo {
        Some(jamo) => final_index(jamo)?,
        None => 0,
    };
    char::from_u32(SYLLABLE_BASE + (l * MEDIAL_COUNT + v) * FINAL_COUNT + t)
}

#[inline]
fn cluster_final(first: char, second: char) -> Option<char> {
    combine(first, second).filter(|&c| final_index(c).is_some())
}

/// Number of consonants from `run` that close the open syllable.
fn final_len(run: &[char], before_vowel: bool) -> usize {
    let available = if before_vowel { run.len() - 1 } else { run.len() };
    if available == 0 {
        return 0;
    }
    if available >= 2 && cluster_final(run[0], run[1]).is_some() {
        return 2;
    }
    if final_index(run[0]).is_some() {
        1
    } else {
        0
    }
}

/// Push consonants that belong to no syllable, pairing them up when they
/// spell a compound consonant.
fn push_standalone(consonants: &[char], out: &mut String) {
    let mut i = 0;
    while i < consonants.len() {
        if let Some(&next) = consonants.get(i + 1) {
            if let Some(compound) = combine(consonants[i], next) {
                out.push(compound);
                i += 2;
                continue;
            }
        }
        out.push(consonants[i]);
        i += 1;
    }
}

/// Read a medial vowel at `pos`, combining a compound vowel when possible.
fn read_medial(jamo: &[char], pos: usize) -> (char, usize) {
    let vowel = jamo[pos];
    if let Some(&next) = jamo.get(pos + 1) {
        if let Some(compound) = combine(vowel, next) {
            return (compound, 2);
        }
    }
    (vowel, 1)
}

/// A syllable that has an initial and a medial and may still take a final.
#[derive(Debug, Clone, Copy)]
struct OpenSyllable {
    initial: char,
    medial: char,
}

impl OpenSyllable {
    fn close(self, final_jamo: Option<char>, out: &mut String) {
        match compose_syllable(self.initial, self.medial, final_jamo) {
            Some(syllable) => out.push(syllable),
            None => {
                // Unreachable for jamo coming out of the tables; keep the input intact.
                out.push(self.initial);
                out.push(self.medial);
                if let Some(final_jamo) = final_jamo {
                    out.push(final_jamo);
                }
            }
        }
    }
}

/// Assemble a jamo sequence into text.
///
/// This is the inverse of [`disassemble`](super::disassemble): basic jamo are
/// grouped into syllable blocks (see the module documentation for how
/// ambiguous runs are read), and characters that are not jamo pass through.
///
/// # Example
///
/// ```rust
/// use jamo_match::hangul::{assemble, disassemble};
///
/// assert_eq!(assemble(&['ㄱ', 'ㅣ', 'ㄹ', 'ㅣ', 'ㄴ']), "기린");
/// assert_eq!(assemble(&disassemble("괜찮아")), "괜찮아");
/// assert_eq!(assemble(&['ㄱ', 'ㅅ']), "ㄳ");
/// ```
pub fn assemble(jamo: &[char]) -> String {
    let mut out = String::with_capacity(jamo.len() * 2);
    let mut open: Option<OpenSyllable> = None;
    let mut i = 0;

    while i < jamo.len() {
        let c = jamo[i];

        if is_consonant(c) {
            let end = jamo[i..]
                .iter()
                .position(|&j| !is_consonant(j))
                .map_or(jamo.len(), |offset| i + offset);
            let run = &jamo[i..end];
            let before_vowel = jamo.get(end).is_some_and(|&v| is_vowel(v));

            let mut rest = run;
            if let Some(syllable) = open.take() {
                let taken = final_len(run, before_vowel);
                let final_jamo = match taken {
                    0 => None,
                    1 => Some(run[0]),
                    _ => cluster_final(run[0], run[1]),
                };
                syllable.close(final_jamo, &mut out);
                rest = &run[taken..];
            }

            if !before_vowel {
                push_standalone(rest, &mut out);
                i = end;
                continue;
            }

            let (initial, leading) = match rest.split_last() {
                Some((&initial, leading)) => (initial, leading),
                None => {
                    i = end;
                    continue;
                }
            };
            push_standalone(leading, &mut out);

            if initial_index(initial).is_none() {
                // e.g. a standalone cluster like ㄳ in front of a vowel
                out.push(initial);
                i = end;
                continue;
            }

            let (medial, medial_len) = read_medial(jamo, end);
            open = Some(OpenSyllable { initial, medial });
            i = end + medial_len;
        } else if is_vowel(c) {
            if let Some(syllable) = open.take() {
                syllable.close(None, &mut out);
            }
            let (vowel, len) = read_medial(jamo, i);
            out.push(vowel);
            i += len;
        } else {
            if let Some(syllable) = open.take() {
                syllable.close(None, &mut out);
            }
            out.push(c);
            i += 1;
        }
    }

    if let Some(syllable) = open {
        syllable.close(None, &mut out);
    }

    out
}
