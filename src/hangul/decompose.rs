//! Syllable decomposition into basic jamo.

use super::tables::{
    split_compound, CONJOINING_FINAL_FIRST, CONJOINING_INITIAL_FIRST, CONJOINING_MEDIAL_FIRST,
    FINALS, FINAL_COUNT, INITIALS, MEDIALS, MEDIAL_COUNT, SYLLABLE_BASE, SYLLABLE_LAST,
};
use super::{is_syllable, JamoGroup};

/// Split a precomposed syllable into `(initial, medial, final)`.
///
/// Compound jamo are returned as-is (`'꽉'` yields `('ㄲ', 'ㅘ', Some('ㄱ'))`);
/// use [`disassemble`] to get basic jamo. Returns `None` for anything that is
/// not a precomposed syllable.
///
/// # Example
///
/// ```rust
/// use jamo_match::hangul::decompose_syllable;
///
/// assert_eq!(decompose_syllable('닭'), Some(('ㄷ', 'ㅏ', Some('ㄺ'))));
/// assert_eq!(decompose_syllable('가'), Some(('ㄱ', 'ㅏ', None)));
/// assert_eq!(decompose_syllable('a'), None);
/// ```
pub fn decompose_syllable(syllable: char) -> Option<(char, char, Option<char>)> {
    if !is_syllable(syllable) {
        return None;
    }

    let index = syllable as u32 - SYLLABLE_BASE;
    debug_assert!(syllable as u32 <= SYLLABLE_LAST);

    let initial = INITIALS[(index / (MEDIAL_COUNT * FINAL_COUNT)) as usize];
    let medial = MEDIALS[((index % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT) as usize];
    let final_jamo = match index % FINAL_COUNT {
        0 => None,
        t => Some(FINALS[t as usize - 1]),
    };

    Some((initial, medial, final_jamo))
}

/// Map a conjoining jamo (`U+1100` block, as produced by NFD) to its
/// compatibility form.
fn conjoining_to_compat(c: char) -> Option<char> {
    let code = c as u32;
    if (CONJOINING_INITIAL_FIRST..CONJOINING_INITIAL_FIRST + INITIALS.len() as u32).contains(&code)
    {
        return Some(INITIALS[(code - CONJOINING_INITIAL_FIRST) as usize]);
    }
    if (CONJOINING_MEDIAL_FIRST..CONJOINING_MEDIAL_FIRST + MEDIALS.len() as u32).contains(&code) {
        return Some(MEDIALS[(code - CONJOINING_MEDIAL_FIRST) as usize]);
    }
    if (CONJOINING_FINAL_FIRST..CONJOINING_FINAL_FIRST + FINALS.len() as u32).contains(&code) {
        return Some(FINALS[(code - CONJOINING_FINAL_FIRST) as usize]);
    }
    None
}

#[inline]
fn push_basic(jamo: char, out: &mut JamoGroup) {
    match split_compound(jamo) {
        Some([first, second]) => {
            out.push(first);
            out.push(second);
        }
        None => out.push(jamo),
    }
}

/// Disassemble a single character into basic jamo.
///
/// Syllables yield 2 to 5 jamo, standalone clusters and compound vowels
/// yield 2, everything else (tense consonants included) yields the character
/// itself.
pub fn disassemble_char(c: char) -> JamoGroup {
    let mut group = JamoGroup::new();

    if let Some((initial, medial, final_jamo)) = decompose_syllable(c) {
        push_basic(initial, &mut group);
        push_basic(medial, &mut group);
        if let Some(final_jamo) = final_jamo {
            push_basic(final_jamo, &mut group);
        }
    } else if let Some(jamo) = conjoining_to_compat(c) {
        push_basic(jamo, &mut group);
    } else {
        push_basic(c, &mut group);
    }

    group
}

/// Disassemble text into one flat sequence of basic jamo.
///
/// Every Hangul syllable is replaced by its initial, medial and final jamo,
/// final clusters and compound vowels are split into their basic parts
/// (`ㄺ → ㄹㄱ`, `ㅘ → ㅗㅏ`). Tense consonants stay whole (`ㄲ` is one
/// symbol). Characters outside the Hangul blocks pass through unchanged, in
/// order.
///
/// # Example
///
/// ```rust
/// use jamo_match::hangul::disassemble;
///
/// assert_eq!(disassemble("기린"), vec!['ㄱ', 'ㅣ', 'ㄹ', 'ㅣ', 'ㄴ']);
/// assert_eq!(disassemble("꽉"), vec!['ㄲ', 'ㅗ', 'ㅏ', 'ㄱ']);
/// assert_eq!(disassemble("Saja"), vec!['S', 'a', 'j', 'a']);
/// ```
pub fn disassemble(text: &str) -> Vec<char> {
    let mut jamo = Vec::with_capacity(text.len());
    for c in text.chars() {
        jamo.extend(disassemble_char(c));
    }
    jamo
}

/// Disassemble text keeping one group of jamo per input character.
///
/// ```rust
/// use jamo_match::hangul::disassemble_grouped;
///
/// let groups = disassemble_grouped("사자");
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].as_slice(), &['ㅅ', 'ㅏ']);
/// ```
pub fn disassemble_grouped(text: &str) -> Vec<JamoGroup> {
    text.chars().map(disassemble_char).collect()
}
