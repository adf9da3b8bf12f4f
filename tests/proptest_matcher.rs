//! Property-based tests for the layered guess matcher.
//!
//! Properties checked:
//!
//! 1. **Identity**: a guess equal to the word is an exact match
//! 2. **Synonyms**: a guess equal to a synonym (but not the word) scores 1.0
//! 3. **Normalization**: whitespace and ASCII case variants score 0.95
//! 4. **Fuzzy layer**: otherwise a match happens iff similarity >= threshold
//! 5. **Similarity**: bounded, symmetric, 1.0 only for equal jamo sequences
//! 6. **Jamo round trip**: assembling then disassembling returns the input

use jamo_match::distance::{normalized_similarity, sequence_distance};
use jamo_match::hangul::{assemble, disassemble, is_jamo};
use jamo_match::matcher::{match_guess, similarity, MatchType};
use jamo_match::word_bank::WordEntry;
use proptest::prelude::*;

// Jamo that disassembly never splits further
const BASIC_JAMO: &[char] = &[
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ', 'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅛ', 'ㅜ', 'ㅠ', 'ㅡ',
    'ㅣ',
];

// Any precomposed syllable
fn arb_syllable() -> impl Strategy<Value = char> {
    (0xAC00u32..=0xD7A3).prop_map(|code| char::from_u32(code).unwrap())
}

fn arb_hangul_word() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_syllable(), 1..6).prop_map(|chars| chars.into_iter().collect())
}

// Syllables without a final consonant always read back the same way
fn arb_open_syllable_word() -> impl Strategy<Value = String> {
    prop::collection::vec((0u32..19, 0u32..21), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(l, v)| char::from_u32(0xAC00 + (l * 21 + v) * 28).unwrap())
            .collect()
    })
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z가-힣]{1,8}").unwrap()
}

fn arb_any_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..12).prop_map(|chars| chars.into_iter().collect())
}

fn arb_jamo_sequence() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(BASIC_JAMO), 0..16)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn exact_match_for_identical_guess(word in arb_any_string()) {
        let result = match_guess(&word, &WordEntry::new("w", word.clone()));
        prop_assert!(result.is_match);
        prop_assert_eq!(result.match_type, MatchType::Exact);
        prop_assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn synonym_match_scores_full_confidence(word in arb_word(), synonym in arb_word()) {
        prop_assume!(word != synonym);
        let target = WordEntry::new("w", word).with_synonyms([synonym.clone()]);

        let result = match_guess(&synonym, &target);
        prop_assert_eq!(result.match_type, MatchType::Synonym);
        prop_assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn whitespace_and_case_variants_are_normalized(
        word in arb_word(),
        spaces in prop::collection::vec(any::<bool>(), 8),
    ) {
        // Leading space guarantees the variant differs from the word
        let mut variant = String::from(" ");
        for (c, space) in word.chars().zip(spaces.iter().cycle()) {
            variant.extend(c.to_uppercase());
            if *space {
                variant.push('\t');
            }
        }

        let result = match_guess(&variant, &WordEntry::new("w", word));
        prop_assert_eq!(result.match_type, MatchType::Normalized);
        prop_assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn fuzzy_layer_follows_threshold(guess in arb_hangul_word(), word in arb_hangul_word()) {
        prop_assume!(guess != word);
        let score = similarity(&guess, &word);

        let result = match_guess(&guess, &WordEntry::new("w", word));
        prop_assert_eq!(result.is_match, score >= 0.85);
        if result.is_match {
            prop_assert_eq!(result.match_type, MatchType::Fuzzy);
            prop_assert_eq!(result.confidence, score);
        } else {
            prop_assert_eq!(result.match_type, MatchType::None);
            prop_assert_eq!(result.confidence, 0.0);
        }
    }

    #[test]
    fn similarity_is_bounded_and_symmetric(a in arb_any_string(), b in arb_any_string()) {
        let ab = similarity(&a, &b);
        let ba = similarity(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn similarity_is_one_only_for_equal_jamo(a in arb_hangul_word(), b in arb_hangul_word()) {
        let equal = disassemble(&a) == disassemble(&b);
        prop_assert_eq!(similarity(&a, &b) == 1.0, equal);
    }

    #[test]
    fn similarity_decreases_with_distance(len in 1usize..40, d1 in 0usize..40, d2 in 0usize..40) {
        let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        prop_assert!(normalized_similarity(near, len, len) >= normalized_similarity(far, len, len));
    }

    #[test]
    fn distance_is_symmetric(a in arb_jamo_sequence(), b in arb_jamo_sequence()) {
        prop_assert_eq!(sequence_distance(&a, &b), sequence_distance(&b, &a));
    }

    #[test]
    fn syllables_split_into_basic_jamo(word in arb_hangul_word()) {
        let jamo = disassemble(&word);
        prop_assert!(jamo.iter().all(|&c| is_jamo(c)));
        prop_assert!(jamo.len() >= 2 * word.chars().count());
        prop_assert!(jamo.len() <= 5 * word.chars().count());
        // Basic jamo never re-split
        let again: Vec<char> = jamo.iter().flat_map(|c| disassemble(&c.to_string())).collect();
        prop_assert_eq!(again, jamo);
    }

    #[test]
    fn assembled_jamo_disassemble_back(jamo in arb_jamo_sequence()) {
        prop_assert_eq!(disassemble(&assemble(&jamo)), jamo);
    }

    #[test]
    fn open_syllables_round_trip(word in arb_open_syllable_word()) {
        prop_assert_eq!(assemble(&disassemble(&word)), word);
    }
}
