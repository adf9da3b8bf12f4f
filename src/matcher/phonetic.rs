//! Layered guess matching with jamo-level fuzziness.

use tracing::debug;

use crate::config::{self, MatcherConfig};
use crate::distance::sequence_similarity;
use crate::hangul::disassemble;
use crate::word_bank::WordEntry;

use super::{GuessMatcher, MatchResult};

/// Byte order mark, often left at the start of pasted text.
const BYTE_ORDER_MARK: char = '\u{FEFF}';
/// Next line (NEL), a legacy control that is kept as text.
const NEXT_LINE: char = '\u{0085}';

/// Whitespace as removed by normalization: Unicode white space plus the byte
/// order mark, except NEL.
#[inline]
fn is_separator(c: char) -> bool {
    c == BYTE_ORDER_MARK || (c.is_whitespace() && c != NEXT_LINE)
}

/// Remove all whitespace and lower-case the rest.
pub(crate) fn normalize(text: &str) -> String {
    text.chars()
        .filter(|&c| !is_separator(c))
        .collect::<String>()
        .to_lowercase()
}

/// Jamo-level similarity between two strings.
///
/// Both strings are disassembled into basic jamo, and the Levenshtein
/// distance between the two sequences is turned into a score in `[0, 1]`.
/// Two empty strings are fully similar.
///
/// # Example
///
/// ```rust
/// use jamo_match::matcher::similarity;
///
/// // ㄱㅣㄹㅣㄴ vs ㄱㅡㄹㅣㄴ: one substitution out of five jamo
/// assert_eq!(similarity("그린", "기린"), 0.8);
/// assert_eq!(similarity("", ""), 1.0);
/// ```
pub fn similarity(guess: &str, target: &str) -> f64 {
    sequence_similarity(&disassemble(guess), &disassemble(target))
}

/// Decides whether a guess names a target word.
///
/// Layers are tried from the most literal to the most lenient, and the first
/// one that accepts the guess determines the verdict:
///
/// 1. **exact**: the guess is the canonical word, byte for byte
/// 2. **synonym**: the guess is one of the synonyms, byte for byte
/// 3. **normalized**: equal to the word, then to each synonym, after removing
///    whitespace and lower-casing
/// 4. **fuzzy**: jamo similarity with the word, then with each synonym, is at
///    least the configured threshold
///
/// The matcher holds only its configuration, so one instance can be shared
/// freely across threads.
///
/// # Example
///
/// ```rust
/// use jamo_match::matcher::{MatchType, PhoneticMatcher};
/// use jamo_match::word_bank::WordEntry;
///
/// let matcher = PhoneticMatcher::new();
/// let tiger = WordEntry::new("a3", "호랑이").with_synonyms(["범"]);
///
/// assert_eq!(matcher.match_guess("호랑이", &tiger).match_type, MatchType::Exact);
/// assert_eq!(matcher.match_guess("범", &tiger).match_type, MatchType::Synonym);
/// assert_eq!(matcher.match_guess("호 랑 이", &tiger).match_type, MatchType::Normalized);
///
/// let close = matcher.match_guess("호랭이", &tiger);
/// assert_eq!(close.match_type, MatchType::Fuzzy);
/// assert!((close.confidence - 6.0 / 7.0).abs() < 1e-12);
///
/// assert!(!matcher.match_guess("사자", &tiger).is_match);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhoneticMatcher {
    config: MatcherConfig,
}

impl PhoneticMatcher {
    /// Create a matcher with the default policy (threshold 0.85, normalized
    /// confidence 0.95).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with a custom policy.
    pub fn with_config(config: MatcherConfig) -> config::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The policy in use.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match a guess against a target word.
    pub fn match_guess(&self, guess: &str, target: &WordEntry) -> MatchResult {
        let result = self.evaluate(guess, target);
        debug!(
            guess,
            target = %target.word,
            match_type = %result.match_type,
            confidence = result.confidence,
            "Guess evaluated"
        );
        result
    }

    fn evaluate(&self, guess: &str, target: &WordEntry) -> MatchResult {
        if guess == target.word {
            return MatchResult::exact();
        }

        if target.synonyms.iter().any(|synonym| synonym == guess) {
            return MatchResult::synonym();
        }

        let normalized_guess = normalize(guess);
        if target
            .candidates()
            .any(|candidate| normalize(candidate) == normalized_guess)
        {
            return MatchResult::normalized(self.config.normalized_confidence);
        }

        let guess_jamo = disassemble(guess);
        for candidate in target.candidates() {
            let score = sequence_similarity(&guess_jamo, &disassemble(candidate));
            if score >= self.config.fuzzy_threshold {
                return MatchResult::fuzzy(score);
            }
        }

        MatchResult::no_match()
    }
}

impl GuessMatcher for PhoneticMatcher {
    fn match_guess(&self, guess: &str, target: &WordEntry) -> MatchResult {
        PhoneticMatcher::match_guess(self, guess, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchType;

    fn word(text: &str) -> WordEntry {
        WordEntry::new("test", text)
    }

    #[test]
    fn test_exact_match() {
        let result = PhoneticMatcher::new().match_guess("기린", &word("기린"));
        assert_eq!(result, MatchResult::exact());
    }

    #[test]
    fn test_exact_is_case_sensitive() {
        let result = PhoneticMatcher::new().match_guess("Apple", &word("apple"));
        assert_eq!(result.match_type, MatchType::Normalized);
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_empty_guess_and_word() {
        let result = PhoneticMatcher::new().match_guess("", &word(""));
        assert_eq!(result.match_type, MatchType::Exact);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_empty_guess_fails() {
        let result = PhoneticMatcher::new().match_guess("", &word("기린"));
        assert_eq!(result, MatchResult::no_match());
    }

    #[test]
    fn test_synonym_match() {
        let target = word("기린").with_synonyms(["지라프"]);
        let result = PhoneticMatcher::new().match_guess("지라프", &target);
        assert_eq!(result, MatchResult::synonym());
    }

    #[test]
    fn test_synonym_beats_normalized_word() {
        let target = word("Cat").with_synonyms(["cat"]);
        let result = PhoneticMatcher::new().match_guess("cat", &target);
        assert_eq!(result.match_type, MatchType::Synonym);
    }

    #[test]
    fn test_normalized_whitespace() {
        let matcher = PhoneticMatcher::new();
        for guess in [" 기린 ", "기 린", "기\t린\n"] {
            let result = matcher.match_guess(guess, &word("기린"));
            assert_eq!(result.match_type, MatchType::Normalized, "guess {:?}", guess);
            assert_eq!(result.confidence, 0.95);
        }
    }

    #[test]
    fn test_normalized_synonym() {
        let target = word("사과").with_synonyms(["apple"]);
        let result = PhoneticMatcher::new().match_guess(" APPLE ", &target);
        assert_eq!(result.match_type, MatchType::Normalized);
    }

    #[test]
    fn test_normalized_confidence_is_configurable() {
        let config = MatcherConfig::default().with_normalized_confidence(0.9);
        let matcher = PhoneticMatcher::with_config(config).unwrap();
        let result = matcher.match_guess("기 린", &word("기린"));
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_one_vowel_off_is_rejected() {
        // 5 jamo each, distance 1 => 0.8 < 0.85
        assert_eq!(similarity("그린", "기린"), 0.8);
        let result = PhoneticMatcher::new().match_guess("그린", &word("기린"));
        assert_eq!(result, MatchResult::no_match());
    }

    #[test]
    fn test_fuzzy_accepts_close_guess() {
        // 7 jamo each, distance 1
        let result = PhoneticMatcher::new().match_guess("호랭이", &word("호랑이"));
        assert_eq!(result.match_type, MatchType::Fuzzy);
        assert_eq!(result.confidence, 6.0 / 7.0);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // 10 open syllables = 20 jamo
        let target = word("가나다라마바사아자차");

        // three vowel substitutions => 17/20
        let result = PhoneticMatcher::new().match_guess("거나더라머바사아자차", &target);
        assert!(result.is_match);
        assert_eq!(result.match_type, MatchType::Fuzzy);
        assert_eq!(result.confidence, 0.85);

        // four => 16/20
        let result = PhoneticMatcher::new().match_guess("거나더라머바서아자차", &target);
        assert_eq!(result, MatchResult::no_match());
    }

    #[test]
    fn test_fuzzy_falls_back_to_synonyms() {
        let target = word("빙수").with_synonyms(["아이스크림"]);
        let result = PhoneticMatcher::new().match_guess("아이스크린", &target);
        assert_eq!(result.match_type, MatchType::Fuzzy);
        assert_eq!(result.confidence, 10.0 / 11.0);
    }

    #[test]
    fn test_different_script_never_matches() {
        let result = PhoneticMatcher::new().match_guess("Saja", &word("사자"));
        assert_eq!(result, MatchResult::no_match());
        assert_eq!(similarity("Saja", "사자"), 0.0);
    }

    #[test]
    fn test_lower_threshold_accepts_more() {
        let config = MatcherConfig::default().with_fuzzy_threshold(0.8);
        let matcher = PhoneticMatcher::with_config(config).unwrap();
        let result = matcher.match_guess("그린", &word("기린"));
        assert_eq!(result, MatchResult::fuzzy(0.8));
    }

    #[test]
    fn test_with_config_validates() {
        let config = MatcherConfig::default().with_fuzzy_threshold(2.0);
        assert!(PhoneticMatcher::with_config(config).is_err());
    }

    #[test]
    fn test_target_is_not_mutated() {
        let target = word("기린").with_synonyms(["지라프"]);
        let before = target.clone();
        let _ = PhoneticMatcher::new().match_guess("기 린", &target);
        let _ = PhoneticMatcher::new().match_guess("그린", &target);
        assert_eq!(target, before);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello World "), "helloworld");
        assert_eq!(normalize("기 린"), "기린");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_separator_set() {
        assert_eq!(normalize("\u{FEFF}기린"), "기린");
        assert_eq!(normalize("기\u{3000}린\u{00A0}"), "기린");
        assert_eq!(normalize("기\u{0085}린"), "기\u{0085}린");
    }

    #[test]
    fn test_pasted_byte_order_mark_is_normalized() {
        let result = PhoneticMatcher::new().match_guess("\u{FEFF}기린", &word("기린"));
        assert_eq!(result.match_type, MatchType::Normalized);
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_tense_consonant_near_miss_is_rejected() {
        // ㄲㅗㄹㅣㅍㅛ vs ㄱㅗㄹㅣㅍㅛ: 5/6 < 0.85
        let result = PhoneticMatcher::new().match_guess("고리표", &word("꼬리표"));
        assert_eq!(result, MatchResult::no_match());
        assert_eq!(similarity("고리표", "꼬리표"), 5.0 / 6.0);
    }
}
