//! End-to-end matcher scenarios on realistic word entries.

use jamo_match::config::MatcherConfig;
use jamo_match::game::points_awarded;
use jamo_match::hangul::disassemble;
use jamo_match::matcher::{match_guess, similarity, GuessMatcher, MatchType, PhoneticMatcher};
use jamo_match::word_bank::WordEntry;

fn giraffe() -> WordEntry {
    WordEntry::new("animal-001", "기린")
        .with_synonyms(["지라프"])
        .with_category("동물")
}

#[test]
fn test_layer_precedence_on_one_entry() {
    let target = giraffe();

    let cases = [
        ("기린", MatchType::Exact, 1.0),
        ("지라프", MatchType::Synonym, 1.0),
        (" 기린", MatchType::Normalized, 0.95),
        ("지 라 프", MatchType::Normalized, 0.95),
        ("그린", MatchType::None, 0.0),
        ("사자", MatchType::None, 0.0),
    ];

    for (guess, expected_type, expected_confidence) in cases {
        let result = match_guess(guess, &target);
        assert_eq!(result.match_type, expected_type, "guess {:?}", guess);
        assert_eq!(result.confidence, expected_confidence, "guess {:?}", guess);
        assert_eq!(result.is_match, expected_type != MatchType::None);
    }
}

#[test]
fn test_one_vowel_off_scores_nothing() {
    let result = match_guess("그린", &giraffe());
    assert!(!result.is_match);
    assert_eq!(points_awarded(&result), 0);
    assert_eq!(similarity("그린", "기린"), 0.8);
}

#[test]
fn test_jamo_level_beats_syllable_level() {
    // One jamo off out of eleven; on syllables this would be one of five.
    let target = WordEntry::new("food-007", "아이스크림");
    let result = match_guess("아이스크린", &target);
    assert_eq!(result.match_type, MatchType::Fuzzy);
    assert_eq!(points_awarded(&result), 91);
}

#[test]
fn test_compound_jamo_cost_one_edit_each() {
    // ㄺ and ㅘ are split before comparing
    assert_eq!(similarity("닭", "닥"), 0.75);
    assert_eq!(similarity("과", "고"), 2.0 / 3.0);
}

#[test]
fn test_tense_consonant_costs_one_edit() {
    // ㄲ is one jamo, so 고리표 is one substitution out of six
    assert_eq!(disassemble("꼬리표").len(), 6);
    assert_eq!(similarity("고리표", "꼬리표"), 5.0 / 6.0);

    let result = match_guess("고리표", &WordEntry::new("object-012", "꼬리표"));
    assert_eq!(result.match_type, MatchType::None);
    assert_eq!(points_awarded(&result), 0);
}

#[test]
fn test_romanization_never_matches() {
    let target = WordEntry::new("animal-002", "사자");
    assert_eq!(match_guess("Saja", &target).match_type, MatchType::None);
    assert_eq!(match_guess("saja", &target).confidence, 0.0);
}

#[test]
fn test_empty_inputs() {
    let result = match_guess("", &WordEntry::new("x", ""));
    assert_eq!(result.match_type, MatchType::Exact);

    let result = match_guess("", &giraffe());
    assert!(!result.is_match);
}

#[test]
fn test_precomposed_and_conjoining_forms_agree() {
    // 기린 spelled with conjoining jamo (U+1100 block)
    let conjoining = "\u{1100}\u{1175}\u{1105}\u{1175}\u{11AB}";
    assert_eq!(similarity(conjoining, "기린"), 1.0);

    let result = match_guess(conjoining, &giraffe());
    assert_eq!(result.match_type, MatchType::Fuzzy);
    assert_eq!(result.confidence, 1.0);
}

#[test]
fn test_custom_policy_through_trait_object() {
    let lenient = PhoneticMatcher::with_config(MatcherConfig::default().with_fuzzy_threshold(0.8))
        .unwrap();
    let matchers: Vec<Box<dyn GuessMatcher>> =
        vec![Box::new(PhoneticMatcher::new()), Box::new(lenient)];

    let verdicts: Vec<bool> = matchers
        .iter()
        .map(|m| m.match_guess("그린", &giraffe()).is_match)
        .collect();
    assert_eq!(verdicts, vec![false, true]);
}

#[test]
fn test_matcher_is_shareable_across_threads() {
    let matcher = std::sync::Arc::new(PhoneticMatcher::new());
    let handles: Vec<_> = ["기린", "기 린", "지라프", "그린"]
        .into_iter()
        .map(|guess| {
            let matcher = std::sync::Arc::clone(&matcher);
            std::thread::spawn(move || matcher.match_guess(guess, &giraffe()).match_type)
        })
        .collect();

    let types: Vec<MatchType> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        types,
        vec![
            MatchType::Exact,
            MatchType::Normalized,
            MatchType::Synonym,
            MatchType::None
        ]
    );
}
