//! Edit distance and similarity over symbol sequences.
//!
//! The matcher measures how far a guess is from a target on the jamo level,
//! so distances here are computed over arbitrary slices of symbols rather
//! than over `str` bytes. Each element counts as one "character": one
//! insertion, deletion or substitution costs exactly 1.

use smallvec::SmallVec;

/// Strip common prefix and suffix from two sequences.
///
/// Returns `(prefix_len, adjusted_len_a, adjusted_len_b)` where:
/// - `prefix_len`: number of common prefix elements
/// - `adjusted_len_a`: length of `a` minus common prefix/suffix
/// - `adjusted_len_b`: length of `b` minus common prefix/suffix
///
/// Prefix and suffix never overlap, so the core of `a` is
/// `a[prefix_len..prefix_len + adjusted_len_a]`.
#[inline]
pub(crate) fn strip_common_affixes<T: PartialEq>(a: &[T], b: &[T]) -> (usize, usize, usize) {
    let len_a = a.len();
    let len_b = b.len();

    if len_a == 0 || len_b == 0 {
        return (0, len_a, len_b);
    }

    let min_len = len_a.min(len_b);
    let mut prefix_len = 0;
    while prefix_len < min_len && a[prefix_len] == b[prefix_len] {
        prefix_len += 1;
    }

    if prefix_len == min_len {
        // One sequence is a prefix of the other
        return (prefix_len, len_a - prefix_len, len_b - prefix_len);
    }

    let mut suffix_len = 0;
    while suffix_len < (min_len - prefix_len)
        && a[len_a - 1 - suffix_len] == b[len_b - 1 - suffix_len]
    {
        suffix_len += 1;
    }

    (
        prefix_len,
        len_a - prefix_len - suffix_len,
        len_b - prefix_len - suffix_len,
    )
}

/// Compute Levenshtein distance between two symbol sequences.
///
/// Minimum number of single-element insertions, deletions and substitutions
/// needed to turn `source` into `target`. Symmetric in its arguments.
///
/// # Example
///
/// ```rust
/// use jamo_match::distance::sequence_distance;
///
/// let a = ['ㄱ', 'ㅣ', 'ㄹ', 'ㅣ', 'ㄴ'];
/// let b = ['ㄱ', 'ㅡ', 'ㄹ', 'ㅣ', 'ㄴ'];
/// assert_eq!(sequence_distance(&a, &b), 1);
/// assert_eq!(sequence_distance::<char>(&[], &b), 5);
/// ```
pub fn sequence_distance<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    let (prefix_len, m, n) = strip_common_affixes(source, target);

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let source = &source[prefix_len..prefix_len + m];
    let target = &target[prefix_len..prefix_len + n];

    // Two rows instead of the full matrix
    let mut prev_row: SmallVec<[usize; 32]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 32]> = SmallVec::from_elem(0, n + 1);

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if source[i - 1] == target[j - 1] { 0 } else { 1 };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute Levenshtein distance between two strings, one `char` per unit.
///
/// # Example
///
/// ```rust
/// use jamo_match::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("기린", "그린"), 1);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();
    sequence_distance(&source_chars, &target_chars)
}

/// Turn an edit distance into a similarity in `[0, 1]`.
///
/// `1 - distance / max(source_len, target_len)`, defined as `1.0` when both
/// sequences are empty. Computed as `(max - distance) / max` so that exact
/// ratios such as 17/20 land on the same `f64` as the literal `0.85`.
///
/// ```rust
/// use jamo_match::distance::normalized_similarity;
///
/// assert_eq!(normalized_similarity(3, 20, 20), 0.85);
/// assert_eq!(normalized_similarity(0, 0, 0), 1.0);
/// ```
#[inline]
pub fn normalized_similarity(distance: usize, source_len: usize, target_len: usize) -> f64 {
    let max_len = source_len.max(target_len);
    if max_len == 0 {
        return 1.0;
    }
    let distance = distance.min(max_len);
    (max_len - distance) as f64 / max_len as f64
}

/// Similarity of two symbol sequences, see [`normalized_similarity`].
pub fn sequence_similarity<T: PartialEq>(source: &[T], target: &[T]) -> f64 {
    let distance = sequence_distance(source, target);
    normalized_similarity(distance, source.len(), target.len())
}
