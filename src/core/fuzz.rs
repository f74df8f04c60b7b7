//! String similarity primitives.
//!
//! Three distinct scorers are used by the engine and must not be
//! collapsed into one:
//!
//! - [`token_sort_ratio`]: word-order-insensitive similarity (record names)
//! - [`partial_ratio`]: substring-tolerant similarity (category, state,
//!   description, region detection)
//! - [`close_match`]: edit-distance "did you mean" lookup (fallback)
//!
//! Both ratio scorers return values in `[0, 100]` and are built on
//! [`ratio`], the normalized indel similarity
//! `100 * 2 * LCS(a, b) / (|a| + |b|)` over Unicode scalar values.
//! No case folding happens here; callers lowercase their inputs.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Normalized indel similarity of two strings, in `[0, 100]`.
///
/// Two empty strings are identical and score 100.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Similarity after sorting each string's whitespace-separated tokens.
///
/// # Examples
///
/// ```
/// use scheme_search::core::fuzz::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("skill india", "india skill"), 100.0);
/// ```
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Best [`ratio`] between the shorter string and any same-length window
/// of the longer one.
///
/// Windows that hang off either end of the longer string are also
/// considered, so a fragment overlapping the start or end still scores.
/// Strings of equal length are scored in both directions and the better
/// score is kept. An empty string scores 0 against a non-empty one.
///
/// # Examples
///
/// ```
/// use scheme_search::core::fuzz::partial_ratio;
///
/// assert_eq!(partial_ratio("health", "national health mission"), 100.0);
/// ```
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    match a.len().cmp(&b.len()) {
        Ordering::Less => best_window(&a, &b),
        Ordering::Greater => best_window(&b, &a),
        // Overhanging windows differ by direction
        Ordering::Equal => best_window(&a, &b).max(best_window(&b, &a)),
    }
}

/// Best close match for `query` among `candidates`.
///
/// Similarity is normalized Levenshtein (`1 - distance / max_len`).
/// Returns the index of the best candidate whose similarity is at least
/// `cutoff`; the earliest candidate wins ties.
///
/// # Examples
///
/// ```
/// use scheme_search::core::fuzz::close_match;
///
/// let names = ["kisan credit card", "ayushman bharat", "skill india"];
/// assert_eq!(close_match("ayushman bharath", names, 0.6), Some(1));
/// assert_eq!(close_match("zzzz", names, 0.6), None);
/// ```
pub fn close_match<'a, I>(query: &str, candidates: I, cutoff: f64) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.into_iter().enumerate() {
        let similarity = strsim::normalized_levenshtein(query, candidate);
        if similarity < cutoff {
            continue;
        }
        match best {
            Some((_, score)) if score >= similarity => {}
            _ => best = Some((index, similarity)),
        }
    }
    best.map(|(index, _)| index)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    100.0 * (2 * lcs_len(a, b)) as f64 / total as f64
}

fn best_window(short: &[char], long: &[char]) -> f64 {
    let n = short.len();
    let m = long.len();

    // Windows overlapping the start, full-length windows, then windows
    // overlapping the end of `long`
    let head = (1..n).map(|end| &long[..end]);
    let full = (0..=m - n).map(|start| &long[start..start + n]);
    let tail = (m - n + 1..m).map(|start| &long[start..]);

    let mut best = 0.0_f64;
    for window in head.chain(full).chain(tail) {
        let score = ratio_chars(short, window);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

/// Length of the longest common subsequence.
///
/// Patterns of up to 64 characters use the bit-parallel algorithm
/// (Hyyrö, 2004); longer ones fall back to a two-row table.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (pattern, text) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if pattern.is_empty() {
        return 0;
    }
    if pattern.len() <= 64 {
        lcs_bit_parallel(pattern, text)
    } else {
        lcs_table(pattern, text)
    }
}

fn lcs_bit_parallel(pattern: &[char], text: &[char]) -> usize {
    let mut masks: HashMap<char, u64> = HashMap::with_capacity(pattern.len());
    for (i, ch) in pattern.iter().enumerate() {
        *masks.entry(*ch).or_insert(0) |= 1u64 << i;
    }

    let mut s = u64::MAX;
    for ch in text {
        if let Some(&m) = masks.get(ch) {
            let u = s & m;
            s = s.wrapping_add(u) | (s - u);
        }
    }

    let used = if pattern.len() == 64 {
        u64::MAX
    } else {
        (1u64 << pattern.len()) - 1
    };
    (!s & used).count_ones() as usize
}

fn lcs_table(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
