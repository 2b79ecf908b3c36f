//! Natural language query interpreter / 自然语言查询解析
//!
//! Maps a free-text query onto structured filter conditions by matching a
//! fixed vocabulary of phrases against the lowercased text. This is pattern
//! matching, not NLU: every rule is checked independently and rule order is
//! part of the contract (the "first vowel" phrase overrides an explicitly
//! named letter because it is evaluated last).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::FilterConditions;

static LONGER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"longer than (\d+)").expect("invalid regex"));
static SHORTER_THAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"shorter than (\d+)").expect("invalid regex"));
static CONTAINS_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"contain(?:s|ing)? the letter ([a-z])").expect("invalid regex"));

/// Word count phrases, checked in priority order / 词数短语，按优先级检查
const WORD_PATTERNS: [(&str, i64); 3] = [("single word", 1), ("two word", 2), ("three word", 3)];

/// Extract filter conditions from a free-text query / 从自然语言查询提取过滤条件
///
/// Returns an empty condition set when no phrase matches; the caller treats
/// that as an uninterpretable query.
pub fn extract_filters(query_text: &str) -> FilterConditions {
    let query_lower = query_text.to_lowercase();
    let mut conditions = FilterConditions::default();

    if query_lower.contains("palindrom") {
        conditions.is_palindrome = Some(true);
    }

    for (pattern, count) in WORD_PATTERNS {
        if query_lower.contains(pattern) {
            conditions.word_count = Some(count);
            break;
        }
    }

    // "longer than N" means strictly greater / 严格大于
    if let Some(caps) = LONGER_THAN.captures(&query_lower) {
        if let Ok(n) = caps[1].parse::<i64>() {
            conditions.min_length = Some(n + 1);
        }
    }

    // "shorter than N" means strictly less; N=0 yields -1, left as-is
    if let Some(caps) = SHORTER_THAN.captures(&query_lower) {
        if let Ok(n) = caps[1].parse::<i64>() {
            conditions.max_length = Some(n - 1);
        }
    }

    if let Some(caps) = CONTAINS_LETTER.captures(&query_lower) {
        conditions.contains_character = caps[1].chars().next();
    }

    // Runs last so it wins over an explicitly named letter / 最后执行故覆盖前者
    if query_lower.contains("first vowel") {
        conditions.contains_character = Some('a');
    }

    conditions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindrome_phrase() {
        let conds = extract_filters("show me palindromic strings");
        assert_eq!(conds.is_palindrome, Some(true));

        let conds = extract_filters("PALINDROMES please");
        assert_eq!(conds.is_palindrome, Some(true));
    }

    #[test]
    fn test_word_count_phrases() {
        assert_eq!(extract_filters("single word strings").word_count, Some(1));
        assert_eq!(extract_filters("two words only").word_count, Some(2));
        assert_eq!(extract_filters("three word phrases").word_count, Some(3));
        // First match wins / 第一个命中的短语生效
        let conds = extract_filters("single word but also two word");
        assert_eq!(conds.word_count, Some(1));
    }

    #[test]
    fn test_length_phrases() {
        let conds = extract_filters("strings longer than 5");
        assert_eq!(conds.min_length, Some(6));

        let conds = extract_filters("strings shorter than 10");
        assert_eq!(conds.max_length, Some(9));

        // Negative bound passes through unvalidated / 负数界限不做校验
        let conds = extract_filters("shorter than 0");
        assert_eq!(conds.max_length, Some(-1));
    }

    #[test]
    fn test_contains_letter() {
        assert_eq!(
            extract_filters("containing the letter z").contains_character,
            Some('z')
        );
        assert_eq!(
            extract_filters("contains the letter Q").contains_character,
            Some('q')
        );
        assert_eq!(
            extract_filters("contain the letter b").contains_character,
            Some('b')
        );
    }

    #[test]
    fn test_first_vowel_overrides() {
        let conds = extract_filters("containing the letter z and the first vowel");
        assert_eq!(conds.contains_character, Some('a'));

        // Override wins regardless of phrase order in the query / 与短语顺序无关
        let conds = extract_filters("first vowel strings containing the letter z");
        assert_eq!(conds.contains_character, Some('a'));
    }

    #[test]
    fn test_combined_query() {
        let conds = extract_filters("two word palindromes longer than 5");
        assert_eq!(conds.is_palindrome, Some(true));
        assert_eq!(conds.word_count, Some(2));
        assert_eq!(conds.min_length, Some(6));
        assert_eq!(conds.max_length, None);
    }

    #[test]
    fn test_unrecognized_query() {
        let conds = extract_filters("xyz");
        assert!(conds.is_empty());

        let conds = extract_filters("");
        assert!(conds.is_empty());
    }
}
