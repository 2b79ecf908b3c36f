//! String analysis / 字符串分析
//!
//! Pure derivation of descriptive properties from a string. Total and
//! deterministic for any input including the empty string; no error paths.

use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};

use crate::models::PropertyBundle;

/// SHA-256 hex digest of the UTF-8 bytes / 计算字符串的SHA-256十六进制摘要
pub fn compute_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Case-insensitive palindrome check / 判断是否为回文（忽略大小写）
///
/// Whitespace and punctuation are NOT stripped; only case is normalized.
/// Empty and single-character strings count as palindromes.
pub fn check_palindrome(text: &str) -> bool {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    chars.iter().eq(chars.iter().rev())
}

/// Count distinct characters, case-sensitive / 统计不同字符数（区分大小写）
pub fn count_unique_chars(text: &str) -> usize {
    text.chars().collect::<HashSet<_>>().len()
}

/// Count whitespace-delimited words / 统计单词数
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Per-character occurrence counts / 统计每个字符的出现次数
pub fn build_char_frequency(text: &str) -> HashMap<char, u64> {
    let mut frequency = HashMap::new();
    for ch in text.chars() {
        *frequency.entry(ch).or_insert(0) += 1;
    }
    frequency
}

/// Derive the full property bundle for a string / 计算字符串的全部派生属性
pub fn analyze(text: &str) -> PropertyBundle {
    PropertyBundle {
        length: text.chars().count(),
        is_palindrome: check_palindrome(text),
        unique_characters: count_unique_chars(text),
        word_count: count_words(text),
        sha256_hash: compute_hash(text),
        character_frequency_map: build_char_frequency(text),
    }
}
