use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stored string record / 存储的字符串记录
///
/// The id is the SHA-256 hex digest of the value, which doubles as the
/// deduplication key. Records are immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: String,
    pub value: String,
    pub properties: PropertyBundle,
    pub created_at: String,
}

/// Derived properties of a string / 字符串的派生属性
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyBundle {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: HashMap<char, u64>,
}

/// Structured filter conditions / 结构化过滤条件
///
/// One optional field per recognized condition; `None` means unconstrained.
/// Conditions combine with logical AND. Serialization skips absent fields so
/// the interpreted-query response only carries the conditions that fired.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterConditions {
    /// True when no condition is set / 是否没有任何条件
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }
}
