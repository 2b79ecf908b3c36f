//! Record filtering / 记录过滤
//!
//! Evaluates a condition set against a record's derived properties and raw
//! value. All present conditions must hold (logical AND).

use crate::models::{FilterConditions, StringRecord};

/// Check a single record against the conditions / 检查单条记录是否满足条件
pub fn matches_criteria(record: &StringRecord, conditions: &FilterConditions) -> bool {
    let props = &record.properties;

    if let Some(is_palindrome) = conditions.is_palindrome {
        if props.is_palindrome != is_palindrome {
            return false;
        }
    }

    if let Some(min_length) = conditions.min_length {
        if (props.length as i64) < min_length {
            return false;
        }
    }

    if let Some(max_length) = conditions.max_length {
        if (props.length as i64) > max_length {
            return false;
        }
    }

    if let Some(word_count) = conditions.word_count {
        if props.word_count as i64 != word_count {
            return false;
        }
    }

    // Literal, case-sensitive scan of the raw value / 对原始值的字面匹配
    if let Some(ch) = conditions.contains_character {
        if !record.value.contains(ch) {
            return false;
        }
    }

    true
}

/// Keep the records matching the conditions, preserving input order
/// / 过滤记录列表，保持输入顺序
pub fn apply_filters(records: Vec<StringRecord>, conditions: &FilterConditions) -> Vec<StringRecord> {
    records
        .into_iter()
        .filter(|record| matches_criteria(record, conditions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;
    use crate::models::StringRecord;

    fn record(value: &str) -> StringRecord {
        StringRecord {
            id: analysis::compute_hash(value),
            value: value.to_string(),
            properties: analysis::analyze(value),
            created_at: "2026-01-01T00:00:00.000000Z".to_string(),
        }
    }

    #[test]
    fn test_empty_conditions_match_everything() {
        let conds = FilterConditions::default();
        assert!(matches_criteria(&record(""), &conds));
        assert!(matches_criteria(&record("hello world"), &conds));
    }

    #[test]
    fn test_palindrome_condition() {
        let conds = FilterConditions {
            is_palindrome: Some(true),
            ..Default::default()
        };
        assert!(matches_criteria(&record("Racecar"), &conds));
        assert!(!matches_criteria(&record("hello"), &conds));

        let conds = FilterConditions {
            is_palindrome: Some(false),
            ..Default::default()
        };
        assert!(matches_criteria(&record("hello"), &conds));
    }

    #[test]
    fn test_length_bounds() {
        let conds = FilterConditions {
            min_length: Some(5),
            max_length: Some(7),
            ..Default::default()
        };
        assert!(matches_criteria(&record("12345"), &conds));
        assert!(matches_criteria(&record("1234567"), &conds));
        assert!(!matches_criteria(&record("1234"), &conds));
        assert!(!matches_criteria(&record("12345678"), &conds));
    }

    #[test]
    fn test_negative_max_length_matches_nothing() {
        let conds = FilterConditions {
            max_length: Some(-1),
            ..Default::default()
        };
        assert!(!matches_criteria(&record(""), &conds));
        assert!(!matches_criteria(&record("a"), &conds));
    }

    #[test]
    fn test_word_count_exact() {
        let conds = FilterConditions {
            word_count: Some(2),
            ..Default::default()
        };
        assert!(matches_criteria(&record("hello world"), &conds));
        assert!(!matches_criteria(&record("hello"), &conds));
        assert!(!matches_criteria(&record("a b c"), &conds));
    }

    #[test]
    fn test_contains_character_case_sensitive() {
        let conds = FilterConditions {
            contains_character: Some('z'),
            ..Default::default()
        };
        assert!(matches_criteria(&record("puzzle"), &conds));
        assert!(!matches_criteria(&record("Zebra"), &conds));
        assert!(!matches_criteria(&record("hello"), &conds));
    }

    #[test]
    fn test_apply_filters_preserves_order() {
        let records = vec![record("abc"), record("xyz"), record("zzz")];
        let conds = FilterConditions {
            contains_character: Some('z'),
            ..Default::default()
        };
        let kept = apply_filters(records, &conds);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].value, "xyz");
        assert_eq!(kept[1].value, "zzz");
    }

    #[test]
    fn test_all_conditions_must_hold() {
        // palindrome but too short / 是回文但长度不够
        let conds = FilterConditions {
            is_palindrome: Some(true),
            min_length: Some(10),
            ..Default::default()
        };
        assert!(!matches_criteria(&record("Racecar"), &conds));
    }
}
