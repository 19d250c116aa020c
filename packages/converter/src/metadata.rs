//! Header metadata extraction.
//!
//! Statute exports start with a short header such as:
//!
//! ```text
//! 도로교통법
//! [시행 2020. 9. 1.] [법률 제1234호, 2020. 3. 1., 일부개정]
//! 경찰청 (교통기획과) 02-1234-5678
//! ```
//!
//! The first lines are joined into one buffer and searched with independent
//! patterns. A missing field falls back to its default, never an error.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::{normalize_date, DEFAULT_DEPARTMENT};
use crate::types::DocumentMetadata;

/// "시행 2020. 9. 1." enforcement date.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENFORCEMENT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"시행\s*(\d{4})\.\s*(\d{1,2})\.\s*(\d{1,2})").expect("valid regex")
});

/// "제1234호, 2020. 3. 1." promulgation number followed by its date.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PROMULGATION_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"제\d+호,\s*(\d{4})\.\s*(\d{1,2})\.\s*(\d{1,2})").expect("valid regex")
});

/// Ministry name ending in 부, directly before its contact details.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DEPARTMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([가-힣]+부)\s*\(").expect("valid regex"));

/// Join the first `count` lines into one search buffer.
#[must_use]
pub fn header_buffer<S: AsRef<str>>(lines: &[S], count: usize) -> String {
    lines
        .iter()
        .take(count)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

fn date_from(caps: &Captures<'_>) -> String {
    let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    normalize_date(group(1), group(2), group(3))
}

/// Enforcement date as `YYYYMMDD`, or empty.
#[must_use]
pub fn find_enforcement_date(header: &str) -> String {
    ENFORCEMENT_DATE
        .captures(header)
        .map(|caps| date_from(&caps))
        .unwrap_or_default()
}

/// Promulgation date as `YYYYMMDD`, or empty.
#[must_use]
pub fn find_promulgation_date(header: &str) -> String {
    PROMULGATION_DATE
        .captures(header)
        .map(|caps| date_from(&caps))
        .unwrap_or_default()
}

/// Issuing ministry, if the header names one.
#[must_use]
pub fn find_department(header: &str) -> Option<String> {
    DEPARTMENT
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Extract header metadata from the first `header_lines` lines.
#[must_use]
pub fn extract_metadata<S: AsRef<str>>(lines: &[S], header_lines: usize) -> DocumentMetadata {
    let header = header_buffer(lines, header_lines);

    let metadata = DocumentMetadata {
        department: find_department(&header).unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
        promulgation_date: find_promulgation_date(&header),
        enforcement_date: find_enforcement_date(&header),
    };

    tracing::debug!(
        department = %metadata.department,
        promulgation_date = %metadata.promulgation_date,
        enforcement_date = %metadata.enforcement_date,
        "Extracted header metadata"
    );

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HEADER_LINE_COUNT;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_metadata_full_header() {
        let lines = [
            "도로교통법",
            "법률 제1234호, 2020. 3. 1. 일부개정",
            "시행 2020. 9. 1.",
            "행정안전부 (자치법규과, 02-1234-5678)",
        ];

        let metadata = extract_metadata(&lines, HEADER_LINE_COUNT);
        assert_eq!(
            metadata,
            DocumentMetadata {
                department: "행정안전부".to_string(),
                promulgation_date: "20200301".to_string(),
                enforcement_date: "20200901".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_metadata_bracketed_header() {
        let lines = ["[시행 2024.1.1.] [법률 제19000호, 2023.6.13., 타법개정]"];
        let metadata = extract_metadata(&lines, HEADER_LINE_COUNT);

        assert_eq!(metadata.enforcement_date, "20240101");
        assert_eq!(metadata.promulgation_date, "20230613");
    }

    #[test]
    fn test_extract_metadata_defaults() {
        let lines = ["제1조(목적) 이 법은 ...", "① 본문"];
        let metadata = extract_metadata(&lines, HEADER_LINE_COUNT);

        assert_eq!(metadata.department, "정보없음");
        assert_eq!(metadata.promulgation_date, "");
        assert_eq!(metadata.enforcement_date, "");
    }

    #[test]
    fn test_extract_metadata_empty_input() {
        let lines: [&str; 0] = [];
        let metadata = extract_metadata(&lines, HEADER_LINE_COUNT);
        assert_eq!(metadata.department, DEFAULT_DEPARTMENT);
    }

    #[test]
    fn test_only_header_lines_are_searched() {
        let mut lines = vec!["본문"; 15];
        lines.push("시행 2020. 9. 1.");

        assert_eq!(extract_metadata(&lines, 15).enforcement_date, "");
        assert_eq!(extract_metadata(&lines, 16).enforcement_date, "20200901");
    }

    #[test]
    fn test_matched_dates_are_kept_as_written() {
        let lines = ["[시행 2021. 2. 30.] [법률 제1234호, 2020. 13. 1., 일부개정]"];
        let metadata = extract_metadata(&lines, HEADER_LINE_COUNT);

        assert_eq!(metadata.enforcement_date, "20210230");
        assert_eq!(metadata.promulgation_date, "20201301");
    }

    #[test]
    fn test_first_match_wins() {
        let header = "시행 2021. 1. 5. ... 시행 2022. 2. 6.";
        assert_eq!(find_enforcement_date(header), "20210105");
    }

    #[test]
    fn test_department_requires_parenthesis() {
        assert_eq!(find_department("국토교통부(국토정책과)"), Some("국토교통부".to_string()));
        assert_eq!(find_department("국토교통부 소관"), None);
    }

    #[test]
    fn test_fields_spanning_lines() {
        // Lines are joined with a space, so a date split across lines still matches.
        let lines = ["시행", "2019. 12. 24."];
        assert_eq!(extract_metadata(&lines, HEADER_LINE_COUNT).enforcement_date, "20191224");
    }
}
