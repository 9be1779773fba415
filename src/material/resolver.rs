//! 물성 표에서 원하는 속성을 찾아 수치를 뽑는다.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use super::edit_distance::levenshtein;
use super::table::{PropertyRecord, PropertyTable};

/// 레코드를 어떤 경로로 찾았는지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    /// 속성 이름에 대상 문자열이 그대로 포함됨
    Substring,
    /// 포함 관계가 없어 편집 거리가 가장 가까운 속성을 골랐음.
    /// 거리가 크면 전혀 다른 속성일 수 있으므로 호출자가 판단해야 한다.
    Fuzzy { distance: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMatch {
    pub record: PropertyRecord,
    /// `record.metric`에서 읽은 첫 번째 수치. 단위는 문서의 미터법 단위 그대로다.
    pub value: f64,
    pub method: MatchMethod,
}

/// 속성 해석 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// 찾은 레코드의 값에 숫자가 없음
    NumericExtraction { property: String, value: String },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::NumericExtraction { property, value } => {
                write!(f, "'{property}' 값에서 숫자를 찾을 수 없음: {value:?}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+\.?\d*").expect("static regex"))
}

/// 문자열에서 처음 나오는 십진수(`345.6 MPa` → `345.6`)를 읽는다.
pub fn first_number(text: &str) -> Option<f64> {
    number_pattern()
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn find_record<'a>(
    table: &'a PropertyTable,
    target: &str,
) -> Option<(&'a PropertyRecord, MatchMethod)> {
    let target_lower = target.to_lowercase();
    if let Some(record) = table
        .iter()
        .find(|r| r.property.to_lowercase().contains(&target_lower))
    {
        return Some((record, MatchMethod::Substring));
    }

    // 대소문자를 구분한 편집 거리로 가장 가까운 속성을 고른다. 동률이면 앞선 행.
    let mut best: Option<(&PropertyRecord, usize)> = None;
    for record in table {
        let distance = levenshtein(target, &record.property);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((record, distance));
        }
    }
    best.map(|(record, distance)| (record, MatchMethod::Fuzzy { distance }))
}

/// `target` 속성을 찾아 미터법 값의 첫 수치를 반환한다.
///
/// 표가 비어 있으면 `Ok(None)`. 레코드는 찾았지만 값에 숫자가 없으면
/// [`ResolveError::NumericExtraction`]을 돌려주며, 0 같은 대체값을 쓰지 않는다.
pub fn resolve(table: &PropertyTable, target: &str) -> Result<Option<ResolvedMatch>, ResolveError> {
    if table.is_empty() {
        return Ok(None);
    }
    let Some((record, method)) = find_record(table, target) else {
        return Ok(None);
    };

    match method {
        MatchMethod::Substring => debug!(query = target, property = %record.property, "속성 일치"),
        MatchMethod::Fuzzy { distance } => warn!(
            query = target,
            property = %record.property,
            distance,
            "직접 일치하는 속성이 없어 가장 가까운 속성을 사용"
        ),
    }

    let value = first_number(&record.metric).ok_or_else(|| ResolveError::NumericExtraction {
        property: record.property.clone(),
        value: record.metric.clone(),
    })?;

    Ok(Some(ResolvedMatch {
        record: record.clone(),
        value,
        method,
    }))
}
