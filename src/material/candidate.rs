use serde::{Deserialize, Serialize};

use super::edit_distance::levenshtein;

/// 검색 결과 한 건. `locator`는 상세 자료 위치(URL 등)로, 매칭 과정에서는 해석하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub name: String,
    pub locator: String,
}

impl SearchCandidate {
    pub fn new(name: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locator: locator.into(),
        }
    }
}

/// 질의어와의 편집 거리가 함께 기록된 후보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub candidate: SearchCandidate,
    pub distance: usize,
}

fn score(query_lower: &str, candidate: &SearchCandidate) -> usize {
    levenshtein(query_lower, &candidate.name.to_lowercase())
}

/// 대소문자를 무시한 편집 거리가 가장 작은 후보를 고른다.
///
/// 동률이면 입력 순서상 먼저 나온 후보를 반환한다. 후보가 없으면 `None`.
pub fn select_best(query: &str, candidates: &[SearchCandidate]) -> Option<ScoredCandidate> {
    let query = query.to_lowercase();
    let mut best: Option<ScoredCandidate> = None;
    for candidate in candidates {
        let distance = score(&query, candidate);
        // 엄격한 비교로 최초 최소값을 유지한다.
        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(ScoredCandidate {
                candidate: candidate.clone(),
                distance,
            });
        }
    }
    best
}

/// 모든 후보를 거리 오름차순으로 정렬해 반환한다. 같은 거리는 입력 순서를 유지한다.
pub fn rank(query: &str, candidates: &[SearchCandidate]) -> Vec<ScoredCandidate> {
    let query = query.to_lowercase();
    let mut ranked: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|c| ScoredCandidate {
            candidate: c.clone(),
            distance: score(&query, c),
        })
        .collect();
    ranked.sort_by_key(|s| s.distance);
    ranked
}
