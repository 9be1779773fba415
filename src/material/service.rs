//! 재료 이름 → 물성 표 파이프라인.
//!
//! 검색 → 후보 선택 → 문서 렌더링 → 표 추출 → 정규화 순서로 진행한다. 네트워크,
//! 렌더링, 표 추출은 아래 트레이트를 구현하는 외부 협력자가 담당한다.

use tracing::{debug, info, warn};

use super::candidate::{self, ScoredCandidate, SearchCandidate};
use super::table::{normalize_with, NormalizeOptions, PropertyTable, RawTableGroup};

/// 외부 협력자(검색/렌더링/추출)가 실패했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorError(pub String);

impl std::fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for CollaboratorError {}

/// 재료 이름으로 검색 결과 목록을 돌려준다.
pub trait MaterialSearch {
    fn search(&self, material: &str) -> Result<Vec<SearchCandidate>, CollaboratorError>;
}

/// 후보의 locator로 문서를 만든다. 문서 형식은 구현체가 정한다.
pub trait DocumentRenderer {
    type Document;

    fn render(&self, locator: &str) -> Result<Self::Document, CollaboratorError>;
}

/// 문서에서 표 영역들을 추출한다.
pub trait TableExtractor<D> {
    fn extract(&self, document: &D) -> Result<Vec<RawTableGroup>, CollaboratorError>;
}

// 하나의 구현체를 참조로 여러 역할에 나눠 쓸 수 있게 한다.
impl<T: MaterialSearch + ?Sized> MaterialSearch for &T {
    fn search(&self, material: &str) -> Result<Vec<SearchCandidate>, CollaboratorError> {
        (**self).search(material)
    }
}

impl<T: DocumentRenderer + ?Sized> DocumentRenderer for &T {
    type Document = T::Document;

    fn render(&self, locator: &str) -> Result<Self::Document, CollaboratorError> {
        (**self).render(locator)
    }
}

impl<D, T: TableExtractor<D> + ?Sized> TableExtractor<D> for &T {
    fn extract(&self, document: &D) -> Result<Vec<RawTableGroup>, CollaboratorError> {
        (**self).extract(document)
    }
}

/// 파이프라인이 자료를 내놓지 못한 경우. 둘 다 치명적 오류는 아니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    /// 검색 결과가 없음
    NoCandidates { query: String },
    /// 문서에서 물성 구간을 찾지 못함
    EmptyTable { material: String },
}

impl std::fmt::Display for RetrievalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetrievalError::NoCandidates { query } => write!(f, "'{query}' 검색 결과가 없습니다."),
            RetrievalError::EmptyTable { material } => {
                write!(f, "'{material}' 문서에서 물성 표를 찾지 못했습니다.")
            }
        }
    }
}

impl std::error::Error for RetrievalError {}

/// 파이프라인 결과.
#[derive(Debug, Clone)]
pub struct MaterialRetrieval {
    /// 선택된 후보
    pub best: ScoredCandidate,
    /// 검색된 모든 후보 (거리 오름차순)
    pub ranked: Vec<ScoredCandidate>,
    pub table: PropertyTable,
}

/// 검색/렌더링/추출 협력자를 묶어 재료 물성 표를 조회한다.
pub struct MaterialDataService<S, R, E> {
    search: S,
    renderer: R,
    extractor: E,
    options: NormalizeOptions,
}

impl<S, R, E> MaterialDataService<S, R, E>
where
    S: MaterialSearch,
    R: DocumentRenderer,
    E: TableExtractor<R::Document>,
{
    pub fn new(search: S, renderer: R, extractor: E) -> Self {
        Self::with_options(search, renderer, extractor, NormalizeOptions::default())
    }

    pub fn with_options(search: S, renderer: R, extractor: E, options: NormalizeOptions) -> Self {
        Self {
            search,
            renderer,
            extractor,
            options,
        }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// 검색만 수행한다. 검색 실패는 결과 없음으로 취급한다.
    pub fn candidates(&self, query: &str) -> Vec<SearchCandidate> {
        match self.search.search(query) {
            Ok(found) => found,
            Err(err) => {
                warn!(query, error = %err, "검색 실패, 결과 없음으로 처리");
                Vec::new()
            }
        }
    }

    /// `query`에 가장 가까운 재료의 물성 표를 가져온다.
    pub fn retrieve(&self, query: &str) -> Result<MaterialRetrieval, RetrievalError> {
        let found = self.candidates(query);
        let ranked = candidate::rank(query, &found);
        for (idx, scored) in ranked.iter().enumerate() {
            debug!(
                rank = idx + 1,
                name = %scored.candidate.name,
                locator = %scored.candidate.locator,
                distance = scored.distance,
                "후보"
            );
        }

        let best = candidate::select_best(query, &found).ok_or_else(|| {
            RetrievalError::NoCandidates {
                query: query.to_string(),
            }
        })?;
        info!(
            name = %best.candidate.name,
            locator = %best.candidate.locator,
            distance = best.distance,
            "최적 후보 선택"
        );

        let groups = self.extract_groups(&best.candidate.locator);
        let table = normalize_with(&groups, &self.options);
        if table.is_empty() {
            return Err(RetrievalError::EmptyTable {
                material: best.candidate.name.clone(),
            });
        }

        Ok(MaterialRetrieval {
            best,
            ranked,
            table,
        })
    }

    /// 렌더링·추출 실패는 빈 표 묶음으로 취급한다. 문서는 추출 후 바로 해제된다.
    fn extract_groups(&self, locator: &str) -> Vec<RawTableGroup> {
        let document = match self.renderer.render(locator) {
            Ok(doc) => doc,
            Err(err) => {
                warn!(locator, error = %err, "문서 렌더링 실패");
                return Vec::new();
            }
        };
        match self.extractor.extract(&document) {
            Ok(groups) => {
                debug!(groups = groups.len(), "표 추출 완료");
                groups
            }
            Err(err) => {
                warn!(locator, error = %err, "표 추출 실패");
                Vec::new()
            }
        }
    }
}
