//! 네트워크 없이 파이프라인을 돌리기 위한 JSON 기반 협력자.
//!
//! ```text
//! {
//!   "searches": { "copper": [ { "name": "Copper, Cu", "locator": "doc-cu" } ] },
//!   "documents": { "doc-cu": [ [ ["preamble"] ], [ ["Properties", null, "Metric", "English"], ... ] ] }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::candidate::SearchCandidate;
use super::service::{CollaboratorError, DocumentRenderer, MaterialSearch, TableExtractor};
use super::table::RawTableGroup;

/// 픽스처 로드 오류.
#[derive(Debug)]
pub enum FixtureError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 파싱 오류
    Json(serde_json::Error),
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureError::Io(e) => write!(f, "픽스처 파일 입출력 오류: {e}"),
            FixtureError::Json(e) => write!(f, "픽스처 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for FixtureError {}

impl From<std::io::Error> for FixtureError {
    fn from(value: std::io::Error) -> Self {
        FixtureError::Io(value)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(value: serde_json::Error) -> Self {
        FixtureError::Json(value)
    }
}

/// 미리 저장해 둔 검색 결과와 추출 표.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialFixture {
    /// 소문자 검색어 → 검색 결과
    #[serde(default)]
    pub searches: BTreeMap<String, Vec<SearchCandidate>>,
    /// locator → 추출된 표 묶음
    #[serde(default)]
    pub documents: BTreeMap<String, Vec<RawTableGroup>>,
}

/// 픽스처가 "렌더링"한 문서. 어떤 locator였는지만 기억한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureDocument {
    pub locator: String,
}

impl MaterialFixture {
    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

impl MaterialSearch for MaterialFixture {
    fn search(&self, material: &str) -> Result<Vec<SearchCandidate>, CollaboratorError> {
        Ok(self
            .searches
            .get(&material.trim().to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}

impl DocumentRenderer for MaterialFixture {
    type Document = FixtureDocument;

    fn render(&self, locator: &str) -> Result<FixtureDocument, CollaboratorError> {
        if self.documents.contains_key(locator) {
            Ok(FixtureDocument {
                locator: locator.to_string(),
            })
        } else {
            Err(CollaboratorError(format!("문서 없음: {locator}")))
        }
    }
}

impl TableExtractor<FixtureDocument> for MaterialFixture {
    fn extract(&self, document: &FixtureDocument) -> Result<Vec<RawTableGroup>, CollaboratorError> {
        self.documents
            .get(&document.locator)
            .cloned()
            .ok_or_else(|| CollaboratorError(format!("표 없음: {}", document.locator)))
    }
}
