//! 문서에서 추출한 원시 표를 정돈된 물성 표로 변환한다.
//!
//! 추출기는 페이지(영역)마다 표를 하나씩 돌려주며, 행 길이가 제각각이고 머리글/섹션
//! 제목 행과 "이어지는 행"(속성 이름 없이 다른 단위 값만 있는 행)이 섞여 있다.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// 추출기가 돌려주는 한 행. `None`은 읽지 못한 셀이다.
pub type RawTableRow = Vec<Option<String>>;

/// 한 영역에서 추출된 표. 0번 행은 머리글이다.
pub type RawTableGroup = Vec<RawTableRow>;

/// 원시 행의 어느 열이 어떤 값인지 정의한다. 문서 배치가 바뀌면 여기만 고친다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub property: usize,
    pub metric: usize,
    pub imperial: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        // 1번 열은 문서상 비어 있거나 의미 없는 열이다.
        Self {
            property: 0,
            metric: 2,
            imperial: 3,
        }
    }
}

/// 정규화 동작을 조정하는 옵션.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// 앞에서부터 버릴 표 개수 (문서 첫 표는 자료가 아닌 안내 표)
    pub skip_leading_groups: usize,
    /// 실제 자료 구간의 시작을 표시하는 문구 (대소문자 무시)
    pub section_marker: String,
    /// 이어지는 행에 붙일 접미사
    pub alternative_suffix: String,
    pub layout: ColumnLayout,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            skip_leading_groups: 1,
            section_marker: "properties".to_string(),
            alternative_suffix: " (Alternative)".to_string(),
            layout: ColumnLayout::default(),
        }
    }
}

/// 정돈된 표의 한 행.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub property: String,
    pub metric: String,
    pub imperial: String,
}

impl PropertyRecord {
    pub fn new(
        property: impl Into<String>,
        metric: impl Into<String>,
        imperial: impl Into<String>,
    ) -> Self {
        Self {
            property: property.into(),
            metric: metric.into(),
            imperial: imperial.into(),
        }
    }

    /// 세 필드 중 하나라도 `needle`을 대소문자 구분 없이 포함하는지 확인한다.
    pub fn mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.property, &self.metric, &self.imperial]
            .iter()
            .any(|f| f.to_lowercase().contains(&needle))
    }
}

/// 문서 행 순서를 유지하는 물성 표. 만들어진 뒤에는 읽기만 가능하다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    records: Vec<PropertyRecord>,
}

impl PropertyTable {
    pub fn from_records(records: Vec<PropertyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyRecord> {
        self.records.iter()
    }

    /// 속성 이름이 정확히 일치하는 첫 행을 찾는다.
    pub fn get(&self, property: &str) -> Option<&PropertyRecord> {
        self.records.iter().find(|r| r.property == property)
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = &'a PropertyRecord;
    type IntoIter = std::slice::Iter<'a, PropertyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// 열 선택 직후의 행. 속성 이름이 비어 있으면 이어지는 행이다.
#[derive(Debug)]
struct LabelledRow {
    property: Option<String>,
    metric: Option<String>,
    imperial: Option<String>,
}

impl LabelledRow {
    fn contains(&self, marker_lower: &str) -> bool {
        [&self.property, &self.metric, &self.imperial]
            .into_iter()
            .flatten()
            .any(|cell| cell.to_lowercase().contains(marker_lower))
    }
}

fn clean_cell(cell: &Option<String>) -> Option<String> {
    let text = cell.as_deref()?.trim();
    if text.is_empty() || text == "None" {
        None
    } else {
        Some(text.to_string())
    }
}

fn pick(row: &[Option<String>], idx: usize) -> Option<String> {
    row.get(idx).cloned().flatten()
}

/// 기본 옵션으로 [`normalize_with`]를 호출한다.
pub fn normalize(groups: &[RawTableGroup]) -> PropertyTable {
    normalize_with(groups, &NormalizeOptions::default())
}

/// 원시 표 묶음을 [`PropertyTable`]로 정규화한다.
///
/// 입력이 비어 있거나 자료 구간을 찾지 못하면 빈 표를 돌려준다. 실패하지 않는다.
pub fn normalize_with(groups: &[RawTableGroup], opts: &NormalizeOptions) -> PropertyTable {
    let layout = opts.layout;

    // 1~3단계: 앞쪽 표와 머리글을 버리고, 빈 셀을 정리한 뒤 열을 고른다.
    let rows: Vec<LabelledRow> = groups
        .iter()
        .skip(opts.skip_leading_groups)
        .flat_map(|group| group.iter().skip(1))
        .map(|row| row.iter().map(clean_cell).collect::<Vec<_>>())
        .filter(|cells| cells.iter().any(Option::is_some))
        .map(|cells| LabelledRow {
            property: pick(&cells, layout.property),
            metric: pick(&cells, layout.metric),
            imperial: pick(&cells, layout.imperial),
        })
        .collect();
    debug!(rows = rows.len(), "원시 표 행 병합 완료");

    // 4단계: 이어지는 행에는 마지막으로 이름이 있던 속성에 접미사를 붙인다.
    let mut last_label: Option<String> = None;
    let rows: Vec<LabelledRow> = rows
        .into_iter()
        .map(|mut row| {
            match &row.property {
                Some(label) => last_label = Some(label.clone()),
                None => {
                    row.property = last_label
                        .as_ref()
                        .map(|label| format!("{label}{}", opts.alternative_suffix));
                }
            }
            row
        })
        .collect();

    // 5단계: 첫 섹션 표시 행 이전을 버리고 섹션 표시 행을 모두 제거한다.
    let marker = opts.section_marker.to_lowercase();
    let Some(start) = rows.iter().position(|r| r.contains(&marker)) else {
        debug!(marker = %opts.section_marker, "자료 구간을 찾지 못함");
        return PropertyTable::default();
    };

    let records: Vec<PropertyRecord> = rows
        .into_iter()
        .skip(start)
        .filter(|r| !r.contains(&marker))
        .filter_map(|r| {
            // 앞선 속성이 없는 이어지는 행은 붙일 곳이 없다.
            let property = r.property?;
            Some(PropertyRecord {
                property,
                metric: r.metric.unwrap_or_default(),
                imperial: r.imperial.unwrap_or_default(),
            })
        })
        .collect();
    debug!(records = records.len(), "물성 표 정규화 완료");

    PropertyTable::from_records(records)
}
