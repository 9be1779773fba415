//! 재료 이름 해석과 물성 표 정규화 모듈 모음.

pub mod candidate;
pub mod edit_distance;
pub mod fixture;
pub mod resolver;
pub mod service;
pub mod table;

pub use candidate::{rank, select_best, ScoredCandidate, SearchCandidate};
pub use edit_distance::levenshtein;
pub use resolver::{first_number, resolve, MatchMethod, ResolveError, ResolvedMatch};
pub use service::{
    CollaboratorError, DocumentRenderer, MaterialDataService, MaterialRetrieval, MaterialSearch,
    RetrievalError, TableExtractor,
};
pub use table::{
    normalize, normalize_with, ColumnLayout, NormalizeOptions, PropertyRecord, PropertyTable,
    RawTableGroup, RawTableRow,
};
