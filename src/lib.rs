//! 재료 이름 해석·물성 표 정규화 로직을 라이브러리로 분리하여 CLI 외의 도구에서도 재사용한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod export;
pub mod material;
pub mod pipe_stress;
pub mod units;
