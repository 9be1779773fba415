use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::material::NormalizeOptions;

/// 배관 응력 검토 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressDefaults {
    pub material: String,
    /// 외경 [m]
    pub outer_diameter_m: f64,
    /// 두께 [m]
    pub thickness_m: f64,
    /// 내압 [atm]
    pub internal_pressure_atm: f64,
    /// 외압 [atm]
    pub external_pressure_atm: f64,
    pub safety_factor: f64,
    /// 유체 온도 [K]
    pub fluid_temperature_k: f64,
}

impl Default for StressDefaults {
    fn default() -> Self {
        Self {
            material: "Copper".to_string(),
            outer_diameter_m: 1.0,
            thickness_m: 0.01,
            internal_pressure_atm: 10.0,
            external_pressure_atm: 1.0,
            safety_factor: 1.0,
            fluid_temperature_k: 298.15,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 조회한 물성 표를 저장할 CSV 경로
    pub output_csv: PathBuf,
    /// 강도 검토에 사용할 속성 이름
    pub target_property: String,
    pub normalize: NormalizeOptions,
    pub stress: StressDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_csv: PathBuf::from("material_table.csv"),
            target_property: "Tensile Strength, Yield".to_string(),
            normalize: NormalizeOptions::default(),
            stress: StressDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
