use serde::{Deserialize, Serialize};

/// 응력/압력 단위. 내부 기준은 절대 Pa이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Atm,
    Psi,
}

const PA_PER_ATM: f64 = 101_325.0;
const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757;

/// 알 수 없는 단위 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownUnit(pub String);

impl std::fmt::Display for UnknownUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "알 수 없는 단위: {}", self.0)
    }
}

impl std::error::Error for UnknownUnit {}

impl PressureUnit {
    /// 1 단위가 몇 Pa인지 반환한다.
    pub fn pascals(self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1.0e3,
            PressureUnit::MegaPascal => 1.0e6,
            PressureUnit::Bar => PA_PER_BAR,
            PressureUnit::Atm => PA_PER_ATM,
            PressureUnit::Psi => PA_PER_PSI,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Atm => "atm",
            PressureUnit::Psi => "psi",
        }
    }
}

impl std::str::FromStr for PressureUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pa" => Ok(PressureUnit::Pascal),
            "kpa" => Ok(PressureUnit::KiloPascal),
            "mpa" | "n/mm2" | "n/mm²" => Ok(PressureUnit::MegaPascal),
            "bar" => Ok(PressureUnit::Bar),
            "atm" => Ok(PressureUnit::Atm),
            "psi" => Ok(PressureUnit::Psi),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

/// 주어진 값을 Pa로 변환한다.
pub fn to_pa(value: f64, unit: PressureUnit) -> f64 {
    value * unit.pascals()
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pa(value_pa: f64, unit: PressureUnit) -> f64 {
    value_pa / unit.pascals()
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_pa(to_pa(value, from), to)
}
