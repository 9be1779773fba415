//! 얇은 원통 배관의 원주(후프) 응력과 항복강도 비교.
//!
//! 굽힘부는 응력 증가 계수 `i = max(0.9 / h^(2/3), 1)`, `h = R·t / r_m²`로 보정한다.

use seuif97::{pt, ODV};

/// 배관 응력 계산 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum PipeStressError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
    /// IF97 물성 계산 실패
    Fluid(&'static str),
}

impl std::fmt::Display for PipeStressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipeStressError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
            PipeStressError::Fluid(msg) => write!(f, "유체 물성 오류: {msg}"),
        }
    }
}

impl std::error::Error for PipeStressError {}

/// 배관 응력 검토 입력값. 압력은 모두 Pa(절대)이다.
#[derive(Debug, Clone)]
pub struct PipeStressInput {
    /// 외경 [m]
    pub outer_diameter_m: f64,
    /// 두께 [m]
    pub thickness_m: f64,
    pub internal_pressure_pa: f64,
    pub external_pressure_pa: f64,
    /// 굽힘 반경 [m]. 직관이면 `None`.
    pub bend_radius_m: Option<f64>,
    pub safety_factor: f64,
}

/// 배관 응력 검토 결과.
#[derive(Debug, Clone)]
pub struct PipeStressResult {
    pub inner_radius_m: f64,
    pub mean_radius_m: f64,
    /// 굽힘 보정 계수 (직관 = 1)
    pub correction_factor: f64,
    /// 보정된 원주 응력 [Pa]
    pub hoop_stress_pa: f64,
    pub yield_strength_pa: f64,
    /// 안전율을 적용한 허용 응력 [Pa]
    pub adjusted_yield_pa: f64,
    pub passes: bool,
}

/// 외경과 두께로 내반경을 구한다.
pub fn inner_radius(outer_diameter_m: f64, thickness_m: f64) -> f64 {
    outer_diameter_m / 2.0 - thickness_m
}

/// 원주 응력 `σh = (Pi - Po)·D / (2t)`.
pub fn hoop_stress(
    internal_pressure_pa: f64,
    external_pressure_pa: f64,
    outer_diameter_m: f64,
    thickness_m: f64,
) -> f64 {
    (internal_pressure_pa - external_pressure_pa) * outer_diameter_m / (2.0 * thickness_m)
}

pub fn bend_correction_factor(bend_radius_m: f64, thickness_m: f64, mean_radius_m: f64) -> f64 {
    let h = bend_radius_m * thickness_m / (mean_radius_m * mean_radius_m);
    (0.9 / h.powf(2.0 / 3.0)).max(1.0)
}

/// 원주 응력을 계산하고 안전율을 적용한 항복강도와 비교한다.
pub fn evaluate(
    input: &PipeStressInput,
    yield_strength_pa: f64,
) -> Result<PipeStressResult, PipeStressError> {
    if input.outer_diameter_m <= 0.0 || input.thickness_m <= 0.0 {
        return Err(PipeStressError::InvalidInput(
            "외경과 두께는 0보다 커야 합니다.",
        ));
    }
    let r_in = inner_radius(input.outer_diameter_m, input.thickness_m);
    if r_in <= 0.0 {
        return Err(PipeStressError::InvalidInput(
            "두께가 외경의 절반 이상입니다.",
        ));
    }
    if input.safety_factor <= 0.0 {
        return Err(PipeStressError::InvalidInput("안전율은 0보다 커야 합니다."));
    }
    let r_mean = (input.outer_diameter_m / 2.0 + r_in) / 2.0;

    let correction_factor = match input.bend_radius_m {
        Some(r) if r > 0.0 => bend_correction_factor(r, input.thickness_m, r_mean),
        Some(_) => {
            return Err(PipeStressError::InvalidInput(
                "굽힘 반경은 0보다 커야 합니다.",
            ))
        }
        None => 1.0,
    };

    let hoop = correction_factor
        * hoop_stress(
            input.internal_pressure_pa,
            input.external_pressure_pa,
            input.outer_diameter_m,
            input.thickness_m,
        );
    let adjusted_yield = yield_strength_pa / input.safety_factor;

    Ok(PipeStressResult {
        inner_radius_m: r_in,
        mean_radius_m: r_mean,
        correction_factor,
        hoop_stress_pa: hoop,
        yield_strength_pa,
        adjusted_yield_pa: adjusted_yield,
        passes: hoop <= adjusted_yield,
    })
}

/// 물의 점성계수 [Pa·s]. IF97 기준, 입력은 K/Pa.
pub fn water_dynamic_viscosity(temperature_k: f64, pressure_pa: f64) -> Result<f64, PipeStressError> {
    if temperature_k <= 0.0 || pressure_pa <= 0.0 {
        return Err(PipeStressError::InvalidInput(
            "온도와 압력은 0보다 커야 합니다.",
        ));
    }
    let mu = pt(pressure_pa / 1.0e6, temperature_k - 273.15, ODV);
    if mu.is_nan() || mu <= 0.0 {
        return Err(PipeStressError::Fluid(
            "IF97 계산 실패(유효 범위 밖이거나 수렴 실패)",
        ));
    }
    Ok(mu)
}
