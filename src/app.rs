use tracing::info;

use crate::cli::{Command, DistanceArgs, FetchArgs, ResolveArgs, StressArgs};
use crate::config::Config;
use crate::export::{self, ExportError};
use crate::material::fixture::{FixtureError, MaterialFixture};
use crate::material::{
    levenshtein, resolve, MatchMethod, MaterialDataService, PropertyTable, ResolveError,
    ResolvedMatch, RetrievalError,
};
use crate::pipe_stress::{self, PipeStressError, PipeStressInput};
use crate::units::{to_pa, PressureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 픽스처 로드 오류
    Fixture(FixtureError),
    /// CSV 입출력 오류
    Export(ExportError),
    /// 자료 조회 실패 (검색 결과 없음 / 물성 표 없음)
    Retrieval(RetrievalError),
    /// 속성 값 해석 오류
    Resolve(ResolveError),
    /// 표가 비어 있어 속성을 찾을 수 없음
    PropertyNotFound(String),
    /// 배관 응력 계산 오류
    PipeStress(PipeStressError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Fixture(e) => write!(f, "픽스처 오류: {e}"),
            AppError::Export(e) => write!(f, "표 저장/로드 오류: {e}"),
            AppError::Retrieval(e) => write!(f, "자료 없음: {e}"),
            AppError::Resolve(e) => write!(f, "속성 해석 오류: {e}"),
            AppError::PropertyNotFound(p) => write!(f, "'{p}' 속성을 찾을 수 없습니다 (빈 표)."),
            AppError::PipeStress(e) => write!(f, "배관 응력 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<FixtureError> for AppError {
    fn from(value: FixtureError) -> Self {
        AppError::Fixture(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        AppError::Export(value)
    }
}

impl From<RetrievalError> for AppError {
    fn from(value: RetrievalError) -> Self {
        AppError::Retrieval(value)
    }
}

impl From<ResolveError> for AppError {
    fn from(value: ResolveError) -> Self {
        AppError::Resolve(value)
    }
}

impl From<PipeStressError> for AppError {
    fn from(value: PipeStressError) -> Self {
        AppError::PipeStress(value)
    }
}

/// 하위 명령을 실행한다.
pub fn run(command: Command, config: &Config) -> Result<(), AppError> {
    match command {
        Command::Fetch(args) => cmd_fetch(args, config),
        Command::Resolve(args) => cmd_resolve(args, config),
        Command::Distance(args) => {
            cmd_distance(args);
            Ok(())
        }
        Command::Stress(args) => cmd_stress(args, config),
    }
}

fn cmd_fetch(args: FetchArgs, config: &Config) -> Result<(), AppError> {
    let fixture = MaterialFixture::load(&args.fixture)?;
    let service =
        MaterialDataService::with_options(&fixture, &fixture, &fixture, config.normalize.clone());

    if args.list {
        let ranked = crate::material::rank(&args.material, &service.candidates(&args.material));
        println!("검색된 후보:");
        for (idx, scored) in ranked.iter().enumerate() {
            println!(
                "{}. {} - {} (거리 {})",
                idx + 1,
                scored.candidate.name,
                scored.candidate.locator,
                scored.distance
            );
        }
    }

    let retrieval = service.retrieve(&args.material)?;
    println!(
        "최적 후보: {} - {}",
        retrieval.best.candidate.name, retrieval.best.candidate.locator
    );

    let output = args.output.unwrap_or_else(|| config.output_csv.clone());
    export::write_table_file(&output, &retrieval.table)?;
    info!(path = %output.display(), records = retrieval.table.len(), "물성 표 저장");
    println!("물성 표를 저장했습니다: {} ({}행)", output.display(), retrieval.table.len());
    Ok(())
}

fn cmd_resolve(args: ResolveArgs, config: &Config) -> Result<(), AppError> {
    let table = export::read_table_file(&args.table)?;
    let property = args
        .property
        .unwrap_or_else(|| config.target_property.clone());
    let found = resolve_required(&table, &property)?;
    print_match(&found, args.unit);
    Ok(())
}

fn cmd_distance(args: DistanceArgs) {
    println!("{}", levenshtein(&args.a, &args.b));
}

fn cmd_stress(args: StressArgs, config: &Config) -> Result<(), AppError> {
    let defaults = &config.stress;
    let material = args.material.unwrap_or_else(|| defaults.material.clone());
    let input = PipeStressInput {
        outer_diameter_m: args.outer_diameter.unwrap_or(defaults.outer_diameter_m),
        thickness_m: args.thickness.unwrap_or(defaults.thickness_m),
        internal_pressure_pa: to_pa(
            args.internal_pressure.unwrap_or(defaults.internal_pressure_atm),
            PressureUnit::Atm,
        ),
        external_pressure_pa: to_pa(
            args.external_pressure.unwrap_or(defaults.external_pressure_atm),
            PressureUnit::Atm,
        ),
        bend_radius_m: args.bend_radius,
        safety_factor: args.safety_factor.unwrap_or(defaults.safety_factor),
    };
    let temperature_k = args.temperature.unwrap_or(defaults.fluid_temperature_k);

    let fixture = MaterialFixture::load(&args.fixture)?;
    let service =
        MaterialDataService::with_options(&fixture, &fixture, &fixture, config.normalize.clone());
    let retrieval = service.retrieve(&material)?;
    let found = resolve_required(&retrieval.table, &config.target_property)?;
    let yield_pa = to_pa(found.value, args.unit);

    let viscosity = pipe_stress::water_dynamic_viscosity(temperature_k, input.external_pressure_pa)?;
    let result = pipe_stress::evaluate(&input, yield_pa)?;

    println!("재료: {}", retrieval.best.candidate.name);
    print_match(&found, args.unit);
    println!("물 점성계수 ({temperature_k:.2} K): {viscosity:.4e} Pa·s");
    if input.bend_radius_m.is_some() {
        println!("굽힘 보정 계수: {:.2}", result.correction_factor);
    }
    println!("원주 응력(굽힘 보정): {:.2} Pa", result.hoop_stress_pa);
    println!("항복강도: {:.2} Pa", result.yield_strength_pa);
    println!("허용 응력(안전율 적용): {:.2} Pa", result.adjusted_yield_pa);
    if result.passes {
        println!("판정: 통과 - 원주 응력이 허용 응력 이내입니다.");
    } else {
        println!("판정: 불합격 - 원주 응력이 허용 응력을 초과합니다.");
    }
    Ok(())
}

fn resolve_required(table: &PropertyTable, property: &str) -> Result<ResolvedMatch, AppError> {
    resolve(table, property)?.ok_or_else(|| AppError::PropertyNotFound(property.to_string()))
}

fn print_match(found: &ResolvedMatch, unit: PressureUnit) {
    match found.method {
        MatchMethod::Substring => println!("속성: {}", found.record.property),
        MatchMethod::Fuzzy { distance } => println!(
            "속성: {} (가장 가까운 속성, 편집 거리 {distance})",
            found.record.property
        ),
    }
    println!(
        "값: {} {} ({:.2} Pa) / 원문: {}",
        found.value,
        unit.symbol(),
        to_pa(found.value, unit),
        found.record.metric
    );
}
