use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::units::PressureUnit;

/// 재료 이름으로 물성 표를 찾고 필요한 수치를 뽑아 배관 응력을 검토한다.
#[derive(Parser, Debug)]
#[command(name = "material_property_toolbox", version, about)]
pub struct CommandLineArgs {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(global = true, long, short = 'c', default_value = "config.toml")]
    pub config: PathBuf,

    /// 로그를 더 자세히 출력 (-v: info, -vv: debug, -vvv: trace)
    #[arg(global = true, long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// 오류 외 로그를 출력하지 않음
    #[arg(global = true, long, short = 'q')]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 재료를 검색해 물성 표를 CSV로 저장
    Fetch(FetchArgs),
    /// 저장된 물성 표에서 속성 값을 찾음
    Resolve(ResolveArgs),
    /// 두 문자열의 편집 거리를 출력
    Distance(DistanceArgs),
    /// 재료 항복강도로 배관 원주 응력을 검토
    Stress(StressArgs),
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// 재료 이름 (예: "6061 Aluminum")
    pub material: String,

    /// 검색 결과와 추출 표를 담은 JSON 픽스처
    #[arg(long)]
    pub fixture: PathBuf,

    /// 저장할 CSV 경로 (기본값은 설정 파일의 output_csv)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// 검색된 후보를 모두 출력
    #[arg(long)]
    pub list: bool,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// `fetch`로 저장한 CSV
    pub table: PathBuf,

    /// 찾을 속성 이름 (기본값은 설정 파일의 target_property)
    pub property: Option<String>,

    /// 표의 미터법 값 단위
    #[arg(long, default_value = "MPa", value_parser = parse_unit)]
    pub unit: PressureUnit,
}

#[derive(Args, Debug)]
pub struct DistanceArgs {
    pub a: String,
    pub b: String,
}

#[derive(Args, Debug)]
pub struct StressArgs {
    /// 검색 결과와 추출 표를 담은 JSON 픽스처
    #[arg(long)]
    pub fixture: PathBuf,

    /// 배관 재료
    #[arg(long)]
    pub material: Option<String>,

    /// 외경 [m]
    #[arg(long)]
    pub outer_diameter: Option<f64>,

    /// 두께 [m]
    #[arg(long)]
    pub thickness: Option<f64>,

    /// 내압 [atm]
    #[arg(long)]
    pub internal_pressure: Option<f64>,

    /// 외압 [atm]
    #[arg(long)]
    pub external_pressure: Option<f64>,

    /// 굽힘 반경 [m]. 생략하면 직관으로 본다.
    #[arg(long)]
    pub bend_radius: Option<f64>,

    #[arg(long)]
    pub safety_factor: Option<f64>,

    /// 유체(물) 온도 [K]
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 표의 미터법 값 단위
    #[arg(long, default_value = "MPa", value_parser = parse_unit)]
    pub unit: PressureUnit,
}

fn parse_unit(s: &str) -> Result<PressureUnit, String> {
    s.parse::<PressureUnit>().map_err(|e| e.to_string())
}
