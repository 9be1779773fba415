use clap::Parser;
use material_property_toolbox::cli::{CommandLineArgs, GlobalArgs};
use material_property_toolbox::{app, config};

/// 프로그램의 엔트리 포인트. 로그와 설정을 준비한 뒤 하위 명령을 실행한다.
fn main() {
    let args = CommandLineArgs::parse();
    if let Err(err) = try_run(args) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(args: CommandLineArgs) -> Result<(), Box<dyn std::error::Error>> {
    configure_tracing(&args.global)?;
    let cfg = config::load_or_default(&args.global.config)?;
    app::run(args.command, &cfg)?;
    Ok(())
}

/// `-q`/`-v` 옵션과 `MPT_LOG` 환경 변수에 따라 stderr 로그를 설정한다.
fn configure_tracing(global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{filter::LevelFilter, EnvFilter};

    let level_filter = if global.quiet {
        LevelFilter::ERROR
    } else {
        match global.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("MPT_LOG")
        .from_env()?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
