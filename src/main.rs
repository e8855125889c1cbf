//! `shoparch` 바이너리 진입점.

use std::sync::Arc;

use shoparch::interface::cli::{
    AppComposition, Cli, CliAction, OneShotStatus, run_oneshot, run_repl,
};

#[tokio::main]
async fn main() {
    // 로그는 stderr로 보내 렌더링 결과(stdout)와 섞이지 않게 한다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let invocation = Cli::parse_action();

    let composition = match AppComposition::load(invocation.no_color) {
        Ok(composition) => composition,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    };

    match invocation.action {
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Generate(request) => match run_oneshot(&composition, request).await {
            Ok(OneShotStatus::Done) => {}
            Ok(OneShotStatus::Blocked(field)) => {
                eprintln!("error: {field} must not be empty");
                std::process::exit(2);
            }
            Ok(OneShotStatus::Failed) => std::process::exit(1),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Interactive => {
            if let Err(err) = run_repl(Arc::new(composition)).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
