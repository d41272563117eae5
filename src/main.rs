use std::process::ExitCode;

use murl::app;
use murl::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cfg = Config::load();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(cfg.log_level)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let mut out = std::io::stdout();
    let code = app::run(&cfg, &mut out).await;

    Ok(ExitCode::from(code))
}
