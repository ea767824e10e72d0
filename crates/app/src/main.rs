use anyhow::Context;

use warehouse_infra::AppConfig;

fn main() -> anyhow::Result<()> {
    warehouse_observability::init();

    let config = AppConfig::from_env().context("loading configuration")?;
    tracing::info!(snapshot = %config.snapshot_path.display(), "starting warehouse demo");

    let today = chrono::Local::now().date_naive();
    let stdout = std::io::stdout();
    warehouse_app::run(&config, today, &mut stdout.lock())
}
