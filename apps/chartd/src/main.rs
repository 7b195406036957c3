use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = aphrodite_config::load_settings().context("Failed to load chartd settings")?;
    log::info!(
        "chartd starting: bind {}, ephemeris {:?}",
        settings.server.bind_addr,
        settings.ephemeris.provider
    );

    let provider = chartd::build_provider(&settings.ephemeris);
    let state = chartd::AppState::new(provider);
    log::info!("ephemeris provider: {}", state.engine().provider_name());

    chartd::serve(&settings.server, state).await
}
