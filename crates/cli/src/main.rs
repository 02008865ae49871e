fn main() -> anyhow::Result<()> {
    // Notices are narrated on stdout; logs only need to surface problems.
    vendsim_observability::init_with_default_filter("warn")?;

    let config = vendsim_cli::DemoConfig::from_env()?;
    tracing::info!(scenario = ?config.scenario, output = ?config.output, "starting demo");

    let stdout = std::io::stdout();
    let mut narrator = vendsim_cli::Narrator::new(stdout.lock(), config.output);
    vendsim_cli::run(&config, &mut narrator)
}
