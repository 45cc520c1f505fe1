use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::info;
use taskmate::app::Application;
use taskmate::cli::Cli;
use taskmate::config::Config;

const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging with custom format
    let default_level = config.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    info!("Starting Taskmate");

    let mut app = Application::new(&config, cli.data_file.clone())?;
    match cli.one_shot() {
        Some(line) => app.run_once(&line),
        None => app.run(),
    }
}
