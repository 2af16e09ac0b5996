mod setup;

use clap::Parser;
use directories::ProjectDirs;
use setup::Cli;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use userstore::api::RecordApi;
use userstore::config::StoreConfig;
use userstore::error::Result;
use userstore::store::fs_backend::FsBackend;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let user_config = user_config_path();
    let config = StoreConfig::load(cli.config.as_deref(), user_config.as_deref())?;
    init_logging(cli.verbose, &config);
    debug!(?config, "loaded configuration");

    let backend = FsBackend::new().with_write_mode(config.write_mode());
    let api = RecordApi::new(backend);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    api.perform(&cli.arguments(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "userstore", "userstore").map(|d| d.config_dir().join("config.toml"))
}

fn init_logging(verbose: bool, config: &StoreConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
