use anyhow::Context;
use clap::Parser;

use helios::cli::{Cli, Command};
use helios::config::Config;
use helios::host::probe;
use helios::logging;
use helios::panel::HostPanel;
use helios::server::StatusServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command();

    match command {
        Command::Watch { .. } => logging::init_file_from_env(),
        Command::Serve { .. } | Command::Show => logging::init_stderr(),
    }

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if matches!(command, Command::Serve { .. }) {
        config.apply_port_override(std::env::var("PORT").ok().as_deref())?;
    }
    command.apply(&mut config);
    config.validate()?;

    match command {
        Command::Serve { .. } => {
            let server = StatusServer::bind(&config).await?;
            server.run().await?;
        }
        Command::Watch { .. } => helios::ui::run(&config).await?,
        Command::Show => {
            let data = tokio::task::spawn_blocking(probe::collect).await?;
            print!("{}", HostPanel::build(&config.panel.user, &data).to_text());
        }
    }

    Ok(())
}
