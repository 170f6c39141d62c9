use clap::{Parser, Subcommand};
use ferrous_recon_domain::CliOverrides;
use tracing::{error, info, warn};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-recon")]
#[command(version)]
#[command(about = "Ferrous Recon - LAN host discovery and spoof decision engine")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Network interface to monitor
    #[arg(short = 'i', long)]
    interface: Option<String>,

    /// Seconds between ARP table refreshes
    #[arg(long)]
    interval: Option<u64>,

    /// Spoof hosts file
    #[arg(long, value_name = "FILE")]
    hosts_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run session commands, then keep modules alive until Ctrl-C
    Run {
        /// Command to execute at startup (repeatable)
        #[arg(short = 'e', long = "eval", default_value = "net.recon on")]
        commands: Vec<String>,
    },
    /// Print the spoofed address for a name queried by a client
    Resolve {
        name: String,

        #[arg(long, default_value = "127.0.0.1")]
        client: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        interface: cli.interface.clone(),
        interval_secs: cli.interval,
        hosts_file: cli.hosts_file.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Ferrous Recon v{}", env!("CARGO_PKG_VERSION"));

    let adapters = di::Adapters::new(&config);

    match cli.command.unwrap_or(Command::Run {
        commands: vec!["net.recon on".to_string()],
    }) {
        Command::Run { commands } => {
            let use_cases = di::UseCases::new(&config, &adapters).await;
            let modules = di::Modules::new(&config, &use_cases)?;

            for command in &commands {
                if let Err(e) = modules.registry.dispatch(command) {
                    error!(command = %command, error = %e, "Startup command failed");
                    modules.registry.stop_all();
                    return Err(e.into());
                }
            }

            info!(interface = %config.recon.interface, "Session running, press Ctrl-C to stop");
            tokio::signal::ctrl_c().await?;

            modules.registry.stop_all();
            info!("Session ended");
        }
        Command::Resolve { name, client } => {
            let Some(resolve_spoof) = di::UseCases::resolve_spoof(&adapters) else {
                warn!("No hosts file configured, nothing to resolve");
                anyhow::bail!("spoof.hosts_file is not set");
            };

            resolve_spoof.reload().await?;
            match resolve_spoof.execute(&name, &client) {
                Some(address) => println!("{} -> {}", name, address),
                None => println!("{} -> (no spoof)", name),
            }
        }
    }

    Ok(())
}
