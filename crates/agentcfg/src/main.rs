//! agentcfg - Entry Point
//!
//! | Mode | Command | Description |
//! |------|---------|-------------|
//! | **Daemon** | `agentcfg` | Polls until Ctrl-C, applying each new configuration |
//! | **Once** | `agentcfg --once` | Polls once and prints the effective settings as JSON |

use clap::Parser;

/// Command line interface for agentcfg
#[derive(Parser, Debug)]
#[command(name = "agentcfg")]
#[command(about = "Central configuration client for APM agents")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Poll once, print the effective settings and exit
    #[arg(long)]
    pub once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    agentcfg::run(cli.config.as_deref(), cli.once).await
}
