use clap::Parser;
use kb_provisioner::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Provision(args) => cli::provision::run(args).await,
    }
}
