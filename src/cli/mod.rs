//! CLI for the knowledge base provisioner

pub mod provision;

use clap::{Parser, Subcommand};

/// Provision web crawler knowledge bases against a managed control plane
#[derive(Parser)]
#[command(name = "kb-provisioner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ensure the execution role, then create a knowledge base with a web
    /// crawler data source
    Provision(provision::ProvisionArgs),
}
