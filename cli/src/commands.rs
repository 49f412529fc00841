pub mod all;
pub mod dip;
pub mod info;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "solid")]
#[command(about = "Five design principles, demonstrated by a working example each.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Trim the narration, keep the results
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the five principles
    #[command(alias = "i")]
    Info,
    /// Single responsibility: one type per job
    #[command(alias = "s")]
    Srp,
    /// Open/closed: extend with new variants instead of editing old ones
    #[command(alias = "o")]
    Ocp,
    /// Liskov substitution: a promise one variant refuses to keep
    #[command(alias = "l")]
    Lsp,
    /// Interface segregation: small contracts, taken as needed
    #[command(alias = "p")]
    Isp,
    /// Dependency inversion: depend on the trait, not the channel
    #[command(alias = "d")]
    Dip,
    /// Run every demonstration in order
    #[command(alias = "a")]
    All,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
