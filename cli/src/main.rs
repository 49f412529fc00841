mod commands;
mod terminal;

use commands::{CommandLine, Commands, all, dip, info, isp, lsp, ocp, srp};
use solid_core::config::Config;
use terminal::{banner, logging};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };
    banner::print(&cfg);

    match commands.command {
        Commands::Info => info::info(&cfg),
        Commands::Srp => srp::srp(&cfg),
        Commands::Ocp => ocp::ocp(&cfg),
        Commands::Lsp => lsp::lsp(&cfg),
        Commands::Isp => isp::isp(&cfg),
        Commands::Dip => dip::dip(&cfg),
        Commands::All => all::all(&cfg),
    }
}
