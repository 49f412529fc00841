use colored::*;
use solid_core::config::Config;
use solid_core::domain::models::principle::Principle;

use crate::terminal::print;

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::header("five principles", cfg.quiet);
    print::note("Each one has its own subcommand; `all` walks the lot.", cfg.quiet);

    for (idx, principle) in Principle::ALL.iter().enumerate() {
        print::tree_head(idx, principle.code());
        print::tree(vec![
            ("name".to_string(), principle.name().bold()),
            ("idea".to_string(), principle.summary().normal()),
        ]);
        if idx + 1 != Principle::ALL.len() {
            print::blank();
        }
    }

    Ok(())
}
