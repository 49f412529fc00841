use solid_core::config::Config;
use solid_core::domain::models::principle::Principle;

use crate::commands::{dip, isp, lsp, ocp, srp};
use crate::terminal::print;

/// Walks every demonstration in catalog order, one after the other.
pub fn all(cfg: &Config) -> anyhow::Result<()> {
    for (idx, principle) in Principle::ALL.iter().enumerate() {
        if idx > 0 {
            print::blank();
        }

        match principle {
            Principle::SingleResponsibility => srp::srp(cfg)?,
            Principle::OpenClosed => ocp::ocp(cfg)?,
            Principle::LiskovSubstitution => lsp::lsp(cfg)?,
            Principle::InterfaceSegregation => isp::isp(cfg)?,
            Principle::DependencyInversion => dip::dip(cfg)?,
        }
    }

    if cfg.quiet == 0 {
        print::blank();
        print::fat_separator();
        print::centered("five principles, five working demonstrations");
    }

    Ok(())
}
