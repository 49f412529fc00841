use solid_core::config::Config;
use solid_core::domain::models::bird::{Bird, Penguin, Sparrow};
use tracing::warn;

use crate::terminal::print;

pub fn lsp(cfg: &Config) -> anyhow::Result<()> {
    print::header("liskov substitution", cfg.quiet);
    print::note("Both birds promise a flight. Watch the second one.", cfg.quiet);

    let flock: Vec<Box<dyn Bird>> = vec![Box::new(Sparrow), Box::new(Penguin)];

    for bird in &flock {
        match bird.fly() {
            Ok(report) => print::status(report),
            Err(err) => {
                warn!(species = bird.species(), "flight contract not honored");
                print::failure(&err.to_string());
            }
        }
    }

    Ok(())
}
