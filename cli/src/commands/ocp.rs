use colored::*;
use solid_core::config::Config;
use solid_core::domain::models::shape::{Circle, Rectangle, Shape};

use crate::terminal::print;

pub fn ocp(cfg: &Config) -> anyhow::Result<()> {
    print::header("open / closed", cfg.quiet);
    print::note("Every variant answers the same question its own way.", cfg.quiet);

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(5.0, 10.0)),
        Box::new(Circle::new(7.0)),
    ];

    for (idx, shape) in shapes.iter().enumerate() {
        print::tree_head(idx, shape.label());

        let mut rows: Vec<(String, ColoredString)> = shape
            .dimensions()
            .into_iter()
            .map(|(name, value)| (name.to_string(), format!("{value:.2}").normal()))
            .collect();
        rows.push(("area".to_string(), format!("{:.2}", shape.area()).green().bold()));

        print::tree(rows);
        if idx + 1 != shapes.len() {
            print::blank();
        }
    }

    Ok(())
}
