use colored::*;
use solid_core::config::Config;
use unicode_width::UnicodeWidthStr;

use crate::terminal::print::TOTAL_WIDTH;

const BANNER_0: &str = r#"
      ███████╗ ██████╗ ██╗     ██╗██████╗
      ██╔════╝██╔═══██╗██║     ██║██╔══██╗
      ███████╗██║   ██║██║     ██║██║  ██║
      ╚════██║██║   ██║██║     ██║██║  ██║
      ███████║╚██████╔╝███████╗██║██████╔╝
      ╚══════╝ ╚═════╝ ╚══════╝╚═╝╚═════╝
"#;

const BANNER_1: &str = r#"
         _____ ____  __    ________
        / ___// __ \/ /   /  _/ __ \
        \__ \/ / / / /    / // / / /
       ___/ / /_/ / /___ _/ // /_/ /
      /____/\____/_____//___/_____/
"#;

const BANNER_2: &str = r#"
      ▄▄▄▄▄▄ ▄▄▄▄▄▄ ▄▄     ▄▄▄ ▄▄▄▄▄
      █▄▄▄▄  █    █ █       █  █   █
      ▄▄▄▄ █ █    █ █       █  █   █
      ▀▀▀▀▀▀ ▀▀▀▀▀▀ ▀▀▀▀▀▀ ▀▀▀ ▀▀▀▀▀
"#;

pub fn print(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    version_line();

    match rand::random_range(0..=2) {
        0 => println!("{}", BANNER_0.red()),
        1 => println!("{}", BANNER_1.truecolor(255, 165, 0)),
        _ => println!("{}", BANNER_2.green()),
    }
}

fn version_line() {
    let text_content: String = format!("⟦ SOLID v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    println!("{}{}{}", sep, text, sep);
}
