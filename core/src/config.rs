//! Runtime switches, built by the CLI from its flags.

/// Presentation switches shared by every demonstration.
#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Skips the startup banner.
    pub no_banner: bool,

    /// Verbosity cut.
    ///
    /// 0 prints the full narration, 1 and up keeps results only.
    pub quiet: u8,
}
