pub struct Config {
    /// Output suppression level.
    ///
    /// 1 hides the banner and section headers, 2 additionally hides
    /// listing bodies. The menu itself is always shown.
    pub quiet: u8,
    /// Skips the startup banner without touching anything else.
    pub no_banner: bool,
    /// Disables colored output entirely.
    pub plain: bool,
}
