/// Editor settings. Built through [`editor::Builder`](crate::editor::Builder).
#[derive(Debug, Clone)]
pub struct Config {
    /// When re-entering foreign mode, keep the field's current external
    /// target if it is still a valid candidate instead of recomputing the
    /// default.
    pub preserve_explicit_target: bool,

    /// Passed through to every table fetch.
    pub force_reload: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            preserve_explicit_target: false,
            force_reload: true,
        }
    }
}
