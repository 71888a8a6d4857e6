//! Error types for the `questline` binary.

/// Top-level error for the `questline` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No plan file was given on the command line.
    #[error("usage: questline <plan.yaml>")]
    Usage,

    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: questline_core::config::ConfigError,
    },

    /// The plan file could not be read.
    #[error("failed to read plan file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The plan file is not valid YAML.
    #[error("failed to parse plan YAML: {source}")]
    Yaml {
        /// The underlying YAML error.
        #[from]
        source: serde_yml::Error,
    },

    /// The onboarding answers were rejected.
    #[error("onboarding error: {source}")]
    Session {
        /// The underlying session error.
        #[from]
        source: questline_core::onboarding::SessionError,
    },

    /// The plan could not be rendered.
    #[error("failed to render plan: {source}")]
    Render {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
