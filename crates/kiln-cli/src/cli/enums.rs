use clap::ValueEnum;

/// Serialization used when printing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PrintFormat {
    #[default]
    Json,
    Toml,
}

/// File flavour written by `kiln init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InitFormat {
    /// kiln.toml
    #[default]
    Toml,
    /// kiln.config.json
    Json,
}

impl InitFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            InitFormat::Toml => kiln_config::discovery::TOML_CONFIG_FILE,
            InitFormat::Json => kiln_config::discovery::JSON_CONFIG_FILE,
        }
    }
}

