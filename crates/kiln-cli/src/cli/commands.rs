use clap::{Args, Subcommand};
use std::path::PathBuf;

use kiln_config::Overrides;

use crate::cli::enums::*;

/// Available Kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the effective configuration
    ///
    /// Merges defaults, the config file, KILN_* environment variables and
    /// command-line overrides, applies the selected profile, and prints the
    /// result to stdout.
    Show(ShowArgs),

    /// Validate configuration
    ///
    /// Checks field values without touching the filesystem; with --fs also
    /// checks that the entry file and content base exist.
    Check(CheckArgs),

    /// Write a starter config file with the built-in values
    Init(InitArgs),

    /// List profiles declared in the config file
    Profiles(ProfilesArgs),

    /// Print the JSON Schema for config files
    Schema,
}

/// Where configuration comes from. Shared by `show` and `check`.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Config file to read instead of discovering one
    ///
    /// Relative paths are taken from --root.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile to apply (falls back to KILN_PROFILE)
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Project root used for discovery and path resolution
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Ignore KILN_* environment variables
    #[arg(long)]
    pub no_env: bool,

    /// Override the entry file
    #[arg(long, value_name = "PATH")]
    pub entry: Option<String>,

    /// Override output.path
    #[arg(long, value_name = "DIR")]
    pub output_path: Option<String>,

    /// Override output.publicPath
    #[arg(long, value_name = "URL", allow_hyphen_values = true)]
    pub public_path: Option<String>,

    /// Override output.filename
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Override output.contentBase
    #[arg(long, value_name = "DIR")]
    pub content_base: Option<String>,
}

impl SourceArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            entry: self.entry.clone(),
            output_path: self.output_path.clone(),
            public_path: self.public_path.clone(),
            filename: self.filename.clone(),
            content_base: self.content_base.clone(),
        }
    }
}

/// Arguments for the show command
#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = PrintFormat::Json)]
    pub format: PrintFormat,

    /// Print paths resolved against the project root instead of raw values
    #[arg(long)]
    pub resolved: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Also check that the entry file and content base exist
    #[arg(long)]
    pub fs: bool,
}

/// Arguments for the init command
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write the config file into
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file flavour
    #[arg(short, long, value_enum, default_value_t = InitFormat::Toml)]
    pub format: InitFormat,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the profiles command
#[derive(Args, Debug, Clone, Default)]
pub struct ProfilesArgs {
    /// Config file to read instead of discovering one
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root used for discovery
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}
