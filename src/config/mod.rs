pub mod toml_config;

pub use toml_config::DemoConfig;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Email and SMS through the sender abstraction
    Notification,
    /// Report export through FileManager
    Report,
    /// The coupled versions of both demos
    Legacy,
    /// Every demo, in the order above
    All,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "solid-demos")]
#[command(about = "Notification and report demos for dependency inversion and single responsibility")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value = "all")]
    pub demo: DemoKind,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory the report files are written to
    #[arg(long)]
    pub output_dir: Option<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn runs(&self, kind: DemoKind) -> bool {
        self.demo == DemoKind::All || self.demo == kind
    }
}
