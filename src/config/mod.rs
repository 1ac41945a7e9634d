pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "waterchem")]
#[command(about = "Water chemistry dosing calculator")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Extra arguments, echoed back when no subcommand is given
    pub args: Vec<String>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute the mL of stock solution needed to reach a target concentration
    Dose {
        /// Solution volume in liters
        #[arg(long, allow_hyphen_values = true)]
        volume: String,

        /// Target concentration in ppm (mg/L)
        #[arg(long, allow_hyphen_values = true)]
        target: String,

        /// Stock solution concentration in ppm (mg/L)
        #[arg(long, allow_hyphen_values = true)]
        stock: String,

        /// Digits after the decimal point in the printed dose
        #[arg(long)]
        decimals: Option<usize>,
    },

    /// Load and validate the equipment, reagent and plant catalogs
    Catalog {
        #[arg(long)]
        equipment: Option<String>,

        #[arg(long)]
        reagents: Option<String>,

        #[arg(long)]
        plants: Option<String>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Output of a bare invocation: the banner and the echoed arguments.
    pub fn startup_lines(&self) -> [String; 2] {
        [
            "WaterChem CLI starting…".to_string(),
            format!("Args: {}", self.args.join(" ")),
        ]
    }
}
