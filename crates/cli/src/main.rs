use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ritual_cost_mod::commands::{
    generate_command, init_config_command, list_powers_command, list_rituals_command,
    tiered_command,
};
use ritual_cost_mod::init_tracing;

/// Conquest of Elysium 5 ritual cost mod generator.
///
/// Thin wrapper around `ritual-core`; all scaling and formatting lives in the
/// library.
#[derive(Parser, Debug)]
#[command(
    name = "generate_cost_mod",
    version,
    about = "Generate a CoE5 mod file that rescales ritual costs by a percentage",
    long_about = None,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Percentage of the original cost (e.g. 50 halves costs, 150 raises them).
    #[arg(required = true, allow_negative_numbers = true)]
    percentage: Option<String>,

    /// Output file. Defaults to `ritual_costs_<percentage>pct.c5m`.
    output_file: Option<String>,

    /// Directory for relative output paths.
    #[arg(long, default_value = ".")]
    output_dir: String,

    /// Lowest cost any ritual may scale to.
    #[arg(long, default_value_t = 0)]
    min_cost: u32,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a mod from a tiered JSON/YAML balance config.
    ///
    /// Percentages are chosen per ritual power (class), optionally adjusted
    /// per ritual level. Rituals left at exactly 100% are omitted.
    Tiered {
        /// Path to the config file (.json, .yaml or .yml).
        config: String,

        /// Output file. Defaults to `tiered_ritual_costs.c5m`.
        output_file: Option<String>,

        /// Directory for relative output paths.
        #[arg(long, default_value = ".")]
        output_dir: String,
    },

    /// List ritual power ids and names.
    ListPowers {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the embedded ritual table with base costs.
    ListRituals {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write a template balance config with every power at 100%.
    InitConfig {
        /// Path of the config to write.
        #[arg(default_value = "balance_config.json")]
        output: String,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Tiered { config, output_file, output_dir }) => {
            tiered_command(&config, output_file.as_deref(), &output_dir)?;
        }
        Some(Command::ListPowers { json }) => list_powers_command(json)?,
        Some(Command::ListRituals { json }) => list_rituals_command(json)?,
        Some(Command::InitConfig { output, force }) => {
            init_config_command(&output, force)?;
        }
        None => {
            let args = cli.generate;
            // clap enforces presence when no subcommand is given.
            let percentage = args.percentage.unwrap_or_default();
            generate_command(
                &percentage,
                args.output_file.as_deref(),
                &args.output_dir,
                args.min_cost,
            )?;
        }
    }

    Ok(())
}
