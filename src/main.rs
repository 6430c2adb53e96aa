#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use skillboard::{init_logging, ui, CellState, ShapeKind, Simulation, SkillSet};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about = "Overlay area skills on a fixed naval board", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
#[cfg(feature = "std")]
enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Seed the demonstration board, cast the demonstration skills and print the result.
    Demo {
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print a single skill matrix.
    Shape {
        #[arg(value_enum)]
        kind: ShapeKind,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = init_logging();
    log::debug!("log level {}", level);

    match cli.command.unwrap_or(Commands::Demo {
        format: Format::Text,
    }) {
        Commands::Demo { format } => {
            let sim = Simulation::demo().map_err(|e| anyhow::anyhow!(e))?;
            log::info!(
                "{} casts applied, {} ship cells hit",
                sim.cast_count(),
                sim.board().count(CellState::ShipAffected)
            );
            match format {
                Format::Text => ui::print_report(&sim),
                Format::Json => println!("{}", serde_json::to_string_pretty(&ui::json_report(&sim))?),
            }
        }
        Commands::Shape { kind, format } => {
            let skills = SkillSet::new();
            let skill = skills.get(kind);
            match format {
                Format::Text => ui::print_skill(skill),
                Format::Json => {
                    println!("{}", serde_json::to_string_pretty(&ui::skill_json(skill))?)
                }
            }
        }
    }
    Ok(())
}
