mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Generate paginated PDF product catalogs from a spreadsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a product spreadsheet and show the normalized table (without generating)
    Parse {
        /// Path to the xlsx file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the normalized products to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Generate the two catalog PDFs (without and with price) from a spreadsheet
    Generate {
        /// Path to the xlsx file
        input_file: PathBuf,

        /// Selection mode: url (match Product Link) or name (match Product Name)
        #[arg(short, long, default_value = "name")]
        mode: String,

        /// File with one product URL or name per line
        #[arg(short, long = "select", value_name = "FILE")]
        select: PathBuf,

        /// Heading shown at the top of every page
        #[arg(long)]
        heading: String,

        /// Directory to write catalog_without_price.pdf / catalog_with_price.pdf
        #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
    /// Print the spreadsheet headers the normalizer expects
    Columns,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
        Commands::Generate {
            input_file,
            mode,
            select,
            heading,
            out_dir,
        } => commands::generate::run(input_file, &mode, select, &heading, out_dir),
        Commands::Columns => commands::columns::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
