use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use tabula::{generate_ray_table, king_attack_table, knight_attack_table, write_table, Direction};

/// Prints precomputed attack tables as hex literals, 8 entries per line,
/// for pasting into an engine's constant arrays.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Which tables to print.
    #[arg(value_enum, default_values_t = [Table::All])]
    tables: Vec<Table>,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Table {
    /// The Knight's attack table.
    Knight,
    /// The King's attack table.
    King,
    /// All 8 directional ray tables, N through NW clockwise.
    Rays,
    /// Everything above.
    All,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Knight => "knight",
            Self::King => "king",
            Self::Rays => "rays",
            Self::All => "all",
        };
        write!(f, "{name}")
    }
}

fn print_tables(tables: &[Table], out: &mut impl Write) -> io::Result<()> {
    let all = tables.contains(&Table::All);

    if all || tables.contains(&Table::Knight) {
        write_table("knight attacks", &knight_attack_table(), out)?;
    }

    if all || tables.contains(&Table::King) {
        write_table("king attacks", &king_attack_table(), out)?;
    }

    if all || tables.contains(&Table::Rays) {
        for direction in Direction::ALL {
            let name = format!("{direction} ray");
            write_table(&name, &generate_ray_table(direction), out)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match &args.output {
        Some(path) => {
            info!("writing {:?} to {}", args.tables, path.display());
            let mut out = BufWriter::new(File::create(path)?);
            print_tables(&args.tables, &mut out)?;
            out.flush()?;
        }
        None => {
            info!("writing {:?} to stdout", args.tables);
            let mut out = io::stdout().lock();
            print_tables(&args.tables, &mut out)?;
        }
    }

    Ok(())
}
