//! Select a minimum cover from the command line.
//!
//! Run with:
//! ```bash
//! cargo run --example minimize -- --vars 3 --implicants ab,aC,BC,bc --minterms ABC,Abc,aBC,abC,abc
//! ```

use clap::Parser;
use qm_cover::config::{CoverConfig, LiteralPolicy};
use qm_cover::table::CoverTable;

#[derive(Debug, Parser)]
#[command(about = "Select a minimum cover from prime implicants")]
struct Cli {
    /// Number of variables (letters a, b, c, ...)
    #[arg(short = 'n', long, default_value_t = 3)]
    vars: usize,

    /// Comma-separated prime implicants
    #[arg(short, long, value_delimiter = ',', default_value = "ab,aC,BC,bc")]
    implicants: Vec<String>,

    /// Comma-separated minterms
    #[arg(short, long, value_delimiter = ',', default_value = "ABC,Abc,aBC,abC,abc")]
    minterms: Vec<String>,

    /// Reject letters that do not name a variable
    #[arg(long)]
    strict: bool,

    /// Give up after this many branch points
    #[arg(long)]
    max_branches: Option<usize>,

    /// Show the reduction steps
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = CoverConfig {
        literal_policy: if cli.strict {
            LiteralPolicy::Reject
        } else {
            LiteralPolicy::Ignore
        },
        max_branches: cli.max_branches,
    };

    let table = CoverTable::with_config(cli.vars, &cli.implicants, &cli.minterms, &config)?;
    println!("{}", table);

    let cover = table.minimize()?;
    println!("cover  = {}", cover);
    println!("sorted = {}", cover.sorted_terms().join(" + "));

    Ok(())
}
