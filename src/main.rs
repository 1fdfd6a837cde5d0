use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use habitual::cli::commands;
use habitual::config::{Config, Paths};
use habitual::error::HabitualError;
use habitual::storage::Database;
use habitual::{Cli, Commands, HabitStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HabitualError> {
    let cli = Cli::parse();

    let paths = Paths::new()?;
    let config = Config::load(&paths)?;
    config.apply_color();

    let format = cli.output.unwrap_or(config.general.default_output);

    // Completions need no database
    if let Commands::Completions(args) = &cli.command {
        print!("{}", commands::completions(args.shell));
        return Ok(());
    }

    let db = match cli.database.or(config.general.database) {
        Some(path) => Database::open_at(&path)?,
        None => {
            paths.ensure_dirs()?;
            Database::open_at(&paths.database)?
        }
    };
    let store = HabitStore::with_database(db);

    let output = match cli.command {
        Commands::Add(args) => commands::add(&store, args, format)?,
        Commands::Done(args) => commands::done(&store, args, format)?,
        Commands::List(args) => commands::list(&store, args, format)?,
        Commands::Show(args) => commands::show(&store, args, format)?,
        Commands::Analyze(args) => commands::analyze(&store, args.command, format)?,
        Commands::Reset(args) => commands::reset(&store, args, format)?,
        Commands::Delete(args) => commands::delete(&store, args, format)?,
        Commands::Completions(_) => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
