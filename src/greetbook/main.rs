use clap::Parser;
use directories::ProjectDirs;
use greetbook::bot::Bot;
use greetbook::error::{GreetbookError, Result};
use greetbook::interface::ConsoleInterface;
use greetbook::store::fs::FileStore;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "greetbook")]
#[command(about = "A command-line contact book that remembers birthdays", long_about = None)]
struct Cli {
    /// Path to the address-book file (defaults to the user data directory)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Skip the startup help banner
    #[arg(long)]
    no_banner: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = match cli.file {
        Some(path) => path,
        None => default_book_path()?,
    };

    let store = FileStore::new(path);
    let mut bot = Bot::new(store, ConsoleInterface::new());
    if cli.no_banner {
        bot = bot.without_banner();
    }
    bot.run()
}

fn default_book_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "greetbook", "greetbook")
        .ok_or_else(|| GreetbookError::Store("Could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().join("book.json"))
}
