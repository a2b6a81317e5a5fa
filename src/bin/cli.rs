//! notekv CLI
//!
//! Terminal host for the note-keeping widget.

use std::io::{self, BufRead, Write as _};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use notekv::store::FileBacking;
use notekv::ui::{AutoConfirm, Confirm};
use notekv::view::NotificationKind;
use notekv::{Config, StorageManager, UiEvent, Widget};

/// notekv CLI
#[derive(Parser, Debug)]
#[command(name = "notekv")]
#[command(about = "Local key/value note keeper")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./notekv_data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store a key/value pair
    Add {
        /// The key to store
        key: String,

        /// The value to store
        value: String,
    },

    /// Render the stored items (markup, newest first)
    List {
        /// Case-insensitive substring filter over keys and values
        #[arg(short, long, default_value = "")]
        filter: String,
    },

    /// Delete an item by id
    Delete {
        /// Id of the item to delete
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show item count and storage size
    Stats,
}

/// Asks on stdin, accepting `y`/`yes` (case-insensitive)
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }

        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> notekv::Result<()> {
    let config = Config::builder().data_dir(&args.data_dir).build();

    let backing = FileBacking::open(&config.data_dir)?;
    let manager = StorageManager::open(Box::new(backing), &config)?;

    let confirm: Box<dyn Confirm> = match &args.command {
        Commands::Delete { yes: false, .. } => Box::new(StdinConfirm),
        _ => Box::new(AutoConfirm),
    };

    let mut widget = Widget::new(manager, confirm, &config)?;

    match args.command {
        Commands::Add { key, value } => {
            widget.dispatch(UiEvent::KeyInput(key))?;
            widget.dispatch(UiEvent::ValueInput(value))?;
            widget.dispatch(UiEvent::FormSubmit)?;
        }
        Commands::List { filter } => {
            widget.dispatch(UiEvent::SearchInput(filter))?;
            println!("{}", widget.view().items_list);
        }
        Commands::Delete { id, .. } => {
            widget.dispatch(UiEvent::DeleteClick(id))?;
        }
        Commands::Stats => {
            println!("Items: {}", widget.view().total_items);
            println!("Storage used: {}", widget.view().storage_used);
        }
    }

    for notification in widget.notifications().active() {
        match notification.kind {
            NotificationKind::Success => println!("{}", notification.message),
            NotificationKind::Error => eprintln!("{}", notification.message),
        }
    }

    Ok(())
}
