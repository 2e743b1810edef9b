//! b2prefs - command-line front-end for the Basilisk II preferences editor
//!
//! Loads the editor config, sets up logging, then runs one command against
//! the emulator preferences file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use b2prefs_core::config::ConfigManager;
use b2prefs_core::logging::{init_tracing, init_tracing_with_file};
use b2prefs_core::volumes::BootPreference;

mod commands;

use commands::Context;

#[derive(Parser)]
#[command(name = "b2prefs")]
#[command(about = "Edit Basilisk II preferences and volume list", long_about = None)]
struct Cli {
    /// Editor config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Preferences file to edit (overrides the config)
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    /// More log output (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List volumes in boot search order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add volume files
    Add {
        /// Files or devices to add
        #[arg(required = true)]
        paths: Vec<String>,

        /// Add as CD-ROM regardless of extension
        #[arg(long, conflicts_with = "disk")]
        cdrom: bool,

        /// Add as disk regardless of extension
        #[arg(long)]
        disk: bool,
    },

    /// Remove the volume at INDEX
    Remove { index: usize },

    /// Switch the volume at INDEX between disk and CD-ROM
    Toggle { index: usize },

    /// Move a volume to another position
    Move { from: usize, to: usize },

    /// Add files given as file:// URIs, as if dropped on the list
    Drop {
        /// file:// URIs
        #[arg(required = true)]
        uris: Vec<String>,

        /// Row the files were dropped on
        #[arg(long)]
        row: Option<usize>,

        /// Drop after the row instead of before it
        #[arg(long, requires = "row")]
        after: bool,
    },

    /// Create a blank hard disk image and add it
    Create {
        /// Image file to create
        path: String,

        /// Size in MiB (defaults to the configured size)
        #[arg(long)]
        size_mib: Option<u32>,
    },

    /// Add a CD-ROM device
    Cdrom { device: String },

    /// Choose the boot driver
    Boot {
        #[arg(value_enum)]
        from: BootArg,
    },

    /// Convert legacy ethernet settings
    Migrate,

    /// Delete the parameter RAM file
    ZapPram,

    /// Print every preference item
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BootArg {
    /// Any bootable volume
    Any,
    /// CD-ROM first
    Cdrom,
}

impl From<BootArg> for BootPreference {
    fn from(arg: BootArg) -> Self {
        match arg {
            BootArg::Any => BootPreference::Any,
            BootArg::Cdrom => BootPreference::CdromFirst,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config first, it decides where logs go
    let config_path = cli.config.clone().unwrap_or_else(ConfigManager::default_path);
    let mut config = ConfigManager::new(&config_path);
    if let Err(e) = config.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    let settings = config.settings().clone();
    let level = (0..cli.verbose).fold(settings.logging.level, |level, _| level.more_verbose());

    let _log_guard = if settings.logging.file_logging {
        let logs_dir = config.logs_folder();
        let guard = config
            .ensure_dirs_exist()
            .map_err(|e| e.to_string())
            .and_then(|_| init_tracing_with_file(level, &logs_dir).map_err(|e| e.to_string()));
        match guard {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: File logging disabled: {}", e);
                init_tracing(level);
                None
            }
        }
    } else {
        init_tracing(level);
        None
    };

    tracing::debug!("Config: {}", config_path.display());
    tracing::debug!("Core version: {}", b2prefs_core::version());

    let ctx = Context {
        prefs_path: cli.prefs.unwrap_or_else(|| config.prefs_file()),
        xpram_path: config.xpram_file(),
        settings,
    };

    match cli.command {
        Commands::List { json } => commands::list(&ctx, json),
        Commands::Show { json } => commands::show(&ctx, json),
        Commands::Migrate => commands::migrate(&ctx),
        Commands::ZapPram => commands::zap_pram(&ctx),
        Commands::Add { paths, cdrom, disk } => commands::add(&ctx, paths, cdrom, disk),
        Commands::Remove { index } => commands::remove(&ctx, index),
        Commands::Toggle { index } => commands::toggle(&ctx, index),
        Commands::Move { from, to } => commands::move_volume(&ctx, from, to),
        Commands::Drop { uris, row, after } => commands::drop_uris(&ctx, uris, row, after),
        Commands::Create { path, size_mib } => commands::create(&ctx, path, size_mib),
        Commands::Cdrom { device } => commands::cdrom(&ctx, device),
        Commands::Boot { from } => commands::boot(&ctx, from.into()),
    }
}
