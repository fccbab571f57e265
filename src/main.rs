//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Auther : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// A small password generator written in Rust.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use rpawogen::charclass::CharacterClass;
use rpawogen::commands::{self, password_gen::GenRequest};
use rpawogen::configtool::{self, Settings};
use rpawogen::setclip;

#[derive(Debug, Parser)]
#[command(name = "rpawogen", version)]
#[command(about = "Generate random passwords from selectable character classes", long_about = None)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a new random password
    Gen(GenArgs),

    /// Start an interactive generator session
    Interactive {
        /// Seed the generator for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test password strength
    Testpass {
        /// Password to test, prompted for when omitted
        password: Option<String>,
    },

    /// Show or reset the saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Overwrite the settings file with defaults
    Reset,
}

#[derive(Debug, clap::Args)]
struct GenArgs {
    /// Length of the password (1-20)
    #[arg(short, long)]
    length: Option<usize>,

    /// Include lowercase letters
    #[arg(long, default_value_t = false)]
    lowercase: bool,

    /// Include uppercase letters
    #[arg(long, default_value_t = false)]
    uppercase: bool,

    /// Include numbers
    #[arg(long, default_value_t = false)]
    numbers: bool,

    /// Include symbols
    #[arg(long, default_value_t = false)]
    symbols: bool,

    /// Include every character class
    #[arg(short, long, default_value_t = false)]
    all: bool,

    /// Seed the generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// Skip the strength report
    #[arg(long, default_value_t = false)]
    no_strength: bool,
}

impl From<GenArgs> for GenRequest {
    fn from(args: GenArgs) -> Self {
        let classes = if args.all {
            CharacterClass::ALL.to_vec()
        } else {
            let flags = [args.lowercase, args.uppercase, args.numbers, args.symbols];
            CharacterClass::ALL
                .into_iter()
                .zip(flags)
                .filter_map(|(class, on)| on.then_some(class))
                .collect()
        };
        Self {
            length: args.length,
            classes,
            seed: args.seed,
            copy: args.copy,
            no_strength: args.no_strength,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_settings(path: &std::path::Path) -> Settings {
    match Settings::load_from(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Error loading settings from {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

fn main() -> Result<()> {
    // 剪贴板守护进程
    if setclip::is_daemon() {
        return setclip::run_daemon().map_err(|e| anyhow::anyhow!("clipboard daemon failed: {}", e));
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = configtool::settings_path(cli.config.as_deref())
        .context("Failed to locate settings")?;

    match cli.command {
        Commands::Gen(args) => {
            let settings = load_settings(&settings_path);
            commands::password_gen::generate_random(&settings, args.into())
        },
        Commands::Interactive { seed } => {
            let settings = load_settings(&settings_path);
            commands::interactive::run_session(&settings, seed)
        },
        Commands::Testpass { password } => {
            commands::testpass::test_password(password)
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let settings = Settings::load_from(&settings_path)
                    .with_context(|| format!("Failed to load {}", settings_path.display()))?;
                commands::config::show(&settings, &settings_path)
            },
            ConfigAction::Reset => commands::config::reset(&settings_path),
        },
    }
}
