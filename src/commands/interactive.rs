use anyhow::{Context, Result};
use tracing::info;

use crate::configtool::{prompt_input, Settings};
use crate::policy::PolicyEngine;
use crate::setclip::SystemClipboard;
use crate::shell::{Action, ConsoleNotifier, Session, HELP};

pub fn run_session(settings: &Settings, seed: Option<u64>) -> Result<()> {
    let config = settings
        .generation_config()
        .context("Invalid settings")?;
    let engine = PolicyEngine::from_seed(config, seed);
    let clipboard = SystemClipboard::new(settings.clipboard_clear_secs);
    let mut session = Session::new(engine, clipboard, ConsoleNotifier);
    info!("interactive session started");

    println!("{}\n", HELP);
    print!("{}", session.render());
    loop {
        let Some(line) = prompt_input("\n> ").context("Failed to read input")? else {
            break;
        };
        match session.handle(&line) {
            Action::Quit => break,
            Action::Help => println!("{}", HELP),
            Action::Continue => print!("{}", session.render()),
        }
    }
    info!("interactive session ended");
    Ok(())
}
