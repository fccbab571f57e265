//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-31
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use arboard::Clipboard;
use std::{env, process, thread};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
use arboard::SetExtLinux;

const DAEMON_FLAG: &str = "CLIPBOARD_DAEMON";
const SECRET_VAR: &str = "DYNAMIC_INFO";
const CLEAR_SECS_VAR: &str = "CLIPBOARD_CLEAR_SECS";
const HOLD_VAR: &str = "CLIPBOARD_HOLD";

/// Clipboard-write capability used by the shell.
pub trait ClipboardService {
    fn copy(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>>;
}

/// Raw clipboard write.
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>>;
}

/// Hands a copied secret to a clipboard daemon.
pub trait ClearScheduler {
    fn schedule(&mut self, secret: &str, job: &DaemonJob) -> Result<(), Box<dyn std::error::Error>>;
}

/// What the clipboard daemon does with a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaemonJob {
    /// Own the clipboard contents after the parent exits.
    pub hold: bool,
    pub clear_after: Option<u64>,
}

/// arboard clipboard, opened on first use and kept for the life of the value.
///
/// On X11 and Wayland the contents vanish once the owning `Clipboard` is dropped.
#[derive(Default)]
pub struct ArboardBackend {
    ctx: Option<Clipboard>,
}

impl ClipboardBackend for ArboardBackend {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        let ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => Clipboard::new()?,
        };
        self.ctx.insert(ctx).set_text(text)?;
        Ok(())
    }
}

/// Starts a detached copy of the current executable as the daemon.
#[derive(Debug, Default, Clone, Copy)]
pub struct DaemonScheduler;

impl ClearScheduler for DaemonScheduler {
    fn schedule(&mut self, secret: &str, job: &DaemonJob) -> Result<(), Box<dyn std::error::Error>> {
        spawn_daemon(secret, job)
    }
}

/// The platform clipboard.
///
/// A session clipboard keeps the contents itself and only schedules a clear. A
/// detached clipboard is for processes that exit right after copying: a daemon takes
/// over the contents.
pub struct SystemClipboard<B = ArboardBackend, S = DaemonScheduler> {
    backend: B,
    scheduler: S,
    clear_after: Option<u64>,
    hold: bool,
}

impl SystemClipboard {
    pub fn new(clear_after: Option<u64>) -> Self {
        Self::with_parts(ArboardBackend::default(), DaemonScheduler, clear_after, false)
    }

    pub fn detached(clear_after: Option<u64>) -> Self {
        Self::with_parts(ArboardBackend::default(), DaemonScheduler, clear_after, true)
    }
}

impl<B, S> SystemClipboard<B, S> {
    pub fn with_parts(backend: B, scheduler: S, clear_after: Option<u64>, hold: bool) -> Self {
        Self {
            backend,
            scheduler,
            clear_after: clear_after.filter(|secs| *secs > 0),
            hold,
        }
    }

    pub fn clear_after(&self) -> Option<u64> {
        self.clear_after
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn job(&self) -> Option<DaemonJob> {
        if !self.hold && self.clear_after.is_none() {
            return None;
        }
        Some(DaemonJob { hold: self.hold, clear_after: self.clear_after })
    }
}

impl<B: ClipboardBackend, S: ClearScheduler> ClipboardService for SystemClipboard<B, S> {
    /// The copy counts as done once the text is on the clipboard, a daemon that
    /// fails to start is only logged.
    fn copy(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.backend.set_text(text)?;
        if let Some(job) = self.job() {
            if let Err(e) = self.scheduler.schedule(text, &job) {
                if job.hold {
                    warn!("clipboard daemon failed to start, the password may be lost when this process exits: {}", e);
                } else {
                    warn!("clipboard daemon failed to start, the password will not be cleared: {}", e);
                }
            }
        }
        Ok(())
    }
}

fn spawn_daemon(info: &str, job: &DaemonJob) -> Result<(), Box<dyn std::error::Error>> {
    let exe_path = env::current_exe()?;
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_FLAG, "1")
       .env(SECRET_VAR, info) // 传递动态信息
       .stdout(process::Stdio::null())
       .stderr(process::Stdio::inherit());
    if let Some(secs) = job.clear_after {
        cmd.env(CLEAR_SECS_VAR, secs.to_string());
    }
    if job.hold {
        cmd.env(HOLD_VAR, "1");
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    cmd.spawn()?;
    debug!(?job, "spawned clipboard daemon");
    Ok(())
}

/// Whether this process was started as the clipboard daemon.
pub fn is_daemon() -> bool {
    env::var_os(DAEMON_FLAG).is_some()
}

/// Parsed daemon environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonOptions {
    pub secret: String,
    pub job: DaemonJob,
}

impl DaemonOptions {
    pub fn from_vars(
        secret: Option<String>,
        clear_secs: Option<String>,
        hold: bool,
    ) -> Result<Self, String> {
        let secret = secret.ok_or_else(|| format!("Missing {} environment variable", SECRET_VAR))?;
        let clear_after = match clear_secs {
            Some(value) => Some(value.trim().parse::<u64>().map_err(|e| {
                format!("Invalid {} value '{}': {}", CLEAR_SECS_VAR, value, e)
            })?),
            None if hold => None,
            None => return Err(format!("Missing {} environment variable", CLEAR_SECS_VAR)),
        };
        Ok(Self { secret, job: DaemonJob { hold, clear_after } })
    }

    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(
            env::var(SECRET_VAR).ok(),
            env::var(CLEAR_SECS_VAR).ok(),
            env::var_os(HOLD_VAR).is_some(),
        )
    }
}

/// Clear only if nobody replaced the secret in the meantime.
pub fn should_clear(current: &str, secret: &str) -> bool {
    current == secret
}

pub fn run_daemon() -> Result<(), Box<dyn std::error::Error>> {
    let options = DaemonOptions::from_env()?;
    daemon_task(&options)
}

fn daemon_task(options: &DaemonOptions) -> Result<(), Box<dyn std::error::Error>> {
    let deadline = options.job.clear_after.map(|secs| Instant::now() + Duration::from_secs(secs));

    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("clipboard init failed in daemon: {}", e);
            return Ok(());
        }
    };

    if options.job.hold {
        hold_text(&mut ctx, &options.secret, deadline)?;
    }

    // 等待指定时间(秒)
    let Some(deadline) = deadline else {
        return Ok(());
    };
    let remaining = deadline.saturating_duration_since(Instant::now());
    if !remaining.is_zero() {
        thread::sleep(remaining);
    }

    let current_content = ctx.get_text().unwrap_or_default();
    if should_clear(&current_content, &options.secret) {
        ctx.set_text("")?;
        debug!("clipboard unchanged, cleared");
    } else {
        debug!("clipboard changed, nothing to clear");
    }
    Ok(())
}

/// Serve the secret until it is replaced or `deadline` passes.
#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
fn hold_text(ctx: &mut Clipboard, secret: &str, deadline: Option<Instant>) -> Result<(), Box<dyn std::error::Error>> {
    let set = ctx.set();
    let set = match deadline {
        Some(deadline) => set.wait_until(deadline),
        None => set.wait(),
    };
    set.text(secret)?;
    Ok(())
}

/// Other platforms keep the contents after the owner exits.
#[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
fn hold_text(ctx: &mut Clipboard, secret: &str, _deadline: Option<Instant>) -> Result<(), Box<dyn std::error::Error>> {
    ctx.set_text(secret)?;
    Ok(())
}
