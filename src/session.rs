//! The session controller.
//!
//! One line is read at a time. A remote-backed command suspends input, runs
//! its whole chain of remote calls (including any deferred follow-up), and
//! resumes input exactly once when the chain settles. Lines typed while
//! suspended are dropped by the input source on resume.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::commands::{self, Classified, Command, Operation};
use crate::model::Identity;
use crate::present::Presenter;
use crate::remote::{self, ApiRequest, Endpoint, Gateway, GatewayError, UserInfo};

mod confirm;
pub use self::confirm::{Answer, parse_answer};
mod handlers;
mod input;
pub use self::input::{LineSource, PipedInput, TerminalInput};

pub const USAGE_HINT: &str = "type help to see all commands.";
pub const FAREWELL: &str = "Good bye!";
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Follow-up operation run after `delay`, within the same suspension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeferredRetry {
    pub delay: Duration,
    pub operation: Operation,
}

pub struct Session<G, L> {
    identity: Identity,
    prompt: String,
    busy: bool,
    gateway: G,
    input: L,
    presenter: Presenter,
    out: Box<dyn Write>,
    retry_delay: Duration,
}

impl<G: Gateway, L: LineSource> Session<G, L> {
    pub fn new(identity: Identity, gateway: G, input: L, presenter: Presenter) -> Self {
        let prompt = identity.prompt();
        Self {
            identity,
            prompt,
            busy: false,
            gateway,
            input,
            presenter,
            out: Box::new(std::io::stdout()),
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn with_output(mut self, out: impl Write + 'static) -> Self {
        self.out = Box::new(out);
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Resolves the display alias, then reads and dispatches lines until
    /// `exit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        self.start().await;
        loop {
            let line = self
                .input
                .read_line(&self.prompt)
                .context("read command line")?;
            let Some(line) = line else {
                self.on_close();
                return Ok(());
            };
            if self.on_line(&line).await == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Best-effort alias lookup; failure only costs the alias.
    pub async fn start(&mut self) {
        self.say("Getting RippleName...");
        let request =
            ApiRequest::new(Endpoint::UserInfo).param("address", self.identity.account());
        match remote::call::<_, UserInfo>(&self.gateway, request).await {
            Ok(UserInfo {
                exists: true,
                username: Some(name),
            }) => self.identity.set_display_name(name),
            Ok(_) => self.say("RippleName not found."),
            Err(err) => {
                tracing::warn!(error = %err, "display name lookup failed");
                self.say(format!("error: {}", err));
            }
        }
        self.prompt = self.identity.prompt();
    }

    /// Commands are awaited inline, so a line never arrives while busy. Type-ahead
    /// is dropped by the input source on resume.
    pub async fn on_line(&mut self, line: &str) -> Flow {
        match commands::classify(line) {
            Classified::Empty => Flow::Continue,
            Classified::Unknown => {
                self.say(USAGE_HINT);
                Flow::Continue
            }
            Classified::Usage(def) => {
                self.say(format!("usage: {}", def.usage));
                Flow::Continue
            }
            Classified::Command(command) => self.dispatch(command).await,
        }
    }

    pub fn on_close(&mut self) {
        self.exit();
    }

    async fn dispatch(&mut self, command: Command) -> Flow {
        match command {
            Command::Help => self.show_help(),
            Command::Exit => {
                self.exit();
                return Flow::Exit;
            }
            Command::ListAccounts => self.list_accounts(),
            Command::ChangeAccount { address, .. } => self.change_account(&address),
            Command::PlaceOrder(args) => self.place_order(args).await,
            Command::Remote(operation) => {
                self.suspend();
                self.drive(operation).await;
                self.resume();
            }
        }
        Flow::Continue
    }

    /// Runs `operation` and any deferred follow-ups it schedules. Every
    /// failure funnels through [`Self::on_error`].
    async fn drive(&mut self, operation: Operation) {
        let mut next = Some(operation);
        while let Some(op) = next.take() {
            match self.perform(op).await {
                Ok(Some(retry)) => {
                    tracing::debug!(delay_ms = retry.delay.as_millis() as u64, "deferred retry scheduled");
                    self.gateway.defer(retry.delay).await;
                    next = Some(retry.operation);
                }
                Ok(None) => {}
                Err(err) => self.on_error(&err),
            }
        }
    }

    fn suspend(&mut self) {
        debug_assert!(!self.busy, "suspend while already suspended");
        self.busy = true;
        self.prompt.clear();
        self.input.pause();
    }

    fn resume(&mut self) {
        debug_assert!(self.busy, "resume without suspend");
        self.busy = false;
        self.input.resume();
        self.prompt = self.identity.prompt();
    }

    fn on_error(&mut self, err: &GatewayError) {
        tracing::debug!(error = ?err, "operation failed");
        self.say(format!("error: {}", err));
    }

    fn exit(&mut self) {
        self.say(FAREWELL);
    }

    fn say(&mut self, text: impl AsRef<str>) {
        if let Err(err) = writeln!(self.out, "{}", text.as_ref()) {
            tracing::warn!(error = %err, "write to console failed");
        }
    }
}
