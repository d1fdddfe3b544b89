#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use ripple_console::model::Identity;
use ripple_console::present::Presenter;
use ripple_console::remote::{ApiRequest, Endpoint, Gateway, GatewayError};
use ripple_console::session::{LineSource, Session};

pub const ACCOUNT: &str = "rTestAccount";
pub const SECRET: &str = "sTestSecret";

/// Everything observable about a session, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Read { prompt: String, paused: bool },
    Pause,
    Resume,
    Call(Endpoint),
    Defer(Duration),
}

/// Shared terminal state: keystrokes already typed and the event log.
#[derive(Default)]
pub struct Console {
    typed: VecDeque<String>,
    paused: bool,
    pub events: Vec<Event>,
}

pub type SharedConsole = Rc<RefCell<Console>>;

/// Replays a fixed script of lines. Lines typed while paused sit in the
/// console buffer and are dropped on resume.
pub struct ScriptedInput {
    script: VecDeque<String>,
    console: SharedConsole,
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        let mut console = self.console.borrow_mut();
        let paused = console.paused;
        console.events.push(Event::Read {
            prompt: prompt.to_string(),
            paused,
        });
        if let Some(line) = console.typed.pop_front() {
            return Ok(Some(line));
        }
        Ok(self.script.pop_front())
    }

    fn pause(&mut self) {
        let mut console = self.console.borrow_mut();
        console.paused = true;
        console.events.push(Event::Pause);
    }

    fn resume(&mut self) {
        let mut console = self.console.borrow_mut();
        console.paused = false;
        console.typed.clear();
        console.events.push(Event::Resume);
    }
}

enum Reply {
    Ok(Value),
    Fail { status: u16, message: String },
}

/// Answers requests from per-endpoint scripts. The last scripted reply for an
/// endpoint repeats.
#[derive(Clone)]
pub struct MockGateway {
    console: SharedConsole,
    replies: Rc<RefCell<HashMap<Endpoint, VecDeque<Reply>>>>,
    typeahead: Rc<RefCell<HashMap<Endpoint, Vec<String>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockGateway {
    pub fn respond(&self, endpoint: Endpoint, body: Value) -> &Self {
        self.replies
            .borrow_mut()
            .entry(endpoint)
            .or_default()
            .push_back(Reply::Ok(body));
        self
    }

    pub fn fail(&self, endpoint: Endpoint, status: u16, message: &str) -> &Self {
        self.replies
            .borrow_mut()
            .entry(endpoint)
            .or_default()
            .push_back(Reply::Fail {
                status,
                message: message.to_string(),
            });
        self
    }

    /// Simulates the user typing `line` while `endpoint` is outstanding.
    pub fn type_during(&self, endpoint: Endpoint, line: &str) -> &Self {
        self.typeahead
            .borrow_mut()
            .entry(endpoint)
            .or_default()
            .push(line.to_string());
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request(&self, endpoint: Endpoint) -> Option<ApiRequest> {
        self.requests
            .borrow()
            .iter()
            .find(|r| r.endpoint == endpoint)
            .cloned()
    }

    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.requests.borrow().iter().map(|r| r.endpoint).collect()
    }
}

#[async_trait(?Send)]
impl Gateway for MockGateway {
    async fn send(&self, request: ApiRequest) -> Result<Value, GatewayError> {
        let endpoint = request.endpoint;
        {
            let mut console = self.console.borrow_mut();
            console.events.push(Event::Call(endpoint));
            if let Some(lines) = self.typeahead.borrow_mut().remove(&endpoint) {
                console.typed.extend(lines);
            }
        }
        self.requests.borrow_mut().push(request);

        let mut replies = self.replies.borrow_mut();
        let queue = replies.entry(endpoint).or_default();
        let reply = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().map(|r| match r {
                Reply::Ok(v) => Reply::Ok(v.clone()),
                Reply::Fail { status, message } => Reply::Fail {
                    status: *status,
                    message: message.clone(),
                },
            })
        };
        match reply {
            Some(Reply::Ok(v)) => Ok(v),
            Some(Reply::Fail { status, message }) => Err(GatewayError::Status {
                label: endpoint.label(),
                status,
                message,
            }),
            None => Err(GatewayError::Status {
                label: endpoint.label(),
                status: 500,
                message: "no scripted reply".to_string(),
            }),
        }
    }

    async fn defer(&self, delay: Duration) {
        self.console.borrow_mut().events.push(Event::Defer(delay));
    }
}

/// Console output captured for assertions.
#[derive(Clone, Default)]
pub struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl SharedOutput {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).to_string()
    }
}

impl Write for SharedOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub struct Harness {
    pub console: SharedConsole,
    pub gateway: MockGateway,
    pub out: SharedOutput,
}

impl Harness {
    /// A gateway whose alias lookup resolves to `alice`.
    pub fn new() -> Self {
        let console = SharedConsole::default();
        let gateway = MockGateway {
            console: console.clone(),
            replies: Rc::default(),
            typeahead: Rc::default(),
            requests: Rc::default(),
        };
        gateway.respond(
            Endpoint::UserInfo,
            json!({ "exists": true, "username": "alice" }),
        );
        Self {
            console,
            gateway,
            out: SharedOutput::default(),
        }
    }

    /// A gateway with no scripted replies at all.
    pub fn bare() -> Self {
        let h = Self::new();
        h.gateway.replies.borrow_mut().clear();
        h
    }

    pub fn session(&self, script: &[&str]) -> Session<MockGateway, ScriptedInput> {
        let input = ScriptedInput {
            script: script.iter().map(|s| s.to_string()).collect(),
            console: self.console.clone(),
        };
        self.session_with(input)
    }

    /// A session reading from any line source; only gateway events are logged.
    pub fn session_with<L: LineSource>(&self, input: L) -> Session<MockGateway, L> {
        let identity = Identity::new(Some(ACCOUNT.to_string()), Some(SECRET.to_string()))
            .expect("test identity");
        Session::new(identity, self.gateway.clone(), input, Presenter::default())
            .with_output(self.out.clone())
            .with_retry_delay(Duration::from_millis(25))
    }

    /// Runs `script` to completion and returns the console output.
    pub async fn run(&self, script: &[&str]) -> anyhow::Result<String> {
        self.session(script).run().await?;
        Ok(self.out.text())
    }

    pub fn events(&self) -> Vec<Event> {
        self.console.borrow().events.clone()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.events().iter().filter(|e| *e == event).count()
    }

    pub fn body(&self, endpoint: Endpoint) -> Value {
        self.gateway
            .request(endpoint)
            .and_then(|r| r.body)
            .unwrap_or(Value::Null)
    }
}
