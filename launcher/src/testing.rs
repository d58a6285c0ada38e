//! Scripted HTTP client and recording reporter for unit tests

use crate::http::{HttpClient, HttpReply, TransportError};
use crate::report::Reporter;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
    pub timeout: Duration,
}

/// Replies are handed out in order; running dry is a transport error.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<HttpReply, TransportError>>>,
    requests: Mutex<Vec<Recorded>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: Value) -> Self {
        self.push(Ok(HttpReply::new(status, body.to_string())))
    }

    pub fn reply_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpReply::new(status, body)))
    }

    pub fn timeout(self) -> Self {
        self.push(Err(TransportError::Timeout))
    }

    pub fn refuse(self) -> Self {
        self.push(Err(TransportError::Connect("connection refused".into())))
    }

    fn push(self, reply: Result<HttpReply, TransportError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method)
            .count()
    }

    fn next(&self, recorded: Recorded) -> Result<HttpReply, TransportError> {
        self.requests.lock().unwrap().push(recorded);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("script exhausted".into())))
    }
}

impl HttpClient for ScriptedClient {
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<HttpReply, TransportError> {
        self.next(Recorded {
            method: "POST",
            url: url.to_string(),
            body: Some(body.clone()),
            timeout,
        })
    }

    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpReply, TransportError> {
        self.next(Recorded {
            method: "GET",
            url: url.to_string(),
            body: None,
            timeout,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Status,
    Success,
    Warning,
    Error,
    Header,
}

#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn at(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}

impl Reporter for RecordingReporter {
    fn status(&self, message: &str) {
        self.push(Level::Status, message);
    }

    fn success(&self, message: &str) {
        self.push(Level::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn header(&self, message: &str) {
        self.push(Level::Header, message);
    }
}
