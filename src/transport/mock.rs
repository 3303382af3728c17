//! Test transports

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use super::{Transport, TransportError};

type Reply = Result<Value, TransportError>;

/// A request as seen by a test transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub path: String,
    pub fields: Vec<(&'static str, String)>,
}

/// Answers immediately from a queue of replies (`{}` once it runs dry)
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<Recorded>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Reply) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn post_form(&self, path: &str, fields: &[(&'static str, String)]) -> Reply {
        self.requests.borrow_mut().push(Recorded {
            path: path.to_string(),
            fields: fields.to_vec(),
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({})))
    }
}

/// Holds every request open until the test releases it
#[derive(Default)]
pub struct GatedTransport {
    pending: RefCell<Vec<Option<oneshot::Sender<Reply>>>>,
    requests: RefCell<Vec<Recorded>>,
}

impl GatedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests sent so far
    pub fn sent(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    /// Deliver the reply for the `index`-th request
    pub fn release(&self, index: usize, reply: Reply) {
        let sender = self.pending.borrow_mut()[index]
            .take()
            .expect("request already released");
        let _ = sender.send(reply);
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn post_form(&self, path: &str, fields: &[(&'static str, String)]) -> Reply {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push(Some(tx));
        self.requests.borrow_mut().push(Recorded {
            path: path.to_string(),
            fields: fields.to_vec(),
        });

        rx.await
            .unwrap_or_else(|_| Err(TransportError::Network("request abandoned".to_string())))
    }
}
