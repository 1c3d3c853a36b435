//! Shared test double: a provider that replays scripted replies and records
//! every request it sees.

use std::sync::Mutex;

use async_trait::async_trait;
use plume_llm::{Error, PromptRequest, Provider, Result};

pub struct ScriptedProvider {
    replies: Mutex<Vec<String>>,
    seen: Mutex<Vec<PromptRequest>>,
}

impl ScriptedProvider {
    /// Replies are handed out in order; running past the script is an error.
    pub fn new(replies: Vec<String>) -> Self {
        let mut reversed = replies;
        reversed.reverse();
        Self {
            replies: Mutex::new(reversed),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Requests recorded so far, in call order.
    pub fn seen(&self) -> Vec<PromptRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    fn provider_id(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &PromptRequest) -> Result<String> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| Error::MalformedResponse("script exhausted".to_string()))
    }
}
