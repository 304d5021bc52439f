use crate::backend::ResearchBackend;
use autoresearch_types::{ChatMessage, ChatRequest, ResearchSession, RunId};

pub const CHAT_FAILURE_REPLY: &str = "Sorry, I encountered an error processing your question. \
     Please check your API configuration and try again.";

/// Append-only chat history bound to one research run.
///
/// `send` takes `&mut self`, so a transcript has at most one request in
/// flight.
#[derive(Debug, Default)]
pub struct ChatTranscript {
    run: Option<RunId>,
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn reset(&mut self) {
        self.messages.clear();
    }

    /// Bind to `run`, clearing the history if the run changed.
    pub fn attach(&mut self, run: RunId) {
        if self.run != Some(run) {
            self.run = Some(run);
            self.reset();
        }
    }

    /// Send one user turn and record the reply.
    ///
    /// Returns the assistant reply, or `None` when the input is blank or no
    /// session is active. Backend failures are recorded as a fixed apology.
    pub async fn send(
        &mut self,
        backend: &dyn ResearchBackend,
        input: &str,
        session: Option<&ResearchSession>,
    ) -> Option<&ChatMessage> {
        let input = input.trim();
        let session = session?;
        if input.is_empty() {
            return None;
        }

        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(input));

        let request = ChatRequest::new(input, session.clone(), history);
        let reply = match backend.chat(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "Chat request failed");
                CHAT_FAILURE_REPLY.to_string()
            }
        };

        self.messages.push(ChatMessage::assistant(reply));
        self.messages.last()
    }
}
