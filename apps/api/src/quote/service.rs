//! Quote service — validates the mood, calls the backend, cleans the completion.
//!
//! Every outcome becomes a `QuoteResult`; nothing here propagates a failure to the transport.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::llm_client::{GenerationBackend, LlmError};
use crate::quote::assembler::PromptAssembler;
use crate::quote::postprocess::{clean_quote, CleanedQuote};
use crate::quote::prompts::QUOTE_SAMPLING;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Mood cannot be empty.")]
    EmptyMood,

    #[error(transparent)]
    Backend(#[from] LlmError),
}

/// Response payload: `{mood, quote}` on success, `{error}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuoteResult {
    Success { mood: String, quote: String },
    Error { error: String },
}

impl From<QuoteError> for QuoteResult {
    fn from(err: QuoteError) -> Self {
        QuoteResult::Error {
            error: err.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct QuoteService {
    assembler: Arc<PromptAssembler>,
    backend: Arc<dyn GenerationBackend>,
}

impl QuoteService {
    pub fn new(assembler: Arc<PromptAssembler>, backend: Arc<dyn GenerationBackend>) -> Self {
        Self { assembler, backend }
    }

    /// Produces a quote for `raw_mood`, folding any failure into `QuoteResult::Error`.
    pub async fn handle_quote_request(&self, raw_mood: &str) -> QuoteResult {
        match self.generate_quote(raw_mood).await {
            Ok((mood, quote)) => QuoteResult::Success { mood, quote },
            Err(QuoteError::EmptyMood) => QuoteError::EmptyMood.into(),
            Err(err) => {
                warn!("Quote generation failed: {err}");
                err.into()
            }
        }
    }

    async fn generate_quote(&self, raw_mood: &str) -> Result<(String, String), QuoteError> {
        let mood = raw_mood.trim();
        if mood.is_empty() {
            return Err(QuoteError::EmptyMood);
        }

        let request = self.assembler.assemble(mood);
        debug!("Assembled conversation with {} turns", request.turns.len());

        let raw = self
            .backend
            .generate(
                self.assembler.system_instruction(),
                &request.turns,
                &QUOTE_SAMPLING,
            )
            .await?;

        let quote = match clean_quote(&raw) {
            CleanedQuote::Generated(quote) => quote,
            fallback @ CleanedQuote::Fallback => {
                warn!("Completion too short ({raw:?}), using fallback quote");
                fallback.into_text()
            }
        };

        info!("Generated quote for mood '{mood}'");
        Ok((mood.to_string(), quote))
    }
}
