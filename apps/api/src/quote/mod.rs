// Sarcastic quote generation.
// Implements: few-shot prompt assembly, completion clean-up, the request handler.
// All backend calls go through llm_client — no direct HTTP calls here.

pub mod assembler;
pub mod handlers;
pub mod postprocess;
pub mod prompts;
pub mod service;
