//! Travel recommendation chatbot used to compare chatbot conditions in
//! controlled experiments.
//!
//! A launch-time group tag picks the condition (data grounding, the
//! popularity filter and the interaction style). The session composes a
//! system instruction from it and forwards the conversation to an
//! OpenAI-compatible chat completion API.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod ui;
