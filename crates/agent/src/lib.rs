//! Agent runtime: intent classification and reply dispatch
//!
//! Every inbound business message takes the same one-shot path:
//! 1. **Boundary** (`boundary`) - validate input and the completion credential
//! 2. **Classification** (`classifier`) - ask the completion service for an intent label
//! 3. **Dispatch** (`dispatch`) - pick exactly one reply strategy from the label and channel
//! 4. **Strategy** (`handlers`) - produce the reply text, by model call or template
//!
//! # Key Types
//!
//! - `AgentRuntime` - classify-then-dispatch orchestrator (see `runtime` module)
//! - `CompletionService` - pluggable text completion backend (see `llm`)
//! - `HandlerStrategy` - one reply strategy per routing outcome
//!
//! The classifier label is never parsed strictly. Dispatch looks for intent
//! markers inside it and degrades to channel-based handling when none match.

pub mod boundary;
pub mod classifier;
pub mod dispatch;
pub mod handlers;
pub mod llm;
pub mod openai;
pub mod runtime;

#[cfg(test)]
mod testing;
