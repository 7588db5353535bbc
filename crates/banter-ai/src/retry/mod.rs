//! Resilient request wrapper.
//!
//! Wraps an `AiClient` so each completion is attempted up to
//! `max_retries` times. Every attempt is preceded by a fixed minimum
//! delay; transient failures back off exponentially (capped) before the
//! next attempt. Any other failure propagates immediately.

mod client;
mod pause;
mod policy;


pub use client::{NoticeSink, RetryingClient};
pub use pause::{Pause, TokioPause};
pub use policy::RetryPolicy;
