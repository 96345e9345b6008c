//! Everything that talks to or understands indiarace.com: the HTTP client,
//! the retrying fetcher on top of it, and the markup extractor.

mod client;
pub mod extractor;
pub mod fetcher;
pub mod patterns;

pub use client::Client;
pub use fetcher::{FetchOutcome, Fetcher, RetryPolicy};
