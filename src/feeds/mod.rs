//! Decorative feeds shown in the header: current weather and a quote.
//!
//! Both are fetched once at startup on background threads. Results arrive
//! over a channel and are optional; a failed fetch is logged and shows
//! nothing.

pub mod quote;
pub mod weather;

pub use quote::{fetch_quote, parse_quote, Quote};
pub use weather::{fetch_weather, parse_weather, weather_url, Weather};

use crate::constants::{FEED_TIMEOUT_SECONDS, USER_AGENT};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A finished fetch. `None` means the feed is unavailable.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedUpdate {
    Weather(Option<Weather>),
    Quote(Option<Quote>),
}

fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(FEED_TIMEOUT_SECONDS))
        .user_agent(USER_AGENT)
        .build()
}

/// GET a URL and return the body as text.
pub(crate) fn get_text(agent: &ureq::Agent, url: &str) -> Result<String, FeedError> {
    Ok(agent.get(url).call()?.into_string()?)
}

fn spawn_fetch<T, F, W>(
    name: &'static str,
    agent: ureq::Agent,
    tx: Sender<FeedUpdate>,
    fetch: F,
    wrap: W,
) where
    T: Send + 'static,
    F: FnOnce(&ureq::Agent) -> Result<T, FeedError> + Send + 'static,
    W: FnOnce(Option<T>) -> FeedUpdate + Send + 'static,
{
    thread::spawn(move || {
        let value = match fetch(&agent) {
            Ok(v) => {
                tracing::info!(feed = name, "feed loaded");
                Some(v)
            }
            Err(e) => {
                tracing::warn!(feed = name, error = %e, "feed unavailable");
                None
            }
        };
        // Receiver is gone if the app already quit
        let _ = tx.send(wrap(value));
    });
}

/// Start both fetches; each sends exactly one update on the returned channel.
pub fn spawn_fetches() -> Receiver<FeedUpdate> {
    let agent = agent();
    let (tx, rx) = mpsc::channel();
    spawn_fetch(
        "weather",
        agent.clone(),
        tx.clone(),
        fetch_weather,
        FeedUpdate::Weather,
    );
    spawn_fetch("quote", agent, tx, fetch_quote, FeedUpdate::Quote);
    rx
}
