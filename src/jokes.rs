//! Joke fetching: category selection, the JokeAPI client, and the background
//! service that performs requests off the UI loop.

pub mod category;
pub mod client;
pub mod service;

pub use category::Category;
pub use client::{JokeClient, FETCH_FAILED_MESSAGE};
pub use service::{JokeCommand, JokeService};
