//! # Jestui
//!
//! A terminal client with two panels: a QR code generator and a joke fetcher.
//!
//! The QR panel turns free text into a request URL for a public QR rendering
//! API and shows a unicode preview of the code. The joke panel fetches a
//! single-line joke from JokeAPI for a selectable category and keeps a pair of
//! ephemeral reaction counters and a light/dark theme flag.
//!
//! ## Architecture
//!
//! The crate follows a component architecture over an action channel:
//!
//! - [`action::Action`] - every state transition in the app
//! - [`components`] - UI panels implementing the [`components::Component`] trait
//! - [`app::App`] - the event loop wiring terminal events, keybindings and
//!   components together
//! - [`jokes::JokeService`] - background task performing the HTTP fetches
//! - [`tui::Tui`] - terminal lifecycle and event stream

#![deny(warnings)]
#![allow(dead_code)]

pub mod action;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod jokes;
pub mod mode;
pub mod qr;
pub mod tui;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
