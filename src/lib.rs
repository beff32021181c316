//! Lootbot: a chat-bot command that draws from loot boxes.
//!
//! A message such as `box 超级补给箱 5` is matched against the
//! [`command::CommandRegistry`], its arguments are decoded into a
//! [`backend::RandRequest`], the request is sent to the loot-box backend
//! service, and the reply entries are rendered into text and image segments.
//!
//! # Quick start
//!
//! ```no_run
//! use lootbot::backend::HttpBackend;
//! use lootbot::command::CommandRegistry;
//! use lootbot::config::load_config;
//! use lootbot::message::InputSegment;
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let backend = Arc::new(HttpBackend::new(&config.backend));
//! let registry = CommandRegistry::with_default_commands(backend, &config.bot).unwrap();
//! let out = registry
//!     .dispatch(&[InputSegment::text("box 超级补给箱 5")])
//!     .await;
//! println!("{out:?}");
//! # }
//! ```

pub mod backend;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod message;
pub mod parse;
pub mod render;
#[cfg(test)]
pub mod testsupport;
