//! Sound Tracker
//!
//! Growth and spike tracking for TikTok sounds, read from the
//! per-artist daily-log tabs of Google Sheets.
//!
//! This crate provides the core implementation for the
//! `sound-tracker` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install sound-tracker
//! sound-tracker sounds --artist bnyx --sort growth-desc
//! ```
//!
//! Library users build a [`tracker::SoundTracker`] from an
//! [`utils::ArtistTable`] and any [`sheets::RowSource`].

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod sheets;
pub mod tracker;
pub mod utils;
