//! Berlin S-Bahn departure board server.
//!
//! Fetches departures from the VBB REST API, resolves each one to a compass
//! or ring direction, and serves both a JSON feed for a web client and a
//! 400×300 1-bit PNG for an ESP32-driven e-ink display.

pub mod board;
pub mod cache;
pub mod config;
pub mod domain;
pub mod render;
pub mod vbb;
pub mod web;
