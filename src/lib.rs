//! Postboard library.
//!
//! A small web application that keeps short text posts in memory and serves
//! them as server-rendered pages plus a read-only JSON API.

// Raw strings are used for HTML snippets in tests
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod store;
pub mod web;
