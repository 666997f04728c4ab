//! # Core Application Logic
//!
//! This module contains Wander's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    API     │      │   tests    │
//!     │  Adapter   │      │   Client   │      │ (canned    │
//!     │ (ratatui)  │      │ (reqwest)  │      │  service)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`query`]: Title normalization between wire and display form
//! - [`config`]: Settings with the defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod query;
pub mod state;
