//! # Core Application Logic
//!
//! This module contains FestiveMailer's business logic.
//! It knows nothing about any specific UI technology or transport.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Form + catalogs      │
//!                    │  • validate / compose   │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!               ┌────────────────┴────────────────┐
//!               ▼                                 ▼
//!        ┌────────────┐                    ┌────────────┐
//!        │    TUI     │                    │   Agent    │
//!        │  Adapter   │                    │   Client   │
//!        │ (ratatui)  │                    │ (reqwest)  │
//!        └────────────┘                    └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`form`], [`catalog`]: what the user fills in and picks from
//! - [`validate`], [`prompt`]: gatekeeping and prompt text
//! - [`preview`], [`navigation`]: what happens after a send
//! - [`config`]: settings resolution (the only module here that reads files)

pub mod action;
pub mod catalog;
pub mod config;
pub mod form;
pub mod navigation;
pub mod preview;
pub mod prompt;
pub mod state;
pub mod validate;
