//! Self-contained item panel component.
//!
//! The host supplies configuration and an [`fetch::ItemSource`], drives the
//! lifecycle hooks and listens for toasts and events. See
//! [`ui::panel::Panel`] for the entry point.

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod notify;
pub mod ui;
