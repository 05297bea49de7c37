//! # oic-menu - "Open in Code" Menu Provider
//!
//! The extension proper: decides when the file manager's context menu gets
//! an "Open in Code" entry and launches the configured editor when one is
//! activated.
//!
//! Depends on [`oic_core`] for error handling, logging, and URI conversion.
//!
//! ## Public API
//!
//! ### Host Interface (`host`)
//! - [`FsEntry`] - Capability trait over the host's file objects
//!
//! ### Menu Items (`menu`)
//! - [`MenuItem`] - Descriptor (identifier, label, tooltip, activation handler)
//!
//! ### Provider (`provider`)
//! - [`CodeMenuProvider`] - Builds selection and background menu items
//!
//! ### Launching (`launcher`)
//! - [`EditorLauncher`] - Seam between activation and process creation
//! - [`CommandLauncher`] - `<command> <path>`, detached, fire-and-forget
//!
//! ### Settings (`config`)
//! - [`Settings`] - Editor command, loaded from `config.toml`
//!
//! ## Registration
//!
//! The host calls [`register()`] once at load time and keeps the returned
//! provider for the lifetime of the process. Menu-build callbacks go to
//! [`CodeMenuProvider::file_items`] / [`CodeMenuProvider::background_items`];
//! clicks go to [`MenuItem::activate`].

pub mod config;
pub mod host;
pub mod launcher;
pub mod menu;
pub mod provider;

pub use config::Settings;
pub use host::FsEntry;
pub use launcher::{CommandLauncher, EditorLauncher};
pub use menu::MenuItem;
pub use provider::CodeMenuProvider;

use std::sync::Arc;

use oic_core::prelude::*;

/// Registration entry point, invoked once by the host at load time.
///
/// Bootstraps logging (best-effort -- a failure is reported to stderr and
/// ignored), loads [`Settings`], and returns the provider the host will
/// query for menu items. No other global state exists.
pub fn register() -> CodeMenuProvider {
    if let Err(err) = oic_core::logging::init() {
        eprintln!("open-in-code: {err}");
    }

    register_with(Settings::load())
}

/// Registration with explicit settings (embedding hosts, tests).
pub fn register_with(settings: Settings) -> CodeMenuProvider {
    let launcher = CommandLauncher::new(settings.command);
    if !launcher.is_available() {
        warn!(
            "'{}' not found on PATH; activation will log a launch failure",
            launcher.command()
        );
    }
    info!("menu provider registered (command: {})", launcher.command());

    CodeMenuProvider::with_launcher(Arc::new(launcher))
}
