//! Context-menu provider
//!
//! Mirrors the two host callbacks: one for file selections, one for the
//! folder background. A selection item is offered only for a single selected
//! directory; the background always represents a directory, so its item is
//! unconditional.

use std::sync::Arc;

use oic_core::prelude::*;
use oic_core::uri;

use crate::host::FsEntry;
use crate::launcher::EditorLauncher;
use crate::menu::MenuItem;

/// Identifier for the item offered on a selected folder.
pub const OPEN_FOLDER_ITEM: &str = "CodeMenuProvider::open_folder_in_code";
/// Identifier for the item offered on the folder background.
pub const OPEN_BACKGROUND_ITEM: &str = "CodeMenuProvider::open_background_in_code";

const LABEL: &str = "Open in Code";
const TIP: &str = "Open this folder in Visual Studio Code";

/// Contributes "Open in Code" entries to the host's context menus.
#[derive(Debug, Clone)]
pub struct CodeMenuProvider {
    launcher: Arc<dyn EditorLauncher>,
}

impl CodeMenuProvider {
    pub fn with_launcher(launcher: Arc<dyn EditorLauncher>) -> Self {
        Self { launcher }
    }

    /// Menu items for the current file selection.
    ///
    /// Offered only when exactly one entry is selected and that entry is a
    /// directory; every other selection yields no items.
    pub fn file_items(&self, selection: &[&dyn FsEntry]) -> Vec<MenuItem> {
        if selection.len() != 1 {
            return Vec::new();
        }

        let entry = selection[0];
        if !entry.is_directory() {
            return Vec::new();
        }

        vec![self.item(OPEN_FOLDER_ITEM, entry.uri())]
    }

    /// Menu items for the folder background (always exactly one).
    pub fn background_items(&self, folder: &dyn FsEntry) -> Vec<MenuItem> {
        vec![self.item(OPEN_BACKGROUND_ITEM, folder.uri())]
    }

    fn item(&self, name: &str, uri: String) -> MenuItem {
        let launcher = Arc::clone(&self.launcher);
        MenuItem::new(name, LABEL, TIP, move || activate(launcher.as_ref(), &uri))
    }
}

/// Activation handler shared by both items.
///
/// Non-local URIs are skipped without a diagnostic; a failed launch is
/// reported once and swallowed. Nothing propagates back to the host.
fn activate(launcher: &dyn EditorLauncher, uri: &str) {
    let Some(path) = uri::path_from_uri(uri) else {
        return;
    };

    if let Err(err) = launcher.launch(&path) {
        error!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticEntry {
        uri: &'static str,
        directory: bool,
    }

    impl FsEntry for StaticEntry {
        fn uri(&self) -> String {
            self.uri.to_string()
        }

        fn is_directory(&self) -> bool {
            self.directory
        }
    }

    const FOLDER: StaticEntry = StaticEntry {
        uri: "file:///home/user/project",
        directory: true,
    };
    const FILE: StaticEntry = StaticEntry {
        uri: "file:///home/user/project/main.rs",
        directory: false,
    };

    #[derive(Debug)]
    struct NullLauncher;

    impl EditorLauncher for NullLauncher {
        fn launch(&self, _path: &std::path::Path) -> Result<()> {
            Ok(())
        }

        fn command(&self) -> &str {
            "code"
        }
    }

    fn provider() -> CodeMenuProvider {
        CodeMenuProvider::with_launcher(Arc::new(NullLauncher))
    }

    #[test]
    fn test_empty_selection_yields_no_items() {
        assert!(provider().file_items(&[]).is_empty());
    }

    #[test]
    fn test_multi_selection_yields_no_items() {
        let items = provider().file_items(&[&FOLDER, &FOLDER]);
        assert!(items.is_empty());
    }

    #[test]
    fn test_file_selection_yields_no_items() {
        assert!(provider().file_items(&[&FILE]).is_empty());
    }

    #[test]
    fn test_single_directory_yields_one_item() {
        let items = provider().file_items(&[&FOLDER]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), OPEN_FOLDER_ITEM);
        assert_eq!(items[0].label(), "Open in Code");
        assert_eq!(items[0].tip(), "Open this folder in Visual Studio Code");
    }

    #[test]
    fn test_background_always_yields_one_item() {
        let items = provider().background_items(&FOLDER);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), OPEN_BACKGROUND_ITEM);
        assert_eq!(items[0].label(), "Open in Code");
    }
}
