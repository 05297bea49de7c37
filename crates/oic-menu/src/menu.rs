//! Menu item descriptors

use std::fmt;

/// A context-menu entry descriptor handed back to the host.
///
/// Carries the stable identifier, display label, and tooltip the host
/// renders, plus the bound activation handler. The host calls
/// [`MenuItem::activate`] when the user clicks the entry.
pub struct MenuItem {
    name: String,
    label: String,
    tip: String,
    on_activate: Box<dyn Fn() + Send + Sync>,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        tip: impl Into<String>,
        on_activate: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            tip: tip.into(),
            on_activate: Box::new(on_activate),
        }
    }

    /// Stable identifier the host uses to track the entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable label rendered in the menu.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Tooltip text.
    pub fn tip(&self) -> &str {
        &self.tip
    }

    /// Run the bound activation handler.
    pub fn activate(&self) {
        (self.on_activate)()
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("tip", &self.tip)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_activate_runs_handler() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let item = MenuItem::new("Provider::item", "Label", "Tip", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        item.activate();
        item.activate();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_omits_handler() {
        let item = MenuItem::new("Provider::item", "Label", "Tip", || {});
        let repr = format!("{item:?}");
        assert!(repr.contains("Provider::item"));
        assert!(repr.contains("Label"));
    }
}
