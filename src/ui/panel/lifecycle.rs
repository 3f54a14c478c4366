//! Host-driven lifecycle hooks.

use crate::error::PanelError;

use super::component::Panel;

/// Hooks the hosting environment calls. A component never calls them on
/// itself.
pub trait Lifecycle {
    /// Attached to the host. Resets state and drops any earlier load. Must
    /// not panic; failures go to the error handler.
    fn on_mount(&self);

    /// Detached from the host. Pending loads can no longer write state.
    fn on_unmount(&self);

    /// After every render. Read-only; must not trigger another render.
    fn on_render(&self);

    /// The host caught an error while rendering this component.
    fn on_render_error(&self, error: &dyn std::error::Error, context: &str);
}

impl Lifecycle for Panel {
    fn on_mount(&self) {
        self.attach();
        tracing::info!(panel = %self.id(), "Panel mounted");

        self.reset_component();

        if let Err(err) = self.config().validate() {
            self.handle_error(PanelError::Initialization {
                cause: err.to_string(),
            });
            return;
        }

        if self.loads_on_mount() {
            if tokio::runtime::Handle::try_current().is_err() {
                self.handle_error(PanelError::Initialization {
                    cause: "no async runtime for the initial load".to_string(),
                });
                return;
            }
            drop(self.refresh_data());
        }
    }

    fn on_unmount(&self) {
        self.detach();
        tracing::info!(panel = %self.id(), "Panel unmounted");
    }

    fn on_render(&self) {
        let state = self.state();
        tracing::trace!(
            panel = %self.id(),
            loading = state.is_loading(),
            has_error = state.has_error(),
            item_count = state.items().len(),
            "Rendered"
        );
    }

    fn on_render_error(&self, error: &dyn std::error::Error, context: &str) {
        self.handle_error(PanelError::Render {
            cause: error.to_string(),
            context: context.to_string(),
        });
    }
}
