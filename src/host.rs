//! The process-wide panel host.
//!
//! Panels built with [`build_hosted`](crate::PanelBuilder::build_hosted) land
//! in a single shared container, created lazily on first use and alive for
//! the rest of the process. The host is append-only: panels are registered,
//! never removed. Drawing it lays every hosted panel out in a wrapped row, so
//! panels float next to each other and spill onto new rows as the window
//! narrows.
//!
//! Access goes through the [`host()`] accessor rather than a public static,
//! so the lazy-create point stays in one place.

use std::sync::{Arc, Mutex, PoisonError};

use log::debug;
use once_cell::sync::Lazy;

use crate::panel::ParamPanel;

/// Shared handle to a hosted panel.
///
/// Hosted panels are drawn by the host but stay addressable by the caller,
/// e.g. for programmatic [`set`](crate::ParamPanel::set) calls.
pub type PanelHandle = Arc<Mutex<ParamPanel>>;

static HOST: Lazy<PanelHost> = Lazy::new(|| {
    debug!("creating panel host");
    PanelHost {
        panels: Mutex::new(Vec::new()),
    }
});

/// Returns the process-wide panel host, creating it on first use.
pub fn host() -> &'static PanelHost {
    &HOST
}

/// The default placement target for floating panels.
pub struct PanelHost {
    panels: Mutex<Vec<PanelHandle>>,
}

impl PanelHost {
    /// Registers a panel and returns a shared handle to it.
    pub fn register(&self, panel: ParamPanel) -> PanelHandle {
        let handle = Arc::new(Mutex::new(panel));
        self.panels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handle.clone());
        handle
    }

    /// Number of hosted panels.
    pub fn len(&self) -> usize {
        self.panels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing has been hosted yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draws every hosted panel in a wrapped row.
    pub fn ui(&self, ui: &mut egui::Ui) {
        let panels = self.panels.lock().unwrap_or_else(PoisonError::into_inner);
        ui.horizontal_wrapped(|ui| {
            for panel in panels.iter() {
                panel
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .ui(ui);
            }
        });
    }
}
