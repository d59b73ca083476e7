//! A chart whose data range follows its pan/zoom viewport.

use crate::chart::{Chart, PanDirection};
use crate::sync::{SyncController, Ticket};
use crate::view::ViewRange;

/// Sync controller and chart kept in agreement.
#[derive(Debug, Clone)]
pub struct SyncedPlot<T> {
    /// Data range, pending task and results.
    pub sync: SyncController<T>,
    /// Rendered chart.
    pub chart: Chart,
}

impl<T: Clone> SyncedPlot<T> {
    /// Wrap a controller and chart.
    pub fn new(sync: SyncController<T>, chart: Chart) -> Self {
        let mut plot = Self { sync, chart };
        plot.pin_home();
        plot
    }

    // Under the identity transform the x-axis shows exactly the data range.
    fn pin_home(&mut self) {
        self.chart.set_home_x(Some(self.sync.view()));
    }

    /// Start a fresh computation over the default range.
    ///
    /// The visual transform is cleared too so the axes match the data.
    pub fn perform_fresh(&mut self, task: T) -> Ticket<T> {
        self.chart.reset_transform();
        let ticket = self.sync.perform(task, ViewRange::default());
        self.pin_home();
        ticket
    }

    /// Pan, then replay the pending task over the new visible range.
    pub fn pan(&mut self, direction: PanDirection) -> Option<Ticket<T>> {
        if !self.chart.has_data() {
            return None;
        }
        let range = self.chart.pan(direction);
        let ticket = self.sync.set_view(range);
        self.pin_home();
        ticket
    }

    /// Zoom, then replay the pending task over the new visible range.
    pub fn zoom(&mut self, factor: f64) -> Option<Ticket<T>> {
        if !self.chart.has_data() {
            return None;
        }
        let range = self.chart.zoom(factor);
        let ticket = self.sync.set_view(range);
        self.pin_home();
        ticket
    }

    /// Show `range` and replay the pending task over it.
    pub fn set_range(&mut self, range: ViewRange) -> Option<Ticket<T>> {
        if !self.chart.has_data() {
            return None;
        }
        self.chart.show_x_range(range);
        let ticket = self.sync.set_view(range);
        self.pin_home();
        ticket
    }

    /// Reset both the visual transform and the data range.
    pub fn reset(&mut self) -> Option<Ticket<T>> {
        self.chart.reset_transform();
        let ticket = self.sync.reset_view();
        self.pin_home();
        ticket
    }
}
