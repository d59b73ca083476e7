//! View-state synchronization between a plot's visible range and the
//! backend data shown in it.
//!
//! The backend, not the client, samples functions. Whenever the visible range
//! changes after a computation was requested, the same computation is
//! replayed for the new range so the curve covers the visible domain at full
//! resolution.
//!
//! Every request is tagged with a sequence number. Responses to anything but
//! the latest request never overwrite the chart, so a slow response cannot
//! replace the data of a newer one.

use crate::error::MathscopeError;
use crate::series::PlotSeries;
use crate::view::ViewRange;

/// One issued request.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket<T> {
    /// Sequence number, strictly increasing per controller.
    pub seq: u64,
    /// Operation to run.
    pub task: T,
    /// Range to sample.
    pub view: ViewRange,
    /// Whether this is an explicit user computation rather than a
    /// pan/zoom refresh.
    pub fresh: bool,
}

/// Tracks the latest issued request of one page.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    issued: u64,
    outstanding: bool,
}

impl RequestTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new sequence number, superseding all earlier ones.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.outstanding = true;
        self.issued
    }

    /// Record an externally numbered request as the latest one.
    pub fn issue_as(&mut self, seq: u64) -> u64 {
        self.issued = seq;
        self.outstanding = true;
        seq
    }

    /// Whether `seq` is the latest issued request.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.issued
    }

    /// Mark `seq` as completed. Returns false for superseded requests.
    pub fn settle(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            tracing::debug!("Discarding stale response #{} (latest #{})", seq, self.issued);
            return false;
        }
        self.outstanding = false;
        true
    }

    /// Whether the latest request is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.outstanding
    }

    /// Latest issued sequence number.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

/// Decoded successful result for a synced plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotUpdate {
    /// Textual result, shown only for fresh computations.
    pub text: Option<String>,
    /// Replacement series.
    pub series: Vec<PlotSeries>,
}

/// Keeps a plot consistent with the last requested operation and the
/// current pan/zoom viewport.
#[derive(Debug, Clone)]
pub struct SyncController<T> {
    view: ViewRange,
    pending: Option<T>,
    tracker: RequestTracker,
    fresh_seq: Option<u64>,
    result: Option<String>,
    error: Option<String>,
    series: Vec<PlotSeries>,
    clear_on_error: bool,
}

impl<T: Clone> Default for SyncController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> SyncController<T> {
    /// Create a controller with the default view and no pending task.
    pub fn new() -> Self {
        Self {
            view: ViewRange::default(),
            pending: None,
            tracker: RequestTracker::new(),
            fresh_seq: None,
            result: None,
            error: None,
            series: Vec::new(),
            clear_on_error: false,
        }
    }

    /// Drop the chart whenever a request fails.
    pub fn clearing_chart_on_error(mut self) -> Self {
        self.clear_on_error = true;
        self
    }

    /// Run `task` over `view`.
    ///
    /// With the default view this is a fresh computation: error and textual
    /// result are cleared and `task` becomes the pending task. Any other view
    /// means a silent refresh that only replaces the series.
    pub fn perform(&mut self, task: T, view: ViewRange) -> Ticket<T> {
        let fresh = view.is_default();
        if fresh {
            self.error = None;
            self.result = None;
            self.pending = Some(task.clone());
        }
        self.view = view;

        let seq = self.tracker.issue();
        if fresh {
            self.fresh_seq = Some(seq);
        }
        tracing::debug!(
            "Issuing request #{} for [{}, {}] ({})",
            seq,
            view.min,
            view.max,
            if fresh { "fresh" } else { "refresh" }
        );

        Ticket {
            seq,
            task,
            view,
            fresh,
        }
    }

    /// Update the visible range.
    ///
    /// Replays the pending task over the new range. Without a pending task,
    /// or if the range did not change, nothing is requested.
    pub fn set_view(&mut self, view: ViewRange) -> Option<Ticket<T>> {
        if view == self.view {
            return None;
        }
        self.view = view;
        let task = self.pending.clone()?;
        Some(self.perform(task, view))
    }

    /// Restore the default range, replaying the pending task if needed.
    pub fn reset_view(&mut self) -> Option<Ticket<T>> {
        self.set_view(ViewRange::default())
    }

    /// Apply a completed request. Returns whether the chart was updated.
    pub fn apply(&mut self, seq: u64, outcome: Result<PlotUpdate, MathscopeError>) -> bool {
        let is_fresh = self.fresh_seq == Some(seq);

        match outcome {
            Ok(update) => {
                // A fresh result superseded by a pan still carries the text.
                if is_fresh {
                    if let Some(text) = update.text {
                        self.result = Some(text);
                    }
                }
                if !self.tracker.settle(seq) {
                    return false;
                }
                self.series = update.series;
                true
            },
            Err(err) => {
                if !self.tracker.settle(seq) {
                    return false;
                }
                self.error = Some(err.user_message());
                if self.clear_on_error {
                    self.series.clear();
                }
                false
            },
        }
    }

    /// Show a client-side validation error without issuing a request.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Current visible range.
    pub fn view(&self) -> ViewRange {
        self.view
    }

    /// Last explicitly requested task.
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Textual result of the last fresh computation.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Error of the last completed request.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Series currently displayed.
    pub fn series(&self) -> &[PlotSeries] {
        &self.series
    }

    /// Whether the latest request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading()
    }

    /// Number of requests issued so far.
    pub fn requests_issued(&self) -> u64 {
        self.tracker.issued()
    }
}
