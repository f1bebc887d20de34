// Application state management
//
// This module contains the main AppState struct and re-exports
// configuration types from the config submodule.

pub mod config;
pub mod event;

pub use config::RefreshConfig;

use crate::mesh::{load_snapshot, Snapshot};
use crate::ui::octopus::{build_octopus_view, OctopusView};
use std::path::PathBuf;
use std::time::Instant;

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// Snapshot file to (re)load; `None` for in-memory snapshots
    pub snapshot_path: Option<PathBuf>,

    /// Current mesh snapshot
    pub snapshot: Snapshot,

    /// Last snapshot load error message (if any)
    pub load_error: Option<String>,

    /// Last time the snapshot was loaded
    last_reload: Instant,

    /// Id of the focal resource
    pub focus: Option<String>,

    /// Previously focused resources, most recent last
    history: Vec<String>,

    /// Index into the current view's navigable links
    pub selected_link: Option<usize>,

    /// Refresh interval configuration
    pub refresh_config: RefreshConfig,
}

impl AppState {
    /// Create an AppState around an in-memory snapshot
    ///
    /// Focuses the first resource in the snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        let focus = snapshot.resources.first().map(|r| r.id());
        Self {
            running: true,
            snapshot_path: None,
            snapshot,
            load_error: None,
            last_reload: Instant::now(),
            focus,
            history: Vec::new(),
            selected_link: None,
            refresh_config: RefreshConfig::new(),
        }
    }

    /// Create an AppState backed by a snapshot file
    ///
    /// A failed initial load starts with an empty snapshot and records the
    /// error; the file is retried on every data refresh.
    pub fn from_path(path: PathBuf, focus: Option<String>, refresh_config: RefreshConfig) -> Self {
        let mut state = Self::new(Snapshot::default());
        state.snapshot_path = Some(path);
        state.refresh_config = refresh_config;
        state.reload();

        if focus.is_some() {
            state.focus = focus;
        }
        state
    }

    /// Update state on each tick
    pub fn on_tick(&mut self) {
        if self.last_reload.elapsed() >= self.refresh_config.data_interval() {
            self.reload();
        }
    }

    /// Reload the snapshot from disk
    ///
    /// Keeps the previous snapshot if loading fails.
    pub fn reload(&mut self) {
        self.last_reload = Instant::now();
        let Some(path) = self.snapshot_path.as_deref() else {
            return;
        };

        match load_snapshot(path) {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.load_error = None;
                if self.focus.is_none() {
                    self.focus = self.snapshot.resources.first().map(|r| r.id());
                }
                self.clamp_selected_link();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to reload snapshot");
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Build the octopus graph for the focal resource
    ///
    /// Recomputed from the snapshot on every call.
    pub fn current_view(&self) -> Option<OctopusView> {
        let focus = self.focus.as_deref()?;
        let resource = self.snapshot.find(focus);
        let neighbors = self.snapshot.neighbors_of(focus);
        let unmeshed = self.snapshot.unmeshed_sources_of(focus);
        build_octopus_view(resource, &neighbors, &unmeshed)
    }

    /// Target id of the selected link in the current view
    pub fn selected_target(&self) -> Option<String> {
        let idx = self.selected_link?;
        let view = self.current_view()?;
        view.link(idx).map(|link| link.target.clone())
    }

    fn link_count(&self) -> usize {
        self.current_view().map(|v| v.links().len()).unwrap_or(0)
    }

    fn clamp_selected_link(&mut self) {
        let count = self.link_count();
        self.selected_link = match self.selected_link {
            Some(_) if count == 0 => None,
            Some(idx) => Some(idx.min(count - 1)),
            None => None,
        };
    }

    /// Move link selection up (decrease index)
    pub fn select_previous_link(&mut self) {
        let count = self.link_count();
        if count == 0 {
            self.selected_link = None;
            return;
        }

        self.selected_link = match self.selected_link {
            // Start at the last link
            None => Some(count - 1),
            Some(idx) => Some(idx.saturating_sub(1)),
        };
    }

    /// Move link selection down (increase index)
    pub fn select_next_link(&mut self) {
        let count = self.link_count();
        if count == 0 {
            self.selected_link = None;
            return;
        }

        self.selected_link = match self.selected_link {
            None => Some(0),
            Some(idx) => Some((idx + 1).min(count - 1)),
        };
    }

    /// Refocus the graph on the selected link's resource
    pub fn follow_selected_link(&mut self) {
        let Some(target) = self.selected_target() else {
            return;
        };
        tracing::info!(resource = %target, "Following link");
        if let Some(previous) = self.focus.replace(target) {
            self.history.push(previous);
        }
        self.selected_link = None;
    }

    /// Return to the previously focused resource
    pub fn go_back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.focus = Some(previous);
            self.selected_link = None;
        }
    }

    /// Focus the next resource in snapshot order, wrapping around
    pub fn focus_next_resource(&mut self) {
        self.step_focus(1);
    }

    /// Focus the previous resource in snapshot order, wrapping around
    pub fn focus_previous_resource(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, step: isize) {
        let count = self.snapshot.resources.len();
        if count == 0 {
            return;
        }

        let current = self
            .focus
            .as_deref()
            .and_then(|id| self.snapshot.resources.iter().position(|r| r.id() == id));
        let next = match current {
            Some(idx) => (idx as isize + step).rem_euclid(count as isize) as usize,
            None if step >= 0 => 0,
            None => count - 1,
        };

        self.focus = Some(self.snapshot.resources[next].id());
        self.selected_link = None;
    }

    /// Increase refresh rate (decrease interval by 50ms, clamp to minimum)
    pub fn increase_refresh_rate(&mut self) {
        let new_interval = self
            .refresh_config
            .refresh_ms
            .saturating_sub(config::REFRESH_STEP);
        self.refresh_config.refresh_ms = new_interval.max(config::MIN_REFRESH_MS);
        self.refresh_config.last_change = Some(Instant::now());
    }

    /// Decrease refresh rate (increase interval by 50ms, clamp to maximum)
    pub fn decrease_refresh_rate(&mut self) {
        let new_interval = self
            .refresh_config
            .refresh_ms
            .saturating_add(config::REFRESH_STEP);
        self.refresh_config.refresh_ms = new_interval.min(config::MAX_REFRESH_MS);
        self.refresh_config.last_change = Some(Instant::now());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;

    pub(crate) const SAMPLE: &str = r#"{
        "resources": [
            {"kind": "deployment", "namespace": "emojivoto", "name": "web", "successRate": 0.97},
            {"kind": "deployment", "namespace": "emojivoto", "name": "emoji", "successRate": 1.0},
            {"kind": "deployment", "namespace": "emojivoto", "name": "voting", "successRate": 0.8},
            {"kind": "deployment", "name": "vote-bot", "successRate": 1.0}
        ],
        "unmeshed": [{"name": "10.0.0.7"}],
        "edges": [
            {"src": "deployment/vote-bot", "dst": "emojivoto/deployment/web"},
            {"src": "10.0.0.7", "dst": "emojivoto/deployment/web"},
            {"src": "emojivoto/deployment/web", "dst": "emojivoto/deployment/emoji"},
            {"src": "emojivoto/deployment/web", "dst": "emojivoto/deployment/voting"}
        ]
    }"#;

    pub(crate) fn sample_app() -> AppState {
        AppState::new(Snapshot::from_json(SAMPLE).unwrap())
    }

    #[test]
    fn test_new_focuses_first_resource() {
        let app = sample_app();
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/web"));
        assert!(app.running);
        assert!(app.current_view().is_some());
    }

    #[test]
    fn test_empty_snapshot_has_no_view() {
        let app = AppState::new(Snapshot::default());
        assert_eq!(app.focus, None);
        assert!(app.current_view().is_none());
    }

    #[test]
    fn test_unknown_focus_has_no_view() {
        let mut app = sample_app();
        app.focus = Some("nowhere/deployment/ghost".to_string());
        assert!(app.current_view().is_none());
    }

    #[test]
    fn test_link_navigation_clamps() {
        let mut app = sample_app();
        // vote-bot has no namespace; links are voting, emoji (sorted by success rate)
        app.select_next_link();
        assert_eq!(app.selected_link, Some(0));
        assert_eq!(app.selected_target().as_deref(), Some("emojivoto/deployment/voting"));

        app.select_next_link();
        assert_eq!(app.selected_link, Some(1));
        app.select_next_link();
        assert_eq!(app.selected_link, Some(1));

        app.select_previous_link();
        assert_eq!(app.selected_link, Some(0));
        app.select_previous_link();
        assert_eq!(app.selected_link, Some(0));

        app.selected_link = None;
        app.select_previous_link();
        assert_eq!(app.selected_link, Some(1));
        assert_eq!(app.selected_target().as_deref(), Some("emojivoto/deployment/emoji"));
    }

    #[test]
    fn test_follow_link_and_go_back() {
        let mut app = sample_app();
        app.select_next_link();
        app.follow_selected_link();
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/voting"));
        assert_eq!(app.selected_link, None);

        app.go_back();
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/web"));

        // Nothing left in history
        app.go_back();
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/web"));
    }

    #[test]
    fn test_follow_without_selection_is_noop() {
        let mut app = sample_app();
        app.follow_selected_link();
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/web"));
    }

    #[test]
    fn test_focus_cycles_through_resources() {
        let mut app = sample_app();
        app.focus_next_resource();
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/emoji"));

        app.focus_previous_resource();
        app.focus_previous_resource();
        assert_eq!(app.focus.as_deref(), Some("deployment/vote-bot"));

        app.focus_next_resource();
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/web"));
    }

    #[test]
    fn test_refresh_rate_bounds() {
        let mut app = sample_app();
        for _ in 0..1000 {
            app.increase_refresh_rate();
        }
        assert_eq!(app.refresh_config.refresh_ms, config::MIN_REFRESH_MS);

        for _ in 0..1000 {
            app.decrease_refresh_rate();
        }
        assert_eq!(app.refresh_config.refresh_ms, config::MAX_REFRESH_MS);
        assert!(app.refresh_config.last_change.is_some());
    }

    #[test]
    fn test_from_path_missing_file_records_error() {
        let path = std::env::temp_dir().join("octoview-app-missing.json");
        let _ = fs::remove_file(&path);
        let app = AppState::from_path(path, None, RefreshConfig::new());

        assert!(app.load_error.is_some());
        assert!(app.snapshot.resources.is_empty());
        assert!(app.current_view().is_none());
    }

    #[test]
    fn test_reload_keeps_snapshot_on_error() {
        let path = std::env::temp_dir().join(format!("octoview-app-reload-{}.json", std::process::id()));
        fs::write(&path, SAMPLE).unwrap();

        let mut app = AppState::from_path(
            path.clone(),
            Some("emojivoto/deployment/emoji".to_string()),
            RefreshConfig::new(),
        );
        assert!(app.load_error.is_none());
        assert_eq!(app.focus.as_deref(), Some("emojivoto/deployment/emoji"));

        fs::write(&path, "{ broken").unwrap();
        app.reload();
        let _ = fs::remove_file(&path);

        assert!(app.load_error.is_some());
        assert_eq!(app.snapshot.resources.len(), 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Link selection always stays within the current view's links
        #[test]
        fn prop_link_selection_in_bounds(moves in prop::collection::vec(any::<bool>(), 0..20)) {
            let mut app = sample_app();
            let count = app.current_view().unwrap().links().len();
            for down in moves {
                if down {
                    app.select_next_link();
                } else {
                    app.select_previous_link();
                }
                let idx = app.selected_link.unwrap();
                prop_assert!(idx < count);
            }
        }
    }
}
