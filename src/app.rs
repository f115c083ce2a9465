use chrono::{DateTime, Local};

// UI constants
pub const SPINNER_FRAME_COUNT: usize = 10;
pub const NARROW_WIDTH_THRESHOLD: u16 = 60;
pub const PAGE_SIZE: usize = 10;

/// Which session to show. Values are passed to the API verbatim, so
/// `current` and `last` work as well as numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyingQuery {
    pub season: String,
    pub round: String,
}

impl QualifyingQuery {
    pub fn new(season: impl Into<String>, round: impl Into<String>) -> Self {
        Self {
            season: season.into(),
            round: round.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)] // Fields are part of the Ergast API contract
pub struct Driver {
    #[serde(default)]
    pub permanent_number: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    pub given_name: String,
    pub family_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Constructor {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct QualifyingResult {
    #[serde(default)]
    pub number: String,
    pub position: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
    #[serde(rename = "Q1", default)]
    pub q1: String,
    #[serde(rename = "Q2", default)]
    pub q2: Option<String>,
    #[serde(rename = "Q3", default)]
    pub q3: Option<String>,
}

/// Parsed payload of one qualifying response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyingSession {
    pub race_name: Option<String>,
    pub results: Vec<QualifyingResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Loading,
    Error,
    Results,
}

/// What `ScreenState::settle` did with a fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    Applied,
    Stale,
    Unmounted,
}

/// Fetch-driven state of the screen.
///
/// Only the transition methods mutate it. Every fetch is tagged with a
/// generation from `begin_fetch`; `settle` ignores anything but the latest
/// generation, and ignores everything once the screen is unmounted.
#[derive(Debug, Clone)]
pub struct ScreenState {
    pub is_loading: bool,
    pub error: bool,
    pub refreshing: bool,
    pub results: Vec<QualifyingResult>,
    pub race_name: Option<String>,
    generation: u64,
    mounted: bool,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenState {
    pub fn new() -> Self {
        Self {
            is_loading: true,
            error: false,
            refreshing: false,
            results: Vec::new(),
            race_name: None,
            generation: 0,
            mounted: true,
        }
    }

    /// Latest generation handed out.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn begin_refresh(&mut self) -> u64 {
        if self.mounted {
            if self.view() == ViewMode::Error {
                self.is_loading = true;
            }
            self.refreshing = true;
        }
        self.begin_fetch()
    }

    pub fn settle(
        &mut self,
        generation: u64,
        result: Result<QualifyingSession, String>,
    ) -> Settle {
        if !self.mounted {
            return Settle::Unmounted;
        }
        if generation != self.generation {
            return Settle::Stale;
        }
        self.is_loading = false;
        self.refreshing = false;
        match result {
            Ok(session) => {
                self.error = false;
                self.results = session.results;
                self.race_name = session.race_name;
            }
            Err(_) => self.error = true,
        }
        Settle::Applied
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn view(&self) -> ViewMode {
        if self.is_loading {
            ViewMode::Loading
        } else if self.error && self.results.is_empty() {
            ViewMode::Error
        } else {
            ViewMode::Results
        }
    }
}

/// Immutable configuration set at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub query: QualifyingQuery,
    pub label: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

pub struct AppState {
    pub config: AppConfig,
    pub screen: ScreenState,

    // List navigation
    pub cursor: usize,

    // Transient UI
    pub last_updated: Option<DateTime<Local>>,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            screen: ScreenState::new(),
            cursor: 0,
            last_updated: None,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Resets the screen and returns the generation of the first fetch.
    pub fn initialize(&mut self) -> u64 {
        self.screen = ScreenState::new();
        self.cursor = 0;
        self.last_updated = None;
        self.screen.begin_fetch()
    }

    pub fn refresh(&mut self) -> u64 {
        self.screen.begin_refresh()
    }

    pub fn apply_fetch(
        &mut self,
        generation: u64,
        result: Result<QualifyingSession, String>,
    ) -> Settle {
        let succeeded = result.is_ok();
        let outcome = self.screen.settle(generation, result);
        if outcome == Settle::Applied {
            if succeeded {
                self.last_updated = Some(Local::now());
            }
            self.clamp_cursor();
        }
        outcome
    }

    pub fn view(&self) -> ViewMode {
        self.screen.view()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        self.screen.unmount();
    }

    fn clamp_cursor(&mut self) {
        let len = self.screen.results.len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.screen.results.len() {
            self.cursor += 1;
        }
    }

    pub fn page_up(&mut self, amount: usize) {
        self.cursor = self.cursor.saturating_sub(amount);
    }

    pub fn page_down(&mut self, amount: usize) {
        self.cursor = (self.cursor + amount).min(self.screen.results.len().saturating_sub(1));
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self) {
        self.cursor = self.screen.results.len().saturating_sub(1);
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAME_COUNT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_result(position: u32, family_name: &str) -> QualifyingResult {
        QualifyingResult {
            number: position.to_string(),
            position: position.to_string(),
            driver: Driver {
                permanent_number: Some(position.to_string()),
                code: None,
                given_name: "Test".to_string(),
                family_name: family_name.to_string(),
            },
            constructor: Constructor {
                name: "Team".to_string(),
            },
            q1: "1:30.000".to_string(),
            q2: None,
            q3: None,
        }
    }

    fn session(n: u32) -> QualifyingSession {
        QualifyingSession {
            race_name: Some("Spanish Grand Prix".to_string()),
            results: (1..=n).map(|i| make_result(i, &format!("Driver{i}"))).collect(),
        }
    }

    fn test_config() -> AppConfig {
        AppConfig {
            query: QualifyingQuery::new("2021", "5"),
            label: "Qualifying".to_string(),
            base_url: "http://localhost".to_string(),
            timeout_secs: 10,
        }
    }

    // --- ScreenState transitions ---

    #[test]
    fn initial_state_is_loading() {
        let screen = ScreenState::new();
        assert!(screen.is_loading);
        assert!(!screen.error);
        assert!(!screen.refreshing);
        assert!(screen.results.is_empty());
        assert_eq!(screen.view(), ViewMode::Loading);
    }

    #[test]
    fn success_stores_rows_in_source_order() {
        let mut screen = ScreenState::new();
        let gen = screen.begin_fetch();
        assert_eq!(screen.settle(gen, Ok(session(3))), Settle::Applied);
        assert!(!screen.is_loading);
        assert!(!screen.error);
        assert!(!screen.refreshing);
        let names: Vec<_> = screen
            .results
            .iter()
            .map(|r| r.driver.family_name.as_str())
            .collect();
        assert_eq!(names, vec!["Driver1", "Driver2", "Driver3"]);
        assert_eq!(screen.race_name.as_deref(), Some("Spanish Grand Prix"));
        assert_eq!(screen.view(), ViewMode::Results);
    }

    #[test]
    fn failure_on_first_load_shows_error() {
        let mut screen = ScreenState::new();
        let gen = screen.begin_fetch();
        screen.settle(gen, Err("connection refused".to_string()));
        assert!(!screen.is_loading);
        assert!(screen.error);
        assert!(!screen.refreshing);
        assert!(screen.results.is_empty());
        assert_eq!(screen.view(), ViewMode::Error);
    }

    #[test]
    fn failure_keeps_previous_results() {
        let mut screen = ScreenState::new();
        let gen = screen.begin_fetch();
        screen.settle(gen, Ok(session(2)));
        let gen = screen.begin_refresh();
        screen.settle(gen, Err("timeout".to_string()));
        assert!(screen.error);
        assert!(!screen.refreshing);
        assert_eq!(screen.results.len(), 2);
        assert_eq!(screen.view(), ViewMode::Results);
    }

    #[test]
    fn refresh_flag_set_until_settled() {
        let mut screen = ScreenState::new();
        let gen = screen.begin_fetch();
        screen.settle(gen, Ok(session(1)));

        let gen = screen.begin_refresh();
        assert!(screen.refreshing);
        assert_eq!(screen.view(), ViewMode::Results);
        screen.settle(gen, Ok(session(1)));
        assert!(!screen.refreshing);

        let gen = screen.begin_refresh();
        assert!(screen.refreshing);
        screen.settle(gen, Err("boom".to_string()));
        assert!(!screen.refreshing);
    }

    #[test]
    fn refresh_from_error_returns_to_loading() {
        let mut screen = ScreenState::new();
        let gen = screen.begin_fetch();
        screen.settle(gen, Err("offline".to_string()));
        assert_eq!(screen.view(), ViewMode::Error);

        let gen = screen.begin_refresh();
        assert_eq!(screen.view(), ViewMode::Loading);
        screen.settle(gen, Ok(session(1)));
        assert_eq!(screen.view(), ViewMode::Results);
        assert!(!screen.error);
    }

    #[test]
    fn identical_successes_are_idempotent() {
        let mut screen = ScreenState::new();
        let gen = screen.begin_fetch();
        screen.settle(gen, Ok(session(4)));
        let first = (
            screen.is_loading,
            screen.error,
            screen.refreshing,
            screen.results.clone(),
        );
        let gen = screen.begin_refresh();
        screen.settle(gen, Ok(session(4)));
        let second = (
            screen.is_loading,
            screen.error,
            screen.refreshing,
            screen.results.clone(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut screen = ScreenState::new();
        let slow = screen.begin_fetch();
        let fast = screen.begin_refresh();
        assert_eq!(screen.settle(fast, Ok(session(3))), Settle::Applied);
        assert_eq!(screen.settle(slow, Ok(session(1))), Settle::Stale);
        assert_eq!(screen.results.len(), 3);
    }

    #[test]
    fn stale_failure_does_not_clear_refreshing() {
        let mut screen = ScreenState::new();
        let first = screen.begin_fetch();
        screen.settle(first, Ok(session(1)));
        let old = screen.begin_refresh();
        let latest = screen.begin_refresh();
        assert_eq!(screen.settle(old, Err("late".to_string())), Settle::Stale);
        assert!(screen.refreshing);
        assert!(!screen.error);
        screen.settle(latest, Ok(session(1)));
        assert!(!screen.refreshing);
    }

    #[test]
    fn settle_after_unmount_is_ignored() {
        let mut screen = ScreenState::new();
        let gen = screen.begin_fetch();
        screen.unmount();
        assert_eq!(screen.settle(gen, Ok(session(2))), Settle::Unmounted);
        assert!(screen.is_loading);
        assert!(screen.results.is_empty());
    }

    #[test]
    fn generations_increase_monotonically() {
        let mut screen = ScreenState::new();
        let a = screen.begin_fetch();
        let b = screen.begin_refresh();
        let c = screen.begin_refresh();
        assert!(a < b && b < c);
        assert_eq!(screen.generation(), c);
    }

    // --- AppState ---

    #[test]
    fn initialize_issues_first_generation() {
        let mut state = AppState::new(test_config());
        let gen = state.initialize();
        assert_eq!(gen, 1);
        assert_eq!(state.view(), ViewMode::Loading);
        assert!(state.last_updated.is_none());
    }

    #[test]
    fn apply_fetch_records_update_time() {
        let mut state = AppState::new(test_config());
        let gen = state.initialize();
        state.apply_fetch(gen, Ok(session(2)));
        assert!(state.last_updated.is_some());
    }

    #[test]
    fn failed_fetch_leaves_update_time_unset() {
        let mut state = AppState::new(test_config());
        let gen = state.initialize();
        state.apply_fetch(gen, Err("nope".to_string()));
        assert!(state.last_updated.is_none());
    }

    #[test]
    fn cursor_clamped_when_results_shrink() {
        let mut state = AppState::new(test_config());
        let gen = state.initialize();
        state.apply_fetch(gen, Ok(session(10)));
        state.cursor_to_bottom();
        assert_eq!(state.cursor, 9);
        let gen = state.refresh();
        state.apply_fetch(gen, Ok(session(3)));
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn cursor_movement_bounds() {
        let mut state = AppState::new(test_config());
        let gen = state.initialize();
        state.apply_fetch(gen, Ok(session(20)));

        state.move_cursor_up();
        assert_eq!(state.cursor, 0);
        state.move_cursor_down();
        assert_eq!(state.cursor, 1);
        state.page_down(PAGE_SIZE);
        assert_eq!(state.cursor, 11);
        state.page_down(PAGE_SIZE);
        assert_eq!(state.cursor, 19);
        state.move_cursor_down();
        assert_eq!(state.cursor, 19);
        state.page_up(PAGE_SIZE);
        assert_eq!(state.cursor, 9);
        state.cursor_to_top();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn cursor_on_empty_results_stays_zero() {
        let mut state = AppState::new(test_config());
        state.move_cursor_down();
        state.page_down(PAGE_SIZE);
        state.cursor_to_bottom();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn quit_unmounts_screen() {
        let mut state = AppState::new(test_config());
        let gen = state.initialize();
        state.quit();
        assert!(state.should_quit);
        assert!(!state.screen.is_mounted());
        assert_eq!(state.apply_fetch(gen, Ok(session(1))), Settle::Unmounted);
    }

    #[test]
    fn spinner_wraps() {
        let mut state = AppState::new(test_config());
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner();
        }
        assert_eq!(state.spinner_frame, 0);
    }
}
