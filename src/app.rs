use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use crate::craft::{HostError, HttpDocumentHost};
use crate::features::sync::{PhaseOutcome, SyncEngine, SyncReport};
use crate::features::todos::{scan, ScanOutcome, Selection};
use crate::finishem::FinishEmClient;
use crate::shared::{Config, ModernTheme, ThemeMode};
use tokio::sync::mpsc;

/// Message from a background scan or submit task back to the UI loop
#[derive(Debug)]
pub enum BridgeMessage {
    ScanComplete(Result<ScanOutcome, HostError>),
    SubmitComplete(SyncReport),
}

/// Status message for user feedback
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub timestamp: std::time::Instant,
    pub message_type: StatusType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusType {
    Info,
    Success,
    Warning,
    Error,
}

/// Loading states for the two background operations
#[derive(Debug)]
pub struct LoadingStates {
    pub fetching: bool,
    pub sending: bool,
    pub spinner_frame: usize,
    pub last_spinner_update: std::time::Instant,
}

impl LoadingStates {
    pub fn new() -> Self {
        Self {
            fetching: false,
            sending: false,
            spinner_frame: 0,
            last_spinner_update: std::time::Instant::now(),
        }
    }

    pub fn get_spinner_char(&mut self) -> char {
        const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

        // Update spinner every 100ms
        if self.last_spinner_update.elapsed().as_millis() > 100 {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
            self.last_spinner_update = std::time::Instant::now();
        }

        SPINNER_CHARS[self.spinner_frame]
    }

    pub fn is_loading(&self) -> bool {
        self.fetching || self.sending
    }
}

/// Main application state
pub struct App {
    /// Flag to indicate if the app should quit
    pub should_quit: bool,
    /// Application configuration
    pub config: Config,
    /// Application theme
    pub theme: ModernTheme,
    /// Host document client, shared with background scan tasks
    host: Arc<HttpDocumentHost>,
    /// Sync engine over the host and the task store
    engine: SyncEngine<HttpDocumentHost, FinishEmClient>,
    /// Current candidate set and its user-adjustable flags
    pub selection: Selection,
    /// Cursor position in the candidate list
    pub cursor: usize,
    /// Whether the last cycle fully succeeded (shows the "Done" state)
    pub has_submitted: bool,
    /// Whether the last scan found nothing (informational, not an error)
    pub last_scan_empty: bool,
    /// Report of the last sync cycle, drives the debug pane
    pub last_report: Option<SyncReport>,
    /// Current status message
    pub status_message: Option<StatusMessage>,
    /// Loading states for scan and submit
    pub loading: LoadingStates,
    /// Background task channels
    tx: mpsc::UnboundedSender<BridgeMessage>,
    rx: mpsc::UnboundedReceiver<BridgeMessage>,
    /// Flag to indicate if UI needs redraw
    needs_redraw: bool,
}

impl App {
    /// Create a new App instance and kick off the initial scan
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let theme = match config.theme_mode {
            ThemeMode::Dark => ModernTheme::dark(),
            ThemeMode::Light => ModernTheme::light(),
        };

        let host = Arc::new(HttpDocumentHost::new(&config.host_url));
        let tasks = Arc::new(FinishEmClient::new(&config.finishem_url));
        let engine = SyncEngine::new(Arc::clone(&host), tasks);

        let (tx, rx) = mpsc::unbounded_channel::<BridgeMessage>();

        let mut app = Self {
            should_quit: false,
            config,
            theme,
            host,
            engine,
            selection: Selection::default(),
            cursor: 0,
            has_submitted: false,
            last_scan_empty: false,
            last_report: None,
            status_message: None,
            loading: LoadingStates::new(),
            tx,
            rx,
            needs_redraw: true,
        };

        app.trigger_scan();
        Ok(app)
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        if !IsTty::is_tty(&io::stdout()) {
            eprintln!("This application requires a TTY terminal to run.");
            return Ok(());
        }

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        while !self.should_quit {
            // Update spinner animation if loading
            if self.loading.is_loading() {
                self.loading.get_spinner_char(); // This updates internal state
                self.needs_redraw = true;
            }

            // Process background task results
            while let Ok(message) = self.rx.try_recv() {
                self.handle_message(message);
                self.needs_redraw = true;
            }

            // Update status message (auto-clear after 3 seconds)
            self.update_status_message(std::time::Duration::from_secs(3));

            // Only redraw if something changed
            if self.needs_redraw {
                terminal.draw(|f| crate::ui::draw(f, self))?;
                self.needs_redraw = false;
            }

            if event::poll(std::time::Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key.code, key.modifiers);
                    self.needs_redraw = true; // Redraw after user input
                }
            }
        }

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Apply a background task result to the UI state.
    ///
    /// The engine never touches the selection or the flow flags; every
    /// transition happens here, driven by the report.
    fn handle_message(&mut self, message: BridgeMessage) {
        match message {
            BridgeMessage::ScanComplete(result) => {
                self.loading.fetching = false;
                match result {
                    Ok(ScanOutcome::Found(items)) => {
                        let count = items.len();
                        self.selection = Selection::from_candidates(items);
                        self.cursor = 0;
                        self.last_scan_empty = false;
                        self.set_status(format!("{count} todos found"), StatusType::Info);
                    }
                    Ok(ScanOutcome::Empty) => {
                        self.selection = Selection::default();
                        self.cursor = 0;
                        self.last_scan_empty = true;
                        self.set_status("No todos found in this document", StatusType::Info);
                    }
                    Err(e) => {
                        self.selection = Selection::default();
                        self.cursor = 0;
                        self.last_scan_empty = false;
                        self.set_status(
                            format!("Could not read the document: {e}"),
                            StatusType::Error,
                        );
                    }
                }
            }
            BridgeMessage::SubmitComplete(report) => {
                self.loading.sending = false;
                if report.all_succeeded() {
                    let count = report.len();
                    self.has_submitted = true;
                    self.selection.clear();
                    self.cursor = 0;
                    self.set_status(format!("{count} todos sent"), StatusType::Success);
                } else if report.remote_phase_failed() {
                    // Coarse gate: nothing was checked off, so the flow
                    // reverts to not-yet-submitted for a manual retry
                    self.has_submitted = false;
                    self.set_status("Failed to send todos to Finish Em", StatusType::Error);
                } else {
                    let failed = report.local_failures();
                    let sent = report.len();
                    self.has_submitted = false;
                    self.set_status(
                        format!("{sent} todos sent, {failed} could not be checked off"),
                        StatusType::Warning,
                    );
                }
                self.last_report = Some(report);
            }
        }
    }

    /// Handle keyboard input
    fn handle_key_event(&mut self, key: KeyCode, _modifiers: KeyModifiers) {
        // While a sync cycle is in flight only quitting is allowed; toggles,
        // refresh, and submit are ignored until the report comes back
        if self.loading.sending {
            if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
                self.should_quit = true;
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor_up(),
            KeyCode::Char('r') => self.trigger_scan(),
            KeyCode::Char(' ') => self.toggle_at_cursor(),
            KeyCode::Char('s') | KeyCode::Enter => self.trigger_submit(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('d') => self.toggle_debug_pane(),
            _ => {}
        }
    }

    /// Re-scan the document, fully replacing the candidate set
    fn trigger_scan(&mut self) {
        if self.loading.fetching {
            return;
        }
        self.has_submitted = false;
        self.loading.fetching = true;

        let host = Arc::clone(&self.host);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = scan(host.as_ref()).await;
            let _ = tx.send(BridgeMessage::ScanComplete(result));
        });
    }

    /// Submit the confirmed selection; the snapshot moves into the engine
    fn trigger_submit(&mut self) {
        if self.loading.fetching || self.has_submitted {
            return;
        }
        if !self.selection.has_any_selected() {
            self.set_status("Nothing selected to send", StatusType::Warning);
            return;
        }
        self.loading.sending = true;

        let items = self.selection.selected_subset();
        let engine = self.engine.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let report = engine.submit(items).await;
            let _ = tx.send(BridgeMessage::SubmitComplete(report));
        });
    }

    /// Flip the selection flag of the item under the cursor
    fn toggle_at_cursor(&mut self) {
        if self.has_submitted {
            return;
        }
        if let Some(item) = self.selection.items().get(self.cursor) {
            let id = item.id.clone();
            self.selection.toggle(&id);
        }
    }

    fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.selection.len() {
            self.cursor += 1;
        }
    }

    fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Toggle between dark and light theme
    fn toggle_theme(&mut self) {
        self.config.toggle_theme();
        self.theme = match self.config.theme_mode {
            ThemeMode::Dark => ModernTheme::dark(),
            ThemeMode::Light => ModernTheme::light(),
        };
        let _ = self.config.save(); // Save config after change
        self.set_status(
            format!("Theme: {}", self.config.theme_display()),
            StatusType::Info,
        );
    }

    /// Toggle the debug pane
    fn toggle_debug_pane(&mut self) {
        self.config.toggle_debug_pane();
        let _ = self.config.save(); // Save config after change
    }

    /// Per-item outcome lines of the last cycle, for the debug pane
    pub fn debug_lines(&self) -> Vec<String> {
        let report = match &self.last_report {
            Some(report) => report,
            None => return vec!["No sync cycle run yet".to_string()],
        };

        fn phase(outcome: &PhaseOutcome) -> String {
            match outcome {
                PhaseOutcome::Pending => "pending".to_string(),
                PhaseOutcome::Succeeded => "ok".to_string(),
                PhaseOutcome::Failed(e) => format!("failed ({e})"),
            }
        }

        report
            .items
            .iter()
            .map(|item| {
                format!(
                    "{}: remote {}, local {}",
                    item.text,
                    phase(&item.remote),
                    phase(&item.local)
                )
            })
            .collect()
    }

    /// Show a status message
    fn set_status(&mut self, text: impl Into<String>, message_type: StatusType) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            timestamp: std::time::Instant::now(),
            message_type,
        });
    }

    /// Clear the status message once it has been on screen long enough
    fn update_status_message(&mut self, max_age: std::time::Duration) {
        if let Some(message) = &self.status_message {
            if message.timestamp.elapsed() > max_age {
                self.status_message = None;
                self.needs_redraw = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::todos::CandidateItem;

    fn candidate(id: &str, text: &str) -> CandidateItem {
        CandidateItem {
            id: id.to_string(),
            text: text.to_string(),
            selected: true,
        }
    }

    /// Bare App over default config; no scan kicked off, no I/O performed
    fn idle_app() -> App {
        let config = Config::default();
        let host = Arc::new(HttpDocumentHost::new(&config.host_url));
        let tasks = Arc::new(FinishEmClient::new(&config.finishem_url));
        let engine = SyncEngine::new(Arc::clone(&host), tasks);
        let (tx, rx) = mpsc::unbounded_channel::<BridgeMessage>();

        App {
            should_quit: false,
            config,
            theme: ModernTheme::dark(),
            host,
            engine,
            selection: Selection::from_candidates(vec![
                candidate("a", "Buy milk"),
                candidate("b", "Pay rent"),
            ]),
            cursor: 0,
            has_submitted: false,
            last_scan_empty: false,
            last_report: None,
            status_message: None,
            loading: LoadingStates::new(),
            tx,
            rx,
            needs_redraw: false,
        }
    }

    #[test]
    fn test_toggle_key_flips_item_under_cursor() {
        let mut app = idle_app();
        assert!(app.selection.items()[0].selected);

        app.handle_key_event(KeyCode::Char(' '), KeyModifiers::NONE);

        assert!(!app.selection.items()[0].selected);
        assert!(app.selection.items()[1].selected);
    }

    #[test]
    fn test_toggle_is_ignored_while_cycle_in_flight() {
        let mut app = idle_app();
        app.loading.sending = true;
        let before = app.selection.clone();

        app.handle_key_event(KeyCode::Char(' '), KeyModifiers::NONE);

        assert_eq!(app.selection, before);
    }

    #[test]
    fn test_refresh_and_submit_are_ignored_while_cycle_in_flight() {
        let mut app = idle_app();
        app.loading.sending = true;

        app.handle_key_event(KeyCode::Char('r'), KeyModifiers::NONE);
        assert!(!app.loading.fetching);
        assert!(app.loading.sending);

        app.handle_key_event(KeyCode::Char('s'), KeyModifiers::NONE);
        app.handle_key_event(KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.status_message.is_none());
        assert!(!app.has_submitted);
    }

    #[test]
    fn test_quit_still_works_while_cycle_in_flight() {
        let mut app = idle_app();
        app.loading.sending = true;

        app.handle_key_event(KeyCode::Char('q'), KeyModifiers::NONE);

        assert!(app.should_quit);
    }

    #[test]
    fn test_toggle_is_ignored_after_submission() {
        let mut app = idle_app();
        app.has_submitted = true;
        let before = app.selection.clone();

        app.handle_key_event(KeyCode::Char(' '), KeyModifiers::NONE);

        assert_eq!(app.selection, before);
    }
}
