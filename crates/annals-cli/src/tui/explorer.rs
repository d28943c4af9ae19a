//! TUI explorer for annals.
//!
//! Provides a full-screen terminal UI with:
//! - Three tabs over the filtered selection: List, Timeline, Quiz
//! - Filter controls: m/M cycle month, y edit year, c clear, r random
//! - Quiz flow: +/- pick count, s start, 1-4 answer, Enter submit, R reset
//! - Export/copy: e then t/c/j writes an artifact, p copies plaintext
//! - q quits
//!
//! All state lives in [`ExplorerView`]; every filter change fully replaces
//! the selection. Rendering is a pure projection of that state.

use crate::output::sanitize_line;
use annals_core::event::{Event, EventStore};
use annals_core::export::{self, ExportFormat};
use annals_core::filter::EventFilter;
use annals_core::quiz::{self, Question, QuizParams, clamp_count};
use annals_core::rng::{RandomSource, ThreadRandom};
use anyhow::Result;
use chrono::Datelike as _;
use crossterm::event::{self as term_event, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// How long transient status messages stay visible.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Default requested quiz length before clamping.
const DEFAULT_QUIZ_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// The three content tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ViewTab {
    #[default]
    List,
    Timeline,
    Quiz,
}

impl ViewTab {
    const fn label(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Timeline => "Timeline",
            Self::Quiz => "Quiz",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::List => Self::Timeline,
            Self::Timeline => Self::Quiz,
            Self::Quiz => Self::List,
        }
    }
}

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum InputMode {
    #[default]
    Normal,
    /// Typing a year filter.
    YearEdit,
    /// Export format menu is open.
    ExportMenu,
}

/// A quiz in progress. Dropped (questions discarded) on reset, filter
/// change, or tab switch.
#[derive(Debug, Clone)]
struct QuizRun {
    questions: Vec<Question>,
    /// Per-question selected option index; `None` = unanswered.
    selected: Vec<Option<usize>>,
    /// Question the cursor is on.
    cursor: usize,
    /// Final score; `Some` once submitted. Selection is frozen after that.
    score: Option<usize>,
}

impl QuizRun {
    fn new(questions: Vec<Question>) -> Self {
        let selected = vec![None; questions.len()];
        Self {
            questions,
            selected,
            cursor: 0,
            score: None,
        }
    }

    fn select(&mut self, option: usize) {
        if self.score.is_some() {
            return;
        }
        let in_range = self
            .questions
            .get(self.cursor)
            .is_some_and(|q| option < q.options.len());
        if in_range {
            self.selected[self.cursor] = Some(option);
        }
    }

    /// Score by comparing selected options' `correct` flags. Only called on
    /// an explicit submit action; never graded per selection.
    fn submit(&mut self) {
        if self.score.is_some() {
            return;
        }
        let score = self
            .questions
            .iter()
            .zip(&self.selected)
            .filter(|(question, picked)| {
                picked
                    .and_then(|idx| question.options.get(idx))
                    .is_some_and(|choice| choice.correct)
            })
            .count();
        self.score = Some(score);
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.questions.len();
        if len == 0 {
            return;
        }
        let cursor = self.cursor as isize + delta;
        self.cursor = cursor.clamp(0, len as isize - 1) as usize;
    }
}

// ---------------------------------------------------------------------------
// Explorer state
// ---------------------------------------------------------------------------

/// Main application state for the explorer.
pub struct ExplorerView {
    /// Immutable store loaded once at startup.
    store: EventStore,
    /// Active month/year criteria.
    filter: EventFilter,
    /// Filtered, canonically ordered selection — fully re-derived on every
    /// filter change.
    selection: Vec<Event>,
    /// Active content tab.
    tab: ViewTab,
    /// Current input mode.
    input_mode: InputMode,
    /// Buffer for the year being typed.
    year_buf: String,
    /// Vertical scroll offset for list/timeline content.
    scroll: u16,
    /// Requested quiz length (clamped against the pool on start).
    quiz_count: usize,
    /// Quiz in progress, if any. `None` means the setup screen.
    quiz: Option<QuizRun>,
    /// Transient status message.
    status: Option<(String, Instant)>,
    /// Whether to quit.
    should_quit: bool,
}

impl ExplorerView {
    pub fn new(store: EventStore, filter: EventFilter) -> Self {
        let selection = filter.apply(store.events());
        let quiz_count = clamp_count(DEFAULT_QUIZ_COUNT, selection.len());
        Self {
            store,
            filter,
            selection,
            tab: ViewTab::default(),
            input_mode: InputMode::default(),
            year_buf: String::new(),
            scroll: 0,
            quiz_count,
            quiz: None,
            status: None,
            should_quit: false,
        }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some((msg.into(), Instant::now()));
    }

    /// Re-derive the selection after a filter change. Replaces the whole
    /// selection, resets scroll, and discards any quiz in progress.
    fn apply_filter(&mut self) {
        self.selection = self.filter.apply(self.store.events());
        self.scroll = 0;
        self.quiz = None;
        self.quiz_count = clamp_count(self.quiz_count, self.selection.len());
    }

    /// Cycle the month filter: any → Jan → ... → Dec → any.
    fn cycle_month(&mut self, forward: bool) {
        self.filter.month = if forward {
            match self.filter.month {
                None => Some(1),
                Some(12) => None,
                Some(m) => Some(m + 1),
            }
        } else {
            match self.filter.month {
                None => Some(12),
                Some(1) => None,
                Some(m) => Some(m - 1),
            }
        };
        self.apply_filter();
    }

    fn clear_filter(&mut self) {
        self.filter = EventFilter::default();
        self.apply_filter();
    }

    /// Random month 1-12 plus a year drawn from the dataset's years.
    fn random_filter(&mut self) {
        let mut rng = ThreadRandom;
        let years = self.store.years();
        self.filter.month = Some(rng.next_index(12) as u32 + 1);
        self.filter.year = years.get(rng.next_index(years.len())).copied();
        self.apply_filter();
    }

    fn switch_tab(&mut self, tab: ViewTab) {
        if self.tab != tab {
            // Questions are ephemeral: leaving the quiz view discards them.
            self.quiz = None;
        }
        self.tab = tab;
        self.scroll = 0;
    }

    fn start_quiz(&mut self) {
        if self.selection.is_empty() {
            self.set_status("No events in the current selection — adjust the filter first");
            return;
        }
        let params = QuizParams {
            count: clamp_count(self.quiz_count, self.selection.len()),
            ..QuizParams::default()
        };
        let questions = quiz::generate(&self.selection, &params, &mut ThreadRandom);
        self.quiz = Some(QuizRun::new(questions));
    }

    fn export(&mut self, format: ExportFormat) {
        let filename = export::export_filename(&self.filter, format);
        match export::render(&self.selection, format) {
            Ok(content) => match fs::write(&filename, content) {
                Ok(()) => self.set_status(format!("Wrote {filename}")),
                Err(err) => self.set_status(format!("Export failed: {err}")),
            },
            Err(err) => self.set_status(format!("Export failed: {err}")),
        }
    }

    fn copy_plaintext(&mut self) {
        let text = export::to_plaintext(&self.selection);
        let copied = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text));
        match copied {
            Ok(()) => self.set_status("Copied!"),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable in TUI");
                self.set_status("Clipboard unavailable — use `annals copy` in a terminal");
            }
        }
    }

    fn max_scroll(&self) -> u16 {
        let lines = match self.tab {
            ViewTab::List => self.selection.len().saturating_mul(3),
            ViewTab::Timeline => self.selection.len().saturating_mul(4),
            ViewTab::Quiz => 0,
        };
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = i64::from(self.scroll) + i64::from(delta);
        let clamped = next.clamp(0, i64::from(self.max_scroll()));
        self.scroll = u16::try_from(clamped).unwrap_or(0);
    }

    // -----------------------------------------------------------------------
    // Key handling
    // -----------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::YearEdit => self.handle_year_key(key),
            InputMode::ExportMenu => self.handle_export_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        // Digits answer the current question while a quiz is running.
        if let KeyCode::Char(c @ '1'..='4') = key.code {
            if self.tab == ViewTab::Quiz {
                if let Some(run) = self.quiz.as_mut() {
                    run.select(c as usize - '1' as usize);
                    return;
                }
            }
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.switch_tab(self.tab.next()),
            KeyCode::Char('1') => self.switch_tab(ViewTab::List),
            KeyCode::Char('2') => self.switch_tab(ViewTab::Timeline),
            KeyCode::Char('3') => self.switch_tab(ViewTab::Quiz),
            KeyCode::Char('m') => self.cycle_month(true),
            KeyCode::Char('M') => self.cycle_month(false),
            KeyCode::Char('y') => {
                self.year_buf = self.filter.year.map(|y| y.to_string()).unwrap_or_default();
                self.input_mode = InputMode::YearEdit;
            }
            KeyCode::Char('c') => self.clear_filter(),
            KeyCode::Char('r') => self.random_filter(),
            KeyCode::Char('e') => self.input_mode = InputMode::ExportMenu,
            KeyCode::Char('p') => self.copy_plaintext(),
            KeyCode::Char('j') | KeyCode::Down => match (self.tab, self.quiz.as_mut()) {
                (ViewTab::Quiz, Some(run)) => run.move_cursor(1),
                _ => self.scroll_by(1),
            },
            KeyCode::Char('k') | KeyCode::Up => match (self.tab, self.quiz.as_mut()) {
                (ViewTab::Quiz, Some(run)) => run.move_cursor(-1),
                _ => self.scroll_by(-1),
            },
            KeyCode::Char('+') if self.tab == ViewTab::Quiz && self.quiz.is_none() => {
                self.quiz_count = clamp_count(self.quiz_count + 1, self.selection.len());
            }
            KeyCode::Char('-') if self.tab == ViewTab::Quiz && self.quiz.is_none() => {
                self.quiz_count = clamp_count(self.quiz_count.saturating_sub(1), self.selection.len());
            }
            KeyCode::Char('s') if self.tab == ViewTab::Quiz && self.quiz.is_none() => {
                self.start_quiz();
            }
            KeyCode::Enter if self.tab == ViewTab::Quiz => {
                if let Some(run) = self.quiz.as_mut() {
                    run.submit();
                }
            }
            KeyCode::Char('R') if self.tab == ViewTab::Quiz => {
                // Back to the setup screen; questions are discarded.
                self.quiz = None;
            }
            _ => {}
        }
    }

    fn handle_year_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.year_buf.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                if self.year_buf.is_empty() {
                    self.filter.year = None;
                    self.apply_filter();
                } else if let Ok(year) = self.year_buf.parse::<i32>() {
                    self.filter.year = Some(year);
                    self.apply_filter();
                } else {
                    self.set_status(format!("Not a year: {}", self.year_buf));
                }
                self.year_buf.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.year_buf.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() && self.year_buf.len() < 5 => {
                self.year_buf.push(c);
            }
            KeyCode::Char('-') if self.year_buf.is_empty() => {
                self.year_buf.push('-');
            }
            _ => {}
        }
    }

    fn handle_export_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('t') => {
                self.export(ExportFormat::Plaintext);
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Char('c') => {
                self.export(ExportFormat::Csv);
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Char('j') => {
                self.export(ExportFormat::Json);
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    pub fn render(&self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        frame.render_widget(Paragraph::new(tab_bar(self.tab)), chunks[0]);

        let title = format!(" {} ", self.filter.summary(self.selection.len()));
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));

        let (lines, scroll) = match (self.tab, self.quiz.as_ref()) {
            (ViewTab::List, _) => (list_lines(&self.selection), self.scroll),
            (ViewTab::Timeline, _) => (timeline_lines(&self.selection), self.scroll),
            (ViewTab::Quiz, None) => (
                quiz_setup_lines(self.selection.len(), self.quiz_count),
                0,
            ),
            (ViewTab::Quiz, Some(run)) => {
                let offset = u16::try_from(quiz_cursor_offset(run)).unwrap_or(u16::MAX);
                (quiz_lines(run), offset)
            }
        };
        frame.render_widget(
            Paragraph::new(lines).block(block).scroll((scroll, 0)),
            chunks[1],
        );

        frame.render_widget(Paragraph::new(self.status_line()), chunks[2]);
    }

    /// Status bar: transient message if fresh, otherwise key hints for the
    /// current input mode.
    fn status_line(&self) -> Line<'static> {
        if let Some((ref msg, at)) = self.status {
            if at.elapsed() < STATUS_TTL {
                return Line::from(Span::styled(
                    msg.clone(),
                    Style::default().fg(Color::Cyan),
                ));
            }
        }

        let key_style = Style::default().fg(Color::Cyan);
        let dim_style = Style::default().fg(Color::DarkGray);
        let hint = |spans: &mut Vec<Span<'static>>, key: &'static str, what: &'static str| {
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(what, dim_style));
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        match self.input_mode {
            InputMode::YearEdit => {
                spans.push(Span::styled(
                    format!("year: {}█  ", self.year_buf),
                    Style::default().fg(Color::White),
                ));
                hint(&mut spans, "ENTER", " apply  ");
                hint(&mut spans, "ESC", " cancel");
            }
            InputMode::ExportMenu => {
                hint(&mut spans, "t", " plaintext  ");
                hint(&mut spans, "c", " CSV  ");
                hint(&mut spans, "j", " JSON  ");
                hint(&mut spans, "ESC", " cancel");
            }
            InputMode::Normal => {
                if self.tab == ViewTab::Quiz {
                    if self.quiz.is_some() {
                        hint(&mut spans, "1-4", " answer  ");
                        hint(&mut spans, "j/k", " question  ");
                        hint(&mut spans, "ENTER", " submit  ");
                        hint(&mut spans, "R", " reset  ");
                    } else {
                        hint(&mut spans, "+/-", " count  ");
                        hint(&mut spans, "s", " start  ");
                    }
                }
                hint(&mut spans, "TAB", " view  ");
                hint(&mut spans, "m", " month  ");
                hint(&mut spans, "y", " year  ");
                hint(&mut spans, "c", " clear  ");
                hint(&mut spans, "r", " random  ");
                hint(&mut spans, "e", " export  ");
                hint(&mut spans, "p", " copy  ");
                hint(&mut spans, "q", " quit");
            }
        }
        Line::from(spans)
    }
}

// ---------------------------------------------------------------------------
// Pure line builders
// ---------------------------------------------------------------------------

fn tab_bar(active: ViewTab) -> Line<'static> {
    let mut spans = Vec::new();
    for tab in [ViewTab::List, ViewTab::Timeline, ViewTab::Quiz] {
        let style = if tab == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("  {}  ", tab.label()), style));
    }
    Line::from(spans)
}

fn empty_selection_lines() -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        "No events found for this selection.",
        Style::default().fg(Color::DarkGray),
    ))]
}

fn list_lines(events: &[Event]) -> Vec<Line<'static>> {
    if events.is_empty() {
        return empty_selection_lines();
    }
    let mut lines = Vec::with_capacity(events.len() * 3);
    for event in events {
        lines.push(Line::from(vec![
            Span::styled(event.date_label(), Style::default().fg(Color::Cyan)),
            Span::raw(" — "),
            Span::styled(
                sanitize_line(&event.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        if !event.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", sanitize_line(&event.description)),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::default());
    }
    lines
}

fn timeline_lines(events: &[Event]) -> Vec<Line<'static>> {
    if events.is_empty() {
        return empty_selection_lines();
    }
    let mut lines = Vec::with_capacity(events.len() * 4);
    for event in events {
        lines.push(Line::from(Span::styled(
            format!("● {}", event.date_label()),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(vec![
            Span::styled("│   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                sanitize_line(&event.title),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        if !event.description.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("│   ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    sanitize_line(&event.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
        lines.push(Line::from(Span::styled(
            "│",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

fn quiz_setup_lines(pool: usize, count: usize) -> Vec<Line<'static>> {
    if pool == 0 {
        return empty_selection_lines();
    }
    let plural = if pool == 1 { "" } else { "s" };
    vec![
        Line::from(format!("{pool} event{plural} available")),
        Line::default(),
        Line::from(vec![
            Span::raw("Questions: "),
            Span::styled(
                count.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (+/- to adjust)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Press s to start the quiz.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

/// Lines rendered before the cursor's question — used as the scroll offset
/// so the current question stays visible.
fn quiz_cursor_offset(run: &QuizRun) -> usize {
    let mut offset = if run.score.is_some() { 2 } else { 0 };
    for question in run.questions.iter().take(run.cursor) {
        offset += 2 + question.options.len();
    }
    offset
}

fn quiz_lines(run: &QuizRun) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(score) = run.score {
        lines.push(Line::from(Span::styled(
            format!("Score: {score}/{}", run.questions.len()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }

    for (idx, question) in run.questions.iter().enumerate() {
        let marker = if idx == run.cursor { "❯ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{}. {}", idx + 1, sanitize_line(&question.text)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));

        let picked = run.selected.get(idx).copied().flatten();
        for (opt_idx, choice) in question.options.iter().enumerate() {
            let is_picked = picked == Some(opt_idx);
            let radio = if is_picked { "(•)" } else { "( )" };
            let style = match run.score {
                // Grade colors only after submit.
                Some(_) if choice.correct => Style::default().fg(Color::Green),
                Some(_) if is_picked => Style::default().fg(Color::Red),
                Some(_) => Style::default().fg(Color::DarkGray),
                None if is_picked => Style::default().fg(Color::Cyan),
                None => Style::default(),
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "    {radio} {}) {}",
                    opt_idx + 1,
                    sanitize_line(&choice.label)
                ),
                style,
            )));
        }
        lines.push(Line::default());
    }
    lines
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Run the explorer. A data-load failure is reported in the status bar and
/// leaves the app on an empty dataset; it never aborts the TUI.
pub fn run(data_path: &Path) -> Result<()> {
    let (store, load_error) = match EventStore::load(data_path) {
        Ok(store) => (store, None),
        Err(err) => {
            tracing::error!(error = %err, "failed to load events data");
            (EventStore::default(), Some(err.to_string()))
        }
    };

    // Default to the current month with no year, like the original explorer.
    let filter = EventFilter::new(Some(chrono::Local::now().month()), None);
    let mut app = ExplorerView::new(store, filter);
    if let Some(msg) = load_error {
        app.set_status(format!("Failed to load events data: {msg}"));
    }

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut ExplorerView) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| app.render(frame))?;
        if term_event::poll(Duration::from_millis(200))? {
            if let TermEvent::Key(key) = term_event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use annals_core::quiz::Choice;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn event(year: i32, month: Option<u32>, title: &str) -> Event {
        Event {
            id: 0,
            title: title.to_string(),
            description: String::new(),
            year,
            month,
            day: None,
            category: None,
            region: None,
            source: None,
        }
    }

    fn store() -> EventStore {
        EventStore::from_events(vec![
            event(1969, Some(7), "Moon landing"),
            event(1989, Some(11), "Berlin Wall falls"),
            event(1991, Some(8), "Web goes public"),
            event(1953, Some(5), "Everest climbed"),
        ])
    }

    fn view() -> ExplorerView {
        ExplorerView::new(store(), EventFilter::default())
    }

    #[test]
    fn new_view_derives_selection_in_canonical_order() {
        let app = view();
        assert_eq!(app.selection.len(), 4);
        assert_eq!(app.selection[0].year, 1953);
        assert_eq!(app.selection[3].year, 1991);
    }

    #[test]
    fn month_cycle_wraps_through_any() {
        let mut app = view();
        assert_eq!(app.filter.month, None);
        app.cycle_month(true);
        assert_eq!(app.filter.month, Some(1));
        app.cycle_month(false);
        assert_eq!(app.filter.month, None);
        app.cycle_month(false);
        assert_eq!(app.filter.month, Some(12));
        app.cycle_month(true);
        assert_eq!(app.filter.month, None);
    }

    #[test]
    fn filter_change_replaces_selection() {
        let mut app = view();
        app.filter.month = Some(7);
        app.apply_filter();
        assert_eq!(app.selection.len(), 1);
        assert_eq!(app.selection[0].title, "Moon landing");
    }

    #[test]
    fn year_edit_applies_on_enter() {
        let mut app = view();
        app.handle_key(key(KeyCode::Char('y')));
        for c in "1969".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.filter.year, Some(1969));
        assert_eq!(app.selection.len(), 1);
    }

    #[test]
    fn year_edit_escape_cancels() {
        let mut app = view();
        app.handle_key(key(KeyCode::Char('y')));
        app.handle_key(key(KeyCode::Char('2')));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.filter.year, None);
        assert_eq!(app.selection.len(), 4);
    }

    #[test]
    fn clear_resets_both_criteria() {
        let mut app = view();
        app.filter = EventFilter::new(Some(7), Some(1969));
        app.apply_filter();
        app.handle_key(key(KeyCode::Char('c')));
        assert!(app.filter.is_empty());
        assert_eq!(app.selection.len(), 4);
    }

    #[test]
    fn random_sets_month_and_dataset_year() {
        let mut app = view();
        app.handle_key(key(KeyCode::Char('r')));
        let month = app.filter.month.expect("month set");
        assert!((1..=12).contains(&month));
        let year = app.filter.year.expect("year set");
        assert!(app.store.years().contains(&year));
    }

    #[test]
    fn tab_switch_discards_quiz() {
        let mut app = view();
        app.switch_tab(ViewTab::Quiz);
        app.start_quiz();
        assert!(app.quiz.is_some());
        app.handle_key(key(KeyCode::Tab));
        assert!(app.quiz.is_none());
        assert_eq!(app.tab, ViewTab::List);
    }

    #[test]
    fn quiz_count_clamps_to_pool() {
        let mut app = view();
        app.switch_tab(ViewTab::Quiz);
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Char('+')));
        }
        assert_eq!(app.quiz_count, 4); // pool has 4 events
        for _ in 0..20 {
            app.handle_key(key(KeyCode::Char('-')));
        }
        assert_eq!(app.quiz_count, 1);
    }

    #[test]
    fn quiz_start_generates_requested_count() {
        let mut app = view();
        app.switch_tab(ViewTab::Quiz);
        app.quiz_count = 3;
        app.handle_key(key(KeyCode::Char('s')));
        let run = app.quiz.as_ref().expect("quiz running");
        assert_eq!(run.questions.len(), 3);
        assert!(run.score.is_none());
    }

    #[test]
    fn quiz_start_on_empty_selection_is_a_status_not_a_crash() {
        let mut app = ExplorerView::new(EventStore::default(), EventFilter::default());
        app.switch_tab(ViewTab::Quiz);
        app.handle_key(key(KeyCode::Char('s')));
        assert!(app.quiz.is_none());
        assert!(app.status.is_some());
    }

    #[test]
    fn digits_answer_questions_while_quiz_is_running() {
        let mut app = view();
        app.switch_tab(ViewTab::Quiz);
        app.start_quiz();
        app.handle_key(key(KeyCode::Char('1')));
        let run = app.quiz.as_ref().expect("quiz running");
        assert_eq!(run.selected[0], Some(0));
        assert_eq!(app.tab, ViewTab::Quiz); // digit did not switch tabs
    }

    #[test]
    fn score_is_computed_only_on_submit() {
        let questions = vec![
            Question {
                text: "q1".into(),
                options: vec![
                    Choice { label: "right".into(), correct: true },
                    Choice { label: "wrong".into(), correct: false },
                ],
            },
            Question {
                text: "q2".into(),
                options: vec![
                    Choice { label: "wrong".into(), correct: false },
                    Choice { label: "right".into(), correct: true },
                ],
            },
        ];
        let mut run = QuizRun::new(questions);
        run.select(0); // correct
        assert!(run.score.is_none());
        run.move_cursor(1);
        run.select(0); // wrong
        assert!(run.score.is_none());
        run.submit();
        assert_eq!(run.score, Some(1));
    }

    #[test]
    fn selection_is_frozen_after_submit() {
        let questions = vec![Question {
            text: "q".into(),
            options: vec![
                Choice { label: "right".into(), correct: true },
                Choice { label: "wrong".into(), correct: false },
            ],
        }];
        let mut run = QuizRun::new(questions);
        run.select(1);
        run.submit();
        run.select(0);
        assert_eq!(run.selected[0], Some(1));
        run.submit();
        assert_eq!(run.score, Some(0));
    }

    #[test]
    fn unanswered_questions_score_zero() {
        let questions = vec![Question {
            text: "q".into(),
            options: vec![Choice { label: "right".into(), correct: true }],
        }];
        let mut run = QuizRun::new(questions);
        run.submit();
        assert_eq!(run.score, Some(0));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let questions = vec![
            Question { text: "a".into(), options: vec![] },
            Question { text: "b".into(), options: vec![] },
        ];
        let mut run = QuizRun::new(questions);
        run.move_cursor(-5);
        assert_eq!(run.cursor, 0);
        run.move_cursor(10);
        assert_eq!(run.cursor, 1);
    }

    #[test]
    fn list_lines_show_empty_placeholder() {
        let lines = list_lines(&[]);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn list_lines_include_date_and_title() {
        let lines = list_lines(&[event(1969, Some(7), "Moon landing")]);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone()))
            .collect();
        assert!(text.contains("July 1969"));
        assert!(text.contains("Moon landing"));
    }

    #[test]
    fn quiz_cursor_offset_accounts_for_prior_questions() {
        let questions = vec![
            Question {
                text: "a".into(),
                options: vec![
                    Choice { label: "1".into(), correct: true },
                    Choice { label: "2".into(), correct: false },
                ],
            },
            Question {
                text: "b".into(),
                options: vec![Choice { label: "1".into(), correct: true }],
            },
        ];
        let mut run = QuizRun::new(questions);
        assert_eq!(quiz_cursor_offset(&run), 0);
        run.move_cursor(1);
        assert_eq!(quiz_cursor_offset(&run), 4); // prompt + 2 options + blank
        run.submit();
        assert_eq!(quiz_cursor_offset(&run), 6); // plus the score header
    }

    #[test]
    fn year_edit_accepts_negative_years() {
        let mut app = view();
        app.handle_key(key(KeyCode::Char('y')));
        app.handle_key(key(KeyCode::Char('-')));
        for c in "44".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.filter.year, Some(-44));
    }
}
