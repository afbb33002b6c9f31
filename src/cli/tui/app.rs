//! Interactive form prototyping TUI
//!
//! Two tabs mirror the authoring workflow: the Config tab holds the
//! configuration text in a small editor, the Result tab renders the
//! form produced by the most recent successful Apply. Validation runs
//! synchronously on Apply; its outcome always reflects the current
//! text, and any edit clears the displayed diagnostic right away.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};

use crate::core::config::{FieldSpec, FieldType};
use crate::core::diagnostic::Diagnostic;
use crate::core::form::{FieldValue, FormData, FormState};
use crate::core::validate::validate;

use super::editor::Editor;

/// Active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    /// Configuration text editor
    Config,
    /// Rendered form
    Result,
}

/// Form produced by the last successful Apply, with the text that
/// produced it so the editing surface can be restored unchanged
struct Applied {
    form: FormState,
    source: String,
}

/// Data collected by a successful submit
#[derive(Debug, Clone)]
pub struct Submission {
    /// Label of the button that fired the submit
    pub button: String,
    /// Entered values keyed by field label
    pub data: FormData,
}

/// TUI application state
pub struct FormTui {
    active_tab: Tab,
    editor: Editor,
    /// Diagnostic from the most recent Apply, cleared on any edit
    diagnostic: Option<Diagnostic>,
    applied: Option<Applied>,
    /// Selected row in the Result tab (fields first, then buttons)
    row_state: ListState,
    /// Field row currently being edited through the buffer
    editing_row: Option<usize>,
    edit_buffer: String,
    /// Most recent successful submission
    submitted: Option<Submission>,
    /// Transient status-bar message
    notice: Option<String>,
}

impl FormTui {
    /// Create a new TUI instance seeded with configuration text
    pub fn new(text: &str) -> Self {
        let mut row_state = ListState::default();
        row_state.select(Some(0));
        FormTui {
            active_tab: Tab::Config,
            editor: Editor::from_text(text),
            diagnostic: None,
            applied: None,
            row_state,
            editing_row: None,
            edit_buffer: String::new(),
            submitted: None,
            notice: None,
        }
    }

    /// Run the TUI
    ///
    /// Returns the last successful submission, if any, once the user
    /// quits.
    pub fn run(&mut self) -> anyhow::Result<Option<Submission>> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Main event loop
    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<Option<Submission>> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(self.submitted.take());
                }

                let quit = match self.active_tab {
                    Tab::Config => self.handle_config_input(key),
                    Tab::Result => self.handle_result_input(key),
                };
                if quit {
                    return Ok(self.submitted.take());
                }
            }
        }
    }

    /// Handle input on the Config tab. Returns true to quit.
    fn handle_config_input(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.apply();
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.active_tab = Tab::Result;
            }
            code => {
                if self.editor.input(code) {
                    // Edits immediately invalidate the prior diagnostic.
                    self.diagnostic = None;
                }
            }
        }
        false
    }

    /// Handle input on the Result tab. Returns true to quit.
    fn handle_result_input(&mut self, key: KeyEvent) -> bool {
        self.notice = None;

        if self.editing_row.is_some() {
            self.handle_field_edit(key.code);
            return false;
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                self.active_tab = Tab::Config;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let count = self.row_count();
                if count > 0 {
                    let i = self.row_state.selected().unwrap_or(0);
                    let new_i = if i == 0 { count - 1 } else { i - 1 };
                    self.row_state.select(Some(new_i));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.row_count();
                if count > 0 {
                    let i = self.row_state.selected().unwrap_or(0);
                    let new_i = if i >= count - 1 { 0 } else { i + 1 };
                    self.row_state.select(Some(new_i));
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.activate_row(),
            _ => {}
        }
        false
    }

    /// Handle a key while a text field is being edited.
    ///
    /// Every change is stored immediately, so the field's error clears
    /// as the user types. Multiline fields take Enter as a newline and
    /// finish on Esc; single-line fields finish on either.
    fn handle_field_edit(&mut self, key: KeyCode) {
        let Some(row) = self.editing_row else {
            return;
        };
        let Some((label, multiline)) = self.field_at(row).map(|field| {
            (
                field.label.clone(),
                field.field_type == FieldType::Multiline,
            )
        }) else {
            self.editing_row = None;
            return;
        };

        match key {
            KeyCode::Esc => {
                self.editing_row = None;
                return;
            }
            KeyCode::Enter if multiline => self.edit_buffer.push('\n'),
            KeyCode::Enter => {
                self.editing_row = None;
                return;
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => self.edit_buffer.push(c),
            _ => return,
        }

        let value = FieldValue::Text(self.edit_buffer.clone());
        if let Some(applied) = &mut self.applied {
            applied.form.set_value(&label, value);
        }
    }

    /// Activate the selected row: toggle, cycle, edit, or submit
    fn activate_row(&mut self) {
        let Some(row) = self.row_state.selected() else {
            return;
        };

        if let Some(field) = self.field_at(row) {
            let label = field.label.clone();
            match field.field_type {
                FieldType::Boolean => {
                    let current = matches!(
                        self.applied_value(&label),
                        Some(FieldValue::Flag(true))
                    );
                    if let Some(applied) = &mut self.applied {
                        applied.form.set_value(&label, FieldValue::Flag(!current));
                    }
                }
                FieldType::Enum => {
                    let options = field.options.clone().unwrap_or_default();
                    if options.is_empty() {
                        return;
                    }
                    let next = match self.applied_value(&label) {
                        Some(FieldValue::Choice(current)) => {
                            let i = options.iter().position(|o| o == current).unwrap_or(0);
                            options[(i + 1) % options.len()].clone()
                        }
                        _ => options[0].clone(),
                    };
                    if let Some(applied) = &mut self.applied {
                        applied.form.set_value(&label, FieldValue::Choice(next));
                    }
                }
                _ => {
                    self.edit_buffer = match self.applied_value(&label) {
                        Some(FieldValue::Text(text)) => text.clone(),
                        _ => String::new(),
                    };
                    self.editing_row = Some(row);
                }
            }
        } else if let Some(button) = self.button_at(row).map(str::to_string) {
            self.submit(&button);
        }
    }

    /// Run the Apply action: validate the editor text and replace the
    /// prior outcome wholesale
    fn apply(&mut self) {
        let text = self.editor.text();
        match validate(&text) {
            Ok(config) => {
                tracing::debug!(fields = config.items.len(), "configuration applied");
                self.diagnostic = None;
                self.applied = Some(Applied {
                    form: FormState::new(config),
                    source: text,
                });
                self.row_state.select(Some(0));
                self.editing_row = None;
                self.active_tab = Tab::Result;
            }
            Err(diagnostic) => {
                self.diagnostic = Some(diagnostic);
            }
        }
    }

    /// Submit the form through the given button
    fn submit(&mut self, button: &str) {
        let Some(applied) = &mut self.applied else {
            return;
        };
        match applied.form.submit() {
            Some(data) => {
                tracing::info!(button, entries = data.len(), "form submitted");
                self.notice = Some(format!("✓ Submitted via '{button}'"));
                self.submitted = Some(Submission {
                    button: button.to_string(),
                    data,
                });
            }
            None => {
                let count = applied.form.error_count();
                self.notice = Some(format!("✗ {count} field(s) need attention"));
            }
        }
    }

    fn row_count(&self) -> usize {
        self.applied.as_ref().map_or(0, |applied| {
            applied.form.config().items.len() + applied.form.config().buttons.len()
        })
    }

    fn field_at(&self, row: usize) -> Option<&FieldSpec> {
        self.applied
            .as_ref()
            .and_then(|applied| applied.form.config().items.get(row))
    }

    fn button_at(&self, row: usize) -> Option<&str> {
        let applied = self.applied.as_ref()?;
        let fields = applied.form.config().items.len();
        applied
            .form
            .config()
            .buttons
            .get(row.checked_sub(fields)?)
            .map(String::as_str)
    }

    fn applied_value(&self, label: &str) -> Option<&FieldValue> {
        self.applied.as_ref().and_then(|a| a.form.value(label))
    }

    /// Draw the TUI
    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(8),    // Main content
                Constraint::Length(3), // Status bar
            ])
            .split(f.area());

        self.draw_tabs(f, chunks[0]);
        match self.active_tab {
            Tab::Config => self.draw_config(f, chunks[1]),
            Tab::Result => self.draw_result(f, chunks[1]),
        }
        self.draw_status_bar(f, chunks[2]);
    }

    fn draw_tabs(&self, f: &mut Frame, area: Rect) {
        let tabs = Tabs::new(vec!["Config", "Result"])
            .select(match self.active_tab {
                Tab::Config => 0,
                Tab::Result => 1,
            })
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs, area);
    }

    /// Draw the configuration editor and, below it, the diagnostic
    /// from the last Apply
    fn draw_config(&mut self, f: &mut Frame, area: Rect) {
        let constraints = if self.diagnostic.is_some() {
            vec![Constraint::Min(6), Constraint::Length(5)]
        } else {
            vec![Constraint::Min(6)]
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let editor_area = chunks[0];
        let inner_height = editor_area.height.saturating_sub(2) as usize;
        self.editor.clamp_scroll(inner_height);

        let border_style = if self.diagnostic.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        let lines: Vec<Line> = self
            .editor
            .visible_lines(inner_height)
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        let editor = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Configuration"),
        );
        f.render_widget(editor, editor_area);

        let (col, row) = self.editor.cursor();
        #[allow(clippy::cast_possible_truncation)]
        f.set_cursor_position(Position::new(
            editor_area.x + 1 + col.min(u16::MAX as usize) as u16,
            editor_area.y + 1 + row.min(u16::MAX as usize) as u16,
        ));

        if let Some(diagnostic) = &self.diagnostic {
            let mut lines = vec![Line::from(Span::styled(
                diagnostic.to_string(),
                Style::default().fg(Color::Red),
            ))];
            if let Some(details) = &diagnostic.details {
                lines.push(Line::from(Span::styled(
                    format!("hint: {details}"),
                    Style::default().fg(Color::Yellow),
                )));
            }
            let problem = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Problem"));
            f.render_widget(problem, chunks[1]);
        }
    }

    /// Draw the rendered form: title, field/button rows, details panel
    fn draw_result(&mut self, f: &mut Frame, area: Rect) {
        let Some(applied) = &self.applied else {
            let placeholder = Paragraph::new(
                "No form configuration available. Please apply a configuration in the Config tab.",
            )
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(placeholder, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let title = applied
            .form
            .config()
            .title
            .as_deref()
            .unwrap_or("(untitled form)");
        let title_text = Paragraph::new(title)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title_text, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        let items = self.row_items();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Form"))
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("▶ ");
        f.render_stateful_widget(list, body[0], &mut self.row_state);

        let details = self.row_details();
        let details_text = Paragraph::new(details)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Details"));
        f.render_widget(details_text, body[1]);
    }

    /// Build the list rows: one per field, then one per button
    fn row_items(&self) -> Vec<ListItem<'static>> {
        let Some(applied) = &self.applied else {
            return Vec::new();
        };
        let config = applied.form.config();
        let mut items: Vec<ListItem> = Vec::with_capacity(config.items.len() + config.buttons.len());

        for (row, field) in config.items.iter().enumerate() {
            let editing = self.editing_row == Some(row);
            let marker = if field.required { "*" } else { "" };
            let display = if editing {
                format!("{}_", first_line(&self.edit_buffer))
            } else {
                self.value_display(field)
            };

            let mut spans = vec![Span::raw(format!("{}{marker}: ", field.label))];
            if editing {
                spans.push(Span::styled(display, Style::default().fg(Color::Yellow)));
            } else {
                spans.push(Span::raw(display));
            }
            if let Some(error) = applied.form.error(&field.label) {
                spans.push(Span::styled(
                    format!("  ✗ {error}"),
                    Style::default().fg(Color::Red),
                ));
            }
            items.push(ListItem::new(Line::from(spans)));
        }

        for button in &config.buttons {
            items.push(ListItem::new(format!("[ {button} ]")));
        }

        items
    }

    /// Current value of a field formatted for its row
    fn value_display(&self, field: &FieldSpec) -> String {
        match field.field_type {
            FieldType::Boolean => {
                if matches!(
                    self.applied_value(&field.label),
                    Some(FieldValue::Flag(true))
                ) {
                    "[✓]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            FieldType::Enum => match self.applied_value(&field.label) {
                Some(FieldValue::Choice(choice)) => format!("(•) {choice}"),
                _ => "( )".to_string(),
            },
            _ => match self.applied_value(&field.label) {
                Some(FieldValue::Text(text)) => first_line(text),
                _ => String::new(),
            },
        }
    }

    /// Details panel content for the selected row
    fn row_details(&self) -> String {
        let Some(row) = self.row_state.selected() else {
            return String::new();
        };

        if let Some(field) = self.field_at(row) {
            let mut details = format!(
                "Field: {}\nType: {}\nRequired: {}",
                field.label,
                field.field_type.as_str(),
                if field.required { "yes" } else { "no" }
            );
            if let Some(options) = &field.options {
                details.push_str(&format!("\nOptions: {}", options.join(", ")));
            }
            if let Some(error) = self
                .applied
                .as_ref()
                .and_then(|a| a.form.error(&field.label))
            {
                details.push_str(&format!("\n\n✗ {error}"));
            }
            let help = match field.field_type {
                FieldType::Boolean => "Press Space to toggle.",
                FieldType::Enum => "Press Space to cycle through the options.",
                FieldType::Multiline => {
                    "Press Enter to edit. While editing, Enter inserts a newline and Esc finishes."
                }
                _ => "Press Enter to edit.",
            };
            details.push_str(&format!("\n\n{help}"));
            details
        } else if let Some(button) = self.button_at(row) {
            format!("Press Enter to submit the form via '{button}'.")
        } else {
            String::new()
        }
    }

    /// Draw status bar
    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let modified = self
            .applied
            .as_ref()
            .is_some_and(|applied| applied.source != self.editor.text());
        let status = if modified { "Modified • " } else { "" };

        let help = if let Some(notice) = &self.notice {
            notice.as_str()
        } else if self.editing_row.is_some() {
            let multiline = self
                .editing_row
                .and_then(|row| self.field_at(row))
                .is_some_and(|field| field.field_type == FieldType::Multiline);
            if multiline {
                "Enter: Newline • Esc: Done"
            } else {
                "Enter: Done • Esc: Done"
            }
        } else {
            match self.active_tab {
                Tab::Config => "Type to edit • Ctrl+S: Apply • Tab: Switch tab • Esc: Quit",
                Tab::Result => "↑↓/jk: Navigate • Space/Enter: Edit • Tab: Config • q: Quit",
            }
        };

        let status_text = format!("{status}{help}");
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(status_text).block(block);
        f.render_widget(paragraph, area);
    }
}

/// First line of possibly multi-line text, with an ellipsis when more
/// lines follow
fn first_line(text: &str) -> String {
    match text.split_once('\n') {
        Some((first, _)) => format!("{first}…"),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SAMPLE_CONFIG;

    fn applied_tui(text: &str) -> FormTui {
        let mut tui = FormTui::new(text);
        tui.apply();
        tui
    }

    #[test]
    fn test_apply_switches_to_result_tab() {
        let tui = applied_tui(SAMPLE_CONFIG);
        assert!(tui.diagnostic.is_none());
        assert_eq!(tui.active_tab, Tab::Result);
        assert_eq!(tui.row_count(), 6);
    }

    #[test]
    fn test_apply_failure_keeps_previous_form() {
        let mut tui = applied_tui(SAMPLE_CONFIG);
        tui.editor = Editor::from_text("{");
        tui.active_tab = Tab::Config;
        tui.apply();
        assert!(tui.diagnostic.is_some());
        assert!(tui.applied.is_some());
        assert_eq!(tui.active_tab, Tab::Config);
    }

    #[test]
    fn test_edit_clears_diagnostic() {
        let mut tui = FormTui::new("{");
        tui.apply();
        assert!(tui.diagnostic.is_some());
        tui.handle_config_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(tui.diagnostic.is_none());
    }

    #[test]
    fn test_boolean_row_toggles() {
        let mut tui = applied_tui(SAMPLE_CONFIG);
        // "Is Editable" is the second field.
        tui.row_state.select(Some(1));
        tui.activate_row();
        assert_eq!(
            tui.applied_value("Is Editable"),
            Some(&FieldValue::Flag(true))
        );
        tui.activate_row();
        assert_eq!(
            tui.applied_value("Is Editable"),
            Some(&FieldValue::Flag(false))
        );
    }

    #[test]
    fn test_enum_row_cycles_options() {
        let mut tui = applied_tui(
            r#"{"items": [{"label": "Mode", "type": "enum", "options": ["a", "b"]}], "buttons": ["Ok"]}"#,
        );
        tui.row_state.select(Some(0));
        tui.activate_row();
        assert_eq!(
            tui.applied_value("Mode"),
            Some(&FieldValue::Choice("a".to_string()))
        );
        tui.activate_row();
        assert_eq!(
            tui.applied_value("Mode"),
            Some(&FieldValue::Choice("b".to_string()))
        );
    }

    #[test]
    fn test_button_row_submits() {
        let mut tui = applied_tui(
            r#"{"items": [{"label": "Count", "type": "number"}], "buttons": ["Save"]}"#,
        );
        // Row 1 is the "Save" button.
        tui.row_state.select(Some(1));
        tui.activate_row();
        let submission = tui.submitted.as_ref().unwrap();
        assert_eq!(submission.button, "Save");
    }

    #[test]
    fn test_submit_with_errors_records_none() {
        let mut tui = applied_tui(
            r#"{"items": [{"label": "Name", "type": "string", "required": true}], "buttons": ["Save"]}"#,
        );
        tui.row_state.select(Some(1));
        tui.activate_row();
        assert!(tui.submitted.is_none());
        assert_eq!(tui.notice.as_deref(), Some("✗ 1 field(s) need attention"));
    }

    #[test]
    fn test_field_editing_stores_value_per_keystroke() {
        let mut tui = applied_tui(
            r#"{"items": [{"label": "Count", "type": "number"}], "buttons": ["Save"]}"#,
        );
        tui.row_state.select(Some(0));
        tui.activate_row();
        assert_eq!(tui.editing_row, Some(0));
        tui.handle_field_edit(KeyCode::Char('4'));
        tui.handle_field_edit(KeyCode::Char('2'));
        assert_eq!(
            tui.applied_value("Count"),
            Some(&FieldValue::Text("42".to_string()))
        );
        tui.handle_field_edit(KeyCode::Enter);
        assert_eq!(tui.editing_row, None);
    }
}
