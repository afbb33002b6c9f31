//! Multi-line text editor state for the Config tab
//!
//! Keeps the configuration text as a list of lines with a cursor and a
//! vertical scroll offset. Input handling is plain character pushes and
//! pops; there is no undo and no selection.

use crossterm::event::KeyCode;

/// Editable text buffer with cursor and scroll state
#[derive(Debug, Clone)]
pub struct Editor {
    lines: Vec<String>,
    /// Cursor row (line index)
    row: usize,
    /// Cursor column as a character index into the current line
    col: usize,
    /// First visible line
    scroll: usize,
}

impl Editor {
    /// Build an editor holding the given text
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Editor {
            lines,
            row: 0,
            col: 0,
            scroll: 0,
        }
    }

    /// The buffer joined back into one string
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Visible lines for a viewport of the given height
    pub fn visible_lines(&self, height: usize) -> &[String] {
        let start = self.scroll.min(self.lines.len());
        let end = (start + height).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Cursor position relative to the viewport (column, row)
    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row - self.scroll)
    }

    /// Keep the cursor row inside a viewport of the given height
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.row < self.scroll {
            self.scroll = self.row;
        } else if self.row >= self.scroll + height {
            self.scroll = self.row + 1 - height;
        }
    }

    /// Apply one key press. Returns true when the text changed.
    pub fn input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) => {
                let index = self.byte_index();
                self.lines[self.row].insert(index, c);
                self.col += 1;
                true
            }
            KeyCode::Enter => {
                let index = self.byte_index();
                let rest = self.lines[self.row].split_off(index);
                self.lines.insert(self.row + 1, rest);
                self.row += 1;
                self.col = 0;
                true
            }
            KeyCode::Backspace => {
                if self.col > 0 {
                    self.col -= 1;
                    let index = self.byte_index();
                    self.lines[self.row].remove(index);
                    true
                } else if self.row > 0 {
                    let tail = self.lines.remove(self.row);
                    self.row -= 1;
                    self.col = self.lines[self.row].chars().count();
                    self.lines[self.row].push_str(&tail);
                    true
                } else {
                    false
                }
            }
            KeyCode::Up => {
                if self.row > 0 {
                    self.row -= 1;
                    self.clamp_col();
                }
                false
            }
            KeyCode::Down => {
                if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.clamp_col();
                }
                false
            }
            KeyCode::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = self.lines[self.row].chars().count();
                }
                false
            }
            KeyCode::Right => {
                if self.col < self.lines[self.row].chars().count() {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
                false
            }
            KeyCode::Home => {
                self.col = 0;
                false
            }
            KeyCode::End => {
                self.col = self.lines[self.row].chars().count();
                false
            }
            _ => false,
        }
    }

    /// Byte index of the cursor column in the current line
    fn byte_index(&self) -> usize {
        self.lines[self.row]
            .char_indices()
            .nth(self.col)
            .map_or(self.lines[self.row].len(), |(index, _)| index)
    }

    fn clamp_col(&mut self) {
        let len = self.lines[self.row].chars().count();
        if self.col > len {
            self.col = len;
        }
    }
}
