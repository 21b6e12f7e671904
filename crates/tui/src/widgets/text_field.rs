use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::styles::focused;

/// A single line of editable text, with a cursor.
#[derive(Debug, Default, Clone)]
pub struct TextField {
    value: String,

    /// Position of the cursor, in chars
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the contents, putting the cursor at the end
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    fn byte_idx(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Horizontal scroll and caret column for a field `width` columns wide.
    /// Both are in terminal columns, so wide chars take up two.
    fn scroll_and_caret(&self, width: usize) -> (usize, usize) {
        let caret = self.value[..self.byte_idx()].width();
        let offset = caret.saturating_sub(width.max(1) - 1);

        (offset, caret - offset)
    }

    /// Apply an editing key. Returns false if the key isn't one we use.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let idx = self.byte_idx();
                self.value.insert(idx, c);
                self.cursor += 1;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let idx = self.byte_idx();
                self.value.remove(idx);
            }
            KeyCode::Delete if self.cursor < self.value.chars().count() => {
                let idx = self.byte_idx();
                self.value.remove(idx);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            KeyCode::Backspace | KeyCode::Delete => (),
            _ => return false,
        };

        true
    }

    pub fn render_to(&self, frame: &mut Frame, area: Rect, label: &str, is_focused: bool) {
        let mut block = Block::default().borders(Borders::ALL).title(label.to_string());
        if is_focused {
            block = block.border_style(focused());
        }
        let inner = block.inner(area);

        // Scroll so the cursor is always visible
        let (offset, caret) = self.scroll_and_caret(inner.width as usize);

        frame.render_widget(
            Paragraph::new(self.value.clone())
                .block(block)
                .scroll((0, offset as u16)),
            area,
        );

        if is_focused {
            frame.set_cursor(inner.x + caret as u16, inner.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::TextField;

    fn press(field: &mut TextField, code: KeyCode) -> bool {
        field.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_and_deleting() {
        let mut f = TextField::default();
        for c in "prce".chars() {
            press(&mut f, KeyCode::Char(c));
        }
        press(&mut f, KeyCode::Left);
        press(&mut f, KeyCode::Left);
        press(&mut f, KeyCode::Char('i'));
        assert_eq!(f.value(), "price");
        assert_eq!(f.cursor, 3);

        press(&mut f, KeyCode::Home);
        press(&mut f, KeyCode::Delete);
        press(&mut f, KeyCode::End);
        press(&mut f, KeyCode::Backspace);
        assert_eq!(f.value(), "ric");
    }

    #[test]
    fn multibyte_chars() {
        let mut f = TextField::default();
        f.set("₹99");
        assert_eq!(f.cursor, 3);

        press(&mut f, KeyCode::Home);
        press(&mut f, KeyCode::Delete);
        assert_eq!(f.value(), "99");

        press(&mut f, KeyCode::Char('é'));
        assert_eq!(f.value(), "é99");
    }

    #[test]
    fn caret_counts_columns_not_chars() {
        let mut f = TextField::default();
        f.set("日本");
        assert_eq!(f.scroll_and_caret(10), (0, 4));

        // too narrow, so scroll until the caret fits in the last column
        assert_eq!(f.scroll_and_caret(3), (2, 2));

        press(&mut f, KeyCode::Left);
        assert_eq!(f.scroll_and_caret(10), (0, 2));

        f.set("abc");
        assert_eq!(f.scroll_and_caret(10), (0, 3));
    }

    #[test]
    fn ignores_control_chords() {
        let mut f = TextField::default();
        assert!(!f.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(!press(&mut f, KeyCode::Tab));
        assert!(press(&mut f, KeyCode::Backspace));
        assert_eq!(f.value(), "");
    }
}
