use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

mod delete;
mod editor;
mod header;
mod summary;

use editor::Editor;

use super::{Action, Page, Route};
use crate::store::Store;

/// Shows one course: a header, the edit form, and a summary card.
/// Fetching is started by the app when it navigates here.
pub struct CoursePage {
    course_id: String,
    editor: Editor,
}

impl CoursePage {
    pub fn new(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            editor: Editor::default(),
        }
    }
}

impl Page for CoursePage {
    fn draw(&mut self, store: &Store, frame: &mut Frame, area: Rect) {
        if store.state().is_loading {
            frame.render_widget(
                Paragraph::new("Loading...").alignment(Alignment::Center),
                area,
            );
            return;
        }

        let rows = Layout::new(
            Direction::Vertical,
            [Constraint::Length(2), Constraint::Min(0)],
        )
        .split(area);
        header::draw(store, frame, rows[0]);

        // 2/3 form, 1/3 summary
        let cols = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Percentage(66),
                Constraint::Length(1),
                Constraint::Percentage(34),
            ],
        )
        .split(rows[1]);
        self.editor.draw(store, frame, cols[0]);
        summary::draw(store, frame, cols[2]);
    }

    fn handle_key(&mut self, store: &mut Store, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::navigate(Route::Courses),
            KeyCode::Char('r') | KeyCode::Char('R')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                store.cancel_pending();
                store.request_course(&self.course_id);
                Action::None
            }
            _ if store.state().is_loading => Action::None,
            KeyCode::Char('o') | KeyCode::Char('O')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                summary::open_image(store)
            }
            _ => self.editor.handle_key(store, key),
        }
    }
}
