use ratatui::{prelude::Rect, style::Stylize, widgets::Paragraph, Frame};

use crate::{pages::Action, store::Store};

/// Button that deletes the current course.
/// What happens after the server replies is decided by the store.
#[derive(Debug, Default)]
pub struct DeleteControl;

impl DeleteControl {
    pub fn activate(&self, store: &Store) -> Action {
        if let Some(course) = store.course() {
            store.request_delete(&course.id);
        }

        Action::None
    }

    pub fn render_to(&self, frame: &mut Frame, area: Rect, is_focused: bool) {
        let label = " Delete Course ";
        let button = match is_focused {
            true => label.red().reversed(),
            false => label.red(),
        };
        frame.render_widget(Paragraph::new(button), area);
    }
}
