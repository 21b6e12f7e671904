use ratatui::{prelude::*, widgets::*};

/// Selection state for a list, which wraps around at either end.
#[derive(Default)]
pub struct StatefulList {
    state: ListState,
    last_item_count: usize,
}

impl StatefulList {
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Forget the selection, eg because the items changed
    pub fn reset(&mut self) {
        self.state.select(None);
    }

    pub fn next(&mut self) {
        if self.last_item_count == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(i) if i + 1 < self.last_item_count => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.last_item_count == 0 {
            return;
        }

        let i = match self.state.selected() {
            Some(0) | None => self.last_item_count - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn render_to(&mut self, frame: &mut Frame, target: Rect, list: List) {
        self.last_item_count = list.len();
        if self.state.selected().is_none() && self.last_item_count > 0 {
            self.state.select(Some(0));
        }
        frame.render_stateful_widget(list, target, &mut self.state);
    }
}
