use ratatui::{
    prelude::{Alignment, Rect},
    style::Stylize,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::Store;

/// Draw the course title across the top of the page
pub fn draw(store: &Store, frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(store.title().to_string().bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}
