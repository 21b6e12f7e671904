use log::error;
use ratatui::{
    prelude::{Alignment, Rect},
    style::Stylize,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{
    pages::{Action, Notice},
    store::Store,
};

/// Read-only card showing the course as it currently is in the store
pub fn draw(store: &Store, frame: &mut Frame, area: Rect) {
    let image = match store.image_link() {
        "" => "No image".to_string().dark_gray(),
        link => link.to_string().blue().underlined(),
    };

    let lines: Vec<Line> = vec![
        Line::from(store.title().to_string().bold()).alignment(Alignment::Center),
        Line::from(store.description().to_string()).alignment(Alignment::Center),
        Line::raw(""),
        Line::from(image),
        Line::from("Ctrl-O to open".dark_gray()),
        Line::raw(""),
        Line::from("Price".gray()),
        Line::from(format!("Rs {}", store.price()).bold()),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

/// Open the course's image with whatever the system uses for links
pub fn open_image(store: &Store) -> Action {
    let link = store.image_link();
    if link.is_empty() {
        return Action::Notify(Notice::failure("This course has no image link."));
    }

    match open::that(link) {
        Ok(()) => Action::None,
        Err(e) => {
            error!("error opening {}: {}", link, e);
            Action::Notify(Notice::failure(format!("Couldn't open image: {}", e)))
        }
    }
}
