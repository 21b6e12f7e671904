use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::{Alignment, Rect},
    style::Stylize,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::{Action, Page, Route};
use crate::{store::Store, widgets::StatefulList};

/// Lists every course, so one can be picked to edit
#[derive(Default)]
pub struct CoursesPage {
    list: StatefulList,
}

impl Page for CoursesPage {
    fn draw(&mut self, store: &Store, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Courses")
            .borders(Borders::ALL)
            .title_alignment(Alignment::Center);

        let Some(courses) = store.courses() else {
            frame.render_widget(Paragraph::new("Loading...").block(block), area);
            return;
        };
        if courses.is_empty() {
            frame.render_widget(Paragraph::new("No courses yet.").block(block), area);
            return;
        }

        let items = courses.iter().map(|c| {
            ListItem::new(Line::from(vec![
                c.title.clone().into(),
                format!("  Rs {}", c.price).dark_gray(),
            ]))
        });
        self.list.render_to(
            frame,
            area,
            List::new(items.collect::<Vec<_>>())
                .block(block)
                .highlight_symbol(">>"),
        );
    }

    fn handle_key(&mut self, store: &mut Store, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Exit,
            KeyCode::Down | KeyCode::Char('j') => self.list.next(),
            KeyCode::Up | KeyCode::Char('k') => self.list.previous(),
            KeyCode::Char('r') => {
                self.list.reset();
                store.cancel_pending();
                store.request_courses();
            }
            KeyCode::Enter | KeyCode::Char('l') => {
                if let (Some(sel), Some(courses)) = (self.list.selected(), store.courses()) {
                    if let Some(course) = courses.get(sel) {
                        return Action::navigate(Route::Course(course.id.clone()));
                    }
                }
            }
            _ => (),
        };

        Action::None
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::store::{
        tests::{rust_course, test_store},
        Event, Request,
    };

    #[test]
    fn enter_opens_selected_course() {
        let (mut store, recv) = test_store();
        store.request_courses();
        let Ok(Request::Courses { ticket }) = recv.try_recv() else {
            panic!("expected a courses request");
        };
        let mut other = rust_course();
        other.id = "def".into();
        other.title = "Go".into();
        store.event(Event::Courses {
            ticket,
            result: Ok(vec![rust_course(), other]),
        });

        let mut page = CoursesPage::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                page.draw(&store, frame, area)
            })
            .unwrap();

        page.handle_key(&mut store, KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        let action = page.handle_key(&mut store, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let Action::Navigate {
            to: Route::Course(id),
            ..
        } = action
        else {
            panic!("expected to navigate to a course");
        };
        assert_eq!(id, "def");
    }

    #[test]
    fn refresh_refetches() {
        let (mut store, recv) = test_store();
        let mut page = CoursesPage::default();

        page.handle_key(&mut store, KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));

        assert!(matches!(recv.try_recv(), Ok(Request::Courses { .. })));
        assert!(store.courses().is_none());
    }

    #[test]
    fn refresh_drops_older_listing() {
        let (mut store, recv) = test_store();
        store.request_courses();
        let Ok(Request::Courses { ticket: old }) = recv.try_recv() else {
            panic!("expected a courses request");
        };
        let mut page = CoursesPage::default();

        page.handle_key(&mut store, KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
        let Ok(Request::Courses { ticket: new }) = recv.try_recv() else {
            panic!("expected a refreshed courses request");
        };
        assert!(old.is_cancelled());

        store.event(Event::Courses {
            ticket: new,
            result: Ok(vec![rust_course()]),
        });
        store.event(Event::Courses {
            ticket: old,
            result: Ok(vec![]),
        });

        assert_eq!(store.courses().map(|cs| cs.len()), Some(1));
    }
}
