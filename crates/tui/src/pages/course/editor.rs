use course_admin_client::course::{Course, CourseUpdate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    widgets::Paragraph,
    Frame,
};

use super::delete::DeleteControl;
use crate::{pages::Action, store::Store, widgets::TextField};

const TITLE: usize = 0;
/// Edits the course description, even though it's labelled as the instructor.
const DESCRIPTION: usize = 1;
const IMAGE: usize = 2;
const PRICE: usize = 3;
const UPDATE_BUTTON: usize = 4;
const DELETE_BUTTON: usize = 5;
const FOCUSABLE: usize = 6;

const LABELS: [&str; 4] = ["Title", "Instructor", "Image link", "Price"];

/// Form for changing a course's details.
/// Keeps its own copy of each field, which is only sent to the store on submit.
#[derive(Debug, Default)]
pub struct Editor {
    fields: [TextField; 4],
    focus: usize,

    /// Store revision the fields were last filled from
    seeded_from: Option<u64>,

    delete: DeleteControl,
}

impl Editor {
    /// Refill the fields if the shared state has changed since we last looked
    fn sync(&mut self, store: &Store) {
        if self.seeded_from == Some(store.revision()) {
            return;
        }

        if let Some(course) = store.course() {
            debug!("seeding editor from revision {}", store.revision());
            self.seed(course);
        }
        self.seeded_from = Some(store.revision());
    }

    fn seed(&mut self, course: &Course) {
        self.fields[TITLE].set(course.title.as_str());
        self.fields[DESCRIPTION].set(course.description.as_str());
        self.fields[IMAGE].set(course.image_link.as_str());
        self.fields[PRICE].set(course.price.as_str());
    }

    /// What we'd send if submitted now
    pub fn update(&self) -> CourseUpdate {
        CourseUpdate {
            title: self.fields[TITLE].value().to_string(),
            description: self.fields[DESCRIPTION].value().to_string(),
            image_link: self.fields[IMAGE].value().to_string(),
            published: true,
            price: self.fields[PRICE].value().to_string(),
        }
    }

    fn submit(&self, store: &Store) -> Action {
        if let Some(course) = store.course() {
            store.request_update(&course.id, self.update());
        }

        Action::None
    }

    pub fn draw(&mut self, store: &Store, frame: &mut Frame, area: Rect) {
        self.sync(store);

        let rows = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ],
        )
        .split(area);

        frame.render_widget(Paragraph::new("Update course details".bold()), rows[0]);
        for (i, field) in self.fields.iter().enumerate() {
            field.render_to(frame, rows[i + 1], LABELS[i], self.focus == i);
        }

        let buttons = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Length(15),
                Constraint::Length(2),
                Constraint::Length(15),
                Constraint::Min(0),
            ],
        )
        .split(rows[6]);

        let update = " Update course ";
        frame.render_widget(
            Paragraph::new(match self.focus == UPDATE_BUTTON {
                true => update.magenta().reversed(),
                false => update.magenta(),
            }),
            buttons[0],
        );
        self.delete
            .render_to(frame, buttons[2], self.focus == DELETE_BUTTON);
    }

    pub fn handle_key(&mut self, store: &mut Store, key: KeyEvent) -> Action {
        self.sync(store);

        match key.code {
            KeyCode::Char('s') | KeyCode::Char('S')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                return self.submit(store);
            }
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % FOCUSABLE,
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FOCUSABLE - 1) % FOCUSABLE
            }
            KeyCode::Enter => match self.focus {
                UPDATE_BUTTON => return self.submit(store),
                DELETE_BUTTON => return self.delete.activate(store),
                _ => self.focus += 1,
            },
            _ => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.handle_key(key);
                }
            }
        };

        Action::None
    }
}
