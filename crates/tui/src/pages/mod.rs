use std::borrow::Cow;

use crossterm::event::KeyEvent;
use ratatui::{prelude::Rect, text::Text, Frame};

use crate::{
    store::Store,
    styles::{error_text, success_text},
};

pub mod course;
pub mod courses;

pub use course::CoursePage;
pub use courses::CoursesPage;

/// Where the user is in the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The list of all courses
    Courses,

    /// Viewing and editing a single course, by ID
    Course(String),
}

/// An action that a [`Page`] or the store can request to be taken
#[derive(Debug)]
pub enum Action {
    /// Do nothing
    None,

    /// Quit the application
    Exit,

    /// Switch to another route, optionally telling the user something once there
    Navigate {
        to: Route,
        notice: Option<Notice>,
    },

    /// Display the given notice at the bottom of the screen
    Notify(Notice),
}

impl Action {
    pub fn navigate(to: Route) -> Self {
        Action::Navigate { to, notice: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Feedback for the user, shown until they next press a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: Cow<'static, str>,
}

impl Notice {
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    pub fn to_text(&self) -> Text<'static> {
        let msg = self.message.to_string();
        match self.kind {
            NoticeKind::Success => success_text(msg),
            NoticeKind::Failure => error_text(msg),
        }
    }
}

/// A full-screen view, drawn from the store
pub trait Page {
    fn draw(&mut self, store: &Store, frame: &mut Frame, area: Rect);
    fn handle_key(&mut self, store: &mut Store, key: KeyEvent) -> Action;
}
