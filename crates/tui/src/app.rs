use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::{
    prelude::{Constraint, Direction, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::{
    event::Event,
    pages::{Action, CoursePage, CoursesPage, Notice, Page, Route},
    store::Store,
};

/// The page currently on screen
enum ActivePage {
    Courses(CoursesPage),
    Course(CoursePage),
}

impl ActivePage {
    fn page(&mut self) -> &mut dyn Page {
        match self {
            ActivePage::Courses(p) => p,
            ActivePage::Course(p) => p,
        }
    }
}

/// Holds all application state
pub struct App {
    pub running: bool,
    route: Route,
    page: ActivePage,
    store: Store,

    /// Shown at the bottom of the screen until the next key press
    notice: Option<Notice>,
}

impl App {
    /// Start the app on the given route, fetching whatever it needs
    pub fn new(store: Store, route: Route) -> Self {
        let mut app = Self {
            running: true,
            route: route.clone(),
            page: ActivePage::Courses(CoursesPage::default()),
            store,
            notice: None,
        };
        app.enter(route);

        app
    }

    #[cfg(test)]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[cfg(test)]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[cfg(test)]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Go to the given route. Going to where we already are does nothing.
    pub fn navigate(&mut self, to: Route) {
        if to == self.route {
            return;
        }

        self.enter(to);
    }

    fn enter(&mut self, to: Route) {
        debug!("navigating to {:?}", to);
        self.store.cancel_pending();
        self.page = match &to {
            Route::Courses => {
                self.store.request_courses();
                ActivePage::Courses(CoursesPage::default())
            }
            Route::Course(id) => {
                self.store.request_course(id);
                ActivePage::Course(CoursePage::new(id.as_str()))
            }
        };
        self.route = to;
    }

    pub fn quit(&mut self) {
        self.store.cancel_pending();
        self.running = false;
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(frame.size());

        self.page.page().draw(&self.store, frame, layout[0]);

        if let Some(notice) = &self.notice {
            frame.render_widget(Paragraph::new(notice.to_text()), layout[1]);
        }
    }

    /// Handle the given event
    pub fn handle_event(&mut self, event: Event) {
        let action = match event {
            // C-C always exits
            Event::Key(KeyEvent {
                code: KeyCode::Char('c') | KeyCode::Char('C'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => Action::Exit,
            Event::Key(key) => {
                self.notice = None;
                self.page.page().handle_key(&mut self.store, key)
            }
            Event::Store(e) => self.store.event(e),
            Event::Mouse(_) | Event::Resize(_, _) => Action::None,
        };

        self.perform(action);
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::None => (),
            Action::Exit => self.quit(),
            Action::Navigate { to, notice } => {
                self.navigate(to);
                if notice.is_some() {
                    self.notice = notice;
                }
            }
            Action::Notify(n) => self.notice = Some(n),
        }
    }
}
