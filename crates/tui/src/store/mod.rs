use course_admin_client::{
    course::{Course, CourseUpdate},
    StatusCode,
};
use log::{debug, error, warn};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    mpsc::Sender,
    Arc,
};

mod worker;
pub use worker::Worker;

use crate::pages::{Action, Notice, Route};

/// The course currently being viewed, shared by every part of the course page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseState {
    /// Only meaningful when `is_loading` is false
    pub course: Option<Course>,
    pub is_loading: bool,
}

impl Default for CourseState {
    fn default() -> Self {
        Self {
            course: None,
            is_loading: true,
        }
    }
}

/// Lets a queued or in-flight request find out it's no longer wanted.
///
/// Tickets are stamped with the store's generation when issued. Once the generation moves on,
/// the worker won't start the request and the store ignores its result.
#[derive(Clone)]
pub struct Ticket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl Ticket {
    pub fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::SeqCst) != self.generation
    }
}

impl std::fmt::Debug for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ticket({})", self.generation)
    }
}

/// Requests sent to the worker thread
#[derive(Debug)]
pub enum Request {
    Course {
        ticket: Ticket,
        course_id: String,
    },
    Courses {
        ticket: Ticket,
    },
    Update {
        ticket: Ticket,
        course_id: String,
        update: CourseUpdate,
    },
    Delete {
        ticket: Ticket,
        course_id: String,
    },
}

/// Messages received by the app from the worker thread
#[derive(Debug)]
pub enum Event {
    Course {
        ticket: Ticket,
        result: course_admin_client::Result<Course>,
    },
    Courses {
        ticket: Ticket,
        result: course_admin_client::Result<Vec<Course>>,
    },
    Updated {
        ticket: Ticket,
        course_id: String,
        update: CourseUpdate,
        result: course_admin_client::Result<()>,
    },
    Deleted {
        ticket: Ticket,
        course_id: String,
        result: course_admin_client::Result<StatusCode>,
    },
}

impl Event {
    fn ticket(&self) -> &Ticket {
        match self {
            Event::Course { ticket, .. }
            | Event::Courses { ticket, .. }
            | Event::Updated { ticket, .. }
            | Event::Deleted { ticket, .. } => ticket,
        }
    }
}

/// Global data store. Only ever touched from the UI thread.
pub struct Store {
    state: CourseState,

    /// Bumped every time `state` is replaced
    revision: u64,

    courses: Option<Vec<Course>>,

    generation: Arc<AtomicU64>,
    worker_channel: Sender<Request>,
}

impl Store {
    pub fn new(worker_channel: Sender<Request>) -> Self {
        Self {
            state: Default::default(),
            revision: 0,
            courses: None,
            generation: Default::default(),
            worker_channel,
        }
    }

    pub fn state(&self) -> &CourseState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The loaded course, if we're not waiting on one
    pub fn course(&self) -> Option<&Course> {
        match self.state.is_loading {
            true => None,
            false => self.state.course.as_ref(),
        }
    }

    pub fn title(&self) -> &str {
        self.course().map(|c| c.title.as_str()).unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.course()
            .map(|c| c.description.as_str())
            .unwrap_or_default()
    }

    pub fn image_link(&self) -> &str {
        self.course()
            .map(|c| c.image_link.as_str())
            .unwrap_or_default()
    }

    pub fn price(&self) -> &str {
        self.course().map(|c| c.price.as_str()).unwrap_or_default()
    }

    pub fn courses(&self) -> Option<&[Course]> {
        self.courses.as_deref()
    }

    /// Abandon everything queued or in flight
    pub fn cancel_pending(&mut self) {
        let prev = self.generation.fetch_add(1, Ordering::SeqCst);
        debug!("cancelled requests from generation {}", prev);
    }

    pub(crate) fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation.load(Ordering::SeqCst),
            current: self.generation.clone(),
        }
    }

    fn set_state(&mut self, state: CourseState) {
        self.state = state;
        self.revision += 1;
    }

    fn send(&self, req: Request) {
        if let Err(e) = self.worker_channel.send(req) {
            error!("store worker has gone away: {:?}", e.0);
        }
    }

    /// Go back to loading, and fetch the given course
    pub fn request_course(&mut self, course_id: &str) {
        self.set_state(CourseState::default());
        self.send(Request::Course {
            ticket: self.ticket(),
            course_id: course_id.to_string(),
        });
    }

    pub fn request_courses(&mut self) {
        self.courses = None;
        self.send(Request::Courses {
            ticket: self.ticket(),
        });
    }

    pub fn request_update(&self, course_id: &str, update: CourseUpdate) {
        self.send(Request::Update {
            ticket: self.ticket(),
            course_id: course_id.to_string(),
            update,
        });
    }

    pub fn request_delete(&self, course_id: &str) {
        self.send(Request::Delete {
            ticket: self.ticket(),
            course_id: course_id.to_string(),
        });
    }

    /// Apply the result of a request, returning what the UI should do about it.
    pub fn event(&mut self, e: Event) -> Action {
        if e.ticket().is_cancelled() {
            debug!("dropping stale result: {:?}", e.ticket());
            return Action::None;
        }

        match e {
            Event::Course {
                result: Ok(course), ..
            } => {
                self.set_state(CourseState {
                    course: Some(course),
                    is_loading: false,
                });
                Action::None
            }
            Event::Course { result: Err(e), .. } => {
                error!("error fetching course: {}", e);
                Action::Notify(Notice::failure("Couldn't load the course."))
            }

            Event::Courses {
                result: Ok(courses),
                ..
            } => {
                self.courses = Some(courses);
                Action::None
            }
            Event::Courses { result: Err(e), .. } => {
                error!("error fetching courses: {}", e);
                Action::Notify(Notice::failure("Couldn't load the course list."))
            }

            Event::Updated {
                course_id,
                update,
                result: Ok(()),
                ..
            } => {
                self.set_state(CourseState {
                    course: Some(update.applied_to(&course_id)),
                    is_loading: false,
                });
                Action::Notify(Notice::success("Course updated successfully"))
            }
            Event::Updated { result: Err(e), .. } => {
                error!("error updating course: {}", e);
                Action::Notify(Notice::failure(
                    "An error occurred while updating the course.",
                ))
            }

            Event::Deleted {
                course_id,
                result: Ok(status),
                ..
            } => {
                self.set_state(CourseState::default());
                let notice = if status == StatusCode::OK {
                    Some(Notice::success("Course deleted successfully"))
                } else {
                    warn!("course deletion failed: {} gave {}", course_id, status);
                    None
                };

                Action::Navigate {
                    to: Route::Courses,
                    notice,
                }
            }
            Event::Deleted {
                course_id,
                result: Err(e),
                ..
            } => {
                error!("error deleting course {}: {}", course_id, e);
                Action::None
            }
        }
    }
}
