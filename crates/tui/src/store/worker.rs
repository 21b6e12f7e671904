use anyhow::Result;
use course_admin_client::Client;
use log::debug;
use std::sync::mpsc::{channel, Receiver, Sender};

use super::{Event, Request};
use crate::event::{Event as CrateEvent, EventBus};

/// Performs requests it receives from the main thread, and sends the results back.
pub struct Worker {
    client: Client,
    msg_recv: Receiver<Request>,
    event_send: Sender<CrateEvent>,
}

impl Worker {
    /// Spawn the store worker on the given event bus, returning a channel to send commands down.
    pub fn spawn_on(bus: &EventBus, client: Client) -> Result<Sender<Request>> {
        let (cmd_send, cmd_recv) = channel();

        bus.spawn("store_worker", move |_, event_send| {
            // we don't need running because the receiver will raise an error and we'll exit
            Worker {
                client,
                msg_recv: cmd_recv,
                event_send,
            }
            .main()
        })?;

        Ok(cmd_send)
    }

    fn main(self) {
        while let Ok(msg) = self.msg_recv.recv() {
            debug!("received message: {:?}", msg);
            let Some(event) = perform(&self.client, msg) else {
                continue;
            };

            if let Err(e) = self.event_send.send(CrateEvent::Store(event)) {
                debug!("error sending event: {:?}", e);
                break;
            }
        }

        debug!("shutting down");
    }
}

/// Run a single request against the API, unless it's been cancelled already.
pub(crate) fn perform(client: &Client, msg: Request) -> Option<Event> {
    let event = match msg {
        Request::Course { ticket, .. }
        | Request::Courses { ticket }
        | Request::Update { ticket, .. }
        | Request::Delete { ticket, .. }
            if ticket.is_cancelled() =>
        {
            debug!("skipping cancelled request {:?}", ticket);
            return None;
        }

        Request::Course { ticket, course_id } => Event::Course {
            result: client.course(&course_id),
            ticket,
        },
        Request::Courses { ticket } => Event::Courses {
            result: client.courses(),
            ticket,
        },
        Request::Update {
            ticket,
            course_id,
            update,
        } => Event::Updated {
            result: client.update_course(&course_id, &update),
            ticket,
            course_id,
            update,
        },
        Request::Delete { ticket, course_id } => Event::Deleted {
            result: client.delete_course(&course_id),
            ticket,
            course_id,
        },
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use course_admin_client::Client;

    use super::perform;
    use crate::store::{tests::test_store, Request};

    #[test]
    fn cancelled_requests_never_hit_the_network() {
        // nothing listens here, so anything that isn't skipped would come back as an error
        let client = Client::new("http://127.0.0.1:9/", None).unwrap();
        let (mut store, recv) = test_store();
        store.request_course("abc");
        store.request_delete("abc");
        store.cancel_pending();

        let reqs: Vec<Request> = recv.try_iter().collect();
        assert_eq!(reqs.len(), 2);
        for req in reqs {
            assert!(perform(&client, req).is_none());
        }
    }
}
