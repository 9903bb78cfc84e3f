use log::{debug, info, warn};

use crate::config::STATUS_REVERT_MS;
use crate::error::SubmitError;
use crate::state::{
    DemoRequest, DemoRequestPayload, Field, Outcome, RotationState, ScrollState, Submission,
    SubmissionStatus, Ticket,
};

/// Everything the landing page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Scrolled(f64),
    RotationTick,
    ToggleMenu,
    /// `name` attribute of the input and its new value.
    FieldChanged(String, String),
    Submit,
    Settled(Ticket, Result<(), SubmitError>),
    RevertStatus(Ticket),
}

/// Side effects the view layer has to carry out on the controller's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SendDemoRequest {
        ticket: Ticket,
        payload: DemoRequestPayload,
    },
    ScheduleRevert {
        ticket: Ticket,
        delay_ms: u32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controller {
    scroll: ScrollState,
    rotation: RotationState,
    menu_open: bool,
    form: DemoRequest,
    submission: Submission,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nav_opacity(&self) -> f64 {
        self.scroll.nav_opacity()
    }

    pub fn active_metric(&self) -> usize {
        self.rotation.index()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn form(&self) -> &DemoRequest {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.submission.status()
    }

    /// Applies one message. Returns the effect to run, if any.
    pub fn update(&mut self, msg: Msg) -> Option<Command> {
        match msg {
            Msg::Scrolled(offset) => {
                self.scroll.record(offset);
                None
            }
            Msg::RotationTick => {
                self.rotation.advance();
                None
            }
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                None
            }
            Msg::FieldChanged(input_name, value) => {
                match Field::from_input_name(&input_name) {
                    Some(field) => self.form.set(field, value),
                    None => warn!("Ignoring input for unknown field {:?}", input_name),
                }
                None
            }
            Msg::Submit => match self.submission.start() {
                Some(ticket) => {
                    info!("Sending demo request {:?}", ticket);
                    Some(Command::SendDemoRequest {
                        ticket,
                        payload: self.form.payload(),
                    })
                }
                None => {
                    debug!("Demo request already in flight, ignoring submit");
                    None
                }
            },
            Msg::Settled(ticket, result) => {
                let outcome = match &result {
                    Ok(()) => Outcome::Delivered,
                    Err(err) => {
                        warn!("Demo request {:?} failed: {}", ticket, err);
                        Outcome::Failed
                    }
                };
                if !self.submission.settle(ticket, outcome) {
                    debug!("Dropping stale outcome for {:?}", ticket);
                    return None;
                }
                if outcome == Outcome::Delivered {
                    info!("Demo request {:?} delivered", ticket);
                    self.form.clear();
                }
                Some(Command::ScheduleRevert {
                    ticket,
                    delay_ms: STATUS_REVERT_MS,
                })
            }
            Msg::RevertStatus(ticket) => {
                if !self.submission.revert(ticket) {
                    debug!("Dropping stale status revert for {:?}", ticket);
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ROTATION_INTERVAL_MS;

    fn type_into(controller: &mut Controller, name: &str, value: &str) {
        let cmd = controller.update(Msg::FieldChanged(name.to_string(), value.to_string()));
        assert_eq!(cmd, None);
    }

    fn fill_jane(controller: &mut Controller) {
        type_into(controller, "name", "Dr. Jane Smith");
        type_into(controller, "email", "jane@clinic.com");
        type_into(controller, "organization", "Premier Surgical");
        type_into(controller, "message", "");
    }

    fn submit(controller: &mut Controller) -> Ticket {
        match controller.update(Msg::Submit) {
            Some(Command::SendDemoRequest { ticket, .. }) => ticket,
            other => panic!("expected a send command, got {:?}", other),
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let controller = Controller::new();
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert_eq!(controller.form(), &DemoRequest::default());
        assert!(!controller.menu_open());
        assert_eq!(controller.active_metric(), 0);
        assert_eq!(controller.nav_opacity(), 0.0);
    }

    #[test]
    fn scroll_updates_nav_opacity() {
        let mut controller = Controller::new();
        controller.update(Msg::Scrolled(40.0));
        assert_eq!(controller.nav_opacity(), 0.4);
        controller.update(Msg::Scrolled(250.0));
        assert_eq!(controller.nav_opacity(), 1.0);
        controller.update(Msg::Scrolled(0.0));
        assert_eq!(controller.nav_opacity(), 0.0);
    }

    #[test]
    fn ticks_rotate_active_metric() {
        assert_eq!(ROTATION_INTERVAL_MS, 3_000);
        let mut controller = Controller::new();
        let mut seen = Vec::new();
        for _ in 0..6 {
            controller.update(Msg::RotationTick);
            seen.push(controller.active_metric());
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn menu_toggles() {
        let mut controller = Controller::new();
        controller.update(Msg::ToggleMenu);
        assert!(controller.menu_open());
        controller.update(Msg::ToggleMenu);
        assert!(!controller.menu_open());
    }

    #[test]
    fn typing_updates_only_named_field() {
        let mut controller = Controller::new();
        fill_jane(&mut controller);
        type_into(&mut controller, "email", "jane@clinic.co");

        let form = controller.form();
        assert_eq!(form.email, "jane@clinic.co");
        assert_eq!(form.name, "Dr. Jane Smith");
        assert_eq!(form.organization, "Premier Surgical");
        assert_eq!(form.message, "");
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut controller = Controller::new();
        fill_jane(&mut controller);
        let before = controller.form().clone();
        type_into(&mut controller, "phone", "555-0100");
        assert_eq!(controller.form(), &before);
    }

    #[test]
    fn submit_sends_current_form() {
        let mut controller = Controller::new();
        fill_jane(&mut controller);

        match controller.update(Msg::Submit) {
            Some(Command::SendDemoRequest { ticket, payload }) => {
                assert_eq!(controller.status(), SubmissionStatus::Sending(ticket));
                assert_eq!(payload, controller.form().payload());
                assert_eq!(payload.name, "Dr. Jane Smith");
            }
            other => panic!("expected a send command, got {:?}", other),
        }
    }

    #[test]
    fn success_clears_fields_and_schedules_revert() {
        let mut controller = Controller::new();
        fill_jane(&mut controller);
        let ticket = submit(&mut controller);

        let cmd = controller.update(Msg::Settled(ticket, Ok(())));
        assert_eq!(
            cmd,
            Some(Command::ScheduleRevert {
                ticket,
                delay_ms: 5_000
            })
        );
        assert_eq!(controller.status(), SubmissionStatus::Success(ticket));
        assert_eq!(controller.form(), &DemoRequest::default());
    }

    #[test]
    fn rejection_keeps_fields() {
        let mut controller = Controller::new();
        fill_jane(&mut controller);
        let before = controller.form().clone();
        let ticket = submit(&mut controller);

        let cmd = controller.update(Msg::Settled(ticket, Err(SubmitError::Rejected { status: 500 })));
        assert!(matches!(cmd, Some(Command::ScheduleRevert { delay_ms: 5_000, .. })));
        assert_eq!(controller.status(), SubmissionStatus::Error(ticket));
        assert_eq!(controller.form(), &before);
    }

    #[test]
    fn transport_failure_keeps_fields() {
        let mut controller = Controller::new();
        fill_jane(&mut controller);
        let before = controller.form().clone();
        let ticket = submit(&mut controller);

        controller.update(Msg::Settled(
            ticket,
            Err(SubmitError::Transport("TypeError: Failed to fetch".to_string())),
        ));
        assert_eq!(controller.status(), SubmissionStatus::Error(ticket));
        assert_eq!(controller.form(), &before);
    }

    #[test]
    fn revert_returns_error_to_idle() {
        let mut controller = Controller::new();
        let ticket = submit(&mut controller);
        controller.update(Msg::Settled(ticket, Err(SubmitError::Rejected { status: 404 })));

        assert_eq!(controller.update(Msg::RevertStatus(ticket)), None);
        assert_eq!(controller.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn double_submit_sends_once() {
        let mut controller = Controller::new();
        fill_jane(&mut controller);
        let ticket = submit(&mut controller);

        assert_eq!(controller.update(Msg::Submit), None);
        assert_eq!(controller.status(), SubmissionStatus::Sending(ticket));
    }

    #[test]
    fn stale_revert_leaves_new_submission_sending() {
        let mut controller = Controller::new();
        fill_jane(&mut controller);
        let first = submit(&mut controller);
        controller.update(Msg::Settled(first, Err(SubmitError::Rejected { status: 502 })));

        let second = submit(&mut controller);
        controller.update(Msg::RevertStatus(first));
        assert_eq!(controller.status(), SubmissionStatus::Sending(second));
    }

    #[test]
    fn stale_success_does_not_clear_fields() {
        let mut controller = Controller::new();
        fill_jane(&mut controller);
        let first = submit(&mut controller);
        controller.update(Msg::Settled(first, Err(SubmitError::Rejected { status: 502 })));
        let second = submit(&mut controller);

        assert_eq!(controller.update(Msg::Settled(first, Ok(()))), None);
        assert_eq!(controller.status(), SubmissionStatus::Sending(second));
        assert_eq!(controller.form().name, "Dr. Jane Smith");
    }

    #[test]
    fn jane_smith_demo_request_end_to_end() {
        let mut controller = Controller::new();
        fill_jane(&mut controller);

        let (ticket, payload) = match controller.update(Msg::Submit) {
            Some(Command::SendDemoRequest { ticket, payload }) => (ticket, payload),
            other => panic!("expected a send command, got {:?}", other),
        };
        assert_eq!(payload.email, "jane@clinic.com");
        assert_eq!(payload.organization, "Premier Surgical");
        assert_eq!(payload.message, "");
        assert_eq!(controller.status(), SubmissionStatus::Sending(ticket));

        let revert = controller.update(Msg::Settled(ticket, Ok(())));
        assert_eq!(controller.status(), SubmissionStatus::Success(ticket));
        assert_eq!(controller.form(), &DemoRequest::default());

        match revert {
            Some(Command::ScheduleRevert { ticket: t, delay_ms }) => {
                assert_eq!(delay_ms, 5_000);
                controller.update(Msg::RevertStatus(t));
            }
            other => panic!("expected a revert command, got {:?}", other),
        }
        assert_eq!(controller.status(), SubmissionStatus::Idle);
    }
}
