/// Sequence number of one form submission. Completions and revert timers
/// carry the ticket they were issued for so late arrivals can be told apart
/// from the current submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// How the relay request ended. Rejections and transport failures collapse
/// into `Failed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Delivered,
    Failed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending(Ticket),
    Success(Ticket),
    Error(Ticket),
}

impl SubmissionStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending(_))
    }
}

/// Submission lifecycle:
///
/// ```text
/// Idle | Success | Error --start--> Sending(t)
/// Sending(t) --settle(t, Delivered)--> Success(t)
/// Sending(t) --settle(t, Failed)-----> Error(t)
/// Success(t) | Error(t) --revert(t)--> Idle
/// ```
///
/// Any event whose ticket does not match the current status is stale and
/// leaves the machine untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    status: SubmissionStatus,
    issued: u64,
}

impl Submission {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns `None` while a request is already in flight.
    pub fn start(&mut self) -> Option<Ticket> {
        if self.status.is_sending() {
            return None;
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.status = SubmissionStatus::Sending(ticket);
        Some(ticket)
    }

    /// Returns `true` if the outcome belonged to the in-flight request.
    pub fn settle(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        if self.status != SubmissionStatus::Sending(ticket) {
            return false;
        }
        self.status = match outcome {
            Outcome::Delivered => SubmissionStatus::Success(ticket),
            Outcome::Failed => SubmissionStatus::Error(ticket),
        };
        true
    }

    /// Returns `true` if the status went back to idle.
    pub fn revert(&mut self, ticket: Ticket) -> bool {
        match self.status {
            SubmissionStatus::Success(t) | SubmissionStatus::Error(t) if t == ticket => {
                self.status = SubmissionStatus::Idle;
                true
            }
            _ => false,
        }
    }
}
