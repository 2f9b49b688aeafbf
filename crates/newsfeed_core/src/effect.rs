use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start an HTTP fetch; the ticket comes back with the outcome.
    IssueFetch { ticket: crate::FetchTicket },
    /// Disarm any running refresh timer, then arm one with `period`.
    ArmTimer { period: Duration },
    CancelTimer,
}
