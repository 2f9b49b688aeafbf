#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Controller mounted: fetch the default term and arm the refresh timer.
    Started,
    /// User edited the search box. Does not fetch.
    InputChanged(String),
    /// User submitted the current search term.
    SearchSubmitted,
    /// User clicked a category shortcut.
    CategorySelected(String),
    /// User asked to re-run the current query.
    RetryClicked,
    /// Refresh timer fired.
    RefreshTick,
    /// Engine completion for an issued fetch.
    FetchCompleted {
        ticket: crate::FetchTicket,
        outcome: crate::FetchOutcome,
    },
    /// Session is ending; release the timer.
    Teardown,
}
