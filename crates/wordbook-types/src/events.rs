/// Events flowing from the terminal UI to the app's event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Explicit search submission.
    Submit(String),
    /// Current text of the search prompt, sent on every change.
    InputChanged(String),
    /// Re-search the nth entry (1-based) of the last synonym listing.
    Select(usize),
    Quit,
}
