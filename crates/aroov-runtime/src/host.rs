/// Services the surrounding shell provides to controllers.
///
/// In a browser these are `alert`, `confirm`, the clipboard and navigation;
/// the CLI maps them onto the terminal, tests record them.
pub trait Host {
    /// Blocking notice. Used for failures the user has to acknowledge.
    fn alert(&self, message: &str);

    /// Yes/no question; `false` cancels the action.
    fn confirm(&self, message: &str) -> bool;

    /// Returns `false` when the clipboard is unavailable.
    fn copy_to_clipboard(&self, text: &str) -> bool;

    fn open_url(&self, url: &str);
}
