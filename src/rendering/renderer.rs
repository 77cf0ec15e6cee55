/// Types implementing this trait produce the widget shown in place of a
/// snippet, given the display string computed for it.
pub trait Render {
    /// Present a display string such as `x^2-4=0 ⇒ x = 2.00000`
    fn formula(&self, display: &str) -> String;
}

/// Returns the display string unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn formula(&self, display: &str) -> String {
        display.to_string()
    }
}
