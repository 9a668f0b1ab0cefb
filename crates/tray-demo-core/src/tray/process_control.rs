/// Process lifecycle capability handed to the tray menu.
pub trait ProcessControl {
    /// Ask the host to exit with status 0. Not expected to fail.
    fn quit(&self);
}
