use std::rc::Rc;

/// The operations the visibility controller needs from a host window.
///
/// Implementations wrap a live toolkit window. None of these may destroy
/// the window.
pub trait WindowHandle {
    /// Make the window visible.
    fn show(&self);
    /// Hide the window without releasing it.
    fn hide(&self);
    /// Request input focus for the window.
    fn focus(&self);
}

impl<W: WindowHandle + ?Sized> WindowHandle for Rc<W> {
    fn show(&self) {
        (**self).show();
    }

    fn hide(&self) {
        (**self).hide();
    }

    fn focus(&self) {
        (**self).focus();
    }
}
