use crate::canvas::Canvas;
use crate::error::Result;

/// Outcome of handing a finished frame to the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// The frame is on screen.
    Shown,
    /// The display went away (window closed); no further frames will be shown.
    Closed,
}

/// Surface a finished canvas is flipped onto.
pub trait DisplaySurface {
    fn present(&mut self, canvas: &Canvas) -> Result<Presentation>;
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for Box<D> {
    fn present(&mut self, canvas: &Canvas) -> Result<Presentation> {
        (**self).present(canvas)
    }
}
