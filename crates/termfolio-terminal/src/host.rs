//! Capabilities the display adapter lends to the engine.

/// Append-only output surface.
///
/// The engine never reads back what is on screen. Implementations should not
/// block; failures are the adapter's to log.
pub trait Display {
    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str);

    /// Write `text` with no trailing newline.
    fn write(&mut self, text: &str);

    /// Erase all visible content.
    fn clear(&mut self);
}

/// Opens a URL outside the shell (a browser tab, usually). Fire-and-forget.
pub trait LinkOpener {
    fn open_external(&mut self, url: &str);
}

/// Borrowed adapter capabilities passed to every handler.
pub struct Host<'a> {
    pub display: &'a mut dyn Display,
    pub links: &'a mut dyn LinkOpener,
}

impl<'a> Host<'a> {
    pub fn new(display: &'a mut dyn Display, links: &'a mut dyn LinkOpener) -> Self {
        Self { display, links }
    }
}
