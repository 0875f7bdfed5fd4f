use std::fmt;
use std::io::{self, Write};

pub const DEFAULT_PREFIX: &str = "[";
pub const DEFAULT_SUFFIX: &str = "] ";
pub const DEFAULT_GLYPHS: &[&str] = &["|", "/", "-", "\\"];
pub const SUCCESS_GLYPH: &str = "\u{2713}"; // check mark
pub const FAIL_GLYPH: &str = "\u{00D7}"; // multiplication sign

/// Output sink the render loop writes frames to.
pub type Sink = Box<dyn Write + Send>;

/// Everything a spinner needs to draw itself.
///
/// Built once and handed to [`crate::Spinner`]; the render loop never mutates it.
pub struct Config {
    pub prefix: String,
    pub glyphs: Vec<String>,
    pub suffix: String,
    pub progress_message: String,
    pub success_glyph: String,
    pub success_message: String,
    pub fail_glyph: String,
    pub fail_message: String,
    /// `None` falls back to stdout when the spinner is built.
    pub writer: Option<Sink>,
    pub hide_cursor: bool,
}

impl Config {
    /// Default look with one message used for progress, success and failure.
    ///
    /// Returns a fresh value on every call, so two spinners never share glyphs or messages.
    pub fn new(progress: impl Into<String>) -> Self {
        let progress = progress.into();
        Self::with_messages(progress.clone(), progress.clone(), progress)
    }

    /// Default look with distinct progress, success and fail messages.
    pub fn with_messages(
        progress: impl Into<String>,
        success: impl Into<String>,
        fail: impl Into<String>,
    ) -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            glyphs: DEFAULT_GLYPHS.iter().map(|g| (*g).to_string()).collect(),
            suffix: DEFAULT_SUFFIX.to_string(),
            progress_message: progress.into(),
            success_glyph: SUCCESS_GLYPH.to_string(),
            success_message: success.into(),
            fail_glyph: FAIL_GLYPH.to_string(),
            fail_message: fail.into(),
            writer: Some(Box::new(io::stdout())),
            hide_cursor: true,
        }
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn glyphs<I, S>(mut self, glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.glyphs = glyphs.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn progress_message(mut self, message: impl Into<String>) -> Self {
        self.progress_message = message.into();
        self
    }

    #[must_use]
    pub fn success(mut self, glyph: impl Into<String>, message: impl Into<String>) -> Self {
        self.success_glyph = glyph.into();
        self.success_message = message.into();
        self
    }

    #[must_use]
    pub fn fail(mut self, glyph: impl Into<String>, message: impl Into<String>) -> Self {
        self.fail_glyph = glyph.into();
        self.fail_message = message.into();
        self
    }

    #[must_use]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    #[must_use]
    pub const fn hide_cursor(mut self, hide: bool) -> Self {
        self.hide_cursor = hide;
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("prefix", &self.prefix)
            .field("glyphs", &self.glyphs)
            .field("suffix", &self.suffix)
            .field("progress_message", &self.progress_message)
            .field("success_glyph", &self.success_glyph)
            .field("success_message", &self.success_message)
            .field("fail_glyph", &self.fail_glyph)
            .field("fail_message", &self.fail_message)
            .field("writer", &self.writer.as_ref().map(|_| "<sink>"))
            .field("hide_cursor", &self.hide_cursor)
            .finish()
    }
}
