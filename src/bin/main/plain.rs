use std::io::{self, Write};

use wordpace_core::render::Screen;

use super::render::ScreenRenderer;

/// Line-oriented renderer for pipes: one word per line, each word once.
pub(super) struct PlainRenderer<W: Write> {
    out: W,
    last_progress: String,
}

impl<W: Write> PlainRenderer<W> {
    pub(super) fn new(out: W) -> Self {
        Self {
            out,
            last_progress: String::new(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScreenRenderer for PlainRenderer<W> {
    fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        match screen {
            Screen::Idle { .. } => Ok(()),
            Screen::Reading { word, progress, .. } => {
                if word.is_empty() || progress == self.last_progress {
                    return Ok(());
                }
                self.last_progress.clear();
                self.last_progress.push_str(progress);
                writeln!(self.out, "{word}")?;
                self.out.flush()
            }
            Screen::Status { line1, line2, .. } => writeln!(self.out, "{line1} {line2}"),
        }
    }
}
