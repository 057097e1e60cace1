//! Line-based console I/O with back/quit navigation.

use std::io::{BufRead, Write};

use super::WizardError;

/// An answer to a prompt: a value or a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    /// The user typed `b`.
    Back,
    /// The user typed `q`, or input ended.
    Quit,
}

impl<T> Answer<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Answer<U> {
        match self {
            Answer::Value(v) => Answer::Value(f(v)),
            Answer::Back => Answer::Back,
            Answer::Quit => Answer::Quit,
        }
    }
}

/// Unwrap an [`Answer::Value`], or return the navigation request from the
/// enclosing function as `Ok(Answer::Back)` / `Ok(Answer::Quit)`.
macro_rules! answer {
    ($e:expr) => {
        match $e {
            $crate::wizard::Answer::Value(v) => v,
            $crate::wizard::Answer::Back => return Ok($crate::wizard::Answer::Back),
            $crate::wizard::Answer::Quit => return Ok($crate::wizard::Answer::Quit),
        }
    };
}
pub(crate) use answer;

/// Console over any line reader and writer.
///
/// Stdin/stdout in the binary; in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text exactly as given.
    pub fn show(&mut self, text: &str) -> Result<(), WizardError> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write one line.
    pub fn say(&mut self, line: &str) -> Result<(), WizardError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Show `text` and read one trimmed line. `None` at end of input.
    pub fn read_line(&mut self, text: &str) -> Result<Option<String>, WizardError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt with navigation: `b` goes back, `q` (or end of input) quits.
    pub fn prompt(&mut self, text: &str) -> Result<Answer<String>, WizardError> {
        let Some(line) = self.read_line(text)? else {
            log::debug!("input closed at prompt {:?}", text);
            return Ok(Answer::Quit);
        };
        match line.to_lowercase().as_str() {
            "b" => Ok(Answer::Back),
            "q" => Ok(Answer::Quit),
            _ => Ok(Answer::Value(line)),
        }
    }

    /// Consume the console and hand back its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
