use std::io::{self, BufRead, Write};

use log::trace;

/// Line-oriented console I/O: prints prompts, reads one answer per line.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `prompt` without a newline and reads the answer.
    ///
    /// Returns `None` once the input is closed. The line terminator is
    /// stripped; everything else is returned verbatim.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep whatever follows on its own line.
            writeln!(self.output)?;
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        trace!("Read answer {:?} for prompt {:?}", line, prompt);
        Ok(Some(line))
    }

    /// Writes `text` as-is and flushes.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
