//! Console output implementations.

use crate::infrastructure::ports::OutputPort;

/// Standard output - one `println!` per line.
pub struct StdoutOutput;

impl StdoutOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for StdoutOutput {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Captures written lines for assertions.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput(std::sync::Mutex<Vec<String>>);

#[cfg(test)]
impl RecordingOutput {
    pub fn lines(&self) -> Vec<String> {
        self.0.lock().map(|lines| lines.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl OutputPort for RecordingOutput {
    fn write_line(&self, line: &str) {
        if let Ok(mut lines) = self.0.lock() {
            lines.push(line.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_output_keeps_order() {
        let output = RecordingOutput::default();
        output.write_line("first");
        output.write_line("second");
        assert_eq!(output.lines(), vec!["first", "second"]);
    }
}
