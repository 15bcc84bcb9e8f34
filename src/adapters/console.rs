use crate::{Console, FactoryError};
use std::io::Write;

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write_line(&mut self, line: &str) -> Result<(), FactoryError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", line)?;
        Ok(())
    }
}

/// Keeps every written line in memory, in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryConsole {
    lines: Vec<String>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Console for MemoryConsole {
    fn write_line(&mut self, line: &str) -> Result<(), FactoryError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_keeps_order() {
        let mut console = MemoryConsole::new();
        assert!(console.is_empty());

        console.write_line("40").unwrap();
        console.write_line("30").unwrap();

        assert_eq!(console.into_lines(), vec!["40", "30"]);
    }

    #[test]
    fn test_stdout_console_write_does_not_fail() {
        let mut console = StdoutConsole::new();
        assert!(console.write_line("").is_ok());
    }
}
