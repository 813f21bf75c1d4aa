//! Output sink shared by every demo.
//!
//! Demos never call `println!` directly. They write through a [`Console`],
//! so the binary can print to stdout while tests record the lines and
//! assert on them.

use std::cell::RefCell;

use colored::Colorize;

/// Width of the rule printed after each demo.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 44;

pub trait Console {
    /// Emit a single line of output.
    fn line(&self, text: &str);

    /// Emit the banner that opens a demo, e.g.
    /// `Design Patterns - Creational: Singleton demo`.
    fn header(&self, category: &str, pattern: &str) {
        self.line(&format!("Design Patterns - {category}: {pattern} demo"));
    }

    fn separator(&self, width: usize) {
        self.line(&"-".repeat(width));
    }
}

/// Writes to the process stdout.
#[derive(Debug, Clone, Copy)]
pub struct StdoutConsole {
    color: bool,
}

impl StdoutConsole {
    pub fn new(color: bool) -> Self {
        StdoutConsole { color }
    }
}

impl Default for StdoutConsole {
    fn default() -> Self {
        StdoutConsole::new(true)
    }
}

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        println!("{text}");
    }

    fn header(&self, category: &str, pattern: &str) {
        let banner = format!("Design Patterns - {category}: {pattern} demo");
        if self.color {
            println!("{}", banner.bold().cyan());
        } else {
            println!("{banner}");
        }
    }
}

/// Records every line in memory. Used by the test suites.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: RefCell<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|line| line == needle)
    }

    /// Number of lines exactly equal to `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines.borrow().iter().filter(|line| *line == needle).count()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for MemoryConsole {
    fn line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_records_in_order() {
        let out = MemoryConsole::new();
        out.line("first");
        out.line("second");
        assert_eq!(out.lines(), vec!["first", "second"]);
        assert!(out.contains("second"));
        assert!(!out.contains("third"));
    }

    #[test]
    fn test_header_and_separator_format() {
        let out = MemoryConsole::new();
        out.header("Creational", "Singleton");
        out.separator(DEFAULT_SEPARATOR_WIDTH);

        let lines = out.lines();
        assert_eq!(lines[0], "Design Patterns - Creational: Singleton demo");
        assert_eq!(lines[1].len(), 44);
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn test_clear_drops_recorded_lines() {
        let out = MemoryConsole::new();
        out.line("x");
        out.line("x");
        assert_eq!(out.count("x"), 2);

        out.clear();
        assert!(out.lines().is_empty());
    }
}
