//! Template Method: [`process`] fixes the order read -> process -> save.
//! Implementors must supply the first two steps; `save_data` is a hook with
//! a default. The skeleton is a free function, so no implementor can
//! replace it.

use crate::console::Console;

pub trait DataProcessor {
    fn read_data(&self, out: &dyn Console);
    fn process_data(&self, out: &dyn Console);

    fn save_data(&self, out: &dyn Console) {
        out.line("Saving to file");
    }
}

/// The skeleton.
pub fn process(processor: &dyn DataProcessor, out: &dyn Console) {
    processor.read_data(out);
    processor.process_data(out);
    processor.save_data(out);
}

#[derive(Debug, Default)]
pub struct CsvProcessor;

impl DataProcessor for CsvProcessor {
    fn read_data(&self, out: &dyn Console) {
        out.line("Reading CSV data");
    }

    fn process_data(&self, out: &dyn Console) {
        out.line("Processing CSV data");
    }
}

#[derive(Debug, Default)]
pub struct JsonProcessor;

impl DataProcessor for JsonProcessor {
    fn read_data(&self, out: &dyn Console) {
        out.line("Reading JSON data");
    }

    fn process_data(&self, out: &dyn Console) {
        out.line("Processing JSON data");
    }
}

/// Overrides the save hook.
#[derive(Debug)]
pub struct DatabaseProcessor {
    table: String,
}

impl DatabaseProcessor {
    pub fn new(table: impl Into<String>) -> Self {
        DatabaseProcessor {
            table: table.into(),
        }
    }
}

impl DataProcessor for DatabaseProcessor {
    fn read_data(&self, out: &dyn Console) {
        out.line(&format!("Reading rows from {}", self.table));
    }

    fn process_data(&self, out: &dyn Console) {
        out.line("Processing database rows");
    }

    fn save_data(&self, out: &dyn Console) {
        out.line(&format!("Writing results back to {}", self.table));
    }
}

pub fn demo(out: &dyn Console) {
    let processors: Vec<Box<dyn DataProcessor>> = vec![
        Box::new(CsvProcessor),
        Box::new(JsonProcessor),
        Box::new(DatabaseProcessor::new("orders")),
    ];
    for processor in &processors {
        process(processor.as_ref(), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;

    #[test]
    fn test_skeleton_order_with_default_hook() {
        let out = MemoryConsole::new();
        process(&CsvProcessor, &out);
        assert_eq!(
            out.lines(),
            vec!["Reading CSV data", "Processing CSV data", "Saving to file"]
        );
    }

    #[test]
    fn test_overridden_hook_replaces_default() {
        let out = MemoryConsole::new();
        process(&DatabaseProcessor::new("audit"), &out);
        assert_eq!(
            out.lines(),
            vec![
                "Reading rows from audit",
                "Processing database rows",
                "Writing results back to audit",
            ]
        );
        assert!(!out.contains("Saving to file"));
    }

    /// Only the steps are supplied; the order comes from `process`.
    struct Recorder {
        steps: std::cell::RefCell<Vec<&'static str>>,
    }

    impl DataProcessor for Recorder {
        fn read_data(&self, _out: &dyn Console) {
            self.steps.borrow_mut().push("read");
        }

        fn process_data(&self, _out: &dyn Console) {
            self.steps.borrow_mut().push("process");
        }

        fn save_data(&self, _out: &dyn Console) {
            self.steps.borrow_mut().push("save");
        }
    }

    #[test]
    fn test_skeleton_fixes_step_order_for_any_implementor() {
        let out = MemoryConsole::new();
        let recorder = Recorder {
            steps: Default::default(),
        };
        process(&recorder, &out);
        process(&recorder, &out);
        assert_eq!(
            *recorder.steps.borrow(),
            vec!["read", "process", "save", "read", "process", "save"]
        );
        assert!(out.lines().is_empty());
    }

    #[test]
    fn test_demo_output() {
        let out = MemoryConsole::new();
        demo(&out);
        assert_eq!(out.lines().len(), 9);
        assert_eq!(out.count("Saving to file"), 2);
        assert_eq!(out.lines()[3], "Reading JSON data");
    }
}
