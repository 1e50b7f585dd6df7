use super::{FileReport, OutputFormatter, ReportError};

/// Text formatter: the relative path, nothing else
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for TextFormatter {
    fn format_single(&self, report: &FileReport) -> Result<String, ReportError> {
        Ok(report.path.clone())
    }
}

/// JSON formatter for machine-readable output (one compact object per line)
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_single(&self, report: &FileReport) -> Result<String, ReportError> {
        Ok(serde_json::to_string(report)?)
    }
}
