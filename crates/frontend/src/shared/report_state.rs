use std::fmt::Display;

/// View state of one report: typed rows, error string, loading flag
#[derive(Clone, Debug, PartialEq)]
pub struct ReportState<T> {
    pub rows: Vec<T>,
    pub error: Option<String>,
    pub loading: bool,
}

impl<T> Default for ReportState<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            error: None,
            loading: true,
        }
    }
}

impl<T> ReportState<T> {
    /// Store the outcome of a fetch.
    ///
    /// Success replaces the rows and clears the error; failure clears the rows
    /// and shows `error_message` instead of the technical error.
    pub fn apply<E: Display>(&mut self, result: Result<Vec<T>, E>, error_message: &str) {
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
            }
            Err(e) => {
                log::warn!("{}: {}", error_message, e);
                self.rows.clear();
                self.error = Some(error_message.to_string());
            }
        }
        self.loading = false;
    }

    /// Text shown instead of the table: `None` while there are rows to show
    pub fn fallback_text<'a>(&'a self, empty_message: &'a str) -> Option<&'a str> {
        if !self.rows.is_empty() {
            return None;
        }
        Some(self.error.as_deref().unwrap_or(empty_message))
    }
}
