/// Anything that can hand the counter a start and end time.
pub trait TimeRangeProvider {
    fn start_time(&self) -> &str;
    fn end_time(&self) -> &str;
}

impl TimeRangeProvider for (&str, &str) {
    fn start_time(&self) -> &str {
        self.0
    }

    fn end_time(&self) -> &str {
        self.1
    }
}
