use chrono::NaiveDateTime;

/// First and last damage timestamps of the current session. The DPS time
/// base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionWindow {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl SessionWindow {
    /// The first observation fixes the start; every observation moves the
    /// end, in log order. Out-of-order timestamps are taken as they come.
    pub fn observe(&mut self, timestamp: NaiveDateTime) {
        self.start.get_or_insert(timestamp);
        self.end = Some(timestamp);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    /// `None` unless the end lies after the start.
    pub fn elapsed_seconds(&self) -> Option<f64> {
        let (start, end) = (self.start?, self.end?);
        let ms = (end - start).num_milliseconds();
        (ms > 0).then(|| ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").unwrap()
    }

    #[test]
    fn elapsed_is_undefined_until_time_passes() {
        let mut window = SessionWindow::default();
        assert_eq!(window.elapsed_seconds(), None);

        window.observe(ts("2025-04-12 20:00:00.000"));
        assert_eq!(window.elapsed_seconds(), None);

        window.observe(ts("2025-04-12 20:00:02.500"));
        assert_eq!(window.elapsed_seconds(), Some(2.5));
    }

    #[test]
    fn end_follows_log_order() {
        let mut window = SessionWindow::default();
        window.observe(ts("2025-04-12 20:15:40.000"));
        window.observe(ts("2025-04-12 20:15:30.000"));

        assert_eq!(window.start(), Some(ts("2025-04-12 20:15:40.000")));
        assert_eq!(window.end(), Some(ts("2025-04-12 20:15:30.000")));
        assert_eq!(window.elapsed_seconds(), None);

        window.observe(ts("2025-04-12 20:15:50.000"));
        assert_eq!(window.elapsed_seconds(), Some(10.0));
    }

    #[test]
    fn clear_forgets_both_ends() {
        let mut window = SessionWindow::default();
        window.observe(ts("2025-04-12 20:00:00.000"));
        window.observe(ts("2025-04-12 20:00:10.000"));
        window.clear();
        assert_eq!(window.start(), None);
        assert_eq!(window.end(), None);
    }
}
