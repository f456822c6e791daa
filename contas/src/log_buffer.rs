use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::Level;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Thread-safe ring buffer feeding the session log tab
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: Arc<RwLock<VecDeque<LogEntry>>>,
    max_entries: usize,
}

impl LogBuffer {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(max_entries))),
            max_entries,
        }
    }

    pub fn push(&self, entry: LogEntry) {
        // A panic while holding the lock leaves the deque intact
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.max_entries {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Entries visible in a window of `height` rows, `offset` rows above the newest.
    /// Returns the window plus its 0-based start index.
    pub fn window(&self, offset: usize, height: usize) -> (usize, Vec<LogEntry>) {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let total = entries.len();
        let end = total.saturating_sub(offset);
        let start = end.saturating_sub(height);
        (start, entries.range(start..end).cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: chrono::Local::now(),
            level: Level::INFO,
            target: "contas".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn drops_oldest_when_full() {
        let buffer = LogBuffer::new(2);
        buffer.push(entry("a"));
        buffer.push(entry("b"));
        buffer.push(entry("c"));

        let messages: Vec<_> = buffer
            .get_entries()
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn window_counts_from_newest() {
        let buffer = LogBuffer::new(10);
        for i in 0..5 {
            buffer.push(entry(&i.to_string()));
        }

        let (start, visible) = buffer.window(0, 2);
        assert_eq!(start, 3);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[1].message, "4");

        let (start, visible) = buffer.window(4, 3);
        assert_eq!(start, 0);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "0");

        let (_, visible) = buffer.window(9, 3);
        assert!(visible.is_empty());
    }
}
