use crate::lyrics::LyricEvent;

/// Non-blank lines among the `count` events before `index`, oldest first.
pub fn previous_lines(events: &[LyricEvent], index: usize, count: usize) -> Vec<&str> {
    let end = index.min(events.len());
    events[end.saturating_sub(count)..end]
        .iter()
        .filter(|e| !e.is_blank())
        .map(|e| e.text.as_str())
        .collect()
}

/// Non-blank lines among the `count` events after `index`, soonest first.
pub fn upcoming_lines(events: &[LyricEvent], index: usize, count: usize) -> Vec<&str> {
    let start = index.saturating_add(1).min(events.len());
    let end = start.saturating_add(count).min(events.len());
    events[start..end]
        .iter()
        .filter(|e| !e.is_blank())
        .map(|e| e.text.as_str())
        .collect()
}
