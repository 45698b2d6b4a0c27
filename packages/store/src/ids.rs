//! Entity id generation.
//!
//! Ids are decimal millisecond timestamps, bumped so that every id handed out
//! by one generator is strictly greater than the previous one. Two adds in the
//! same millisecond therefore still get distinct ids.

/// Monotonic timestamp id source. One per store.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id, never equal to or lower than any id this generator produced.
    pub fn next_id(&mut self) -> String {
        self.last = current_millis().max(self.last + 1);
        self.last.to_string()
    }
}

fn current_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
