//! Complaint id allocation.
//!
//! Ids stay millisecond-timestamp shaped, so records written by older
//! clients keep sorting sensibly next to new ones, but they are strictly
//! increasing within a generator. Two adds in the same millisecond get
//! distinct ids.

/// Monotonic id source.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    ///
    /// The result is greater than every id previously returned and greater
    /// than `max_existing`, the largest id already in the collection.
    /// `None` once no such id fits in a `u64`.
    pub fn next(&mut self, now_millis: i64, max_existing: Option<u64>) -> Option<u64> {
        let now = u64::try_from(now_millis).unwrap_or(0);
        let floor = self.last.max(max_existing.unwrap_or(0)).checked_add(1)?;
        let id = now.max(floor);
        self.last = id;
        Some(id)
    }
}
