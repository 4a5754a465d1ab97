use std::cell::Cell;

///
/// GroupArena
///
/// Scope object for one aggregation group.
///
/// Slot values are owned by their states and dropped with them; the arena
/// records the reserve/release discipline so hosts can observe how much
/// storage a group holds, and it marks when the group has ended.
/// One arena serves one group on one thread.
///

#[derive(Debug)]
pub struct GroupArena {
    open: Cell<bool>,
    live_bytes: Cell<u64>,
    peak_bytes: Cell<u64>,
    reservations: Cell<u64>,
    releases: Cell<u64>,
}

///
/// ArenaStats
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ArenaStats {
    pub live_bytes: u64,
    pub peak_bytes: u64,
    pub reservations: u64,
    pub releases: u64,
}

impl GroupArena {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: Cell::new(true),
            live_bytes: Cell::new(0),
            peak_bytes: Cell::new(0),
            reservations: Cell::new(0),
            releases: Cell::new(0),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// End the group. Contexts bound to this arena stop accepting calls.
    pub fn close(&self) {
        self.open.set(false);
    }

    #[must_use]
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            live_bytes: self.live_bytes.get(),
            peak_bytes: self.peak_bytes.get(),
            reservations: self.reservations.get(),
            releases: self.releases.get(),
        }
    }

    #[must_use]
    pub fn live_bytes(&self) -> u64 {
        self.live_bytes.get()
    }

    // Record a newly materialized owned value.
    pub(crate) fn reserve(&self, bytes: usize) {
        let bytes = u64::try_from(bytes).unwrap_or(u64::MAX);
        let live = self.live_bytes.get().saturating_add(bytes);

        self.live_bytes.set(live);
        self.peak_bytes.set(self.peak_bytes.get().max(live));
        self.reservations
            .set(self.reservations.get().saturating_add(1));
    }

    // Record a superseded owned value.
    pub(crate) fn release(&self, bytes: usize) {
        let bytes = u64::try_from(bytes).unwrap_or(u64::MAX);

        self.live_bytes
            .set(self.live_bytes.get().saturating_sub(bytes));
        self.releases.set(self.releases.get().saturating_add(1));
    }
}

impl Default for GroupArena {
    fn default() -> Self {
        Self::new()
    }
}
