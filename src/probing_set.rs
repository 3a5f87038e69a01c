use core::{
    borrow::Borrow,
    cell::Cell,
    fmt::Debug,
    hash::{BuildHasher, Hash},
    mem,
};

use crate::{
    alloc::{boxed::Box, vec::Vec},
    stats::StatsReport,
};

/// Capacity used by [ProbingSet::with_hasher] when no size is given.
pub const DEFAULT_CAPACITY: usize = 11;

/// A set of elements stored directly in one array of slots.
///
/// Collisions are resolved with quadratic probing: the `i`th probe for a key lands on
/// `(hash + i²) mod capacity`. The sequence is computed incrementally by adding successive odd
/// offsets (1, 3, 5, ...) since the sum of the first `i` odd numbers is `i²`.
///
/// Quadratic probing only visits enough distinct slots to find a free one when the capacity is
/// prime and at most half of the slots are in use. The set upholds both itself: the capacity is
/// always rounded up to a prime and the table grows to the next prime at least twice as large
/// as soon as more than half of the slots are occupied.
///
/// Removal is lazy. A removed element leaves a tombstone behind which keeps probe chains for
/// other keys intact. Tombstones are only reclaimed when the table grows.
///
/// Every probe is instrumented. The counters describe the activity since the table was created or
/// last grew, see [ProbeStats].
pub struct ProbingSet<T, S> {
    slots: Box<[Slot<T>]>,
    /// Number of active elements.
    len: usize,
    /// Number of slots which are not empty: active elements plus tombstones.
    occupied: usize,
    stats: Cell<ProbeStats>,
    build_hasher: S,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<T> {
    /// Never occupied since the last grow or clear. Terminates probe chains.
    Empty,
    Active(T),
    /// Removed. Still blocks probing until the next grow.
    Tombstone(T),
}

impl<T> Slot<T> {
    fn element(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Active(element) | Self::Tombstone(element) => Some(element),
        }
    }

    fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Counters updated by every probe.
///
/// These are reset to zero whenever the table grows. They measure the probing activity of the
/// current table layout rather than the lifetime of the set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProbeStats {
    /// Number of probes which hit at least one occupied slot holding a different element.
    /// Each probe counts at most once no matter how long its chain is.
    pub collisions: u64,
    /// Sum of the chain lengths of every probe.
    pub total_probe_length: u64,
    /// The longest chain seen by a single probe.
    pub longest_probe_chain: u64,
}

impl ProbeStats {
    fn record(&mut self, chain_length: u64, collided: bool) {
        if collided {
            self.collisions += 1;
        }
        self.total_probe_length += chain_length;
        self.longest_probe_chain = self.longest_probe_chain.max(chain_length);
    }
}

impl<T, S> ProbingSet<T, S> {
    pub fn with_hasher(build_hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, build_hasher)
    }

    /// Creates a set with room for roughly `capacity` slots.
    ///
    /// The capacity is rounded up to the next prime. Sizes too small to be useful (including
    /// zero) fall back to the smallest capacity the set supports rather than being rejected.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        Self {
            slots: empty_slots(next_prime(capacity)),
            len: 0,
            occupied: 0,
            stats: Cell::new(ProbeStats::default()),
            build_hasher,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing array. Always prime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Probe counters since the last grow.
    pub fn probe_stats(&self) -> ProbeStats {
        self.stats.get()
    }

    pub fn stats(&self) -> StatsReport {
        StatsReport::new(self.len, self.capacity(), self.stats.get())
    }

    /// Makes the set logically empty. The capacity is kept and the probe counters are untouched.
    pub fn clear(&mut self) {
        log::trace!(
            "clearing {} elements and {} tombstones",
            self.len,
            self.occupied - self.len
        );
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.len = 0;
        self.occupied = 0;
    }

    /// Iterates over the active elements in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Active(element) => Some(element),
            _ => None,
        })
    }
}

impl<T, S> ProbingSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts `element`, returning `false` if an equal element was already present.
    ///
    /// If the element has a tombstone of its own in its probe chain, that slot is reused.
    pub fn insert(&mut self, element: T) -> bool {
        let pos = self.find_pos(&element);
        match &self.slots[pos] {
            Slot::Active(_) => return false,
            Slot::Empty => self.occupied += 1,
            Slot::Tombstone(_) => (),
        }
        self.slots[pos] = Slot::Active(element);
        self.len += 1;

        if self.occupied > self.capacity() / 2 {
            self.grow();
        }

        true
    }

    /// Removes `element`, returning whether it was present.
    ///
    /// The slot becomes a tombstone and keeps participating in probe chains until the next grow.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.find_pos(element);
        let slot = &mut self.slots[pos];
        if !slot.is_active() {
            return false;
        }
        // Swap the element out of the active slot and into a tombstone without cloning it.
        if let Slot::Active(element) = mem::replace(slot, Slot::Empty) {
            *slot = Slot::Tombstone(element);
        }
        self.len -= 1;
        true
    }

    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots[self.find_pos(element)].is_active()
    }

    /// Resolves the slot where a probe for `element` terminates: either the slot which holds an
    /// equal element (active or tombstoned) or the first empty slot in the chain.
    fn find_pos<Q>(&self, element: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let capacity = self.capacity();
        let mut pos = reduce_hash(make_hash(&self.build_hasher, element), capacity);
        let mut offset = 1;
        let mut chain_length = 1;
        let mut collided = false;

        while let Some(candidate) = self.slots[pos].element() {
            if element.eq(candidate.borrow()) {
                break;
            }
            pos = (pos + offset) % capacity;
            offset += 2;
            chain_length += 1;
            collided = true;
        }

        let mut stats = self.stats.get();
        stats.record(chain_length, collided);
        self.stats.set(stats);

        pos
    }

    /// Moves every active element into a table at least twice as large, dropping tombstones.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = next_prime(old_capacity * 2);
        let old_slots = mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.len = 0;
        self.occupied = 0;

        for slot in old_slots.into_vec() {
            if let Slot::Active(element) = slot {
                // The new table is at most a quarter full so this can't trigger another grow.
                let pos = self.find_pos(&element);
                debug_assert!(matches!(self.slots[pos], Slot::Empty));
                self.slots[pos] = Slot::Active(element);
                self.len += 1;
                self.occupied += 1;
            }
        }

        log::debug!(
            "grew probing set from {old_capacity} to {new_capacity} slots, moved {} elements",
            self.len
        );
        self.stats.set(ProbeStats::default());
    }
}

impl<T, S> Debug for ProbingSet<T, S>
where
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> Extend<T> for ProbingSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

#[cfg(feature = "default-hasher")]
impl<T> ProbingSet<T, crate::DefaultHashBuilder> {
    pub fn new() -> Self {
        Self::with_hasher(crate::default_hash_builder())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, crate::default_hash_builder())
    }
}

#[cfg(feature = "default-hasher")]
impl<T> Default for ProbingSet<T, crate::DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Slot<T>]> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots.into_boxed_slice()
}

// `make_hash` is pulled from Hashbrown's `map` module
// at `274c7bbd79398881e0225c0133e423ce60d7a8f1`.
fn make_hash<Q, S>(hash_builder: &S, val: &Q) -> u64
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    use core::hash::Hasher;
    let mut state = hash_builder.build_hasher();
    val.hash(&mut state);
    state.finish()
}

/// Reduces a hash to a slot index in `0..capacity`.
///
/// The hash is read as a signed value and reduced with a truncating remainder, so the remainder
/// is negative for negative hashes and has to be corrected by adding the capacity back.
fn reduce_hash(hash: u64, capacity: usize) -> usize {
    let capacity = capacity as i64;
    let mut pos = hash as i64 % capacity;
    if pos < 0 {
        pos += capacity;
    }
    pos as usize
}

/// Finds a prime number at least as large as `n`.
///
/// This never returns 2: even inputs are bumped to the next odd number first. Inputs below 3
/// return 3.
pub fn next_prime(n: usize) -> usize {
    let mut n = n.max(3);
    if n % 2 == 0 {
        n += 1;
    }
    while !is_prime(n) {
        n += 2;
    }
    n
}

/// Trial division. Capacities are small enough that this isn't worth speeding up.
pub fn is_prime(n: usize) -> bool {
    match n {
        0 | 1 => false,
        2 | 3 => true,
        _ if n % 2 == 0 => false,
        _ => {
            let mut i = 3;
            while i * i <= n {
                if n % i == 0 {
                    return false;
                }
                i += 2;
            }
            true
        }
    }
}
