//! Client id allocation.
//!
//! Ids are tracked in a liveness bitmap, one bit per id. The bitmap grows a
//! byte at a time and freed ids are handed out again lowest first.

use std::fmt;

/// Number of ids added each time the bitmap grows.
const IDS_PER_BLOCK: usize = 8;

/// Handle identifying a registered client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(usize);

impl ClientId {
    /// Wrap a raw id. Mostly useful in tests and for ids read back from logs.
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw integer value of this id.
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Client({})", self.0)
    }
}

#[derive(Debug, Default)]
pub(crate) struct ClientRegistry {
    live: Vec<u8>,
}

impl ClientRegistry {
    /// Claim the lowest free id, growing the bitmap if every id is taken.
    pub(crate) fn allocate(&mut self) -> ClientId {
        for (block, bits) in self.live.iter_mut().enumerate() {
            if *bits != u8::MAX {
                let bit = (!*bits).trailing_zeros() as usize;
                *bits |= 1 << bit;
                return ClientId(block * IDS_PER_BLOCK + bit);
            }
        }
        self.live.push(1);
        ClientId((self.live.len() - 1) * IDS_PER_BLOCK)
    }

    /// Mark an id free. Returns false if the id was never in range.
    pub(crate) fn release(&mut self, id: ClientId) -> bool {
        if !self.in_range(id) {
            return false;
        }
        self.live[id.0 / IDS_PER_BLOCK] &= !(1 << (id.0 % IDS_PER_BLOCK));
        true
    }

    pub(crate) fn in_range(&self, id: ClientId) -> bool {
        id.0 < self.capacity()
    }

    pub(crate) fn is_live(&self, id: ClientId) -> bool {
        self.in_range(id) && self.live[id.0 / IDS_PER_BLOCK] & (1 << (id.0 % IDS_PER_BLOCK)) != 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.live.len() * IDS_PER_BLOCK
    }

    pub(crate) fn clear(&mut self) {
        self.live.clear();
    }
}
