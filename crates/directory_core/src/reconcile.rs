//! Positional reconciliation of homogeneous card lists.
//!
//! Cards are addressed by index only. A new pass overwrites the node at each
//! position that already exists, appends nodes past the old end and trims the
//! surplus. Items that can reorder independently of their data would need a
//! keyed diff, which this module deliberately does not attempt.

/// Identity of one live card node. Stable for as long as the node survives
/// reconciliation passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Positional role of a card within its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub first: bool,
    pub last: bool,
}

impl Placement {
    /// Role of the only card in a single-card list.
    pub const SOLE: Placement = Placement {
        first: true,
        last: true,
    };

    pub fn at(index: usize, len: usize) -> Self {
        Self {
            first: index == 0,
            last: index + 1 == len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp<T> {
    /// Overwrite the node at `index` in place.
    Update {
        index: usize,
        item: T,
        placement: Placement,
    },
    /// Append a new node; it becomes position `index`.
    Create {
        index: usize,
        item: T,
        placement: Placement,
    },
    /// Remove every node at or beyond `len`.
    Truncate { len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot<T> {
    pub id: NodeId,
    pub item: T,
    pub placement: Placement,
}

/// Counts of what one pass did to the live list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileStats {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

impl ReconcileStats {
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.removed == 0
    }
}

/// Computes the operations that turn `existing` into `desired`.
///
/// Slots whose content and placement already match produce no operation, so
/// reconciling the same data twice is a no-op on the second pass.
pub fn reconcile<T: Clone + PartialEq>(existing: &[CardSlot<T>], desired: &[T]) -> Vec<ListOp<T>> {
    let len = desired.len();
    let mut ops = Vec::new();

    for (index, item) in desired.iter().enumerate() {
        let placement = Placement::at(index, len);
        match existing.get(index) {
            Some(slot) if slot.item == *item && slot.placement == placement => {}
            Some(_) => ops.push(ListOp::Update {
                index,
                item: item.clone(),
                placement,
            }),
            None => ops.push(ListOp::Create {
                index,
                item: item.clone(),
                placement,
            }),
        }
    }

    if existing.len() > len {
        ops.push(ListOp::Truncate { len });
    }
    ops
}

/// Operations that collapse `existing` to exactly one card carrying both
/// first and last roles.
pub fn collapse<T: Clone + PartialEq>(existing: &[CardSlot<T>], item: T) -> Vec<ListOp<T>> {
    let mut ops = Vec::with_capacity(2);
    match existing.first() {
        Some(slot) if slot.item == item && slot.placement == Placement::SOLE => {}
        Some(_) => ops.push(ListOp::Update {
            index: 0,
            item,
            placement: Placement::SOLE,
        }),
        None => ops.push(ListOp::Create {
            index: 0,
            item,
            placement: Placement::SOLE,
        }),
    }
    if existing.len() > 1 {
        ops.push(ListOp::Truncate { len: 1 });
    }
    ops
}

/// In-memory model of a live card container.
///
/// Each controller owns exactly one of these; node identities survive
/// updates and are only retired by truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardList<T> {
    slots: Vec<CardSlot<T>>,
    next_id: u64,
}

impl<T> Default for CardList<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone + PartialEq> CardList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardSlot<T>> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> &[CardSlot<T>] {
        &self.slots
    }

    pub fn ids(&self) -> Vec<NodeId> {
        self.slots.iter().map(|slot| slot.id).collect()
    }

    /// Reconciles the list against `desired` and applies the result.
    pub fn reconcile(&mut self, desired: &[T]) -> ReconcileStats {
        let ops = reconcile(&self.slots, desired);
        self.apply(ops)
    }

    /// Collapses the list to a single card.
    pub fn collapse_to(&mut self, item: T) -> ReconcileStats {
        let ops = collapse(&self.slots, item);
        self.apply(ops)
    }

    pub fn clear(&mut self) -> ReconcileStats {
        self.apply(vec![ListOp::Truncate { len: 0 }])
    }

    pub fn apply(&mut self, ops: Vec<ListOp<T>>) -> ReconcileStats {
        let mut stats = ReconcileStats::default();
        for op in ops {
            match op {
                ListOp::Update {
                    index,
                    item,
                    placement,
                } => {
                    if let Some(slot) = self.slots.get_mut(index) {
                        slot.item = item;
                        slot.placement = placement;
                        stats.updated += 1;
                    }
                }
                ListOp::Create {
                    index,
                    item,
                    placement,
                } => {
                    debug_assert_eq!(index, self.slots.len());
                    let id = NodeId(self.next_id);
                    self.next_id += 1;
                    self.slots.push(CardSlot {
                        id,
                        item,
                        placement,
                    });
                    stats.created += 1;
                }
                ListOp::Truncate { len } => {
                    stats.removed += self.slots.len().saturating_sub(len);
                    self.slots.truncate(len);
                }
            }
        }
        stats
    }
}
