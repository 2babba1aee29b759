use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

/// Sentinel for "no node" in the intra-block links.
const NIL: usize = usize::MAX;

/// A node slot in the arena. Freed slots keep their stale payload and are
/// recycled through the free list; a slot is live iff `key_to_node` points
/// at it.
#[derive(Debug, Clone, Copy)]
struct NodeSlot<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
    block: usize,
}

/// A block: a doubly-linked chunk of node slots with an upper bound on the
/// values it may hold.
#[derive(Debug, Clone, Copy)]
struct BlockSlot<V> {
    head: usize,
    tail: usize,
    len: usize,
    upper_bound: V,
}

/// The partial-sorting frontier structure behind the BMSSP recursion
///
/// Holds (key, value) pairs, at most one live entry per key, and supports
/// four operations: `insert`, `batch_prepend`, `pull` and `remove`. Entries
/// live in two sequences of blocks of at most `block_capacity` nodes each:
///
/// - `d1` receives individual inserts. Blocks are ordered by ascending upper
///   bound; an ordered set keyed by `(upper_bound, block)` locates the
///   target block for an insert, and a block that overflows is split at its
///   value median.
/// - `d0` receives batch prepends, whose values the caller promises to be
///   below everything currently stored. The head of `d0` holds the smallest
///   values.
///
/// Nodes and blocks are arena slots linked by integer handles, so the
/// key-to-node index can keep a back pointer to the owning block and both
/// removal and relocation stay cheap.
#[derive(Debug)]
pub struct BlockHeap<K, V>
where
    K: Copy + Eq + Hash + Ord + Debug,
    V: Copy + Ord + Debug,
{
    /// Maximum nodes per block (M)
    block_capacity: usize,

    /// Bound of the owning frame; the separator when nothing remains
    global_bound: V,

    /// Node arena plus recycled slots
    nodes: Vec<NodeSlot<K, V>>,
    free_nodes: Vec<usize>,

    /// Block arena plus recycled slots
    blocks: Vec<BlockSlot<V>>,
    free_blocks: Vec<usize>,

    /// Prepend sequence, smallest values at the front
    d0: VecDeque<usize>,

    /// Insert sequence, ascending upper bounds
    d1: Vec<usize>,

    /// (upper_bound, block) pairs mirroring `d1`, for insert placement
    d1_bounds: BTreeSet<(V, usize)>,

    /// Authoritative index: every live node is reachable from here
    key_to_node: HashMap<K, usize>,
}

impl<K, V> BlockHeap<K, V>
where
    K: Copy + Eq + Hash + Ord + Debug,
    V: Copy + Ord + Debug,
{
    /// Creates an empty structure: `d0` empty, `d1` holding one empty block
    /// whose upper bound is `global_bound`
    pub fn new(block_capacity: usize, global_bound: V) -> Self {
        assert!(block_capacity >= 1, "block capacity must be positive");
        let mut heap = BlockHeap {
            block_capacity,
            global_bound,
            nodes: Vec::new(),
            free_nodes: Vec::new(),
            blocks: Vec::new(),
            free_blocks: Vec::new(),
            d0: VecDeque::new(),
            d1: Vec::new(),
            d1_bounds: BTreeSet::new(),
            key_to_node: HashMap::new(),
        };
        let seed = heap.alloc_block(global_bound);
        heap.d1.push(seed);
        heap.d1_bounds.insert((global_bound, seed));
        heap
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.key_to_node.len()
    }

    /// True iff no entry is stored in any block
    pub fn is_empty(&self) -> bool {
        self.key_to_node.is_empty()
    }

    /// Current value stored for `key`, if any
    pub fn get(&self, key: &K) -> Option<V> {
        self.key_to_node.get(key).map(|&node| self.nodes[node].value)
    }

    /// Inserts `key` with `value` into `d1`
    ///
    /// A present key with an equal or smaller value makes this a no-op; a
    /// present key with a larger value is replaced.
    pub fn insert(&mut self, key: K, value: V) {
        let mut displaced = false;
        if let Some(&node) = self.key_to_node.get(&key) {
            if value >= self.nodes[node].value {
                return;
            }
            self.remove_entry(node);
            displaced = true;
        }

        let block = self.d1_target_block(value);
        let node = self.alloc_node(key, value, block);
        self.key_to_node.insert(key, node);
        self.append_node(block, node);

        // Only the last block can receive values above its bound; track the
        // drift so placement search stays correct.
        if value > self.blocks[block].upper_bound {
            let old = self.blocks[block].upper_bound;
            self.d1_bounds.remove(&(old, block));
            self.blocks[block].upper_bound = value;
            self.d1_bounds.insert((value, block));
        }

        if self.blocks[block].len > self.block_capacity {
            self.split_block(block);
        }
        if displaced {
            self.reclaim_empty_blocks();
        }
    }

    /// Prepends a batch of entries whose values the caller guarantees to be
    /// below the current minimum of `d1`
    ///
    /// Duplicates inside the batch keep their smallest value; entries not
    /// improving on a stored value are dropped. The remainder is chunked
    /// into new blocks of at most ceil(M / 2) nodes, placed at the head of
    /// `d0` in ascending value order.
    pub fn batch_prepend(&mut self, entries: Vec<(K, V)>) {
        if entries.is_empty() {
            return;
        }

        let mut entries = entries;
        entries.sort_unstable_by(|a, b| (a.1, a.0).cmp(&(b.1, b.0)));

        let mut seen: HashSet<K> = HashSet::with_capacity(entries.len());
        let mut accepted: Vec<(K, V)> = Vec::with_capacity(entries.len());
        let mut displaced = false;
        for (key, value) in entries {
            if !seen.insert(key) {
                continue; // sorted, so the first occurrence was the smallest
            }
            if let Some(&node) = self.key_to_node.get(&key) {
                if value >= self.nodes[node].value {
                    continue;
                }
                self.remove_entry(node);
                displaced = true;
            }
            accepted.push((key, value));
        }
        if accepted.is_empty() {
            return;
        }

        let chunk_size = (self.block_capacity + 1) / 2;
        for chunk in accepted.chunks(chunk_size).rev() {
            let bound = chunk[chunk.len() - 1].1;
            let block = self.alloc_block(bound);
            for &(key, value) in chunk {
                let node = self.alloc_node(key, value, block);
                self.key_to_node.insert(key, node);
                self.append_node(block, node);
            }
            self.d0.push_front(block);
        }
        if displaced {
            self.reclaim_empty_blocks();
        }
    }

    /// Detaches and frees the node carrying `key`, if present
    pub fn remove(&mut self, key: &K) {
        if let Some(&node) = self.key_to_node.get(key) {
            self.remove_entry(node);
            self.reclaim_empty_blocks();
        }
    }

    /// Extracts up to M smallest keys together with a separating value
    ///
    /// Every returned key had value strictly below the separator and every
    /// entry left in the structure has value at least the largest returned
    /// one. When the structure holds at most M entries they are all
    /// returned with `global_bound` as the separator. Entries tying with
    /// the cut stay behind for a later pull whenever possible; when the
    /// whole batch ties (all candidate values equal) a full batch is
    /// returned and the separator is the smallest value strictly above the
    /// tie, falling back to `global_bound`.
    pub fn pull(&mut self) -> (Vec<K>, V) {
        if self.key_to_node.is_empty() {
            return (Vec::new(), self.global_bound);
        }

        // Collect whole blocks from the head of each sequence until the
        // collected count reaches M per sequence.
        let mut candidates: Vec<usize> = Vec::new();
        let mut d0_taken = 0;
        let mut gathered = 0;
        for &block in &self.d0 {
            if gathered >= self.block_capacity {
                break;
            }
            gathered += self.blocks[block].len;
            d0_taken += 1;
            self.collect_block(block, &mut candidates);
        }
        let mut d1_taken = 0;
        gathered = 0;
        for &block in &self.d1 {
            if gathered >= self.block_capacity {
                break;
            }
            gathered += self.blocks[block].len;
            d1_taken += 1;
            self.collect_block(block, &mut candidates);
        }

        if self.key_to_node.len() <= self.block_capacity {
            // Both sequences were exhausted above; drain everything.
            let keys: Vec<K> = candidates.iter().map(|&n| self.nodes[n].key).collect();
            for &node in &candidates {
                self.remove_entry(node);
            }
            self.reclaim_empty_blocks();
            return (keys, self.global_bound);
        }

        // The batch may only be cut where it dominates the remainder: if a
        // non-collected block undercuts the M-th candidate, widen the
        // collection until the order is restored.
        let mut rest_min;
        loop {
            candidates.sort_unstable_by(|&a, &b| {
                let (na, nb) = (&self.nodes[a], &self.nodes[b]);
                (na.value, na.key).cmp(&(nb.value, nb.key))
            });
            let cut_value = self.nodes[candidates[self.block_capacity - 1]].value;
            rest_min = None;
            let mut widen: Option<(bool, usize)> = None;
            for (i, &block) in self.d0.iter().enumerate().skip(d0_taken) {
                if let Some(v) = self.block_min(block) {
                    if rest_min.map_or(true, |m| v < m) {
                        rest_min = Some(v);
                        widen = Some((true, i));
                    }
                }
            }
            for (i, &block) in self.d1.iter().enumerate().skip(d1_taken) {
                if let Some(v) = self.block_min(block) {
                    if rest_min.map_or(true, |m| v < m) {
                        rest_min = Some(v);
                        widen = Some((false, i));
                    }
                }
            }
            match (rest_min, widen) {
                (Some(m), Some((in_d0, _))) if m < cut_value => {
                    // Pull the next block of the offending sequence into the
                    // candidate set and retry.
                    if in_d0 {
                        self.collect_block(self.d0[d0_taken], &mut candidates);
                        d0_taken += 1;
                    } else {
                        self.collect_block(self.d1[d1_taken], &mut candidates);
                        d1_taken += 1;
                    }
                }
                _ => break,
            }
        }

        let cut_value = self.nodes[candidates[self.block_capacity - 1]].value;
        let beyond = candidates
            .get(self.block_capacity)
            .map(|&n| self.nodes[n].value);
        let remainder_min = match (beyond, rest_min) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => unreachable!("more entries than capacity implies a remainder"),
        };
        debug_assert!(remainder_min >= cut_value);

        let (take, separator) = if remainder_min > cut_value {
            (self.block_capacity, remainder_min)
        } else {
            // The remainder ties with the cut. Prefer returning only the
            // strictly smaller prefix; if the whole batch is one tie, return
            // it and separate above the tied value.
            let below = candidates[..self.block_capacity]
                .iter()
                .take_while(|&&n| self.nodes[n].value < cut_value)
                .count();
            if below > 0 {
                (below, cut_value)
            } else {
                let above = candidates[self.block_capacity..]
                    .iter()
                    .map(|&n| self.nodes[n].value)
                    .find(|&v| v > cut_value);
                let mut separator = above.unwrap_or(self.global_bound);
                for &block in self.d0.iter().skip(d0_taken).chain(self.d1.iter().skip(d1_taken)) {
                    if let Some(v) = self.block_min_above(block, cut_value) {
                        separator = separator.min(v);
                    }
                }
                (self.block_capacity, separator)
            }
        };

        let keys: Vec<K> = candidates[..take].iter().map(|&n| self.nodes[n].key).collect();
        for &node in &candidates[..take] {
            self.remove_entry(node);
        }
        self.reclaim_empty_blocks();
        (keys, separator)
    }

    // ---- arena plumbing ----

    fn alloc_node(&mut self, key: K, value: V, block: usize) -> usize {
        let slot = NodeSlot {
            key,
            value,
            prev: NIL,
            next: NIL,
            block,
        };
        match self.free_nodes.pop() {
            Some(id) => {
                self.nodes[id] = slot;
                id
            }
            None => {
                self.nodes.push(slot);
                self.nodes.len() - 1
            }
        }
    }

    fn alloc_block(&mut self, upper_bound: V) -> usize {
        let slot = BlockSlot {
            head: NIL,
            tail: NIL,
            len: 0,
            upper_bound,
        };
        match self.free_blocks.pop() {
            Some(id) => {
                self.blocks[id] = slot;
                id
            }
            None => {
                self.blocks.push(slot);
                self.blocks.len() - 1
            }
        }
    }

    /// Links `node` at the tail of `block`
    fn append_node(&mut self, block: usize, node: usize) {
        let tail = self.blocks[block].tail;
        self.nodes[node].prev = tail;
        self.nodes[node].next = NIL;
        self.nodes[node].block = block;
        if tail == NIL {
            self.blocks[block].head = node;
        } else {
            self.nodes[tail].next = node;
        }
        self.blocks[block].tail = node;
        self.blocks[block].len += 1;
    }

    /// Unlinks `node` from its owning block without freeing it
    fn detach_node(&mut self, node: usize) {
        let NodeSlot { prev, next, block, .. } = self.nodes[node];
        if prev == NIL {
            self.blocks[block].head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.blocks[block].tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.blocks[block].len -= 1;
    }

    /// Removes a live entry entirely: index, links and arena slot
    fn remove_entry(&mut self, node: usize) {
        let key = self.nodes[node].key;
        let removed = self.key_to_node.remove(&key);
        debug_assert_eq!(removed, Some(node), "index out of sync with node arena");
        self.detach_node(node);
        self.free_nodes.push(node);
    }

    /// The `d1` block an insert of `value` lands in: smallest upper bound at
    /// least `value`, else the last block
    fn d1_target_block(&self, value: V) -> usize {
        match self.d1_bounds.range((value, 0)..).next() {
            Some(&(_, block)) => block,
            None => *self.d1.last().expect("d1 always holds at least one block"),
        }
    }

    /// Splits an overfull `d1` block at its value median
    ///
    /// The smaller half stays in place, the larger half moves into a fresh
    /// block right after it; both upper bounds become the maximum value each
    /// block actually holds.
    fn split_block(&mut self, block: usize) {
        let mut members = self.block_members(block);
        debug_assert!(members.len() > self.block_capacity);

        let mid = members.len() / 2;
        let nodes = &self.nodes;
        members.select_nth_unstable_by(mid, |&a, &b| {
            (nodes[a].value, nodes[a].key).cmp(&(nodes[b].value, nodes[b].key))
        });
        let upper: Vec<usize> = members.split_off(mid);
        let lower = members;

        let lower_max = self.max_value(&lower);
        let upper_max = self.max_value(&upper);

        let old_bound = self.blocks[block].upper_bound;
        self.d1_bounds.remove(&(old_bound, block));
        self.relink(block, &lower);
        self.blocks[block].upper_bound = lower_max;
        self.d1_bounds.insert((lower_max, block));

        let sibling = self.alloc_block(upper_max);
        self.relink(sibling, &upper);
        let position = self
            .d1
            .iter()
            .position(|&b| b == block)
            .expect("split target must be a d1 block");
        self.d1.insert(position + 1, sibling);
        self.d1_bounds.insert((upper_max, sibling));
    }

    /// Rebuilds `block`'s chain to hold exactly `members`, in order
    fn relink(&mut self, block: usize, members: &[usize]) {
        self.blocks[block].head = NIL;
        self.blocks[block].tail = NIL;
        self.blocks[block].len = 0;
        for &node in members {
            self.append_node(block, node);
        }
    }

    /// Drops emptied blocks from both sequences and recycles their slots;
    /// `d1` is reseeded with one empty block when it would become empty
    fn reclaim_empty_blocks(&mut self) {
        if self.d0.iter().any(|&b| self.blocks[b].len == 0) {
            let empties: Vec<usize> = self
                .d0
                .iter()
                .copied()
                .filter(|&b| self.blocks[b].len == 0)
                .collect();
            let blocks = &self.blocks;
            self.d0.retain(|&b| blocks[b].len > 0);
            self.free_blocks.extend(empties);
        }

        if self.d1.iter().any(|&b| self.blocks[b].len == 0) {
            let empties: Vec<usize> = self
                .d1
                .iter()
                .copied()
                .filter(|&b| self.blocks[b].len == 0)
                .collect();
            for &b in &empties {
                self.d1_bounds.remove(&(self.blocks[b].upper_bound, b));
            }
            let blocks = &self.blocks;
            self.d1.retain(|&b| blocks[b].len > 0);
            self.free_blocks.extend(empties);
        }
        if self.d1.is_empty() {
            let seed = self.alloc_block(self.global_bound);
            self.d1.push(seed);
            self.d1_bounds.insert((self.global_bound, seed));
        }
    }

    /// Node handles of `block`, head to tail
    fn block_members(&self, block: usize) -> Vec<usize> {
        let mut members = Vec::with_capacity(self.blocks[block].len);
        let mut cursor = self.blocks[block].head;
        while cursor != NIL {
            members.push(cursor);
            cursor = self.nodes[cursor].next;
        }
        members
    }

    fn collect_block(&self, block: usize, into: &mut Vec<usize>) {
        let mut cursor = self.blocks[block].head;
        while cursor != NIL {
            into.push(cursor);
            cursor = self.nodes[cursor].next;
        }
    }

    fn block_min(&self, block: usize) -> Option<V> {
        let mut min = None;
        let mut cursor = self.blocks[block].head;
        while cursor != NIL {
            let v = self.nodes[cursor].value;
            if min.map_or(true, |m| v < m) {
                min = Some(v);
            }
            cursor = self.nodes[cursor].next;
        }
        min
    }

    fn block_min_above(&self, block: usize, floor: V) -> Option<V> {
        let mut min = None;
        let mut cursor = self.blocks[block].head;
        while cursor != NIL {
            let v = self.nodes[cursor].value;
            if v > floor && min.map_or(true, |m| v < m) {
                min = Some(v);
            }
            cursor = self.nodes[cursor].next;
        }
        min
    }

    fn max_value(&self, members: &[usize]) -> V {
        members
            .iter()
            .map(|&n| self.nodes[n].value)
            .max()
            .expect("split halves are never empty")
    }

    /// Structural self-check used by the unit tests
    #[cfg(test)]
    fn check_invariants(&self) {
        use std::collections::HashMap as Map;

        // Every indexed node sits in exactly one listed block, and every
        // listed node is indexed.
        let mut seen: Map<K, usize> = Map::new();
        for (&block, in_d1) in self
            .d0
            .iter()
            .map(|b| (b, false))
            .chain(self.d1.iter().map(|b| (b, true)))
        {
            let members = self.block_members(block);
            assert_eq!(members.len(), self.blocks[block].len);
            for &node in &members {
                let slot = &self.nodes[node];
                assert_eq!(slot.block, block);
                assert_eq!(self.key_to_node.get(&slot.key), Some(&node));
                assert!(seen.insert(slot.key, node).is_none(), "duplicate key");
                if in_d1 {
                    assert!(slot.value <= self.blocks[block].upper_bound);
                }
            }
        }
        assert_eq!(seen.len(), self.key_to_node.len());

        // d1 bounds ascend and mirror the ordered set.
        let bounds: Vec<V> = self.d1.iter().map(|&b| self.blocks[b].upper_bound).collect();
        for pair in bounds.windows(2) {
            assert!(pair[0] <= pair[1], "d1 bounds must be non-decreasing");
        }
        assert_eq!(self.d1_bounds.len(), self.d1.len());
        for &block in &self.d1 {
            assert!(self
                .d1_bounds
                .contains(&(self.blocks[block].upper_bound, block)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_drain() {
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(4, u64::MAX);
        heap.insert(7, 30);
        heap.insert(3, 10);
        heap.insert(5, 20);
        heap.check_invariants();
        assert_eq!(heap.len(), 3);

        let (keys, separator) = heap.pull();
        assert_eq!(keys.len(), 3);
        assert_eq!(separator, u64::MAX);
        assert!(heap.is_empty());
        heap.check_invariants();
    }

    #[test]
    fn insert_is_idempotent_for_larger_values() {
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(4, u64::MAX);
        heap.insert(1, 10);
        heap.insert(1, 10);
        heap.insert(1, 25);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.get(&1), Some(10));

        heap.insert(1, 4);
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.get(&1), Some(4));
        heap.check_invariants();
    }

    #[test]
    fn splits_keep_placement_working() {
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(2, u64::MAX);
        for key in 0..20 {
            heap.insert(key, (key as u64) * 3 % 17);
            heap.check_invariants();
        }
        assert_eq!(heap.len(), 20);

        let (first, separator) = heap.pull();
        assert_eq!(first.len(), 2);
        for key in &first {
            assert!(heap.get(key).is_none());
        }
        // keys 0 and 17 both map to value 0, the global minimum
        assert_eq!(
            {
                let mut sorted = first.clone();
                sorted.sort_unstable();
                sorted
            },
            vec![0, 17]
        );
        assert_eq!(separator, 1);
        heap.check_invariants();
    }

    #[test]
    fn pull_prefers_prepended_values() {
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(3, 1_000);
        heap.insert(10, 500);
        heap.insert(11, 600);
        heap.batch_prepend(vec![(1, 40), (2, 30), (3, 20), (4, 10)]);
        heap.check_invariants();

        let (keys, separator) = heap.pull();
        assert_eq!(keys, vec![4, 3, 2]);
        assert_eq!(separator, 40);
        assert_eq!(heap.len(), 3);
        heap.check_invariants();
    }

    #[test]
    fn batch_prepend_deduplicates() {
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(4, 1_000);
        heap.insert(9, 100);
        heap.batch_prepend(vec![(9, 50), (9, 60), (8, 70), (8, 65)]);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.get(&9), Some(50));
        assert_eq!(heap.get(&8), Some(65));
        heap.check_invariants();
    }

    #[test]
    fn tied_batch_returns_and_separates_above() {
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(2, 1_000);
        for key in 0..5 {
            heap.insert(key, 7);
        }
        heap.insert(99, 12);

        let (keys, separator) = heap.pull();
        assert_eq!(keys.len(), 2);
        assert_eq!(separator, 12);
        assert_eq!(heap.len(), 4);

        let (keys, separator) = heap.pull();
        assert_eq!(keys.len(), 2);
        assert_eq!(separator, 12);

        let (keys, separator) = heap.pull();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&99));
        assert_eq!(separator, 1_000);
        assert!(heap.is_empty());
        heap.check_invariants();
    }

    #[test]
    fn ties_at_the_cut_stay_behind() {
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(3, 1_000);
        heap.insert(1, 5);
        heap.insert(2, 9);
        heap.insert(3, 9);
        heap.insert(4, 9);
        heap.insert(5, 9);

        // A full batch would cut through the 9s; only the strict prefix may
        // come out.
        let (keys, separator) = heap.pull();
        assert_eq!(keys, vec![1]);
        assert_eq!(separator, 9);
        assert_eq!(heap.len(), 4);
        heap.check_invariants();
    }

    #[test]
    fn remove_detaches_entries() {
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(2, 1_000);
        heap.insert(1, 10);
        heap.insert(2, 20);
        heap.insert(3, 30);
        heap.remove(&2);
        heap.remove(&2);
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.get(&2), None);
        heap.check_invariants();

        let (keys, _) = heap.pull();
        assert_eq!(keys, vec![1, 3]);
    }

    #[test]
    fn pull_on_empty_returns_global_bound() {
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(2, 77);
        let (keys, separator) = heap.pull();
        assert!(keys.is_empty());
        assert_eq!(separator, 77);
    }

    #[test]
    fn slots_are_recycled() {
        let mut heap: BlockHeap<usize, u64> = BlockHeap::new(2, 1_000);
        for round in 0..10 {
            for key in 0..6 {
                heap.insert(key, 10 * round + key as u64);
            }
            while !heap.is_empty() {
                heap.pull();
            }
        }
        // Ten rounds over six keys never need more than a dozen-odd slots.
        assert!(heap.nodes.len() <= 12);
        heap.check_invariants();
    }
}
