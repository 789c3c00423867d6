use std::collections::HashMap;

use log::trace;

use crate::game_repr::Move;

/// How a stored score relates to the true value of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Every move was searched inside the window
    Exact,
    /// Fail-low: the true score is at most the stored one
    UpperBound,
    /// Fail-high: the true score is at least the stored one
    LowerBound,
}

/// Entry in the transposition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionEntry {
    /// Zobrist key of the position
    pub hash: u64,
    /// Remaining depth the score was searched to
    pub depth: u8,
    pub score: i32,
    pub bound: Bound,
    /// Move to try first when the position comes up again
    pub best_move: Option<Move>,
}

/// Search results keyed by Zobrist hash.
///
/// Owned by one search and cleared when it starts, so entries never outlive
/// the position they were computed for.
pub struct TranspositionTable {
    table: HashMap<u64, TranspositionEntry>,
    max_size: usize,
    pub hits: u64,
    pub misses: u64,
}

impl TranspositionTable {
    /// Table with the default limit of one million entries
    pub fn new() -> Self {
        Self::with_capacity(1_000_000)
    }

    /// Table that stops accepting new positions once it holds `max_size`
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            table: HashMap::with_capacity(max_size.min(100_000)),
            max_size,
            hits: 0,
            misses: 0,
        }
    }

    pub fn probe(&mut self, hash: u64) -> Option<TranspositionEntry> {
        match self.table.get(&hash) {
            Some(entry) => {
                self.hits += 1;
                Some(*entry)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Stores `entry` unless it would overwrite a deeper result for the same
    /// position. An exact score always replaces a bound. When the table is full
    /// only positions already present are updated.
    pub fn store(&mut self, entry: TranspositionEntry) {
        match self.table.get(&entry.hash) {
            Some(existing) => {
                let replace = entry.depth >= existing.depth
                    || (entry.bound == Bound::Exact && existing.bound != Bound::Exact);
                if !replace {
                    return;
                }
            }
            None if self.table.len() >= self.max_size => return,
            None => {}
        }

        self.table.insert(entry.hash, entry);
    }

    /// Drops every entry and resets the statistics
    pub fn clear(&mut self) {
        if !self.table.is_empty() {
            trace!(
                "TT cleared: {} entries, {} hits, {} misses ({:.1}% hit rate)",
                self.table.len(),
                self.hits,
                self.misses,
                self.hit_rate() * 100.0
            );
        }
        self.table.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Fraction of probes that found an entry (0.0 to 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}
