//! Clue → suspect lookup table: a fixed number of buckets, each
//! holding an owned singly linked chain of entries. Insertion prepends
//! to the chain, so when the same clue is inserted twice the most
//! recent entry wins on lookup; older entries stay in the chain.

/// Bucket count used by the reference game.
pub const DEFAULT_BUCKETS: usize = 10;

#[derive(Debug)]
struct Entry {
    clue: String,
    suspect: String,
    next: Option<Box<Entry>>,
}

#[derive(Debug)]
pub struct SuspectLookup {
    buckets: Vec<Option<Box<Entry>>>,
    len: usize,
}

impl SuspectLookup {
    /// A table with an explicit bucket count. Small counts are useful
    /// in tests to force every key into the same chain.
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket count must be positive");
        Self {
            buckets: (0..bucket_count).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Byte-sum hash reduced modulo the bucket count. Deterministic
    /// and cheap; collisions are expected and resolved by chaining.
    pub fn bucket_of(&self, key: &str) -> usize {
        key.bytes().map(usize::from).sum::<usize>() % self.buckets.len()
    }

    /// Prepends an entry to its bucket's chain. Duplicate clues are
    /// allowed to coexist; no overwrite happens.
    pub fn insert(&mut self, clue: impl Into<String>, suspect: impl Into<String>) {
        let clue = clue.into();
        let bucket = self.bucket_of(&clue);
        let head = self.buckets[bucket].take();
        self.buckets[bucket] = Some(Box::new(Entry {
            clue,
            suspect: suspect.into(),
            next: head,
        }));
        self.len += 1;
    }

    /// First exact-key match in the chain, or `None` if the clue was
    /// never inserted.
    pub fn get(&self, clue: &str) -> Option<&str> {
        let mut cur = self.buckets[self.bucket_of(clue)].as_deref();
        while let Some(entry) = cur {
            if entry.clue == clue {
                return Some(&entry.suspect);
            }
            cur = entry.next.as_deref();
        }
        None
    }

    /// Total entry count across all chains; duplicates count.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for SuspectLookup {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_iff_key_was_inserted() {
        let mut table = SuspectLookup::default();
        table.insert("candelabro fora do lugar", "Mordomo");
        table.insert("pegadas na lama", "Dama_da_noite");
        assert_eq!(table.get("candelabro fora do lugar"), Some("Mordomo"));
        assert_eq!(table.get("pegadas na lama"), Some("Dama_da_noite"));
        assert_eq!(table.get("faca de cozinha"), None);
    }

    #[test]
    fn single_bucket_table_still_resolves_every_key() {
        // One bucket forces every insert into the same chain.
        let mut table = SuspectLookup::new(1);
        table.insert("a", "Mordomo");
        table.insert("b", "Cozinheira");
        table.insert("c", "Jardineiro");
        assert_eq!(table.get("a"), Some("Mordomo"));
        assert_eq!(table.get("b"), Some("Cozinheira"));
        assert_eq!(table.get("c"), Some("Jardineiro"));
        assert_eq!(table.get("d"), None);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn duplicate_keys_coexist_latest_wins() {
        let mut table = SuspectLookup::default();
        table.insert("carta de ameaca", "Jardineiro");
        table.insert("carta de ameaca", "Dama_da_noite");
        assert_eq!(table.get("carta de ameaca"), Some("Dama_da_noite"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn bucket_index_is_byte_sum_modulo_size() {
        let table = SuspectLookup::new(10);
        // 'a' = 97, 'b' = 98
        assert_eq!(table.bucket_of("a"), 7);
        assert_eq!(table.bucket_of("ab"), 5);
        assert_eq!(table.bucket_of(""), 0);
    }
}
