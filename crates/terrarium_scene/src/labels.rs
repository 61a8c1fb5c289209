use std::collections::HashMap;

/// Per-base-name counters used to de-duplicate display labels.
///
/// Counters only grow, so a suffix is never handed out twice even after
/// the node that carried it is gone.
#[derive(Debug, Default, Clone)]
pub struct LabelAllocator {
    counts: HashMap<String, u32>,
}

impl LabelAllocator {
    /// Returns `base` for the first use, then `"base #2"`, `"base #3"`, ...
    pub fn allocate(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_owned()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base.to_owned()
        } else {
            format!("{base} #{count}")
        }
    }

    /// Number of labels handed out so far for `base`.
    pub fn issued(&self, base: &str) -> u32 {
        self.counts.get(base).copied().unwrap_or(0)
    }
}
