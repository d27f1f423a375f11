use serde::Deserialize;

/// How receipt ids (`rec-<n>`) are numbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptNumbering {
    /// `n` is the number of live receipts plus one. Deleting receipts lowers
    /// the count, so a number can come back around; when the candidate id is
    /// still live the number is advanced until a free id is found.
    #[default]
    CountBased,
    /// `n` is the number of receipts ever issued plus one. Never reused.
    Sequential,
}

impl ReceiptNumbering {
    /// Pick the next receipt id.
    ///
    /// `live` is the current number of stored receipts, `issued` the number of
    /// receipts issued over the store's lifetime.
    pub(crate) fn next_id(self, live: usize, issued: u64, is_taken: impl Fn(&str) -> bool) -> String {
        let mut n = match self {
            ReceiptNumbering::CountBased => live as u64 + 1,
            ReceiptNumbering::Sequential => issued + 1,
        };

        loop {
            let id = format!("rec-{}", n);
            if !is_taken(&id) {
                return id;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_based_follows_live_count() {
        let id = ReceiptNumbering::CountBased.next_id(0, 0, |_| false);
        assert_eq!(id, "rec-1");

        // rec-1 live, rec-2 deleted: count hands out rec-2 again
        let id = ReceiptNumbering::CountBased.next_id(1, 2, |_| false);
        assert_eq!(id, "rec-2");
    }

    #[test]
    fn test_count_based_skips_live_ids() {
        // rec-2 and rec-3 still live, rec-1 was removed
        let live = ["rec-2", "rec-3"];
        let id = ReceiptNumbering::CountBased.next_id(2, 3, |id| live.contains(&id));
        assert_eq!(id, "rec-4");
    }

    #[test]
    fn test_sequential_ignores_deletions() {
        let id = ReceiptNumbering::Sequential.next_id(1, 5, |_| false);
        assert_eq!(id, "rec-6");
    }
}
