use pinboard_types::DataItem;

/// Read-only, single-pass snapshot of board items.
///
/// The snapshot is materialized at the moment of the call, under the board
/// lock: later board mutation does not affect an iterator already obtained.
/// The iterator yields owned copies, so there is no way to remove or mutate
/// stored items through it.
#[derive(Debug)]
pub struct BoardIter {
    inner: std::vec::IntoIter<DataItem>,
}

impl BoardIter {
    pub(crate) fn new(items: Vec<DataItem>) -> Self {
        Self {
            inner: items.into_iter(),
        }
    }
}

impl Iterator for BoardIter {
    type Item = DataItem;

    fn next(&mut self) -> Option<DataItem> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for BoardIter {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Order a snapshot by non-increasing like count.
///
/// The sort is stable and the input arrives in board-wide insertion order,
/// so items with equal like counts stay in insertion order.
pub(crate) fn order_by_likes(mut items: Vec<DataItem>) -> Vec<DataItem> {
    items.sort_by(|a, b| b.like_count().cmp(&a.like_count()));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinboard_types::ItemId;

    fn liked(id: u64, names: &[&str]) -> DataItem {
        let mut item = DataItem::new(id, "x");
        for name in names {
            item.insert_like(*name);
        }
        item
    }

    #[test]
    fn orders_by_descending_like_count() {
        let items = vec![
            liked(1, &[]),
            liked(2, &["a", "b", "c"]),
            liked(3, &["a"]),
            liked(4, &["a", "b"]),
        ];
        let ordered = order_by_likes(items);
        let ids: Vec<ItemId> = ordered.iter().map(DataItem::id).collect();
        assert_eq!(ids, vec![ItemId(2), ItemId(4), ItemId(3), ItemId(1)]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let items = vec![
            liked(1, &["a"]),
            liked(2, &["b"]),
            liked(3, &[]),
            liked(4, &["c"]),
        ];
        let ordered = order_by_likes(items);
        let ids: Vec<ItemId> = ordered.iter().map(DataItem::id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(2), ItemId(4), ItemId(3)]);
    }

    #[test]
    fn iterator_is_exact_size_and_single_pass() {
        let mut iter = BoardIter::new(vec![liked(1, &[]), liked(2, &[])]);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next().unwrap().id(), ItemId(1));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next().unwrap().id(), ItemId(2));
        assert!(iter.next().is_none());
    }
}
