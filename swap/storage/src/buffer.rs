use {
    crate::{Batch, Op, Order, Record, Storage},
    std::{
        cmp::Ordering,
        iter::{self, Peekable},
        ops::Bound,
    },
};

/// Pending writes layered over a base store.
///
/// Reads see the pending writes first. Nothing reaches the base store until
/// [`Buffer::commit`]; dropping the buffer discards every pending op.
pub struct Buffer<S> {
    base: S,
    pending: Batch,
}

impl<S> Buffer<S>
where
    S: Storage,
{
    pub fn new(base: S) -> Self {
        Self {
            base,
            pending: Batch::new(),
        }
    }

    /// Write every pending op through to the base store.
    pub fn commit(mut self) {
        self.base.flush(self.pending);
    }
}

impl<S> Storage for Buffer<S>
where
    S: Storage,
{
    fn read(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.pending.get(key) {
            Some(Op::Insert(value)) => Some(value.clone()),
            Some(Op::Delete) => None,
            None => self.base.read(key),
        }
    }

    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        if matches!((min, max), (Some(min), Some(max)) if min > max) {
            return Box::new(iter::empty());
        }

        let lower = min.map_or(Bound::Unbounded, |min| Bound::Included(min.to_vec()));
        let upper = max.map_or(Bound::Unbounded, |max| Bound::Excluded(max.to_vec()));
        let pending = self.pending.range((lower, upper));

        let base = self.base.scan(min, max, order);

        match order {
            Order::Ascending => Box::new(Overlay::new(base, pending, order)),
            Order::Descending => Box::new(Overlay::new(base, pending.rev(), order)),
        }
    }

    fn write(&mut self, key: &[u8], value: &[u8]) {
        self.pending.insert(key.to_vec(), Op::Insert(value.to_vec()));
    }

    fn remove(&mut self, key: &[u8]) {
        self.pending.insert(key.to_vec(), Op::Delete);
    }

    fn flush(&mut self, batch: Batch) {
        // Later ops win over earlier ones on the same key.
        self.pending.extend(batch);
    }
}

/// Walks the base records and the pending ops side by side in key order. A
/// pending op shadows the base record under the same key.
struct Overlay<'a, B, P>
where
    B: Iterator<Item = Record>,
    P: Iterator<Item = (&'a Vec<u8>, &'a Op)>,
{
    base: Peekable<B>,
    pending: Peekable<P>,
    order: Order,
}

impl<'a, B, P> Overlay<'a, B, P>
where
    B: Iterator<Item = Record>,
    P: Iterator<Item = (&'a Vec<u8>, &'a Op)>,
{
    fn new(base: B, pending: P, order: Order) -> Self {
        Self {
            base: base.peekable(),
            pending: pending.peekable(),
            order,
        }
    }

    /// Which side holds the next key in iteration order. `Equal` means both
    /// do, in which case the pending op decides.
    fn next_side(&mut self) -> Option<Ordering> {
        match (self.base.peek(), self.pending.peek()) {
            (Some((base_key, _)), Some((pending_key, _))) => {
                let ordering = base_key.cmp(pending_key);
                Some(match self.order {
                    Order::Ascending => ordering,
                    Order::Descending => ordering.reverse(),
                })
            },
            (Some(_), None) => Some(Ordering::Less),
            (None, Some(_)) => Some(Ordering::Greater),
            (None, None) => None,
        }
    }
}

impl<'a, B, P> Iterator for Overlay<'a, B, P>
where
    B: Iterator<Item = Record>,
    P: Iterator<Item = (&'a Vec<u8>, &'a Op)>,
{
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_side()? {
                Ordering::Less => return self.base.next(),
                Ordering::Equal => {
                    self.base.next();
                },
                Ordering::Greater => {},
            }

            match self.pending.next()? {
                (key, Op::Insert(value)) => return Some((key.clone(), value.clone())),
                (_, Op::Delete) => continue,
            }
        }
    }
}

// ----------------------------------- tests -----------------------------------
