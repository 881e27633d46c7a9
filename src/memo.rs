/// A single-entry cache holding a value derived from a key.  The value is
/// recomputed only when it is requested for a key that differs from the one
/// it was computed from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub(crate) fn new() -> Self {
        Memo { entry: None }
    }

    pub(crate) fn get_or_compute<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        let entry = match self.entry.take() {
            Some((k, v)) if k == key => (k, v),
            _ => {
                let v = compute(&key);
                (key, v)
            }
        };
        &self.entry.insert(entry).1
    }

    pub(crate) fn try_get_or_compute<F, E>(&mut self, key: K, compute: F) -> Result<&V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        let entry = match self.entry.take() {
            Some((k, v)) if k == key => (k, v),
            _ => {
                let v = compute(&key)?;
                (key, v)
            }
        };
        Ok(&self.entry.insert(entry).1)
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Memo::new()
    }
}
