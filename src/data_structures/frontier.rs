use std::collections::BTreeSet;
use std::fmt::Debug;

/// The set of vertices whose distance is not yet final, ordered by `(key, vertex)`
///
/// Keys are stored alongside each member so that `remove` and re-keying are
/// `O(log n)` without scanning the ordered set. Ties on the key are broken by
/// the smaller vertex index, making the order total.
#[derive(Debug, Clone)]
pub struct Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Members ordered by key, then vertex
    ordered: BTreeSet<(P, usize)>,

    /// Current key of each vertex, `None` when not a member
    keys: Vec<Option<P>>,
}

impl<P> Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty frontier able to hold vertices `0..vertex_count`
    pub fn new(vertex_count: usize) -> Self {
        Frontier {
            ordered: BTreeSet::new(),
            keys: vec![None; vertex_count],
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Returns the number of vertices in the frontier
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns true if `vertex` is currently a member
    pub fn contains(&self, vertex: usize) -> bool {
        matches!(self.keys.get(vertex), Some(Some(_)))
    }

    /// Inserts `vertex` with `key`, re-keying it if already present
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not below the capacity given to [`Frontier::new`].
    pub fn insert(&mut self, vertex: usize, key: P) {
        if let Some(old) = self.keys[vertex].replace(key) {
            self.ordered.remove(&(old, vertex));
        }
        self.ordered.insert((key, vertex));
    }

    /// Removes `vertex`, returning whether it was a member
    pub fn remove(&mut self, vertex: usize) -> bool {
        match self.keys.get_mut(vertex).and_then(Option::take) {
            Some(key) => self.ordered.remove(&(key, vertex)),
            None => false,
        }
    }

    /// Removes and returns the member with the smallest `(key, vertex)`
    pub fn extract_min(&mut self) -> Option<(usize, P)> {
        let (key, vertex) = self.ordered.pop_first()?;
        self.keys[vertex] = None;
        Some((vertex, key))
    }

    /// Returns the member with the smallest `(key, vertex)` without removing it
    pub fn peek_min(&self) -> Option<(usize, P)> {
        self.ordered.first().map(|&(key, vertex)| (vertex, key))
    }
}
