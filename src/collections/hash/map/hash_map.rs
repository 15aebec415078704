use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;
use std::ops::Index;

use super::{IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::collections::contiguous::{Array, Vector};
use crate::collections::linked::LinkedList;
use crate::util::capacity::{self, DEFAULT_CAP};
use crate::util::error::KeyNotFound;
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map of keys to values which relies on the keys implementing [`Hash`].
///
/// Every key belongs to the bucket at `hash(key) % cap`. Keys which land in the same bucket are
/// chained together in a [`LinkedList`], and compared with [`Eq`] to tell them apart. Once the map
/// holds more than 3/4 of an entry per bucket, the next insertion first rehashes every entry into a
/// bucket array grown by the same rule as [`Vector`](crate::collections::contiguous::Vector).
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
///
/// \* Each lookup walks the chain of its bucket. The load factor keeps the average chain short, but
/// keys with colliding hashes all share one chain.
///
/// \** If the HashMap is over its load factor, `insert` will rehash every entry first, taking
/// `O(n)`. \* applies as well.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Array<Bucket<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Bucket<K, V> = LinkedList<(K, V)>;

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new HashMap with [`DEFAULT_CAP`] buckets and the default value for `B`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::HashMap;
    /// let mut map: HashMap<&str, i32> = HashMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    /// map.insert("a", 3);
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("a"), Some(&3));
    /// assert_eq!(map.get("c"), None);
    /// ```
    pub fn new() -> HashMap<K, V, B> {
        HashMap::with_cap(DEFAULT_CAP)
    }

    /// Creates a new HashMap with `cap` buckets (at least one) and the default hasher. Empty
    /// buckets don't allocate.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(cap, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new HashMap with [`DEFAULT_CAP`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap::with_cap_and_hasher(DEFAULT_CAP, hasher)
    }

    /// Creates a new HashMap with `cap` buckets (at least one) and the provided `hasher`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashMap<K, V, B> {
        HashMap {
            // A bucket index can't be calculated without any buckets.
            buckets: Array::repeat_default(cap.max(1)),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets in the HashMap.
    pub const fn cap(&self) -> usize {
        self.buckets.size
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, rehashing into more buckets first
    /// if the map is over its load factor. If the key was already associated with a value, that
    /// value is replaced and returned, and the length doesn't change.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.should_grow() {
            self.rehash();
        }

        self.insert_unchecked(key, value)
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q is a borrowed form of K, for which equality and hashing carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)]
            .find(|(k, _)| key.eq(k.borrow()))
            .map(|(k, v)| (k, v))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a reference to the value associated with the provided `key`, or a [`KeyNotFound`]
    /// error if there isn't one.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::HashMap;
    /// # use basic_collections::collections::KeyNotFound;
    /// let map: HashMap<_, _> = [(1, "one")].into_iter().collect();
    /// assert_eq!(map.try_get(&1), Ok(&"one"));
    /// assert_eq!(map.try_get(&2), Err(KeyNotFound));
    /// ```
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);

        self.buckets[index]
            .find_mut(|(k, _)| key.eq(k.borrow()))
            .map(|(_, v)| v)
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);

        let removed = self.buckets[index].remove_matching(|(k, _)| key.eq(k.borrow()))?;
        self.len -= 1;
        Some(removed)
    }

    /// Removes the entry associated with `key`, returning the value if it exists. The length is
    /// only decremented if an entry was removed.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry associated with `key` and returns its value, or a [`KeyNotFound`] error
    /// if there is no such entry.
    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).ok_or(KeyNotFound)
    }

    /// Removes every entry and returns the HashMap to [`DEFAULT_CAP`] buckets, keeping the hasher.
    pub fn clear(&mut self) {
        self.buckets = Array::repeat_default(DEFAULT_CAP);
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all key-value pairs in the HashMap, with mutable references to the
    /// values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the HashMap's length exceeds the load factor, suggesting that it should
    /// rehash before inserting new entries.
    pub(crate) const fn should_grow(&self) -> bool {
        self.len.saturating_mul(LOAD_FACTOR_DENOMINATOR)
            > self.buckets.size.saturating_mul(LOAD_FACTOR_NUMERATOR)
    }

    /// Moves every entry into a new bucket array, grown by the shared capacity rule. If the bucket
    /// array can't grow any further, nothing happens and the chains keep growing instead.
    pub(crate) fn rehash(&mut self) {
        let Ok(new_cap) = capacity::grown_cap(self.cap(), capacity::max_cap::<Bucket<K, V>>())
        else {
            return;
        };

        // Replace the Array first so that we can consume the old Array.
        let old_buckets = mem::replace(&mut self.buckets, Array::repeat_default(new_cap));
        self.len = 0;

        for (key, value) in old_buckets.into_iter().flatten() {
            self.insert_unchecked(key, value);
        }
    }

    /// Inserts the provided `key`-`value` pair without checking the load factor.
    pub(crate) fn insert_unchecked(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        match bucket.find_mut(|(k, _)| *k == key) {
            Some((_, existing)) => Some(mem::replace(existing, value)),
            None => {
                bucket.push_back((key, value));
                self.len += 1;
                None
            },
        }
    }

    /// Calculates the index of the bucket which holds `hashable`. Hashes are unsigned, so the
    /// remainder is always a valid index.
    pub(crate) fn bucket_index<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        let hash = self.hasher.hash_one(hashable);
        // The cap is never 0 and fits in a u64, so the remainder fits in a usize.
        (hash % self.cap() as u64) as usize
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K, V, B, Q> Index<&Q> for HashMap<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics with [`KeyNotFound`] if the map doesn't contain `key`. See [`HashMap::try_get`].
    #[track_caller]
    fn index(&self, key: &Q) -> &Self::Output {
        self.try_get(key).throw()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        HashMap {
            buckets: self.buckets.clone(),
            len: self.len,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.buckets.iter()
            .map(|chain| match chain.is_empty() {
                true => DebugRaw("-".into()),
                false => DebugRaw(
                    chain.iter()
                        .map(|(k, v)| format!("({k:?}: {v:?})"))
                        .collect::<Vector<_>>()
                        .join(" -> ")
                ),
            })
            .collect::<Vector<_>>();

        f.debug_struct("HashMap")
            .field("buckets", &&*buckets)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
