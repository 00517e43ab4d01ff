mod error;

pub use error::{Error, Result};

pub mod int_long_map {

    use crate::error::{Error, Result};
    use std::mem;

    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
    enum Bucket {
        #[default]
        Empty,
        Occupied {
            // home bucket of `key` for the current capacity
            hash: usize,
            key: i32,
            value: i64,
        },
    }

    /// An open addressing hash map from `i32` keys to `i64` values with linear probing.
    ///
    /// The table starts with 16 buckets and grows by a factor of 1.5 as soon as a new key
    /// arrives while three quarters of the buckets are taken. Entries are never removed, so
    /// probe sequences need no tombstones.
    #[derive(Debug, Clone)]
    pub struct IntLongMap {
        count: usize,
        buckets: Vec<Bucket>,
    }

    impl Default for IntLongMap {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IntLongMap {
        pub const DEFAULT_CAPACITY: usize = 1 << 4;
        pub const MAX_CAPACITY: usize = i32::MAX as usize;

        /// Calculates the home bucket of `key`.
        ///
        /// This is `key mod capacity` using the Euclidean remainder, so negative keys map into
        /// `0..capacity` the same way for `put`, `get` and rehashing. For non-negative keys it
        /// is the plain remainder.
        fn hash(key: i32, capacity: usize) -> usize {
            (key as i64).rem_euclid(capacity as i64) as usize
        }

        /// Is the load factor greater than or equal to 0.75?
        ///
        /// `capacity - capacity / 4` is `ceil(0.75 * capacity)`, and for an integral count
        /// `count >= 0.75 * capacity` holds exactly when `count >= ceil(0.75 * capacity)`.
        fn should_grow(&self) -> bool {
            self.count >= self.capacity() - (self.capacity() >> 2)
        }

        /// Capacity of the table that replaces one of `capacity` buckets: `floor(capacity * 1.5)`,
        /// saturated at `max_capacity`.
        pub(crate) fn grown_capacity(capacity: usize, max_capacity: usize) -> Result<usize> {
            if capacity >= max_capacity {
                return Err(Error::CapacityOverflow { capacity });
            }
            Ok(capacity.saturating_add(capacity >> 1).min(max_capacity))
        }

        /// Walks the linear probe sequence of `key` and returns the index of the first bucket
        /// that is either empty or holds `key`.
        ///
        /// The table must contain at least one empty bucket, otherwise a missing key is never
        /// found. The growth policy keeps a quarter of the buckets empty.
        fn probe(buckets: &[Bucket], key: i32) -> usize {
            let capacity: usize = buckets.len();
            let mut i: usize = Self::hash(key, capacity);
            loop {
                match buckets[i] {
                    Bucket::Occupied { key: k, .. } if k != key => i = (i + 1) % capacity,
                    _ => return i,
                }
            }
        }

        fn occupy(buckets: &mut [Bucket], i: usize, key: i32, value: i64) {
            buckets[i] = Bucket::Occupied {
                hash: Self::hash(key, buckets.len()),
                key,
                value,
            };
        }

        /// Creates an empty map with `DEFAULT_CAPACITY` buckets.
        pub fn new() -> IntLongMap {
            IntLongMap {
                count: 0,
                buckets: vec![Bucket::Empty; Self::DEFAULT_CAPACITY],
            }
        }

        /// Returns the number of entries as the signed 32-bit count used by the map's API.
        pub fn size(&self) -> i32 {
            // count <= ceil(0.75 * MAX_CAPACITY), so it always fits
            self.count as i32
        }

        pub fn len(&self) -> usize {
            self.count
        }

        pub fn is_empty(&self) -> bool {
            self.count == 0
        }

        pub fn capacity(&self) -> usize {
            self.buckets.len()
        }

        pub fn load_factor(&self) -> f64 {
            self.count as f64 / self.capacity() as f64
        }

        /// Returns the value stored for `key`, if any.
        pub fn get(&self, key: i32) -> Option<i64> {
            match self.buckets[Self::probe(&self.buckets, key)] {
                Bucket::Occupied { value, .. } => Some(value),
                Bucket::Empty => None,
            }
        }

        pub fn contains_key(&self, key: i32) -> bool {
            self.get(key).is_some()
        }

        /// Associates `value` with `key` and returns the value it replaced.
        ///
        /// # Panics
        ///
        /// Panics if the table has to grow beyond `MAX_CAPACITY` buckets or the allocation of
        /// the grown table fails. Use [`IntLongMap::try_put`] to handle those cases.
        pub fn put(&mut self, key: i32, value: i64) -> Option<i64> {
            match self.try_put(key, value) {
                Ok(previous) => previous,
                Err(e) => panic!("{}", e),
            }
        }

        /// Associates `value` with `key` and returns the value it replaced.
        ///
        /// Updating a present key never grows the table. A new key grows it first when the
        /// load factor has reached 0.75. If growing fails the map is left untouched and the
        /// key is not inserted.
        pub fn try_put(&mut self, key: i32, value: i64) -> Result<Option<i64>> {
            self.try_put_within(key, value, Self::MAX_CAPACITY)
        }

        fn try_put_within(
            &mut self,
            key: i32,
            value: i64,
            max_capacity: usize,
        ) -> Result<Option<i64>> {
            let mut i: usize = Self::probe(&self.buckets, key);
            if let Bucket::Occupied { value: v, .. } = &mut self.buckets[i] {
                return Ok(Some(mem::replace(v, value)));
            }
            if self.should_grow() {
                self.grow_to(Self::grown_capacity(self.capacity(), max_capacity)?)?;
                i = Self::probe(&self.buckets, key);
            }
            Self::occupy(&mut self.buckets, i, key, value);
            self.count += 1;
            Ok(None)
        }

        /// Rebuilds the table with `new_capacity` buckets.
        ///
        /// Every entry is placed again by probing against the new capacity. The new table only
        /// replaces the old one once it holds all of the entries.
        fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
            let mut buckets: Vec<Bucket> = Vec::new();
            buckets
                .try_reserve_exact(new_capacity)
                .map_err(|source| Error::AllocFailed {
                    capacity: new_capacity,
                    source,
                })?;
            buckets.resize(new_capacity, Bucket::Empty);

            // keys in the old table are distinct, so each probe ends on an empty bucket
            let mut count: usize = 0;
            for bucket in self.buckets.iter() {
                if let Bucket::Occupied { key, value, .. } = *bucket {
                    let i: usize = Self::probe(&buckets, key);
                    Self::occupy(&mut buckets, i, key, value);
                    count += 1;
                }
            }

            self.buckets = buckets;
            self.count = count;
            Ok(())
        }
    }

}
