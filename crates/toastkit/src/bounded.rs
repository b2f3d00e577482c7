//! Fixed-capacity ordered list

#[cfg(feature = "serde")]
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// An ordered list that refuses to grow past `N` items.
///
/// Insertion order is preserved; a rejected push leaves the list unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedVec<T, const N: usize> {
    items: Vec<T>,
}

impl<T, const N: usize> BoundedVec<T, N> {
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if self.items.len() >= N {
            return Err(Error::capacity(N, "list"));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= N
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T, const N: usize> Default for BoundedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for BoundedVec<T, N> {
    type Error = Error;

    fn try_from(items: Vec<T>) -> Result<Self> {
        if items.len() > N {
            return Err(Error::capacity(N, "list"));
        }
        Ok(Self { items })
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize, const N: usize> Serialize for BoundedVec<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for BoundedVec<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_push_until_full() {
        let mut list: BoundedVec<u8, 3> = BoundedVec::new();
        for i in 0..3 {
            assert!(list.push(i).is_ok());
        }
        assert!(list.is_full());

        let err = list.push(3).err();
        assert_eq!(
            err.map(|e| e.kind().clone()),
            Some(ErrorKind::CapacityExceeded { max: 3 })
        );
        assert_eq!(list.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_try_from_vec() {
        assert!(BoundedVec::<u8, 2>::try_from(vec![1, 2]).is_ok());
        assert!(BoundedVec::<u8, 2>::try_from(vec![1, 2, 3]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_overflow() {
        let ok: std::result::Result<BoundedVec<u8, 2>, _> = serde_json::from_str("[1,2]");
        assert!(ok.is_ok());
        let overflow: std::result::Result<BoundedVec<u8, 2>, _> = serde_json::from_str("[1,2,3]");
        assert!(overflow.is_err());
    }
}
