use std::collections::BTreeMap;
use std::iter::FromIterator;

/// ## Sparse integer memory
///
/// Every address reads as zero until something is stored there.
/// Reads never create cells.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Memory {
    cells: BTreeMap<i64, i64>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    pub fn fetch(&self, address: i64) -> i64 {
        self.cells.get(&address).copied().unwrap_or(0)
    }

    pub fn store(&mut self, address: i64, value: i64) {
        self.cells.insert(address, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.cells.iter().map(|(address, value)| (*address, *value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(i64, i64)> for Memory {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Memory {
        Memory {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<(i64, i64)> for Memory {
    fn extend<I: IntoIterator<Item = (i64, i64)>>(&mut self, iter: I) {
        self.cells.extend(iter)
    }
}

impl std::fmt::Display for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (address, value) in self.iter() {
            writeln!(f, "{}:{}", address, value)?;
        }
        Ok(())
    }
}
