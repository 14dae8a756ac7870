//! Irritants: the group-indexed bitmasks that identify each configurable
//! diagnostic class.
//!
//! An irritant packs its group into the top three bits and a single flag bit
//! into the low 29. An [`IrritantSet`] keeps one word per group.

pub mod tokens;

use std::fmt;

pub const GROUP_SHIFT: u32 = 29;
pub const GROUP_MAX: u32 = 4;
pub const BITS_PER_GROUP: u32 = GROUP_SHIFT;
const BIT_MASK: u32 = (1 << GROUP_SHIFT) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Irritant(u32);

impl Irritant {
    /// `bit` is zero-based and must be below [`BITS_PER_GROUP`].
    pub const fn new(group: u32, bit: u32) -> Self {
        assert!(group < GROUP_MAX && bit < BITS_PER_GROUP);
        Self((group << GROUP_SHIFT) | (1 << bit))
    }

    /// `None` unless `raw` names a group below [`GROUP_MAX`] and exactly one
    /// flag bit.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        if raw >> GROUP_SHIFT >= GROUP_MAX || (raw & BIT_MASK).count_ones() != 1 {
            return None;
        }
        Some(Self(raw))
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn group(self) -> u32 {
        self.0 >> GROUP_SHIFT
    }

    pub const fn mask(self) -> u32 {
        self.0 & BIT_MASK
    }

    /// Zero-based position of the lowest flag bit.
    pub const fn bit(self) -> u32 {
        self.mask().trailing_zeros()
    }

    /// Every `(group, bit)` cell of the grid, declared or not.
    pub fn grid() -> impl Iterator<Item = Irritant> {
        (0..GROUP_MAX)
            .flat_map(|group| (0..BITS_PER_GROUP).map(move |bit| Irritant::new(group, bit)))
    }
}

impl fmt::Display for Irritant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group(), self.bit() + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IrritantSet {
    words: [u32; GROUP_MAX as usize],
}

impl IrritantSet {
    pub const EMPTY: IrritantSet = IrritantSet {
        words: [0; GROUP_MAX as usize],
    };

    pub const fn of(irritants: &[Irritant]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < irritants.len() {
            set = set.with(irritants[i]);
            i += 1;
        }
        set
    }

    pub const fn with(mut self, irritant: Irritant) -> Self {
        self.words[irritant.group() as usize] |= irritant.mask();
        self
    }

    pub fn insert(&mut self, irritant: Irritant) {
        self.words[irritant.group() as usize] |= irritant.mask();
    }

    pub fn remove(&mut self, irritant: Irritant) {
        self.words[irritant.group() as usize] &= !irritant.mask();
    }

    pub fn union(mut self, other: &IrritantSet) -> Self {
        for (word, other) in self.words.iter_mut().zip(other.words) {
            *word |= other;
        }
        self
    }

    pub fn difference(mut self, other: &IrritantSet) -> Self {
        for (word, other) in self.words.iter_mut().zip(other.words) {
            *word &= !other;
        }
        self
    }

    pub const fn contains(&self, irritant: Irritant) -> bool {
        let mask = irritant.mask();
        mask != 0 && self.words[irritant.group() as usize] & mask == mask
    }

    pub fn is_superset(&self, other: &IrritantSet) -> bool {
        self.words
            .iter()
            .zip(other.words)
            .all(|(word, other)| word & other == other)
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// The only member, if there is exactly one.
    pub fn single(&self) -> Option<Irritant> {
        let mut iter = self.iter();
        match (iter.next(), iter.next()) {
            (Some(irritant), None) => Some(irritant),
            _ => None,
        }
    }

    /// Members in `(group, bit)` order.
    pub fn iter(&self) -> impl Iterator<Item = Irritant> + '_ {
        self.words.iter().enumerate().flat_map(|(group, word)| {
            (0..BITS_PER_GROUP)
                .filter(move |bit| *word & (1u32 << *bit) != 0)
                .map(move |bit| Irritant::new(group as u32, bit))
        })
    }
}

impl FromIterator<Irritant> for IrritantSet {
    fn from_iter<I: IntoIterator<Item = Irritant>>(iter: I) -> Self {
        let mut set = IrritantSet::EMPTY;
        for irritant in iter {
            set.insert(irritant);
        }
        set
    }
}

impl fmt::Display for IrritantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|irritant| irritant.to_string()).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

#[cfg(test)]
mod irritant_test;
