//! Compact set over the closed [`Category`] enumeration.

use catalog::Category;

/// Bitset keyed by `Category::index()`.
///
/// Iteration follows the fixed `Category::ALL` ordering regardless of
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategorySet {
    bits: u8,
}

impl CategorySet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub const fn all() -> Self {
        Self {
            bits: (1 << Category::COUNT) - 1,
        }
    }

    pub const fn contains(self, category: Category) -> bool {
        self.bits & (1 << category.index()) != 0
    }

    /// Returns `true` if the set changed.
    pub fn insert(&mut self, category: Category) -> bool {
        let mask = 1 << category.index();
        let changed = self.bits & mask == 0;
        self.bits |= mask;
        changed
    }

    /// Returns `true` if the set changed.
    pub fn remove(&mut self, category: Category) -> bool {
        let mask = 1 << category.index();
        let changed = self.bits & mask != 0;
        self.bits &= !mask;
        changed
    }

    pub fn toggle(&mut self, category: Category) {
        self.bits ^= 1 << category.index();
    }

    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub const fn is_all(self) -> bool {
        self.bits == Self::all().bits
    }

    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL
            .into_iter()
            .filter(move |category| self.contains(*category))
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = Self::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::CategorySet;
    use catalog::Category;

    #[test]
    fn empty_all_and_len() {
        assert_eq!(CategorySet::empty().len(), 0);
        assert!(CategorySet::empty().is_empty());
        assert_eq!(CategorySet::all().len(), Category::COUNT);
        assert!(CategorySet::all().is_all());
    }

    #[test]
    fn insert_remove_report_changes() {
        let mut set = CategorySet::empty();
        assert!(set.insert(Category::Nature));
        assert!(!set.insert(Category::Nature));
        assert!(set.contains(Category::Nature));
        assert!(set.remove(Category::Nature));
        assert!(!set.remove(Category::Nature));
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut set = CategorySet::all();
        let before = set;
        set.toggle(Category::Historic);
        assert!(!set.contains(Category::Historic));
        set.toggle(Category::Historic);
        assert_eq!(set, before);
    }

    #[test]
    fn iteration_follows_display_order() {
        let set: CategorySet = [Category::Landmark, Category::Historic, Category::Nature]
            .into_iter()
            .collect();
        let got: Vec<Category> = set.iter().collect();
        assert_eq!(
            got,
            vec![Category::Historic, Category::Nature, Category::Landmark]
        );
    }
}
