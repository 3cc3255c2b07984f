/// Single-choice marker over a group of sibling items.
///
/// Selecting an item implicitly clears whichever sibling held the mark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection<K> {
    current: Option<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: PartialEq> Selection<K> {
    pub fn with_selected(key: K) -> Self {
        Self { current: Some(key) }
    }

    pub fn select(&mut self, key: K) {
        self.current = Some(key);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.current.as_ref() == Some(key)
    }

    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_clears_siblings() {
        let mut selection = Selection::with_selected(0usize);
        selection.select(2);

        let marked: Vec<usize> = (0..4).filter(|i| selection.is_selected(i)).collect();
        assert_eq!(marked, vec![2]);
    }

    #[test]
    fn test_reselecting_keeps_single_mark() {
        let mut selection = Selection::default();
        selection.select("pro");
        selection.select("pro");
        assert_eq!(selection.current(), Some(&"pro"));
        assert!(!selection.is_selected(&"free"));
    }

    #[test]
    fn test_clear_unmarks_everything() {
        let mut selection = Selection::with_selected(1u8);
        selection.clear();
        assert_eq!(selection.current(), None);
        assert!(!(0..3u8).any(|i| selection.is_selected(&i)));
    }
}
