//! Per-workbook canonical style store.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use log::{debug, trace, warn};

use crate::spec::StyleError;
use crate::style::Style;

/// Handles held by the repository itself for every interned style.
const N_REPOSITORY_HANDLES: usize = 2;

/// Canonicalization store for the styles of one workbook.
///
/// Structurally identical styles collapse to one shared, read-only
/// [`Arc<Style>`]; each distinct style receives the next order id. The store
/// does no locking: `intern` and `remove` take `&mut self`, so a caller that
/// shares one repository across threads must wrap it in its own mutex.
#[derive(Debug, Default)]
pub struct StyleRepository {
    dict_styles_by_fingerprint: HashMap<String, Arc<Style>>,
    dict_styles_by_order_id: BTreeMap<u32, Arc<Style>>,
    n_order_id_next: u32,
}

impl StyleRepository {
    /// Empty repository; the first interned style gets order id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical instance for `style`, interning it when new.
    ///
    /// A style that already carries an order id of this repository with
    /// unchanged content resolves to that entry. A foreign or stale order id
    /// is discarded before lookup.
    pub fn intern(&mut self, mut style: Style) -> Arc<Style> {
        if let Some(n_order_id) = style.order_id() {
            if let Some(style_existing) = self.dict_styles_by_order_id.get(&n_order_id)
                && style_existing.fingerprint_content() == style.fingerprint_content()
            {
                return Arc::clone(style_existing);
            }
            style.clear_order_id();
        }

        let c_fingerprint = style.fingerprint();
        if let Some(style_existing) = self.dict_styles_by_fingerprint.get(&c_fingerprint) {
            trace!(
                "style dedup hit: order_id={:?}",
                style_existing.order_id()
            );
            return Arc::clone(style_existing);
        }

        let n_order_id = self.n_order_id_next;
        self.n_order_id_next += 1;
        style.assign_order_id(n_order_id);

        let style_canonical = Arc::new(style);
        self.dict_styles_by_order_id
            .insert(n_order_id, Arc::clone(&style_canonical));
        debug!("interned style order_id={n_order_id} fingerprint={c_fingerprint}");
        self.dict_styles_by_fingerprint
            .insert(c_fingerprint, Arc::clone(&style_canonical));
        style_canonical
    }

    /// Intern styles in table order.
    ///
    /// Returns one canonical handle per input, so index `i` of the result is
    /// the style of table entry `i`. On a fresh repository, order ids then
    /// reproduce the table's index order.
    pub fn intern_table<I>(&mut self, styles: I) -> Vec<Arc<Style>>
    where
        I: IntoIterator<Item = Style>,
    {
        styles.into_iter().map(|style| self.intern(style)).collect()
    }

    /// All interned styles, ascending by order id.
    pub fn enumerate(&self) -> Vec<Arc<Style>> {
        self.dict_styles_by_order_id.values().cloned().collect()
    }

    /// Borrowing iterator over [`Self::enumerate`].
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Style>> {
        self.dict_styles_by_order_id.values()
    }

    /// Canonical style with `order_id`.
    pub fn get_by_order_id(&self, order_id: u32) -> Option<&Arc<Style>> {
        self.dict_styles_by_order_id.get(&order_id)
    }

    /// Canonical style whose content fingerprint is `fingerprint`.
    pub fn get_by_fingerprint(&self, fingerprint: &str) -> Option<&Arc<Style>> {
        self.dict_styles_by_fingerprint.get(fingerprint)
    }

    /// Whether a structurally identical style is interned.
    pub fn contains(&self, style: &Style) -> bool {
        self.dict_styles_by_fingerprint
            .contains_key(&style.fingerprint_content())
    }

    /// Position of `style` in [`Self::enumerate`] order.
    pub fn position_of(&self, style: &Style) -> Option<usize> {
        let n_order_id = style.order_id()?;
        if !self.dict_styles_by_order_id.contains_key(&n_order_id) {
            return None;
        }
        Some(self.dict_styles_by_order_id.range(..n_order_id).count())
    }

    pub fn len(&self) -> usize {
        self.dict_styles_by_order_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict_styles_by_order_id.is_empty()
    }

    /// Remove an interned style that has no other referents.
    ///
    /// `style` must be the canonical handle returned by this repository and
    /// is consumed, so every handle still alive elsewhere (a cell, a clone
    /// kept by the caller) counts as a referent. Removal is refused with
    /// [`StyleError::StyleStillReferenced`] while any referent exists. Order
    /// ids are never reused.
    pub fn remove(&mut self, style: Arc<Style>) -> Result<(), StyleError> {
        let n_order_id = style.order_id().ok_or(StyleError::StyleNotInterned)?;
        let Some(style_stored) = self.dict_styles_by_order_id.get(&n_order_id) else {
            return Err(StyleError::StyleNotInterned);
        };
        if !Arc::ptr_eq(style_stored, &style) {
            return Err(StyleError::StyleNotInterned);
        }

        let n_referents = Arc::strong_count(&style).saturating_sub(N_REPOSITORY_HANDLES + 1);
        if n_referents > 0 {
            warn!("refusing to remove style order_id={n_order_id}: {n_referents} referent(s)");
            return Err(StyleError::StyleStillReferenced {
                order_id: n_order_id,
                n_referents,
            });
        }

        self.dict_styles_by_order_id.remove(&n_order_id);
        self.dict_styles_by_fingerprint
            .remove(&style.fingerprint_content());
        debug!("removed style order_id={n_order_id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnumBorderStyle, StyleComponent};

    fn derive_bold_style() -> Style {
        let mut style = Style::new();
        style.font.bold = true;
        style
    }

    #[test]
    fn test_intern_dedups_structural_duplicates() {
        let mut repo = StyleRepository::new();
        let style_a = repo.intern(derive_bold_style());
        let style_b = repo.intern(derive_bold_style());

        assert!(Arc::ptr_eq(&style_a, &style_b));
        assert_eq!(style_a.order_id(), Some(0));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.enumerate().len(), 1);
    }

    #[test]
    fn test_order_ids_follow_insertion_order() {
        let mut repo = StyleRepository::new();
        let style_0 = repo.intern(Style::new());
        let style_1 = repo.intern(derive_bold_style());
        let mut style_border = Style::new();
        style_border.border.top_style = EnumBorderStyle::Thin;
        let style_2 = repo.intern(style_border);

        let l_order_ids: Vec<Option<u32>> =
            repo.enumerate().iter().map(|style| style.order_id()).collect();
        assert_eq!(l_order_ids, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(repo.position_of(&style_0), Some(0));
        assert_eq!(repo.position_of(&style_2), Some(2));
        assert_eq!(
            repo.get_by_order_id(1).map(|style| style.fingerprint()),
            Some(style_1.fingerprint())
        );
    }

    #[test]
    fn test_reinterning_canonical_clone_returns_same_entry() {
        let mut repo = StyleRepository::new();
        let style = repo.intern(derive_bold_style());
        let style_again = repo.intern((*style).clone());

        assert!(Arc::ptr_eq(&style, &style_again));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_stale_order_id_is_discarded() {
        let mut repo_other = StyleRepository::new();
        repo_other.intern(Style::new());
        let style_foreign = repo_other.intern(derive_bold_style());

        let mut repo = StyleRepository::new();
        let style = repo.intern((*style_foreign).clone());
        assert_eq!(style.order_id(), Some(0));
    }

    #[test]
    fn test_lookup_by_fingerprint_and_contains() {
        let mut repo = StyleRepository::new();
        let style = repo.intern(derive_bold_style());

        assert!(repo.contains(&derive_bold_style()));
        assert!(!repo.contains(&Style::new()));
        let style_found = repo
            .get_by_fingerprint(&derive_bold_style().fingerprint())
            .unwrap();
        assert!(Arc::ptr_eq(style_found, &style));
    }

    #[test]
    fn test_remove_requires_no_other_referents() {
        let mut repo = StyleRepository::new();
        let style = repo.intern(derive_bold_style());
        let style_cell_ref = Arc::clone(&style);

        let err = repo.remove(Arc::clone(&style)).unwrap_err();
        assert_eq!(
            err,
            StyleError::StyleStillReferenced {
                order_id: 0,
                n_referents: 2
            }
        );
        assert_eq!(repo.len(), 1);

        drop(style_cell_ref);
        repo.remove(style).unwrap();
        assert!(repo.is_empty());
        assert!(!repo.contains(&derive_bold_style()));

        let style_next = repo.intern(derive_bold_style());
        assert_eq!(style_next.order_id(), Some(1));
    }

    #[test]
    fn test_remove_rejects_foreign_styles() {
        let mut repo = StyleRepository::new();
        repo.intern(Style::new());

        let style_unowned = Arc::new(Style::new());
        assert_eq!(
            repo.remove(style_unowned).unwrap_err(),
            StyleError::StyleNotInterned
        );

        let mut repo_other = StyleRepository::new();
        let style_foreign = repo_other.intern(Style::new());
        assert_eq!(
            repo.remove(style_foreign).unwrap_err(),
            StyleError::StyleNotInterned
        );
    }

    #[test]
    fn test_intern_table_reproduces_index_order() {
        let mut style_date = Style::new();
        style_date
            .number_format
            .set_number(crate::EnumFormatNumber::Builtin(14))
            .unwrap();
        let l_table = vec![Style::new(), derive_bold_style(), style_date];

        let mut repo = StyleRepository::new();
        let l_handles = repo.intern_table(l_table);
        for (n_idx, style) in l_handles.iter().enumerate() {
            assert_eq!(style.order_id(), Some(n_idx as u32));
        }
        assert!(l_handles[2].number_format.is_date_format());
        assert_eq!(l_handles[0].font.fingerprint(), crate::Font::default().fingerprint());
    }
}
