use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::data::{Watch, WatchId};
use crate::catalog::store::Catalog;

/// What part of the market state just changed.
///
/// Passed to every registered listener after a mutation completes, so
/// observers can decide how much to re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A watch was favorited or unfavorited
    Favorites,
    /// The search query was replaced
    Query,
}

/// A change listener registered via [`MarketState::subscribe`].
pub type Listener = Box<dyn FnMut(Change)>;

/// Mutable market state: which watches are favorited and what the active
/// search text is.
///
/// There is exactly one instance, owned by the application root and
/// mutated only through the methods here. Mutations run synchronously to
/// completion, so listeners always observe a fully consistent state.
/// Nothing is persisted: a fresh process starts with no favorites and an
/// empty query.
///
/// The filtered and favorited views are derived from the catalog on every
/// call rather than cached, so they can never drift from the favorite set
/// or the query.
pub struct MarketState {
    /// The immutable catalog this state is scoped to
    catalog: Arc<Catalog>,
    /// IDs of favorited watches; every member exists in the catalog
    favorites: HashSet<WatchId>,
    /// Current search text; empty means "match everything"
    query: String,
    /// Observers notified after each mutation
    listeners: Vec<Listener>,
}

impl MarketState {
    /// Create fresh state over a catalog: no favorites, empty query.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            favorites: HashSet::new(),
            query: String::new(),
            listeners: Vec::new(),
        }
    }

    /// The catalog this state is scoped to.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Register an observer to be called after every mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }

    /// Favorite the watch if it isn't favorited, unfavorite it if it is.
    ///
    /// Toggling twice restores the original state. An ID that does not
    /// exist in the catalog is ignored: no state change, no notification.
    pub fn toggle_favorite(&mut self, id: WatchId) {
        if !self.catalog.contains(id) {
            eprintln!("⚠️  Ignoring favorite toggle for unknown watch {id}");
            return;
        }

        if !self.favorites.remove(&id) {
            self.favorites.insert(id);
        }

        self.notify(Change::Favorites);
    }

    /// Whether the watch is currently favorited.
    pub fn is_favorite(&self, id: WatchId) -> bool {
        self.favorites.contains(&id)
    }

    /// Number of favorited watches.
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Replace the search query. Empty text matches everything.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.notify(Change::Query);
    }

    /// The active search text.
    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// The watches matching the current query, in catalog order.
    ///
    /// Matching is case-insensitive substring containment against the
    /// watch name. This is a stable filter over the catalog, never a
    /// re-sort.
    pub fn filtered(&self) -> Vec<&Watch> {
        let needle = self.query.to_lowercase();

        self.catalog
            .all()
            .iter()
            .filter(|watch| needle.is_empty() || watch.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The favorited watches, in catalog order. Unaffected by the query.
    pub fn favorited(&self) -> Vec<&Watch> {
        self.catalog
            .all()
            .iter()
            .filter(|watch| self.favorites.contains(&watch.id))
            .collect()
    }
}

impl std::fmt::Debug for MarketState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketState")
            .field("favorites", &self.favorites)
            .field("query", &self.query)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn demo_state() -> MarketState {
        MarketState::new(Arc::new(Catalog::builtin()))
    }

    fn id_of(state: &MarketState, name: &str) -> WatchId {
        state
            .catalog()
            .all()
            .iter()
            .find(|w| w.name == name)
            .map(|w| w.id)
            .unwrap()
    }

    fn names(watches: &[&Watch]) -> Vec<String> {
        watches.iter().map(|w| w.name.clone()).collect()
    }

    #[test]
    fn test_fresh_state_is_empty() {
        let state = demo_state();
        assert_eq!(state.favorite_count(), 0);
        assert_eq!(state.search_query(), "");
        assert!(state.favorited().is_empty());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut state = demo_state();

        for watch in state.catalog().all().to_vec() {
            state.toggle_favorite(watch.id);
            assert!(state.is_favorite(watch.id));

            state.toggle_favorite(watch.id);
            assert!(!state.is_favorite(watch.id));
        }
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut state = demo_state();
        let notified = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&notified);
        state.subscribe(move |_| *counter.borrow_mut() += 1);

        state.toggle_favorite(WatchId(9999));

        assert_eq!(state.favorite_count(), 0);
        assert!(!state.is_favorite(WatchId(9999)));
        assert_eq!(*notified.borrow(), 0);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let mut state = demo_state();
        state.set_search_query("");

        let all: Vec<String> = state.catalog().all().iter().map(|w| w.name.clone()).collect();
        assert_eq!(names(&state.filtered()), all);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_order_preserving() {
        let mut state = demo_state();

        state.set_search_query("cl");
        assert_eq!(names(&state.filtered()), vec!["Classic Leather"]);

        // "e" hits several names; catalog order must survive the filter.
        state.set_search_query("E");
        assert_eq!(
            names(&state.filtered()),
            vec![
                "Elegant Timepiece",
                "Sporty Chrono",
                "Classic Leather",
                "Empty Box",
            ]
        );
    }

    #[test]
    fn test_favorites_are_independent_of_the_query() {
        let mut state = demo_state();
        let sporty = id_of(&state, "Sporty Chrono");
        state.toggle_favorite(sporty);

        for query in ["", "cl", "zzz", "SPORTY"] {
            state.set_search_query(query);
            assert_eq!(names(&state.favorited()), vec!["Sporty Chrono"]);
        }
    }

    #[test]
    fn test_favorited_scenario() {
        let mut state = demo_state();
        let sporty = id_of(&state, "Sporty Chrono");

        state.toggle_favorite(sporty);
        assert_eq!(names(&state.favorited()), vec!["Sporty Chrono"]);

        state.toggle_favorite(sporty);
        assert!(state.favorited().is_empty());
    }

    #[test]
    fn test_favorited_preserves_catalog_order() {
        let mut state = demo_state();
        let classic = id_of(&state, "Classic Leather");
        let elegant = id_of(&state, "Elegant Timepiece");

        // Favorite out of order; the view still follows the catalog.
        state.toggle_favorite(classic);
        state.toggle_favorite(elegant);

        assert_eq!(
            names(&state.favorited()),
            vec!["Elegant Timepiece", "Classic Leather"]
        );
    }

    #[test]
    fn test_listeners_fire_once_per_mutation() {
        let mut state = demo_state();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&changes);
        state.subscribe(move |change| log.borrow_mut().push(change));

        let elegant = id_of(&state, "Elegant Timepiece");
        state.toggle_favorite(elegant);
        state.set_search_query("chrono");
        state.toggle_favorite(elegant);

        assert_eq!(
            *changes.borrow(),
            vec![Change::Favorites, Change::Query, Change::Favorites]
        );
    }
}
