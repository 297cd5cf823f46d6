use crate::app::events::{GalleryChange, GalleryEvent};
use crate::app::state::GalleryState;
use crate::catalog::models::{Artwork, ArtworkCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&GalleryChange)>;

/// Owns the current position over a fixed catalog.
pub struct GalleryController {
    catalog: ArtworkCatalog,
    state: GalleryState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl GalleryController {
    pub fn new(catalog: ArtworkCatalog) -> Self {
        Self {
            catalog,
            state: GalleryState::default(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn next(&mut self) {
        let len = self.catalog.len();
        self.transition(|state| state.advanced(len));
    }

    pub fn previous(&mut self) {
        let len = self.catalog.len();
        self.transition(|state| state.retreated(len));
    }

    pub fn current(&self) -> &Artwork {
        &self.catalog[self.state.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn catalog(&self) -> &ArtworkCatalog {
        &self.catalog
    }

    /// One-based position, e.g. "2 / 3".
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.state.current_index + 1, self.catalog.len())
    }

    pub fn dispatch(&mut self, event: GalleryEvent) {
        match event {
            GalleryEvent::Next => self.next(),
            GalleryEvent::Previous => self.previous(),
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&GalleryChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn transition(&mut self, step: impl FnOnce(GalleryState) -> GalleryState) {
        let previous_index = self.state.current_index;
        self.state = step(self.state);
        let change = GalleryChange {
            previous_index,
            current_index: self.state.current_index,
        };
        tracing::debug!(
            from = change.previous_index,
            to = change.current_index,
            "gallery position changed"
        );
        for (_, observer) in &mut self.observers {
            observer(&change);
        }
    }
}
