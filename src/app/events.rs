#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    Next,
    Previous,
}

/// Delivered to observers after every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryChange {
    pub previous_index: usize,
    pub current_index: usize,
}
