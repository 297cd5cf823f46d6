#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub current_index: usize,
}

impl GalleryState {
    pub fn advanced(self, len: usize) -> Self {
        Self {
            current_index: (self.current_index + 1) % len,
        }
    }

    pub fn retreated(self, len: usize) -> Self {
        Self {
            current_index: (self.current_index + len - 1) % len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advanced_wraps_at_end() {
        let state = GalleryState { current_index: 2 };
        assert_eq!(state.advanced(3).current_index, 0);
    }

    #[test]
    fn retreated_wraps_at_start() {
        assert_eq!(GalleryState::default().retreated(3).current_index, 2);
    }

    #[test]
    fn single_item_stays_put() {
        let state = GalleryState::default();
        assert_eq!(state.advanced(1), state);
        assert_eq!(state.retreated(1), state);
    }
}
