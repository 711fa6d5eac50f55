#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationManager {
    images: Vec<String>,
    current_index: usize,
}

impl NavigationManager {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            current_index: 0,
        }
    }

    /// Jumps straight to `index`, clamped to the last image.
    pub fn select(&mut self, index: usize) -> bool {
        if self.images.is_empty() {
            return false;
        }
        let index = index.min(self.images.len() - 1);
        let changed = index != self.current_index;
        self.current_index = index;
        changed
    }

    pub fn next(&mut self) -> bool {
        let len = self.images.len();
        if len == 0 {
            return false;
        }
        let previous = self.current_index;
        self.current_index = (self.current_index + 1) % len;
        previous != self.current_index
    }

    pub fn previous(&mut self) -> bool {
        let len = self.images.len();
        if len == 0 {
            return false;
        }
        let previous = self.current_index;
        self.current_index = (self.current_index + len - 1) % len;
        previous != self.current_index
    }

    pub fn can_navigate(&self) -> bool {
        self.images.len() > 1
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn total_images(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    Select(usize),
    Advance,
    Retreat,
    OpenOverlay(usize),
    CloseOverlay,
}

/// Shared state behind both the inline slider and the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    navigation: NavigationManager,
    overlay: OverlayState,
}

impl GalleryState {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            navigation: NavigationManager::new(images),
            overlay: OverlayState::Closed,
        }
    }

    pub fn select(&mut self, index: usize) -> bool {
        self.navigation.select(index)
    }

    pub fn advance(&mut self) -> bool {
        self.navigation.next()
    }

    pub fn retreat(&mut self) -> bool {
        self.navigation.previous()
    }

    /// Sets the index and opens the overlay in a single update.
    pub fn open_overlay(&mut self, index: usize) -> bool {
        if self.navigation.is_empty() {
            return false;
        }
        let moved = self.navigation.select(index);
        let opened = self.overlay == OverlayState::Closed;
        self.overlay = OverlayState::Open;
        moved || opened
    }

    /// Closes the overlay, keeping the index so reopening resumes there.
    pub fn close_overlay(&mut self) -> bool {
        let was_open = self.overlay == OverlayState::Open;
        self.overlay = OverlayState::Closed;
        was_open
    }

    pub fn apply(&mut self, action: GalleryAction) -> bool {
        let changed = match action {
            GalleryAction::Select(index) => self.select(index),
            GalleryAction::Advance => self.advance(),
            GalleryAction::Retreat => self.retreat(),
            GalleryAction::OpenOverlay(index) => self.open_overlay(index),
            GalleryAction::CloseOverlay => self.close_overlay(),
        };
        tracing::trace!(?action, changed, index = self.current_index(), overlay = ?self.overlay, "gallery action");
        changed
    }

    pub fn current_index(&self) -> usize {
        self.navigation.current_index()
    }

    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    pub fn is_open(&self) -> bool {
        self.overlay == OverlayState::Open
    }

    pub fn navigation(&self) -> &NavigationManager {
        &self.navigation
    }
}
