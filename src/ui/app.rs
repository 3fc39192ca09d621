use crate::feed::{FeedState, ItemKey, RenderRequest, Snapshot, SnapshotDiff};
use crate::model::ImageScale;

/// Loading spinner frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Terminal presentation adapter state.
///
/// Holds the last rendered snapshot and the selection cursor. Feed state
/// arrives through [`App::apply_state`]; the adapter never mutates it.
pub struct App {
    should_quit: bool,
    feed: FeedState,
    snapshot: Snapshot,
    selected_section: usize,
    selected_item: usize,
    spinner_tick: usize,
    image_scale: ImageScale,
    feed_url: String,
}

impl App {
    pub fn new(image_scale: ImageScale, feed_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            feed: FeedState::default(),
            snapshot: Snapshot::default(),
            selected_section: 0,
            selected_item: 0,
            spinner_tick: 0,
            image_scale,
            feed_url: feed_url.into(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn image_scale(&self) -> ImageScale {
        self.image_scale
    }

    pub fn set_image_scale(&mut self, scale: ImageScale) {
        self.image_scale = scale;
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    pub fn set_feed_url(&mut self, url: impl Into<String>) {
        self.feed_url = url.into();
    }

    pub fn selected_section(&self) -> usize {
        self.selected_section
    }

    pub fn selected_item(&self) -> usize {
        self.selected_item
    }

    pub fn selected_key(&self) -> Option<&ItemKey> {
        self.snapshot
            .sections()
            .get(self.selected_section)
            .and_then(|section| section.item_keys.get(self.selected_item))
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_tick % SPINNER_FRAMES.len()]
    }

    pub fn on_tick(&mut self) {
        if self.feed.presentation().show_spinner {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Take a new feed state. Re-renders when the state carries a render request.
    pub fn apply_state(&mut self, state: &FeedState) -> Option<SnapshotDiff> {
        self.feed = state.clone();
        state.render_request().map(|request| self.apply_render(request))
    }

    /// Replace the rendered snapshot and keep the selection in range.
    pub fn apply_render(&mut self, request: RenderRequest) -> SnapshotDiff {
        let diff = request.snapshot.diff(&self.snapshot);
        if !diff.is_empty() {
            tracing::debug!(
                inserted_sections = diff.inserted_sections.len(),
                removed_sections = diff.removed_sections.len(),
                inserted_items = diff.inserted_items.len(),
                removed_items = diff.removed_items.len(),
                animate = request.animate,
                "Applying snapshot"
            );
        }
        self.snapshot = request.snapshot;
        self.clamp_selection();
        diff
    }

    pub fn move_section(&mut self, delta: isize) {
        let count = self.snapshot.sections().len();
        self.selected_section = step(self.selected_section, delta, count);
        self.clamp_selection();
    }

    pub fn move_item(&mut self, delta: isize) {
        let count = self.current_item_count();
        self.selected_item = step(self.selected_item, delta, count);
    }

    fn current_item_count(&self) -> usize {
        self.snapshot
            .sections()
            .get(self.selected_section)
            .map_or(0, |section| section.item_keys.len())
    }

    fn clamp_selection(&mut self) {
        let sections = self.snapshot.sections().len();
        self.selected_section = self.selected_section.min(sections.saturating_sub(1));
        let items = self.current_item_count();
        self.selected_item = self.selected_item.min(items.saturating_sub(1));
    }
}

fn step(current: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let max = (count - 1) as isize;
    (current as isize + delta).clamp(0, max) as usize
}
