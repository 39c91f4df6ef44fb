use serde::Serialize;

/// Items per catalog page.
pub const PAGE_SIZE: usize = 6;

/// Maximum visible page buttons.
pub const WINDOW_SIZE: u32 = 5;

pub fn total_pages(filtered_count: usize) -> u32 {
    filtered_count.div_ceil(PAGE_SIZE) as u32
}

/// 1-indexed page cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    current: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    pub fn go_to(&mut self, page: u32) {
        self.current = page.max(1);
    }

    /// Keeps the cursor inside `[1, max(1, total_pages)]`; called after every
    /// recompute of the filtered set.
    pub fn clamp(&mut self, total_pages: u32) {
        self.current = self.current.clamp(1, total_pages.max(1));
    }
}

/// The run of visible page buttons around the cursor, plus whether the
/// first/last edge buttons (and their ellipses) are needed.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PageWindow {
    pub start: u32,
    pub end: u32,
    pub show_first: bool,
    pub leading_ellipsis: bool,
    pub show_last: bool,
    pub trailing_ellipsis: bool,
}

impl PageWindow {
    fn empty() -> Self {
        Self {
            start: 1,
            end: 0,
            show_first: false,
            leading_ellipsis: false,
            show_last: false,
            trailing_ellipsis: false,
        }
    }
}

/// Computes the button window: centered on `current`, clamped to
/// `[1, total_pages]`, widened on the other side at a boundary so it always
/// holds `min(WINDOW_SIZE, total_pages)` entries.
pub fn window(current: u32, total_pages: u32) -> PageWindow {
    if total_pages == 0 {
        return PageWindow::empty();
    }

    let current = current.clamp(1, total_pages);

    let mut start = current.saturating_sub(WINDOW_SIZE / 2).max(1);
    let mut end = start + WINDOW_SIZE - 1;

    if end > total_pages {
        end = total_pages;
        start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
    }

    PageWindow {
        start,
        end,
        show_first: start > 1,
        leading_ellipsis: start > 2,
        show_last: end < total_pages,
        trailing_ellipsis: end + 1 < total_pages,
    }
}
