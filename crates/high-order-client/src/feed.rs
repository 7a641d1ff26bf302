//! Paged list backing the feed demo.

/// One row of the feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedItem {
    /// 1-based position in the feed.
    pub id: u32,
    /// Display text.
    pub title: String,
}

/// A finite list revealed one page at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feed {
    items: Vec<FeedItem>,
    page_size: u32,
    total: u32,
    pages_loaded: u32,
}

impl Feed {
    /// Empty feed of `total` rows served `page_size` at a time (at least one).
    #[must_use]
    pub fn with_page_size(page_size: u32, total: u32) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            total,
            pages_loaded: 0,
        }
    }

    /// Appends the next page and returns how many rows were added.
    pub fn load_next_page(&mut self) -> usize {
        let start = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        let end = start.saturating_add(self.page_size).min(self.total);
        if start >= end {
            return 0;
        }
        self.items.extend((start + 1..=end).map(|id| FeedItem {
            id,
            title: format!("Entry #{id}"),
        }));
        self.pages_loaded += 1;
        (start..end).len()
    }

    /// Whether every row has been revealed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.items.len() >= self.total as usize
    }

    /// Rows revealed so far.
    #[must_use]
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    /// Number of pages appended so far.
    #[must_use]
    pub const fn pages_loaded(&self) -> u32 {
        self.pages_loaded
    }
}

#[cfg(test)]
mod tests {
    use super::Feed;

    #[test]
    fn pages_append_until_exhausted() {
        let mut feed = Feed::with_page_size(20, 50);
        assert!(feed.items().is_empty());

        assert_eq!(feed.load_next_page(), 20);
        assert_eq!(feed.load_next_page(), 20);
        assert!(!feed.is_exhausted());
        assert_eq!(feed.load_next_page(), 10);
        assert!(feed.is_exhausted());
        assert_eq!(feed.load_next_page(), 0);

        assert_eq!(feed.pages_loaded(), 3);
        assert_eq!(feed.items().len(), 50);
        assert_eq!(feed.items()[0].id, 1);
        assert_eq!(feed.items()[49].title, "Entry #50");
    }

    #[test]
    fn zero_page_size_still_progresses() {
        let mut feed = Feed::with_page_size(0, 2);
        assert_eq!(feed.load_next_page(), 1);
        assert_eq!(feed.items()[0].id, 1);
    }

    #[test]
    fn empty_feed_is_exhausted_immediately() {
        let mut feed = Feed::with_page_size(10, 0);
        assert!(feed.is_exhausted());
        assert_eq!(feed.load_next_page(), 0);
        assert_eq!(feed.pages_loaded(), 0);
    }
}
