use typerank_protocol::{ItemsQuery, Paging};

/// Pagination state for the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    query: ItemsQuery,
    next_page: Option<u32>,
    pages_fetched: u32,
    max_pages: Option<u32>,
}

impl PageCursor {
    /// Start at the query's page number
    pub fn new(query: ItemsQuery, max_pages: Option<u32>) -> Self {
        let next_page = Some(query.page_number);
        Self {
            query,
            next_page,
            pages_fetched: 0,
            max_pages,
        }
    }

    /// Query for the next page, or `None` once exhausted
    pub fn next_query(&self) -> Option<ItemsQuery> {
        if let Some(max) = self.max_pages
            && self.pages_fetched >= max
        {
            return None;
        }
        self.next_page.map(|page| self.query.with_page(page))
    }

    /// Record a fetched page
    ///
    /// An empty page ends pagination even if the server claims more remain.
    pub fn advance(&mut self, paging: &Paging, items_on_page: usize) {
        self.pages_fetched += 1;
        self.next_page = match self.next_page {
            Some(page) if paging.has_more() && items_on_page > 0 => Some(page + 1),
            _ => None,
        };
    }

    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    pub fn is_done(&self) -> bool {
        self.next_query().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paging(page: u32, page_size: u32, total_count: u64) -> Paging {
        Paging {
            page,
            page_size,
            total_count,
        }
    }

    #[test]
    fn test_cursor_walks_until_total_reached() {
        let mut cursor = PageCursor::new(ItemsQuery::new(50), None);
        let mut pages = Vec::new();

        while let Some(query) = cursor.next_query() {
            pages.push(query.page_number);
            cursor.advance(&paging(query.page_number, 50, 120), 50);
        }

        assert_eq!(pages, vec![1, 2, 3]);
        assert_eq!(cursor.pages_fetched(), 3);
        assert!(cursor.is_done());
    }

    #[test]
    fn test_cursor_exact_multiple_stops() {
        let mut cursor = PageCursor::new(ItemsQuery::new(50), None);
        cursor.advance(&paging(1, 50, 100), 50);
        assert_eq!(cursor.next_query().map(|q| q.page_number), Some(2));
        cursor.advance(&paging(2, 50, 100), 50);
        assert!(cursor.is_done());
    }

    #[test]
    fn test_cursor_stops_on_empty_page() {
        let mut cursor = PageCursor::new(ItemsQuery::new(50), None);
        cursor.advance(&paging(1, 50, 500), 0);
        assert!(cursor.is_done());
    }

    #[test]
    fn test_cursor_respects_max_pages() {
        let mut cursor = PageCursor::new(ItemsQuery::new(10), Some(2));
        cursor.advance(&paging(1, 10, 1000), 10);
        assert!(!cursor.is_done());
        cursor.advance(&paging(2, 10, 1000), 10);
        assert!(cursor.is_done());
    }
}
