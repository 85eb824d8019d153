//! Sequential collector for marketplace listings.
//!
//! The collector pages through the listing endpoint, looks up each item's
//! detail record, and returns every listing sorted by cost per power rating.
//! Requests are strictly one at a time with a jittered pause after each,
//! and every request is retried with bounded backoff before giving up.

mod cursor;
mod policy;
mod transport;

use anyhow::{Context, Result};
use async_trait::async_trait;
use typerank_protocol::{
    ITEM_INFO_PATH, ITEMS_PATH, ItemsQuery, MarketItem, item_info_query, parse_item_info,
    parse_items_page,
};

pub use cursor::PageCursor;
pub use policy::{PacingPolicy, RetryPolicy};
pub use transport::{Fetch, RequestHeaders, Transport};
pub use typerank_protocol::{Hero, Listing, Rarity, rank_listings};

pub const DEFAULT_BASE_URL: &str = "https://app.elemon.io";

/// Anything that can produce a full set of listings
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_listings(&self) -> Result<Vec<Listing>>;
}

/// Marketplace client for one search
pub struct MarketClient<F = Transport> {
    transport: F,
    query: ItemsQuery,
    pacing: PacingPolicy,
    max_pages: Option<u32>,
}

impl MarketClient<Transport> {
    pub fn new(
        base_url: &str,
        headers: &RequestHeaders,
        query: ItemsQuery,
        pacing: PacingPolicy,
        retry: RetryPolicy,
    ) -> Result<Self> {
        Ok(Self::with_transport(
            Transport::new(base_url, headers, retry)?,
            query,
            pacing,
        ))
    }
}

impl<F: Fetch> MarketClient<F> {
    pub fn with_transport(transport: F, query: ItemsQuery, pacing: PacingPolicy) -> Self {
        Self {
            transport,
            query,
            pacing,
            max_pages: None,
        }
    }

    /// Stop after this many listing pages
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Walk every page of the listing endpoint
    pub async fn fetch_items(&self) -> Result<Vec<MarketItem>> {
        let mut cursor = PageCursor::new(self.query.clone(), self.max_pages);
        let mut items = Vec::new();

        while let Some(query) = cursor.next_query() {
            tracing::info!(
                page = query.page_number,
                page_size = query.page_size,
                "Fetching market page"
            );

            let body = self
                .transport
                .get(ITEMS_PATH, &query.to_query_pairs())
                .await?;
            let page = parse_items_page(&body)
                .with_context(|| format!("Failed to parse market page {}", query.page_number))?;

            cursor.advance(&page.paging, page.data.len());
            items.extend(page.data);
            self.pacing.pause().await;
        }

        tracing::info!(
            pages = cursor.pages_fetched(),
            items = items.len(),
            "Collected market items"
        );
        Ok(items)
    }

    /// Look up details for each item and derive its listing
    ///
    /// Items without a detail record or a power rating are skipped.
    pub async fn fetch_details(&self, items: &[MarketItem]) -> Result<Vec<Listing>> {
        let mut listings = Vec::with_capacity(items.len());

        for item in items {
            tracing::debug!(token_id = item.token_id, "Fetching item details");

            let body = self
                .transport
                .get(ITEM_INFO_PATH, &item_info_query(item.token_id))
                .await?;
            let info = parse_item_info(&body)
                .with_context(|| format!("Failed to parse details for item {}", item.token_id))?;

            match info {
                Some(info) => match Listing::from_parts(item, info) {
                    Ok(listing) => listings.push(listing),
                    Err(e) => {
                        tracing::warn!(token_id = item.token_id, error = %e, "Skipping item")
                    }
                },
                None => {
                    tracing::warn!(token_id = item.token_id, "Item has no detail record, skipping")
                }
            }

            self.pacing.pause().await;
        }

        Ok(listings)
    }
}

#[async_trait]
impl<F: Fetch> ListingSource for MarketClient<F> {
    async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        let items = self.fetch_items().await?;
        let mut listings = self.fetch_details(&items).await?;
        rank_listings(&mut listings);
        tracing::info!(listings = listings.len(), "Completed retrieving listings");
        Ok(listings)
    }
}

/// Listing source backed by a fixed list, for offline runs and tests
pub struct StaticListings(pub Vec<Listing>);

#[async_trait]
impl ListingSource for StaticListings {
    async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        let mut listings = self.0.clone();
        rank_listings(&mut listings);
        Ok(listings)
    }
}

/// Cheapest `limit` listings from a source
pub async fn cheapest(source: &dyn ListingSource, limit: usize) -> Result<Vec<Listing>> {
    let mut listings = source.fetch_listings().await?;
    listings.truncate(limit);
    Ok(listings)
}
