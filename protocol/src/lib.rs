use thiserror::Error;

pub mod catalog;
pub mod listing;
pub mod request;
pub mod response;

pub use catalog::{Aura, BodyPartTier, Hero, Rarity};
pub use listing::{BodyPartSummary, Listing, ListingAttributes, WEI_PER_TOKEN, rank_listings};
pub use request::{ITEM_INFO_PATH, ITEMS_PATH, ItemsQuery, item_info_query};
pub use response::{
    BodyPart, ItemInfo, ItemsPage, MarketItem, Paging, Skill, parse_item_info, parse_items_page,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty response body")]
    EmptyBody,

    #[error("Item {token_id} has no power rating")]
    ZeroPowerRating { token_id: u64 },
}
