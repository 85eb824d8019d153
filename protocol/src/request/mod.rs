use crate::catalog::Rarity;

/// Paged listing of items for sale
pub const ITEMS_PATH: &str = "/market/getElemonItems";

/// Detail lookup for one item
pub const ITEM_INFO_PATH: &str = "/elemon/getElemonInfo";

/// Query for one page of market items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsQuery {
    /// 1-based page number
    pub page_number: u32,
    pub page_size: u32,
    pub base_card_id: Option<u32>,
    pub rarities: Vec<Rarity>,
}

impl ItemsQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_number: 1,
            page_size,
            base_card_id: None,
            rarities: Vec::new(),
        }
    }

    /// Same filters, different page
    pub fn with_page(&self, page_number: u32) -> Self {
        Self {
            page_number,
            ..self.clone()
        }
    }

    /// Query string pairs, including the filters the API expects to see empty
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let rarities = self
            .rarities
            .iter()
            .map(|r| r.id().to_string())
            .collect::<Vec<_>>()
            .join(",");

        vec![
            ("pageNumber", self.page_number.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("positionType", "2".to_string()),
            ("priceMode", String::new()),
            (
                "baseCardId",
                self.base_card_id.map(|id| id.to_string()).unwrap_or_default(),
            ),
            ("tokenId", String::new()),
            ("rarities", rarities),
            ("classes", String::new()),
            ("purities", String::new()),
            ("address", String::new()),
        ]
    }
}

/// Query string pairs for an item detail lookup
pub fn item_info_query(token_id: u64) -> Vec<(&'static str, String)> {
    vec![("tokenId", token_id.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(pairs: &'a [(&'static str, String)], key: &str) -> &'a str {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_items_query_pairs() {
        let query = ItemsQuery {
            page_number: 3,
            page_size: 50,
            base_card_id: Some(11),
            rarities: vec![Rarity::S],
        };
        let pairs = query.to_query_pairs();

        assert_eq!(value(&pairs, "pageNumber"), "3");
        assert_eq!(value(&pairs, "pageSize"), "50");
        assert_eq!(value(&pairs, "positionType"), "2");
        assert_eq!(value(&pairs, "baseCardId"), "11");
        assert_eq!(value(&pairs, "rarities"), "3");
        assert_eq!(value(&pairs, "address"), "");
        assert_eq!(pairs.len(), 10);
    }

    #[test]
    fn test_items_query_unfiltered() {
        let pairs = ItemsQuery::new(20).to_query_pairs();
        assert_eq!(value(&pairs, "pageNumber"), "1");
        assert_eq!(value(&pairs, "baseCardId"), "");
        assert_eq!(value(&pairs, "rarities"), "");
    }

    #[test]
    fn test_with_page_keeps_filters() {
        let query = ItemsQuery {
            page_number: 1,
            page_size: 50,
            base_card_id: Some(19),
            rarities: vec![Rarity::A, Rarity::S],
        };
        let next = query.with_page(2);
        assert_eq!(next.page_number, 2);
        assert_eq!(next.base_card_id, Some(19));
        assert_eq!(value(&next.to_query_pairs(), "rarities"), "2,3");
    }

    #[test]
    fn test_item_info_query() {
        assert_eq!(item_info_query(42), vec![("tokenId", "42".to_string())]);
    }
}
