
use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize};

use crate::ParseError;

/// One page of the item listing endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemsPage {
    #[serde(default)]
    pub data: Vec<MarketItem>,
    pub paging: Paging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl Paging {
    /// Whether items remain past this page
    pub fn has_more(&self) -> bool {
        self.total_count > u64::from(self.page) * u64::from(self.page_size)
    }
}

/// An item offered for sale, as the listing endpoint reports it
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketItem {
    pub token_id: u64,
    /// Price in wei
    #[serde(deserialize_with = "number_or_string")]
    pub last_price: f64,
    #[serde(default)]
    pub owner_address: Option<String>,
    pub rarity: u8,
    #[serde(default)]
    pub purity: Option<u32>,
    pub base_card_id: u32,
    #[serde(default)]
    pub class: Option<u32>,
    /// Aura quality
    #[serde(default)]
    pub quality: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ItemInfoResponse {
    #[serde(default)]
    data: Option<Vec<ItemInfo>>,
}

/// Detail record for one item
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfo {
    pub level: u32,
    /// Power rating
    pub point: f64,
    #[serde(default)]
    pub star: u32,
    #[serde(default)]
    pub body_part: Vec<BodyPart>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Raw stat block, passed through untouched
    #[serde(default)]
    pub points: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyPart {
    #[serde(rename = "type")]
    pub part_type: u32,
    pub quality: u8,
    #[serde(default)]
    pub ability: serde_json::Value,
    #[serde(default)]
    pub val: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub skill_img: Option<String>,
    pub level: u32,
    pub skill_id: u32,
}

/// Parse a listing endpoint body
pub fn parse_items_page(body: &str) -> Result<ItemsPage> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody.into());
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    if value.get("paging").is_none() {
        return Err(ParseError::MissingField("paging".to_string()).into());
    }

    let page = serde_json::from_value(value)
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
    Ok(page)
}

/// Parse a detail endpoint body
///
/// The endpoint wraps the record in a one-element `data` array; `None` means
/// the array was missing or empty.
pub fn parse_item_info(body: &str) -> Result<Option<ItemInfo>> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody.into());
    }

    let response: ItemInfoResponse = serde_json::from_str(body)
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    Ok(response.data.and_then(|data| data.into_iter().next()))
}

fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
