//! Listings: market items joined with their detail record and priced per power

use serde::Serialize;

use crate::ParseError;
use crate::catalog::{Aura, BodyPartTier, Rarity};
use crate::response::{BodyPart, ItemInfo, MarketItem, Skill};

/// Wei per whole token
pub const WEI_PER_TOKEN: f64 = 1e18;

/// An item for sale with its derived cost metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: u64,
    pub base_card_id: u32,
    /// Price in whole tokens
    pub price: f64,
    pub power_rating: f64,
    /// `price / power_rating`; lower is a better deal
    pub cost_per_power: f64,
    pub attributes: ListingAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingAttributes {
    pub rarity: Option<Rarity>,
    pub purity: Option<u32>,
    pub class: Option<u32>,
    pub aura: Option<Aura>,
    pub level: u32,
    pub star: u32,
    pub body_parts: Vec<BodyPartSummary>,
    pub skills: Vec<Skill>,
    pub stats: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyPartSummary {
    pub part_type: u32,
    pub tier: Option<BodyPartTier>,
    pub raw: BodyPart,
}

impl Listing {
    /// Join an item with its detail record
    ///
    /// Fails when the item has no power rating to divide by.
    pub fn from_parts(item: &MarketItem, info: ItemInfo) -> Result<Self, ParseError> {
        if info.point <= 0.0 || !info.point.is_finite() {
            return Err(ParseError::ZeroPowerRating {
                token_id: item.token_id,
            });
        }

        let price = item.last_price / WEI_PER_TOKEN;
        let body_parts = info
            .body_part
            .into_iter()
            .map(|part| BodyPartSummary {
                part_type: part.part_type,
                tier: BodyPartTier::from_quality(part.quality),
                raw: part,
            })
            .collect();

        Ok(Self {
            id: item.token_id,
            base_card_id: item.base_card_id,
            price,
            power_rating: info.point,
            cost_per_power: price / info.point,
            attributes: ListingAttributes {
                rarity: Rarity::from_id(item.rarity),
                purity: item.purity,
                class: item.class,
                aura: item.quality.and_then(Aura::from_quality),
                level: info.level,
                star: info.star,
                body_parts,
                skills: info.skills,
                stats: info.points,
            },
        })
    }
}

/// Sort cheapest-per-power first
pub fn rank_listings(listings: &mut [Listing]) {
    listings.sort_by(|a, b| a.cost_per_power.total_cmp(&b.cost_per_power));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(token_id: u64, last_price: f64) -> MarketItem {
        MarketItem {
            token_id,
            last_price,
            owner_address: None,
            rarity: 3,
            purity: Some(1),
            base_card_id: 11,
            class: Some(2),
            quality: Some(4),
        }
    }

    fn info(point: f64) -> ItemInfo {
        ItemInfo {
            level: 10,
            point,
            star: 1,
            body_part: vec![BodyPart {
                part_type: 1,
                quality: 6,
                ability: serde_json::Value::Null,
                val: serde_json::Value::Null,
            }],
            skills: Vec::new(),
            points: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_from_parts_derives_cost() {
        let listing = Listing::from_parts(&item(7, 300e18), info(1500.0)).unwrap();

        assert_eq!(listing.id, 7);
        assert_eq!(listing.price, 300.0);
        assert_eq!(listing.power_rating, 1500.0);
        assert_eq!(listing.cost_per_power, 0.2);
        assert_eq!(listing.attributes.rarity, Some(Rarity::S));
        assert_eq!(listing.attributes.aura, Some(Aura::Purple));
        assert_eq!(listing.attributes.body_parts[0].tier, Some(BodyPartTier::Epic2));
    }

    #[test]
    fn test_from_parts_rejects_zero_power() {
        assert!(matches!(
            Listing::from_parts(&item(8, 1e18), info(0.0)),
            Err(ParseError::ZeroPowerRating { token_id: 8 })
        ));
    }

    #[test]
    fn test_rank_listings_cheapest_first() {
        let mut listings = vec![
            Listing::from_parts(&item(1, 100e18), info(100.0)).unwrap(),
            Listing::from_parts(&item(2, 100e18), info(400.0)).unwrap(),
            Listing::from_parts(&item(3, 50e18), info(100.0)).unwrap(),
        ];
        rank_listings(&mut listings);

        let ids: Vec<u64> = listings.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
