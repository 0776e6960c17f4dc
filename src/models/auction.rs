use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Pointer to the current auction house dump of a realm (`auction/data/{realm}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionData {
    pub files: Vec<AuctionFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionFile {
    /// Absolute URL of the dump
    pub url: String,
    pub last_modified: Timestamp,
}

/// Content of an auction dump file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionSnapshot {
    /// Connected realms sharing this auction house
    pub realms: Vec<RealmName>,
    pub auctions: Vec<Auction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmName {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    pub auc: u64,
    pub item: u32,
    pub owner: String,
    pub owner_realm: String,
    /// Copper
    pub bid: u64,
    /// Copper, 0 when no buyout is set
    pub buyout: u64,
    pub quantity: u32,
    /// SHORT, MEDIUM, LONG or VERY_LONG
    pub time_left: String,
    pub rand: i64,
    pub seed: i64,
    pub context: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_lists: Option<Vec<BonusList>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<AuctionModifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_species_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_breed_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_quality_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusList {
    pub bonus_list_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionModifier {
    #[serde(rename = "type")]
    pub kind: u32,
    pub value: i64,
}
