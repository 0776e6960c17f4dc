use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Achievement definition (`achievement/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub points: u32,
    pub description: String,
    /// Text reward, e.g. a title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
    pub reward_items: Vec<ItemSummary>,
    pub icon: String,
    pub criteria: Vec<Criterion>,
    pub account_wide: bool,
    /// 0 alliance, 1 horde, 2 both
    pub faction_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub id: u32,
    pub description: String,
    pub order_index: u32,
    pub max: u64,
}

/// Item as embedded in achievements and equipment listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub quality: u32,
    pub item_level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip_params: Option<BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<ItemStat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_lists: Option<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStat {
    pub stat: u32,
    pub amount: i64,
}
