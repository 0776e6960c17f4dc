use serde::{Deserialize, Serialize};

/// Battle pet ability (`battlePet/ability/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlePetAbility {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub cooldown: u32,
    pub rounds: u32,
    pub pet_type_id: u32,
    pub is_passive: bool,
    pub hide_hints: bool,
}

/// Battle pet species (`battlePet/species/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlePetSpecies {
    pub species_id: u32,
    pub pet_type_id: u32,
    pub creature_id: u32,
    pub name: String,
    pub can_battle: bool,
    pub icon: String,
    pub description: String,
    pub source: String,
    pub abilities: Vec<SpeciesAbility>,
}

/// Ability as it appears in a species listing: the ability plus its slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesAbility {
    pub slot: u32,
    pub order: u32,
    pub required_level: u32,
    #[serde(flatten)]
    pub ability: BattlePetAbility,
}

/// Stats of a pet for a species, level, breed and quality (`battlePet/stats/{id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlePet {
    pub species_id: u32,
    pub breed_id: u32,
    pub pet_quality_id: u32,
    pub level: u32,
    pub health: u32,
    pub power: u32,
    pub speed: u32,
}
