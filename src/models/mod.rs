//! Records mirroring the JSON documents returned by the API.
//!
//! Every record decodes from and re-encodes to the upstream shape: optional
//! upstream members are `Option`s that are skipped when absent, so a body
//! decoded and encoded again keeps exactly the members it came with.

pub mod achievement;
pub mod auction;
pub mod battle_pet;
pub mod challenge;
pub mod character;

pub use achievement::{Achievement, Criterion, ItemStat, ItemSummary};
pub use auction::{Auction, AuctionData, AuctionFile, AuctionModifier, AuctionSnapshot, BonusList, RealmName};
pub use battle_pet::{BattlePet, BattlePetAbility, BattlePetSpecies, SpeciesAbility};
pub use challenge::{
    Challenge, ChallengeGroup, ChallengeMap, ChallengeMember, ChallengeSet, ChallengeTime,
    CharacterSummary, Realm,
};
pub use character::*;

/// Specialization description shared by challenge members, talents and hunter pets
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spec {
    pub name: String,
    pub role: String,
    pub background_image: String,
    pub icon: String,
    pub description: String,
    pub order: u32,
}
