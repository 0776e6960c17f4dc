//! Typed getters, one per resource.
//!
//! Each getter builds the resource path and parameters, performs a single
//! GET through [`ApiClient::get_json`] and decodes the body. The HTTP status
//! is not inspected: whatever body comes back is decoded.

use crate::error::{Result, WowError};
use crate::models::{
    Achievement, AuctionData, AuctionFile, AuctionSnapshot, BattlePet, BattlePetAbility,
    BattlePetSpecies, Challenge, ChallengeSet, Character,
};
use crate::rest::{params, ApiClient, Params};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Path segment standing for the region-wide challenge leaderboard
pub const REGION_CHALLENGES: &str = "region";

/// Optional member groups of a character profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterField {
    Achievements,
    Appearance,
    Feed,
    Guild,
    HunterPets,
    Items,
    Mounts,
    Pets,
    PetSlots,
    Professions,
    Progression,
    Pvp,
    Quests,
    Reputation,
    Stats,
    Talents,
    Titles,
}

impl CharacterField {
    pub const ALL: [CharacterField; 17] = [
        CharacterField::Achievements,
        CharacterField::Appearance,
        CharacterField::Feed,
        CharacterField::Guild,
        CharacterField::HunterPets,
        CharacterField::Items,
        CharacterField::Mounts,
        CharacterField::Pets,
        CharacterField::PetSlots,
        CharacterField::Professions,
        CharacterField::Progression,
        CharacterField::Pvp,
        CharacterField::Quests,
        CharacterField::Reputation,
        CharacterField::Stats,
        CharacterField::Talents,
        CharacterField::Titles,
    ];

    /// Name used in the `fields` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterField::Achievements => "achievements",
            CharacterField::Appearance => "appearance",
            CharacterField::Feed => "feed",
            CharacterField::Guild => "guild",
            CharacterField::HunterPets => "hunterPets",
            CharacterField::Items => "items",
            CharacterField::Mounts => "mounts",
            CharacterField::Pets => "pets",
            CharacterField::PetSlots => "petSlots",
            CharacterField::Professions => "professions",
            CharacterField::Progression => "progression",
            CharacterField::Pvp => "pvp",
            CharacterField::Quests => "quests",
            CharacterField::Reputation => "reputation",
            CharacterField::Stats => "stats",
            CharacterField::Talents => "talents",
            CharacterField::Titles => "titles",
        }
    }
}

impl FromStr for CharacterField {
    type Err = WowError;

    fn from_str(s: &str) -> Result<Self> {
        CharacterField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| WowError::InvalidFields {
                fields: vec![s.to_string()],
            })
    }
}

impl fmt::Display for CharacterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for CharacterField {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Check every requested character field against the known set.
///
/// All unknown names are reported together, in request order.
pub fn validate_character_fields<S: AsRef<str>>(fields: &[S]) -> Result<()> {
    let bad: Vec<String> = fields
        .iter()
        .map(|f| f.as_ref())
        .filter(|field| field.parse::<CharacterField>().is_err())
        .map(str::to_string)
        .collect();

    if bad.is_empty() {
        Ok(())
    } else {
        Err(WowError::InvalidFields { fields: bad })
    }
}

/// Path of the challenge leaderboard for `realm`, or the region when empty
pub fn challenge_path(realm: &str) -> [&str; 2] {
    if realm.is_empty() {
        ["challenge", REGION_CHALLENGES]
    } else {
        ["challenge", realm]
    }
}

impl ApiClient {
    /// Get an achievement definition
    pub fn get_achievement(&self, id: u32) -> Result<Achievement> {
        self.get_json(&["achievement", id.to_string().as_str()], &Params::new())
    }

    /// Get the pointer to a realm's current auction dump
    pub fn get_auction_data(&self, realm: &str) -> Result<AuctionData> {
        self.get_json(&["auction", "data", realm], &Params::new())
    }

    /// Download and decode an auction dump listed by [`ApiClient::get_auction_data`].
    ///
    /// The file lives outside the API, so the request is neither signed
    /// nor localized.
    pub fn get_auction_snapshot(&self, file: &AuctionFile) -> Result<AuctionSnapshot> {
        let url = Url::parse(&file.url)?;
        let body = self.execute(url, false)?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub fn get_battle_pet_ability(&self, id: u32) -> Result<BattlePetAbility> {
        self.get_json(&["battlePet", "ability", id.to_string().as_str()], &Params::new())
    }

    pub fn get_battle_pet_species(&self, id: u32) -> Result<BattlePetSpecies> {
        self.get_json(&["battlePet", "species", id.to_string().as_str()], &Params::new())
    }

    /// Get the stats of species `id` at a given level, breed and quality
    pub fn get_battle_pet(&self, id: u32, level: u32, breed_id: u32, quality_id: u32) -> Result<BattlePet> {
        let p = params([
            ("level", level.to_string()),
            ("breedId", breed_id.to_string()),
            ("qualityId", quality_id.to_string()),
        ]);
        self.get_json(&["battlePet", "stats", id.to_string().as_str()], &p)
    }

    /// Same as [`ApiClient::get_battle_pet`]
    pub fn get_battle_pet_stats(&self, id: u32, level: u32, breed_id: u32, quality_id: u32) -> Result<BattlePet> {
        self.get_battle_pet(id, level, breed_id, quality_id)
    }

    /// Get challenge mode leaderboards of `realm`, or of the whole region
    /// when `realm` is empty.
    pub fn get_challenges(&self, realm: &str) -> Result<Vec<Challenge>> {
        let set: ChallengeSet = self.get_json(&challenge_path(realm), &Params::new())?;
        Ok(set.challenge)
    }

    /// Same as [`ApiClient::get_challenges`]
    pub fn get_challenge(&self, realm: &str) -> Result<Vec<Challenge>> {
        self.get_challenges(realm)
    }

    /// Get the base profile of a character
    pub fn get_character(&self, realm: &str, name: &str) -> Result<Character> {
        self.get_character_with_fields::<&str>(realm, name, &[])
    }

    /// Get a character profile with extra member groups.
    ///
    /// `fields` are validated before anything is sent; see [`CharacterField`]
    /// for the accepted names.
    pub fn get_character_with_fields<S: AsRef<str>>(
        &self,
        realm: &str,
        name: &str,
        fields: &[S],
    ) -> Result<Character> {
        validate_character_fields(fields)?;

        let mut p = Params::new();
        if !fields.is_empty() {
            let joined: Vec<&str> = fields.iter().map(|f| f.as_ref()).collect();
            p.insert("fields".to_string(), joined.join(","));
        }
        self.get_json(&["character", realm, name], &p)
    }
}
