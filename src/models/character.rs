use super::{Achievement, Criterion, ItemSummary, Spec};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Character profile (`character/{realm}/{name}`).
///
/// The base profile is always present; each optional member is only
/// returned when the matching field was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub last_modified: Timestamp,
    pub name: String,
    pub realm: String,
    pub battlegroup: String,
    pub class: u32,
    pub race: u32,
    pub gender: u32,
    pub level: u32,
    pub achievement_points: u32,
    pub thumbnail: String,
    pub calc_class: String,
    pub faction: u32,
    pub total_honorable_kills: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<CharacterAchievements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<Appearance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<Vec<FeedEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<GuildSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunter_pets: Option<Vec<HunterPet>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Equipment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mounts: Option<Mounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pets: Option<Pets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_slots: Option<Vec<PetSlot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professions: Option<Professions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression: Option<Progression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pvp: Option<Pvp>,
    /// Completed quest ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quests: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation: Option<Vec<Reputation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talents: Option<Vec<TalentSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<Title>>,
}

/// Parallel arrays: the n-th timestamp belongs to the n-th id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAchievements {
    pub achievements_completed: Vec<u32>,
    pub achievements_completed_timestamp: Vec<Timestamp>,
    pub criteria: Vec<u32>,
    pub criteria_quantity: Vec<u64>,
    pub criteria_timestamp: Vec<Timestamp>,
    pub criteria_created: Vec<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub face_variation: u32,
    pub skin_color: u32,
    pub hair_variation: u32,
    pub hair_color: u32,
    pub feature_variation: u32,
    pub show_helm: bool,
    pub show_cloak: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_display_options: Option<Vec<u32>>,
}

/// Activity feed entry; `kind` is ACHIEVEMENT, CRITERIA, LOOT or BOSSKILL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement: Option<Achievement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feat_of_strength: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Criterion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_lists: Option<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildSummary {
    pub name: String,
    pub realm: String,
    pub battlegroup: String,
    pub members: u32,
    pub achievement_points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emblem: Option<Emblem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emblem {
    pub icon: u32,
    pub icon_color: String,
    pub icon_color_id: u32,
    pub border: u32,
    pub border_color: String,
    pub border_color_id: u32,
    pub background_color: String,
    pub background_color_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HunterPet {
    pub name: String,
    pub creature: u32,
    pub slot: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<Spec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calc_spec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

/// Equipped items keyed by slot name (`head`, `mainHand`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub average_item_level: u32,
    pub average_item_level_equipped: u32,
    #[serde(flatten)]
    pub slots: BTreeMap<String, ItemSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mounts {
    pub number_collected: u32,
    pub number_not_collected: u32,
    pub collected: Vec<Mount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mount {
    pub name: String,
    pub spell_id: u32,
    pub creature_id: u32,
    pub item_id: u32,
    pub quality_id: u32,
    pub icon: String,
    pub is_ground: bool,
    pub is_flying: bool,
    pub is_aquatic: bool,
    pub is_jumping: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pets {
    pub number_collected: u32,
    pub number_not_collected: u32,
    pub collected: Vec<CollectedPet>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedPet {
    pub name: String,
    pub spell_id: u32,
    pub creature_id: u32,
    pub item_id: u32,
    pub quality_id: u32,
    pub icon: String,
    pub stats: super::BattlePet,
    pub battle_pet_guid: String,
    pub is_favorite: bool,
    pub is_first_ability_slot_selected: bool,
    pub is_second_ability_slot_selected: bool,
    pub is_third_ability_slot_selected: bool,
    pub creature_name: String,
    pub can_battle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetSlot {
    pub slot: u32,
    pub battle_pet_guid: String,
    pub is_empty: bool,
    pub is_locked: bool,
    pub abilities: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professions {
    pub primary: Vec<Profession>,
    pub secondary: Vec<Profession>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profession {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub rank: u32,
    pub max: u32,
    pub recipes: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub raids: Vec<Raid>,
}

/// Raid progress; the difficulty members are 0 (none), 1 (partial) or 2 (cleared)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raid {
    pub name: String,
    pub lfr: u32,
    pub normal: u32,
    pub heroic: u32,
    pub mythic: u32,
    pub id: u32,
    pub bosses: Vec<Boss>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boss {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lfr_kills: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lfr_timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_kills: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heroic_kills: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heroic_timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mythic_kills: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mythic_timestamp: Option<Timestamp>,
}

/// PvP brackets keyed by bracket name (`ARENA_BRACKET_2v2`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pvp {
    pub brackets: BTreeMap<String, PvpBracket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvpBracket {
    pub slug: String,
    pub rating: u32,
    pub weekly_played: u32,
    pub weekly_won: u32,
    pub weekly_lost: u32,
    pub season_played: u32,
    pub season_won: u32,
    pub season_lost: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reputation {
    pub id: u32,
    pub name: String,
    pub standing: u32,
    pub value: u32,
    pub max: u32,
}

/// Character statistics.
///
/// Only the primary members are typed; the many secondary ratings are
/// kept as-is in `other`. Percentages stay `Number`s because the API sends
/// them as integers or floats depending on the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub health: u64,
    pub power_type: String,
    pub power: u64,
    pub str: i64,
    pub agi: i64,
    pub int: i64,
    pub sta: i64,
    pub armor: i64,
    pub crit: Number,
    pub haste: Number,
    pub mastery: Number,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    pub talents: Vec<Talent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<Spec>,
    pub calc_talent: String,
    pub calc_spec: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub tier: u32,
    pub column: u32,
    pub spell: Spell,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<Spec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub id: u32,
    /// Contains `%s` where the character name goes
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

impl Title {
    /// Render the title around a character name
    pub fn render(&self, character: &str) -> String {
        self.name.replace("%s", character)
    }
}

impl Character {
    /// The title marked as selected, if titles were requested
    pub fn selected_title(&self) -> Option<&Title> {
        self.titles
            .as_ref()?
            .iter()
            .find(|t| t.selected.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_util::assert_round_trip;

    const BASE: &str = r#"
        "lastModified": 1444427651000,
        "name": "Tomé",
        "realm": "Argent Dawn",
        "battlegroup": "Reckoning / Abrechnung",
        "class": 8,
        "race": 1,
        "gender": 1,
        "level": 100,
        "achievementPoints": 11335,
        "thumbnail": "argent-dawn/83/101233491-avatar.jpg",
        "calcClass": "e",
        "faction": 0,
        "totalHonorableKills": 1322"#;

    fn character(extra: &str) -> String {
        if extra.is_empty() {
            format!("{{{}}}", BASE)
        } else {
            format!("{{{}, {}}}", BASE, extra)
        }
    }

    #[test]
    fn test_base_profile_round_trip() {
        let c: Character = assert_round_trip(&character(""));
        assert_eq!(c.name, "Tomé");
        assert_eq!(c.last_modified.unix_millis(), 1_444_427_651_000);
        assert!(c.guild.is_none());
        assert!(c.items.is_none());
    }

    #[test]
    fn test_profile_with_achievements_appearance_feed() {
        let c: Character = assert_round_trip(&character(
            r#"
            "achievements": {
                "achievementsCompleted": [6, 7],
                "achievementsCompletedTimestamp": [1226345040000, 1226345041000],
                "criteria": [34],
                "criteriaQuantity": [3],
                "criteriaTimestamp": [1226345040000],
                "criteriaCreated": [1226345040000]
            },
            "appearance": {
                "faceVariation": 3, "skinColor": 1, "hairVariation": 4, "hairColor": 2,
                "featureVariation": 0, "showHelm": true, "showCloak": false,
                "customDisplayOptions": [0, 0, 0]
            },
            "feed": [
                {"type": "LOOT", "timestamp": 1444427000000, "itemId": 124547, "context": "", "bonusLists": []},
                {"type": "CRITERIA", "timestamp": 1444426000000,
                 "achievement": {"id": 6, "title": "Level 10", "points": 10, "description": "Reach level 10.",
                                 "rewardItems": [], "icon": "achievement_level_10", "criteria": [],
                                 "accountWide": false, "factionId": 2},
                 "featOfStrength": false,
                 "criteria": {"id": 34, "description": "Level", "orderIndex": 0, "max": 10}}
            ]"#,
        ));
        let achievements = c.achievements.unwrap();
        assert_eq!(achievements.achievements_completed.len(), achievements.achievements_completed_timestamp.len());
        assert_eq!(c.feed.unwrap()[1].kind, "CRITERIA");
    }

    #[test]
    fn test_profile_with_guild_items_stats() {
        let c: Character = assert_round_trip(&character(
            r#"
            "guild": {
                "name": "Hops", "realm": "Argent Dawn", "battlegroup": "Reckoning / Abrechnung",
                "members": 120, "achievementPoints": 1500,
                "emblem": {"icon": 126, "iconColor": "ff101517", "iconColorId": 15, "border": 0,
                           "borderColor": "ff0f1415", "borderColorId": 15,
                           "backgroundColor": "ffb1b8b1", "backgroundColorId": 44}
            },
            "items": {
                "averageItemLevel": 700,
                "averageItemLevelEquipped": 698,
                "head": {"id": 124261, "name": "Hood", "icon": "inv_helm", "quality": 4,
                         "itemLevel": 705, "tooltipParams": {"transmogItem": 1234}, "stats": [{"stat": 7, "amount": 400}],
                         "armor": 120, "context": "raid-normal", "bonusLists": [566]}
            },
            "stats": {
                "health": 350000, "powerType": "mana", "power": 160000,
                "str": 600, "agi": 650, "int": 4500, "sta": 5000, "armor": 900,
                "crit": 18.5, "haste": 12.25, "mastery": 30.5,
                "versatility": 300, "leech": 0.5
            }"#,
        ));
        let items = c.items.unwrap();
        assert_eq!(items.slots["head"].item_level, 705);
        let stats = c.stats.unwrap();
        assert_eq!(stats.other["versatility"], 300);
        assert_eq!(c.guild.unwrap().emblem.unwrap().icon, 126);
    }

    #[test]
    fn test_stats_keep_integer_percentages() {
        let stats: Stats = assert_round_trip(
            r#"{
                "health": 120, "powerType": "rage", "power": 100,
                "str": 20, "agi": 15, "int": 10, "sta": 18, "armor": 40,
                "crit": 5, "haste": 0, "mastery": 0
            }"#,
        );
        assert_eq!(stats.crit.as_u64(), Some(5));
        assert_eq!(stats.haste.as_f64(), Some(0.0));
        assert!(stats.other.is_empty());
    }

    #[test]
    fn test_profile_with_collections() {
        let c: Character = assert_round_trip(&character(
            r#"
            "hunterPets": [{"name": "Cat", "creature": 3619, "slot": 0, "calcSpec": "a", "familyId": 2, "familyName": "Cat", "selected": true}],
            "mounts": {"numberCollected": 1, "numberNotCollected": 400, "collected": [
                {"name": "Brown Horse", "spellId": 458, "creatureId": 284, "itemId": 5656, "qualityId": 3,
                 "icon": "ability_mount_ridinghorse", "isGround": true, "isFlying": false, "isAquatic": false, "isJumping": true}
            ]},
            "pets": {"numberCollected": 1, "numberNotCollected": 700, "collected": [
                {"name": "Mini Thor", "spellId": 78683, "creatureId": 42078, "itemId": 56806, "qualityId": 3,
                 "icon": "t_roboticon",
                 "stats": {"speciesId": 258, "breedId": 5, "petQualityId": 3, "level": 25, "health": 1400, "power": 280, "speed": 260},
                 "battlePetGuid": "0000-0001", "isFavorite": false,
                 "isFirstAbilitySlotSelected": false, "isSecondAbilitySlotSelected": true, "isThirdAbilitySlotSelected": false,
                 "creatureName": "Mini Thor", "canBattle": true}
            ]},
            "petSlots": [{"slot": 0, "battlePetGuid": "0000-0001", "isEmpty": false, "isLocked": false, "abilities": [777, 779, 778]}],
            "quests": [1, 2, 3]"#,
        ));
        assert_eq!(c.pets.unwrap().collected[0].stats.species_id, 258);
        assert_eq!(c.pet_slots.unwrap()[0].abilities.len(), 3);
        assert_eq!(c.quests.unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_profile_with_progress_fields() {
        let c: Character = assert_round_trip(&character(
            r#"
            "professions": {
                "primary": [{"id": 197, "name": "Tailoring", "icon": "trade_tailoring", "rank": 700, "max": 700, "recipes": [2387]}],
                "secondary": []
            },
            "progression": {"raids": [{"name": "Molten Core", "lfr": 0, "normal": 2, "heroic": 0, "mythic": 0, "id": 2717,
                "bosses": [{"id": 12118, "name": "Lucifron", "normalKills": 3, "normalTimestamp": 1400000000000}]}]},
            "pvp": {"brackets": {"ARENA_BRACKET_2v2": {"slug": "2v2", "rating": 1500, "weeklyPlayed": 0, "weeklyWon": 0,
                "weeklyLost": 0, "seasonPlayed": 10, "seasonWon": 6, "seasonLost": 4}}},
            "reputation": [{"id": 1269, "name": "Golden Lotus", "standing": 7, "value": 999, "max": 999}],
            "talents": [{"selected": true, "talents": [{"tier": 0, "column": 1,
                "spell": {"id": 205022, "name": "Arcane Familiar", "icon": "ability_mage_arcanefamiliar",
                          "description": "Summon a familiar.", "castTime": "Instant"}}],
                "calcTalent": "1", "calcSpec": "a"}],
            "titles": [{"id": 1, "name": "Private %s"}, {"id": 90, "name": "%s the Explorer", "selected": true}]"#,
        ));
        let title = c.selected_title().unwrap();
        assert_eq!(title.render("Tomé"), "Tomé the Explorer");
        assert_eq!(c.progression.unwrap().raids[0].bosses[0].normal_kills, Some(3));
        assert_eq!(c.pvp.unwrap().brackets["ARENA_BRACKET_2v2"].rating, 1500);
    }
}
