use super::Spec;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Envelope of the challenge mode leaderboard response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeSet {
    pub challenge: Vec<Challenge>,
}

/// Leaderboard of one challenge mode dungeon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    /// Absent on region-wide leaderboards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<Realm>,
    pub map: ChallengeMap,
    pub groups: Vec<ChallengeGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Realm {
    pub name: String,
    pub slug: String,
    pub battlegroup: String,
    pub locale: String,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_realms: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeMap {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub has_challenge_mode: bool,
    pub bronze_criteria: ChallengeTime,
    pub silver_criteria: ChallengeTime,
    pub gold_criteria: ChallengeTime,
}

/// Duration as broken down by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeTime {
    /// Total milliseconds
    pub time: i64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
    pub is_positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeGroup {
    pub ranking: u32,
    pub time: ChallengeTime,
    pub date: String,
    pub medal: String,
    pub faction: String,
    pub is_recurring: bool,
    pub members: Vec<ChallengeMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<CharacterSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<Spec>,
}

/// Short character description embedded in other documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSummary {
    pub name: String,
    pub realm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battlegroup: Option<String>,
    pub class: u32,
    pub race: u32,
    pub gender: u32,
    pub level: u32,
    pub achievement_points: u32,
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<Spec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_realm: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_util::assert_round_trip;

    const CRITERIA: &str = r#"{"time": 900000, "hours": 0, "minutes": 15, "seconds": 0, "milliseconds": 0, "isPositive": true}"#;

    fn challenge_json(realm: Option<&str>) -> String {
        let realm = realm
            .map(|r| format!(r#""realm": {},"#, r))
            .unwrap_or_default();
        format!(
            r#"{{
                {realm}
                "map": {{
                    "id": 961,
                    "name": "Stormstout Brewery",
                    "slug": "stormstout-brewery",
                    "hasChallengeMode": true,
                    "bronzeCriteria": {c},
                    "silverCriteria": {c},
                    "goldCriteria": {c}
                }},
                "groups": [{{
                    "ranking": 1,
                    "time": {c},
                    "date": "2013-06-08T22:19:53.000Z",
                    "medal": "Gold",
                    "faction": "alliance",
                    "isRecurring": false,
                    "members": [{{
                        "character": {{
                            "name": "Brewer",
                            "realm": "Medivh",
                            "battlegroup": "Ruin",
                            "class": 10,
                            "race": 24,
                            "gender": 0,
                            "level": 90,
                            "achievementPoints": 9000,
                            "thumbnail": "medivh/1/1-avatar.jpg",
                            "spec": {{
                                "name": "Brewmaster",
                                "role": "TANK",
                                "backgroundImage": "bg-monk-brewmaster",
                                "icon": "spell_monk_brewmaster_spec",
                                "description": "A sturdy brawler.",
                                "order": 0
                            }},
                            "guild": "Hops",
                            "guildRealm": "Medivh",
                            "lastModified": 1370729993000
                        }}
                    }}, {{}}]
                }}]
            }}"#,
            realm = realm,
            c = CRITERIA
        )
    }

    #[test]
    fn test_realm_challenge_round_trip() {
        let realm = r#"{"name": "Medivh", "slug": "medivh", "battlegroup": "Ruin", "locale": "en_US", "timezone": "America/New_York", "connectedRealms": ["medivh", "exodar"]}"#;
        let challenge: Challenge = assert_round_trip(&challenge_json(Some(realm)));
        assert_eq!(challenge.realm.unwrap().slug, "medivh");
        assert_eq!(challenge.map.gold_criteria.minutes, 15);
        let members = &challenge.groups[0].members;
        assert_eq!(members[0].character.as_ref().unwrap().guild.as_deref(), Some("Hops"));
        assert!(members[1].character.is_none());
    }

    #[test]
    fn test_region_challenge_round_trip() {
        let challenge: Challenge = assert_round_trip(&challenge_json(None));
        assert!(challenge.realm.is_none());
    }

    #[test]
    fn test_challenge_set_envelope() {
        let json = format!(r#"{{"challenge": [{}]}}"#, challenge_json(None));
        let set: ChallengeSet = assert_round_trip(&json);
        assert_eq!(set.challenge.len(), 1);
    }
}
