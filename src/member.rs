// src/member.rs

use serde::{Deserialize, Serialize};

/// One corporation member as returned by EveWho and as stored in the
/// snapshot file. `character_id` is the diff key; `name` is display only.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Member {
    pub character_id: i64,
    pub name: String,
}

/// Envelope for the EveWho corplist response. A body without a
/// `characters` field deserializes to an empty roster.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CorpList {
    #[serde(default)]
    pub characters: Vec<Member>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_corplist() {
        let body = r#"{"characters":[{"character_id":1,"name":"Alice"},{"character_id":2,"name":"Bob"}]}"#;
        let list: CorpList = serde_json::from_str(body).unwrap();
        assert_eq!(list.characters.len(), 2);
        assert_eq!(list.characters[0].character_id, 1);
        assert_eq!(list.characters[1].name, "Bob");
    }

    #[test]
    fn missing_characters_field_is_empty_roster() {
        let list: CorpList = serde_json::from_str(r#"{"info":{"corporation_id":98735707}}"#).unwrap();
        assert!(list.characters.is_empty());
    }

    #[test]
    fn member_roundtrips_through_json() {
        let member = Member {
            character_id: 42,
            name: "Alice".into(),
        };
        let json = serde_json::to_string(&member).unwrap();
        let back: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(back, member);
    }
}
