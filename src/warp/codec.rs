use crate::entities::icon::{ItemIcon, LORE_ROWS};
use crate::host::PlayerId;
use crate::warp::record::Warp;
use crate::world::location::Location;
use serde::{Deserialize, Serialize};

/// Stored shape of one warp: a flat mapping whose `location` and `guiItem`
/// values are themselves JSON-encoded strings, matching the save format the
/// plugin has always written.
#[derive(Debug, Serialize, Deserialize)]
struct StoredWarp {
    name: String,
    location: String,
    #[serde(rename = "isPrivate")]
    is_private: bool,
    #[serde(rename = "trustedPlayers")]
    trusted_players: Vec<String>,
    #[serde(rename = "guiItem")]
    gui_item: String,
    owner: String,
    lore: [String; LORE_ROWS],
    visitors: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    Encode(String),
    Decode(String),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::Encode(detail) => write!(f, "warp encode failed: {}", detail),
            CodecError::Decode(detail) => write!(f, "warp decode failed: {}", detail),
        }
    }
}

impl std::error::Error for CodecError {}

pub fn encode(warp: &Warp) -> Result<String, CodecError> {
    let location = serde_json::to_string(warp.location())
        .map_err(|err| CodecError::Encode(format!("location: {}", err)))?;
    let gui_item = serde_json::to_string(warp.icon())
        .map_err(|err| CodecError::Encode(format!("guiItem: {}", err)))?;
    let stored = StoredWarp {
        name: warp.name().to_string(),
        location,
        is_private: warp.is_private(),
        trusted_players: warp
            .trusted()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect(),
        gui_item,
        owner: warp.owner().as_str().to_string(),
        lore: warp.icon().lore.clone(),
        visitors: warp.visitors(),
    };
    serde_json::to_string(&stored).map_err(|err| CodecError::Encode(err.to_string()))
}

pub fn decode(data: &str) -> Result<Warp, CodecError> {
    let stored: StoredWarp =
        serde_json::from_str(data).map_err(|err| CodecError::Decode(err.to_string()))?;
    let location: Location = serde_json::from_str(&stored.location)
        .map_err(|err| CodecError::Decode(format!("location: {}", err)))?;
    let icon: ItemIcon = serde_json::from_str(&stored.gui_item)
        .map_err(|err| CodecError::Decode(format!("guiItem: {}", err)))?;
    let trusted = stored
        .trusted_players
        .into_iter()
        .map(PlayerId::new)
        .collect();
    Ok(Warp::from_parts(
        stored.name,
        location,
        stored.is_private,
        trusted,
        icon,
        PlayerId::new(stored.owner),
        stored.lore,
        stored.visitors,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::icon::Material;

    fn sample_warp() -> Warp {
        let mut warp = Warp::new(
            "spawn",
            Location::new("world", 12.5, 64.0, -8.0).with_facing(90.0, 0.0),
            PlayerId::new("u-1"),
        );
        warp.set_lore_row(1, "a");
        warp.set_lore_row(2, "b");
        warp.set_lore_row(3, "c");
        warp
    }

    #[test]
    fn round_trip_reproduces_every_field() {
        let warp = sample_warp();
        let encoded = encode(&warp).expect("encode");
        let decoded = decode(&encoded).expect("decode");
        assert_eq!(decoded, warp);
    }

    #[test]
    fn round_trip_covers_trust_privacy_and_visitors() {
        let mut warp = sample_warp();
        warp.set_privacy(true);
        warp.trust(PlayerId::new("u-2")).unwrap();
        warp.trust(PlayerId::new("u-3")).unwrap();
        warp.set_icon_material(Material::new("beacon"));
        let visitor = crate::host::testutil::FakePlayer::new("u-2", "Bob");
        warp.visit(&visitor).unwrap();

        let decoded = decode(&encode(&warp).expect("encode")).expect("decode");
        assert_eq!(decoded, warp);
        assert_eq!(decoded.trusted(), &[PlayerId::new("u-2"), PlayerId::new("u-3")]);
        assert_eq!(decoded.visitors(), 1);
        assert_eq!(decoded.icon().material, Material::new("beacon"));
    }

    #[test]
    fn encoded_form_uses_the_stored_key_names() {
        let encoded = encode(&sample_warp()).expect("encode");
        let value: serde_json::Value = serde_json::from_str(&encoded).expect("json");
        let object = value.as_object().expect("object");
        for key in [
            "name",
            "location",
            "isPrivate",
            "trustedPlayers",
            "guiItem",
            "owner",
            "lore",
            "visitors",
        ] {
            assert!(object.contains_key(key), "missing key {}", key);
        }
        assert_eq!(object.len(), 8);
        // Nested values are themselves encoded strings.
        assert!(object["location"].is_string());
        assert!(object["guiItem"].is_string());
        assert_eq!(object["lore"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn decode_rejects_malformed_records() {
        assert!(decode("not json").is_err());
        assert!(decode("{\"name\":\"x\"}").is_err());

        // Well-formed mapping, broken nested location string.
        let mut warp_json: serde_json::Value =
            serde_json::from_str(&encode(&sample_warp()).unwrap()).unwrap();
        warp_json["location"] = serde_json::Value::String("garbage".to_string());
        let tampered = warp_json.to_string();
        assert!(matches!(decode(&tampered), Err(CodecError::Decode(_))));
    }
}
