use std::collections::BTreeMap;

use serde::Deserialize;

use super::wire::{
    TransportBool, TransportError, TransportText, TransportUint, decode_object_map, numeric_key,
};
use crate::domain::{Os, OsId};

#[derive(Debug, Clone, Deserialize)]
struct OsJson {
    #[serde(rename = "OSID")]
    id: TransportUint,
    name: String,
    arch: String,
    family: String,
    windows: TransportBool,
    #[serde(default)]
    surcharge: Option<TransportText>,
}

impl From<OsJson> for Os {
    fn from(value: OsJson) -> Self {
        Self {
            id: OsId::new(value.id.0),
            name: value.name,
            arch: value.arch,
            family: value.family,
            windows: value.windows.0,
            surcharge: value.surcharge.map(TransportText::into_string),
        }
    }
}

/// Decode both `v1/os/list` and `v1/server/os_change_list` bodies.
pub fn decode_os_list_json_response(json: &str) -> Result<BTreeMap<OsId, Os>, TransportError> {
    decode_object_map(
        json,
        |key| numeric_key(key).map(OsId::new),
        |os: OsJson| Ok(Os::from(os)),
    )
}
