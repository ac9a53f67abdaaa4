use std::collections::BTreeMap;

use serde::Deserialize;

use super::wire::{TransportError, TransportUint, decode_object_map, numeric_key};
use crate::domain::{Iso, IsoId};

#[derive(Debug, Clone, Deserialize)]
struct IsoJson {
    #[serde(rename = "ISOID")]
    id: TransportUint,
    date_created: String,
    filename: String,
    size: TransportUint,
    md5sum: String,
}

impl From<IsoJson> for Iso {
    fn from(value: IsoJson) -> Self {
        Self {
            id: IsoId::new(value.id.0),
            date_created: value.date_created,
            filename: value.filename,
            size: value.size.0,
            md5sum: value.md5sum,
        }
    }
}

pub fn decode_isos_json_response(json: &str) -> Result<BTreeMap<IsoId, Iso>, TransportError> {
    decode_object_map(
        json,
        |key| numeric_key(key).map(IsoId::new),
        |iso: IsoJson| Ok(Iso::from(iso)),
    )
}
