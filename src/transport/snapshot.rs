use std::collections::BTreeMap;

use serde::Deserialize;

use super::wire::{TransportError, TransportUint, decode_object, decode_object_map};
use crate::domain::{AppId, CreateSnapshot, OsId, ServerId, Snapshot, SnapshotId};

#[derive(Debug, Clone, Deserialize)]
struct SnapshotJson {
    #[serde(rename = "SNAPSHOTID")]
    id: String,
    date_created: String,
    description: String,
    size: TransportUint,
    status: String,
    #[serde(rename = "OSID")]
    os_id: TransportUint,
    #[serde(rename = "APPID")]
    app_id: TransportUint,
}

impl TryFrom<SnapshotJson> for Snapshot {
    type Error = TransportError;

    fn try_from(value: SnapshotJson) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SnapshotId::from_wire(value.id)?,
            date_created: value.date_created,
            description: value.description,
            size: value.size.0,
            status: value.status,
            os_id: OsId::new(value.os_id.0),
            app_id: AppId::new(value.app_id.0),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CreatedSnapshotJson {
    #[serde(rename = "SNAPSHOTID")]
    id: String,
}

pub fn encode_create_snapshot_form(request: &CreateSnapshot) -> Vec<(String, String)> {
    let mut params = vec![(ServerId::FIELD.to_owned(), request.server.to_string())];
    if let Some(description) = request.description.as_ref() {
        params.push(("description".to_owned(), description.clone()));
    }
    params
}

pub fn encode_destroy_snapshot_form(id: &SnapshotId) -> Vec<(String, String)> {
    vec![(SnapshotId::FIELD.to_owned(), id.as_str().to_owned())]
}

pub fn decode_snapshots_json_response(
    json: &str,
) -> Result<BTreeMap<SnapshotId, Snapshot>, TransportError> {
    decode_object_map(
        json,
        |key| SnapshotId::from_wire(key.to_owned()).ok(),
        <Snapshot as TryFrom<SnapshotJson>>::try_from,
    )
}

pub fn decode_created_snapshot_json_response(json: &str) -> Result<SnapshotId, TransportError> {
    let parsed: CreatedSnapshotJson = decode_object(json)?;
    Ok(SnapshotId::from_wire(parsed.id)?)
}
