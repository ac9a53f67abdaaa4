use std::collections::BTreeMap;

use serde::Deserialize;

use super::wire::{TransportError, TransportUint, decode_object, decode_object_map, numeric_key};
use crate::domain::{CreateScript, Script, ScriptId, ScriptType, UpdateScript};

#[derive(Debug, Clone, Deserialize)]
struct ScriptJson {
    #[serde(rename = "SCRIPTID")]
    id: TransportUint,
    date_created: String,
    date_modified: String,
    name: String,
    #[serde(rename = "type")]
    script_type: String,
    script: String,
}

impl TryFrom<ScriptJson> for Script {
    type Error = TransportError;

    fn try_from(value: ScriptJson) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ScriptId::new(value.id.0),
            date_created: value.date_created,
            date_modified: value.date_modified,
            name: value.name,
            script_type: ScriptType::parse(&value.script_type)?,
            script: value.script,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CreatedScriptJson {
    #[serde(rename = "SCRIPTID")]
    id: TransportUint,
}

pub fn encode_create_script_form(request: &CreateScript) -> Vec<(String, String)> {
    vec![
        (CreateScript::NAME_FIELD.to_owned(), request.name().to_owned()),
        (
            CreateScript::SCRIPT_FIELD.to_owned(),
            request.script().to_owned(),
        ),
        (
            ScriptType::FIELD.to_owned(),
            request.script_type().as_str().to_owned(),
        ),
    ]
}

pub fn encode_update_script_form(request: &UpdateScript) -> Vec<(String, String)> {
    let mut params = vec![(ScriptId::FIELD.to_owned(), request.id.to_string())];
    if let Some(name) = request.name.as_ref() {
        params.push((CreateScript::NAME_FIELD.to_owned(), name.clone()));
    }
    if let Some(script) = request.script.as_ref() {
        params.push((CreateScript::SCRIPT_FIELD.to_owned(), script.clone()));
    }
    params
}

pub fn encode_destroy_script_form(id: ScriptId) -> Vec<(String, String)> {
    vec![(ScriptId::FIELD.to_owned(), id.to_string())]
}

pub fn decode_scripts_json_response(
    json: &str,
) -> Result<BTreeMap<ScriptId, Script>, TransportError> {
    decode_object_map(
        json,
        |key| numeric_key(key).map(ScriptId::new),
        <Script as TryFrom<ScriptJson>>::try_from,
    )
}

pub fn decode_created_script_json_response(json: &str) -> Result<ScriptId, TransportError> {
    let parsed: CreatedScriptJson = decode_object(json)?;
    Ok(ScriptId::new(parsed.id.0))
}
