use std::collections::BTreeMap;

use serde::Deserialize;

use super::wire::{
    TransportBool, TransportError, TransportText, TransportUint, decode_array, decode_object_map,
    lenient_u32, numeric_key,
};
use crate::domain::{Plan, PlanId, RegionId};

#[derive(Debug, Clone, Deserialize)]
struct PlanJson {
    #[serde(rename = "VPSPLANID")]
    id: TransportUint,
    name: String,
    #[serde(deserialize_with = "lenient_u32")]
    vcpu_count: u32,
    ram: TransportUint,
    disk: TransportUint,
    bandwidth: TransportText,
    price_per_month: TransportText,
    windows: TransportBool,
    #[serde(default)]
    plan_type: Option<String>,
    #[serde(default)]
    available_locations: Vec<TransportUint>,
}

impl From<PlanJson> for Plan {
    fn from(value: PlanJson) -> Self {
        Self {
            id: PlanId::new(value.id.0),
            name: value.name,
            vcpu_count: value.vcpu_count,
            ram: value.ram.0,
            disk: value.disk.0,
            bandwidth: value.bandwidth.into_string(),
            price_per_month: value.price_per_month.into_string(),
            windows: value.windows.0,
            plan_type: value.plan_type,
            available_locations: value
                .available_locations
                .into_iter()
                .map(|id| RegionId::new(id.0))
                .collect(),
        }
    }
}

pub fn decode_plans_json_response(json: &str) -> Result<BTreeMap<PlanId, Plan>, TransportError> {
    decode_object_map(
        json,
        |key| numeric_key(key).map(PlanId::new),
        |plan: PlanJson| Ok(Plan::from(plan)),
    )
}

/// Decode the plan ids a server may be upgraded to (`[29, 93, 94]`).
pub fn decode_plan_ids_json_response(json: &str) -> Result<Vec<PlanId>, TransportError> {
    let parsed: Vec<TransportUint> = decode_array(json)?;
    Ok(parsed.into_iter().map(|id| PlanId::new(id.0)).collect())
}
