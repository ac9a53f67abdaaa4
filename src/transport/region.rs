use std::collections::BTreeMap;

use serde::Deserialize;

use super::wire::{TransportBool, TransportError, TransportUint, decode_object_map, numeric_key};
use crate::domain::{Continent, Region, RegionId};

#[derive(Debug, Clone, Deserialize)]
struct RegionJson {
    #[serde(rename = "DCID")]
    id: TransportUint,
    name: String,
    country: String,
    continent: String,
    state: String,
    ddos_protection: TransportBool,
    #[serde(default)]
    block_storage: Option<TransportBool>,
    #[serde(default, rename = "regioncode")]
    region_code: Option<String>,
}

impl TryFrom<RegionJson> for Region {
    type Error = TransportError;

    fn try_from(value: RegionJson) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RegionId::new(value.id.0),
            name: value.name,
            country: value.country,
            continent: Continent::parse(&value.continent)?,
            state: value.state,
            ddos_protection: value.ddos_protection.0,
            block_storage: value.block_storage.map(|flag| flag.0),
            region_code: value.region_code,
        })
    }
}

pub fn decode_regions_json_response(
    json: &str,
) -> Result<BTreeMap<RegionId, Region>, TransportError> {
    decode_object_map(
        json,
        |key| numeric_key(key).map(RegionId::new),
        <Region as TryFrom<RegionJson>>::try_from,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_regions_maps_fields_and_continent() {
        let json = r#"
        {
          "1": {
            "DCID": "1",
            "name": "New Jersey",
            "country": "US",
            "continent": "North America",
            "state": "NJ",
            "ddos_protection": true,
            "block_storage": true,
            "regioncode": "EWR"
          },
          "7": {
            "DCID": 7,
            "name": "Amsterdam",
            "country": "NL",
            "continent": "europe",
            "state": "",
            "ddos_protection": false
          }
        }
        "#;

        let parsed = decode_regions_json_response(json).unwrap();
        assert_eq!(parsed.len(), 2);

        let nj = parsed.get(&RegionId::new(1)).unwrap();
        assert_eq!(nj.id, RegionId::new(1));
        assert_eq!(nj.name, "New Jersey");
        assert_eq!(nj.country, "US");
        assert_eq!(nj.continent, Continent::NorthAmerica);
        assert_eq!(nj.state, "NJ");
        assert!(nj.ddos_protection);
        assert_eq!(nj.block_storage, Some(true));
        assert_eq!(nj.region_code.as_deref(), Some("EWR"));

        let ams = parsed.get(&RegionId::new(7)).unwrap();
        assert_eq!(ams.continent, Continent::Europe);
        assert!(!ams.ddos_protection);
        assert_eq!(ams.block_storage, None);
    }

    #[test]
    fn decode_regions_rejects_unknown_continent() {
        let json = r#"
        {
          "1": {
            "DCID": "1",
            "name": "McMurdo",
            "country": "AQ",
            "continent": "Antarctica",
            "state": "",
            "ddos_protection": false
          }
        }
        "#;

        let err = decode_regions_json_response(json).unwrap_err();
        assert!(matches!(err, TransportError::Validation(_)));
    }
}
