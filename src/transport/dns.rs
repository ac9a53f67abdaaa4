use serde::Deserialize;

use super::wire::{TransportError, TransportUint, decode_object_list, lenient_u32};
use crate::domain::{
    CreateDnsDomain, CreateDnsRecord, DnsDomain, DnsRecord, DnsRecordType, DomainName, RecordId,
    UpdateDnsRecord,
};

#[derive(Debug, Clone, Deserialize)]
struct DnsDomainJson {
    domain: String,
    date_created: String,
}

impl TryFrom<DnsDomainJson> for DnsDomain {
    type Error = TransportError;

    fn try_from(value: DnsDomainJson) -> Result<Self, Self::Error> {
        Ok(Self {
            domain: DomainName::from_wire(value.domain)?,
            date_created: value.date_created,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DnsRecordJson {
    #[serde(rename = "RECORDID")]
    id: TransportUint,
    #[serde(rename = "type")]
    record_type: String,
    name: String,
    data: String,
    #[serde(deserialize_with = "lenient_u32")]
    priority: u32,
    #[serde(deserialize_with = "lenient_u32")]
    ttl: u32,
}

impl TryFrom<DnsRecordJson> for DnsRecord {
    type Error = TransportError;

    fn try_from(value: DnsRecordJson) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RecordId::new(value.id.0),
            record_type: DnsRecordType::parse(&value.record_type)?,
            name: value.name,
            data: value.data,
            priority: value.priority,
            ttl: value.ttl,
        })
    }
}

pub fn encode_domain_form(domain: &DomainName) -> Vec<(String, String)> {
    vec![(DomainName::FIELD.to_owned(), domain.as_str().to_owned())]
}

pub fn encode_create_domain_form(request: &CreateDnsDomain) -> Vec<(String, String)> {
    vec![
        (DomainName::FIELD.to_owned(), request.domain.as_str().to_owned()),
        ("serverip".to_owned(), request.server_ip.to_string()),
    ]
}

pub fn encode_create_record_form(request: &CreateDnsRecord) -> Vec<(String, String)> {
    let mut params = vec![
        (DomainName::FIELD.to_owned(), request.domain.as_str().to_owned()),
        ("name".to_owned(), request.name.clone()),
        (
            DnsRecordType::FIELD.to_owned(),
            request.record_type.as_str().to_owned(),
        ),
        ("data".to_owned(), request.data.clone()),
    ];
    if let Some(ttl) = request.ttl {
        params.push(("ttl".to_owned(), ttl.to_string()));
    }
    if let Some(priority) = request.priority {
        params.push(("priority".to_owned(), priority.to_string()));
    }
    params
}

pub fn encode_update_record_form(request: &UpdateDnsRecord) -> Vec<(String, String)> {
    let mut params = vec![
        (DomainName::FIELD.to_owned(), request.domain.as_str().to_owned()),
        (RecordId::FIELD.to_owned(), request.id.to_string()),
    ];
    if let Some(name) = request.name.as_ref() {
        params.push(("name".to_owned(), name.clone()));
    }
    if let Some(data) = request.data.as_ref() {
        params.push(("data".to_owned(), data.clone()));
    }
    if let Some(ttl) = request.ttl {
        params.push(("ttl".to_owned(), ttl.to_string()));
    }
    if let Some(priority) = request.priority {
        params.push(("priority".to_owned(), priority.to_string()));
    }
    params
}

pub fn encode_delete_record_form(domain: &DomainName, id: RecordId) -> Vec<(String, String)> {
    vec![
        (DomainName::FIELD.to_owned(), domain.as_str().to_owned()),
        (RecordId::FIELD.to_owned(), id.to_string()),
    ]
}

pub fn decode_domains_json_response(json: &str) -> Result<Vec<DnsDomain>, TransportError> {
    decode_object_list(json, <DnsDomain as TryFrom<DnsDomainJson>>::try_from)
}

pub fn decode_records_json_response(json: &str) -> Result<Vec<DnsRecord>, TransportError> {
    decode_object_list(json, <DnsRecord as TryFrom<DnsRecordJson>>::try_from)
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::*;

    fn domain() -> DomainName {
        DomainName::new("example.com").unwrap()
    }

    #[test]
    fn encode_create_domain_form_params() {
        let request = CreateDnsDomain {
            domain: domain(),
            server_ip: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
        };
        assert_eq!(
            encode_create_domain_form(&request),
            vec![
                ("domain".to_owned(), "example.com".to_owned()),
                ("serverip".to_owned(), "10.0.0.1".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_create_record_form_includes_optional_fields_only_when_set() {
        let request = CreateDnsRecord::new(domain(), "www", DnsRecordType::A, "10.0.0.1");
        assert_eq!(
            encode_create_record_form(&request),
            vec![
                ("domain".to_owned(), "example.com".to_owned()),
                ("name".to_owned(), "www".to_owned()),
                ("type".to_owned(), "A".to_owned()),
                ("data".to_owned(), "10.0.0.1".to_owned()),
            ]
        );

        let request = CreateDnsRecord {
            ttl: Some(300),
            priority: Some(10),
            ..CreateDnsRecord::new(domain(), "", DnsRecordType::Mx, "mail.example.com")
        };
        assert_eq!(
            encode_create_record_form(&request),
            vec![
                ("domain".to_owned(), "example.com".to_owned()),
                ("name".to_owned(), "".to_owned()),
                ("type".to_owned(), "MX".to_owned()),
                ("data".to_owned(), "mail.example.com".to_owned()),
                ("ttl".to_owned(), "300".to_owned()),
                ("priority".to_owned(), "10".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_update_record_form_omits_absent_fields() {
        let request = UpdateDnsRecord {
            data: Some("10.0.0.2".to_owned()),
            ..UpdateDnsRecord::new(domain(), RecordId::new(1265276))
        };
        assert_eq!(
            encode_update_record_form(&request),
            vec![
                ("domain".to_owned(), "example.com".to_owned()),
                ("RECORDID".to_owned(), "1265276".to_owned()),
                ("data".to_owned(), "10.0.0.2".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_delete_record_form_params() {
        assert_eq!(
            encode_delete_record_form(&domain(), RecordId::new(7)),
            vec![
                ("domain".to_owned(), "example.com".to_owned()),
                ("RECORDID".to_owned(), "7".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_domains_skips_non_object_elements() {
        let json = r#"
        [
          { "domain": "example.com", "date_created": "2014-12-11 16:20:59" },
          "garbage",
          null
        ]
        "#;

        let parsed = decode_domains_json_response(json).unwrap();
        assert_eq!(
            parsed,
            vec![DnsDomain {
                domain: domain(),
                date_created: "2014-12-11 16:20:59".to_owned(),
            }]
        );
    }

    #[test]
    fn decode_domains_keeps_exact_domain_token() {
        let json = r#"[ { "domain": "example.com ", "date_created": "2014-12-11 16:20:59" } ]"#;

        let parsed = decode_domains_json_response(json).unwrap();
        assert_eq!(parsed[0].domain.as_str(), "example.com ");
    }

    #[test]
    fn decode_records_maps_payload_and_skips_scalars() {
        let json = r#"
        [
          {
            "type": "A",
            "name": "",
            "data": "127.0.0.1",
            "priority": 0,
            "RECORDID": 1265276,
            "ttl": 300
          },
          42
        ]
        "#;

        let parsed = decode_records_json_response(json).unwrap();
        assert_eq!(parsed.len(), 1);
        let record = &parsed[0];
        assert_eq!(record.id, RecordId::new(1265276));
        assert_eq!(record.record_type, DnsRecordType::A);
        assert_eq!(record.name, "");
        assert_eq!(record.data, "127.0.0.1");
        assert_eq!(record.priority, 0);
        assert_eq!(record.ttl, 300);
    }

    #[test]
    fn decode_records_requires_record_id() {
        let json = r#"[ { "type": "A", "name": "", "data": "1.1.1.1", "priority": 0, "ttl": 300 } ]"#;
        let err = decode_records_json_response(json).unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }
}
