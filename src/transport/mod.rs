//! Transport layer: wire-format details (form encoding and JSON decoding).

mod account;
mod dns;
mod iso;
mod os;
mod plan;
mod region;
mod script;
mod server;
mod snapshot;
mod wire;

pub use account::decode_account_info_json_response;
pub use dns::{
    decode_domains_json_response, decode_records_json_response, encode_create_domain_form,
    encode_create_record_form, encode_delete_record_form, encode_domain_form,
    encode_update_record_form,
};
pub use iso::decode_isos_json_response;
pub use os::decode_os_list_json_response;
pub use plan::{decode_plan_ids_json_response, decode_plans_json_response};
pub use region::decode_regions_json_response;
pub use script::{
    decode_created_script_json_response, decode_scripts_json_response, encode_create_script_form,
    encode_destroy_script_form, encode_update_script_form,
};
pub use server::{
    decode_created_server_json_response, decode_servers_json_response,
    decode_user_data_json_response, encode_create_server_form, encode_server_id_form,
};
pub use snapshot::{
    decode_created_snapshot_json_response, decode_snapshots_json_response,
    encode_create_snapshot_form, encode_destroy_snapshot_form,
};
pub use wire::TransportError;
