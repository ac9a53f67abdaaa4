use serde::Deserialize;

use super::wire::{TransportError, TransportText, decode_object};
use crate::domain::AccountInfo;

#[derive(Debug, Clone, Deserialize)]
struct AccountInfoJson {
    balance: TransportText,
    pending_charges: TransportText,
    last_payment_date: String,
    last_payment_amount: TransportText,
}

pub fn decode_account_info_json_response(json: &str) -> Result<AccountInfo, TransportError> {
    let parsed: AccountInfoJson = decode_object(json)?;
    Ok(AccountInfo {
        balance: parsed.balance.into_string(),
        pending_charges: parsed.pending_charges.into_string(),
        last_payment_date: parsed.last_payment_date,
        last_payment_amount: parsed.last_payment_amount.into_string(),
    })
}
