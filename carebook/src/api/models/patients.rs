//! API request/response models for patients.

use super::missing_fields;
use crate::db::models::patients::{PatientCreateDBRequest, PatientDBResponse};
use crate::errors::Error;
use crate::types::{PatientId, ProviderId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub(crate) const MISSING_PROVIDER_ID: &str = "Missing provider_id";
pub(crate) const INVALID_PROVIDER_ID: &str = "Invalid provider_id";

/// Parse a provider id sent as text, in a query string or a JSON string. Absent and blank are both
/// "missing"; anything else that is not an integer is "invalid".
pub fn parse_provider_id(raw: Option<&str>) -> Result<ProviderId, Error> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| Error::BadRequest {
        message: MISSING_PROVIDER_ID.to_string(),
    })?;

    raw.parse().map_err(|_| Error::BadRequest {
        message: INVALID_PROVIDER_ID.to_string(),
    })
}

/// `provider_id` as it arrives in a JSON body, before it is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawProviderId {
    Number(ProviderId),
    Text(String),
}

/// Body of `POST /api/patients`.
///
/// `provider_id` may be sent as a number or a numeric string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PatientCreate {
    #[schema(value_type = Option<i64>)]
    pub provider_id: Option<RawProviderId>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<String>,
    pub status: Option<String>,
    pub address: Option<String>,
}

impl PatientCreate {
    /// The owning provider, checked the same way as the `provider_id` query parameter.
    pub fn provider_id(&self) -> Result<ProviderId, Error> {
        match &self.provider_id {
            Some(RawProviderId::Number(id)) => Ok(*id),
            Some(RawProviderId::Text(raw)) => parse_provider_id(Some(raw)),
            None => parse_provider_id(None),
        }
    }

    /// Check required fields and normalize into a storage request for `provider_id`.
    ///
    /// Names are trimmed and capitalized, the address is trimmed, and `dob` and `status` pass
    /// through untouched. Name lengths are not checked here; the schema enforces them.
    pub fn into_db_request(self, provider_id: ProviderId) -> Result<PatientCreateDBRequest, Error> {
        match (self.first_name, self.last_name, self.dob, self.status, self.address) {
            (Some(first_name), Some(last_name), Some(dob), Some(status), Some(address)) => Ok(PatientCreateDBRequest {
                provider_id,
                first_name: capitalize_name(&first_name),
                middle_name: self.middle_name.as_deref().map(capitalize_name).unwrap_or_default(),
                last_name: capitalize_name(&last_name),
                dob,
                status,
                address: address.trim().to_string(),
            }),
            (first_name, last_name, dob, status, address) => Err(missing_fields(&[
                ("first_name", first_name.is_some()),
                ("last_name", last_name.is_some()),
                ("dob", dob.is_some()),
                ("status", status.is_some()),
                ("address", address.is_some()),
            ])),
        }
    }
}

/// Strip surrounding whitespace, then titlecase the first character and lowercase the rest.
///
/// "  mcdonald " becomes "Mcdonald" and "O'NEIL" becomes "O'neil": only the first character of
/// the whole string is changed to titlecase.
pub fn capitalize_name(name: &str) -> String {
    let name = name.trim();
    match name.chars().next() {
        Some(first) => {
            let mut out = titlecase(first);
            out.push_str(&name[first.len_utf8()..].to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Unicode titlecase mapping of a single character.
///
/// Titlecase equals uppercase except for the digraphs, the Greek letters with ypogegrammeni, and
/// characters whose uppercase expands to several letters ("ß" is "Ss", not "SS").
fn titlecase(c: char) -> String {
    let mapped = match c {
        '\u{1C4}'..='\u{1C6}' => '\u{1C5}',
        '\u{1C7}'..='\u{1C9}' => '\u{1C8}',
        '\u{1CA}'..='\u{1CC}' => '\u{1CB}',
        '\u{1F1}'..='\u{1F3}' => '\u{1F2}',
        // Iota-subscript forms: the lowercase row maps to the titlecase row 8 code points on
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8).unwrap_or(c)
        }
        '\u{1F88}'..='\u{1F8F}' | '\u{1F98}'..='\u{1F9F}' | '\u{1FA8}'..='\u{1FAF}' => c,
        '\u{1FB3}' | '\u{1FBC}' => '\u{1FBC}',
        '\u{1FC3}' | '\u{1FCC}' => '\u{1FCC}',
        '\u{1FF3}' | '\u{1FFC}' => '\u{1FFC}',
        '\u{1FB2}' => return "\u{1FBA}\u{345}".to_string(),
        '\u{1FB4}' => return "\u{386}\u{345}".to_string(),
        '\u{1FB7}' => return "\u{391}\u{342}\u{345}".to_string(),
        '\u{1FC2}' => return "\u{1FCA}\u{345}".to_string(),
        '\u{1FC4}' => return "\u{389}\u{345}".to_string(),
        '\u{1FC7}' => return "\u{397}\u{342}\u{345}".to_string(),
        '\u{1FF2}' => return "\u{1FFA}\u{345}".to_string(),
        '\u{1FF4}' => return "\u{38F}\u{345}".to_string(),
        '\u{1FF7}' => return "\u{3A9}\u{342}\u{345}".to_string(),
        '\u{149}' => return "\u{2BC}N".to_string(),
        _ => {
            // Multi-letter expansions keep only their first letter uppercase: "ß" -> "Ss", "ﬁ" -> "Fi"
            let mut upper = c.to_uppercase();
            let mut out: String = upper.next().into_iter().collect();
            out.extend(upper.flat_map(char::to_lowercase));
            return out;
        }
    };
    mapped.to_string()
}

/// Query parameters for listing patients.
///
/// `provider_id` is taken as a string so that an absent or blank value can be told apart from a
/// malformed one.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListPatientsQuery {
    /// Provider whose patients to list
    #[param(value_type = Option<i64>)]
    pub provider_id: Option<String>,
}

/// Patient as returned by the API. The owning provider is not echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatientResponse {
    pub id: PatientId,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub dob: String,
    pub status: String,
    pub address: String,
}

impl From<PatientDBResponse> for PatientResponse {
    fn from(db: PatientDBResponse) -> Self {
        Self {
            id: db.id,
            first_name: db.first_name,
            middle_name: db.middle_name,
            last_name: db.last_name,
            dob: db.dob,
            status: db.status,
            address: db.address,
        }
    }
}
