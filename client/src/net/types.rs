//! Request and response DTOs for the PayNest REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend verbatim: database-backed records use the
//! PascalCase column names (`FullName`, `ApartmentID`), request payloads and
//! log aggregates use snake_case. Optional fields default so partially filled
//! rows still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================
// Auth
// =============================================================

/// Signed-in user record as returned by `/login`.
///
/// Unknown columns are kept in `extra` so the record written to storage is
/// the same one the backend sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserID", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(rename = "FullName", default)]
    pub full_name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Phone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "ProfilePicture", default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Name to greet the user with; falls back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() { &self.email } else { &self.full_name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Successful login or OTP verification.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpVerifyRequest {
    pub email: String,
    pub code: String,
    pub trust_device: bool,
    pub remember_me: bool,
}

/// Registration phone check: `POST /auth/verify-otp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OtpCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub new_password: String,
    pub confirm_password: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================
// Profile
// =============================================================

/// Landlord profile from `GET /profile`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(rename = "DisplayName")]
    pub display_name: Option<String>,
    #[serde(rename = "Bio")]
    pub bio: Option<String>,
    #[serde(rename = "DateOfBirth")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "County")]
    pub county: Option<String>,
    #[serde(rename = "PostalCode")]
    pub postal_code: Option<String>,
    #[serde(rename = "SupportEmail")]
    pub support_email: Option<String>,
    #[serde(rename = "SupportPhone")]
    pub support_phone: Option<String>,
    #[serde(rename = "NationalID")]
    pub national_id: Option<String>,
    #[serde(rename = "KRA_PIN")]
    pub kra_pin: Option<String>,
    #[serde(rename = "MpesaPaybill")]
    pub mpesa_paybill: Option<String>,
    #[serde(rename = "MpesaTill")]
    pub mpesa_till: Option<String>,
    #[serde(rename = "MpesaAccountName")]
    pub mpesa_account_name: Option<String>,
    #[serde(rename = "BankName")]
    pub bank_name: Option<String>,
    #[serde(rename = "BankBranch")]
    pub bank_branch: Option<String>,
    #[serde(rename = "AccountName")]
    pub account_name: Option<String>,
    #[serde(rename = "AccountNumber")]
    pub account_number: Option<String>,
    #[serde(rename = "ProfilePicture")]
    pub profile_picture: Option<String>,
}

// =============================================================
// Landing page feedback
// =============================================================

/// Free-form feedback. Sent as-is, empty fields included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackRequest {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Message")]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RatingRequest {
    #[serde(rename = "RatingValue")]
    pub rating_value: u8,
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
}

// =============================================================
// History logs
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Apartment {
    #[serde(rename = "ApartmentID")]
    pub apartment_id: i64,
    #[serde(rename = "ApartmentName", default)]
    pub apartment_name: String,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
}

/// `/myapartments` answers with either a bare list or `{ "apartments": [...] }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ApartmentsResponse {
    List(Vec<Apartment>),
    Wrapped { apartments: Vec<Apartment> },
}

impl ApartmentsResponse {
    #[must_use]
    pub fn into_vec(self) -> Vec<Apartment> {
        match self {
            Self::List(items) | Self::Wrapped { apartments: items } => items,
        }
    }
}

/// Aggregates for the selected filters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogStats {
    pub transfers: u32,
    pub vacates: u32,
    pub units_impacted: u32,
    pub top_reason: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Transfer,
    Vacate,
}

impl EventKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Transfer => "Transfer",
            Self::Vacate => "Vacate",
        }
    }
}

/// One entry of the merged transfer/vacate timeline.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub timestamp: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<i64>,
    #[serde(default)]
    pub old_unit_id: Option<i64>,
    #[serde(default)]
    pub new_unit_id: Option<i64>,
    #[serde(default)]
    pub unit_id: Option<i64>,
    #[serde(default)]
    pub apartment_id: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TimelineEvent {
    /// Detail line, defaulting to a kind-specific placeholder.
    #[must_use]
    pub fn detail_text(&self) -> String {
        match self.detail.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d.to_owned(),
            _ => match self.kind {
                EventKind::Transfer => "Transfer".to_owned(),
                EventKind::Vacate => "Vacate recorded".to_owned(),
            },
        }
    }

    /// `Unit 5 → 1` for transfers; `None` for vacates.
    #[must_use]
    pub fn unit_move(&self) -> Option<String> {
        if self.kind != EventKind::Transfer {
            return None;
        }
        Some(format!("Unit {} → {}", dash_or(self.old_unit_id), dash_or(self.new_unit_id)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TransferLog {
    #[serde(rename = "LogID")]
    pub log_id: i64,
    #[serde(rename = "TenantID", default)]
    pub tenant_id: Option<i64>,
    #[serde(rename = "OldUnitID", default)]
    pub old_unit_id: Option<i64>,
    #[serde(rename = "NewUnitID", default)]
    pub new_unit_id: Option<i64>,
    #[serde(rename = "TransferDate", default)]
    pub transfer_date: Option<String>,
    #[serde(rename = "Reason", default)]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VacateLog {
    #[serde(rename = "LogID")]
    pub log_id: i64,
    #[serde(rename = "TenantID", default)]
    pub tenant_id: Option<i64>,
    #[serde(rename = "UnitID", default)]
    pub unit_id: Option<i64>,
    #[serde(rename = "ApartmentID", default)]
    pub apartment_id: Option<i64>,
    #[serde(rename = "VacateDate", default)]
    pub vacate_date: Option<String>,
    #[serde(rename = "Reason", default)]
    pub reason: Option<String>,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
}

/// Most recent transfers and vacates for the side tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecentLogs {
    pub transfers: Vec<TransferLog>,
    pub vacates: Vec<VacateLog>,
}

/// Render an optional id, using an em dash when absent.
#[must_use]
pub fn dash_or(value: Option<i64>) -> String {
    value.map_or_else(|| "—".to_owned(), |v| v.to_string())
}

/// Render optional text, using an em dash when absent or blank.
#[must_use]
pub fn dash_or_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "—".to_owned(),
    }
}
