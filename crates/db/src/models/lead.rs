//! Lead entity model and DTOs.

use std::collections::BTreeMap;

use leadtracker_core::lead::LeadInput;
use leadtracker_core::types::{LeadId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A lead row from the `leads` table.
///
/// Serialized with camelCase keys, which is the wire format of the API.
/// `status` and `project_type` are stored as their display strings; the
/// validation layer guarantees only known values reach the table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub linkedin_profile: String,
    pub project_type: String,
    pub requirement: String,
    pub notes: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new lead.
///
/// Every field is optional at the wire level so that missing required
/// fields surface as collected validation messages instead of a
/// deserialization error. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLead {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub linkedin_profile: Option<String>,
    pub project_type: Option<String>,
    pub requirement: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

impl From<CreateLead> for LeadInput {
    fn from(dto: CreateLead) -> Self {
        LeadInput {
            full_name: dto.full_name,
            phone_number: dto.phone_number,
            email: dto.email,
            linkedin_profile: dto.linkedin_profile,
            project_type: dto.project_type,
            requirement: dto.requirement,
            notes: dto.notes,
            status: dto.status,
        }
    }
}

/// DTO for updating an existing lead. All fields are optional; absent
/// fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLead {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub linkedin_profile: Option<String>,
    pub project_type: Option<String>,
    pub requirement: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

impl From<UpdateLead> for LeadInput {
    fn from(dto: UpdateLead) -> Self {
        LeadInput {
            full_name: dto.full_name,
            phone_number: dto.phone_number,
            email: dto.email,
            linkedin_profile: dto.linkedin_profile,
            project_type: dto.project_type,
            requirement: dto.requirement,
            notes: dto.notes,
            status: dto.status,
        }
    }
}

/// DTO for the status-only update endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLeadStatus {
    pub status: Option<String>,
}

/// Aggregated lead counts, recomputed from the live table on every call.
///
/// Groups with zero leads are absent from the maps, so the keys of
/// `by_status` are exactly the statuses currently in use.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total: i64,
    pub by_status: BTreeMap<String, i64>,
    pub by_project_type: BTreeMap<String, i64>,
}
