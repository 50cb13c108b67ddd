//! Lead domain types, normalization, and validation.
//!
//! Everything here is pure: raw field values come in, normalized values or
//! per-field error messages come out. Storage and HTTP concerns live in the
//! `db` and `api` crates.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length for a client name in characters.
pub const FULL_NAME_MIN_LENGTH: usize = 2;

/// Maximum length for a client name in characters.
pub const FULL_NAME_MAX_LENGTH: usize = 100;

/// Maximum length for the project requirement in characters.
pub const REQUIREMENT_MAX_LENGTH: usize = 2000;

/// Maximum length for free-form notes in characters.
pub const NOTES_MAX_LENGTH: usize = 2000;

/// Regex pattern for phone numbers: optional `+`, optional parenthesized
/// country code, then digits with `-`, `.`, `/`, and whitespace separators.
const PHONE_PATTERN: &str = r"^[+]?[(]?[0-9]{1,4}[)]?[-\s./0-9]*$";

/// Regex pattern for a `local@domain.tld` shaped email address.
const EMAIL_PATTERN: &str = r"^\w+([\.-]?\w+)*@\w+([\.-]?\w+)*(\.\w{2,3})+$";

/// Compiled phone regex. Compiled once, reused forever.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid regex"));

/// Compiled email regex. Compiled once, reused forever.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Lead Status
// ---------------------------------------------------------------------------

/// Workflow status of a lead.
///
/// Any status can be assigned at any time; there is no transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeadStatus {
    /// Status assigned at creation when none is supplied.
    #[default]
    New,
    Contacted,
    #[serde(rename = "Followed Up")]
    FollowedUp,
    #[serde(rename = "On Hold")]
    OnHold,
    Dropped,
    Meeting,
    Done,
}

impl LeadStatus {
    /// Return the status name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::FollowedUp => "Followed Up",
            Self::OnHold => "On Hold",
            Self::Dropped => "Dropped",
            Self::Meeting => "Meeting",
            Self::Done => "Done",
        }
    }

    /// Parse a status string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "New" => Some(Self::New),
            "Contacted" => Some(Self::Contacted),
            "Followed Up" => Some(Self::FollowedUp),
            "On Hold" => Some(Self::OnHold),
            "Dropped" => Some(Self::Dropped),
            "Meeting" => Some(Self::Meeting),
            "Done" => Some(Self::Done),
            _ => None,
        }
    }

    /// All valid status values, in workflow order.
    pub const ALL: &'static [&'static str] = &[
        "New",
        "Contacted",
        "Followed Up",
        "On Hold",
        "Dropped",
        "Meeting",
        "Done",
    ];
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Project Type
// ---------------------------------------------------------------------------

/// Category of project a lead is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectType {
    /// Type assigned at creation when none is supplied.
    #[default]
    App,
    Website,
    #[serde(rename = "IOT")]
    Iot,
}

impl ProjectType {
    /// Return the project type name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::App => "App",
            Self::Website => "Website",
            Self::Iot => "IOT",
        }
    }

    /// Parse a project type string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "App" => Some(Self::App),
            "Website" => Some(Self::Website),
            "IOT" => Some(Self::Iot),
            _ => None,
        }
    }

    /// All valid project type values.
    pub const ALL: &'static [&'static str] = &["App", "Website", "IOT"];
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Title-case a name: first letter of each space-separated word uppercased,
/// the rest lowercased. Runs of spaces are preserved.
pub fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

/// Validate and normalize a client name: trim, enforce length bounds,
/// title-case.
pub fn validate_full_name(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Client name is required".to_string());
    }

    let name = title_case(trimmed);
    let length = name.chars().count();
    if length < FULL_NAME_MIN_LENGTH {
        return Err("Name must be at least 2 characters long".to_string());
    }
    if length > FULL_NAME_MAX_LENGTH {
        return Err("Name cannot exceed 100 characters".to_string());
    }

    Ok(name)
}

/// Validate and normalize a phone number: trim, then match against
/// [`PHONE_PATTERN`]. Empty is allowed (the field is optional).
pub fn validate_phone_number(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !PHONE_RE.is_match(trimmed) {
        return Err("Please provide a valid phone number".to_string());
    }
    Ok(trimmed.to_string())
}

/// Validate and normalize an email address: trim, lowercase, then match
/// against [`EMAIL_PATTERN`]. Empty is allowed (the field is optional).
pub fn validate_email(raw: &str) -> Result<String, String> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return Ok(String::new());
    }
    if !EMAIL_RE.is_match(&normalized) {
        return Err("Please provide a valid email address".to_string());
    }
    Ok(normalized)
}

/// Normalize a LinkedIn profile URL. Stored as given apart from trimming.
pub fn validate_linkedin_profile(raw: &str) -> Result<String, String> {
    Ok(raw.trim().to_string())
}

/// Validate and normalize the project requirement: trim, required,
/// bounded length.
pub fn validate_requirement(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Project requirement is required".to_string());
    }
    if trimmed.chars().count() > REQUIREMENT_MAX_LENGTH {
        return Err("Requirement cannot exceed 2000 characters".to_string());
    }
    Ok(trimmed.to_string())
}

/// Validate and normalize notes: trim, bounded length. Empty is allowed.
pub fn validate_notes(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() > NOTES_MAX_LENGTH {
        return Err("Notes cannot exceed 2000 characters".to_string());
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Lead input validation
// ---------------------------------------------------------------------------

/// Raw, unvalidated lead fields as supplied by a caller.
///
/// Create and partial-update requests both reduce to this shape; they differ
/// only in which fields must be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadInput {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub linkedin_profile: Option<String>,
    pub project_type: Option<String>,
    pub requirement: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// A fully validated and normalized lead, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub linkedin_profile: String,
    pub project_type: ProjectType,
    pub requirement: String,
    pub notes: String,
    pub status: LeadStatus,
}

/// Normalized values for the fields present in a partial update.
///
/// `None` means the field was not supplied and must be left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadPatch {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub linkedin_profile: Option<String>,
    pub project_type: Option<ProjectType>,
    pub requirement: Option<String>,
    pub notes: Option<String>,
    pub status: Option<LeadStatus>,
}

impl LeadPatch {
    /// True when no field is set, i.e. the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.phone_number.is_none()
            && self.email.is_none()
            && self.linkedin_profile.is_none()
            && self.project_type.is_none()
            && self.requirement.is_none()
            && self.notes.is_none()
            && self.status.is_none()
    }
}

/// Record a field result, collecting the error message on failure.
fn checked<T>(result: Result<T, String>, errors: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(msg) => {
            errors.push(msg);
            None
        }
    }
}

/// Validate input for lead creation.
///
/// Required: `full_name` and `requirement`. `project_type` and `status`
/// fall back to their defaults (`App`, `New`) when absent or empty.
/// All failures are collected so the caller sees every problem at once.
pub fn validate_new(input: &LeadInput) -> Result<NewLead, Vec<String>> {
    let mut errors = Vec::new();

    let full_name = checked(
        validate_full_name(input.full_name.as_deref().unwrap_or_default()),
        &mut errors,
    );
    let phone_number = checked(
        validate_phone_number(input.phone_number.as_deref().unwrap_or_default()),
        &mut errors,
    );
    let email = checked(
        validate_email(input.email.as_deref().unwrap_or_default()),
        &mut errors,
    );
    let linkedin_profile = checked(
        validate_linkedin_profile(input.linkedin_profile.as_deref().unwrap_or_default()),
        &mut errors,
    );
    let requirement = checked(
        validate_requirement(input.requirement.as_deref().unwrap_or_default()),
        &mut errors,
    );
    let notes = checked(
        validate_notes(input.notes.as_deref().unwrap_or_default()),
        &mut errors,
    );

    let project_type = match input.project_type.as_deref() {
        None | Some("") => Some(ProjectType::default()),
        Some(raw) => checked(
            ProjectType::from_str(raw).ok_or_else(|| format!("{raw} is not a valid project type")),
            &mut errors,
        ),
    };
    let status = match input.status.as_deref() {
        None | Some("") => Some(LeadStatus::default()),
        Some(raw) => checked(
            LeadStatus::from_str(raw).ok_or_else(|| format!("{raw} is not a valid status")),
            &mut errors,
        ),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewLead {
        full_name: full_name.unwrap_or_default(),
        phone_number: phone_number.unwrap_or_default(),
        email: email.unwrap_or_default(),
        linkedin_profile: linkedin_profile.unwrap_or_default(),
        project_type: project_type.unwrap_or_default(),
        requirement: requirement.unwrap_or_default(),
        notes: notes.unwrap_or_default(),
        status: status.unwrap_or_default(),
    })
}

/// Validate input for a partial update.
///
/// Only supplied fields are validated and normalized; absent fields stay
/// `None` in the patch. Empty-string enum fields are treated as absent.
/// All failures are collected so the caller sees every problem at once.
pub fn validate_patch(input: &LeadInput) -> Result<LeadPatch, Vec<String>> {
    let mut errors = Vec::new();
    let mut patch = LeadPatch::default();

    if let Some(raw) = input.full_name.as_deref() {
        patch.full_name = checked(validate_full_name(raw), &mut errors);
    }
    if let Some(raw) = input.phone_number.as_deref() {
        patch.phone_number = checked(validate_phone_number(raw), &mut errors);
    }
    if let Some(raw) = input.email.as_deref() {
        patch.email = checked(validate_email(raw), &mut errors);
    }
    if let Some(raw) = input.linkedin_profile.as_deref() {
        patch.linkedin_profile = checked(validate_linkedin_profile(raw), &mut errors);
    }
    if let Some(raw) = input.requirement.as_deref() {
        patch.requirement = checked(validate_requirement(raw), &mut errors);
    }
    if let Some(raw) = input.notes.as_deref() {
        patch.notes = checked(validate_notes(raw), &mut errors);
    }
    match input.project_type.as_deref() {
        None | Some("") => {}
        Some(raw) => {
            patch.project_type = checked(
                ProjectType::from_str(raw)
                    .ok_or_else(|| format!("{raw} is not a valid project type")),
                &mut errors,
            );
        }
    }
    match input.status.as_deref() {
        None | Some("") => {}
        Some(raw) => {
            patch.status = checked(
                LeadStatus::from_str(raw).ok_or_else(|| format!("{raw} is not a valid status")),
                &mut errors,
            );
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(patch)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
