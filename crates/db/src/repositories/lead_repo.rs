//! Repository for the `leads` table.

use std::sync::{LazyLock, Mutex};

use leadtracker_core::lead::{LeadPatch, LeadStatus, NewLead};
use leadtracker_core::query::{like_pattern, LeadQuery, SortKey, StatusFilter};
use leadtracker_core::types::LeadId;
use sqlx::PgPool;
use uuid::{ContextV7, Timestamp, Uuid};

use crate::models::lead::{Lead, LeadStats};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, phone_number, email, linkedin_profile, \
                       project_type, requirement, notes, status, created_at, updated_at";

/// Clock context for v7 id generation. Keeps ids strictly increasing even
/// when several leads are created within the same millisecond, so the
/// `(created_at, id)` sort is insertion order.
static V7_CONTEXT: LazyLock<Mutex<ContextV7>> = LazyLock::new(|| Mutex::new(ContextV7::new()));

/// Generate a time-ordered lead id.
fn new_lead_id() -> LeadId {
    Uuid::new_v7(Timestamp::now(&*V7_CONTEXT))
}

/// Provides CRUD, filtered listing, and aggregation for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead, returning the created row. The id is assigned
    /// here; `created_at` and `updated_at` come from the table defaults.
    pub async fn create(pool: &PgPool, input: &NewLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads \
                (id, full_name, phone_number, email, linkedin_profile, \
                 project_type, requirement, notes, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(new_lead_id())
            .bind(&input.full_name)
            .bind(&input.phone_number)
            .bind(&input.email)
            .bind(&input.linkedin_profile)
            .bind(input.project_type.as_str())
            .bind(&input.requirement)
            .bind(&input.notes)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a lead by its id.
    pub async fn find_by_id(pool: &PgPool, id: LeadId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List leads matching `query`, fully materialized (no pagination).
    ///
    /// The search term is matched case-insensitively as a literal substring
    /// against full_name, email, phone_number, linkedin_profile, and
    /// requirement; a lead matches when any of them contains it. Rows with
    /// equal `created_at` come back in insertion order (time-ordered ids).
    pub async fn list(pool: &PgPool, query: &LeadQuery) -> Result<Vec<Lead>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if matches!(query.status, StatusFilter::Exact(_)) {
            conditions.push(format!("status = ${bind_idx}"));
            bind_idx += 1;
        }
        if query.search.is_some() {
            conditions.push(format!(
                "(full_name ILIKE ${bind_idx} \
                  OR email ILIKE ${bind_idx} \
                  OR phone_number ILIKE ${bind_idx} \
                  OR linkedin_profile ILIKE ${bind_idx} \
                  OR requirement ILIKE ${bind_idx})"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let order_by = match query.sort {
            SortKey::Newest => "created_at DESC, id",
            SortKey::Oldest => "created_at ASC, id",
            SortKey::Name => "full_name ASC, id",
        };

        let sql = format!("SELECT {COLUMNS} FROM leads {where_clause} ORDER BY {order_by}");

        let mut q = sqlx::query_as::<_, Lead>(&sql);

        // Bind dynamic parameters in order.
        if let StatusFilter::Exact(ref status) = query.status {
            q = q.bind(status);
        }
        if let Some(ref term) = query.search {
            q = q.bind(like_pattern(term));
        }

        q.fetch_all(pool).await
    }

    /// Apply a partial update. Only non-`None` patch fields change; the
    /// others keep their stored values. Always bumps `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: LeadId,
        patch: &LeadPatch,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET \
                full_name = COALESCE($2, full_name), \
                phone_number = COALESCE($3, phone_number), \
                email = COALESCE($4, email), \
                linkedin_profile = COALESCE($5, linkedin_profile), \
                project_type = COALESCE($6, project_type), \
                requirement = COALESCE($7, requirement), \
                notes = COALESCE($8, notes), \
                status = COALESCE($9, status), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(&patch.full_name)
            .bind(&patch.phone_number)
            .bind(&patch.email)
            .bind(&patch.linkedin_profile)
            .bind(patch.project_type.map(|t| t.as_str()))
            .bind(&patch.requirement)
            .bind(&patch.notes)
            .bind(patch.status.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Set only the status, bumping `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: LeadId,
        status: LeadStatus,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a lead by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: LeadId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Compute grouped lead counts from the live table. Three queries, no
    /// caching; the dataset is small by design.
    pub async fn stats(pool: &PgPool) -> Result<LeadStats, sqlx::Error> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leads")
            .fetch_one(pool)
            .await?;

        let by_status: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM leads GROUP BY status")
                .fetch_all(pool)
                .await?;

        let by_project_type: Vec<(String, i64)> =
            sqlx::query_as("SELECT project_type, COUNT(*) FROM leads GROUP BY project_type")
                .fetch_all(pool)
                .await?;

        Ok(LeadStats {
            total,
            by_status: by_status.into_iter().collect(),
            by_project_type: by_project_type.into_iter().collect(),
        })
    }
}
