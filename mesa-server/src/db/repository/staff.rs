//! Staff Repository

use super::{RepoError, RepoResult};
use shared::models::{StaffMember, StaffSession};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<StaffMember>> {
    let staff = sqlx::query_as::<_, StaffMember>("SELECT id, name, role, pin FROM staff ORDER BY name")
        .fetch_all(pool)
        .await?;
    Ok(staff)
}

pub async fn find_by_id(pool: &SqlitePool, id: &str) -> RepoResult<Option<StaffMember>> {
    let member =
        sqlx::query_as::<_, StaffMember>("SELECT id, name, role, pin FROM staff WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(member)
}

pub async fn create(pool: &SqlitePool, member: &StaffMember) -> RepoResult<StaffMember> {
    sqlx::query("INSERT INTO staff (id, name, role, pin) VALUES (?, ?, ?, ?)")
        .bind(&member.id)
        .bind(&member.name)
        .bind(member.role)
        .bind(&member.pin)
        .execute(pool)
        .await?;
    find_by_id(pool, &member.id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create staff member".into()))
}

/// Plain-text name + PIN match
pub async fn find_by_credentials(
    pool: &SqlitePool,
    name: &str,
    pin: &str,
) -> RepoResult<Option<StaffSession>> {
    let session = sqlx::query_as::<_, StaffSession>(
        "SELECT id, name, role FROM staff WHERE name = ? AND pin = ? LIMIT 1",
    )
    .bind(name)
    .bind(pin)
    .fetch_optional(pool)
    .await?;
    Ok(session)
}

pub async fn delete(pool: &SqlitePool, id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM staff WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
