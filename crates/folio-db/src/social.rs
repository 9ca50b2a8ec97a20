use crate::error::{DbError, DbResult};
use crate::models::{SocialProfile, SocialProfileRaw};
use sqlx::{Any, Pool};

/// Insert a social profile link
pub async fn create_profile(
    pool: &Pool<Any>,
    platform: &str,
    username: &str,
    profile_url: &str,
    display_name: &str,
    active: bool,
) -> DbResult<SocialProfile> {
    let result = sqlx::query(
        "INSERT INTO social_profiles (platform, username, profile_url, display_name, active)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(platform)
    .bind(username)
    .bind(profile_url)
    .bind(display_name)
    .bind(if active { 1 } else { 0 })
    .execute(pool)
    .await?;

    let id = result
        .last_insert_id()
        .ok_or(DbError::SqlxError(sqlx::Error::RowNotFound))?;

    let profile = sqlx::query_as::<_, SocialProfileRaw>(
        "SELECT id, platform, username, profile_url, display_name, active
         FROM social_profiles
         WHERE id = ?",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(profile.into())
}

/// List profiles shown on the site (active only)
pub async fn list_active_profiles(pool: &Pool<Any>) -> DbResult<Vec<SocialProfile>> {
    let profiles = sqlx::query_as::<_, SocialProfileRaw>(
        "SELECT id, platform, username, profile_url, display_name, active
         FROM social_profiles
         WHERE active = 1
         ORDER BY platform ASC",
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|raw| raw.into())
    .collect();

    Ok(profiles)
}
