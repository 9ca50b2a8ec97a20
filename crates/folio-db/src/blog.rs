use crate::error::DbResult;
use crate::models::{BlogPost, BlogPostRaw, NewBlogPost};
use sqlx::{Any, Pool};

/// Insert a blog post and return the stored row
pub async fn create_post(pool: &Pool<Any>, post: &NewBlogPost) -> DbResult<BlogPost> {
    let tags_json = if post.tags.is_empty() {
        None
    } else {
        Some(serde_json::to_string(&post.tags)?)
    };

    sqlx::query(
        "INSERT INTO blog_posts (title, slug, content, preview, thumbnail_url, published_at, tags, author)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&post.title)
    .bind(&post.slug)
    .bind(&post.content)
    .bind(&post.preview)
    .bind(&post.thumbnail_url)
    .bind(post.published_at.to_rfc3339())
    .bind(tags_json)
    .bind(&post.author)
    .execute(pool)
    .await?;

    // Fetch the created post to get the actual ID
    get_post_by_slug(pool, &post.slug)
        .await?
        .ok_or_else(|| crate::error::DbError::SqlxError(sqlx::Error::RowNotFound))
}

/// List published posts, newest first
pub async fn list_posts(pool: &Pool<Any>) -> DbResult<Vec<BlogPost>> {
    let posts = sqlx::query_as::<_, BlogPostRaw>(
        "SELECT id, title, slug, content, preview, thumbnail_url, published_at, tags, author
         FROM blog_posts
         ORDER BY published_at DESC",
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|raw| raw.into())
    .collect();

    Ok(posts)
}

/// Get a single post by its slug
pub async fn get_post_by_slug(pool: &Pool<Any>, slug: &str) -> DbResult<Option<BlogPost>> {
    let post = sqlx::query_as::<_, BlogPostRaw>(
        "SELECT id, title, slug, content, preview, thumbnail_url, published_at, tags, author
         FROM blog_posts
         WHERE slug = ?",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .map(|raw| raw.into());

    Ok(post)
}
