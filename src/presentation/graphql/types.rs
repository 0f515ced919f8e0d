use std::sync::Arc;

use async_graphql::{Context, Error, ID, InputObject, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};

use super::{Auth, Blog, Comments, domain_error};
use crate::domain;

#[derive(Clone)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) created_at: DateTime<Utc>,
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn username(&self) -> &str {
        &self.username
    }

    async fn email(&self) -> &str {
        &self.email
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let blog = ctx.data_unchecked::<Arc<Blog>>();
        let posts = blog.posts_by_author(self.id).await.map_err(domain_error)?;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}

impl From<domain::user::User> for User {
    fn from(user: domain::user::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) published: bool,
    pub(crate) author_id: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn content(&self) -> &str {
        &self.content
    }

    async fn published(&self) -> bool {
        self.published
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        let auth = ctx.data_unchecked::<Arc<Auth>>();
        auth.user_by_id(self.author_id)
            .await
            .map_err(domain_error)?
            .map(User::from)
            .ok_or_else(|| Error::new(format!("resource not found: user id: {}", self.author_id)))
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        let comments = ctx.data_unchecked::<Arc<Comments>>();
        let comments = comments
            .comments_for_post(self.id)
            .await
            .map_err(domain_error)?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}

impl From<domain::post::Post> for Post {
    fn from(post: domain::post::Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            published: post.published,
            author_id: post.author_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Comment {
    pub(crate) id: i64,
    pub(crate) content: String,
    pub(crate) post_id: i64,
    pub(crate) author_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

#[Object]
impl Comment {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    async fn content(&self) -> &str {
        &self.content
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        let auth = ctx.data_unchecked::<Arc<Auth>>();
        auth.user_by_id(self.author_id)
            .await
            .map_err(domain_error)?
            .map(User::from)
            .ok_or_else(|| Error::new(format!("resource not found: user id: {}", self.author_id)))
    }

    async fn post(&self, ctx: &Context<'_>) -> Result<Post> {
        let blog = ctx.data_unchecked::<Arc<Blog>>();
        blog.get_post(self.post_id)
            .await
            .map_err(domain_error)?
            .map(Post::from)
            .ok_or_else(|| Error::new(format!("resource not found: post id: {}", self.post_id)))
    }
}

impl From<domain::comment::Comment> for Comment {
    fn from(comment: domain::comment::Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            post_id: comment.post_id,
            author_id: comment.author_id,
            created_at: comment.created_at,
        }
    }
}

#[derive(SimpleObject)]
pub(crate) struct AuthPayload {
    pub(crate) token: String,
    pub(crate) user: User,
}

/// Partial update: omitted fields are preserved.
#[derive(InputObject)]
pub(crate) struct UpdatePostInput {
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
    pub(crate) published: Option<bool>,
}
