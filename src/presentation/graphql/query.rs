use std::sync::Arc;

use async_graphql::{Context, ID, Object, Result};

use super::types::{Comment, Post, User};
use super::{Auth, Blog, Comments, domain_error, parse_id};
use crate::domain::auth::AuthContext;

pub(crate) struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The authenticated caller's own user record.
    async fn me(&self, ctx: &Context<'_>) -> Result<User> {
        let auth_ctx = ctx.data_unchecked::<AuthContext>();
        let auth = ctx.data_unchecked::<Arc<Auth>>();
        let user = auth.me(auth_ctx).await.map_err(domain_error)?;
        Ok(user.into())
    }

    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let auth = ctx.data_unchecked::<Arc<Auth>>();
        let user = auth
            .user_by_id(parse_id(&id)?)
            .await
            .map_err(domain_error)?;
        Ok(user.map(User::from))
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let auth = ctx.data_unchecked::<Arc<Auth>>();
        let users = auth.list_users().await.map_err(domain_error)?;
        Ok(users.into_iter().map(User::from).collect())
    }

    async fn post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Post>> {
        let blog = ctx.data_unchecked::<Arc<Blog>>();
        let post = blog.get_post(parse_id(&id)?).await.map_err(domain_error)?;
        Ok(post.map(Post::from))
    }

    async fn posts(&self, ctx: &Context<'_>, published: Option<bool>) -> Result<Vec<Post>> {
        let blog = ctx.data_unchecked::<Arc<Blog>>();
        let posts = blog.list_posts(published).await.map_err(domain_error)?;
        Ok(posts.into_iter().map(Post::from).collect())
    }

    async fn my_posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let auth_ctx = ctx.data_unchecked::<AuthContext>();
        let blog = ctx.data_unchecked::<Arc<Blog>>();
        let posts = blog.my_posts(auth_ctx).await.map_err(domain_error)?;
        Ok(posts.into_iter().map(Post::from).collect())
    }

    async fn comments(&self, ctx: &Context<'_>, post_id: ID) -> Result<Vec<Comment>> {
        let comments = ctx.data_unchecked::<Arc<Comments>>();
        let comments = comments
            .comments_for_post(parse_id(&post_id)?)
            .await
            .map_err(domain_error)?;
        Ok(comments.into_iter().map(Comment::from).collect())
    }
}
