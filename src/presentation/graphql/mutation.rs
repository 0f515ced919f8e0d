use std::sync::Arc;

use async_graphql::{Context, ID, Object, Result};

use super::types::{AuthPayload, Comment, Post, UpdatePostInput};
use super::{Auth, Blog, Comments, domain_error, parse_id};
use crate::domain::auth::AuthContext;
use crate::domain::comment::CreateCommentRequest;
use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::domain::user::{LoginRequest, RegisterRequest};

pub(crate) struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn register(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<AuthPayload> {
        let auth = ctx.data_unchecked::<Arc<Auth>>();
        let result = auth
            .register(RegisterRequest {
                username,
                email,
                password,
            })
            .await
            .map_err(domain_error)?;
        Ok(AuthPayload {
            token: result.access_token,
            user: result.user.into(),
        })
    }

    async fn login(&self, ctx: &Context<'_>, email: String, password: String) -> Result<AuthPayload> {
        let auth = ctx.data_unchecked::<Arc<Auth>>();
        let result = auth
            .login(LoginRequest { email, password })
            .await
            .map_err(domain_error)?;
        Ok(AuthPayload {
            token: result.access_token,
            user: result.user.into(),
        })
    }

    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        published: Option<bool>,
    ) -> Result<Post> {
        let auth_ctx = ctx.data_unchecked::<AuthContext>();
        let blog = ctx.data_unchecked::<Arc<Blog>>();
        let post = blog
            .create_post(
                auth_ctx,
                CreatePostRequest {
                    title,
                    content,
                    published: published.unwrap_or(false),
                },
            )
            .await
            .map_err(domain_error)?;
        Ok(post.into())
    }

    async fn update_post(&self, ctx: &Context<'_>, id: ID, input: UpdatePostInput) -> Result<Post> {
        let auth_ctx = ctx.data_unchecked::<AuthContext>();
        let blog = ctx.data_unchecked::<Arc<Blog>>();
        let post = blog
            .update_post(
                auth_ctx,
                parse_id(&id)?,
                UpdatePostRequest {
                    title: input.title,
                    content: input.content,
                    published: input.published,
                },
            )
            .await
            .map_err(domain_error)?;
        Ok(post.into())
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let auth_ctx = ctx.data_unchecked::<AuthContext>();
        let blog = ctx.data_unchecked::<Arc<Blog>>();
        blog.delete_post(auth_ctx, parse_id(&id)?)
            .await
            .map_err(domain_error)
    }

    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        content: String,
    ) -> Result<Comment> {
        let auth_ctx = ctx.data_unchecked::<AuthContext>();
        let comments = ctx.data_unchecked::<Arc<Comments>>();
        let comment = comments
            .create_comment(
                auth_ctx,
                CreateCommentRequest {
                    post_id: parse_id(&post_id)?,
                    content,
                },
            )
            .await
            .map_err(domain_error)?;
        Ok(comment.into())
    }

    async fn delete_comment(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let auth_ctx = ctx.data_unchecked::<AuthContext>();
        let comments = ctx.data_unchecked::<Arc<Comments>>();
        comments
            .delete_comment(auth_ctx, parse_id(&id)?)
            .await
            .map_err(domain_error)
    }
}
