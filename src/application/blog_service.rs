use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::auth::AuthContext;
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};

pub(crate) struct BlogService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> BlogService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_post(
        &self,
        auth: &AuthContext,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        let identity = auth.require_authenticated()?;
        let req = req.validate()?;

        let new_post = NewPost {
            title: req.title,
            content: req.content,
            published: req.published,
            author_id: identity.user_id,
        };
        self.repo.create_post(new_post).await
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        self.repo.get_post(id).await
    }

    pub(crate) async fn update_post(
        &self,
        auth: &AuthContext,
        post_id: i64,
        req: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        auth.require_authenticated()?;
        let req = req.validate()?;

        let original = self
            .repo
            .get_post(post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {post_id}")))?;
        auth.require_ownership(original.author_id)?;

        let patch = PostPatch {
            title: req.title,
            content: req.content,
            published: req.published,
        };
        self.repo
            .update_post(post_id, patch)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {post_id}")))
    }

    pub(crate) async fn delete_post(
        &self,
        auth: &AuthContext,
        post_id: i64,
    ) -> Result<bool, DomainError> {
        auth.require_authenticated()?;

        let original = self
            .repo
            .get_post(post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post id: {post_id}")))?;
        auth.require_ownership(original.author_id)?;

        // comments go with the post via the store's cascade rule
        self.repo.delete_post(post_id).await
    }

    pub(crate) async fn list_posts(
        &self,
        published: Option<bool>,
    ) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts(published).await
    }

    pub(crate) async fn posts_by_author(&self, author_id: i64) -> Result<Vec<Post>, DomainError> {
        self.repo.list_by_author(author_id).await
    }

    pub(crate) async fn my_posts(&self, auth: &AuthContext) -> Result<Vec<Post>, DomainError> {
        let identity = auth.require_authenticated()?;
        self.repo.list_by_author(identity.user_id).await
    }
}
