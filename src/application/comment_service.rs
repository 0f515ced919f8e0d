use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::domain::auth::AuthContext;
use crate::domain::comment::{Comment, CreateCommentRequest};
use crate::domain::error::DomainError;

pub(crate) struct CommentService<R: CommentRepository> {
    repo: R,
}

impl<R: CommentRepository> CommentService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Any authenticated user may comment; ownership of the post is not
    /// required. A missing post surfaces as NotFound via the FK check.
    pub(crate) async fn create_comment(
        &self,
        auth: &AuthContext,
        req: CreateCommentRequest,
    ) -> Result<Comment, DomainError> {
        let identity = auth.require_authenticated()?;
        let req = req.validate()?;

        let new_comment = NewComment {
            content: req.content,
            post_id: req.post_id,
            author_id: identity.user_id,
        };
        self.repo.create_comment(new_comment).await
    }

    pub(crate) async fn delete_comment(
        &self,
        auth: &AuthContext,
        comment_id: i64,
    ) -> Result<bool, DomainError> {
        auth.require_authenticated()?;

        let original = self
            .repo
            .get_comment(comment_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("comment id: {comment_id}")))?;
        // ownership of the comment itself, not of the parent post
        auth.require_ownership(original.author_id)?;

        self.repo.delete_comment(comment_id).await
    }

    pub(crate) async fn comments_for_post(
        &self,
        post_id: i64,
    ) -> Result<Vec<Comment>, DomainError> {
        self.repo.list_by_post(post_id).await
    }
}
