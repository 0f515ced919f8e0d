use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Comment {
    pub(crate) id: i64,
    pub(crate) content: String,
    pub(crate) post_id: i64,
    pub(crate) author_id: i64,
    pub(crate) created_at: DateTime<Utc>,
}

impl Comment {
    pub(crate) fn new(
        id: i64,
        content: impl Into<String>,
        post_id: i64,
        author_id: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        validate_positive_i64("post_id", post_id)?;
        validate_positive_i64("author_id", author_id)?;
        let content = normalize_content(&content.into())?;

        Ok(Self {
            id,
            content,
            post_id,
            author_id,
            created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CreateCommentRequest {
    pub(crate) post_id: i64,
    pub(crate) content: String,
}

impl CreateCommentRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        validate_positive_i64("post_id", self.post_id)?;
        Ok(Self {
            post_id: self.post_id,
            content: normalize_content(&self.content)?,
        })
    }
}

fn validate_positive_i64(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            message: "must be > 0",
        });
    }
    Ok(())
}

fn normalize_content(content: &str) -> Result<String, DomainError> {
    let content = content.trim();
    if content.is_empty() || content.len() > 4096 {
        return Err(DomainError::Validation {
            field: "content",
            message: "must be 1..4096 chars",
        });
    }
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{Comment, CreateCommentRequest, DomainError};

    #[test]
    fn create_comment_request_normalizes_content() {
        let req = CreateCommentRequest {
            post_id: 3,
            content: "  hi  ".to_string(),
        };

        let validated = req.validate().expect("must validate");
        assert_eq!(validated.content, "hi");
        assert_eq!(validated.post_id, 3);
    }

    #[test]
    fn create_comment_request_rejects_blank_content() {
        let req = CreateCommentRequest {
            post_id: 3,
            content: "   ".to_string(),
        };

        let err = req.validate().expect_err("content must be rejected");
        assert!(matches!(
            err,
            DomainError::Validation { field: "content", .. }
        ));
    }

    #[test]
    fn create_comment_request_rejects_non_positive_post_id() {
        let req = CreateCommentRequest {
            post_id: 0,
            content: "hi".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn comment_new_builds_comment() {
        let comment =
            Comment::new(1, "  hi  ", 3, 10, Utc::now()).expect("comment should be created");
        assert_eq!(comment.content, "hi");
        assert_eq!(comment.post_id, 3);
        assert_eq!(comment.author_id, 10);
    }
}
