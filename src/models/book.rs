use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub language: String,
    pub main_subject: String,
    pub secondary_subject: String,
    #[sea_orm(unique)]
    pub isbn: String,
    pub ddc: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub language: String,
    pub main_subject: String,
    pub secondary_subject: String,
    pub isbn: String,
    /// Derived from `main_subject`, never supplied by clients
    pub ddc: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            language: model.language,
            main_subject: model.main_subject,
            secondary_subject: model.secondary_subject,
            isbn: model.isbn,
            ddc: model.ddc,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Client-supplied fields for insert and update.
///
/// All six are required; empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub language: String,
    pub main_subject: String,
    pub secondary_subject: String,
    pub isbn: String,
}
