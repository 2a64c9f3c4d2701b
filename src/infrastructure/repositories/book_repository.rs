//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::domain::errors::map_write_error;
use crate::domain::{
    AuthorCount, BookRepository, DomainError, SearchField, SearchFields, TitleSuggestion,
};
use crate::models::book::{ActiveModel, Column, Entity as BookEntity};
use crate::models::{Book, BookInput};

/// Upper bound on autocomplete rows returned per request
const SUGGESTION_LIMIT: u64 = 20;

fn column_for(field: SearchField) -> Column {
    match field {
        SearchField::Title => Column::Title,
        SearchField::Author => Column::Author,
        SearchField::Isbn => Column::Isbn,
        SearchField::MainSubject => Column::MainSubject,
        SearchField::SecondarySubject => Column::SecondarySubject,
        SearchField::Ddc => Column::Ddc,
    }
}

/// `LIKE '%text%'` with `\`, `%` and `_` in `text` matched literally
fn contains_text(column: Column, text: &str) -> SimpleExpr {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Expr::col((BookEntity, column)).like(LikeExpr::new(format!("%{}%", escaped)).escape('\\'))
}

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn create(&self, input: BookInput, ddc: String) -> Result<Book, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let isbn = input.isbn.clone();

        let new_book = ActiveModel {
            title: Set(input.title),
            author: Set(input.author),
            language: Set(input.language),
            main_subject: Set(input.main_subject),
            secondary_subject: Set(input.secondary_subject),
            isbn: Set(input.isbn),
            ddc: Set(ddc),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = new_book
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, &isbn))?;
        Ok(Book::from(result))
    }

    async fn update(&self, id: i32, input: BookInput, ddc: String) -> Result<Book, DomainError> {
        let existing = BookEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let isbn = input.isbn.clone();

        let mut active: ActiveModel = existing.into();
        active.title = Set(input.title);
        active.author = Set(input.author);
        active.language = Set(input.language);
        active.main_subject = Set(input.main_subject);
        active.secondary_subject = Set(input.secondary_subject);
        active.isbn = Set(input.isbn);
        active.ddc = Set(ddc);
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let result = active
            .update(&self.db)
            .await
            .map_err(|e| map_write_error(e, &isbn))?;
        Ok(Book::from(result))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        let book = BookEntity::find_by_id(id).one(&self.db).await?;
        Ok(book.map(Book::from))
    }

    async fn search(&self, query: &str, fields: &SearchFields) -> Result<Vec<Book>, DomainError> {
        let mut select = BookEntity::find();

        if !query.is_empty() {
            let cond = fields
                .iter()
                .fold(Condition::any(), |cond, field| {
                    cond.add(contains_text(column_for(field), query))
                });
            select = select.filter(cond);
        }

        let books = select.order_by_asc(Column::Id).all(&self.db).await?;
        Ok(books.into_iter().map(Book::from).collect())
    }

    async fn distinct_titles(&self) -> Result<Vec<String>, DomainError> {
        let titles = BookEntity::find()
            .select_only()
            .column(Column::Title)
            .distinct()
            .order_by_asc(Column::Title)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;
        Ok(titles)
    }

    async fn distinct_authors(&self) -> Result<Vec<String>, DomainError> {
        let authors = BookEntity::find()
            .select_only()
            .column(Column::Author)
            .distinct()
            .order_by_asc(Column::Author)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;
        Ok(authors)
    }

    async fn title_suggestions(&self, term: &str) -> Result<Vec<TitleSuggestion>, DomainError> {
        let rows = BookEntity::find()
            .select_only()
            .column(Column::Title)
            .column(Column::Author)
            .column(Column::Ddc)
            .filter(contains_text(Column::Title, term))
            .order_by_asc(Column::Title)
            .limit(SUGGESTION_LIMIT)
            .into_tuple::<(String, String, String)>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(title, author, ddc)| TitleSuggestion { title, author, ddc })
            .collect())
    }

    async fn author_counts(&self, term: &str) -> Result<Vec<AuthorCount>, DomainError> {
        let rows = BookEntity::find()
            .select_only()
            .column(Column::Author)
            .column_as(Column::Id.count(), "books")
            .filter(contains_text(Column::Author, term))
            .group_by(Column::Author)
            .order_by_asc(Column::Author)
            .limit(SUGGESTION_LIMIT)
            .into_tuple::<(String, i64)>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(author, books)| AuthorCount { author, books })
            .collect())
    }
}
