use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::books::create_book,
        api::books::get_book,
        api::books::update_book,
        api::search::search_books,
        api::search::list_titles,
        api::search::list_authors,
        api::search::suggest_titles,
        api::search::suggest_authors,
        api::subjects::list_subjects,
        api::subjects::list_secondary_subjects,
        api::lookup::lookup_book,
        api::export::export_csv,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::BookInput,
            crate::api::books::MutationResponse,
            crate::domain::TitleSuggestion,
            crate::domain::AuthorCount,
            crate::modules::classification::Subject,
            crate::modules::integrations::BookInfo,
        )
    ),
    tags(
        (name = "shelfmark", description = "Shelfmark personal library catalog API")
    )
)]
pub struct ApiDoc;
