use crate::domain::DomainError;
use crate::models::BookInput;
use crate::services::CatalogService;

const DEMO_BOOKS: [(&str, &str, &str, &str, &str, &str); 5] = [
    (
        "The Hobbit",
        "J.R.R. Tolkien",
        "English",
        "Literature",
        "English & Old English literatures",
        "978-0-261-10221-7",
    ),
    (
        "A Brief History of Time",
        "Stephen Hawking",
        "English",
        "Science",
        "Astronomy",
        "978-0-553-38016-3",
    ),
    (
        "Meditations",
        "Marcus Aurelius",
        "English",
        "Philosophy & psychology",
        "Ethics",
        "978-0-14-044933-4",
    ),
    (
        "Guns, Germs, and Steel",
        "Jared Diamond",
        "English",
        "History & geography",
        "History of other areas",
        "978-0-393-31755-8",
    ),
    (
        "Foundation",
        "Isaac Asimov",
        "English",
        "Literature",
        "American literature in English",
        "978-0-553-29335-7",
    ),
];

/// Insert a handful of demo books. Already-present ISBNs are skipped, so seeding twice is harmless.
pub async fn seed_demo_data(catalog: &CatalogService) -> Result<usize, DomainError> {
    let mut inserted = 0;

    for (title, author, language, main_subject, secondary_subject, isbn) in DEMO_BOOKS {
        let input = BookInput {
            title: title.to_owned(),
            author: author.to_owned(),
            language: language.to_owned(),
            main_subject: main_subject.to_owned(),
            secondary_subject: secondary_subject.to_owned(),
            isbn: isbn.to_owned(),
        };

        match catalog.insert(input).await {
            Ok(_) => inserted += 1,
            Err(DomainError::DuplicateKey(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(inserted)
}
