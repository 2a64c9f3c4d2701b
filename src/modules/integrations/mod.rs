pub mod openlibrary;

pub use openlibrary::{BookInfo, OpenLibraryClient};
