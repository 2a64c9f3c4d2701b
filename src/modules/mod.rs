// Cataloguing helpers: classification, export and external metadata lookups

pub mod classification;
pub mod export;
pub mod integrations;
