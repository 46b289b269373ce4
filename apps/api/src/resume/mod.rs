// Résumé intake: text extraction, heuristic parsing, and the upload endpoint
// that ties them to job matching.

pub mod extractor;
pub mod handlers;
pub mod parser;
