pub mod calc;
pub mod error;
pub mod export;
pub mod ingest;
pub mod table;
pub mod web;
