//! Validação e geração de CPF e CNPJ pelo algoritmo de dígitos verificadores
//! módulo 11, com uma API HTTP (actix-web) e uma CLI por cima.

pub mod api;
pub mod checksum;
pub mod documentos;
pub mod error;
pub mod format;
pub mod models;
pub mod ui;

pub use documentos::{generate, validate, validate_document};
pub use error::DocumentError;
pub use models::{DocumentType, Documento, FiscalRegion};
