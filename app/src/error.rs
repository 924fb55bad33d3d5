use thiserror::Error;

pub const MENSAGEM_GENERICA: &str = "Algo deu errado, contate o administrador.";

/// Falhas das operações de validação e geração.
///
/// Todas as variantes, exceto `Unexpected`, são erros do cliente e carregam
/// uma mensagem pronta para ser exibida. `Unexpected` guarda o detalhe interno
/// apenas para log; sua mensagem é sempre a genérica.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("O número do documento não foi informado")]
    MissingInput,

    #[error("Tipo de documento inválido: {0}")]
    UnsupportedType(String),

    #[error("Número de dígitos inválido: esperado {expected}, recebido {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Caractere inválido no documento: '{0}'")]
    InvalidDigit(char),

    #[error("Estado inválido: {0}")]
    InvalidRegion(String),

    #[error("{}", MENSAGEM_GENERICA)]
    Unexpected(String),
}

impl DocumentError {
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DocumentError::Unexpected(_))
    }
}
