use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::DocumentType;

// Remove pontuação, espaços e símbolos; letras, dígitos e '_' permanecem.
static NAO_PALAVRA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\d]+").expect("regex de normalização"));

/// Posições (na string já em construção) onde cada separador é inserido.
fn separadores(tipo: DocumentType) -> &'static [(usize, char)] {
    match tipo {
        DocumentType::Cpf => &[(3, '.'), (7, '.'), (11, '-')],
        DocumentType::Cnpj => &[(2, '.'), (6, '.'), (10, '/'), (15, '-')],
    }
}

pub fn normalize(raw: &str) -> String {
    NAO_PALAVRA.replace_all(raw, "").into_owned()
}

/// Aplica a máscara do tipo (`XXX.XXX.XXX-DD` ou `XX.XXX.XXX/XXXX-DD`).
/// Entradas que não tenham exatamente o tamanho sem máscara voltam inalteradas.
pub fn format(documento: &str, tipo: DocumentType) -> String {
    let mut chars: Vec<char> = documento.chars().collect();
    if chars.len() != tipo.length() {
        return documento.to_string();
    }
    for &(posicao, separador) in separadores(tipo) {
        chars.insert(posicao, separador);
    }
    chars.into_iter().collect()
}

pub fn unformat(documento: &str) -> String {
    normalize(documento)
}
