//! Cálculo dos dígitos verificadores (módulo 11) de CPF e CNPJ.
//!
//! Os pesos são gerados de forma crescente a partir de uma base por tipo de
//! documento: `base + i`, voltando 8 posições sempre que passar de 9. Para o
//! CPF isso dá 1..9 no primeiro dígito e 0..8 no segundo; para o CNPJ,
//! 6,7,8,9,2,3,...,9 e 5,6,7,8,9,2,...,8. O segundo dígito ainda soma o
//! primeiro com peso 9.

use crate::models::DocumentType;

const MODULO: u32 = 11;

fn weight(base: u32, position: usize) -> u32 {
    let peso = base + position as u32;
    if peso > 9 {
        peso - 8
    } else {
        peso
    }
}

fn weighted_sum(digits: &[u8], base: u32) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * weight(base, i))
        .sum()
}

fn reduce(sum: u32) -> u8 {
    match sum % MODULO {
        10 => 0,
        resto => resto as u8,
    }
}

/// Calcula os dois dígitos verificadores.
///
/// Lê apenas os primeiros `tipo.data_length()` dígitos, então pode receber
/// tanto o payload quanto o documento completo. Não valida o tamanho: quem
/// chama garante que há dígitos suficientes.
pub fn check_digits(digits: &[u8], tipo: DocumentType) -> (u8, u8) {
    let dados = &digits[..tipo.data_length().min(digits.len())];
    let (base1, base2) = tipo.weight_bases();

    let primeiro = reduce(weighted_sum(dados, base1));
    let segundo = reduce(weighted_sum(dados, base2) + u32::from(primeiro) * 9);

    (primeiro, segundo)
}
