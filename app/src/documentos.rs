//! Validação e geração de documentos.
//!
//! As funções `validar` e `gerar` recebem as requisições como chegam da API
//! (tipo e estado ainda não interpretados) e delegam para `validate` e
//! `generate`, que trabalham com tipos já resolvidos.

use log::{debug, error};
use rand::Rng;

use crate::checksum::check_digits;
use crate::error::DocumentError;
use crate::format;
use crate::models::{DocumentType, Documento, DocumentoRequest, FiscalRegion, GeracaoRequest};

pub fn validar(request: &DocumentoRequest) -> Result<Documento, DocumentError> {
    let digitos = match request.digitos.as_deref() {
        Some(d) if !d.is_empty() => d,
        _ => return Err(DocumentError::MissingInput),
    };
    let tipo = request.tipo.document_type()?;
    validate_document(tipo, digitos)
}

pub fn gerar(request: &GeracaoRequest) -> Result<String, DocumentError> {
    let tipo = request.tipo.document_type()?;
    // Para CNPJ o estado é ignorado, inclusive quando inválido.
    let estado = match (&request.estado, tipo) {
        (Some(valor), DocumentType::Cpf) => Some(valor.fiscal_region()?),
        _ => None,
    };
    generate(tipo, request.formatado, estado)
}

/// Valida o documento e devolve o resultado junto com a entrada original.
pub fn validate_document(tipo: DocumentType, raw: &str) -> Result<Documento, DocumentError> {
    let valido = validate(tipo, raw)?;
    Ok(Documento {
        tipo,
        digitos: raw.to_string(),
        valido,
    })
}

pub fn validate(tipo: DocumentType, raw: &str) -> Result<bool, DocumentError> {
    if raw.is_empty() {
        return Err(DocumentError::MissingInput);
    }

    let normalizado = format::normalize(raw);
    let tamanho = normalizado.chars().count();
    if tamanho != tipo.length() {
        return Err(DocumentError::InvalidLength {
            expected: tipo.length(),
            actual: tamanho,
        });
    }

    let numeros = to_digits(&normalizado)?;
    let (dv1, dv2) = check_digits(&numeros, tipo);
    let n = numeros.len();
    let valido = numeros[n - 2] == dv1 && numeros[n - 1] == dv2;

    debug!("{} {} -> dv calculado {}{}, válido: {}", tipo, normalizado, dv1, dv2, valido);
    Ok(valido)
}

fn to_digits(normalizado: &str) -> Result<Vec<u8>, DocumentError> {
    normalizado
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or(DocumentError::InvalidDigit(c))
        })
        .collect()
}

/// Gera um documento válido usando o gerador de números da thread atual.
pub fn generate(
    tipo: DocumentType,
    formatado: bool,
    estado: Option<FiscalRegion>,
) -> Result<String, DocumentError> {
    generate_with_rng(&mut rand::thread_rng(), tipo, formatado, estado)
}

pub fn generate_with_rng<R: Rng>(
    rng: &mut R,
    tipo: DocumentType,
    formatado: bool,
    estado: Option<FiscalRegion>,
) -> Result<String, DocumentError> {
    let mut numeros: Vec<u8> = (0..tipo.data_length()).map(|_| rng.gen_range(0..10)).collect();

    if let (DocumentType::Cpf, Some(estado)) = (tipo, estado) {
        if let Some(ultimo) = numeros.last_mut() {
            *ultimo = estado.region_code();
        }
    }

    let (dv1, dv2) = check_digits(&numeros, tipo);
    numeros.push(dv1);
    numeros.push(dv2);

    let documento = numeros
        .iter()
        .map(|&d| {
            char::from_digit(u32::from(d), 10).ok_or_else(|| {
                let detalhe = format!("dígito fora do intervalo ao gerar {}: {}", tipo, d);
                error!("{}", detalhe);
                DocumentError::Unexpected(detalhe)
            })
        })
        .collect::<Result<String, _>>()?;

    debug!("{} gerado: {}", tipo, documento);
    Ok(if formatado {
        format::format(&documento, tipo)
    } else {
        documento
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnumValue;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn validates_reference_numbers() {
        assert!(validate(DocumentType::Cpf, "529.982.247-25").unwrap());
        assert!(validate(DocumentType::Cpf, "52998224725").unwrap());
        assert!(validate(DocumentType::Cnpj, "11.222.333/0001-81").unwrap());
        assert!(!validate(DocumentType::Cpf, "529.982.247-26").unwrap());
        assert!(!validate(DocumentType::Cnpj, "11.222.333/0001-80").unwrap());
        assert!(!validate(DocumentType::Cpf, "111.111.111-12").unwrap());
    }

    #[test]
    fn repeated_digit_cpf_follows_checksum() {
        // não há regra para sequências repetidas: vale só o módulo 11
        assert!(validate(DocumentType::Cpf, "111.111.111-11").unwrap());
        assert!(validate(DocumentType::Cpf, "222.222.222-22").unwrap());
        assert!(!validate(DocumentType::Cpf, "222.222.222-21").unwrap());
    }

    #[test]
    fn empty_input_is_missing() {
        assert_eq!(validate(DocumentType::Cpf, ""), Err(DocumentError::MissingInput));
    }

    #[test]
    fn wrong_length_is_an_error_not_false() {
        assert_eq!(
            validate(DocumentType::Cpf, "5299822472"),
            Err(DocumentError::InvalidLength { expected: 11, actual: 10 })
        );
        assert_eq!(
            validate(DocumentType::Cnpj, "52998224725"),
            Err(DocumentError::InvalidLength { expected: 14, actual: 11 })
        );
        // só pontuação: normaliza para vazio
        assert_eq!(
            validate(DocumentType::Cpf, "..."),
            Err(DocumentError::InvalidLength { expected: 11, actual: 0 })
        );
    }

    #[test]
    fn letters_survive_normalization_and_fail_as_digits() {
        assert_eq!(
            validate(DocumentType::Cpf, "52A.982.247-25"),
            Err(DocumentError::InvalidDigit('A'))
        );
        // com letra e tamanho errado, o tamanho é verificado primeiro
        assert_eq!(
            validate(DocumentType::Cpf, "52A982224725"),
            Err(DocumentError::InvalidLength { expected: 11, actual: 12 })
        );
    }

    #[test]
    fn validate_document_keeps_original_input() {
        let doc = validate_document(DocumentType::Cpf, "529.982.247-25").unwrap();
        assert_eq!(doc.digitos, "529.982.247-25");
        assert_eq!(doc.tipo, DocumentType::Cpf);
        assert!(doc.valido);
    }

    #[test]
    fn validar_checks_input_before_type() {
        let req = DocumentoRequest {
            tipo: EnumValue::Name("RG".to_string()),
            digitos: None,
        };
        assert_eq!(validar(&req), Err(DocumentError::MissingInput));

        let req = DocumentoRequest {
            tipo: EnumValue::Name("RG".to_string()),
            digitos: Some("123".to_string()),
        };
        assert!(matches!(validar(&req), Err(DocumentError::UnsupportedType(_))));
    }

    #[test]
    fn generated_documents_validate() {
        let mut rng = StdRng::seed_from_u64(42);
        for tipo in DocumentType::ALL {
            for _ in 0..200 {
                let doc = generate_with_rng(&mut rng, tipo, false, None).unwrap();
                assert_eq!(doc.len(), tipo.length());
                assert!(validate(tipo, &doc).unwrap(), "{} inválido: {}", tipo, doc);
            }
        }
    }

    #[test]
    fn cpf_region_overwrites_ninth_digit() {
        let mut rng = StdRng::seed_from_u64(7);
        for estado in FiscalRegion::ALL {
            let doc = generate_with_rng(&mut rng, DocumentType::Cpf, false, Some(estado)).unwrap();
            let nono = doc.as_bytes()[8] - b'0';
            assert_eq!(nono, estado.region_code(), "{}", estado);
            assert!(validate(DocumentType::Cpf, &doc).unwrap());
        }
    }

    #[test]
    fn formatted_generation_uses_mask() {
        let doc = generate(DocumentType::Cpf, true, Some(FiscalRegion::SaoPaulo)).unwrap();
        assert_eq!(doc.len(), 14);
        assert_eq!(&doc[3..4], ".");
        assert_eq!(&doc[7..8], ".");
        assert_eq!(&doc[11..12], "-");
        assert_eq!(&doc[10..11], "8");
        assert!(validate(DocumentType::Cpf, &doc).unwrap());

        let doc = generate(DocumentType::Cnpj, true, None).unwrap();
        assert_eq!(doc.len(), 18);
        assert!(validate(DocumentType::Cnpj, &doc).unwrap());
    }

    #[test]
    fn cnpj_ignores_region() {
        let mut com = StdRng::seed_from_u64(3);
        let mut sem = StdRng::seed_from_u64(3);
        let a = generate_with_rng(&mut com, DocumentType::Cnpj, false, Some(FiscalRegion::Bahia)).unwrap();
        let b = generate_with_rng(&mut sem, DocumentType::Cnpj, false, None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn gerar_ignores_invalid_region_for_cnpj() {
        let req = GeracaoRequest {
            tipo: EnumValue::Name("CNPJ".to_string()),
            formatado: false,
            estado: Some(EnumValue::Code(99)),
        };
        assert!(gerar(&req).is_ok());

        let req = GeracaoRequest {
            tipo: EnumValue::Code(0),
            formatado: false,
            estado: Some(EnumValue::Code(99)),
        };
        assert!(matches!(gerar(&req), Err(DocumentError::InvalidRegion(_))));
    }
}
