use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DocumentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentType {
    #[serde(rename = "CPF")]
    Cpf,
    #[serde(rename = "CNPJ")]
    Cnpj,
}

impl DocumentType {
    pub const ALL: [DocumentType; 2] = [DocumentType::Cpf, DocumentType::Cnpj];

    /// Quantidade total de dígitos, incluindo os dois verificadores.
    pub fn length(self) -> usize {
        match self {
            DocumentType::Cpf => 11,
            DocumentType::Cnpj => 14,
        }
    }

    /// Quantidade de dígitos de dados (sem os verificadores).
    pub fn data_length(self) -> usize {
        self.length() - 2
    }

    /// Pesos iniciais do primeiro e do segundo dígito verificador.
    pub fn weight_bases(self) -> (u32, u32) {
        match self {
            DocumentType::Cpf => (1, 0),
            DocumentType::Cnpj => (6, 5),
        }
    }

    pub fn from_code(code: i64) -> Result<Self, DocumentError> {
        match code {
            0 => Ok(DocumentType::Cpf),
            1 => Ok(DocumentType::Cnpj),
            _ => Err(DocumentError::UnsupportedType(code.to_string())),
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::Cpf => write!(f, "CPF"),
            DocumentType::Cnpj => write!(f, "CNPJ"),
        }
    }
}

impl FromStr for DocumentType {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valor = s.trim();
        if let Ok(code) = valor.parse::<i64>() {
            return Self::from_code(code);
        }
        match valor.to_ascii_uppercase().as_str() {
            "CPF" => Ok(DocumentType::Cpf),
            "CNPJ" => Ok(DocumentType::Cnpj),
            _ => Err(DocumentError::UnsupportedType(valor.to_string())),
        }
    }
}

/// Unidades federativas, na mesma ordem (alfabética) dos códigos numéricos
/// aceitos pela API: Acre = 0 ... Tocantins = 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FiscalRegion {
    Acre,
    Alagoas,
    Amapa,
    Amazonas,
    Bahia,
    Ceara,
    DistritoFederal,
    EspiritoSanto,
    Goias,
    Maranhao,
    MatoGrosso,
    MatoGrossoDoSul,
    MinasGerais,
    Para,
    Paraiba,
    Parana,
    Pernambuco,
    Piaui,
    RioDeJaneiro,
    RioGrandeDoNorte,
    RioGrandeDoSul,
    Rondonia,
    Roraima,
    SantaCatarina,
    SaoPaulo,
    Sergipe,
    Tocantins,
}

impl FiscalRegion {
    pub const ALL: [FiscalRegion; 27] = [
        FiscalRegion::Acre,
        FiscalRegion::Alagoas,
        FiscalRegion::Amapa,
        FiscalRegion::Amazonas,
        FiscalRegion::Bahia,
        FiscalRegion::Ceara,
        FiscalRegion::DistritoFederal,
        FiscalRegion::EspiritoSanto,
        FiscalRegion::Goias,
        FiscalRegion::Maranhao,
        FiscalRegion::MatoGrosso,
        FiscalRegion::MatoGrossoDoSul,
        FiscalRegion::MinasGerais,
        FiscalRegion::Para,
        FiscalRegion::Paraiba,
        FiscalRegion::Parana,
        FiscalRegion::Pernambuco,
        FiscalRegion::Piaui,
        FiscalRegion::RioDeJaneiro,
        FiscalRegion::RioGrandeDoNorte,
        FiscalRegion::RioGrandeDoSul,
        FiscalRegion::Rondonia,
        FiscalRegion::Roraima,
        FiscalRegion::SantaCatarina,
        FiscalRegion::SaoPaulo,
        FiscalRegion::Sergipe,
        FiscalRegion::Tocantins,
    ];

    /// Dígito da região fiscal, gravado na 9ª posição do CPF.
    pub fn region_code(self) -> u8 {
        use FiscalRegion::*;
        match self {
            RioGrandeDoSul => 0,
            DistritoFederal | Goias | MatoGrossoDoSul | MatoGrosso | Tocantins => 1,
            Acre | Amazonas | Amapa | Para | Rondonia | Roraima => 2,
            Ceara | Maranhao | Piaui => 3,
            Alagoas | Paraiba | Pernambuco | RioGrandeDoNorte => 4,
            Bahia | Sergipe => 5,
            MinasGerais => 6,
            EspiritoSanto | RioDeJaneiro => 7,
            SaoPaulo => 8,
            Parana | SantaCatarina => 9,
        }
    }

    pub fn uf(self) -> &'static str {
        use FiscalRegion::*;
        match self {
            Acre => "AC",
            Alagoas => "AL",
            Amapa => "AP",
            Amazonas => "AM",
            Bahia => "BA",
            Ceara => "CE",
            DistritoFederal => "DF",
            EspiritoSanto => "ES",
            Goias => "GO",
            Maranhao => "MA",
            MatoGrosso => "MT",
            MatoGrossoDoSul => "MS",
            MinasGerais => "MG",
            Para => "PA",
            Paraiba => "PB",
            Parana => "PR",
            Pernambuco => "PE",
            Piaui => "PI",
            RioDeJaneiro => "RJ",
            RioGrandeDoNorte => "RN",
            RioGrandeDoSul => "RS",
            Rondonia => "RO",
            Roraima => "RR",
            SantaCatarina => "SC",
            SaoPaulo => "SP",
            Sergipe => "SE",
            Tocantins => "TO",
        }
    }

    pub fn nome(self) -> &'static str {
        use FiscalRegion::*;
        match self {
            Acre => "Acre",
            Alagoas => "Alagoas",
            Amapa => "Amapá",
            Amazonas => "Amazonas",
            Bahia => "Bahia",
            Ceara => "Ceará",
            DistritoFederal => "Distrito Federal",
            EspiritoSanto => "Espírito Santo",
            Goias => "Goiás",
            Maranhao => "Maranhão",
            MatoGrosso => "Mato Grosso",
            MatoGrossoDoSul => "Mato Grosso do Sul",
            MinasGerais => "Minas Gerais",
            Para => "Pará",
            Paraiba => "Paraíba",
            Parana => "Paraná",
            Pernambuco => "Pernambuco",
            Piaui => "Piauí",
            RioDeJaneiro => "Rio de Janeiro",
            RioGrandeDoNorte => "Rio Grande do Norte",
            RioGrandeDoSul => "Rio Grande do Sul",
            Rondonia => "Rondônia",
            Roraima => "Roraima",
            SantaCatarina => "Santa Catarina",
            SaoPaulo => "São Paulo",
            Sergipe => "Sergipe",
            Tocantins => "Tocantins",
        }
    }

    pub fn from_code(code: i64) -> Result<Self, DocumentError> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| DocumentError::InvalidRegion(code.to_string()))
    }
}

impl fmt::Display for FiscalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nome())
    }
}

// "São Paulo", "SãoPaulo", "saopaulo" e "SP" levam todos à mesma chave.
fn chave_nome(nome: &str) -> String {
    nome.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'â' | 'ã' | 'à' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            outro => outro,
        })
        .collect()
}

impl FromStr for FiscalRegion {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valor = s.trim();
        if let Ok(code) = valor.parse::<i64>() {
            return Self::from_code(code);
        }
        let chave = chave_nome(valor);
        Self::ALL
            .iter()
            .copied()
            .find(|estado| chave == chave_nome(estado.nome()) || chave == estado.uf().to_ascii_lowercase())
            .ok_or_else(|| DocumentError::InvalidRegion(valor.to_string()))
    }
}

/// Valor de enumeração como chega no JSON: pelo nome ou pelo código numérico.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Code(i64),
    Name(String),
}

impl EnumValue {
    pub fn document_type(&self) -> Result<DocumentType, DocumentError> {
        match self {
            EnumValue::Code(code) => DocumentType::from_code(*code),
            EnumValue::Name(nome) => nome.parse(),
        }
    }

    pub fn fiscal_region(&self) -> Result<FiscalRegion, DocumentError> {
        match self {
            EnumValue::Code(code) => FiscalRegion::from_code(*code),
            EnumValue::Name(nome) => nome.parse(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentoRequest {
    pub tipo: EnumValue,
    #[serde(default)]
    pub digitos: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeracaoRequest {
    pub tipo: EnumValue,
    #[serde(default)]
    pub formatado: bool,
    #[serde(default)]
    pub estado: Option<EnumValue>,
}

/// Resultado de uma validação.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Documento {
    pub tipo: DocumentType,
    pub digitos: String,
    pub valido: bool,
}
