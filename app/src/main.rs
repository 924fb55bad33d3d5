use anyhow::Result;
use clap::{Parser, Subcommand};

use valida_digitos::models::{DocumentType, FiscalRegion};
use valida_digitos::{api, documentos, ui};

#[derive(Parser)]
#[command(name = "valida-digitos")]
#[command(about = "Validação e geração de CPF e CNPJ", long_about = None)]
struct Cli {
    /// Modo silencioso (menos saída)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Modo verboso (mais detalhes)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verifica os dígitos verificadores de um CPF ou CNPJ
    Validar {
        /// Tipo do documento (cpf ou cnpj)
        #[arg(short, long)]
        tipo: DocumentType,
        /// Número do documento, com ou sem máscara
        digitos: String,
    },
    /// Gera um CPF ou CNPJ válido
    Gerar {
        /// Tipo do documento (cpf ou cnpj)
        #[arg(short, long)]
        tipo: DocumentType,
        /// Aplica a máscara (000.000.000-00 / 00.000.000/0000-00)
        #[arg(short, long)]
        formatado: bool,
        /// Estado de emissão (nome ou UF); só vale para CPF
        #[arg(short, long)]
        estado: Option<FiscalRegion>,
    },
    /// Inicia servidor web API
    Server {
        /// Porta do servidor
        #[arg(short, long, env = "PORT", default_value = "8080")]
        port: u16,
        /// Endereço do servidor
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: String,
        /// Quantidade de workers (padrão: um por core)
        #[arg(short, long)]
        workers: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ui::init(cli.quiet, cli.verbose);
    let nivel = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(nivel)).init();

    match cli.command {
        Commands::Validar { tipo, digitos } => {
            let documento = match documentos::validate_document(tipo, &digitos) {
                Ok(documento) => documento,
                Err(e) => {
                    ui::print_error(&e.to_string());
                    std::process::exit(2);
                }
            };
            ui::print_validation(&documento);
            if !documento.valido {
                std::process::exit(1);
            }
        }
        Commands::Gerar { tipo, formatado, estado } => {
            if estado.is_some() && tipo == DocumentType::Cnpj {
                ui::print_verbose("Estado ignorado para CNPJ");
            }
            let documento = documentos::generate(tipo, formatado, estado)?;
            ui::print_document(&documento);
        }
        Commands::Server { port, host, workers } => {
            api::start_server(&host, port, workers).await?;
        }
    }

    Ok(())
}
