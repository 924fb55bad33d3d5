use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::models::Documento;

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn init(quiet: bool, verbose: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
    VERBOSE.store(verbose, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {}", "ℹ".blue(), message);
    }
}

pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green().bold(), message.green());
    }
}

pub fn print_warning(message: &str) {
    if !is_quiet() {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_header(message: &str) {
    if !is_quiet() {
        println!("\n{}", message.bold().cyan());
        println!("{}", "─".repeat(message.chars().count()).cyan());
    }
}

pub fn print_verbose(message: &str) {
    if is_verbose() && !is_quiet() {
        println!("  {}", message.dimmed());
    }
}

pub fn print_separator() {
    if !is_quiet() {
        println!("{}", "=".repeat(60).dimmed());
    }
}

/// Resultado de validação. Em modo silencioso imprime só `true`/`false`.
pub fn print_validation(documento: &Documento) {
    if is_quiet() {
        println!("{}", documento.valido);
    } else if documento.valido {
        print_success(&format!("{} {} é válido", documento.tipo, documento.digitos));
    } else {
        print_warning(&format!("{} {} é inválido", documento.tipo, documento.digitos));
    }
}

/// O documento gerado sai sempre, mesmo com `--quiet`, para poder ser usado em scripts.
pub fn print_document(documento: &str) {
    println!("{}", documento);
}
