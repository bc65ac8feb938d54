use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;
use lang_detect_core::error::{DetectError, MalformedLine};
use lang_detect_core::session::Session;

/// Interactive console for training and testing the language detector.
#[derive(Parser)]
#[command(name = "lang-detect", about = "Digraph-based language detection console")]
struct Args {
    /// Path of the profile store file
    #[arg(long, default_value = "pair_probabilities.txt")]
    store: String,
}

enum Mode {
    Training,
    Classification,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let session = Session::new(&args.store);

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    banner("Willkommen zum Spracherkennungs-Programm");

    println!("Bitte wählen Sie den Modus aus:");
    println!("1 - Trainingsmodus (Wahrscheinlichkeiten aktualisieren)");
    println!("2 - Testmodus (Wahrscheinlichkeiten nicht aktualisieren)");

    let mode = loop {
        prompt("Geben Sie die entsprechende Zahl ein: ")?;
        match read_line(&mut input)?.trim() {
            "1" => break Mode::Training,
            "2" => break Mode::Classification,
            _ => println!("Ungültige Eingabe. Bitte geben Sie 1 für Trainingsmodus oder 2 für Testmodus ein."),
        }
    };

    match mode {
        Mode::Training => run_training(&session, &mut input)?,
        Mode::Classification => run_classification(&session, &mut input)?,
    }

    banner("Analyse abgeschlossen!");
    Ok(())
}

fn run_training(session: &Session, input: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    session.ensure_store_exists()?;

    println!("Bitte geben Sie die Sprache ein, für die Sie trainieren möchten (Englisch, Französisch, Deutsch):");
    let label = read_line(input)?;

    println!("Bitte geben Sie den Text ein, den Sie analysieren möchten:");
    let sample = read_line(input)?;

    match session.run_training(&label, &sample) {
        Ok(report) => {
            print_warnings(&report.warnings);
            println!("Training abgeschlossen. Die Wahrscheinlichkeiten wurden aktualisiert und gespeichert.");
            Ok(())
        }
        Err(DetectError::InvalidLanguage { .. }) => {
            println!("Ungültige Eingabe. Nur Englisch, Französisch und Deutsch sind erlaubt.");
            Ok(())
        }
        Err(error) => Err(error).context("Training fehlgeschlagen"),
    }
}

fn run_classification(session: &Session, input: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    println!("Bitte geben Sie den Text ein, den Sie analysieren möchten:");
    let sample = read_line(input)?;

    match session.run_classification(&sample) {
        Ok(report) => {
            print_warnings(&report.warnings);
            println!("Sprache erkannt als: {}", style(report.detection).cyan());
            Ok(())
        }
        Err(DetectError::NotTrained) => {
            println!("Es konnten keine Sprachdaten gefunden werden. Bitte führen Sie zuerst den Trainingsmodus aus.");
            Ok(())
        }
        Err(error) => Err(error).context("Analyse fehlgeschlagen"),
    }
}

fn print_warnings(warnings: &[MalformedLine]) {
    for warning in warnings {
        println!("{}", style(format!("Ungültiges Format in der Datei ({warning})")).yellow());
    }
}

fn banner(message: &str) {
    let line = "=".repeat(40);
    println!("{}", style(&line).green());
    println!("{}", style(format!("   {message}   ")).green());
    println!("{}", style(&line).green());
}

fn prompt(message: &str) -> Result<()> {
    print!("{message}");
    io::stdout().flush().context("failed to flush stdout")?;
    Ok(())
}

fn read_line(input: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    match input.next() {
        Some(line) => line.context("failed to read from stdin"),
        None => bail!("unexpected end of input"),
    }
}
