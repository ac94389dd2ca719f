use crate::ParseFlags;
use annotated_currency::CurrencyRegistry;
use annotated_tags::Annotation;
use annotated_units::{canonicalize, parse_with, CanonicalUnit, DivisionMode, ParseOptions};
use anyhow::{Context, Result};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

impl ParseFlags {
    fn options(self) -> ParseOptions {
        ParseOptions {
            division: if self.strict_division {
                DivisionMode::Strict
            } else {
                DivisionMode::LeftAssociative
            },
            max_depth: self.max_depth,
            max_factors: self.max_factors,
        }
    }
}

/// Print `input` with a caret under byte offset `pos`.
fn print_pointer(input: &str, pos: usize) {
    let column = input.get(..pos).map_or(0, |prefix| prefix.chars().count());
    eprintln!("  {input}");
    eprintln!("  {}^", " ".repeat(column));
}

pub fn parse(unit: &str, flags: ParseFlags, json: bool) -> Result<ExitCode> {
    match parse_with(unit, &flags.options()) {
        Ok(expr) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&expr)?);
            } else {
                println!("{expr:#?}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            print_pointer(unit, err.pos());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn render_canonical(unit: &CanonicalUnit) -> String {
    let text = if unit.text.is_empty() { "1" } else { &unit.text };
    format!(
        "{text}  (scale {}, SI {})",
        unit.scale,
        unit.si_dimensions()
    )
}

pub fn canon(units: &[String], flags: ParseFlags, json: bool) -> Result<ExitCode> {
    let options = flags.options();
    let mut results = Vec::with_capacity(units.len());

    for unit in units {
        let expr = parse_with(unit, &options).with_context(|| format!("invalid unit '{unit}'"))?;
        let canonical = canonicalize(&expr);
        if json {
            results.push(json!({
                "input": unit,
                "canonical": canonical,
                "si_dimensions": canonical.si_dimensions(),
            }));
        } else {
            println!("{unit}  =>  {}", render_canonical(&canonical));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn equiv(lhs: &str, rhs: &str, flags: ParseFlags) -> Result<ExitCode> {
    let options = flags.options();
    let left = parse_with(lhs, &options).with_context(|| format!("invalid unit '{lhs}'"))?;
    let right = parse_with(rhs, &options).with_context(|| format!("invalid unit '{rhs}'"))?;
    let (left, right) = (canonicalize(&left), canonicalize(&right));

    if left.is_equivalent(&right) {
        println!("equivalent");
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "not equivalent: {} vs {}",
            render_canonical(&left),
            render_canonical(&right)
        );
        Ok(ExitCode::FAILURE)
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<(String, String)> {
    match input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path.display().to_string(), text))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(("<stdin>".to_string(), text))
        }
    }
}

fn load_registry(path: &PathBuf) -> Result<CurrencyRegistry> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let registry: CurrencyRegistry = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of codes", path.display()))?;
    tracing::debug!(codes = registry.len(), "loaded currency registry");
    Ok(registry)
}

pub fn lint(
    input: Option<PathBuf>,
    currencies: Option<PathBuf>,
    flags: ParseFlags,
    json: bool,
) -> Result<ExitCode> {
    let (source, text) = read_input(input.as_ref())?;
    let registry = currencies.as_ref().map(load_registry).transpose()?;
    if registry.is_none() {
        tracing::warn!("no --currencies file given, currency codes are only shape-checked");
    }
    let options = flags.options();

    let mut checked = 0usize;
    let mut failures = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let tag = line.trim();
        if tag.is_empty() || tag.starts_with('#') {
            continue;
        }
        checked += 1;

        let result = match &registry {
            Some(registry) => annotated_tags::check(tag, &options, registry),
            None => Annotation::parse_with(tag, &options),
        };
        let Err(err) = result else { continue };

        let leading = line.len() - line.trim_start().len();
        let column = err
            .pos()
            .and_then(|pos| line.get(..leading + pos))
            .map(|prefix| prefix.chars().count() + 1);
        failures.push((index + 1, column, tag.to_string(), err));
    }

    if json {
        let report: Vec<_> = failures
            .iter()
            .map(|(line, column, tag, err)| {
                json!({
                    "line": line,
                    "column": column,
                    "tag": tag,
                    "error": err.to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (line, column, _, err) in &failures {
            match column {
                Some(column) => println!("{source}:{line}:{column}: {err}"),
                None => println!("{source}:{line}: {err}"),
            }
        }
        eprintln!("{checked} annotations checked, {} failed", failures.len());
    }

    Ok(if failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
