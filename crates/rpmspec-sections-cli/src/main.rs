use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use rpmspec_sections_config::Config;
use rpmspec_sections_engine::{
    MacroTable, OptionValue, ParsedSectionArgs, SectionBlock, SpecFile, SpecSections, UnknownFlags,
};
use serde::Serialize;
use std::{
    io::{Write, stdout},
    path::PathBuf,
    process::ExitCode,
};

/// List the sections of an RPM spec file or print one of them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Spec file to read
    #[arg(value_hint = clap::ValueHint::FilePath)]
    file: PathBuf,

    /// Print the body of one section, e.g. "%files -n foo-doc"
    #[arg(short, long, value_name = "HEADER", allow_hyphen_values = true)]
    section: Option<String>,

    /// Emit the section listing as JSON
    #[arg(long, conflicts_with = "section")]
    json: bool,

    /// Treat unknown section options as errors
    #[arg(long)]
    strict: bool,

    /// Define a macro used when expanding names and contents
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_define)]
    defines: Vec<(String, String)>,

    /// Config file path (default: ~/.config/rpmspec-sections/config.toml)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,
}

fn parse_define(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got `{s}`")),
    }
}

/// One row of the section listing.
#[derive(Debug, Serialize)]
struct ListedSection<'a> {
    section: &'static str,
    line: Option<usize>,
    header: &'a str,
    package: Option<String>,
    args: ParsedSectionArgs,
    body: Vec<&'a str>,
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

/// Macros from the preamble, then the config file, then `-D`; later sources win.
fn build_macros(
    sections: &SpecSections,
    config: &Config,
    defines: &[(String, String)],
) -> MacroTable {
    let mut macros = sections.macros();
    macros.extend(config.macros.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    macros.extend(defines.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    macros
}

fn list_sections<'a>(
    sections: &'a SpecSections,
    macros: &MacroTable,
) -> Result<Vec<ListedSection<'a>>> {
    sections
        .blocks()
        .iter()
        .map(|block| {
            Ok::<_, anyhow::Error>(ListedSection {
                section: block.section_name(),
                line: block.line_number,
                header: &block.header_line,
                package: sections.package_name(block, macros)?,
                args: sections.args(block)?,
                body: block.body_lines().collect(),
            })
        })
        .collect()
}

fn describe_args(args: &ParsedSectionArgs) -> String {
    let mut parts = args.positional.clone();
    for (flag, value) in &args.options {
        match value {
            OptionValue::Present => parts.push(flag.clone()),
            OptionValue::Single(v) => parts.push(format!("{flag} {v}")),
            OptionValue::Multiple(vs) => {
                parts.extend(vs.iter().map(|v| format!("{flag} {v}")))
            }
        }
    }
    parts.join(" ")
}

fn write_listing(out: &mut impl Write, listing: &[ListedSection]) -> Result<()> {
    for entry in listing {
        let line = entry
            .line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        let package = entry.package.as_deref().unwrap_or("?");
        writeln!(
            out,
            "{line:>5}  {:<16} {package:<24} {:>4}  {}",
            entry.section,
            entry.body.len(),
            describe_args(&entry.args)
        )?;
    }
    Ok(())
}

fn write_section(out: &mut impl Write, block: &SectionBlock, macros: &MacroTable) -> Result<()> {
    for line in block.body_lines() {
        writeln!(out, "{}", macros.expand(line))?;
    }
    Ok(())
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let config = load_config(args)?;
    let path = config.resolve_spec_path(&args.file);
    debug!("Reading spec file {}", path.display());

    let policy = if args.strict || config.strict_arguments {
        UnknownFlags::Reject
    } else {
        UnknownFlags::Ignore
    };
    let spec = SpecFile::load(&path)?;
    let sections = spec.sections().with_policy(policy);
    let macros = build_macros(&sections, &config, &args.defines);
    info!(
        "{}: {} sections, {} macros",
        path.display(),
        sections.blocks().len(),
        macros.len()
    );

    if let Some(header) = &args.section {
        let block = sections
            .find_header(header, &macros)?
            .with_context(|| format!("No section `{header}` in {}", path.display()))?;
        return write_section(out, block, &macros);
    }

    let listing = list_sections(&sections, &macros)?;
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
        Ok(())
    } else {
        write_listing(out, &listing)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args, &mut stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
