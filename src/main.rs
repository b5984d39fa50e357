use std::fs;
use std::io::{self, Read};
use std::path::Path;

use autocode::autocode::{AutoCodeRequest, parse_segments_json, plan};
use autocode::config::{load_config, load_config_from_path};
use autocode::output::{render_matches, render_plan};
use autocode::{AutocodeError, TextMatcher};
use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;

mod cli;

use cli::{Args, Settings};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config_result = match &args.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }

    let settings = args.resolve(&config_result.config);
    let text = read_input(args.file.as_deref())?;

    let rendered = run(&args, settings, &text)?;
    print!("{}", rendered);

    Ok(())
}

fn run(args: &Args, settings: Settings, text: &str) -> Result<String> {
    let Some(code) = &args.code else {
        let matcher = TextMatcher::new(text);
        let matches = matcher.try_find_matches(&args.pattern, settings.options)?;
        return Ok(render_matches(&matcher, &matches, settings.format)?);
    };

    let existing = match &args.existing {
        Some(path) => {
            let content = fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read segments from {}", path.display()))?;
            parse_segments_json(&content)?
        }
        None => Vec::new(),
    };

    let request = AutoCodeRequest {
        code: code.clone(),
        pattern: args.pattern.clone(),
        options: settings.options,
    };
    let plan = plan(text, &request, &existing)?;

    Ok(render_plan(&plan, settings.format)?)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .map_err(AutocodeError::from)
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(AutocodeError::from)
                .wrap_err("Failed to read stdin")?;
            Ok(text)
        }
    }
}
