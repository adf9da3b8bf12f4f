//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::distance::sequence_distance;
use crate::game::GuessResponse;
use crate::hangul::{assemble, disassemble, disassemble_grouped};
use crate::matcher::{similarity, MatchType, PhoneticMatcher};
use crate::word_bank::{Difficulty, WordBank, WordEntry};

use super::args::Commands;
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Match {
            guess,
            target,
            synonyms,
            threshold,
            json,
        } => cmd_match(&guess, &target, synonyms, threshold, json, config_path),
        Commands::Similarity { first, second } => cmd_similarity(&first, &second),
        Commands::Decompose { text, grouped } => cmd_decompose(&text, grouped),
        Commands::Compose { jamo } => cmd_compose(&jamo),
        Commands::Words {
            dir,
            validate,
            json,
        } => cmd_words(dir, validate, json, config_path),
        Commands::Check {
            id,
            guess,
            dir,
            threshold,
            json,
        } => cmd_check(&id, &guess, dir, threshold, json, config_path),
        Commands::Settings {
            set_threshold,
            set_normalized_confidence,
            set_word_bank,
            reset,
        } => cmd_settings(
            set_threshold,
            set_normalized_confidence,
            set_word_bank,
            reset,
            config_path,
        ),
    }
}

/// Build the matcher from persisted settings and CLI overrides
fn load_matcher(threshold: Option<f64>, config_path: Option<PathBuf>) -> Result<PhoneticMatcher> {
    let config = PersistentConfig::load_from(config_path)?.merge_with_cli(threshold, None);
    PhoneticMatcher::with_config(config.matcher_config()).context("Invalid matcher settings")
}

/// Load the word bank from the CLI directory, the configured one, or the default
fn load_word_bank(dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<WordBank> {
    let config = PersistentConfig::load_from(config_path)?.merge_with_cli(None, dir);
    let dir = config.resolve_word_bank_dir()?;
    WordBank::load_dir(&dir)
        .with_context(|| format!("Failed to load word bank from: {}", dir.display()))
}

/// Match command
fn cmd_match(
    guess: &str,
    target: &str,
    synonyms: Vec<String>,
    threshold: Option<f64>,
    json: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let matcher = load_matcher(threshold, config_path)?;
    let entry = WordEntry::new("cli", target).with_synonyms(synonyms);
    let response = GuessResponse::from(matcher.match_guess(guess, &entry));

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_verdict(guess, &entry, &response, &matcher);
    }
    Ok(())
}

/// Check command
fn cmd_check(
    id: &str,
    guess: &str,
    dir: Option<PathBuf>,
    threshold: Option<f64>,
    json: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let matcher = load_matcher(threshold, config_path.clone())?;
    let bank = load_word_bank(dir, config_path)?;
    let entry = bank
        .word_by_id(id)
        .with_context(|| format!("No word with id {} in the word bank", id))?;
    let response = GuessResponse::from(matcher.match_guess(guess, entry));

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_verdict(guess, entry, &response, &matcher);
    }
    Ok(())
}

fn print_verdict(
    guess: &str,
    entry: &WordEntry,
    response: &GuessResponse,
    matcher: &PhoneticMatcher,
) {
    println!("  Guess:      {}", guess.cyan());
    println!("  Target:     {}", entry.word.cyan());
    if !entry.synonyms.is_empty() {
        println!("  Synonyms:   {}", entry.synonyms.join(", ").cyan());
    }
    println!();

    let verdict = if response.is_correct {
        "CORRECT".green().bold()
    } else {
        "WRONG".red().bold()
    };
    println!("  Verdict:    {}", verdict);
    println!("  Match type: {}", match_type_label(response.match_type));
    println!("  Confidence: {:.4}", response.confidence);
    println!("  Points:     {}", response.points_awarded.to_string().green());

    if response.match_type == MatchType::None {
        let best = entry
            .candidates()
            .map(|candidate| similarity(guess, candidate))
            .fold(0.0_f64, f64::max);
        println!();
        println!(
            "  Best similarity {:.4} is below the threshold {}",
            best,
            matcher.config().fuzzy_threshold.to_string().yellow()
        );
    }
}

fn match_type_label(match_type: MatchType) -> colored::ColoredString {
    match match_type {
        MatchType::Exact | MatchType::Synonym => match_type.name().green(),
        MatchType::Normalized | MatchType::Fuzzy => match_type.name().yellow(),
        MatchType::None => match_type.name().red(),
    }
}

/// Similarity command
fn cmd_similarity(first: &str, second: &str) -> Result<()> {
    let first_jamo = disassemble(first);
    let second_jamo = disassemble(second);
    let distance = sequence_distance(&first_jamo, &second_jamo);

    println!(
        "  {} -> {} ({} jamo)",
        first.cyan(),
        first_jamo.iter().collect::<String>(),
        first_jamo.len()
    );
    println!(
        "  {} -> {} ({} jamo)",
        second.cyan(),
        second_jamo.iter().collect::<String>(),
        second_jamo.len()
    );
    println!();
    println!("  Distance:   {}", distance.to_string().yellow());
    println!(
        "  Similarity: {}",
        format!("{:.4}", similarity(first, second)).green()
    );
    Ok(())
}

/// Decompose command
fn cmd_decompose(text: &str, grouped: bool) -> Result<()> {
    if grouped {
        for (c, group) in text.chars().zip(disassemble_grouped(text)) {
            println!("  {} {}", c.to_string().cyan(), group.iter().collect::<String>());
        }
    } else {
        println!("{}", disassemble(text).iter().collect::<String>());
    }
    Ok(())
}

/// Compose command
fn cmd_compose(jamo: &str) -> Result<()> {
    let jamo: Vec<char> = jamo.chars().filter(|c| !c.is_whitespace()).collect();
    println!("{}", assemble(&jamo));
    Ok(())
}

/// Words command
fn cmd_words(
    dir: Option<PathBuf>,
    validate: bool,
    json: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let bank = load_word_bank(dir, config_path)?;
    let stats = bank.statistics();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", "Word Bank".bold().underline());
        println!();
        println!("  Total:  {}", stats.total.to_string().green());
        for difficulty in Difficulty::ALL {
            println!(
                "  {:<7} {}",
                format!("{}:", difficulty),
                bank.count_by_difficulty(difficulty).to_string().yellow()
            );
        }
        if !stats.categories.is_empty() {
            println!();
            println!("{}", "Categories".bold());
            for (category, count) in &stats.categories {
                let label = if category.is_empty() {
                    "(none)"
                } else {
                    category.as_str()
                };
                println!("  {}: {}", label.cyan(), count);
            }
        }
    }

    if validate {
        let report = bank.validate();
        if !json {
            println!();
        }
        if report.is_valid() {
            if !json {
                println!("{}", "No problems found".green().bold());
            }
        } else {
            for issue in &report.issues {
                eprintln!("  {}: {}", "Problem".yellow().bold(), issue);
            }
            bail!("Word bank has {} problem(s)", report.issues.len());
        }
    }

    Ok(())
}

/// Settings command
fn cmd_settings(
    set_threshold: Option<f64>,
    set_normalized_confidence: Option<f64>,
    set_word_bank: Option<PathBuf>,
    reset: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    if reset {
        let config = PersistentConfig::default();
        config.save_to(config_path.clone())?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config, config_path);
        return Ok(());
    }

    let mut config = PersistentConfig::load_from(config_path.clone())?;
    let mut matcher = config.matcher_config();
    let mut changed = false;

    if let Some(threshold) = set_threshold {
        matcher = matcher.with_fuzzy_threshold(threshold);
        println!("  Set fuzzy threshold: {}", threshold.to_string().green());
        changed = true;
    }

    if let Some(confidence) = set_normalized_confidence {
        matcher = matcher.with_normalized_confidence(confidence);
        println!(
            "  Set normalized confidence: {}",
            confidence.to_string().green()
        );
        changed = true;
    }

    if changed {
        matcher.validate()?;
        config.matcher = Some(matcher);
    }

    if let Some(dir) = set_word_bank {
        println!(
            "  Set word bank directory: {}",
            dir.display().to_string().cyan()
        );
        config.word_bank_dir = Some(dir);
        changed = true;
    }

    if changed {
        config.save_to(config_path.clone())?;
        println!();
        println!("{}", "Configuration saved".green().bold());
    }

    println!();
    print_config(&config, config_path);

    Ok(())
}

/// Print current configuration
fn print_config(config: &PersistentConfig, config_path: Option<PathBuf>) {
    let matcher = config.matcher_config();

    println!("{}", "Current Configuration:".bold().underline());
    println!();
    println!(
        "  Fuzzy Threshold:       {}",
        matcher.fuzzy_threshold.to_string().yellow()
    );
    println!(
        "  Normalized Confidence: {}",
        matcher.normalized_confidence.to_string().yellow()
    );

    let word_bank = config
        .resolve_word_bank_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "(unset)".to_string());
    println!("  Word Bank:             {}", word_bank.cyan());

    let file = config_file_path_with_override(config_path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "(unknown)".to_string());
    println!();
    println!("  Config file: {}", file.cyan());
}
