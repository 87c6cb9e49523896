//! Interactive session wiring: the age gate prompt and the command loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use dose_core::DoseRepository;
use dose_core::age_gate::{AgeGate, GateEvent};
use dose_core::db::RepositoryRegistry;
use dose_core::models::{DosageResult, SavedCalculation};
use dose_store_json::JsonRepositoryFactory;
use tracing::info;

use crate::command::{self, Command};
use crate::message::Notice;
use crate::session::CalculatorSession;
use crate::utils::format_mg;

/// All storage backends this build knows about.
pub fn build_registry() -> RepositoryRegistry {
    let mut registry = RepositoryRegistry::new();
    registry.register(Box::new(JsonRepositoryFactory));
    registry
}

const AGE_PROMPT: &str = "This calculator deals with cannabis infusions. \
Please confirm you are 21 years of age or older to continue [yes/no]: ";

const ACCESS_DENIED: &str = "\
Access denied: you must be 21 years of age or older to use this calculator.
Please exit.";

const HELP: &str = "\
Commands:
  herb <grams>          herb amount, e.g. 'herb 3.5'
  potency <percent>     THC/CBD potency, e.g. 'potency 20'
  fat <grams>           fat amount in grams or ml, e.g. 'fat 100'
  fat-type <type>       butter, coconut-oil, olive-oil, mct-oil or ghee
  servings <count>      number of servings, e.g. 'servings 12'
  calc                  calculate the dosage breakdown
  reset                 clear the numeric fields and the current result
  save                  save the current calculation to the store
  list                  show saved calculations
  info                  safety notes and how infusion works
  quit                  end the session";

const INFO: &str = "\
Important safety notes:
  - Start with small doses (2.5-5mg) and wait 2+ hours before consuming more.
  - Effects can take 30 minutes to 2 hours to appear.
  - This calculator assumes 80% extraction efficiency.
  - Actual potency may vary based on decarboxylation and infusion methods.
  - Always label your edibles and store safely away from children and pets.
  - Check local laws regarding cannabis use and possession.

How it works:
  1. Decarboxylation: heat your herb to activate THC/CBD (usually 240F for 40 minutes).
  2. Infusion: slowly heat herb with fat for 2-4 hours to extract cannabinoids.
  3. Calculate: use this calculator to determine precise dosages for your recipes.";

/// Runs the interactive session against an opened repository.
///
/// The age gate comes first: if the persisted flag is not set, the user is
/// prompted once per session. A denial prints a static notice and ends the
/// session without persisting anything.
pub async fn run(repo: Box<dyn DoseRepository>) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let verified = repo.age_verified().await?;
    let mut gate = AgeGate::from_flag(verified);

    while !gate.is_terminal() {
        print!("{AGE_PROMPT}");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        match line?.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => {
                gate = gate.apply(GateEvent::Confirm);
                repo.set_age_verified(true).await?;
            }
            "no" | "n" => gate = gate.apply(GateEvent::Deny),
            _ => println!("Please answer yes or no."),
        }
    }

    if !gate.allows_entry() {
        println!("{ACCESS_DENIED}");
        return Ok(());
    }

    println!("Herb Infusion Dosage Calculator — type 'help' for commands.");
    let mut session = CalculatorSession::new(repo);

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let parsed = match command::parse(&line) {
            Ok(parsed) => parsed,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match parsed {
            Command::Set(field, value) => {
                if let Err(err) = session.set_field(field, value) {
                    print_notice(&err.to_notice());
                }
            }
            Command::Calculate => match session.calculate() {
                Ok(notice) => {
                    if let Some(result) = session.result() {
                        print_result(result);
                    }
                    print_notice(&notice);
                }
                Err(err) => print_notice(&err.to_notice()),
            },
            Command::Reset => print_notice(&session.reset()),
            Command::Save => match session.save().await {
                Ok(notice) => print_notice(&notice),
                Err(err) => print_notice(&err.to_notice()),
            },
            Command::List => match session.list().await {
                Ok(saved) => print_saved(&saved),
                Err(err) => print_notice(&err.to_notice()),
            },
            Command::Info => println!("{INFO}"),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    info!("session ended");
    Ok(())
}

fn print_notice(notice: &Notice) {
    println!("{notice}");
}

fn print_result(result: &DosageResult) {
    println!("Dosage Results");
    println!("  Total cannabinoids:  {}", format_mg(result.total_mg));
    println!("  Extracted into fat:  {}", format_mg(result.extracted_mg));
    println!("  Per serving:         {}", format_mg(result.per_serving_mg));
    println!(
        "  Per gram of {}: {}",
        result.fat_type.label().to_lowercase(),
        format_mg(result.per_gram_fat_mg)
    );
}

fn print_saved(saved: &[SavedCalculation]) {
    if saved.is_empty() {
        println!("No saved calculations yet.");
        return;
    }
    for calc in saved {
        println!(
            "#{:<3} {}  {}g at {}% into {}g {} over {} servings -> {} per serving",
            calc.id,
            calc.created_at.format("%Y-%m-%d %H:%M"),
            calc.input.herb_mass_g,
            calc.input.herb_potency_pct,
            calc.input.fat_mass_g,
            calc.input.fat_type.label().to_lowercase(),
            calc.input.servings,
            format_mg(calc.result.per_serving_mg),
        );
    }
}
