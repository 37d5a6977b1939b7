//! Matchmaking CLI
//!
//! Build balanced foosball matchups from a roster of rated players.

use anyhow::{bail, Context};
use matchmaking::{win_probability, Matchmaker, MatchmakingConfig, Method, Roster};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::Path;

fn print_usage() {
    println!("Foosball Matchmaking");
    println!();
    println!("Usage:");
    println!("  matchmaking teams <roster.json> [--method M] [--config C] [--seed S] [--json]");
    println!("  matchmaking odds <roster.json> <def_a> <off_a> <def_b> <off_b>");
    println!();
    println!("Methods:");
    println!("  fair          - Most balanced teams (fresh partners for 4 players)");
    println!("  quite_fair    - One of the most balanced team sets, at random");
    println!("  random        - Random teams");
    println!();
    println!("Examples:");
    println!("  matchmaking teams roster.json --method quite_fair --seed 7");
    println!("  matchmaking odds roster.json anna ben cleo dora");
}

fn run_teams(args: &[String]) -> anyhow::Result<()> {
    let Some(roster_path) = args.first() else {
        bail!("teams requires a roster file");
    };

    // Parse optional arguments
    let mut method: Option<Method> = None;
    let mut config_path: Option<&str> = None;
    let mut seed: Option<u64> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--method" | "-m" => {
                if i + 1 < args.len() {
                    method = Some(args[i + 1].parse::<Method>()?);
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].as_str());
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    seed = Some(args[i + 1].parse::<u64>().context("seed must be a number")?);
                    i += 1;
                }
            }
            "--json" => json = true,
            other => tracing::warn!(argument = other, "ignoring unknown argument"),
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => MatchmakingConfig::load(Path::new(path))
            .with_context(|| format!("loading config {}", path))?,
        None => MatchmakingConfig::default(),
    };
    let roster = Roster::load(Path::new(roster_path))
        .with_context(|| format!("loading roster {}", roster_path))?;

    let method = method.unwrap_or(config.method);
    let mut rng = match seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (defense, offense) = roster.ratings();
    let partners = roster.partner_counts();
    let matchmaker = Matchmaker::new(config);
    let matchups = matchmaker.create_matchups(&defense, &offense, method, &partners, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&matchups)?);
        return Ok(());
    }

    println!("=== Matchups ({}, {} players) ===", method, roster.len());
    println!("{:<30} vs {:<30} {:>7} {:>7}", "Team A", "Team B", "Win A", "Win B");
    println!("{}", "-".repeat(78));
    for m in &matchups {
        println!(
            "{:<30} vs {:<30} {:>6.1}% {:>6.1}%",
            roster.describe(&m.team_a),
            roster.describe(&m.team_b),
            m.win_probability_a * 100.0,
            m.win_probability_b * 100.0
        );
    }
    Ok(())
}

fn run_odds(args: &[String]) -> anyhow::Result<()> {
    if args.len() < 5 {
        bail!("odds requires a roster file and four player names");
    }

    let roster = Roster::load(Path::new(&args[0]))
        .with_context(|| format!("loading roster {}", args[0]))?;
    let team_a = roster.team(&args[1], &args[2])?;
    let team_b = roster.team(&args[3], &args[4])?;

    let (defense, offense) = roster.ratings();
    let p = win_probability(
        &team_a.ratings(&defense, &offense),
        &team_b.ratings(&defense, &offense),
    );

    println!(
        "{} vs {}: {:.1}% - {:.1}%",
        roster.describe(&team_a),
        roster.describe(&team_b),
        p * 100.0,
        (1.0 - p) * 100.0
    );
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "teams" => run_teams(&args[2..]),
        "odds" => run_odds(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
