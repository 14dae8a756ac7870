use std::{env, path::Path, process};

use log::debug;
use problem_registry::{
    category::{category_of, category_of_id},
    irritant::{
        Irritant,
        tokens::{WARNING_TOKENS, irritant_to_token, is_special_token, token_to_irritants},
    },
    messages::message_for,
    options::{SeverityOption, default_severity, irritant_of, option_for},
    problem::{ProblemId, ProblemKind, kind_of_id},
    settings::{ProblemSettings, SettingsError},
    validate::Validator,
};

const EXIT_FINDINGS: i32 = 1;
const EXIT_USAGE: i32 = 2;

const SEVERITY_USAGE: &str = "problem-registry severity <ProblemName> [--settings <file.json>] [--warn <spec>] [--suppress <token>] [--suppress-optional-errors]";

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|arg| arg == "--verbose");
    let json = args.iter().any(|arg| arg == "--json");
    if verbose {
        args.retain(|arg| arg != "--verbose");
    }
    if json {
        args.retain(|arg| arg != "--json");
    }

    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => print_help(),
        "check" => check(json),
        "regen" => {
            if args.len() < 3 {
                usage("problem-registry regen <categories|options>");
            }
            regen(&args[2]);
        }
        "describe" => {
            if args.len() < 3 {
                usage("problem-registry describe <ProblemName|id>");
            }
            describe(&args[2]);
        }
        "token" => {
            if args.len() < 3 {
                usage("problem-registry token <token>");
            }
            show_token(&args[2]);
        }
        "tokens" => {
            for token in WARNING_TOKENS {
                println!("{token}");
            }
        }
        "irritants" => show_irritants(),
        "severity" => {
            if args.len() < 3 {
                usage(SEVERITY_USAGE);
            }
            if let Err(err) = show_severity(&args[2], &args[3..]) {
                eprintln!("Error: {err}");
                process::exit(EXIT_USAGE);
            }
        }
        other => {
            eprintln!("Error: unknown command '{other}'");
            print_help();
            process::exit(EXIT_USAGE);
        }
    }
}

fn print_help() {
    println!(
        "\
problem-registry

Usage:
  problem-registry check [--json]
  problem-registry regen <categories|options>
  problem-registry describe <ProblemName|id>
  problem-registry token <token>
  problem-registry tokens
  problem-registry irritants
  problem-registry severity <ProblemName> [--settings <file.json>] [--warn <spec>] [--suppress <token>] [--suppress-optional-errors]

Flags:
  --verbose          Log validator phases (RUST_LOG overrides)
  --json             Print the check report as JSON
  -h, --help         Show this help message
"
    );
}

fn usage(text: &str) -> ! {
    eprintln!("Usage: {text}");
    process::exit(EXIT_USAGE);
}

fn check(json: bool) {
    let report = Validator::for_registry().inspect();
    if json {
        match report.to_json() {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("Error: cannot serialize report: {err}");
                process::exit(EXIT_USAGE);
            }
        }
    } else {
        print!("{report}");
    }
    if !report.is_clean() {
        process::exit(EXIT_FINDINGS);
    }
}

fn regen(table: &str) {
    let report = Validator::for_registry().inspect();
    match table {
        "categories" | "category" => print!("{}", report.category_table.source),
        "options" | "option" => print!("{}", report.option_table.source),
        _ => usage("problem-registry regen <categories|options>"),
    }
}

fn resolve_kind(text: &str) -> Option<ProblemKind> {
    ProblemKind::from_name(text).or_else(|| ProblemId::parse(text).and_then(kind_of_id))
}

fn describe(text: &str) {
    let Some(kind) = resolve_kind(text) else {
        match ProblemId::parse(text) {
            Some(id) => {
                println!("id:        {} ({:#010x})", id, id.raw());
                println!("problem:   <undeclared>");
                println!("category:  {}", category_of_id(id));
            }
            None => {
                eprintln!("Error: no problem named '{text}'");
                process::exit(EXIT_USAGE);
            }
        }
        return;
    };

    let id = kind.id();
    println!("problem:   {}{}", kind, if kind.is_deprecated() { " (deprecated)" } else { "" });
    println!("id:        {} ({:#010x})", id, id.raw());
    println!("category:  {}", category_of(kind));
    match option_for(kind) {
        Some(option) => {
            println!("option:    {} (default {})", option.qualified_key(), option.default_severity());
        }
        None => println!("option:    none (mandatory, {})", default_severity(kind)),
    }
    match irritant_of(kind) {
        Some(irritant) => println!(
            "irritant:  {} token {}",
            irritant,
            irritant_to_token(irritant).unwrap_or("-")
        ),
        None => println!("irritant:  none"),
    }
    println!("message:   {}", message_for(kind, &[]));
}

fn show_token(token: &str) {
    let Some(irritants) = token_to_irritants(token) else {
        eprintln!("Error: unknown warning token '{token}'");
        process::exit(EXIT_USAGE);
    };
    if is_special_token(token) {
        println!("{token}: special token, {} irritant(s)", irritants.len());
    } else {
        println!("{token}: {} irritant(s)", irritants.len());
    }
    for irritant in irritants.iter() {
        let key = SeverityOption::from_irritant(irritant).map_or("-", SeverityOption::key);
        println!("  {:<6} {key}", irritant.to_string());
    }
}

fn show_irritants() {
    for irritant in Irritant::DECLARED {
        let key = SeverityOption::from_irritant(*irritant).map_or("-", SeverityOption::key);
        let token = irritant_to_token(*irritant).unwrap_or("-");
        println!("{:<6} {:<45} {}", irritant.to_string(), key, token);
    }
}

fn show_severity(name: &str, rest: &[String]) -> Result<(), SettingsError> {
    let Some(kind) = resolve_kind(name) else {
        usage(SEVERITY_USAGE);
    };

    let mut settings = ProblemSettings::new();
    let mut i = 0;
    while i < rest.len() {
        let flag = rest[i].as_str();
        if flag == "--suppress-optional-errors" {
            settings.set_suppress_optional_errors(true);
            i += 1;
            continue;
        }
        let Some(value) = rest.get(i + 1) else {
            usage(SEVERITY_USAGE);
        };
        match flag {
            "--settings" => {
                settings = ProblemSettings::from_file(Path::new(value))?;
            }
            "--warn" => settings.apply_warn_spec(value)?,
            "--suppress" => settings.suppress(value)?,
            _ => usage(SEVERITY_USAGE),
        }
        i += 2;
    }

    debug!("resolving severity of {kind}");
    println!("{}: {}", kind, settings.effective_severity(kind));
    Ok(())
}
