//! Word Ladder CLI
//!
//! One-shot and interactive front end for the shortest word ladder solver.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;
use word_ladder::harness::{load_cases, run_cases};
use word_ladder::{
    neighbors, normalize, CaseOutcome, CaseReport, Dictionary, DictionarySource, HarnessSummary,
    LadderCase, LadderSolver,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");
const SEPARATOR_WIDTH: usize = 55;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Pull `--dict PATH` (or `--dict=PATH`) out of the argument list.
fn split_dict_flag(args: Vec<String>) -> Result<(Option<PathBuf>, Vec<String>), String> {
    let mut dict = None;
    let mut rest = Vec::new();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "--dict" || arg == "-d" {
            match iter.next() {
                Some(path) => dict = Some(PathBuf::from(path)),
                None => return Err(format!("{} requires a path", arg)),
            }
        } else if let Some(path) = arg.strip_prefix("--dict=") {
            dict = Some(PathBuf::from(path));
        } else {
            rest.push(arg);
        }
    }

    Ok((dict, rest))
}

fn load_dictionary(source: &DictionarySource) -> Dictionary {
    match source.load() {
        Ok(dictionary) => dictionary,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("No queries were run.");
            process::exit(2);
        }
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_chain_result(solver: &LadderSolver<'_>, start: &str, end: &str) {
    let (chain, stats) = solver.find_chain_with_stats(start, end);
    match chain {
        Some(chain) => {
            println!(
                "Word chain from {} to {}: {}",
                chain.start().unwrap_or(start),
                chain.end().unwrap_or(end),
                chain
            );
            println!(
                "  {} step(s), {} words visited, {} expanded",
                chain.steps(),
                stats.visited,
                stats.expanded
            );
        }
        None => {
            println!("No word chain found from {} to {}", normalize(start), normalize(end));
            println!("  {} words visited", stats.visited);
        }
    }
}

fn print_neighbors(dictionary: &Dictionary, word: &str) {
    let word = normalize(word);
    let found = neighbors(&word, dictionary);
    if found.is_empty() {
        println!("No neighbors of {} in the dictionary.", word);
    } else {
        println!("{} neighbor(s) of {}: {}", found.len(), word, found.join(", "));
    }
}

fn print_report(index: usize, report: &CaseReport) {
    let case = &report.case;
    println!(
        "Test case {}: start={} end={} elapsed={:.3?}",
        index + 1,
        case.start,
        case.end,
        report.elapsed
    );

    match (report.outcome, &report.actual) {
        (CaseOutcome::Passed, Some(chain)) => {
            println!("Test case passed!");
            println!("Word chain from {} to {}: {}", case.start, case.end, chain);
        }
        (CaseOutcome::Passed, None) => {
            println!("Test case passed!");
            println!("No word chain found from {} to {}", case.start, case.end);
        }
        (CaseOutcome::Mismatch, Some(chain)) => {
            println!("Test case failed.");
            println!("  expected: {}", case.expected.as_deref().unwrap_or_default().join(" -> "));
            println!("  actual:   {}", chain);
        }
        (CaseOutcome::Unexpected, Some(chain)) => {
            println!("Test case failed.");
            println!("  expected no chain, found: {}", chain);
        }
        _ => {
            println!("Test case failed.");
            println!("No word chain found from {} to {}", case.start, case.end);
        }
    }
    println!("{}", "-".repeat(SEPARATOR_WIDTH));
}

/// Run the cases and print the reports. Returns the summary for the exit status.
fn run_check(solver: &LadderSolver<'_>, cases: &[LadderCase]) -> HarnessSummary {
    let reports = run_cases(solver, cases);
    for (i, report) in reports.iter().enumerate() {
        print_report(i, report);
    }

    let summary = HarnessSummary::from_reports(&reports);
    println!(
        "{} of {} case(s) passed in {:.3?}",
        summary.passed,
        summary.total(),
        summary.elapsed
    );
    summary
}

fn run_interactive(dictionary: &Dictionary, source: &DictionarySource) -> io::Result<()> {
    print_banner();
    println!();
    println!("Loaded {} words from {}.", dictionary.len(), source);
    println!("Type 'help' for commands.");
    println!();

    let solver = LadderSolver::new(dictionary);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "ladder" | "l" | "chain" => {
                if parts.len() < 3 {
                    println!("Usage: ladder <start> <end>");
                    println!("Example: ladder cold warm");
                    continue;
                }
                println!();
                print_chain_result(&solver, parts[1], parts[2]);
                println!();
            }
            "neighbors" | "n" => {
                if parts.len() < 2 {
                    println!("Usage: neighbors <word>");
                    continue;
                }
                print_neighbors(dictionary, parts[1]);
            }
            "check" => {
                println!();
                run_check(&solver, &LadderCase::builtin());
                println!();
            }
            "stats" => {
                let mut by_length = std::collections::BTreeMap::new();
                for word in dictionary.iter() {
                    *by_length.entry(word.chars().count()).or_insert(0usize) += 1;
                }
                println!();
                println!("Source: {}", source);
                println!("Words: {}", dictionary.len());
                for (length, count) in by_length {
                    println!("  {:>2} letters: {:>6}", length, count);
                }
                println!();
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }

    Ok(())
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = match split_dict_flag(args) {
        Ok(split) => split,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Use --help for usage information.");
            process::exit(1);
        }
    };

    if matches!(args.first().map(String::as_str), Some("--help" | "-h" | "help")) {
        println!("{}", USAGE_TEXT);
        return;
    }

    let source = DictionarySource::resolve(dict_path);
    let dictionary = load_dictionary(&source);
    let solver = LadderSolver::new(&dictionary);

    match args.first().map(String::as_str) {
        None => {
            if let Err(err) = run_interactive(&dictionary, &source) {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        }
        Some("check") => {
            let cases = match args.get(1) {
                Some(path) => match load_cases(path) {
                    Ok(cases) => cases,
                    Err(err) => {
                        eprintln!("Error: {}", err);
                        process::exit(1);
                    }
                },
                None => LadderCase::builtin(),
            };
            if !run_check(&solver, &cases).all_passed() {
                process::exit(1);
            }
        }
        Some("neighbors") => match args.get(1) {
            Some(word) => print_neighbors(&dictionary, word),
            None => {
                eprintln!("Usage: word-ladder neighbors <word>");
                process::exit(1);
            }
        },
        Some(start) => match args.get(1) {
            Some(end) if args.len() == 2 => print_chain_result(&solver, start, end),
            _ => {
                eprintln!("Usage: word-ladder <start> <end>");
                eprintln!("Use --help for usage information.");
                process::exit(1);
            }
        },
    }
}
