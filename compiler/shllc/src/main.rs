//! SHLL command-line tool.

use shllc::commands::{
    check_file, explain_error, fmt_file, lex_file, parse_file, parse_options, Options,
};
use shllc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => run_file_command("lex", &args[2..], lex_file),
        "parse" => run_file_command("parse", &args[2..], parse_file),
        "fmt" => run_file_command("fmt", &args[2..], fmt_file),
        "check" => run_file_command("check", &args[2..], check_file),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("shll {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: shll --explain <ERROR_CODE>");
                eprintln!("Example: shll --explain E1004");
                std::process::exit(1);
            }
            if !explain_error(&args[2]) {
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn run_file_command(name: &str, args: &[String], run: fn(&str, &Options) -> bool) {
    let (options, paths) = match parse_options(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    let [path] = paths.as_slice() else {
        eprintln!("Usage: shll {name} <file> [options]");
        eprintln!("Use `-` as the file to read standard input.");
        std::process::exit(1);
    };
    if !run(path, &options) {
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("SHLL term notation tool");
    println!();
    println!("Usage: shll <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  parse <file>         Parse one term and display its tree");
    println!("  fmt <file>           Print the canonical form of a term");
    println!("  check <file>         Parse a term, reporting only errors");
    println!("  --explain <code>     Explain an error code (e.g., E1004)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       auto (default), always, never");
    println!("  --trivia             lex: also show whitespace tokens");
    println!();
    println!("Use `-` as the file to read standard input.");
    println!("Set RUST_LOG (e.g. RUST_LOG=shll_parse=trace) for debug logging;");
    println!("add SHLL_LOG_TREE=1 for an indented trace.");
    println!();
    println!("Examples:");
    println!("  shll parse term.shll");
    println!("  echo 'f(1, x=2)' | shll fmt -");
    println!("  shll lex --trivia term.shll");
    println!("  shll --explain E1002");
}
