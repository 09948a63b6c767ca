//! Tally CLI
//!
//! Read chat-style messages as numbers from the command line.

use tallyc::commands::{check_file, lookup_word, parse_options, parse_text, sequence_text};

fn main() {
    tallyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let (positional, options) = match parse_options(&args[2..]) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    };

    match command {
        "parse" => {
            if positional.is_empty() {
                eprintln!("Usage: tally parse <text> [--expect N] [--deadline-ms N]");
                std::process::exit(1);
            }
            parse_text(&positional.join(" "), &options);
        }
        "seq" => {
            if positional.is_empty() {
                eprintln!("Usage: tally seq <text> [--expect N] [--max-sequence N]");
                std::process::exit(1);
            }
            sequence_text(&positional.join(" "), &options);
        }
        "lookup" => {
            let [word] = positional.as_slice() else {
                eprintln!("Usage: tally lookup <word>");
                std::process::exit(1);
            };
            lookup_word(word);
        }
        "check" => {
            let [path] = positional.as_slice() else {
                eprintln!("Usage: tally check <file> [--deadline-ms N]");
                eprintln!();
                eprintln!("Each line of <file> is `expected<TAB>text`.");
                eprintln!("Blank lines and lines starting with `#` are skipped.");
                std::process::exit(1);
            };
            if !check_file(path, &options) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("tally {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Tally - contextual number interpreter");
    println!();
    println!("Usage: tally <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <text>     Read one value and show how it was chosen");
    println!("  seq <text>       Read a run of consecutive values");
    println!("  lookup <word>    Show every table reading of one word");
    println!("  check <file>     Verify `expected<TAB>text` lines in parallel");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Options:");
    println!("  --expect N         Value expected next (default: 1)");
    println!("  --deadline-ms N    Evaluation deadline in milliseconds (default: 500)");
    println!("  --max-sequence N   Most values read by `seq` (default: 10)");
    println!();
    println!("Set RUST_LOG=tally_interp=debug to trace candidate selection.");
}
