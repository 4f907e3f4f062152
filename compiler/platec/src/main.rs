//! The `plate` command-line runner.

use platec::commands::{
    check_file, explain_error, lex_file, parse_file, parse_run_options, run_file, step_file,
    RunOptions, EXIT_ERROR,
};

fn main() {
    platec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" | "step" => {
            if args.len() < 4 {
                eprintln!("Usage: plate {command} <program.plate> <world.level> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --max-steps=<n>            Stop after n steps (default: $PLATE_MAX_STEPS or 1000000)");
                eprintln!("  --quiet, -q                Only print step names, not the world");
                eprintln!("  --color=auto|always|never  Diagnostic colors");
                std::process::exit(EXIT_ERROR);
            }

            let mut options = RunOptions::from_env();
            options.merge(&parse_run_options(&args[4..]));

            if command == "run" {
                run_file(&args[2], &args[3], &options);
            } else {
                step_file(&args[2], &args[3], &options);
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: plate check <program.plate>");
                std::process::exit(EXIT_ERROR);
            }
            let options = parse_run_options(&args[3..]);
            check_file(&args[2], options.color);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: plate parse <program.plate>");
                std::process::exit(EXIT_ERROR);
            }
            let options = parse_run_options(&args[3..]);
            parse_file(&args[2], options.color);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: plate lex <program.plate>");
                std::process::exit(EXIT_ERROR);
            }
            lex_file(&args[2]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: plate explain <ERROR_CODE>");
                eprintln!("Example: plate explain E1006");
                std::process::exit(EXIT_ERROR);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("plate {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_ERROR);
        }
    }
}

fn print_usage() {
    println!("plate: move plates around a grid");
    println!();
    println!("Usage: plate <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <program> <level>   Run a program and print the final world");
    println!("  step <program> <level>  Run a program, printing the world after every step");
    println!("  check <program>         Check a program for syntax errors (no execution)");
    println!("  parse <program>         Build and display the syntax tree");
    println!("  lex <program>           Tokenize and display tokens");
    println!("  explain <code>          Explain an error code (e.g., E1006)");
    println!("  help                    Show this help message");
    println!("  version                 Show version information");
    println!();
    println!("Run options:");
    println!("  --max-steps=<n>            Stop after n steps (exit code 2)");
    println!("  --quiet, -q                With `step`, only print step names");
    println!("  --color=auto|always|never  Diagnostic colors");
    println!();
    println!("Environment:");
    println!("  PLATE_MAX_STEPS   Default step budget");
    println!("  RUST_LOG          Enable logging, e.g. RUST_LOG=plate_eval=trace");
    println!("  PLATE_LOG_TREE=1  Show logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  plate run sweep.plate room.level");
    println!("  plate step sweep.plate room.level --max-steps=20");
    println!("  plate check sweep.plate");
    println!("  plate explain E1005");
}
