//! Mimic CLI

use mimicc::commands::{
    check_file, explain_error, generate_file, parse_generate_options, GenerateOptions,
};
use mimicc::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let code = match command.as_str() {
        "generate" => {
            if args.len() < 3 {
                eprintln!("Usage: mimic generate <catalog.json> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --format=<fmt>            Output format: json (default), outline");
                eprintln!("  --message-format=<fmt>    Problem reports: human (default), json");
                eprintln!("  --jobs=<n>                Worker threads per batch level");
                eprintln!("  --fail-fast               Stop output at the first failed request");
                std::process::exit(1);
            }
            let options = options_or_exit(&args[3..]);
            generate_file(&args[2], &options)
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: mimic check <catalog.json> [--jobs=<n>] [--message-format=<fmt>]");
                std::process::exit(1);
            }
            let options = options_or_exit(&args[3..]);
            check_file(&args[2], options.jobs, options.messages)
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: mimic explain <ERROR_CODE>");
                eprintln!("Example: mimic explain M0004");
                std::process::exit(1);
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("mimic {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn options_or_exit(args: &[String]) -> GenerateOptions {
    match parse_generate_options(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Mimic stand-in generator");
    println!();
    println!("Usage: mimic <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <catalog.json>  Build blueprints for every request in a catalog");
    println!("  check <catalog.json>     Resolve every request and report problems only");
    println!("  explain <code>           Explain an error code (e.g., M0004)");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG                 Log filter (e.g., mimic_blueprint=debug)");
    println!("  MIMIC_LOG_TREE           Render logs as an indented span tree");
}
