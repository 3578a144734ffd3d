use anyhow::Result;
use markdown_tidy_engine::{format, io, parse, treeviz};
use std::{env, path::PathBuf, process};

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [--tree] [file]");
    eprintln!();
    eprintln!("Reads a markdown document from <file>, or stdin when no file");
    eprintln!("is given, and writes the canonically formatted result to stdout.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tree    print the parsed node tree instead of formatting");
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut dump_tree = false;
    let mut file: Option<PathBuf> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--tree" => dump_tree = true,
            "-h" | "--help" => {
                print_usage(&args[0]);
                return Ok(());
            }
            _ if arg.starts_with('-') => {
                eprintln!("Error: unknown option '{arg}'");
                print_usage(&args[0]);
                process::exit(1);
            }
            _ => {
                if file.is_some() {
                    eprintln!("Error: more than one input file given");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                file = Some(PathBuf::from(arg));
            }
        }
    }

    let input = match &file {
        Some(path) => match io::read_file(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: failed to read '{}': {e}", path.display());
                process::exit(1);
            }
        },
        None => io::read_stdin()?,
    };

    let document = parse(&input);

    if dump_tree {
        print!("{}", treeviz::render(&document));
    } else {
        // The canonical text carries its own trailing newline.
        print!("{}", format(&document));
    }

    Ok(())
}
