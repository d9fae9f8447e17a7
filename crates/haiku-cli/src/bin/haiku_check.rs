// haiku-check: Validate the 5-7-5 haiku structure of text.
//
// Reads text from FILE or stdin and checks that it forms a valid haiku:
// exactly three non-blank lines estimated at 5, 7 and 5 syllables.
// Exits 0 when the text is a valid haiku, 1 otherwise.
//
// Usage:
//   haiku-check [OPTIONS] [FILE]
//
// Options:
//   --markup     Flatten block markup to plain text before validating
//   --counts     Print per-line syllable counts before the verdict
//   -h, --help   Print help

use haiku_core::pattern::SYLLABLE_PATTERN;
use haiku_en::syllable::estimate_syllables;
use haiku_en::validator::{content_lines, validate_haiku};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if haiku_cli::wants_help(&args) {
        println!("haiku-check: Validate the 5-7-5 haiku structure of text.");
        println!();
        println!("Usage: haiku-check [OPTIONS] [FILE]");
        println!();
        println!("Reads text from FILE, or from stdin when no FILE is given.");
        println!("Exits 0 when the text is a valid haiku, 1 otherwise.");
        println!();
        println!("Options:");
        println!("  --markup     Flatten block markup to plain text before validating");
        println!("  --counts     Print per-line syllable counts before the verdict");
        println!("  -h, --help   Print this help");
        return;
    }

    let mut use_markup = false;
    let mut show_counts = false;
    let mut file: Option<String> = None;

    for arg in &args {
        match arg.as_str() {
            "--markup" => use_markup = true,
            "--counts" => show_counts = true,
            s if !s.starts_with('-') => file = Some(arg.clone()),
            _ => haiku_cli::fatal(&format!("unknown option: {arg}")),
        }
    }

    let input = haiku_cli::read_input(file.as_deref()).unwrap_or_else(|e| haiku_cli::fatal(&e));
    let text = if use_markup {
        haiku_en::markup::plain_text(&input)
    } else {
        input
    };

    if show_counts {
        for (index, line) in content_lines(&text).iter().enumerate() {
            let actual = estimate_syllables(line);
            match SYLLABLE_PATTERN.get(index) {
                Some(expected) => println!("{actual}/{expected}\t{line}"),
                None => println!("{actual}/-\t{line}"),
            }
        }
    }

    match validate_haiku(&text) {
        Ok(()) => println!("valid haiku"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
