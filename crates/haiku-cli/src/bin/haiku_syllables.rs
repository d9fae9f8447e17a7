// haiku-syllables: Estimate syllable counts for lines of text.
//
// If LINE arguments are given, counts each argument. Otherwise reads lines
// from stdin and prints "count<TAB>line" for each non-blank line.
//
// Usage:
//   haiku-syllables [LINE...]
//
// Options:
//   -h, --help   Print help

use std::io::{self, BufRead, Write};

use haiku_en::syllable::estimate_syllables;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if haiku_cli::wants_help(&args) {
        println!("haiku-syllables: Estimate syllable counts for lines of text.");
        println!();
        println!("Usage: haiku-syllables [LINE...]");
        println!();
        println!("If LINE arguments are given, counts each argument.");
        println!("Otherwise reads lines from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let lines: Vec<String> = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .collect();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let count_line = |line: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let _ = writeln!(out, "{}\t{}", estimate_syllables(line), line);
    };

    if lines.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            count_line(line, &mut out);
        }
    } else {
        for line in &lines {
            count_line(line, &mut out);
        }
    }
}
