// haiku-strip: Flatten block markup to plain text.
//
// Reads markup from FILE or stdin and prints the flattened plain text,
// one line per block-level element. Useful for previewing exactly what
// haiku-check --markup will validate.
//
// Usage:
//   haiku-strip [FILE]
//
// Options:
//   -h, --help   Print help

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if haiku_cli::wants_help(&args) {
        println!("haiku-strip: Flatten block markup to plain text.");
        println!();
        println!("Usage: haiku-strip [FILE]");
        println!();
        println!("Reads markup from FILE, or from stdin when no FILE is given.");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let file = args.iter().find(|a| !a.starts_with('-')).cloned();
    let input = haiku_cli::read_input(file.as_deref()).unwrap_or_else(|e| haiku_cli::fatal(&e));

    println!("{}", haiku_en::markup::plain_text(&input));
}
