#[cfg(feature = "cli")]
use std::io::Write;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "prim", version)]
#[command(about = "Stream the prime numbers up to a bound, one per separator")]
struct Cli {
    /// Upper bound, inclusive
    max: u64,

    /// Separator printed after each prime; understands the \n, \t and
    /// \\ escapes
    #[arg(short, long, default_value = "\\n")]
    separator: String,
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let separator = decode_separator(&cli.separator);

    let sieve = prim::Sieve::new().with_observer(|message: &str| eprintln!("prim: {message}"));
    let stream = sieve.stream(cli.max).map_err(|e| e.to_string())?;

    let stdout = std::io::stdout().lock();
    let mut out = std::io::BufWriter::new(stdout);
    for prime in stream {
        write!(out, "{prime}{separator}")?;
    }
    out.flush()?;

    Ok(())
}

/// Decode the `\n`, `\t` and `\\` escapes in a separator argument.
/// Unknown escapes warn and are dropped.
#[cfg(feature = "cli")]
fn decode_separator(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => eprintln!("warning -- unknown escape character '{other}'"),
            None => {}
        }
    }
    out
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example prim_cli -- MAX");
    std::process::exit(1);
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::decode_separator;

    #[test]
    fn test_decode_separator() {
        assert_eq!(decode_separator("\\n"), "\n");
        assert_eq!(decode_separator(", "), ", ");
        assert_eq!(decode_separator("a\\tb"), "a\tb");
        assert_eq!(decode_separator("\\\\n"), "\\n");
        // Unknown escape is dropped with a warning
        assert_eq!(decode_separator("\\x-"), "-");
    }
}
