use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use mipshex::{BatchEntry, Direction, TranslationPair};
use tracing_subscriber::EnvFilter;

/// Translate between RV32I mnemonics (`add $t1 $t2 $t3`) and hex machine words (`01c38333`).
///
/// Each instruction is translated in whichever direction it's valid for,
/// unless a direction is forced.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Instructions to translate, one per argument. Read from stdin, one per line, if empty.
    instructions: Vec<String>,

    /// Only assemble, treating every line as an instruction.
    #[arg(long, conflicts_with = "to_mips")]
    to_hex: bool,

    /// Only disassemble, treating every line as a hex word.
    #[arg(long)]
    to_mips: bool,

    /// Print `mnemonic<TAB>hex` for every line instead of just the translation.
    #[arg(long, conflicts_with = "image")]
    pairs: bool,

    /// Print only the hex words, one per line.
    #[arg(long)]
    image: bool,
}

impl Args {
    fn direction(&self) -> Option<Direction> {
        match (self.to_hex, self.to_mips) {
            (true, _) => Some(Direction::MipsToHex),
            (_, true) => Some(Direction::HexToMips),
            _ => None,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let input = match args.instructions.is_empty() {
        true => match io::read_to_string(io::stdin()) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("error: failed to read stdin: {e}");
                return ExitCode::FAILURE;
            }
        },
        false => args.instructions.join("\n"),
    };

    let entries = mipshex::translate_batch(&input, args.direction());

    match report(&args, &entries, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Writes the translations to `out` and the failures to `err`, returns whether every line succeeded.
fn report(
    args: &Args,
    entries: &[BatchEntry],
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut translated: Vec<TranslationPair> = Vec::with_capacity(entries.len());
    let mut ok = true;

    for entry in entries {
        let pair = match &entry.result {
            Ok(pair) => pair,
            Err(e) => {
                ok = false;
                writeln!(err, "line {}: {e}", entry.line)?;
                continue;
            }
        };

        match (args.pairs, args.image) {
            (true, _) => writeln!(out, "{pair}")?,
            (_, true) => translated.push(pair.clone()),
            _ => writeln!(out, "{}", pair.output(entry.direction))?,
        }
    }

    if args.image {
        out.write_all(mipshex::memory_image(&translated).as_bytes())?;
    }

    out.flush()?;

    Ok(ok)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use expect_test::expect;
    use mipshex::Direction;

    use super::Args;

    fn run(args: &[&str], input: &str) -> (bool, String, String) {
        let args = Args::parse_from(std::iter::once("mipshex").chain(args.iter().copied()));
        let entries = mipshex::translate_batch(input, args.direction());

        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = super::report(&args, &entries, &mut out, &mut err).unwrap();

        (ok, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn default_output_per_direction() {
        let (ok, out, err) = run(&[], "add $t1 $t2 $t3\n00A38313\n");

        assert!(ok);
        assert_eq!(err, "");
        expect![[r#"
            01c38333
            addi $t1 $t2 10
        "#]]
        .assert_eq(&out);
    }

    #[test]
    fn pairs() {
        let (ok, out, err) = run(&["--pairs"], "add $t1 $t2 $t3\nbogus\n0003a303");

        assert!(!ok);
        expect![[r#"
            add $t1 $t2 $t3	01c38333
            lw $t1 0($t2)	0003a303
        "#]]
        .assert_eq(&out);
        expect![[r#"
            line 2: Unknown instruction `bogus`
        "#]]
        .assert_eq(&err);
    }

    #[test]
    fn image_skips_failed_lines() {
        let (ok, out, err) = run(&["--image"], "add $t1 $t2 $t3\nadd $t1\n00a38313");

        assert!(!ok);
        assert_eq!(out, "01c38333\n00a38313\n");
        assert_eq!(err, "line 2: Expected 3 argument(s) for `add`, found `1`\n");
    }

    #[test]
    fn forced_direction() {
        let parse = |args: &[&str]| {
            Args::try_parse_from(std::iter::once("mipshex").chain(args.iter().copied()))
                .map(|args| args.direction())
        };

        assert_eq!(parse(&[]).ok(), Some(None));
        assert_eq!(parse(&["--to-hex"]).ok(), Some(Some(Direction::MipsToHex)));
        assert_eq!(parse(&["--to-mips"]).ok(), Some(Some(Direction::HexToMips)));
        assert!(parse(&["--to-hex", "--to-mips"]).is_err());
        assert!(parse(&["--pairs", "--image"]).is_err());

        // forced to hex, a word is read as a mnemonic.
        let (ok, out, err) = run(&["--to-hex"], "00a38313");
        assert!(!ok);
        assert_eq!(out, "");
        assert_eq!(err, "line 1: Unknown instruction `00a38313`\n");

        let (ok, out, _) = run(&["--to-mips"], "00a38313");
        assert!(ok);
        assert_eq!(out, "addi $t1 $t2 10\n");
    }
}
