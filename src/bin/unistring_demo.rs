//! `unistring_demo` - inspect segmentation, properties and folding
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin unistring_demo -- -g "か゚き゚"
//! cargo run --bin unistring_demo -- -W "//👨‍👨‍👦日本語だよ🍩"
//! cargo run --bin unistring_demo -- --word-prop U+0027
//! cargo run --bin unistring_demo -- --fold 20,40 --ansi "some long text"
//! ```

use std::ffi::OsString;
use std::io::{self, Read, Write};
use unistring::fold::{FoldOptions, columns_for, folded_lines};
use unistring::text::{Segment, get_sentences, get_words};
use unistring::unicode::utf16::{CodePointFormat, code_point_string, parse_code_point, to_char};
use unistring::unicode::{grapheme_break_prop, script_prop, sentence_break_prop, word_break_prop};
use unistring::{AmbiguousWidth, Error, Unistring};

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "unistring_demo - Unicode segmentation and width inspector

USAGE:
    unistring_demo [OPTIONS] [TEXT]

BOUNDARIES:
    -g, --grapheme <TEXT>       Print grapheme clusters
    -w, --word <TEXT>           Print words
    -W, --word-extended <TEXT>  Print words, joining same-script runs
    -s, --sentence <TEXT>       Print sentences

PROPERTIES (argument is a string or U+HHHH):
    --grapheme-prop <ARG>       Grapheme break property of the first character
    --word-prop <ARG>           Word break property
    --sentence-prop <ARG>       Sentence break property
    --script-prop <ARG>         Script property

WIDTH AND FOLDING (TEXT is read from stdin when omitted):
    --width                     Print the display width of TEXT
    --fold <COLUMNS>            Fold TEXT; COLUMNS is N or N,N,... per line
    --ansi                      Treat ANSI escapes as zero-width and carry them
    --char-ref                  Measure &#NNN; and &#xHHH; as their character
    --wide                      East Asian Ambiguous characters are two columns

    --verbose                   Log diagnostics to stderr
    -h, --help                  Print this help message and exit

EXAMPLES:
    unistring_demo -g 'de\u{301}licieux'
    unistring_demo --script-prop U+3042
    printf 'abc def ghi' | unistring_demo --fold 4
";

/// What to print.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Grapheme(String),
    Word(String),
    WordExtended(String),
    Sentence(String),
    GraphemeProp(u32),
    WordProp(u32),
    SentenceProp(u32),
    ScriptProp(u32),
    Width,
    Fold(Vec<usize>),
}

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub command: Option<Command>,
    pub text: Option<String>,
    pub ansi: bool,
    pub char_ref: bool,
    pub wide: bool,
    pub verbose: bool,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

/// Code point named by a property argument: `U+HHHH` or the first character.
fn property_code_point(arg: &str) -> Result<u32, Error> {
    let is_notation = arg.len() > 2
        && arg.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("u+"))
        && arg[2..].chars().all(|c| c.is_ascii_hexdigit());
    if is_notation {
        return parse_code_point(arg);
    }
    arg.chars()
        .next()
        .map(u32::from)
        .ok_or_else(|| Error::InvalidArgument("empty property argument".to_string()))
}

fn parse_columns(value: &str) -> Option<Vec<usize>> {
    let columns: Option<Vec<usize>> = value
        .split(',')
        .map(|part| part.trim().parse::<usize>().ok())
        .collect();
    columns.filter(|c| !c.is_empty())
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy().to_string();

            let mut value_for = |name: &str| match args.next() {
                Some(v) => Ok(v.to_string_lossy().to_string()),
                None => Err(ParseResult::Error(format!("{name} requires a value"))),
            };

            let command = match arg_str.as_str() {
                "-h" | "--help" => return ParseResult::Help,
                "--ansi" => {
                    config.ansi = true;
                    continue;
                }
                "--char-ref" => {
                    config.char_ref = true;
                    continue;
                }
                "--wide" => {
                    config.wide = true;
                    continue;
                }
                "--verbose" => {
                    config.verbose = true;
                    continue;
                }
                "--width" => Command::Width,

                "-g" | "--grapheme" | "-w" | "--word" | "-W" | "--word-extended" | "-s"
                | "--sentence" => {
                    let value = match value_for(&arg_str) {
                        Ok(v) => v,
                        Err(e) => return e,
                    };
                    match arg_str.as_str() {
                        "-g" | "--grapheme" => Command::Grapheme(value),
                        "-w" | "--word" => Command::Word(value),
                        "-W" | "--word-extended" => Command::WordExtended(value),
                        _ => Command::Sentence(value),
                    }
                }

                "--grapheme-prop" | "--word-prop" | "--sentence-prop" | "--script-prop" => {
                    let value = match value_for(&arg_str) {
                        Ok(v) => v,
                        Err(e) => return e,
                    };
                    let cp = match property_code_point(&value) {
                        Ok(cp) => cp,
                        Err(e) => return ParseResult::Error(format!("{arg_str}: {e}")),
                    };
                    match arg_str.as_str() {
                        "--grapheme-prop" => Command::GraphemeProp(cp),
                        "--word-prop" => Command::WordProp(cp),
                        "--sentence-prop" => Command::SentenceProp(cp),
                        _ => Command::ScriptProp(cp),
                    }
                }

                "--fold" => {
                    let value = match value_for("--fold") {
                        Ok(v) => v,
                        Err(e) => return e,
                    };
                    match parse_columns(&value) {
                        Some(columns) => Command::Fold(columns),
                        None => {
                            return ParseResult::Error(format!(
                                "Invalid --fold value: {value} (use N or N,N,...)"
                            ));
                        }
                    }
                }

                other => {
                    if other.starts_with('-') && other.len() > 1 {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    config.text = Some(other.to_string());
                    continue;
                }
            };
            config.command = Some(command);
        }

        ParseResult::Config(config)
    }

    fn fold_options(&self) -> FoldOptions {
        let options = FoldOptions::new()
            .ansi(self.ansi)
            .character_reference(self.char_ref);
        if self.wide {
            options.ambiguous_width(AmbiguousWidth::Wide)
        } else {
            options
        }
    }
}

// ============================================================================
// Output
// ============================================================================

fn print_segments<K: std::fmt::Debug>(
    out: &mut impl Write,
    segments: &[Segment<K>],
) -> io::Result<()> {
    for s in segments {
        writeln!(
            out,
            "{:>4} {:>4} {:>3} {:<20} {:?}",
            s.index,
            s.raw_index,
            s.length,
            format!("{:?}", s.kind),
            s.text
        )?;
    }
    Ok(())
}

fn print_property(
    out: &mut impl Write,
    what: &str,
    cp: u32,
    value: u8,
    name: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{what} property value for {} {:?} is {value} ({name})",
        code_point_string(cp, CodePointFormat::Unicode),
        to_char(cp)
    )
}

fn input_text(config: &Config) -> io::Result<String> {
    if let Some(text) = &config.text {
        return Ok(text.clone());
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn run(config: &Config, out: &mut impl Write) -> io::Result<()> {
    let Some(command) = &config.command else {
        write!(out, "{HELP_TEXT}")?;
        return Ok(());
    };

    match command {
        Command::Grapheme(text) => {
            let s = Unistring::new(text);
            for (i, cluster) in s.iter().enumerate() {
                writeln!(
                    out,
                    "{i:>4} {:>4} {:<24} {:?}",
                    cluster.raw_index(),
                    cluster.dump(),
                    cluster.to_string()
                )?;
            }
            writeln!(out, "length of UTF-16 code units: {}", s.raw_len())?;
            writeln!(out, " length of grapheme clusters: {}", s.len())?;
        }
        Command::Word(text) => print_segments(out, &get_words(text, false))?,
        Command::WordExtended(text) => print_segments(out, &get_words(text, true))?,
        Command::Sentence(text) => print_segments(out, &get_sentences(text))?,
        Command::GraphemeProp(cp) => {
            let p = grapheme_break_prop(*cp);
            print_property(out, "grapheme break", *cp, p as u8, p.name())?;
        }
        Command::WordProp(cp) => {
            let p = word_break_prop(*cp);
            print_property(out, "word break", *cp, p as u8, p.name())?;
        }
        Command::SentenceProp(cp) => {
            let p = sentence_break_prop(*cp);
            print_property(out, "sentence break", *cp, p as u8, p.name())?;
        }
        Command::ScriptProp(cp) => {
            let p = script_prop(*cp);
            print_property(out, "script", *cp, p.0, p.name())?;
        }
        Command::Width => {
            let text = input_text(config)?;
            writeln!(out, "{}", columns_for(&text, &config.fold_options()))?;
        }
        Command::Fold(columns) => {
            let text = input_text(config)?;
            let options = config.fold_options().column_list(columns.iter().copied());
            for line in folded_lines(&text, &options) {
                if line.ends_with('\n') {
                    write!(out, "{line}")?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
        }
    }
    Ok(())
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> io::Result<()> {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if config.verbose {
                tracing_subscriber::fmt()
                    .with_max_level(tracing::Level::DEBUG)
                    .with_writer(io::stderr)
                    .init();
            }
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run(&config, &mut out)
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<OsString> {
        strs.iter().map(|s| OsString::from(*s)).collect()
    }

    fn parse(strs: &[&str]) -> Config {
        match Config::from_args(args(strs)) {
            ParseResult::Config(c) => c,
            _ => panic!("Expected Config"),
        }
    }

    fn output(config: &Config) -> String {
        let mut buf = Vec::new();
        run(config, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = parse(&["unistring_demo"]);
        assert!(config.command.is_none());
        assert!(!config.ansi);
        assert!(output(&config).starts_with("unistring_demo"));
    }

    #[test]
    fn test_help_flag() {
        let result = Config::from_args(args(&["unistring_demo", "--help"]));
        assert!(matches!(result, ParseResult::Help));
    }

    #[test]
    fn test_grapheme_command() {
        let config = parse(&["unistring_demo", "-g", "e\u{301}x"]);
        assert_eq!(config.command, Some(Command::Grapheme("e\u{301}x".to_string())));
        let out = output(&config);
        assert!(out.contains("0065 × 0301"));
        assert!(out.contains("length of grapheme clusters: 2"));
    }

    #[test]
    fn test_property_argument_forms() {
        let config = parse(&["unistring_demo", "--script-prop", "U+3042"]);
        assert_eq!(config.command, Some(Command::ScriptProp(0x3042)));
        let config = parse(&["unistring_demo", "--word-prop", "あ"]);
        assert_eq!(config.command, Some(Command::WordProp(0x3042)));
        let out = output(&config);
        assert!(out.contains("U+3042"));
        assert!(out.contains("Hiragana"));
    }

    #[test]
    fn test_fold_command() {
        let config = parse(&["unistring_demo", "--fold", "4", "--ansi", "abc def"]);
        assert_eq!(config.command, Some(Command::Fold(vec![4])));
        assert!(config.ansi);
        assert_eq!(output(&config), "abc \ndef\n");
    }

    #[test]
    fn test_width_command() {
        let config = parse(&["unistring_demo", "--width", "あいう"]);
        assert_eq!(output(&config), "6\n");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Config::from_args(args(&["unistring_demo", "--fold"])),
            ParseResult::Error(_)
        ));
        assert!(matches!(
            Config::from_args(args(&["unistring_demo", "--fold", "x"])),
            ParseResult::Error(_)
        ));
        assert!(matches!(
            Config::from_args(args(&["unistring_demo", "--bogus"])),
            ParseResult::Error(_)
        ));
        assert!(matches!(
            Config::from_args(args(&["unistring_demo", "--script-prop", "U+110000"])),
            ParseResult::Error(_)
        ));
    }
}
