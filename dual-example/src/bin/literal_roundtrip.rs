//! Literal 往返示例
//!
//! 本示例展示了如何使用 dual-framework：
//! 1. 用一个字面量同时构造 parser 和 formatter
//! 2. 在输入文本的指定区间内解析
//! 3. 把解析得到的值重新格式化，检查往返一致性
//! 4. 先收窄为单一角色，再用 `+` 组合
//!
//! ```text
//! literal-roundtrip foo foobar
//! literal-roundtrip --skip-whitespace --start 2 let "  let x"
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser as _;
use dual_framework::{
    Formatter, Literal, Parser, ParserFormatter, Position, SkipNone, SkipWhitespace, Space,
};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Parser)]
#[command(name = "literal-roundtrip", about = "Parse a literal token and format it back")]
struct Cli {
    /// The literal token to recognize and emit
    literal: String,

    /// Text to parse
    input: String,

    /// Byte offset to start parsing at
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Exclusive byte offset to stop at (defaults to the end of the input)
    #[arg(long)]
    end: Option<usize>,

    /// Skip whitespace before the token
    #[arg(long)]
    skip_whitespace: bool,

    /// Also parse the token twice in a row, composed with `+`
    #[arg(long)]
    twice: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let space: &dyn Space = if cli.skip_whitespace {
        &SkipWhitespace
    } else {
        &SkipNone
    };
    let end = cli.end.unwrap_or(cli.input.len());
    let literal = Literal::new(cli.literal.as_str());

    let next = round_trip(&literal, &cli.input, cli.start, end, space)?;

    if cli.twice {
        // Narrow both halves before composing; the literal itself has no `+`.
        let twice = ParserFormatter::new(
            literal.as_parser() + literal.as_parser(),
            literal.as_formatter() + literal.as_formatter(),
        );
        let (value, after) = twice
            .parse(&cli.input, cli.start, end, space)
            .with_context(|| {
                format!(
                    "{:?} does not occur twice at {}",
                    cli.literal,
                    Position::locate(&cli.input, cli.start)
                )
            })?;
        let text = twice.format(&value)?;
        info!(consumed = after - cli.start, formatted = %text, "composed round trip");
    }

    println!("{}", &cli.input[next..end]);
    Ok(())
}

fn round_trip(
    literal: &Literal,
    input: &str,
    start: usize,
    end: usize,
    space: &dyn Space,
) -> Result<usize> {
    let (value, next) = literal
        .parse(input, start, end, space)
        .map_err(|error| {
            let at = Position::locate(input, error.position());
            anyhow::Error::new(error).context(format!("parse failed at {}", at))
        })?;
    info!(start, next, "parsed literal");

    let text = literal.format(&value).context("format failed")?;
    if text != literal.text() {
        bail!("round trip produced {:?}, expected {:?}", text, literal.text());
    }
    info!(formatted = %text, "formatted value");
    Ok(next)
}
