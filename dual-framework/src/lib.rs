//! Dual Framework
//!
//! 把一个 parser 和一个 formatter 组合成同时满足两种契约的对象。
//!
//! A [`ParserFormatter`] owns one parser and one formatter and forwards each
//! contract to the matching half. It deliberately implements none of the
//! composition operators: `+` and `|` mean different things to parsers and
//! formatters, so a dual-role value has to be narrowed with
//! [`ParserFormatter::as_parser`], [`ParserFormatter::as_formatter`] or
//! [`ParserFormatter::split`] before it can be composed.

pub mod adapter;
pub mod contract;
pub mod literal;

pub use adapter::{DynParserFormatter, ParserFormatter};
pub use common_framework::{Position, SkipChars, SkipNone, SkipWhitespace, Space};
pub use contract::{
    Candidate, Capability, Contract, ContractValidator, ContractViolation, SharedFormatter,
    SharedParser,
};
pub use formatter_framework::{FormatError, Formatter, FormatterView};
pub use literal::Literal;
pub use parser_framework::{ParseError, Parser, ParserView};
