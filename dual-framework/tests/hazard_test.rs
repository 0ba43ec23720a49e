//! 组合运算符歧义测试
//!
//! Dual-role values must be narrowed before `+` or `|` can touch them. These
//! checks are resolved at compile time.

use dual_framework::{Formatter, FormatterView, Literal, Parser, ParserFormatter, ParserView};
use static_assertions::{assert_impl_all, assert_not_impl_any};
use std::ops::{Add, BitOr};

type LiteralParser = parser_framework::Literal;
type LiteralFormatter = formatter_framework::Literal;
type LiteralAdapter = ParserFormatter<LiteralParser, LiteralFormatter>;

// Dual-role values satisfy both contracts.
assert_impl_all!(Literal: Parser, Formatter, Clone, Send, Sync);
assert_impl_all!(LiteralAdapter: Parser, Formatter, Send, Sync);

// ...but none of the composition operators, on either side of the operator.
assert_not_impl_any!(
    Literal: Add<Literal>,
    BitOr<Literal>,
    Add<ParserView<LiteralParser>>,
    BitOr<ParserView<LiteralParser>>,
    Add<FormatterView<LiteralFormatter>>,
    BitOr<FormatterView<LiteralFormatter>>
);
assert_not_impl_any!(
    LiteralAdapter: Add<ParserView<LiteralParser>>,
    BitOr<ParserView<LiteralParser>>,
    Add<FormatterView<LiteralFormatter>>,
    BitOr<FormatterView<LiteralFormatter>>
);
assert_not_impl_any!(
    ParserView<LiteralParser>: Add<Literal>,
    BitOr<Literal>,
    Add<LiteralAdapter>,
    BitOr<LiteralAdapter>
);
assert_not_impl_any!(
    FormatterView<LiteralFormatter>: Add<Literal>,
    BitOr<Literal>,
    Add<LiteralAdapter>,
    BitOr<LiteralAdapter>
);

// Single-role views compose, and each exposes only its own contract.
assert_impl_all!(
    ParserView<LiteralParser>: Parser,
    Add<ParserView<LiteralParser>>,
    BitOr<ParserView<LiteralParser>>
);
assert_impl_all!(
    FormatterView<LiteralFormatter>: Formatter,
    Add<FormatterView<LiteralFormatter>>,
    BitOr<FormatterView<LiteralFormatter>>
);
assert_not_impl_any!(ParserView<Literal>: Formatter);
assert_not_impl_any!(FormatterView<Literal>: Parser);

#[test]
fn test_narrowing_a_dual_role_value() {
    let literal = Literal::new("x");
    let parser = ParserView::new(literal.clone()) + ParserView::new(literal.clone());
    let formatter = FormatterView::new(literal.clone()) | FormatterView::new(literal);
    assert_eq!(
        parser.parse("xx", 0, 2, &dual_framework::SkipNone),
        Ok((((), ()), 2))
    );
    assert_eq!(formatter.format(&()), Ok("x".to_string()));
}
