pub mod combinators;
pub mod error;
pub mod literal;
pub mod traits;
pub mod view;

pub use common_framework::{Position, SkipChars, SkipNone, SkipWhitespace, Space};
pub use combinators::{Or, Then};
pub use error::{check_bounds, Expected, ParseError};
pub use literal::Literal;
pub use traits::Parser;
pub use view::ParserView;
