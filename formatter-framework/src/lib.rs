pub mod combinators;
pub mod error;
pub mod literal;
pub mod traits;
pub mod view;

pub use combinators::{Or, Then};
pub use error::FormatError;
pub use literal::Literal;
pub use traits::Formatter;
pub use view::FormatterView;
