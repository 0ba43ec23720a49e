//! Common Framework
//!
//! 提供 parser-framework 和 formatter-framework 之间的共同组件。

pub mod position;
pub mod space;

pub use position::Position;
pub use space::{SkipChars, SkipNone, SkipWhitespace, Space};
