pub mod board;
pub mod mask;
pub mod resolver;
pub mod session;
pub mod tokenizer;

pub use board::Board;
pub use mask::MaskGlyphs;
pub use resolver::{FrenchPlural, Inflection, NoInflection};
pub use session::{Action, Command, Phase, Session};
