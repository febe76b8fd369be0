pub mod layout;
pub mod node;
pub mod parser;
pub mod splitter;
pub mod table;

pub use layout::Layout;
pub use node::{Mapping, Node, Scalar};
pub use parser::parse_front_matter;
pub use splitter::{split, Split, DELIMITER};
pub use table::render_table;
