pub mod card;
pub mod char_default_value;
pub mod characteristic;
pub mod node;
pub mod node_type;
pub mod paginate;
pub mod size;

pub use card::{Card, CardRow, CharacteristicEntry};
pub use char_default_value::CharDefaultValue;
pub use characteristic::{Characteristic, CharacteristicFilter, CharacteristicFilterRow};
pub use node::Node;
pub use node_type::NodeType;
pub use paginate::Paginate;
pub use size::Size;
