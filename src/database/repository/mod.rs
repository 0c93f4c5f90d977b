pub mod card;
pub mod char_default_value;
pub mod characteristic;
pub mod node;
pub mod node_type;
pub mod size;

pub use card::{CardRepository, PgCardRepository};
pub use char_default_value::{CharDefaultValueRepository, PgCharDefaultValueRepository};
pub use characteristic::{CharacteristicRepository, PgCharacteristicRepository};
pub use node::{NodeRepository, PgNodeRepository};
pub use node_type::{NodeTypeRepository, PgNodeTypeRepository};
pub use size::{PgSizeRepository, SizeRepository};
