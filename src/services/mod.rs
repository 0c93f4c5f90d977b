pub mod card_mapper;
pub mod card_service;
pub mod char_default_value_service;
pub mod characteristic_service;
pub mod error;
pub mod node_service;
pub mod node_type_service;
pub mod order_service;
pub mod size_service;

pub use card_mapper::{map_card_rows, MapError};
pub use card_service::CardService;
pub use char_default_value_service::CharDefaultValueService;
pub use characteristic_service::CharacteristicService;
pub use error::ServiceError;
pub use node_service::NodeService;
pub use node_type_service::NodeTypeService;
pub use order_service::{OrderReceipt, OrderService};
pub use size_service::SizeService;
