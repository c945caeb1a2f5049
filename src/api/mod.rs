pub mod category_handlers;
pub mod forms;
pub mod handlers;
pub mod instance_handlers;
pub mod item_handlers;
pub mod order_handlers;
pub mod routes;

pub use category_handlers::*;
pub use handlers::*;
pub use instance_handlers::*;
pub use item_handlers::*;
pub use order_handlers::*;
pub use routes::*;
