/// Use cases module containing application business logic orchestration
mod add_laptop;
mod authorize_admin;
mod list_top_picks;
mod load_laptop;

pub use add_laptop::AddLaptopUseCase;
pub use authorize_admin::{AuthorizeAdminUseCase, DEFAULT_ROLES_TABLE};
pub use list_top_picks::{ListTopPicksUseCase, DEFAULT_TOP_PICKS_LIMIT};
pub use load_laptop::{LoadLaptopUseCase, RootFetchError};
