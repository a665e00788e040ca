// validators crate

mod assets;
mod fields;
mod identity;
mod location;
mod profile;

pub use assets::check_assets;
pub use fields::{present_required_keys, REQUIRED_KEYS};
pub use identity::check_unique_id;
pub use location::check_location;
pub use profile::{check_description, check_name};
