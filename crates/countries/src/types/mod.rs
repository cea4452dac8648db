mod code;
mod country;
mod selection;

pub use code::CountryCode;
pub use country::{ALPHA2_FIELD, CountryField, CountryRecord, NAME_FIELD};
pub use selection::{Selection, SelectionSet};
