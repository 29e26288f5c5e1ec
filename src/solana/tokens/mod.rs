pub mod constants;
pub mod native;
pub mod spl;
pub mod transaction;
