pub mod draft;
pub mod flight;
pub mod record;
pub mod response;
