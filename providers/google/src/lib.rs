pub mod response;
pub mod translator;

pub use response::parse_response;
pub use translator::GoogleTranslator;
