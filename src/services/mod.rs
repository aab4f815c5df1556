pub mod dates;
pub mod ordering;
pub mod placeholder;
pub mod reveal;
pub mod rich_text;
pub mod seo;

pub use placeholder::Placeholder;
pub use reveal::Reveal;
pub use rich_text::RichText;
pub use seo::PageMeta;
