pub mod browser;
pub mod config;
pub mod element;
pub mod engine;
pub mod error;
pub mod extract;
pub mod field;
pub mod interact;
pub mod page;
pub mod value;

pub use browser::Browser;
pub use config::{BrowserConfig, FillConfig};
pub use engine::FillerEngine;
pub use error::{Error, Result};
pub use extract::{ExtractedValue, FieldOption, OtherSlot, RowOptions};
pub use field::FieldType;
pub use interact::{Handle, Interactive};
pub use page::Page;
pub use value::{ChoiceSelection, FillValue, GridSelection, RowSelection};
