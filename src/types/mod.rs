mod checkbox;
mod custom;
mod multi_select;
mod number;
mod select;
mod text;
mod textarea;

pub use checkbox::CheckboxField;
pub use custom::CustomField;
pub use multi_select::MultiSelectField;
pub use number::{NumberField, NumberOptions};
pub use select::SelectField;
pub use text::{TextField, TextOptions};
pub use textarea::{TextareaField, TextareaOptions};
