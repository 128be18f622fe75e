//! Host page boundary: the narrow interfaces the pipeline consumes

mod elements;
mod traits;

pub use elements::{StaticButton, StaticForm};
pub use traits::{
    ButtonSource, ConfirmPrompt, Control, FileSource, FormSource, SelectedFile, StatusDisplay,
    SuccessHandler,
};

#[cfg(test)]
pub use traits::{
    MockButtonSource, MockConfirmPrompt, MockControl, MockFileSource, MockFormSource,
    MockStatusDisplay, MockSuccessHandler,
};
