//! # TUI Components
//!
//! Every piece of the FestiveMailer screen. Components receive core data as
//! props and borrow their persistent presentation state (focus, cursors,
//! scroll) from `TuiState`.
//!
//! ```text
//! components/
//! ├── title_bar.rs     (app name, tab, status)
//! ├── create_form.rs   (the Create screen, owns focus order)
//! ├── choice_row.rs    (festival / tone pickers)
//! ├── text_field/      (single and multi-line inputs)
//! └── success_view.rs  (confirmation + scrollable preview)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod choice_row;
pub mod create_form;
pub mod success_view;
pub mod text_field;
pub use create_form::{CreateForm, CreateFormEvent, CreateFormState};
pub use success_view::{SuccessEvent, SuccessView, SuccessViewState};
