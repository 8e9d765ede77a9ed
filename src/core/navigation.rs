//! # Navigation
//!
//! Two screens and the transitions between them.
//!
//! ```text
//!   Create ───── Sent ─────▶ Success ◀─┐
//!     ▲                        │   │    │ Sent
//!     │                        │   └────┘
//!     └── Reset | BackToCreate ┘
//! ```
//!
//! Reset and BackToCreate land on the same screen; what happens to the form
//! is the reducer's business (see `action.rs`).

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Create,
    Success,
}

/// Navigation triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// The agent accepted the request.
    Sent,
    /// "Send Another Message" or "Reset Form".
    Reset,
    /// The "Create Message" tab.
    BackToCreate,
}

impl Screen {
    pub fn next(self, nav: Nav) -> Screen {
        match (self, nav) {
            (Screen::Create, Nav::Sent) => Screen::Success,
            (Screen::Success, Nav::Sent) => Screen::Success,
            (Screen::Create, Nav::Reset) => Screen::Create,
            (Screen::Success, Nav::Reset) => Screen::Create,
            (Screen::Create, Nav::BackToCreate) => Screen::Create,
            (Screen::Success, Nav::BackToCreate) => Screen::Create,
        }
    }
}
