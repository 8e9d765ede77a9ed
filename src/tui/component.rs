use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen that knows how to draw itself.
///
/// Props arrive as struct fields; persistent state (cursor, scroll offset)
/// is borrowed from `TuiState` for the frame and written back during render.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so components can update borrowed presentation
    /// state, e.g. scroll offsets that follow the cursor.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
