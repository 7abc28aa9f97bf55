//! Events the viewer feeds into the navigator once per frame.

use shared::{domain::ControlKind, protocol::ConsoleCommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    ControlClicked(ControlKind),
    Console(ConsoleCommand),
}

impl ViewerEvent {
    pub fn source(&self) -> &'static str {
        match self {
            ViewerEvent::ControlClicked(_) => "button",
            ViewerEvent::Console(_) => "console",
        }
    }
}
