use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;

/// Number of pages the presentation ships with.
pub const TOTAL_PAGES: u32 = 2;

macro_rules! page_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

page_newtype!(PageNumber);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Validates a raw request against `1..=total_pages`.
    pub fn checked(requested: i64, total_pages: u32) -> Result<Self, NavigationError> {
        if requested >= 1 && requested <= i64::from(total_pages) {
            Ok(Self(requested as u32))
        } else {
            Err(NavigationError::InvalidPageRequest {
                requested,
                total_pages,
            })
        }
    }

    pub fn offset(self, delta: i64) -> i64 {
        i64::from(self.0) + delta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Previous,
    Next,
}

impl ControlKind {
    pub const ALL: [ControlKind; 2] = [ControlKind::Previous, ControlKind::Next];

    /// Whether the control has nowhere to go from `current`.
    pub fn is_at_boundary(self, current: PageNumber, total_pages: u32) -> bool {
        match self {
            ControlKind::Previous => current == PageNumber::FIRST,
            ControlKind::Next => current.0 == total_pages,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorSnapshot {
    pub current_page: PageNumber,
    pub total_pages: u32,
    pub is_transitioning: bool,
}

impl fmt::Display for NavigatorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {} of {} (transition in progress: {})",
            self.current_page, self.total_pages, self.is_transitioning
        )
    }
}
