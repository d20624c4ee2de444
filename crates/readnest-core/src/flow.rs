//! # Store Flow
//!
//! The explicit screen state machine for a storefront session.
//!
//! The original storefront wired screen changes directly into button
//! callbacks. Here the transitions are a plain data table, decoupled from
//! any presentation toolkit, so the flow can be tested without a display.
//!
//! ## Screen Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Screen Flow                               │
//! │                                                                         │
//! │   ┌─────────┐  enter   ┌──────────┐  view cart   ┌──────────┐          │
//! │   │ Welcome │ ───────► │ Browsing │ ───────────► │ CartView │          │
//! │   └─────────┘          └──────────┘ ◄─────────── └──────────┘          │
//! │                          │      ▲       back        │                  │
//! │                 checkout │      │ cancel             │ checkout        │
//! │                          ▼      │                    │                  │
//! │                        ┌──────────┐ ◄───────────────┘                  │
//! │                        │ Checkout │                                     │
//! │                        └──────────┘                                     │
//! │                          │ confirm                                      │
//! │                          ▼                                              │
//! │                        ┌───────────┐  continue shopping                 │
//! │                        │ Confirmed │ ────────────► (back to Browsing)   │
//! │                        └───────────┘                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Screen
// =============================================================================

/// The screens a storefront session moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Landing screen shown before the store is entered.
    Welcome,
    /// Catalog listing; purchases happen here.
    Browsing,
    /// Read-only view of the cart contents and running total.
    CartView,
    /// Order summary awaiting confirmation or cancellation.
    Checkout,
    /// Purchase completed; the cart has been cleared.
    Confirmed,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Welcome => "Welcome",
            Screen::Browsing => "Browsing",
            Screen::CartView => "CartView",
            Screen::Checkout => "Checkout",
            Screen::Confirmed => "Confirmed",
        };
        f.write_str(name)
    }
}

impl Screen {
    /// Whether the flow may move from `self` to `to`.
    ///
    /// Staying on the current screen is never a transition; re-entering the
    /// same screen is rejected along with every other unlisted pair.
    pub fn can_transition_to(self, to: Screen) -> bool {
        use Screen::*;
        matches!(
            (self, to),
            (Welcome, Browsing)
                | (Browsing, CartView)
                | (CartView, Browsing)
                | (Browsing, Checkout)
                | (CartView, Checkout)
                | (Checkout, Browsing)
                | (Checkout, Confirmed)
                | (Confirmed, Browsing)
        )
    }
}

// =============================================================================
// Store Flow
// =============================================================================

/// Tracks the current screen of a session and enforces legal transitions.
///
/// ## Usage
/// ```rust
/// use readnest_core::flow::{Screen, StoreFlow};
///
/// let mut flow = StoreFlow::new();
/// assert_eq!(flow.screen(), Screen::Welcome);
///
/// flow.transition_to(Screen::Browsing).unwrap();
/// assert!(flow.transition_to(Screen::Confirmed).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreFlow {
    screen: Screen,
}

impl StoreFlow {
    /// Starts a session on the welcome screen.
    pub fn new() -> Self {
        StoreFlow {
            screen: Screen::Welcome,
        }
    }

    /// The screen the session is currently on.
    #[inline]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Moves to `to` if the transition table allows it.
    ///
    /// On success returns the new screen; on failure the flow is unchanged
    /// and the caller receives [`CoreError::InvalidTransition`].
    pub fn transition_to(&mut self, to: Screen) -> CoreResult<Screen> {
        if !self.screen.can_transition_to(to) {
            return Err(CoreError::InvalidTransition {
                from: self.screen,
                to,
            });
        }

        debug!(from = %self.screen, to = %to, "screen transition");
        self.screen = to;
        Ok(self.screen)
    }
}

impl Default for StoreFlow {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Screen; 5] = [
        Screen::Welcome,
        Screen::Browsing,
        Screen::CartView,
        Screen::Checkout,
        Screen::Confirmed,
    ];

    #[test]
    fn test_starts_on_welcome() {
        let flow = StoreFlow::new();
        assert_eq!(flow.screen(), Screen::Welcome);
    }

    #[test]
    fn test_full_purchase_path() {
        let mut flow = StoreFlow::new();
        flow.transition_to(Screen::Browsing).unwrap();
        flow.transition_to(Screen::CartView).unwrap();
        flow.transition_to(Screen::Checkout).unwrap();
        flow.transition_to(Screen::Confirmed).unwrap();
        flow.transition_to(Screen::Browsing).unwrap();
        assert_eq!(flow.screen(), Screen::Browsing);
    }

    #[test]
    fn test_checkout_cancel_returns_to_browsing() {
        let mut flow = StoreFlow::new();
        flow.transition_to(Screen::Browsing).unwrap();
        flow.transition_to(Screen::Checkout).unwrap();
        flow.transition_to(Screen::Browsing).unwrap();
        assert_eq!(flow.screen(), Screen::Browsing);
    }

    #[test]
    fn test_every_pair_matches_the_transition_table() {
        use Screen::*;
        let allowed = [
            (Welcome, Browsing),
            (Browsing, CartView),
            (CartView, Browsing),
            (Browsing, Checkout),
            (CartView, Checkout),
            (Checkout, Browsing),
            (Checkout, Confirmed),
            (Confirmed, Browsing),
        ];

        // All 25 pairs: the listed ones succeed, every other pair is an
        // InvalidTransition that leaves the flow where it was.
        for from in ALL {
            for to in ALL {
                let mut flow = StoreFlow { screen: from };
                let result = flow.transition_to(to);
                if allowed.contains(&(from, to)) {
                    assert_eq!(result.unwrap(), to, "{from} -> {to}");
                    assert_eq!(flow.screen(), to);
                } else {
                    let err = result.unwrap_err();
                    assert!(
                        matches!(err, CoreError::InvalidTransition { from: f, to: t }
                            if f == from && t == to),
                        "{from} -> {to}"
                    );
                    assert_eq!(flow.screen(), from);
                }
            }
        }
    }

    #[test]
    fn test_confirmed_only_reachable_from_checkout() {
        for from in ALL {
            let allowed = from.can_transition_to(Screen::Confirmed);
            assert_eq!(allowed, from == Screen::Checkout, "from {from}");
        }
    }

    #[test]
    fn test_invalid_transition_leaves_flow_unchanged() {
        let mut flow = StoreFlow::new();
        let err = flow.transition_to(Screen::Checkout).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTransition {
                from: Screen::Welcome,
                to: Screen::Checkout
            }
        ));
        assert_eq!(flow.screen(), Screen::Welcome);
    }

    #[test]
    fn test_self_transitions_rejected() {
        for screen in ALL {
            assert!(!screen.can_transition_to(screen), "{screen} to itself");
        }
    }
}
