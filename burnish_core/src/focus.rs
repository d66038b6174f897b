// Copyright 2026 the Burnish Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard focus containment for modal dialogs.
//!
//! The trap does not own the dialog's open/close lifecycle: something else
//! makes the dialog visible, and the host reports it through [`ModalState`].
//! While a dialog is open, [`transition`] maps a [`KeyCommand`] to a
//! [`TrapAction`] for the host to carry out.
//!
//! Focus targets are referred to by their position in the dialog's focusable
//! list, which the host recomputes from the document on every key press so
//! that the list tracks mutations inside the dialog.

/// Selector for elements that take part in Tab cycling inside a dialog.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Whether a dialog is currently open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ModalState {
    /// No visible dialog; every key passes through.
    #[default]
    Closed,
    /// A dialog is visible and owns Tab cycling.
    Open,
}

/// The keys the trap cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// `Escape`.
    Dismiss,
    /// `Tab`, with or without Shift.
    Tab {
        /// Shift was held.
        backwards: bool,
    },
    /// Anything else.
    Other,
}

impl KeyCommand {
    /// Classifies a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Escape" => Self::Dismiss,
            "Tab" => Self::Tab { backwards: shift },
            _ => Self::Other,
        }
    }
}

/// What the host should do in response to a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrapAction {
    /// Let the browser handle the key.
    PassThrough,
    /// Prevent the default and focus the focusable at this index.
    Wrap(usize),
    /// Hide the dialog, then focus the stored trigger if there is one.
    Dismiss {
        /// Whether a trigger reference was stored on the dialog.
        restore_trigger: bool,
    },
}

/// The dialog as seen by one key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ModalScope {
    /// Number of focusable descendants, freshly counted.
    pub focusable_len: usize,
    /// Index of the focused element in that list, if it is in it.
    pub active: Option<usize>,
    /// Whether the dialog carries a trigger reference.
    pub has_trigger: bool,
}

/// A state change plus the action that goes with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// State after the key is handled.
    pub state: ModalState,
    /// Side effect for the host.
    pub action: TrapAction,
}

/// Pure transition function for the focus trap.
#[must_use]
pub fn transition(state: ModalState, key: KeyCommand, scope: &ModalScope) -> Transition {
    let pass = Transition {
        state,
        action: TrapAction::PassThrough,
    };
    match (state, key) {
        (ModalState::Closed, _) | (_, KeyCommand::Other) => pass,
        (ModalState::Open, KeyCommand::Dismiss) => Transition {
            state: ModalState::Closed,
            action: TrapAction::Dismiss {
                restore_trigger: scope.has_trigger,
            },
        },
        (ModalState::Open, KeyCommand::Tab { backwards }) => {
            match wrap_target(scope.focusable_len, scope.active, backwards) {
                Some(idx) => Transition {
                    state,
                    action: TrapAction::Wrap(idx),
                },
                None => pass,
            }
        }
    }
}

/// Returns the index Tab should wrap to, or `None` to let it pass through.
///
/// Only the edges wrap: Shift+Tab on the first item goes to the last, Tab on
/// the last item goes to the first. An empty list never wraps.
#[must_use]
pub fn wrap_target(len: usize, active: Option<usize>, backwards: bool) -> Option<usize> {
    let last = len.checked_sub(1)?;
    match (active, backwards) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

/// A focusable list over arbitrary handles, for hosts that can compare
/// elements directly.
#[derive(Clone, Copy, Debug)]
pub struct FocusRing<'a, T> {
    items: &'a [T],
}

impl<'a, T: PartialEq> FocusRing<'a, T> {
    /// Wraps a freshly computed focusable list.
    #[must_use]
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Position of `active` in the list.
    #[must_use]
    pub fn position(&self, active: Option<&T>) -> Option<usize> {
        let active = active?;
        self.items.iter().position(|item| item == active)
    }

    /// The element Tab should move focus to, or `None` for native handling.
    #[must_use]
    pub fn on_tab(&self, active: Option<&T>, backwards: bool) -> Option<&'a T> {
        let idx = wrap_target(self.items.len(), self.position(active), backwards)?;
        self.items.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN_ABC: ModalScope = ModalScope {
        focusable_len: 3,
        active: None,
        has_trigger: true,
    };

    #[test]
    fn shift_tab_on_first_wraps_to_last() {
        let ring = FocusRing::new(&['A', 'B', 'C']);
        assert_eq!(ring.on_tab(Some(&'A'), true), Some(&'C'));
    }

    #[test]
    fn tab_on_last_wraps_to_first() {
        let ring = FocusRing::new(&['A', 'B', 'C']);
        assert_eq!(ring.on_tab(Some(&'C'), false), Some(&'A'));
    }

    #[test]
    fn interior_tabs_pass_through() {
        let ring = FocusRing::new(&['A', 'B', 'C']);
        assert_eq!(ring.on_tab(Some(&'A'), false), None);
        assert_eq!(ring.on_tab(Some(&'B'), false), None);
        assert_eq!(ring.on_tab(Some(&'B'), true), None);
        assert_eq!(ring.on_tab(Some(&'C'), true), None);
        assert_eq!(ring.on_tab(Some(&'Z'), false), None, "focus outside the dialog");
        assert_eq!(ring.on_tab(None, true), None);
    }

    #[test]
    fn empty_dialog_never_wraps() {
        let ring: FocusRing<'_, char> = FocusRing::new(&[]);
        assert_eq!(ring.on_tab(None, false), None);
        assert_eq!(ring.on_tab(Some(&'A'), true), None);

        let scope = ModalScope {
            focusable_len: 0,
            active: Some(0),
            has_trigger: false,
        };
        let t = transition(ModalState::Open, KeyCommand::Tab { backwards: true }, &scope);
        assert_eq!(t.action, TrapAction::PassThrough);
        assert_eq!(t.state, ModalState::Open);
    }

    #[test]
    fn single_focusable_wraps_onto_itself() {
        assert_eq!(wrap_target(1, Some(0), false), Some(0));
        assert_eq!(wrap_target(1, Some(0), true), Some(0));
    }

    #[test]
    fn escape_closes_and_restores_trigger() {
        let t = transition(ModalState::Open, KeyCommand::Dismiss, &OPEN_ABC);
        assert_eq!(t.state, ModalState::Closed);
        assert_eq!(
            t.action,
            TrapAction::Dismiss {
                restore_trigger: true
            }
        );

        let no_trigger = ModalScope {
            has_trigger: false,
            ..OPEN_ABC
        };
        let t = transition(ModalState::Open, KeyCommand::Dismiss, &no_trigger);
        assert_eq!(
            t.action,
            TrapAction::Dismiss {
                restore_trigger: false
            }
        );
    }

    #[test]
    fn closed_state_ignores_keys() {
        for key in [
            KeyCommand::Dismiss,
            KeyCommand::Tab { backwards: false },
            KeyCommand::Other,
        ] {
            let t = transition(ModalState::Closed, key, &OPEN_ABC);
            assert_eq!(t.state, ModalState::Closed);
            assert_eq!(t.action, TrapAction::PassThrough);
        }
    }

    #[test]
    fn shift_tab_transition_on_first_wraps_to_last() {
        let on_first = ModalScope {
            active: Some(0),
            ..OPEN_ABC
        };
        let t = transition(ModalState::Open, KeyCommand::Tab { backwards: true }, &on_first);
        assert_eq!(t.action, TrapAction::Wrap(2));
        assert_eq!(t.state, ModalState::Open);
    }

    #[test]
    fn ring_position_feeds_transition() {
        let items = ['A', 'B', 'C'];
        let ring = FocusRing::new(&items);
        let scope = ModalScope {
            focusable_len: items.len(),
            active: ring.position(Some(&'A')),
            has_trigger: false,
        };
        let t = transition(ModalState::Open, KeyCommand::from_key("Tab", true), &scope);
        assert_eq!(t.action, TrapAction::Wrap(2));
        assert_eq!(items[2], 'C');
    }

    #[test]
    fn tab_transition_uses_index_wrap() {
        let on_last = ModalScope {
            active: Some(2),
            ..OPEN_ABC
        };
        let t = transition(ModalState::Open, KeyCommand::Tab { backwards: false }, &on_last);
        assert_eq!(t.action, TrapAction::Wrap(0));
    }

    #[test]
    fn key_classification() {
        assert_eq!(KeyCommand::from_key("Escape", false), KeyCommand::Dismiss);
        assert_eq!(
            KeyCommand::from_key("Tab", true),
            KeyCommand::Tab { backwards: true }
        );
        assert_eq!(KeyCommand::from_key("Enter", false), KeyCommand::Other);
    }
}
