//! Keybinding table consumed by the editor before the text widget sees input.

use eframe::egui::{Key, KeyboardShortcut, Modifiers};
use std::fmt;

/// Editor commands reachable from the keymap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Raise the host's typecheck-request flag.
    RequestTypecheck,
}

/// Chord reserved for [`Command::RequestTypecheck`].
pub const TYPECHECK_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::SHIFT, Key::Enter);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub shortcut: KeyboardShortcut,
    pub command: Command,
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {:?}",
            chord_label(&self.shortcut),
            self.command
        )
    }
}

/// Ordered list of bindings; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

impl Keymap {
    pub fn of(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    /// The playground keymap: `Shift-Enter` requests a typecheck, nothing else.
    pub fn playground() -> Self {
        Self::of(vec![KeyBinding {
            shortcut: TYPECHECK_SHORTCUT,
            command: Command::RequestTypecheck,
        }])
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Finds the command bound to `key` under `modifiers`.
    ///
    /// Modifiers must match exactly: `Shift-Enter` fires neither for a bare
    /// `Enter` nor for `Alt-Shift-Enter`. The widget's key scan and
    /// [`super::PlaygroundEditor::handle_chord`] both go through here.
    pub fn lookup(&self, modifiers: Modifiers, key: Key) -> Option<Command> {
        self.bindings
            .iter()
            .find(|binding| {
                binding.shortcut.logical_key == key
                    && modifiers.matches_exact(binding.shortcut.modifiers)
            })
            .map(|binding| binding.command)
    }
}

/// Human-readable chord such as `Shift-Enter`.
pub fn chord_label(shortcut: &KeyboardShortcut) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let modifiers = shortcut.modifiers;
    if modifiers.ctrl || modifiers.command {
        parts.push("Mod");
    }
    if modifiers.alt {
        parts.push("Alt");
    }
    if modifiers.shift {
        parts.push("Shift");
    }
    parts.push(shortcut.logical_key.name());
    parts.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playground_keymap_has_single_typecheck_binding() {
        let keymap = Keymap::playground();
        assert_eq!(keymap.bindings().len(), 1);
        assert_eq!(keymap.bindings()[0].to_string(), "Shift-Enter -> RequestTypecheck");
    }

    #[test]
    fn lookup_requires_shift() {
        let keymap = Keymap::playground();
        assert_eq!(
            keymap.lookup(Modifiers::SHIFT, Key::Enter),
            Some(Command::RequestTypecheck)
        );
        assert_eq!(keymap.lookup(Modifiers::NONE, Key::Enter), None);
        assert_eq!(keymap.lookup(Modifiers::SHIFT, Key::Tab), None);
    }

    #[test]
    fn lookup_rejects_shift_enter_with_extra_modifiers() {
        let keymap = Keymap::playground();
        let alt_shift = Modifiers::ALT | Modifiers::SHIFT;
        let ctrl_shift = Modifiers {
            ctrl: true,
            command: true,
            shift: true,
            ..Modifiers::NONE
        };
        assert_eq!(keymap.lookup(alt_shift, Key::Enter), None);
        assert_eq!(keymap.lookup(ctrl_shift, Key::Enter), None);
        assert_eq!(keymap.lookup(Modifiers::COMMAND | Modifiers::SHIFT, Key::Enter), None);
    }

    #[test]
    fn empty_keymap_passes_everything_through() {
        assert_eq!(Keymap::default().lookup(Modifiers::SHIFT, Key::Enter), None);
    }
}
