//! Integration tests for the keymap system

use super::*;

/// Bundled sample configuration
const SAMPLE_SXHKDRC: &str = include_str!("../../samples/sxhkdrc");

fn rows(keybinds: &Keybinds) -> Vec<(&str, &str, &str, &str)> {
    keybinds
        .iter()
        .map(|b| {
            (
                b.category.as_str(),
                b.description.as_str(),
                b.keystroke.as_str(),
                b.command.as_str(),
            )
        })
        .collect()
}

#[test]
fn test_sample_parses() {
    let keybinds = parse_keybinds(SAMPLE_SXHKDRC).expect("Bundled sxhkdrc should parse");
    assert_eq!(keybinds.len(), 42);
}

#[test]
fn test_sample_categories() {
    let keybinds = parse_keybinds(SAMPLE_SXHKDRC).unwrap();
    assert_eq!(
        keybinds.categories(),
        vec![
            "Applications",
            "bspwm hotkeys",
            "State & flags",
            "Focus | swap",
            "Media"
        ]
    );
    assert_eq!(keybinds.in_category("Focus | swap").count(), 29);
}

#[test]
fn test_sample_desktop_range_with_extra_member() {
    let keybinds = parse_keybinds(SAMPLE_SXHKDRC).unwrap();

    let focus_ten: Vec<_> = keybinds.matching("super + 0").collect();
    assert_eq!(focus_ten.len(), 1);
    assert_eq!(focus_ten[0].command, "bspc desktop -f '^10'");

    let send_ten: Vec<_> = keybinds.matching("super + shift + 0").collect();
    assert_eq!(send_ten[0].command, "bspc node -d '^10'");
}

#[test]
fn test_sample_wildcard_glued_to_key() {
    let keybinds = parse_keybinds(SAMPLE_SXHKDRC).unwrap();

    let close = keybinds.matching("super + w").next().unwrap();
    assert_eq!(close.command, "bspc node -c");

    let kill = keybinds.matching("super + shift + w").next().unwrap();
    assert_eq!(kill.command, "bspc node -k");
}

#[test]
fn test_sample_continuation() {
    let keybinds = parse_keybinds(SAMPLE_SXHKDRC).unwrap();
    let rotate = keybinds.matching("super + r").next().unwrap();
    assert_eq!(rotate.command, "bspc node @/ --rotate 90");
}

#[test]
fn test_lock_screen() {
    let keybinds = parse_keybinds("# Lock screen\nsuper + l\n    i3lock\n").unwrap();
    assert_eq!(
        rows(&keybinds),
        vec![("misc", "Lock screen", "super + l", "i3lock")]
    );
}

#[test]
fn test_switch_workspace() {
    let text = "# Switch workspace {1-3}\nsuper + {1-3}\n    wmctrl -s {1-3}\n";
    let keybinds = parse_keybinds(text).unwrap();
    assert_eq!(
        rows(&keybinds),
        vec![
            ("misc", "Switch workspace 1", "super + 1", "wmctrl -s 1"),
            ("misc", "Switch workspace 2", "super + 2", "wmctrl -s 2"),
            ("misc", "Switch workspace 3", "super + 3", "wmctrl -s 3"),
        ]
    );
}

#[test]
fn test_volume_pairs_positionally() {
    let text = "# Volume {up,down}\n\
                {XF86AudioRaiseVolume,XF86AudioLowerVolume}\n\
                \tamixer set Master 5%{+,-}\n";
    let keybinds = parse_keybinds(text).unwrap();
    assert_eq!(
        rows(&keybinds),
        vec![
            ("misc", "Volume up", "XF86AudioRaiseVolume", "amixer set Master 5%+"),
            ("misc", "Volume down", "XF86AudioLowerVolume", "amixer set Master 5%-"),
        ]
    );
}

#[test]
fn test_wildcard_removes_placeholder_and_separator() {
    let text = "# {Focus,Move} west\nsuper + {_,shift + }h\n    bspc node -{f,s} west\n";
    let keybinds = parse_keybinds(text).unwrap();
    let keystrokes: Vec<&str> = keybinds.iter().map(|b| b.keystroke.as_str()).collect();
    assert_eq!(keystrokes, vec!["super + h", "super + shift + h"]);
    assert!(keybinds.iter().all(|b| !b.keystroke.contains('{')));
    assert!(keybinds.iter().all(|b| !b.keystroke.contains("+ +")));
}

#[test]
fn test_signed_offsets_in_command_list() {
    let text = "\
# Move floating window {left,down,up,right}
super + {Left,Down,Up,Right}
    bspc node -v {-20 0,0 20,0 -20,20 0}
";
    let keybinds = parse_keybinds(text).unwrap();
    let pairs: Vec<(&str, &str)> = keybinds
        .iter()
        .map(|b| (b.keystroke.as_str(), b.command.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("super + Left", "bspc node -v -20 0"),
            ("super + Down", "bspc node -v 0 20"),
            ("super + Up", "bspc node -v 0 -20"),
            ("super + Right", "bspc node -v 20 0"),
        ]
    );
    assert_eq!(keybinds.matching("super + Left").count(), 1);
}

#[test]
fn test_wildcard_in_description() {
    let text = "# Focus {_,the last} node\nsuper + {a,b}\n    echo {a,b}\n";
    let keybinds = parse_keybinds(text).unwrap();
    let descriptions: Vec<&str> = keybinds.iter().map(|b| b.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Focus node", "Focus the last node"]);
}

#[test]
fn test_chainless_command_repeats() {
    let text = "# Preselect\nsuper + ctrl + {1-4}\n    bspc node -o 0.5\n";
    let keybinds = parse_keybinds(text).unwrap();
    assert_eq!(keybinds.len(), 4);
    assert!(keybinds.iter().all(|b| b.command == "bspc node -o 0.5"));
}

#[test]
fn test_nearest_of_stacked_headers() {
    let text = "### Outer\n### Inner\n# Lock\nsuper + l\n    i3lock\n";
    let keybinds = parse_keybinds(text).unwrap();
    assert_eq!(keybinds.as_slice()[0].category, "Inner");
}

#[test]
fn test_header_applies_until_next_header() {
    let text = "\
# Before
super + a
    echo a

### Group
# One
super + b
    echo b

# Two
super + c
    echo c
";
    let keybinds = parse_keybinds(text).unwrap();
    let categories: Vec<&str> = keybinds.iter().map(|b| b.category.as_str()).collect();
    assert_eq!(categories, vec!["misc", "Group", "Group"]);
}

#[test]
fn test_chain_without_expansion_is_fatal() {
    let text = "# Broken\nsuper + {_}\n    echo broken\n";
    let err = parse_keybinds(text).unwrap_err();
    assert!(matches!(err, KeymapError::UnmatchedChain { line: 1, .. }));
}

#[test]
fn test_parse_is_deterministic() {
    let first = parse_keybinds(SAMPLE_SXHKDRC).unwrap();
    let second = parse_keybinds(SAMPLE_SXHKDRC).unwrap();
    assert_eq!(first, second);
}
