/// Converts an XKB-style key name to a Linux evdev keycode.
///
/// Supports modifiers (`Super_L`, `Alt_R`, ...), letters, digits,
/// function keys (F1–F24) and common named keys. Matching is
/// case-insensitive, like `xkb_keysym_from_name` with case folding.
pub fn keycode_from_name(name: &str) -> Option<u32> {
    let upper = name.trim().to_ascii_uppercase();

    if upper.len() == 1 {
        let ch = upper.as_bytes()[0];
        if ch.is_ascii_uppercase() {
            return letter(ch);
        }
        if ch.is_ascii_digit() {
            // KEY_1 = 2 ... KEY_9 = 10, KEY_0 = 11
            return Some(if ch == b'0' { 11 } else { u32::from(ch - b'0') + 1 });
        }
    }

    if let Some(rest) = upper.strip_prefix('F')
        && let Ok(n) = rest.parse::<u32>()
    {
        return match n {
            1..=10 => Some(58 + n),   // KEY_F1 = 59
            11 | 12 => Some(76 + n),  // KEY_F11 = 87
            13..=24 => Some(170 + n), // KEY_F13 = 183
            _ => None,
        };
    }

    match upper.as_str() {
        // Modifiers
        "SUPER_L" | "META_L" | "SUPER" => Some(125),
        "SUPER_R" | "META_R" => Some(126),
        "ALT_L" | "ALT" => Some(56),
        "ALT_R" | "ISO_LEVEL3_SHIFT" => Some(100),
        "CONTROL_L" | "CTRL_L" | "CONTROL" | "CTRL" => Some(29),
        "CONTROL_R" | "CTRL_R" => Some(97),
        "SHIFT_L" | "SHIFT" => Some(42),
        "SHIFT_R" => Some(54),
        "CAPS_LOCK" | "CAPSLOCK" => Some(58),
        "MENU" => Some(139),

        // Navigation
        "RETURN" | "ENTER" => Some(28),
        "TAB" => Some(15),
        "ESCAPE" | "ESC" => Some(1),
        "SPACE" => Some(57),
        "BACKSPACE" => Some(14),
        "DELETE" => Some(111),
        "INSERT" => Some(110),
        "HOME" => Some(102),
        "END" => Some(107),
        "PRIOR" | "PAGE_UP" => Some(104),
        "NEXT" | "PAGE_DOWN" => Some(109),
        "LEFT" => Some(105),
        "UP" => Some(103),
        "RIGHT" => Some(106),
        "DOWN" => Some(108),
        "PRINT" => Some(99),
        "SCROLL_LOCK" => Some(70),
        "PAUSE" => Some(119),

        // Punctuation
        "MINUS" => Some(12),
        "EQUAL" => Some(13),
        "BRACKETLEFT" => Some(26),
        "BRACKETRIGHT" => Some(27),
        "SEMICOLON" => Some(39),
        "APOSTROPHE" => Some(40),
        "GRAVE" => Some(41),
        "BACKSLASH" => Some(43),
        "COMMA" => Some(51),
        "PERIOD" => Some(52),
        "SLASH" => Some(53),

        _ => None,
    }
}

/// evdev codes for A–Z follow the QWERTY rows, not the alphabet.
fn letter(ch: u8) -> Option<u32> {
    const CODES: [u32; 26] = [
        30, 48, 46, 32, 18, 33, 34, 35, 23, 36, 37, 38, 50, // A–M
        49, 24, 25, 16, 19, 31, 20, 22, 47, 17, 45, 21, 44, // N–Z
    ];
    CODES.get(usize::from(ch.checked_sub(b'A')?)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers() {
        // Assert
        assert_eq!(keycode_from_name("Super_L"), Some(125));
        assert_eq!(keycode_from_name("alt_r"), Some(100));
        assert_eq!(keycode_from_name("Control_L"), Some(29));
    }

    #[test]
    fn letters_case_insensitive() {
        // Assert
        assert_eq!(keycode_from_name("a"), Some(30));
        assert_eq!(keycode_from_name("Q"), Some(16));
        assert_eq!(keycode_from_name("z"), Some(44));
        assert_eq!(keycode_from_name("m"), Some(50));
    }

    #[test]
    fn digits() {
        // Assert
        assert_eq!(keycode_from_name("1"), Some(2));
        assert_eq!(keycode_from_name("9"), Some(10));
        assert_eq!(keycode_from_name("0"), Some(11));
    }

    #[test]
    fn function_keys() {
        // Assert
        assert_eq!(keycode_from_name("F1"), Some(59));
        assert_eq!(keycode_from_name("f10"), Some(68));
        assert_eq!(keycode_from_name("F12"), Some(88));
        assert_eq!(keycode_from_name("F13"), Some(183));
        assert_eq!(keycode_from_name("F25"), None);
    }

    #[test]
    fn unknown_returns_none() {
        // Assert
        assert_eq!(keycode_from_name("Hyper_Q"), None);
        assert_eq!(keycode_from_name(""), None);
    }
}
