use minifb::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Имена клавиш, допустимые для `display.quit_key`
pub struct QuitKeyMap;

static KEY_NAME_TO_KEY: Lazy<HashMap<&'static str, Key>> = Lazy::new(|| {
    let letters = [
        ("a", Key::A), ("b", Key::B), ("c", Key::C), ("d", Key::D), ("e", Key::E),
        ("f", Key::F), ("g", Key::G), ("h", Key::H), ("i", Key::I), ("j", Key::J),
        ("k", Key::K), ("l", Key::L), ("m", Key::M), ("n", Key::N), ("o", Key::O),
        ("p", Key::P), ("q", Key::Q), ("r", Key::R), ("s", Key::S), ("t", Key::T),
        ("u", Key::U), ("v", Key::V), ("w", Key::W), ("x", Key::X), ("y", Key::Y),
        ("z", Key::Z),
    ];

    let mut map: HashMap<&'static str, Key> = letters.into_iter().collect();

    // Специальные клавиши
    map.insert("escape", Key::Escape);
    map.insert("space", Key::Space);
    map.insert("enter", Key::Enter);
    map.insert("backspace", Key::Backspace);

    map
});

impl QuitKeyMap {
    pub fn get_key(key_name: &str) -> Result<Key, String> {
        let normalized = key_name.to_lowercase();
        KEY_NAME_TO_KEY
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| format!("Неизвестная клавиша выхода: {}", key_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_specials() {
        assert_eq!(QuitKeyMap::get_key("q").unwrap(), Key::Q);
        assert_eq!(QuitKeyMap::get_key("Z").unwrap(), Key::Z);
        assert_eq!(QuitKeyMap::get_key("ESCAPE").unwrap(), Key::Escape);
    }

    #[test]
    fn test_invalid_key() {
        assert!(QuitKeyMap::get_key("f13").is_err());
        assert!(QuitKeyMap::get_key("").is_err());
    }
}
