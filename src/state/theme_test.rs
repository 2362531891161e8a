use super::*;

#[test]
fn theme_defaults_to_light() {
    assert_eq!(ThemeState::default().mode, ThemeMode::Light);
}

#[test]
fn parse_accepts_stored_names_only() {
    assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse(" light\n"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse("true"), None);
}

#[test]
fn toggled_flips_and_round_trips_names() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::parse(ThemeMode::Dark.toggled().as_str()), Some(ThemeMode::Light));
}
