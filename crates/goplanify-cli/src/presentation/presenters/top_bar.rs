use crate::presentation::binder::MenuEntry;
use crate::presentation::view_models::{MenuItemViewModel, TitleStyle, TopBarViewModel};
use goplanify_types::screen;

/// Lay out the app bar title for a screen `screen_width_dp` wide.
///
/// Titles longer than `(screen_width_dp / 10) * 2` characters break into two
/// lines at the first space at or after the middle, or at the middle itself
/// when no space follows. Wrapped titles switch to the compact style.
pub fn present_top_bar(title: &str, screen_width_dp: u32) -> TopBarViewModel {
    let max_chars = (screen_width_dp as usize / 10) * 2;
    let lines = wrap_title(title, max_chars);
    let wrapped = lines.len() > 1;

    TopBarViewModel {
        title: lines.join("\n"),
        lines,
        wrapped,
        style: if wrapped {
            TitleStyle::Compact
        } else {
            TitleStyle::Headline
        },
        max_chars,
        home_route: screen::HOME.to_string(),
        menu: MenuEntry::ALL
            .iter()
            .map(|entry| MenuItemViewModel {
                label: entry.label().to_string(),
                route: entry.route().to_string(),
            })
            .collect(),
    }
}

fn wrap_title(title: &str, max_chars: usize) -> Vec<String> {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_chars {
        return vec![title.to_string()];
    }

    let midpoint = chars.len() / 2;
    let split = chars[midpoint..]
        .iter()
        .position(|c| *c == ' ')
        .map(|offset| midpoint + offset)
        .filter(|index| *index > 0)
        .unwrap_or(midpoint);

    let first: String = chars[..split].iter().collect();
    let second: String = chars[split..].iter().collect();
    vec![first, second.trim().to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_stays_on_one_line() {
        let bar = present_top_bar("GoPlanify", 411);

        assert_eq!(bar.max_chars, 82);
        assert_eq!(bar.lines, ["GoPlanify"]);
        assert!(!bar.wrapped);
        assert_eq!(bar.style, TitleStyle::Headline);
    }

    #[test]
    fn test_long_title_splits_at_space_after_midpoint() {
        // 24 chars, midpoint 12, next space at 16
        let bar = present_top_bar("GoPlanify Travel Planner", 100);

        assert_eq!(bar.max_chars, 20);
        assert_eq!(bar.lines, ["GoPlanify Travel", "Planner"]);
        assert_eq!(bar.title, "GoPlanify Travel\nPlanner");
        assert_eq!(bar.style, TitleStyle::Compact);
    }

    #[test]
    fn test_title_without_trailing_space_splits_at_midpoint() {
        let bar = present_top_bar("Itinerary overview", 50);

        // midpoint 9 is the space itself
        assert_eq!(bar.max_chars, 10);
        assert_eq!(bar.lines, ["Itinerary", "overview"]);

        let bar = present_top_bar("Supercalifragilistic", 50);
        assert_eq!(bar.lines, ["Supercalif", "ragilistic"]);
    }

    #[test]
    fn test_title_at_limit_is_not_wrapped() {
        let title = "a".repeat(20);
        assert!(!present_top_bar(&title, 100).wrapped);
        assert!(present_top_bar(&format!("{} b", title), 100).wrapped);
    }

    #[test]
    fn test_menu_and_home_routes() {
        let bar = present_top_bar("GoPlanify", 411);
        let routes: Vec<&str> = bar.menu.iter().map(|m| m.route.as_str()).collect();

        assert_eq!(routes, ["about", "version", "profile", "settings", "terms"]);
        assert_eq!(bar.home_route, "home");
    }
}
