use directory_core::{
    AppViewModel, FeedView, Page, ProfilePanelView, SearchPanelView, SearchPhase,
};

/// Renders the whole page as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    match &view.page {
        Page::Home => lines.push("== ESG directory ==".to_string()),
        Page::Company(params) => lines.push(format!("== {} ==", params.company)),
        Page::NotFound => {
            lines.push("== 404 ==".to_string());
            lines.push("That company is not in the database.".to_string());
        }
    }

    render_search(&view.search, &mut lines);
    if let Some(profile) = &view.profile {
        render_profile(profile, &mut lines);
    }
    if let Some(feed) = &view.feed {
        render_feed(feed, &mut lines);
    }
    lines
}

fn render_search(search: &SearchPanelView, lines: &mut Vec<String>) {
    lines.push(format!("search> {}", search.input));
    if !search.visible {
        return;
    }
    for (position, card) in search.cards.iter().enumerate() {
        let text = match search.phase {
            SearchPhase::Loading => "...".to_string(),
            _ => markup_to_text(&card.markup),
        };
        let number = if card.clickable {
            format!("{:>2}.", position + 1)
        } else {
            "   ".to_string()
        };
        lines.push(format!(
            "  {number} {text}  <node {} | {}>",
            card.node.value(),
            card.class_name()
        ));
    }
}

fn render_profile(panel: &ProfilePanelView, lines: &mut Vec<String>) {
    let Some(profile) = &panel.profile else {
        lines.push("[profile loading]".to_string());
        return;
    };
    lines.push(format!("[{}]", profile.name));
    if let Some(industries) = &profile.industries {
        lines.push(format!("  Industries: {industries}"));
    }
    if let Some(website) = &profile.website {
        lines.push(format!("  Website: {website}"));
    }
    if let Some(logo) = &profile.logo {
        lines.push(format!("  Logo: {logo}"));
    }
    if !profile.description.is_empty() {
        lines.push(format!("  {}", profile.description));
    }
}

fn render_feed(feed: &FeedView, lines: &mut Vec<String>) {
    let category = feed
        .params
        .category
        .map(|category| category.as_str())
        .unwrap_or("all categories");
    lines.push(format!("Articles: page {} | {}", feed.params.page, category));
    if feed.overlay {
        lines.push("  [loading articles]".to_string());
        return;
    }
    if feed.cards.is_empty() {
        lines.push("  (no articles)".to_string());
    }
    for (position, view) in feed.cards.iter().enumerate() {
        let card = &view.card;
        lines.push(format!("  {}. {}", position + 1, card.headline));
        lines.push(format!(
            "     {} | {} | {}",
            card.source, card.date, card.categories
        ));
        if !card.description.is_empty() {
            lines.push(format!("     {}", card.description));
        }
        lines.push(format!("     {}", card.url));
    }
}

/// Flattens card markup for the terminal: paragraphs are dropped, marks
/// become brackets and entities are decoded.
pub fn markup_to_text(markup: &str) -> String {
    markup
        .replace("<p>", "")
        .replace("</p>", "")
        .replace("<mark>", "[")
        .replace("</mark>", "]")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use directory_core::{update, AppState, Effect, Msg};

    use super::{markup_to_text, render};

    #[test]
    fn marks_render_as_brackets() {
        assert_eq!(
            markup_to_text("<p><mark>AT&amp;T</mark> &lt;Mobile&gt;</p>"),
            "[AT&T] <Mobile>"
        );
    }

    #[test]
    fn hidden_panel_renders_only_the_box() {
        let lines = render(&AppState::new().view());
        assert_eq!(lines, vec!["== ESG directory ==", "search> "]);
    }

    #[test]
    fn populated_panel_numbers_clickable_cards() {
        let (state, effects) = update(AppState::new(), Msg::SearchInput("ac".into()));
        let Some(Effect::Search { token, .. }) = effects.into_iter().next() else {
            panic!("search effect expected");
        };
        let (state, _) = update(
            state,
            Msg::SearchResolved {
                token,
                result: Ok(vec!["Acme".into(), "Pacific".into()]),
            },
        );

        let lines = render(&state.view());
        assert_eq!(lines[1], "search> ac");
        assert!(lines[2].starts_with("   1. [Ac]me  <node 1 | result top-result>"));
        assert!(lines[3].starts_with("   2. P[ac]ific  <node 2 | result bottom-result>"));
    }
}
