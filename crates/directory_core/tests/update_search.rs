use std::sync::Once;

use directory_core::{
    update, AppState, Effect, FailureVisibility, FetchFailure, Msg, RequestToken, Route,
    SearchController, SearchPhase, UNREACHABLE_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(directory_logging::initialize_for_tests);
}

fn type_query(state: AppState, text: &str) -> (AppState, Option<RequestToken>) {
    let (state, effects) = update(state, Msg::SearchInput(text.to_string()));
    let token = effects.into_iter().find_map(|effect| match effect {
        Effect::Search { token, .. } => Some(token),
        _ => None,
    });
    (state, token)
}

fn resolve(state: AppState, token: RequestToken, names: &[&str]) -> AppState {
    let result = Ok(names.iter().map(|name| name.to_string()).collect());
    update(state, Msg::SearchResolved { token, result }).0
}

#[test]
fn typing_shows_single_loading_card_and_issues_trimmed_search() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::SearchInput("  ac ".to_string()));

    assert_eq!(effects.len(), 1);
    assert!(matches!(&effects[0], Effect::Search { query, .. } if query == "ac"));
    let view = state.view();
    assert_eq!(view.search.phase, SearchPhase::Loading);
    assert!(view.search.visible);
    assert_eq!(view.search.input, "  ac ");
    assert_eq!(view.search.cards.len(), 1);
    assert_eq!(
        view.search.cards[0].class_name(),
        "result loading top-result bottom-result"
    );
    assert!(!view.search.cards[0].clickable);
    assert!(state.consume_dirty());
}

#[test]
fn results_are_highlighted_and_roles_assigned() {
    init_logging();
    let (state, token) = type_query(AppState::new(), "ac");
    let state = resolve(state, token.unwrap(), &["Acme", "Pacific", "Zeta Acquisitions"]);

    let view = state.view();
    assert_eq!(view.search.phase, SearchPhase::Populated);
    let markup: Vec<_> = view.search.cards.iter().map(|c| c.markup.as_str()).collect();
    assert_eq!(
        markup,
        vec![
            "<p><mark>Ac</mark>me</p>",
            "<p>P<mark>ac</mark>ific</p>",
            "<p>Zeta <mark>Ac</mark>quisitions</p>",
        ]
    );
    assert_eq!(view.search.cards[0].class_name(), "result top-result");
    assert_eq!(view.search.cards[1].class_name(), "result");
    assert_eq!(view.search.cards[2].class_name(), "result bottom-result");
}

#[test]
fn late_response_to_superseded_query_is_dropped() {
    init_logging();
    let (state, ac) = type_query(AppState::new(), "ac");
    let (mut state, ace) = type_query(state, "ace");
    let (ac, ace) = (ac.unwrap(), ace.unwrap());
    assert!(state.consume_dirty());

    let (mut state, _) = update(
        state,
        Msg::SearchResolved {
            token: ac,
            result: Ok(vec!["Acme".into(), "Acorn".into(), "Pacific".into()]),
        },
    );
    assert!(!state.consume_dirty());
    assert_eq!(state.view().search.phase, SearchPhase::Loading);
    assert_eq!(state.view().search.cards.len(), 1);

    let state = resolve(state, ace, &["Ace Hardware"]);
    let view = state.view();
    assert_eq!(view.search.phase, SearchPhase::Populated);
    assert_eq!(view.search.cards.len(), 1);
    assert_eq!(view.search.cards[0].markup, "<p><mark>Ace</mark> Hardware</p>");
}

#[test]
fn newer_response_wins_regardless_of_completion_order() {
    init_logging();
    let (state, a) = type_query(AppState::new(), "a");
    let (state, b) = type_query(state, "b");

    let state = resolve(state, b.unwrap(), &["Boeing"]);
    let state = resolve(state, a.unwrap(), &["Apple", "Amazon"]);

    let view = state.view();
    assert_eq!(view.search.cards.len(), 1);
    assert_eq!(view.search.cards[0].markup, "<p><mark>B</mark>oeing</p>");
}

#[test]
fn clearing_the_box_hides_panel_and_discards_in_flight() {
    init_logging();
    let (state, token) = type_query(AppState::new(), "ac");
    let (state, none) = type_query(state, "");
    assert_eq!(none, None);
    assert!(!state.view().search.visible);
    assert_eq!(state.view().search.phase, SearchPhase::Idle);

    let state = resolve(state, token.unwrap(), &["Acme"]);

    let view = state.view();
    assert!(!view.search.visible);
    assert_eq!(view.search.phase, SearchPhase::Idle);
}

#[test]
fn whitespace_only_box_counts_as_empty() {
    init_logging();
    let (state, token) = type_query(AppState::new(), "   ");
    assert_eq!(token, None);
    assert_eq!(state.view().search.phase, SearchPhase::Idle);
    assert!(!state.view().search.visible);
}

#[test]
fn zero_results_show_single_no_results_card() {
    init_logging();
    let (state, token) = type_query(AppState::new(), "zzzz");
    let state = resolve(state, token.unwrap(), &[]);

    let view = state.view();
    assert_eq!(view.search.phase, SearchPhase::Empty);
    assert_eq!(view.search.cards.len(), 1);
    assert_eq!(view.search.cards[0].markup, "No results for `zzzz` in database");
    assert!(!view.search.cards[0].clickable);

    let (_, effects) = update(state, Msg::SearchSubmitted);
    assert!(effects.is_empty());
}

#[test]
fn failure_shows_error_card_without_click_target() {
    init_logging();
    assert_eq!(SearchController::FAILURE_VISIBILITY, FailureVisibility::Card);
    let (state, token) = type_query(AppState::new(), "ac");
    let state = resolve(state, token.unwrap(), &["Acme", "Acorn"]);
    let (state, token) = type_query(state, "acx");

    let (state, _) = update(
        state,
        Msg::SearchResolved {
            token: token.unwrap(),
            result: Err(FetchFailure::NetworkOrParse {
                message: "connection refused".into(),
            }),
        },
    );

    let view = state.view();
    assert_eq!(view.search.phase, SearchPhase::Failed);
    assert_eq!(view.search.cards.len(), 1);
    assert_eq!(view.search.cards[0].markup, UNREACHABLE_MESSAGE);
    assert_eq!(
        view.search.cards[0].class_name(),
        "result error top-result bottom-result"
    );
    let (_, effects) = update(state, Msg::ResultClicked { index: 0 });
    assert!(effects.is_empty());
}

#[test]
fn reused_cards_navigate_to_their_new_data() {
    init_logging();
    let (state, token) = type_query(AppState::new(), "a");
    let state = resolve(state, token.unwrap(), &["Apple", "Amazon"]);
    let first_node = state.view().search.cards[0].node;

    let (state, token) = type_query(state, "b");
    let state = resolve(state, token.unwrap(), &["Boeing", "Barclays"]);
    assert_eq!(state.view().search.cards[0].node, first_node);

    let (_, effects) = update(state, Msg::ResultClicked { index: 1 });
    assert_eq!(
        effects,
        vec![Effect::Navigate(Route::Company {
            name: "Barclays".to_string()
        })]
    );
}

#[test]
fn enter_follows_first_result_only_while_visible() {
    init_logging();
    let (state, token) = type_query(AppState::new(), "ac");
    let state = resolve(state, token.unwrap(), &["Acme Corp", "Acorn"]);

    let (state, effects) = update(state, Msg::SearchSubmitted);
    assert_eq!(
        effects,
        vec![Effect::Navigate(Route::Company {
            name: "Acme Corp".to_string()
        })]
    );

    let (state, _) = update(state, Msg::ClickedOutside);
    let (_, effects) = update(state, Msg::SearchSubmitted);
    assert!(effects.is_empty());
}

#[test]
fn clicking_outside_hides_without_dropping_cards() {
    init_logging();
    let (state, token) = type_query(AppState::new(), "ac");
    let state = resolve(state, token.unwrap(), &["Acme", "Acorn"]);
    let ids: Vec<_> = state.view().search.cards.iter().map(|c| c.node).collect();

    let (mut state, _) = update(state, Msg::ClickedOutside);
    assert!(state.consume_dirty());
    assert!(!state.view().search.visible);
    assert_eq!(state.view().search.cards.len(), 2);

    let (state, _) = update(state, Msg::SearchFocused);
    let view = state.view();
    assert!(view.search.visible);
    let again: Vec<_> = view.search.cards.iter().map(|c| c.node).collect();
    assert_eq!(again, ids);
}

#[test]
fn focusing_an_empty_box_keeps_panel_hidden() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::SearchFocused);
    assert!(!state.view().search.visible);
    assert!(!state.consume_dirty());
}

#[test]
fn response_while_hidden_updates_cards_but_not_visibility() {
    init_logging();
    let (state, token) = type_query(AppState::new(), "ac");
    let (state, _) = update(state, Msg::ClickedOutside);

    let state = resolve(state, token.unwrap(), &["Acme"]);

    let view = state.view();
    assert!(!view.search.visible);
    assert_eq!(view.search.phase, SearchPhase::Populated);
}

#[test]
fn clear_button_empties_everything() {
    init_logging();
    let (state, token) = type_query(AppState::new(), "ac");
    let state = resolve(state, token.unwrap(), &["Acme"]);
    let (state, late) = type_query(state, "acm");

    let (state, effects) = update(state, Msg::ClearClicked);
    assert!(effects.is_empty());
    let state = resolve(state, late.unwrap(), &["Acme"]);

    let view = state.view();
    assert_eq!(view.search.input, "");
    assert!(!view.search.visible);
    assert!(view.search.cards.is_empty());
}

#[test]
fn return_home_navigates() {
    let (_, effects) = update(AppState::new(), Msg::ReturnHomeClicked);
    assert_eq!(effects, vec![Effect::Navigate(Route::Home)]);
}
