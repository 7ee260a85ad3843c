//! Stateless presentation helpers.

use yew::prelude::*;

pub fn spinner() -> Html {
    html! { <span class="spinner" aria-label="Chargement"></span> }
}

/// Centered spinner used while a page waits for its first fetch.
pub fn page_loading() -> Html {
    html! {
        <div class="page-loading">{ spinner() }</div>
    }
}

pub fn stats_card(title: &str, value: String, color: &'static str) -> Html {
    html! {
        <div class={classes!("stats-card", color)}>
            <p class="stats-title">{ title.to_string() }</p>
            <p class="stats-value">{ value }</p>
        </div>
    }
}

pub fn empty_state(title: &str, hint: &str) -> Html {
    html! {
        <div class="empty-state">
            <h3>{ title.to_string() }</h3>
            <p class="muted">{ hint.to_string() }</p>
        </div>
    }
}

/// `1 client` / `3 clients`.
pub fn plural(n: usize, word: &str) -> String {
    if n > 1 {
        format!("{n} {word}s")
    } else {
        format!("{n} {word}")
    }
}

#[cfg(test)]
mod tests {
    use super::plural;

    #[test]
    fn plural_only_above_one() {
        assert_eq!(plural(0, "client"), "0 client");
        assert_eq!(plural(1, "modèle"), "1 modèle");
        assert_eq!(plural(2, "message"), "2 messages");
    }
}
