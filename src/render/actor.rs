use html_escape::encode_text;

use crate::data::Actor;

use super::link::link_or_span;

pub fn render_actor_link(actor: &Actor) -> String {
    let class = match actor {
        Actor::User { .. } => "actor-link actor-user",
        Actor::Org { .. } => "actor-link actor-org",
        Actor::External { .. } => "actor-link actor-external",
    };
    link_or_span(actor.url(), class, &encode_text(actor.display_name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_link_to_their_profile() {
        let actor = Actor::User { username: "alice".to_string(), url: "/users/alice".to_string() };
        assert_eq!(
            render_actor_link(&actor),
            "<a href=\"/users/alice\" class=\"actor-link actor-user\">alice</a>",
        );
    }

    #[test]
    fn external_actor_without_url_is_plain_text() {
        let actor = Actor::External { username: "<bot>".to_string(), url: None };
        assert_eq!(
            render_actor_link(&actor),
            "<span class=\"actor-link actor-external\">&lt;bot&gt;</span>",
        );
    }
}
