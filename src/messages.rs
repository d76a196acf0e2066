/// Chat color codes used by the service layer.
pub const GREEN: &str = "\u{00a7}a";
pub const RED: &str = "\u{00a7}c";

/// Catalog of user-facing messages. Placeholder keys inside templates are
/// replaced verbatim by [`Message::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NameInUse,
    LimitReached,
    CreatedWarp,
    RenamedWarp,
    MovedWarp,
    MadePrivate,
    MadePublic,
    PlayerTrusted,
    PlayerAlreadyTrusted,
    PlayerUntrusted,
    PlayerNotTrusted,
    NotAnOwner,
    Teleported,
    NotTrusted,
    HoldItem,
    ChangedWarpIcon,
    ChangedLore,
    WarpDoesNotExist,
}

impl Message {
    pub fn template(self) -> &'static str {
        match self {
            Message::NameInUse => "A warp with the name PWARPNAMEP already exists.",
            Message::LimitReached => "You've reached your warp limit of PLIMITP.",
            Message::CreatedWarp => "Your warp has been created.",
            Message::RenamedWarp => "Your warp is now called PWARPNAMEP.",
            Message::MovedWarp => "Your warp has been moved to your location.",
            Message::MadePrivate => "Your warp is now private.",
            Message::MadePublic => "Your warp is now public.",
            Message::PlayerTrusted => "The player has been trusted to your warp.",
            Message::PlayerAlreadyTrusted => "That player is already trusted.",
            Message::PlayerUntrusted => "The player is no longer trusted to your warp.",
            Message::PlayerNotTrusted => "That player is not trusted.",
            Message::NotAnOwner => "You don't own this warp.",
            Message::Teleported => "You have been teleported to PWARPNAMEP.",
            Message::NotTrusted => "You are not trusted to this warp.",
            Message::HoldItem => "Please hold an item in your main hand.",
            Message::ChangedWarpIcon => "Your warp icon has been changed.",
            Message::ChangedLore => "Your warp description has been updated.",
            Message::WarpDoesNotExist => "The warp PWARPNAMEP doesn't exist.",
        }
    }

    /// Renders the template, substituting each `(placeholder, value)` pair.
    pub fn render(self, substitutions: &[(&str, &str)]) -> String {
        let mut text = self.template().to_string();
        for (placeholder, value) in substitutions {
            text = text.replace(placeholder, value);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_placeholders() {
        let text = Message::NameInUse.render(&[("PWARPNAMEP", "spawn")]);
        assert_eq!(text, "A warp with the name spawn already exists.");
    }

    #[test]
    fn render_without_substitutions_returns_template() {
        assert_eq!(Message::CreatedWarp.render(&[]), Message::CreatedWarp.template());
    }

    #[test]
    fn limit_placeholder_takes_a_number() {
        let text = Message::LimitReached.render(&[("PLIMITP", "3")]);
        assert_eq!(text, "You've reached your warp limit of 3.");
    }
}
