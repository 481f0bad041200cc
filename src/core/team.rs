//! Team classification for the aggregate listing.

use std::fmt;

/// The four labels shown next to a username.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    /// Holds the `Team Valor` role
    Valor,
    /// Holds the `Team Instinct` role
    Instinct,
    /// Holds the `Team Mystic` role
    Mystic,
    /// Holds none of the team roles
    Unaffiliated,
}

impl Team {
    /// Role names checked in order; the first one held wins.
    const PRECEDENCE: [Self; 3] = [Self::Valor, Self::Instinct, Self::Mystic];

    /// Display label, which for real teams is also the exact role name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valor => "Team Valor",
            Self::Instinct => "Team Instinct",
            Self::Mystic => "Team Mystic",
            Self::Unaffiliated => "No team",
        }
    }

    /// Picks the team for a member holding `role_names`.
    pub fn classify<S: AsRef<str>>(role_names: &[S]) -> Self {
        Self::PRECEDENCE
            .into_iter()
            .find(|team| role_names.iter().any(|role| role.as_ref() == team.label()))
            .unwrap_or(Self::Unaffiliated)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_single_role() {
        assert_eq!(Team::classify(&["Team Mystic"]), Team::Mystic);
        assert_eq!(Team::classify(&["Member", "Team Instinct"]), Team::Instinct);
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(
            Team::classify(&["Team Mystic", "Team Valor", "Team Instinct"]),
            Team::Valor
        );
        assert_eq!(
            Team::classify(&["Team Mystic", "Team Instinct"]),
            Team::Instinct
        );
    }

    #[test]
    fn test_classify_without_team_role() {
        let none: [&str; 0] = [];
        assert_eq!(Team::classify(&none), Team::Unaffiliated);
        // Role names are matched exactly
        assert_eq!(Team::classify(&["team valor", "Valor"]), Team::Unaffiliated);
        assert_eq!(Team::Unaffiliated.to_string(), "No team");
    }
}
