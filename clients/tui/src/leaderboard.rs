//! Mock leaderboard. There is no server, so the standings are fixed sample
//! data with the local profile merged in by token count.

use crate::wallet::Profile;

/// Sample players shown alongside the local profile.
const MOCK_PLAYERS: &[(&str, u64)] = &[
    ("Alex Johnson", 1250),
    ("Sarah Williams", 1180),
    ("Michael Chen", 1120),
    ("Emily Davis", 980),
    ("David Kim", 875),
    ("Jessica Lee", 820),
    ("Ryan Park", 765),
    ("Olivia Brown", 720),
    ("Ethan Garcia", 680),
    ("Sophia Martinez", 635),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub rank: usize,
    pub name: String,
    pub tokens: u64,
    pub is_you: bool,
}

/// Full standings, sorted by tokens descending, ranks assigned from 1.
/// Mock players with equal tokens keep their listed order; the local player
/// ranks below anyone they tie with.
pub fn standings(profile: &Profile) -> Vec<Standing> {
    let you = if profile.name.is_empty() {
        "You".to_string()
    } else {
        profile.name.clone()
    };

    let mut entries: Vec<(String, u64, bool)> = MOCK_PLAYERS
        .iter()
        .map(|&(name, tokens)| (name.to_string(), tokens, false))
        .collect();
    entries.push((you, profile.tokens, true));
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (name, tokens, is_you))| Standing {
            rank: i + 1,
            name,
            tokens,
            is_you,
        })
        .collect()
}

pub fn user_rank(profile: &Profile) -> usize {
    standings(profile)
        .iter()
        .find(|s| s.is_you)
        .map(|s| s.rank)
        .unwrap_or(0)
}

pub fn medal(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}
