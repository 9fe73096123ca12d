//! Fixed badge table for networks we recognize, keyed by lower-cased name.
//! Unknown networks simply render without a badge.

const NETWORK_BADGES: &[(&str, &str)] = &[
    ("cosmoshub", "#2e3148"),
    ("osmosis", "#5e12a0"),
    ("juno", "#f0827d"),
    ("akash", "#ff414c"),
    ("regen", "#30a95b"),
    ("stargaze", "#db2877"),
    ("evmos", "#ed4e33"),
    ("umee", "#20c9cf"),
    ("desmos", "#fb804e"),
    ("passage", "#2d9cdb"),
];

pub fn badge_color(network: &str) -> Option<&'static str> {
    let key = network.to_lowercase();
    NETWORK_BADGES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, color)| *color)
}

pub fn badge_initial(network: &str) -> String {
    network
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(badge_color("cosmoshub"), Some("#2e3148"));
        assert_eq!(badge_color("CosmosHub"), Some("#2e3148"));
    }

    #[test]
    fn unknown_networks_have_no_badge() {
        assert_eq!(badge_color("testnet-7"), None);
    }

    #[test]
    fn initial_is_uppercased() {
        assert_eq!(badge_initial("osmosis"), "O");
        assert_eq!(badge_initial(""), "");
    }
}
