//! Display mapping for governance vote options.

use api::VoteOption;

/// Short label rendered next to each proposal row.
pub fn label(option: &VoteOption) -> &'static str {
    match option {
        VoteOption::Yes => "YES",
        VoteOption::No => "NO",
        VoteOption::Abstain => "ABSTAIN",
        VoteOption::NoWithVeto => "VETO",
        VoteOption::Other(_) => "-",
    }
}

/// CSS color for the label. Unrecognized options stay gray.
pub fn color(option: &VoteOption) -> &'static str {
    match option {
        VoteOption::Yes => "green",
        VoteOption::No => "indianred",
        VoteOption::Abstain => "gray",
        VoteOption::NoWithVeto => "red",
        VoteOption::Other(_) => "gray",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_options_map_to_fixed_pairs() {
        let cases = [
            (VoteOption::Yes, "YES", "green"),
            (VoteOption::No, "NO", "indianred"),
            (VoteOption::Abstain, "ABSTAIN", "gray"),
            (VoteOption::NoWithVeto, "VETO", "red"),
        ];
        for (option, expected_label, expected_color) in cases {
            assert_eq!(label(&option), expected_label);
            assert_eq!(color(&option), expected_color);
        }
    }

    #[test]
    fn unknown_options_fall_back_to_dash_and_gray() {
        let other = VoteOption::Other("VOTE_OPTION_UNSPECIFIED".into());
        assert_eq!(label(&other), "-");
        assert_eq!(color(&other), "gray");
    }
}
