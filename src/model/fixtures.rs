// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::sequence::{Sequence, Step};

pub(crate) const ROOT: &str = "root+";

/// Builds a line from `(label, position)` pairs.
pub(crate) fn line(steps: &[(&str, &str)]) -> Sequence {
    Sequence::new(steps.iter().map(|(label, position)| Step::new(*label, *position)).collect())
}

pub(crate) fn open_game() -> Sequence {
    line(&[("e4", "P_e4"), ("e5", "Pe_e5")]).with_final_tag("Open Game")
}

pub(crate) fn sicilian() -> Sequence {
    line(&[("e4", "P_e4"), ("c5", "Pc_c5")]).with_final_tag("Sicilian")
}

/// `a b c` next to `a x`: the second line ends one row before the grid does.
pub(crate) fn long_and_short_branch() -> Vec<Sequence> {
    vec![
        line(&[("a", "A"), ("b", "B"), ("c", "C")]).with_final_tag("long"),
        line(&[("a", "A"), ("x", "X")]).with_final_tag("short"),
    ]
}

/// Three replies to one move, one of which continues for two more plies.
pub(crate) fn three_way_branch() -> Vec<Sequence> {
    vec![
        line(&[("e4", "E"), ("e5", "F"), ("Nf3", "G"), ("Nc6", "H")]),
        line(&[("e4", "E"), ("c5", "C")]),
        line(&[("e4", "E"), ("e6", "D")]),
        line(&[("d4", "Q")]),
    ]
}
