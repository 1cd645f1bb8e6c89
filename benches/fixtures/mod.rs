// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

pub mod lines {
    use branchgrid::model::{Sequence, Step};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub lines: usize,
        pub fanout: usize,
        pub depth: usize,
    }

    impl Params {
        pub const fn new(lines: usize, fanout: usize, depth: usize) -> Self {
            Self { lines, fanout, depth }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        WideFanout,
        DeepLines,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::WideFanout => "wide_fanout",
                Self::DeepLines => "deep_lines",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(16, 2, 6),
                Self::Medium => Params::new(256, 4, 10),
                Self::WideFanout => Params::new(512, 16, 6),
                Self::DeepLines => Params::new(64, 2, 40),
            }
        }

        pub const fn all() -> [Self; 4] {
            [Self::Small, Self::Medium, Self::WideFanout, Self::DeepLines]
        }
    }

    /// Lines of a complete `fanout`-ary tree cut to `lines` leaves.
    ///
    /// Every third line is one ply shorter and every third after that two plies shorter, so the
    /// grid always carries terminal slots.
    pub fn generate(params: Params) -> Vec<Sequence> {
        let Params { lines, fanout, depth } = params;
        let fanout = fanout.max(2);
        let depth = depth.max(1);

        (0..lines)
            .map(|line| {
                let len = depth - (line % 3).min(depth - 1);
                let steps = (0..len)
                    .map(|ply| {
                        let stride = fanout.saturating_pow((depth - 1 - ply) as u32);
                        let node = line / stride;
                        Step::new(format!("m{}", node % fanout), format!("{ply}:{node}/"))
                    })
                    .collect();
                Sequence::new(steps).with_final_tag(format!("line {line}"))
            })
            .collect()
    }

    pub fn fixture(case: Case) -> Vec<Sequence> {
        generate(case.params())
    }
}
