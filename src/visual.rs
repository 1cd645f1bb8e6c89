// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Resolution of position keys to visual handles.
//!
//! The grid builder never produces visuals itself. A consumer picks a [`VisualResolver`] and
//! applies it to a finished grid; placeholders are skipped.

use std::collections::HashMap;

use crate::model::{Grid, VisualHandle};

pub trait VisualResolver {
    fn resolve(&self, position: &str) -> Option<VisualHandle>;
}

impl<F> VisualResolver for F
where
    F: Fn(&str) -> Option<VisualHandle>,
{
    fn resolve(&self, position: &str) -> Option<VisualHandle> {
        self(position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Perspective {
    #[default]
    White,
    Black,
}

/// Builds board-image URLs for a dynamic board service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardImageUrl {
    pub base_url: String,
    pub theme: String,
    pub piece_set: String,
    pub size: u32,
    pub perspective: Perspective,
}

impl Default for BoardImageUrl {
    fn default() -> Self {
        Self {
            base_url: "https://www.chess.com/dynboard".to_owned(),
            theme: "green".to_owned(),
            piece_set: "space".to_owned(),
            size: 0,
            perspective: Perspective::White,
        }
    }
}

impl BoardImageUrl {
    pub fn url_for(&self, position: &str) -> String {
        let mut size = itoa::Buffer::new();
        let mut url = format!(
            "{}?board={}&fen={}&piece={}&size={}",
            self.base_url,
            self.theme,
            position,
            self.piece_set,
            size.format(self.size)
        );
        if self.perspective == Perspective::Black {
            url.push_str("&flip=true");
        }
        url
    }
}

impl VisualResolver for BoardImageUrl {
    fn resolve(&self, position: &str) -> Option<VisualHandle> {
        if position.is_empty() {
            return None;
        }
        Some(VisualHandle::new(self.url_for(position)))
    }
}

impl Grid {
    /// Fills the visual of every non-placeholder cell; each distinct position is resolved once.
    ///
    /// Returns the number of distinct positions handed to the resolver.
    pub fn resolve_visuals(&mut self, resolver: &impl VisualResolver) -> usize {
        let _span = tracing::debug_span!("resolve_visuals", rows = self.rows().len()).entered();

        let mut resolved = HashMap::<String, Option<VisualHandle>>::new();
        for row in self.rows_mut() {
            for cell in row.cells_mut() {
                if cell.is_placeholder() {
                    continue;
                }
                let visual = resolved
                    .entry(cell.position().to_owned())
                    .or_insert_with_key(|position| resolver.resolve(position))
                    .clone();
                cell.set_visual(visual);
            }
        }

        tracing::debug!(positions = resolved.len(), "visuals resolved");
        resolved.len()
    }
}
