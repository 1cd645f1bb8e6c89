// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

/// One ply of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    label: SmolStr,
    position: SmolStr,
    annotation: Option<String>,
}

impl Step {
    pub fn new(label: impl Into<SmolStr>, position: impl Into<SmolStr>) -> Self {
        Self { label: label.into(), position: position.into(), annotation: None }
    }

    /// Attaches free text to the step. Empty text is treated as no annotation.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        let annotation = annotation.into();
        self.annotation = (!annotation.is_empty()).then_some(annotation);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    pub(crate) fn label_smol(&self) -> &SmolStr {
        &self.label
    }

    pub(crate) fn position_smol(&self) -> &SmolStr {
        &self.position
    }
}

/// An ordered line of steps from the common starting position.
///
/// `final_tag` names the path reached by the last step (for example an opening name). A sequence
/// with no steps is valid and contributes nothing to the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    steps: Vec<Step>,
    final_tag: Option<String>,
}

impl Sequence {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps, final_tag: None }
    }

    pub fn with_final_tag(mut self, tag: impl Into<String>) -> Self {
        self.final_tag = Some(tag.into());
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut Vec<Step> {
        &mut self.steps
    }

    pub fn final_tag(&self) -> Option<&str> {
        self.final_tag.as_deref()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
