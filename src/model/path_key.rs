// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;

/// Identity of a grid node: the root marker followed by every traversed position key.
///
/// Keys are plain concatenations without separators, so sequences sharing a literal prefix of
/// steps produce keys sharing a literal string prefix. Ordering is ordinal (byte-wise), which is
/// what fixes the left-to-right column order inside a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathKey(String);

impl PathKey {
    pub fn root(position: &str) -> Self {
        Self(position.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key of the node reached by stepping into `position` from this node.
    pub fn child(&self, position: &str) -> Self {
        let mut value = String::with_capacity(self.0.len() + position.len());
        value.push_str(&self.0);
        value.push_str(position);
        Self(value)
    }

    /// Key of the placeholder slot `ordinal` reserved on behalf of this node.
    pub fn slot(&self, ordinal: usize) -> Self {
        let mut buf = itoa::Buffer::new();
        let digits = buf.format(ordinal);

        let mut value = String::with_capacity(self.0.len() + digits.len());
        value.push_str(&self.0);
        value.push_str(digits);
        Self(value)
    }

    /// Returns true if `other` lies on or below this node (string-prefix containment).
    pub fn is_prefix_of(&self, other: &str) -> bool {
        other.starts_with(self.0.as_str())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for PathKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::PathKey;

    #[test]
    fn child_concatenates_without_separator() {
        let root = PathKey::root("R");
        let key = root.child("P_e4").child("Pe_e5");
        assert_eq!(key.as_str(), "RP_e4Pe_e5");
        assert!(root.is_prefix_of(key.as_str()));
        assert!(!key.is_prefix_of(root.as_str()));
    }

    #[test]
    fn slot_appends_decimal_ordinal() {
        let key = PathKey::root("R").child("a");
        assert_eq!(key.slot(0).as_str(), "Ra0");
        assert_eq!(key.slot(12).as_str(), "Ra12");
        assert!(key.is_prefix_of(key.slot(3).as_str()));
    }

    #[test]
    fn ordering_is_ordinal() {
        let mut keys = vec![
            PathKey::root("Rb"),
            PathKey::root("RB"),
            PathKey::root("Ra"),
            PathKey::root("R1"),
        ];
        keys.sort();
        let keys = keys.iter().map(PathKey::as_str).collect::<Vec<_>>();
        assert_eq!(keys, vec!["R1", "RB", "Ra", "Rb"]);
    }
}
