//! Secret masking.
//!
//! Replaces the middle of a secret with a fixed `...` placeholder, keeping
//! the head and tail visible. Secrets short enough that the reveal would
//! cover them entirely are returned unchanged: masking them would disclose
//! nothing the mask itself does not.

use crate::policy::MaskPolicy;

/// Placeholder inserted between the revealed head and tail.
pub const MASK_SEPARATOR: &str = "...";

/// Applies the head/tail reveal rule from a [`MaskPolicy`].
#[derive(Debug, Clone, Default)]
pub struct Masker {
    policy: MaskPolicy,
}

impl Masker {
    /// Create a masker from a policy.
    pub fn new(policy: MaskPolicy) -> Self {
        Self { policy }
    }

    /// Mask a secret.
    ///
    /// Counts characters, not bytes, so multi-byte input never splits a
    /// code point. For lengths just over the reveal limit the head and tail
    /// overlap; that is accepted as-is.
    pub fn mask(&self, secret: &str) -> String {
        let chars: Vec<char> = secret.chars().collect();
        if chars.len() <= self.policy.reveal_limit() {
            return secret.to_string();
        }

        let head: String = chars[..self.policy.keep_head].iter().collect();
        let tail: String = chars[chars.len() - self.policy.keep_tail..].iter().collect();
        format!("{}{}{}", head, MASK_SEPARATOR, tail)
    }
}
