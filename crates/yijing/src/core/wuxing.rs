//! The five elements (wuxing) and the transitions between them.
//!
//! The elements sit on the generative cycle
//! earth → metal → water → wood → fire → earth. Every ordered pair of
//! elements is related by exactly one transition, determined by the step
//! distance along that cycle:
//!
//! | Steps | Transition | Reading |
//! |-------|------------|---------|
//! | 0 | neutral  | same element |
//! | 1 | creates  | earth bears metal |
//! | 2 | destroys | earth obstructs water |
//! | 3 | insults  | earth rots wood |
//! | 4 | weakens  | earth smothers fire |

use super::error::DomainError;
use core::fmt;
use core::str::FromStr;

/// One of the five elements.
///
/// # Example
///
/// ```
/// use yijing::{Element, Transition};
///
/// assert_eq!(Element::Wood.creates(), Element::Fire);
/// assert_eq!(Element::Water.transition_to(Element::Fire), Transition::Destroys);
/// assert_eq!("metal".parse::<Element>().ok(), Some(Element::Metal));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Element {
    /// Stabilizing nourishment.
    Earth = 0,
    /// Adaptive flow.
    Water = 1,
    /// Expansive growth.
    Wood = 2,
    /// Transformative energy.
    Fire = 3,
    /// Refining structure.
    Metal = 4,
}

/// Generative cycle order; an element's position drives every relation.
const GENERATIVE: [Element; 5] = [
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
    Element::Fire,
];

impl Element {
    /// All elements in declaration order.
    pub const ALL: [Self; 5] = [Self::Earth, Self::Water, Self::Wood, Self::Fire, Self::Metal];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Earth => "earth",
            Self::Water => "water",
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Metal => "metal",
        }
    }

    /// Looks up an element by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownElement`] for any other string.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnknownElement(name.to_string()))
    }

    /// Emoji used by the explorer.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Earth => "\u{2696}\u{fe0f}",
            Self::Water => "\u{1f4a7}",
            Self::Wood => "\u{1f331}",
            Self::Fire => "\u{1f525}",
            Self::Metal => "\u{2699}\u{fe0f}",
        }
    }

    const fn cycle_position(self) -> usize {
        match self {
            Self::Earth => 0,
            Self::Metal => 1,
            Self::Water => 2,
            Self::Wood => 3,
            Self::Fire => 4,
        }
    }

    const fn step(self, steps: usize) -> Self {
        GENERATIVE[(self.cycle_position() + steps) % 5]
    }

    /// The element this one generates (metal collects water, ...).
    #[must_use]
    pub const fn creates(self) -> Self {
        self.step(1)
    }

    /// The element this one controls (water extinguishes fire, ...).
    #[must_use]
    pub const fn destroys(self) -> Self {
        self.step(2)
    }

    /// The element this one insults (wood dulls metal, ...).
    #[must_use]
    pub const fn insults(self) -> Self {
        self.step(3)
    }

    /// The element this one weakens (fire burns wood, ...).
    #[must_use]
    pub const fn weakens(self) -> Self {
        self.step(4)
    }

    /// The transition from `self` to `other`. Total over all 25 pairs.
    #[must_use]
    pub const fn transition_to(self, other: Self) -> Transition {
        match (other.cycle_position() + 5 - self.cycle_position()) % 5 {
            0 => Transition::Neutral,
            1 => Transition::Creates,
            2 => Transition::Destroys,
            3 => Transition::Insults,
            _ => Transition::Weakens,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Relation from one element to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Transition {
    /// Same element.
    Neutral,
    /// Generative cycle.
    Creates,
    /// Controlling cycle.
    Destroys,
    /// Reverse generative cycle.
    Weakens,
    /// Reverse controlling cycle.
    Insults,
}

impl Transition {
    /// All transitions.
    pub const ALL: [Self; 5] = [
        Self::Neutral,
        Self::Creates,
        Self::Destroys,
        Self::Weakens,
        Self::Insults,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Creates => "creates",
            Self::Destroys => "destroys",
            Self::Weakens => "weakens",
            Self::Insults => "insults",
        }
    }

    /// Arrow glyph: suppression points down, rebellion up.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Neutral => '↔',
            Self::Creates => '➡',
            Self::Weakens => '↩',
            Self::Destroys => '⬇',
            Self::Insults => '⬆',
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generative_cycle() {
        assert_eq!(Element::Earth.creates(), Element::Metal);
        assert_eq!(Element::Metal.creates(), Element::Water);
        assert_eq!(Element::Water.creates(), Element::Wood);
        assert_eq!(Element::Wood.creates(), Element::Fire);
        assert_eq!(Element::Fire.creates(), Element::Earth);

        let mut e = Element::Earth;
        for _ in 0..5 {
            e = e.creates();
        }
        assert_eq!(e, Element::Earth);
    }

    #[test]
    fn test_destructive_cycle() {
        assert_eq!(Element::Earth.destroys(), Element::Water);
        assert_eq!(Element::Water.destroys(), Element::Fire);
        assert_eq!(Element::Fire.destroys(), Element::Metal);
        assert_eq!(Element::Metal.destroys(), Element::Wood);
        assert_eq!(Element::Wood.destroys(), Element::Earth);
    }

    #[test]
    fn test_reverse_cycles() {
        assert_eq!(Element::Earth.weakens(), Element::Fire);
        assert_eq!(Element::Fire.weakens(), Element::Wood);
        assert_eq!(Element::Water.weakens(), Element::Metal);
        assert_eq!(Element::Earth.insults(), Element::Wood);
        assert_eq!(Element::Wood.insults(), Element::Metal);
        assert_eq!(Element::Metal.insults(), Element::Fire);
        assert_eq!(Element::Water.insults(), Element::Earth);
    }

    #[test]
    fn test_transition_matches_cycles() {
        for a in Element::ALL {
            assert_eq!(a.transition_to(a), Transition::Neutral);
            assert_eq!(a.transition_to(a.creates()), Transition::Creates);
            assert_eq!(a.transition_to(a.destroys()), Transition::Destroys);
            assert_eq!(a.transition_to(a.weakens()), Transition::Weakens);
            assert_eq!(a.transition_to(a.insults()), Transition::Insults);
        }
    }

    #[test]
    fn test_transition_is_total_and_balanced() {
        // each non-neutral transition occurs exactly 5 times over the 25 pairs
        let mut counts = [0usize; 5];
        for a in Element::ALL {
            for b in Element::ALL {
                counts[a.transition_to(b) as usize] += 1;
            }
        }
        assert_eq!(counts, [5, 5, 5, 5, 5]);
    }

    #[test]
    fn test_names_roundtrip() {
        for e in Element::ALL {
            assert_eq!(Element::from_name(e.name()), Ok(e));
            assert_eq!(e.name().to_uppercase().parse::<Element>(), Ok(e));
        }
        assert!(matches!(
            Element::from_name("aether"),
            Err(DomainError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Transition::Neutral.symbol(), '↔');
        assert_eq!(Transition::Destroys.symbol(), '⬇');
        assert_eq!(Element::Water.emoji(), "💧");
    }
}
