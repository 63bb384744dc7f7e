//! Derived hexagrams.
//!
//! Every derivation is a pure function of the current line vector: compute a
//! new [`Lines`] value with the helpers in [`crate::lines`], then rebuild a
//! [`Hexagram`] from it. Derived hexagrams never carry draws.

use crate::hexagram::Hexagram;
use crate::lines::{flip_mask, nuclear_from_pattern, rotate, span_mask, Lines, NuclearWindow};

/// Length of [`Hexagram::story`].
pub const STORY_LEN: usize = 13;

/// Single-line neighbours of a hexagram.
///
/// `antecedents` come from changing a yin line to yang, `consequents` from
/// changing a yang line to yin. Both lists are in bottom-to-top order of the
/// line that changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Flower {
    /// Yin→yang neighbours.
    pub antecedents: Vec<Hexagram>,
    /// Yang→yin neighbours.
    pub consequents: Vec<Hexagram>,
}

impl Flower {
    /// Total number of petals (always six).
    #[must_use]
    pub fn len(&self) -> usize {
        self.antecedents.len() + self.consequents.len()
    }

    /// Always false; a flower has six petals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Hexagram {
    /// Every line changed.
    ///
    /// ```
    /// use iching::Hexagram;
    ///
    /// let h = Hexagram::from_number(1).unwrap();
    /// assert_eq!(h.opposite().name(), "Earth");
    /// ```
    #[must_use]
    pub fn opposite(&self) -> Self {
        Self::from_lines(self.lines().complement())
    }

    /// Lines read top to bottom.
    ///
    /// ```
    /// use iching::Hexagram;
    ///
    /// let h = Hexagram::from_number(3).unwrap();
    /// assert_eq!(h.inverse().number(), 4);
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::from_lines(self.lines().reverse())
    }

    /// Nuclear hexagram for an explicit window.
    #[must_use]
    pub fn nuclear_by(&self, window: NuclearWindow) -> Self {
        Self::from_lines(nuclear_from_pattern(self.lines(), window))
    }

    /// Nuclear hexagram, window `[2,3,4,3,4,5]`.
    #[must_use]
    pub fn nuclear(&self) -> Self {
        self.nuclear_by(NuclearWindow::First)
    }

    /// Second nuclear hexagram, window `[1,2,3,2,3,4]`.
    #[must_use]
    pub fn second_nuclear(&self) -> Self {
        self.nuclear_by(NuclearWindow::Second)
    }

    /// Third nuclear hexagram, window `[3,4,5,4,5,6]`.
    #[must_use]
    pub fn third_nuclear(&self) -> Self {
        self.nuclear_by(NuclearWindow::Third)
    }

    /// Fourth nuclear hexagram, window `[1,2,3,3,4,5]`.
    #[must_use]
    pub fn fourth_nuclear(&self) -> Self {
        self.nuclear_by(NuclearWindow::Fourth)
    }

    /// Fifth nuclear hexagram, window `[2,3,4,4,5,6]`.
    #[must_use]
    pub fn fifth_nuclear(&self) -> Self {
        self.nuclear_by(NuclearWindow::Fifth)
    }

    /// Top line moved to the bottom.
    #[must_use]
    pub fn rotate(&self) -> Self {
        Self::from_lines(rotate(self.lines()))
    }

    /// Rotations starting from `self` until the value repeats.
    ///
    /// The first element is `self`; the repeated terminal state is not
    /// included. The length is 1, 2, 3 or 6.
    ///
    /// ```
    /// use iching::Hexagram;
    ///
    /// assert_eq!(Hexagram::from_number(1).unwrap().cycle().len(), 1);
    /// assert_eq!(Hexagram::from_binary("101010").unwrap().cycle().len(), 2);
    /// assert_eq!(Hexagram::from_binary("100100").unwrap().cycle().len(), 3);
    /// assert_eq!(Hexagram::from_binary("100000").unwrap().cycle().len(), 6);
    /// ```
    #[must_use]
    pub fn cycle(&self) -> Vec<Self> {
        let start = self.decimal_value();
        let mut out = vec![*self];
        let mut next = self.rotate();
        while next.decimal_value() != start {
            out.push(next);
            next = next.rotate();
        }
        out
    }

    /// The six single-line neighbours, split by direction of change.
    #[must_use]
    pub fn flower(&self) -> Flower {
        let lines = self.lines();
        let mut flower = Flower::default();
        for (i, bit) in lines.bits().into_iter().enumerate() {
            let petal = Self::from_lines(flip_single(lines, i));
            if bit == 0 {
                flower.antecedents.push(petal);
            } else {
                flower.consequents.push(petal);
            }
        }
        flower
    }

    /// The thirteen-step story.
    ///
    /// Index 0 is `self`; indices 1..=6 change lines `1..=k` for k = 1..=6;
    /// indices 7..=11 change lines `k..=6` for k = 2..=6; index 12 is `self`
    /// again.
    ///
    /// ```
    /// use iching::Hexagram;
    ///
    /// let h = Hexagram::from_number(1).unwrap();
    /// let story = h.story();
    /// assert_eq!(story.len(), 13);
    /// assert_eq!(story[0], h);
    /// assert_eq!(story[6].name(), "Earth");
    /// assert_eq!(story[12], h);
    /// ```
    #[must_use]
    pub fn story(&self) -> [Self; STORY_LEN] {
        let lines = self.lines();
        core::array::from_fn(|step| match step {
            0 | 12 => *self,
            1..=6 => Self::from_lines(flip_mask(lines, span_mask(1, step))),
            _ => Self::from_lines(flip_mask(lines, span_mask(step - 5, 6))),
        })
    }
}

fn flip_single(lines: Lines, index: usize) -> Lines {
    let mut mask = [false; 6];
    mask[index] = true;
    flip_mask(lines, mask)
}
