use std::fmt;

use serde::Serialize;

/// Periodic-table category of an element. Plays the role of a suit:
/// five cards of one group make a flush.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementGroup {
    /// Alkali metals (Li, Na, K)
    Alkali,
    /// Alkaline earth metals (Be, Mg, Ca)
    AlkalineEarth,
    /// Nonmetals (H, B, C, N, O, F, Al, Si, P, S, Cl)
    Nonmetal,
    /// Noble gases (He, Ne, Ar)
    NobleGas,
}

impl ElementGroup {
    pub fn name(&self) -> &'static str {
        match self {
            ElementGroup::Alkali => "Alkali metal",
            ElementGroup::AlkalineEarth => "Alkaline earth metal",
            ElementGroup::Nonmetal => "Nonmetal",
            ElementGroup::NobleGas => "Noble gas",
        }
    }
}

pub fn all_groups() -> [ElementGroup; 4] {
    [
        ElementGroup::Alkali,
        ElementGroup::AlkalineEarth,
        ElementGroup::Nonmetal,
        ElementGroup::NobleGas,
    ]
}

/// Static reference data for one element. The face value of a card is its
/// atomic number; the group is its suit.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Element {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u8,
    pub group: ElementGroup,
    pub period: u8,
}

const fn element(
    symbol: &'static str,
    name: &'static str,
    atomic_number: u8,
    group: ElementGroup,
    period: u8,
) -> Element {
    Element {
        symbol,
        name,
        atomic_number,
        group,
        period,
    }
}

/// Highest atomic number in play. Atomic numbers run 1..=MAX_ATOMIC_NUMBER.
pub const MAX_ATOMIC_NUMBER: u8 = 20;

/// Number of copies of each element in a deck.
pub const COPIES_PER_ELEMENT: u8 = 4;

/// The twenty elements in atomic-number order; `ELEMENTS[n - 1]` has atomic number `n`.
pub static ELEMENTS: [Element; 20] = [
    element("H", "Hydrogen", 1, ElementGroup::Nonmetal, 1),
    element("He", "Helium", 2, ElementGroup::NobleGas, 1),
    element("Li", "Lithium", 3, ElementGroup::Alkali, 2),
    element("Be", "Beryllium", 4, ElementGroup::AlkalineEarth, 2),
    element("B", "Boron", 5, ElementGroup::Nonmetal, 2),
    element("C", "Carbon", 6, ElementGroup::Nonmetal, 2),
    element("N", "Nitrogen", 7, ElementGroup::Nonmetal, 2),
    element("O", "Oxygen", 8, ElementGroup::Nonmetal, 2),
    element("F", "Fluorine", 9, ElementGroup::Nonmetal, 2),
    element("Ne", "Neon", 10, ElementGroup::NobleGas, 2),
    element("Na", "Sodium", 11, ElementGroup::Alkali, 3),
    element("Mg", "Magnesium", 12, ElementGroup::AlkalineEarth, 3),
    element("Al", "Aluminium", 13, ElementGroup::Nonmetal, 3),
    element("Si", "Silicon", 14, ElementGroup::Nonmetal, 3),
    element("P", "Phosphorus", 15, ElementGroup::Nonmetal, 3),
    element("S", "Sulfur", 16, ElementGroup::Nonmetal, 3),
    element("Cl", "Chlorine", 17, ElementGroup::Nonmetal, 3),
    element("Ar", "Argon", 18, ElementGroup::NobleGas, 3),
    element("K", "Potassium", 19, ElementGroup::Alkali, 4),
    element("Ca", "Calcium", 20, ElementGroup::AlkalineEarth, 4),
];

pub fn element_by_number(atomic_number: u8) -> Option<&'static Element> {
    if atomic_number == 0 {
        return None;
    }
    ELEMENTS.get(atomic_number as usize - 1)
}

/// Case-insensitive symbol lookup (`"he"`, `"He"` and `"HE"` all find helium).
pub fn element_by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS
        .iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(symbol.trim()))
}

/// Identifies one physical card: the element plus which of its four copies.
/// Renders as `<symbol>-<copy>`, e.g. `He-3`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub struct CardId {
    pub atomic_number: u8,
    pub copy: u8,
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = element_by_number(self.atomic_number)
            .map(|e| e.symbol)
            .unwrap_or("?");
        write!(f, "{}-{}", symbol, self.copy)
    }
}

/// A single card: a reference into the element table plus a copy number
/// that tells the four identical faces apart.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Card {
    pub element: &'static Element,
    /// Copy number within the deck (1..=4)
    pub copy: u8,
}

impl Card {
    /// Returns `None` for atomic numbers outside 1..=20.
    pub fn new(atomic_number: u8, copy: u8) -> Option<Card> {
        element_by_number(atomic_number).map(|element| Card { element, copy })
    }

    pub fn id(&self) -> CardId {
        CardId {
            atomic_number: self.element.atomic_number,
            copy: self.copy,
        }
    }

    pub fn atomic_number(&self) -> u8 {
        self.element.atomic_number
    }

    pub fn group(&self) -> ElementGroup {
        self.element.group
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.element.symbol, self.element.atomic_number)
    }
}
