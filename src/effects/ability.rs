//! The closed ability vocabulary and rules-text parsing.
//!
//! Card text is author-supplied natural language, not a DSL. Behavior is
//! extracted by case-insensitive keyword detection into a small closed set
//! of tagged directives, parsed ONCE when the card definition is built.
//! Resolution never re-parses text, which keeps the effect set statically
//! enumerable and testable.
//!
//! Each keyword is evaluated independently; a card whose text matches
//! several keywords carries all of the corresponding abilities. Text with
//! no keyword (the catalog's literal "No ability." default) parses to an
//! empty list.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Default amount for a `Heal` directive without a trailing count.
pub const DEFAULT_HEAL: i32 = 3;
/// Default amount for a `Damage` directive without a trailing count.
pub const DEFAULT_DAMAGE: i32 = 3;
/// Default count for a `Draw` directive without a trailing count.
pub const DEFAULT_DRAW: usize = 1;

/// Inline storage for parsed abilities; almost all cards carry 0-2.
pub type AbilityList = SmallVec<[Ability; 2]>;

/// An atomic card directive.
///
/// `Draw`, `Heal`, `Damage`, and `Buff` are applied by the effect
/// resolver when the card resolves. `Haste` is consumed at unit creation
/// time instead: it clears the summoning-sickness flag on the new board
/// unit and is a no-op during resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    /// Caster draws `count` cards.
    Draw { count: usize },
    /// Caster's health increases by `amount` (no upper cap).
    Heal { amount: i32 },
    /// Opponent's health decreases by `amount`, floored at 0.
    Damage { amount: i32 },
    /// The source unit gains `attack`/`health` (only fires when a source
    /// unit instance exists, i.e. on UNIT/ARTIFACT plays).
    Buff { attack: i32, health: i32 },
    /// The new unit enters the board without summoning sickness.
    Haste,
}

/// Parse free rules text into the closed ability vocabulary.
///
/// Matching is case-insensitive substring detection. A directive's
/// magnitude is the first integer appearing AFTER its keyword; absent
/// that, the directive default applies.
///
/// ## Example
///
/// ```
/// use duelforge::effects::{parse_rules_text, Ability};
///
/// let abilities = parse_rules_text("Draw 2 cards.");
/// assert_eq!(abilities.as_slice(), &[Ability::Draw { count: 2 }]);
///
/// assert!(parse_rules_text("No ability.").is_empty());
/// ```
#[must_use]
pub fn parse_rules_text(text: &str) -> AbilityList {
    let lower = text.to_lowercase();
    let mut abilities = AbilityList::new();

    if let Some(pos) = lower.find("draw") {
        let count = trailing_number(&lower[pos + "draw".len()..])
            .map_or(DEFAULT_DRAW, |n| n as usize);
        abilities.push(Ability::Draw { count });
    }

    if let Some(pos) = lower.find("heal") {
        let amount = trailing_number(&lower[pos + "heal".len()..]).unwrap_or(DEFAULT_HEAL);
        abilities.push(Ability::Heal { amount });
    }

    if let Some(pos) = lower.find("damage") {
        let amount = trailing_number(&lower[pos + "damage".len()..]).unwrap_or(DEFAULT_DAMAGE);
        abilities.push(Ability::Damage { amount });
    }

    if lower.contains("buff") || lower.contains("grow") {
        abilities.push(Ability::Buff { attack: 1, health: 1 });
    }

    if lower.contains("haste") {
        abilities.push(Ability::Haste);
    }

    abilities
}

/// Find the first contiguous digit run in `rest` and parse it.
///
/// Returns `None` when no digits appear or the run overflows an `i32`.
fn trailing_number(rest: &str) -> Option<i32> {
    let start = rest.find(|c: char| c.is_ascii_digit())?;
    let digits: String = rest[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
