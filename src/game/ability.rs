//! Hero Abilities
//!
//! Every hero has four slots. Slot cost, cooldown and range are shared by
//! all archetypes; the effect depends on the archetype:
//!
//! | Archetype | Effect |
//! |-----------|--------|
//! | Tank      | Damage (A1, A3) or a timed armor buff (A2, Ult) |
//! | Fighter, Mage, Marksman | Damage to enemies in range |
//! | Support   | Healing to allies in range, caster included |

use serde::{Serialize, Deserialize};

use crate::game::combat::{damage_hero, Kill};
use crate::game::entity::Spatial;
use crate::game::events::KillCredit;
use crate::game::hero::Hero;
use crate::game::stats::Archetype;

/// Ability slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AbilitySlot {
    Ability1 = 0,
    Ability2 = 1,
    Ability3 = 2,
    Ultimate = 3,
}

impl AbilitySlot {
    /// All slots in order.
    pub const ALL: [AbilitySlot; 4] = [
        AbilitySlot::Ability1,
        AbilitySlot::Ability2,
        AbilitySlot::Ability3,
        AbilitySlot::Ultimate,
    ];

    /// Slot by index (0-3).
    pub fn from_index(index: usize) -> Option<AbilitySlot> {
        Self::ALL.get(index).copied()
    }

    /// Cost, cooldown and range.
    pub fn spec(self) -> AbilitySpec {
        let (mana_cost, cooldown, range) = match self {
            AbilitySlot::Ability1 => (50.0, 8.0, 300.0),
            AbilitySlot::Ability2 => (70.0, 12.0, 250.0),
            AbilitySlot::Ability3 => (90.0, 15.0, 400.0),
            AbilitySlot::Ultimate => (150.0, 60.0, 500.0),
        };
        AbilitySpec {
            mana_cost,
            cooldown,
            range,
        }
    }
}

/// Shared slot parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbilitySpec {
    pub mana_cost: f64,
    /// Seconds
    pub cooldown: f64,
    pub range: f64,
}

/// What a cast does.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Mitigated damage to every alive enemy hero in range
    Damage(f64),
    /// Healing to every alive allied hero in range, caster included
    Heal(f64),
    /// Temporary armor on the caster
    ArmorBuff { amount: f64, duration: f64 },
}

/// Effect of `slot` for `hero`, scaled by its current stats.
pub fn effect_for(hero: &Hero, slot: AbilitySlot) -> AbilityEffect {
    use AbilityEffect::*;
    use AbilitySlot::*;

    let ad = hero.attack_damage;
    let ap = hero.ability_power;
    let armor = hero.armor();

    match (hero.archetype, slot) {
        (Archetype::Tank, Ability1) => Damage(40.0 + 0.5 * armor),
        (Archetype::Tank, Ability2) => ArmorBuff { amount: 20.0, duration: 5.0 },
        (Archetype::Tank, Ability3) => Damage(100.0 + 0.4 * armor + 0.3 * ad),
        (Archetype::Tank, Ultimate) => ArmorBuff { amount: 50.0, duration: 8.0 },

        (Archetype::Fighter, Ability1) => Damage(80.0 + 0.6 * ad),
        (Archetype::Fighter, Ability2) => Damage(120.0 + 0.5 * ad),
        (Archetype::Fighter, Ability3) => Damage(150.0 + 0.7 * ad),
        (Archetype::Fighter, Ultimate) => Damage(250.0 + 1.2 * ad),

        (Archetype::Mage, Ability1) => Damage(100.0 + 0.7 * ap),
        (Archetype::Mage, Ability2) => Damage(80.0 + 0.6 * ap),
        (Archetype::Mage, Ability3) => Damage(130.0 + 0.9 * ap),
        (Archetype::Mage, Ultimate) => Damage(300.0 + 1.5 * ap),

        (Archetype::Marksman, Ability1) => Damage(90.0 + 0.8 * ad),
        (Archetype::Marksman, Ability2) => Damage(60.0 + 0.4 * ad),
        (Archetype::Marksman, Ability3) => Damage(110.0 + 0.6 * ad),
        (Archetype::Marksman, Ultimate) => Damage(220.0 + 1.0 * ad),

        (Archetype::Support, Ability1) => Heal(80.0 + 0.6 * ap),
        (Archetype::Support, Ability2) => Heal(60.0 + 0.5 * ap),
        (Archetype::Support, Ability3) => Heal(100.0 + 0.7 * ap),
        (Archetype::Support, Ultimate) => Heal(200.0 + 1.0 * ap),
    }
}

/// Result of a successful cast.
#[derive(Clone, Debug, PartialEq)]
pub struct CastOutcome {
    pub slot: AbilitySlot,
    pub effect: AbilityEffect,
    /// Heroes damaged, healed or buffed
    pub affected: u32,
    /// Deaths caused by the cast, credited to the caster
    pub kills: Vec<Kill>,
}

/// Check whether `heroes[caster]` could cast `slot` right now.
pub fn can_cast(hero: &Hero, slot: AbilitySlot) -> bool {
    hero.alive && hero.ability_ready(slot) && hero.mana >= slot.spec().mana_cost
}

/// Cast `slot` for `heroes[caster]` against every hero in the slice.
///
/// Returns `None` with no state change when the caster is dead, the slot is
/// cooling down or mana is short. Otherwise deducts mana, starts the
/// cooldown and applies the effect.
pub fn cast(heroes: &mut [Hero], caster: usize, slot: AbilitySlot) -> Option<CastOutcome> {
    let spec = slot.spec();

    let (effect, position, team, caster_id) = {
        let hero = heroes.get_mut(caster)?;
        if !can_cast(hero, slot) {
            return None;
        }
        let effect = effect_for(hero, slot);
        hero.spend_mana(spec.mana_cost);
        hero.cooldowns[slot as usize] = spec.cooldown;
        (effect, hero.position(), hero.team(), hero.id())
    };

    let mut affected = 0;
    let mut kills = Vec::new();

    match effect {
        AbilityEffect::Damage(amount) => {
            // Collect targets first, then apply
            let targets: Vec<usize> = heroes
                .iter()
                .enumerate()
                .filter(|(_, h)| h.alive && h.team().is_enemy_of(team))
                .filter(|(_, h)| h.distance_to_point(position) <= spec.range)
                .map(|(idx, _)| idx)
                .collect();

            for target in targets {
                affected += 1;
                if let Some(kill) = damage_hero(heroes, target, amount, true, KillCredit::Hero(caster_id)) {
                    kills.push(kill);
                }
            }
        }
        AbilityEffect::Heal(amount) => {
            for hero in heroes.iter_mut() {
                if hero.alive && hero.team() == team && hero.distance_to_point(position) <= spec.range {
                    hero.heal(amount);
                    affected += 1;
                }
            }
        }
        AbilityEffect::ArmorBuff { amount, duration } => {
            heroes[caster].add_armor_modifier(amount, duration);
            affected = 1;
        }
    }

    Some(CastOutcome {
        slot,
        effect,
        affected,
        kills,
    })
}
