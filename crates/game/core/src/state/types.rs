//! Foundational state types.
//!
//! Identifiers are string newtypes: content is authored by hand in data
//! files, so ids stay human-readable (`"sword"`, `"barracks"`) instead of
//! numeric handles.

use std::collections::BTreeMap;
use std::fmt;

/// Unique identifier for a hero in the roster.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct HeroId(pub String);

/// Identifier for an item definition in the catalog.
///
/// Upgrade resources (e.g. `gold`) are items too; they live in the same
/// inventory as equipment.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemId(pub String);

/// Identifier for a base building.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BuildingId(pub String);

/// Identifier for a predefined enemy encounter.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EncounterId(pub String);

macro_rules! impl_string_id {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $ty {
                fn from(id: &str) -> Self {
                    Self(id.to_owned())
                }
            }
        )*
    };
}

impl_string_id!(HeroId, ItemId, BuildingId, EncounterId);

/// Hero archetype.
///
/// Currently cosmetic; class-based equip restrictions are an extension
/// point on [`crate::env::ItemOracle::can_equip`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HeroClass {
    #[default]
    Warrior,
    Mage,
    Ranger,
    Cleric,
}

/// Equipment category; a hero holds at most one item per slot.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Accessory,
}

/// The three combat stats. Stored values are non-negative; signed deltas
/// are expressed via [`StatModifiers`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl BaseStats {
    pub const fn new(hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            hp,
            attack,
            defense,
        }
    }

    /// Applies signed modifiers, clamping each stat at zero.
    pub fn with_modifiers(self, modifiers: StatModifiers) -> Self {
        fn apply(base: u32, delta: i32) -> u32 {
            (i64::from(base) + i64::from(delta)).max(0) as u32
        }
        Self {
            hp: apply(self.hp, modifiers.hp),
            attack: apply(self.attack, modifiers.attack),
            defense: apply(self.defense, modifiers.defense),
        }
    }
}

/// Signed stat deltas from items, level bonuses, or base effects.
///
/// Never stored on a hero; always recomputed from equipment and level when
/// effective stats are needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct StatModifiers {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
}

impl StatModifiers {
    pub const fn new(hp: i32, attack: i32, defense: i32) -> Self {
        Self {
            hp,
            attack,
            defense,
        }
    }
}

impl std::ops::Add for StatModifiers {
    type Output = StatModifiers;

    fn add(self, rhs: StatModifiers) -> StatModifiers {
        StatModifiers {
            hp: self.hp + rhs.hp,
            attack: self.attack + rhs.attack,
            defense: self.defense + rhs.defense,
        }
    }
}

impl std::ops::AddAssign for StatModifiers {
    fn add_assign(&mut self, rhs: StatModifiers) {
        *self = *self + rhs;
    }
}

/// What a hero currently has equipped, one optional item per slot.
///
/// Slots reference catalog items by id; the owned copies sit in the shared
/// [`Inventory`] until equipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct Equipment {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub weapon: Option<ItemId>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub armor: Option<ItemId>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub accessory: Option<ItemId>,
}

impl Equipment {
    /// Creates empty equipment (all slots free).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the item equipped in `slot`, if any.
    pub fn get(&self, slot: EquipSlot) -> Option<&ItemId> {
        self.slot(slot).as_ref()
    }

    /// Equips `item` into `slot`, returning the displaced item if any.
    pub fn equip(&mut self, slot: EquipSlot, item: ItemId) -> Option<ItemId> {
        self.slot_mut(slot).replace(item)
    }

    /// Clears `slot`, returning the previously equipped item if any.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<ItemId> {
        self.slot_mut(slot).take()
    }

    /// Iterates over occupied slots.
    pub fn equipped(&self) -> impl Iterator<Item = (EquipSlot, &ItemId)> {
        [
            (EquipSlot::Weapon, &self.weapon),
            (EquipSlot::Armor, &self.armor),
            (EquipSlot::Accessory, &self.accessory),
        ]
        .into_iter()
        .filter_map(|(slot, item)| item.as_ref().map(|id| (slot, id)))
    }

    fn slot(&self, slot: EquipSlot) -> &Option<ItemId> {
        match slot {
            EquipSlot::Weapon => &self.weapon,
            EquipSlot::Armor => &self.armor,
            EquipSlot::Accessory => &self.accessory,
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<ItemId> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Accessory => &mut self.accessory,
        }
    }
}

/// A member of the player's roster.
///
/// Heroes are created at new-game time or loaded from the save file, and
/// are retired via `is_active = false` rather than deleted.
///
/// Invariant: `current_xp` stays below the XP threshold for `level`, except
/// at the top defined level where XP accumulates without further leveling.
/// [`crate::stats::add_experience`] is the only place that advances levels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub class: HeroClass,
    pub level: u32,
    pub current_xp: u32,
    pub base_stats: BaseStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipment: Equipment,
    pub is_active: bool,
}

impl Hero {
    /// Creates a fresh level-1 hero with empty equipment, flagged active.
    pub fn new(id: HeroId, name: impl Into<String>, class: HeroClass, base_stats: BaseStats) -> Self {
        Self {
            id,
            name: name.into(),
            class,
            level: 1,
            current_xp: 0,
            base_stats,
            equipment: Equipment::empty(),
            is_active: true,
        }
    }
}

/// Owned item counts, keyed by item id.
///
/// Counts are unsigned by construction; removal refuses to go below zero.
/// Zero-count entries are dropped so equality (and the save file) stays
/// canonical.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Inventory {
    items: BTreeMap<ItemId, u32>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Owned count for `item`; zero for anything not present.
    pub fn count(&self, item: &ItemId) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Adds `quantity` of `item`.
    pub fn add(&mut self, item: ItemId, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.items.entry(item).or_insert(0) += quantity;
    }

    /// Removes `quantity` of `item`. Returns false, without mutating,
    /// if fewer than `quantity` are owned.
    pub fn remove(&mut self, item: &ItemId, quantity: u32) -> bool {
        let Some(count) = self.items.get_mut(item) else {
            return quantity == 0;
        };
        if *count < quantity {
            return false;
        }
        *count -= quantity;
        if *count == 0 {
            self.items.remove(item);
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.items.iter().map(|(id, count)| (id, *count))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Building levels for the base, keyed by building id.
///
/// Levels start at 0 and only ever increase, one step per paid upgrade.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BaseStatus {
    levels: BTreeMap<BuildingId, u32>,
}

impl BaseStatus {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Current level of `building`; unbuilt buildings are level 0.
    pub fn level(&self, building: &BuildingId) -> u32 {
        self.levels.get(building).copied().unwrap_or(0)
    }

    /// Raises `building` by exactly one level, returning the new level.
    ///
    /// Affordability is the caller's concern; see [`crate::base::apply_upgrade`].
    pub fn promote(&mut self, building: &BuildingId) -> u32 {
        let level = self.levels.entry(building.clone()).or_insert(0);
        *level += 1;
        *level
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BuildingId, u32)> {
        self.levels.iter().map(|(id, level)| (id, *level))
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
