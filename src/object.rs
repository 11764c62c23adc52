//! Host engine object model.
//!
//! The game engine only hands out internal identifiers. These types carry
//! exactly what the classifier needs from each engine object: its declared
//! name and, for materials and item stacks, placeability and the legacy
//! data value. Host code can wrap its own objects by implementing
//! [`Translatable`].

use std::fmt;

/// A raw material (e.g. `STONE`, `CLOCK`, legacy `WOOL`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Material {
    name: String,
    block: bool,
}

impl Material {
    /// Create a material from its engine name and whether it can be placed.
    pub fn new(name: impl Into<String>, block: bool) -> Self {
        Self {
            name: name.into(),
            block,
        }
    }

    /// Shorthand for a placeable material.
    pub fn block(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Shorthand for a material that cannot be placed.
    pub fn item(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the material can be placed in the world.
    pub fn is_block(&self) -> bool {
        self.block
    }
}

/// A stack of a material carrying a legacy data value (variant index).
///
/// The data value only matters on legacy engines, where one material name
/// covers several variants (e.g. `WOOL` with data `1` is orange wool).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemStack {
    material: Material,
    data: u16,
}

impl ItemStack {
    pub fn new(material: Material) -> Self {
        Self::with_data(material, 0)
    }

    pub fn with_data(material: Material, data: u16) -> Self {
        Self { material, data }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn data(&self) -> u16 {
        self.data
    }
}

impl From<Material> for ItemStack {
    fn from(material: Material) -> Self {
        ItemStack::new(material)
    }
}

macro_rules! declared_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Name as declared by the engine.
            pub fn name(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

declared_name!(
    /// A status effect as declared by the engine (e.g. `SLOW`, `INCREASE_DAMAGE`).
    PotionEffectType
);
declared_name!(
    /// An entity type (e.g. `ZOMBIE`, `ARMOR_STAND`).
    EntityType
);
declared_name!(
    /// A biome (e.g. `PLAINS`, `DEEP_OCEAN`).
    Biome
);
declared_name!(
    /// A villager profession (e.g. `ARMORER`, `NONE`).
    VillagerProfession
);
declared_name!(
    /// An enchantment as declared by the engine (e.g. `DAMAGE_ALL`).
    Enchantment
);
declared_name!(
    /// A player statistic (e.g. `DEATHS`, `MOB_KILLS`).
    Statistic
);

/// Borrowed view of an engine object, one variant per object kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectRef<'a> {
    ItemStack(&'a ItemStack),
    Material(&'a Material),
    PotionEffectType(&'a str),
    EntityType(&'a str),
    Biome(&'a str),
    VillagerProfession(&'a str),
    Enchantment(&'a str),
    Statistic(&'a str),
}

impl<'a> ObjectRef<'a> {
    /// The engine's own name for the object; the material name for stacks.
    pub fn declared_name(&self) -> &'a str {
        match *self {
            ObjectRef::ItemStack(stack) => stack.material().name(),
            ObjectRef::Material(material) => material.name(),
            ObjectRef::PotionEffectType(name)
            | ObjectRef::EntityType(name)
            | ObjectRef::Biome(name)
            | ObjectRef::VillagerProfession(name)
            | ObjectRef::Enchantment(name)
            | ObjectRef::Statistic(name) => name,
        }
    }
}

/// Anything the classifier can look at.
///
/// Returning `None` means the object belongs to no category; translating
/// it yields no result in every language.
pub trait Translatable {
    fn object_ref(&self) -> Option<ObjectRef<'_>>;
}

impl<'a> Translatable for ObjectRef<'a> {
    fn object_ref(&self) -> Option<ObjectRef<'_>> {
        Some(*self)
    }
}

impl<T: Translatable + ?Sized> Translatable for &T {
    fn object_ref(&self) -> Option<ObjectRef<'_>> {
        (**self).object_ref()
    }
}

impl Translatable for ItemStack {
    fn object_ref(&self) -> Option<ObjectRef<'_>> {
        Some(ObjectRef::ItemStack(self))
    }
}

impl Translatable for Material {
    fn object_ref(&self) -> Option<ObjectRef<'_>> {
        Some(ObjectRef::Material(self))
    }
}

impl Translatable for PotionEffectType {
    fn object_ref(&self) -> Option<ObjectRef<'_>> {
        Some(ObjectRef::PotionEffectType(self.name()))
    }
}

impl Translatable for EntityType {
    fn object_ref(&self) -> Option<ObjectRef<'_>> {
        Some(ObjectRef::EntityType(self.name()))
    }
}

impl Translatable for Biome {
    fn object_ref(&self) -> Option<ObjectRef<'_>> {
        Some(ObjectRef::Biome(self.name()))
    }
}

impl Translatable for VillagerProfession {
    fn object_ref(&self) -> Option<ObjectRef<'_>> {
        Some(ObjectRef::VillagerProfession(self.name()))
    }
}

impl Translatable for Enchantment {
    fn object_ref(&self) -> Option<ObjectRef<'_>> {
        Some(ObjectRef::Enchantment(self.name()))
    }
}

impl Translatable for Statistic {
    fn object_ref(&self) -> Option<ObjectRef<'_>> {
        Some(ObjectRef::Statistic(self.name()))
    }
}
