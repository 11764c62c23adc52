//! Translation categories and object classification.
//!
//! Every translatable engine object falls into one [`Category`], and each
//! category owns a translation key namespace (`block.minecraft.`,
//! `effect.minecraft.`, ...). [`classify`] turns an object into the full
//! namespaced key used for lookups.

use crate::compat::{canonical_effect_suffix, canonical_enchantment_suffix, LegacyTable};
use crate::error::{Error, Result};
use crate::object::{Material, ObjectRef, Translatable};

/// Categories available for translations, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Item stacks that can be placed (stone, painting, banner).
    Block,
    /// Item stacks that cannot be placed (emerald, iron sword, minecarts).
    Item,
    /// Raw materials, placeable or not.
    Material,
    /// Status effects (speed, instant health, poison).
    PotionEffectType,
    /// Entities (arrow, painting, every mob).
    EntityType,
    Biome,
    VillagerProfession,
    Enchantment,
    /// Player statistics (deaths, mob kills, jump).
    Statistic,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Category; 9] = [
        Category::Block,
        Category::Item,
        Category::Material,
        Category::PotionEffectType,
        Category::EntityType,
        Category::Biome,
        Category::VillagerProfession,
        Category::Enchantment,
        Category::Statistic,
    ];

    /// Translation key prefix for this category.
    pub fn namespace(&self) -> &'static str {
        match self {
            Category::Block => "block.minecraft.",
            Category::Item => "item.minecraft.",
            Category::Material => "item.minecraft.",
            Category::PotionEffectType => "effect.minecraft.",
            Category::EntityType => "entity.minecraft.",
            Category::Biome => "biome.minecraft.",
            Category::VillagerProfession => "entity.minecraft.villager.",
            Category::Enchantment => "enchantment.minecraft.",
            Category::Statistic => "stat.minecraft.",
        }
    }

    /// Whether the engine name has to be rewritten before it becomes a key.
    pub fn needs_normalization(&self) -> bool {
        matches!(
            self,
            Category::Block
                | Category::Item
                | Category::Material
                | Category::PotionEffectType
                | Category::Enchantment
        )
    }

    /// Whether an object is of the kind this category classifies.
    pub fn matches(&self, object: &ObjectRef<'_>) -> bool {
        match self {
            Category::Block | Category::Item => matches!(object, ObjectRef::ItemStack(_)),
            Category::Material => matches!(object, ObjectRef::Material(_)),
            Category::PotionEffectType => matches!(object, ObjectRef::PotionEffectType(_)),
            Category::EntityType => matches!(object, ObjectRef::EntityType(_)),
            Category::Biome => matches!(object, ObjectRef::Biome(_)),
            Category::VillagerProfession => matches!(object, ObjectRef::VillagerProfession(_)),
            Category::Enchantment => matches!(object, ObjectRef::Enchantment(_)),
            Category::Statistic => matches!(object, ObjectRef::Statistic(_)),
        }
    }

    /// Every namespace in declaration order.
    pub fn all_namespaces() -> impl Iterator<Item = &'static str> {
        Category::ALL.into_iter().map(|category| category.namespace())
    }

    /// Derive the namespaced key of an object this category matched.
    fn namespaced_key(&self, object: &ObjectRef<'_>, legacy: Option<&LegacyTable>) -> Result<String> {
        if self.needs_normalization() {
            match *object {
                ObjectRef::ItemStack(stack) => {
                    let material = stack.material();
                    let id = match legacy {
                        Some(table) => table.modern_identifier_for(material.name(), stack.data()),
                        None => material.name(),
                    };
                    return Ok(key(placement_namespace(material), id));
                }
                ObjectRef::Material(material) => {
                    let id = legacy.map_or(material.name(), |table| {
                        table.modern_identifier_for(material.name(), 0)
                    });
                    return Ok(key(placement_namespace(material), id));
                }
                ObjectRef::PotionEffectType(name) => {
                    let suffix = canonical_effect_suffix(name)
                        .ok_or_else(|| Error::UnknownEffect(name.to_string()))?;
                    return Ok(key(Category::PotionEffectType.namespace(), suffix));
                }
                ObjectRef::Enchantment(name) => {
                    let suffix = canonical_enchantment_suffix(name)
                        .ok_or_else(|| Error::UnknownEnchantment(name.to_string()))?;
                    return Ok(key(Category::Enchantment.namespace(), suffix));
                }
                _ => {}
            }
        }
        Ok(key(self.namespace(), object.declared_name()))
    }
}

/// A classified object: the category it fell into and its lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub key: String,
}

/// Classify an object and derive its namespaced key.
///
/// `legacy` carries the legacy identifier table and must be `Some` only
/// when the engine uses the legacy scheme.
///
/// # Returns
/// * `Ok(Some(_))` for objects of a known kind
/// * `Ok(None)` for objects that match no category
/// * `Err` when the engine declared an effect or enchantment the
///   compatibility tables do not know
pub fn classify<T: Translatable + ?Sized>(
    object: &T,
    legacy: Option<&LegacyTable>,
) -> Result<Option<Classification>> {
    let Some(view) = object.object_ref() else {
        return Ok(None);
    };

    // Later matches override earlier ones
    let Some(category) = Category::ALL
        .into_iter()
        .filter(|category| category.matches(&view))
        .last()
    else {
        return Ok(None);
    };

    let key = category.namespaced_key(&view, legacy)?;
    Ok(Some(Classification { category, key }))
}

/// Placeable materials live in the block namespace, the rest in items.
fn placement_namespace(material: &Material) -> &'static str {
    if material.is_block() {
        Category::Block.namespace()
    } else {
        Category::Item.namespace()
    }
}

fn key(namespace: &str, id: &str) -> String {
    format!("{}{}", namespace, id).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{
        Biome, Enchantment, EntityType, ItemStack, PotionEffectType, Statistic, VillagerProfession,
    };

    struct Unknown;

    impl Translatable for Unknown {
        fn object_ref(&self) -> Option<ObjectRef<'_>> {
            None
        }
    }

    fn key_of<T: Translatable>(object: &T) -> String {
        classify(object, None)
            .expect("classify should succeed")
            .expect("object should match a category")
            .key
    }

    // ==================== Category Table Tests ====================

    #[test]
    fn test_declaration_order() {
        let namespaces: Vec<_> = Category::all_namespaces().collect();
        assert_eq!(namespaces[0], "block.minecraft.");
        assert_eq!(namespaces[1], "item.minecraft.");
        assert_eq!(namespaces.last(), Some(&"stat.minecraft."));
        assert_eq!(namespaces.len(), 9);
    }

    #[test]
    fn test_normalization_flags() {
        assert!(Category::Block.needs_normalization());
        assert!(Category::Enchantment.needs_normalization());
        assert!(!Category::EntityType.needs_normalization());
        assert!(!Category::Statistic.needs_normalization());
    }

    // ==================== Item / Material Tests ====================

    #[test]
    fn test_placeable_stack_uses_block_namespace() {
        let stack = ItemStack::new(Material::block("STONE"));
        let classification = classify(&stack, None).unwrap().unwrap();

        // Both BLOCK and ITEM match a stack; the later one is reported
        assert_eq!(classification.category, Category::Item);
        assert_eq!(classification.key, "block.minecraft.stone");
    }

    #[test]
    fn test_non_placeable_stack_uses_item_namespace() {
        let stack = ItemStack::new(Material::item("CLOCK"));
        assert_eq!(key_of(&stack), "item.minecraft.clock");
    }

    #[test]
    fn test_material_uses_placement_namespace() {
        let classification = classify(&Material::block("OAK_LOG"), None).unwrap().unwrap();
        assert_eq!(classification.category, Category::Material);
        assert_eq!(classification.key, "block.minecraft.oak_log");

        assert_eq!(key_of(&Material::item("EMERALD")), "item.minecraft.emerald");
    }

    #[test]
    fn test_legacy_stack_is_mapped() {
        let table = LegacyTable::from_entries([("wool-1", "orange_wool")]);
        let stack = ItemStack::with_data(Material::block("WOOL"), 1);

        let classification = classify(&stack, Some(&table)).unwrap().unwrap();
        assert_eq!(classification.key, "block.minecraft.orange_wool");
    }

    #[test]
    fn test_legacy_stack_without_mapping_keeps_base() {
        let table = LegacyTable::from_entries([("wool-1", "orange_wool")]);
        let stack = ItemStack::with_data(Material::block("WOOL"), 7);

        let classification = classify(&stack, Some(&table)).unwrap().unwrap();
        assert_eq!(classification.key, "block.minecraft.wool");
    }

    #[test]
    fn test_modern_stack_ignores_data_value() {
        let stack = ItemStack::with_data(Material::block("WOOL"), 1);
        assert_eq!(key_of(&stack), "block.minecraft.wool");
    }

    #[test]
    fn test_legacy_material_uses_variant_zero() {
        let table = LegacyTable::from_entries([("wool-0", "white_wool")]);
        let classification = classify(&Material::block("WOOL"), Some(&table)).unwrap().unwrap();
        assert_eq!(classification.key, "block.minecraft.white_wool");
    }

    // ==================== Effect / Enchantment Tests ====================

    #[test]
    fn test_effect_is_renamed() {
        assert_eq!(
            key_of(&PotionEffectType::new("SLOW")),
            "effect.minecraft.slowness"
        );
    }

    #[test]
    fn test_enchantment_is_renamed() {
        assert_eq!(
            key_of(&Enchantment::new("DAMAGE_ALL")),
            "enchantment.minecraft.sharpness"
        );
    }

    #[test]
    fn test_unknown_effect_fails_loudly() {
        let result = classify(&PotionEffectType::new("FLYING"), None);
        assert_eq!(result, Err(Error::UnknownEffect("FLYING".to_string())));
    }

    #[test]
    fn test_unknown_enchantment_fails_loudly() {
        let result = classify(&Enchantment::new("TELEKINESIS"), None);
        assert_eq!(result, Err(Error::UnknownEnchantment("TELEKINESIS".to_string())));
    }

    // ==================== Plain Category Tests ====================

    #[test]
    fn test_plain_categories() {
        assert_eq!(key_of(&EntityType::new("ZOMBIE")), "entity.minecraft.zombie");
        assert_eq!(key_of(&Biome::new("DEEP_OCEAN")), "biome.minecraft.deep_ocean");
        assert_eq!(
            key_of(&VillagerProfession::new("ARMORER")),
            "entity.minecraft.villager.armorer"
        );
        assert_eq!(key_of(&Statistic::new("DEATHS")), "stat.minecraft.deaths");
    }

    #[test]
    fn test_plain_category_reported() {
        let classification = classify(&Biome::new("PLAINS"), None).unwrap().unwrap();
        assert_eq!(classification.category, Category::Biome);
    }

    #[test]
    fn test_unknown_object_is_unclassified() {
        assert_eq!(classify(&Unknown, None), Ok(None));
    }
}
