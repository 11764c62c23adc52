//! Compatibility shim between engine identifiers and translation keys.
//!
//! Legacy engines (1.0 through 1.12) name many items by a base material plus
//! a numeric data value instead of a unique name, and several effects and
//! enchantments are declared under names that differ from their translation
//! keys. Everything here is a pure function over fixed tables, except
//! [`LegacyTable`] whose content comes from a loaded resource.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Engine `major.minor` pairs that use the legacy identifier scheme.
const LEGACY_VERSIONS: &[(&str, &str)] = &[
    ("1", "0"),
    ("1", "1"),
    ("1", "2"),
    ("1", "3"),
    ("1", "4"),
    ("1", "5"),
    ("1", "6"),
    ("1", "7"),
    ("1", "8"),
    ("1", "9"),
    ("1", "10"),
    ("1", "11"),
    ("1", "12"),
];

static VERSION_REGEX: OnceLock<Regex> = OnceLock::new();

/// Report whether an engine version uses the legacy identifier scheme.
///
/// Accepts `major.minor[.patch]` or `major:minor[:patch]`, with an optional
/// build suffix after the numbers (`1.12.2-R0.1-SNAPSHOT`). Missing
/// components count as `0`. Only `major` and `minor` are compared.
/// Text that does not start with a number is never legacy.
pub fn is_legacy_scheme(version: &str) -> bool {
    let regex = VERSION_REGEX
        .get_or_init(|| Regex::new(r"^\s*(\d+)(?:[.:](\d+))?(?:[.:](\d+))?").unwrap());

    let Some(caps) = regex.captures(version) else {
        return false;
    };

    let major = caps.get(1).map_or("0", |m| m.as_str());
    let minor = caps.get(2).map_or("0", |m| m.as_str());

    LEGACY_VERSIONS
        .iter()
        .any(|&(legacy_major, legacy_minor)| legacy_major == major && legacy_minor == minor)
}

/// Mapping from legacy `"<base>-<variant>"` identifiers to modern names.
///
/// Keys are stored lower-cased. Once built the table never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyTable {
    entries: HashMap<String, String>,
}

impl LegacyTable {
    /// Build a table from raw `(legacy id, modern id)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.as_ref().to_lowercase(), value.into()))
                .collect(),
        }
    }

    /// Composite lookup key for a base identifier and variant index.
    pub fn legacy_id(base: &str, variant: u16) -> String {
        format!("{}-{}", base, variant).to_lowercase()
    }

    /// Modern identifier for `(base, variant)`, or `base` unchanged when the
    /// table has no entry for it.
    pub fn modern_identifier_for<'a>(&'a self, base: &'a str, variant: u16) -> &'a str {
        self.entries
            .get(&Self::legacy_id(base, variant))
            .map_or(base, String::as_str)
    }

    /// Every `legacy id -> modern id` pair.
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Engine-declared potion effect names and their translation key suffixes.
const EFFECT_KEYS: &[(&str, &str)] = &[
    ("SPEED", "speed"),
    ("SLOW", "slowness"),
    ("FAST_DIGGING", "haste"),
    ("SLOW_DIGGING", "mining_fatigue"),
    ("INCREASE_DAMAGE", "strength"),
    ("HEAL", "instant_health"),
    ("HARM", "instant_damage"),
    ("JUMP", "jump_boost"),
    ("CONFUSION", "nausea"),
    ("REGENERATION", "regeneration"),
    ("DAMAGE_RESISTANCE", "resistance"),
    ("FIRE_RESISTANCE", "fire_resistance"),
    ("WATER_BREATHING", "water_breathing"),
    ("INVISIBILITY", "invisibility"),
    ("BLINDNESS", "blindness"),
    ("NIGHT_VISION", "night_vision"),
    ("HUNGER", "hunger"),
    ("WEAKNESS", "weakness"),
    ("POISON", "poison"),
    ("WITHER", "wither"),
    ("HEALTH_BOOST", "health_boost"),
    ("ABSORPTION", "absorption"),
    ("SATURATION", "saturation"),
    ("GLOWING", "glowing"),
    ("LEVITATION", "levitation"),
    ("LUCK", "luck"),
    ("UNLUCK", "unluck"),
    ("SLOW_FALLING", "slow_falling"),
    ("CONDUIT_POWER", "conduit_power"),
    ("DOLPHINS_GRACE", "dolphins_grace"),
    ("BAD_OMEN", "bad_omen"),
    ("HERO_OF_THE_VILLAGE", "hero_of_the_village"),
    ("DARKNESS", "darkness"),
];

/// Engine-declared enchantment names and their translation key suffixes.
const ENCHANTMENT_KEYS: &[(&str, &str)] = &[
    ("PROTECTION_ENVIRONMENTAL", "protection"),
    ("PROTECTION_FIRE", "fire_protection"),
    ("PROTECTION_FALL", "feather_falling"),
    ("PROTECTION_EXPLOSIONS", "blast_protection"),
    ("PROTECTION_PROJECTILE", "projectile_protection"),
    ("OXYGEN", "respiration"),
    ("WATER_WORKER", "aqua_affinity"),
    ("THORNS", "thorns"),
    ("DEPTH_STRIDER", "depth_strider"),
    ("FROST_WALKER", "frost_walker"),
    ("BINDING_CURSE", "binding_curse"),
    ("DAMAGE_ALL", "sharpness"),
    ("DAMAGE_UNDEAD", "smite"),
    ("DAMAGE_ARTHROPODS", "bane_of_arthropods"),
    ("KNOCKBACK", "knockback"),
    ("FIRE_ASPECT", "fire_aspect"),
    ("LOOT_BONUS_MOBS", "looting"),
    ("SWEEPING_EDGE", "sweeping"),
    ("DIG_SPEED", "efficiency"),
    ("SILK_TOUCH", "silk_touch"),
    ("DURABILITY", "unbreaking"),
    ("LOOT_BONUS_BLOCKS", "fortune"),
    ("ARROW_DAMAGE", "power"),
    ("ARROW_KNOCKBACK", "punch"),
    ("ARROW_FIRE", "flame"),
    ("ARROW_INFINITE", "infinity"),
    ("LUCK", "luck_of_the_sea"),
    ("LURE", "lure"),
    ("LOYALTY", "loyalty"),
    ("IMPALING", "impaling"),
    ("RIPTIDE", "riptide"),
    ("CHANNELING", "channeling"),
    ("MULTISHOT", "multishot"),
    ("QUICK_CHARGE", "quick_charge"),
    ("PIERCING", "piercing"),
    ("MENDING", "mending"),
    ("VANISHING_CURSE", "vanishing_curse"),
    ("SOUL_SPEED", "soul_speed"),
    ("SWIFT_SNEAK", "swift_sneak"),
];

fn lookup(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(declared, _)| declared.eq_ignore_ascii_case(name))
        .map(|&(_, suffix)| suffix)
}

/// Translation key suffix for an engine-declared potion effect name.
pub fn canonical_effect_suffix(declared_name: &str) -> Option<&'static str> {
    lookup(EFFECT_KEYS, declared_name)
}

/// Translation key suffix for an engine-declared enchantment name.
pub fn canonical_enchantment_suffix(declared_name: &str) -> Option<&'static str> {
    lookup(ENCHANTMENT_KEYS, declared_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Version Tests ====================

    #[test]
    fn test_legacy_versions() {
        assert!(is_legacy_scheme("1.8"));
        assert!(is_legacy_scheme("1.0"));
        assert!(is_legacy_scheme("1.12"));
        assert!(is_legacy_scheme("1.12.2"));
    }

    #[test]
    fn test_modern_versions() {
        assert!(!is_legacy_scheme("1.13"));
        assert!(!is_legacy_scheme("1.16"));
        assert!(!is_legacy_scheme("1.20.4"));
        assert!(!is_legacy_scheme("2.8"));
    }

    #[test]
    fn test_patch_is_ignored() {
        assert!(is_legacy_scheme("1.8:2"));
        assert!(is_legacy_scheme("1:8:9"));
        assert!(!is_legacy_scheme("1.16:5"));
    }

    #[test]
    fn test_build_suffix_is_ignored() {
        assert!(is_legacy_scheme("1.12.2-R0.1-SNAPSHOT"));
        assert!(!is_legacy_scheme("1.19.4-R0.1-SNAPSHOT"));
    }

    #[test]
    fn test_minor_must_match_exactly() {
        assert!(!is_legacy_scheme("1.120"));
        assert!(is_legacy_scheme("1.1.0-R0.1"));
    }

    #[test]
    fn test_missing_minor_defaults_to_zero() {
        assert!(is_legacy_scheme("1"));
    }

    #[test]
    fn test_garbage_version() {
        assert!(!is_legacy_scheme(""));
        assert!(!is_legacy_scheme("git-Paper-196"));
    }

    // ==================== Legacy Table Tests ====================

    #[test]
    fn test_modern_identifier_mapped() {
        let table = LegacyTable::from_entries([("35-1", "orange_wool")]);
        assert_eq!(table.modern_identifier_for("35", 1), "orange_wool");
    }

    #[test]
    fn test_modern_identifier_falls_back_to_base() {
        let table = LegacyTable::from_entries([("35-1", "orange_wool")]);
        assert_eq!(table.modern_identifier_for("35", 2), "35");
        assert_eq!(LegacyTable::default().modern_identifier_for("35", 1), "35");
    }

    #[test]
    fn test_entries_are_lowercased() {
        let table = LegacyTable::from_entries([("WOOL-14", "red_wool")]);
        assert_eq!(table.entries().get("wool-14").map(String::as_str), Some("red_wool"));
        assert_eq!(table.entries().len(), table.len());
    }

    #[test]
    fn test_legacy_lookup_is_case_insensitive() {
        let table = LegacyTable::from_entries([("WOOL-14", "red_wool")]);
        assert_eq!(table.modern_identifier_for("WOOL", 14), "red_wool");
        assert_eq!(table.modern_identifier_for("wool", 14), "red_wool");
    }

    #[test]
    fn test_legacy_id() {
        assert_eq!(LegacyTable::legacy_id("STAINED_GLASS", 3), "stained_glass-3");
    }

    // ==================== Name Table Tests ====================

    #[test]
    fn test_renamed_effects() {
        assert_eq!(canonical_effect_suffix("SLOW"), Some("slowness"));
        assert_eq!(canonical_effect_suffix("INCREASE_DAMAGE"), Some("strength"));
        assert_eq!(canonical_effect_suffix("CONFUSION"), Some("nausea"));
        assert_eq!(canonical_effect_suffix("speed"), Some("speed"));
    }

    #[test]
    fn test_renamed_enchantments() {
        assert_eq!(canonical_enchantment_suffix("DAMAGE_ALL"), Some("sharpness"));
        assert_eq!(canonical_enchantment_suffix("LUCK"), Some("luck_of_the_sea"));
        assert_eq!(canonical_enchantment_suffix("SWEEPING_EDGE"), Some("sweeping"));
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(canonical_effect_suffix("FLYING"), None);
        assert_eq!(canonical_enchantment_suffix("TELEKINESIS"), None);
    }

    #[test]
    fn test_tables_have_unique_names() {
        for table in [EFFECT_KEYS, ENCHANTMENT_KEYS] {
            let names: HashSet<_> = table.iter().map(|(name, _)| *name).collect();
            assert_eq!(names.len(), table.len());
        }
        assert_eq!(EFFECT_KEYS.len(), 33);
        assert_eq!(ENCHANTMENT_KEYS.len(), 39);
    }
}
