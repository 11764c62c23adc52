//! Language registry: Single source of truth for every locale the game ships.
//!
//! The registry is built once on first access (`OnceLock`) and never changes
//! afterwards. Locale codes are the lower-case tags used for the game's own
//! language files (e.g. `en_us`, `pt_br`, `lol_us`).

use std::collections::HashMap;
use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Locale tag as used in resource file names (e.g., "en_us", "es_mx")
    pub code: &'static str,

    /// Language name in its own language (e.g., "English", "Español")
    pub name: &'static str,

    /// Region name in its own language (e.g., "US", "México")
    pub region: &'static str,

    /// Whether this is the canonical language (only one should be true)
    pub is_canonical: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    by_code: HashMap<&'static str, usize>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

/// Locale tag of the canonical language.
const CANONICAL_CODE: &str = "en_us";

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| {
            let languages = default_languages();
            let by_code = languages
                .iter()
                .enumerate()
                .map(|(index, lang)| (lang.code, index))
                .collect();
            LanguageRegistry { languages, by_code }
        })
    }

    /// Get a language configuration by its exact (lower-case) locale tag.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.by_code.get(code).map(|&index| &self.languages[index])
    }

    /// Get all languages, in registry order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Number of known locales.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if the built-in table does not contain exactly one canonical
    /// locale (a configuration error in this crate, not in caller input).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a locale tag is known.
    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }
}

/// Every locale shipped with the game: (code, name, region).
const LOCALES: &[(&str, &str, &str)] = &[
    ("af_za", "Afrikaans", "Suid-Afrika"),
    ("ar_sa", "العربية", "العالم العربي"),
    ("ast_es", "Asturianu", "Asturies"),
    ("az_az", "Azərbaycanca", "Azərbaycan"),
    ("ba_ru", "Башҡортса", "Башҡортостан, Рәсәй"),
    ("bar", "Boarisch", "Bayern"),
    ("be_by", "Беларуская", "Беларусь"),
    ("bg_bg", "Български", "България"),
    ("br_fr", "Brezhoneg", "Breizh"),
    ("brb", "Braobans", "Braobant"),
    ("bs_ba", "Bosanski", "Bosna i Hercegovina"),
    ("ca_es", "Català", "Catalunya"),
    ("cs_cz", "Čeština", "Česko"),
    ("cy_gb", "Cymraeg", "Cymru"),
    ("da_dk", "Dansk", "Danmark"),
    ("de_at", "Deitsch", "Österreich"),
    ("de_ch", "Schwiizerdutsch", "Schweiz"),
    ("de_de", "Deutsch", "Deutschland"),
    ("el_gr", "Ελληνικά", "Ελλάδα"),
    ("en_au", "English", "Australia"),
    ("en_ca", "English", "Canada"),
    ("en_gb", "English", "United Kingdom"),
    ("en_nz", "English", "New Zealand"),
    ("en_pt", "Pirate Speak", "The Seven Seas"),
    ("en_ud", "ɥsıʃƃuƎ", "ɯopƃuıʞ pǝʇıu∩"),
    ("en_us", "English", "US"),
    ("enp", "Anglish", "Foreland"),
    ("enws", "Shakespearean English", "Kingdom of England"),
    ("eo_uy", "Esperanto", "Esperantujo"),
    ("es_ar", "Español", "Argentina"),
    ("es_cl", "Español", "Chile"),
    ("es_ec", "Español", "Ecuador"),
    ("es_es", "Español", "España"),
    ("es_mx", "Español", "México"),
    ("es_uy", "Español", "Uruguay"),
    ("es_ve", "Español", "Venezuela"),
    ("esan", "Andaluz", "Andaluçía"),
    ("et_ee", "Eesti", "Eesti"),
    ("eu_es", "Euskara", "Euskal Herria"),
    ("fa_ir", "فارسی", "ایران"),
    ("fi_fi", "Suomi", "Suomi"),
    ("fil_ph", "Filipino", "Pilipinas"),
    ("fo_fo", "Føroyskt", "Føroyar"),
    ("fr_ca", "Français", "Canada"),
    ("fr_fr", "Français", "France"),
    ("fra_de", "Fränggisch", "Franggn"),
    ("fur_it", "Furlan", "Friûl"),
    ("fy_nl", "Frysk", "Fryslân"),
    ("ga_ie", "Gaeilge", "Éire"),
    ("gd_gb", "Gàidhlig", "Alba"),
    ("gl_es", "Galego", "Galiza"),
    ("haw_us", "ʻŌlelo Hawaiʻi", "Hawaiʻi"),
    ("he_il", "עברית", "ישראל"),
    ("hi_in", "हिंदी", "भारत"),
    ("hr_hr", "Hrvatski", "Hrvatska"),
    ("hu_hu", "Magyar", "Magyarország"),
    ("hy_am", "Հայերեն", "Հայաստան"),
    ("id_id", "Bahasa Indonesia", "Indonesia"),
    ("ig_ng", "Igbo", "Naigeria"),
    ("io_en", "Ido", "Ido"),
    ("is_is", "Íslenska", "Ísland"),
    ("isv", "Medžuslovjansky", "Slovjanstvo"),
    ("it_it", "Italiano", "Italia"),
    ("ja_jp", "日本語", "日本"),
    ("jbo_en", "la .lojban.", "la jbogu'e"),
    ("ka_ge", "ქართული", "საქართველო"),
    ("kk_kz", "Қазақша", "Қазақстан"),
    ("kn_in", "ಕನ್ನಡ", "ಭಾರತ"),
    ("ko_kr", "한국어", "대한민국"),
    ("ksh", "Kölsch/Ripoarisch", "Rhingland"),
    ("kw_gb", "Kernewek", "Kernow"),
    ("la_la", "Latina", "Latium"),
    ("lb_lu", "Lëtzebuergesch", "Lëtzebuerg"),
    ("li_li", "Limburgs", "Limburg"),
    ("lmo", "Lombard", "Lombardia"),
    ("lol_us", "LOLCAT", "Kingdom of Cats"),
    ("lt_lt", "Lietuvių", "Lietuva"),
    ("lv_lv", "Latviešu", "Latvija"),
    ("lzh", "文言", "華夏"),
    ("mk_mk", "Македонски", "Северна Македонија"),
    ("mn_mn", "Монгол", "Монгол Улс"),
    ("ms_my", "Bahasa Melayu", "Malaysia"),
    ("mt_mt", "Malti", "Malta"),
    ("nah", "Mēxikatlahtōlli", "Mēxiko"),
    ("nds_de", "Plattdüütsch", "Noorddüütschland"),
    ("nl_be", "Vlaams", "België"),
    ("nl_nl", "Nederlands", "Nederland"),
    ("nn_no", "Norsk nynorsk", "Noreg"),
    ("no_no", "Norsk Bokmål", "Norge"),
    ("oc_fr", "Occitan", "Occitània"),
    ("ovd", "Övdalską", "Swerre"),
    ("pl_pl", "Polski", "Polska"),
    ("pt_br", "Português", "Brasil"),
    ("pt_pt", "Português", "Portugal"),
    ("qya_aa", "Quenya", "Arda"),
    ("ro_ro", "Română", "România"),
    ("rpr", "Дореформенный русскій", "Россійская Имперія"),
    ("ru_ru", "Русский", "Россия"),
    ("ry_ua", "Русиньскый", "Украина"),
    ("se_no", "Davvisámegiella", "Sápmi"),
    ("sk_sk", "Slovenčina", "Slovensko"),
    ("sl_si", "Slovenščina", "Slovenija"),
    ("so_so", "Af-Soomaali", "Soomaaliya"),
    ("sq_al", "Shqip", "Shqiperia"),
    ("sr_sp", "Српски", "Србија"),
    ("sv_se", "Svenska", "Sverige"),
    ("sxu", "Säggs'sch", "Saggsn"),
    ("szl", "Ślōnskŏ", "Gōrny Ślōnsk"),
    ("ta_in", "தமிழ்", "இந்தியா"),
    ("th_th", "ไทย", "ประเทศไทย"),
    ("tl_ph", "Tagalog", "Pilipinas"),
    ("tlh_aa", "tlhIngan Hol", "Qo'noS"),
    ("tok", "toki pona", "ma pona"),
    ("tr_tr", "Türkçe", "Türkiye"),
    ("tt_ru", "Татарча", "Татарстан, Рәсәй"),
    ("uk_ua", "Українська", "Україна"),
    ("val_es", "Català (Valencià)", "País Valencià"),
    ("vec_it", "Vèneto", "Veneto"),
    ("vi_vn", "Tiếng Việt", "Việt Nam"),
    ("yi_de", "ייִדיש", "אשכנזיש יידן"),
    ("yo_ng", "Yorùbá", "Nàìjíríà"),
    ("zh_cn", "简体中文", "中国大陆"),
    ("zh_hk", "繁體中文", "香港特別行政區"),
    ("zh_tw", "繁體中文", "台灣"),
    ("zlm_arab", "بهاس ملايو", "مليسيا"),
];

fn default_languages() -> Vec<LanguageConfig> {
    LOCALES
        .iter()
        .map(|&(code, name, region)| LanguageConfig {
            code,
            name,
            region,
            is_canonical: code == CANONICAL_CODE,
        })
        .collect()
}
