// Static localization tables. The language is picked once at startup from
// the browser tag; there is no runtime switching.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Ja,
    Zh,
    Es,
    De,
    Fr,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Ko,
        Language::En,
        Language::Ja,
        Language::Zh,
        Language::Es,
        Language::De,
        Language::Fr,
    ];
}

pub struct Strings {
    pub app_title: &'static str,
    pub settings: &'static str,
    pub heads_text: &'static str,
    pub tails_text: &'static str,
    pub recent_tosses: &'static str,
    pub no_history: &'static str,
    pub flip: &'static str,
    pub heads: &'static str,
    pub tails: &'static str,
}

pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::Ko => &Strings {
            app_title: "Coin Master",
            settings: "설정",
            heads_text: "앞면 텍스트",
            tails_text: "뒷면 텍스트",
            recent_tosses: "최근 결과",
            no_history: "기록 없음",
            flip: "던지기",
            heads: "앞면",
            tails: "뒷면",
        },
        Language::En => &Strings {
            app_title: "Coin Master",
            settings: "Settings",
            heads_text: "Heads Text",
            tails_text: "Tails Text",
            recent_tosses: "Recent Tosses",
            no_history: "No History",
            flip: "Flip",
            heads: "Heads",
            tails: "Tails",
        },
        Language::Ja => &Strings {
            app_title: "Coin Master",
            settings: "設定",
            heads_text: "表のテキスト",
            tails_text: "裏のテキスト",
            recent_tosses: "最近の結果",
            no_history: "履歴なし",
            flip: "投げる",
            heads: "表",
            tails: "裏",
        },
        Language::Zh => &Strings {
            app_title: "Coin Master",
            settings: "设置",
            heads_text: "正面文字",
            tails_text: "反面文字",
            recent_tosses: "最近结果",
            no_history: "无记录",
            flip: "抛硬币",
            heads: "正面",
            tails: "反面",
        },
        Language::Es => &Strings {
            app_title: "Coin Master",
            settings: "Ajustes",
            heads_text: "Texto Cara",
            tails_text: "Texto Cruz",
            recent_tosses: "Resultados Recientes",
            no_history: "Sin Historial",
            flip: "Lanzar",
            heads: "Cara",
            tails: "Cruz",
        },
        Language::De => &Strings {
            app_title: "Coin Master",
            settings: "Einstellungen",
            heads_text: "Kopf Text",
            tails_text: "Zahl Text",
            recent_tosses: "Letzte Würfe",
            no_history: "Kein Verlauf",
            flip: "Werfen",
            heads: "Kopf",
            tails: "Zahl",
        },
        Language::Fr => &Strings {
            app_title: "Coin Master",
            settings: "Paramètres",
            heads_text: "Texte Pile",
            tails_text: "Texte Face",
            recent_tosses: "Résultats Récents",
            no_history: "Aucun Historique",
            flip: "Lancer",
            heads: "Pile",
            tails: "Face",
        },
    }
}

/// Default face labels shown before the user edits the text fields.
pub fn default_labels(lang: Language) -> (&'static str, &'static str) {
    match lang {
        Language::Ko => ("앞면", "뒷면"),
        Language::En => ("HEADS", "TAILS"),
        Language::Ja => ("表", "裏"),
        Language::Zh => ("正面", "反面"),
        Language::Es => ("CARA", "CRUZ"),
        Language::De => ("KOPF", "ZAHL"),
        Language::Fr => ("PILE", "FACE"),
    }
}

/// Map a BCP-47 tag (e.g. "en-US", "ko") to a supported language by its
/// primary subtag; anything unknown falls back to English.
pub fn detect(tag: &str) -> Language {
    let primary = tag
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    match primary.as_str() {
        "ko" => Language::Ko,
        "en" => Language::En,
        "ja" => Language::Ja,
        "zh" => Language::Zh,
        "es" => Language::Es,
        "de" => Language::De,
        "fr" => Language::Fr,
        _ => Language::En,
    }
}
