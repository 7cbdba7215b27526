//! 表記揺れの置換ルール
//!
//! 宣言順に適用する。後のルールは前のルールで統一された表記を前提にしている。

use regex::Regex;

/// (パターン, 置換後) の宣言順リスト
const VARIANT_RULES: &[(&str, &str)] = &[
    // 字・大字・小字は住所照合に不要
    (r"字|大字|小字", ""),
    (r"鬮野川|くじ野川|くじの川", "くじ野川"),
    (r"通り|とおり", "通り"),
    (r"柿碕町|柿さき町", "柿碕町"),
    (r"埠頭|ふ頭", "埠頭"),
    (r"番町|番丁", "番町"),
    (r"大冝|大宜", "大宜"),
    (r"穝|さい", "穝"),
    (r"杁|えぶり", "杁"),
    (r"薭|稗|ひえ|ヒエ", "稗"),
    (r"上ル|上る", "上る"),
    (r"下ル|下る", "下る"),
    (r"四ツ谷|四谷", "四谷"),
    // 助詞
    (r"[之ノの]", ""),
    // 送り仮名・半角カナ
    (r"[ｹヶケが]", "が"),
    (r"[ｶヵカか力]", "か"),
    (r"[ﾂッツっつ]", "つ"),
    (r"[ニ二]", "二"),
    (r"[ハ八]", "八"),
];

/// 全ルールを通しで適用する最大回数
const MAX_PASSES: usize = 4;

lazy_static::lazy_static! {
    static ref COMPILED_RULES: Vec<(Regex, &'static str)> = VARIANT_RULES
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect();
}

/// 1回分のルール適用（宣言順）
fn apply_once(address: &str) -> String {
    COMPILED_RULES
        .iter()
        .fold(address.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, *replacement).into_owned()
        })
}

/// 表記揺れを統一する
///
/// 削除系のルール（助詞など）で新たに別のパターンが現れることがあるため、
/// 変化しなくなるまで全ルールを繰り返す。
pub fn replace_patterns(address: &str) -> String {
    let mut current = apply_once(address);
    for _ in 1..MAX_PASSES {
        let next = apply_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}
