//! 漢数字→アラビア数字変換
//!
//! 番地で使われる2桁までの漢数字（十・二十三など）を扱う。百以上は対象外。

/// 漢数字1文字を数値に変換（十は10）
fn kanji_digit(c: char) -> Option<u32> {
    match c {
        '〇' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        '十' => Some(10),
        _ => None,
    }
}

/// 漢数字の並びをアラビア数字の文字列に変換する
///
/// - `十` の直前に数字 d があれば d×10 とし、直後の数字で一の位を埋める
/// - 十を含まない並びは1桁ずつ置き換える（`二三` → `23`）
/// - 対応しない文字を含む場合はそのまま返す
pub fn convert(token: &str) -> String {
    let mut normalized = String::new();
    // 直前が十で一の位が未確定
    let mut tens_open = false;

    for c in token.chars() {
        let Some(value) = kanji_digit(c) else {
            return token.to_string();
        };

        if value == 10 {
            match normalized.pop() {
                None => normalized.push_str("10"),
                Some('1') => normalized.push_str("10"),
                Some(prev) => {
                    let digit = prev.to_digit(10).unwrap_or(0);
                    normalized.push_str(&(digit * 10).to_string());
                }
            }
            tens_open = true;
        } else if tens_open && normalized.ends_with('0') {
            normalized.pop();
            normalized.push_str(&value.to_string());
            tens_open = false;
        } else {
            normalized.push_str(&value.to_string());
            tens_open = false;
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit() {
        assert_eq!(convert("五"), "5");
        assert_eq!(convert("〇"), "0");
        assert_eq!(convert("十"), "10");
    }

    #[test]
    fn test_composed_numbers() {
        assert_eq!(convert("二十三"), "23");
        assert_eq!(convert("三十五"), "35");
        assert_eq!(convert("二十"), "20");
        assert_eq!(convert("十五"), "15");
        assert_eq!(convert("一十"), "10");
    }

    #[test]
    fn test_digit_sequence() {
        assert_eq!(convert("二三"), "23");
        assert_eq!(convert("一〇"), "10");
    }

    #[test]
    fn test_unsupported_passes_through() {
        assert_eq!(convert("百"), "百");
        assert_eq!(convert("二百"), "二百");
        assert_eq!(convert("12"), "12");
        assert_eq!(convert(""), "");
    }
}
