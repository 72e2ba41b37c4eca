//! URL正規化
//!
//! ユーザー入力の生文字列を絶対URLに整形する

/// 生の入力文字列を正規化する
///
/// 前後の空白を除去し、空文字列は破棄（`None`）。スキームが
/// `http://` / `https://` で始まらない場合は `http://` を前置する。
/// 構文的な妥当性は検証しない（不正なホストはプローブ時に失敗する）。
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("http://{}", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_discarded() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("\t\n"), None);
    }

    #[test]
    fn bare_host_gets_http_prefix() {
        assert_eq!(
            normalize(" example.com "),
            Some("http://example.com".to_string())
        );
    }

    #[test]
    fn existing_scheme_is_preserved() {
        assert_eq!(normalize("https://a.com"), Some("https://a.com".to_string()));
        assert_eq!(normalize("http://a.com"), Some("http://a.com".to_string()));
    }

    #[test]
    fn malformed_host_passes_through() {
        // 妥当性検証はしない。プローブ時に失敗させる
        assert_eq!(
            normalize("not a url"),
            Some("http://not a url".to_string())
        );
    }
}
