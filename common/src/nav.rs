//! ナビゲーションのアクティブ判定

/// セクション上端からのずらし量（px）
pub const SECTION_OFFSET: f64 = 100.0;

/// スクロール位置からアクティブなセクションIDを求める
///
/// `offset_top - SECTION_OFFSET <= scroll_y` を満たすセクションのうち、
/// 文書順で最後のものを返す。
pub fn active_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - SECTION_OFFSET)
        .map(|(id, _)| *id)
        .last()
}

/// セクションIDに対応するリンクの href
pub fn section_href(id: &str) -> String {
    format!("#{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: &[(&str, f64)] = &[("home", 0.0), ("upload", 600.0), ("about", 1400.0)];

    #[test]
    fn test_top_of_page() {
        assert_eq!(active_section(SECTIONS, 0.0), Some("home"));
    }

    #[test]
    fn test_offset_applies_before_section_top() {
        assert_eq!(active_section(SECTIONS, 499.0), Some("home"));
        assert_eq!(active_section(SECTIONS, 500.0), Some("upload"));
    }

    #[test]
    fn test_bottom_of_page() {
        assert_eq!(active_section(SECTIONS, 5000.0), Some("about"));
    }

    #[test]
    fn test_no_section_qualifies() {
        let sections = [("late", 800.0)];
        assert_eq!(active_section(&sections, 10.0), None);
        assert_eq!(active_section(&[], 10.0), None);
    }

    #[test]
    fn test_section_href() {
        assert_eq!(section_href("upload"), "#upload");
    }
}
