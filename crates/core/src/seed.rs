//! Built-in catalogs used when no stored data is available.

use crate::drama::DramaRecord;

fn entry(
    id: i64,
    title: &str,
    keywords: &[&str],
    description: &str,
    pan_url: &str,
    icon: &str,
    cover_image: &str,
) -> DramaRecord {
    DramaRecord {
        id,
        title: title.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        description: description.to_string(),
        pan_url: pan_url.to_string(),
        icon: icon.to_string(),
        cover_image: Some(cover_image.to_string()),
    }
}

/// Default set written to a missing or unreadable data file.
pub fn default_catalog() -> Vec<DramaRecord> {
    vec![
        entry(
            1,
            "霸道总裁爱上我",
            &["霸道总裁", "爱情", "都市", "职场"],
            "一位普通女孩与霸道总裁之间的浪漫爱情故事，充满戏剧性的职场与情感冲突。",
            "https://pan.baidu.com/s/1abc123def456ghi",
            "💼",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=250&fit=crop",
        ),
        entry(
            2,
            "神医王妃",
            &["古装", "穿越", "医术", "宫廷"],
            "现代医学博士穿越到古代，成为废柴王妃，凭借高超医术逆袭人生的精彩故事。",
            "https://pan.baidu.com/s/2def456ghi789jkl",
            "👑",
            "https://images.unsplash.com/photo-1545569341-9eb8b30979d9?w=400&h=250&fit=crop",
        ),
    ]
}

/// Larger catalog used to seed the in-memory store.
pub fn sample_catalog() -> Vec<DramaRecord> {
    let mut catalog = default_catalog();
    catalog.extend([
        entry(
            3,
            "重生之商界巨鳄",
            &["重生", "商战", "逆袭", "都市"],
            "商业精英重生回到年轻时代，利用未来知识在商界掀起惊涛骇浪的传奇故事。",
            "https://pan.baidu.com/s/3ghi789jkl012mno",
            "💰",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=250&fit=crop",
        ),
        entry(
            4,
            "校花的贴身高手",
            &["校园", "高手", "保镖", "青春"],
            "神秘高手化身学生，成为校花贴身保镖，展开一段惊险刺激的校园生活。",
            "https://pan.baidu.com/s/4jkl012mno345pqr",
            "🎓",
            "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?w=400&h=250&fit=crop",
        ),
        entry(
            5,
            "仙门赘婿",
            &["仙侠", "赘婿", "逆袭", "修炼"],
            "被众人嘲笑的仙门赘婿，实则拥有惊天秘密，一步步逆袭成为仙界至尊。",
            "https://pan.baidu.com/s/5mno345pqr678stu",
            "⚔️",
            "https://images.unsplash.com/photo-1542736667-069246bdbc6d?w=400&h=250&fit=crop",
        ),
    ]);
    catalog
}
