use serde::{Deserialize, Serialize};

/// 主类目定义
///
/// `keywords` 用于关键词子串打分，`icon` / `color` / `description`
/// 用于生成标签目录
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// 固定类目表
///
/// 表的枚举顺序参与平分决胜：得分相同时取表中靠前的类目
pub const CATEGORIES: [Category; 8] = [
    Category {
        name: "Science",
        keywords: &["physics", "chemistry", "biology", "astronomy"],
        icon: "TestTube",
        color: "text-green-500",
        description: "Scientific concepts and knowledge",
    },
    Category {
        name: "Technology",
        keywords: &["computer", "engineering", "machine"],
        icon: "Laptop",
        color: "text-blue-500",
        description: "Technology and computer science",
    },
    Category {
        name: "Mathematics",
        keywords: &["mathematics", "algebra", "calculus", "statistics"],
        icon: "Calculator",
        color: "text-purple-500",
        description: "Mathematical concepts and problems",
    },
    Category {
        name: "History",
        keywords: &["history", "world_history", "us_history"],
        icon: "Clock",
        color: "text-amber-700",
        description: "Historical events and figures",
    },
    Category {
        name: "Arts",
        keywords: &["art", "music", "literature", "philosophy"],
        icon: "Palette",
        color: "text-pink-500",
        description: "Arts and creative fields",
    },
    Category {
        name: "Social Sciences",
        keywords: &["psychology", "sociology", "economics", "politics"],
        icon: "Users",
        color: "text-orange-500",
        description: "Study of human society",
    },
    Category {
        name: "Professional",
        keywords: &["business", "marketing", "management", "law", "medicine"],
        icon: "Briefcase",
        color: "text-gray-700",
        description: "Professional and career fields",
    },
    Category {
        name: "General Knowledge",
        keywords: &["general", "world", "culture", "geography"],
        icon: "Globe",
        color: "text-indigo-500",
        description: "General knowledge and trivia",
    },
];

/// 所有关键词均未命中时的兜底类目
pub const DEFAULT_CATEGORY: &str = "Knowledge";

/// 次级标签定义（名称, 图标, 颜色, 描述）
const SECONDARY_TAGS: [(&str, &str, &str, &str); 6] = [
    ("Beginner", "Star", "text-green-400", "Entry-level questions"),
    (
        "Intermediate",
        "StarHalf",
        "text-yellow-500",
        "Medium difficulty questions",
    ),
    ("Advanced", "Stars", "text-red-500", "Challenging questions"),
    (
        "Multiple Choice",
        "ListChecks",
        "text-blue-400",
        "Questions with multiple choices",
    ),
    (
        "Quick Quiz",
        "Timer",
        "text-purple-400",
        "Short quizzes under 5 minutes",
    ),
    (
        "Comprehensive",
        "BookOpen",
        "text-emerald-500",
        "In-depth quizzes with detailed explanations",
    ),
];

/// 标签目录条目（随每次运行写出一份 tags.json）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDefinition {
    pub name: String,
    pub slug: String,
    pub is_primary: bool,
    pub icon: String,
    pub color: String,
    pub description: String,
}

/// 由标签名生成 slug
fn slugify(name: &str) -> String {
    name.to_lowercase().replace(" & ", "-").replace(' ', "-")
}

/// 构建完整标签目录：主类目在前，次级标签在后
pub fn build_tag_catalog() -> Vec<TagDefinition> {
    let mut tags = Vec::with_capacity(CATEGORIES.len() + SECONDARY_TAGS.len());

    for category in &CATEGORIES {
        tags.push(TagDefinition {
            name: category.name.to_string(),
            slug: slugify(category.name),
            is_primary: true,
            icon: category.icon.to_string(),
            color: category.color.to_string(),
            description: category.description.to_string(),
        });
    }

    for (name, icon, color, description) in &SECONDARY_TAGS {
        tags.push(TagDefinition {
            name: name.to_string(),
            slug: slugify(name),
            is_primary: false,
            icon: icon.to_string(),
            color: color.to_string(),
            description: description.to_string(),
        });
    }

    tags
}
