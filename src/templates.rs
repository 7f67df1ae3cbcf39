//! Fixed text the toolkit writes: file skeletons, keyword lists and post
//! templates for the insight report.

use crate::calendar;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Reading items pre-filled in every new daily file.
pub const READING_LIST: [&str; 2] = ["AI Valley", "The Keyword"];

#[must_use]
/// Skeleton of a new daily file.
pub fn daily_journal(date: NaiveDate) -> String {
    let reading: String = READING_LIST
        .iter()
        .map(|item| format!("- [ ] {item}\n\n"))
        .collect();
    format!(
        "# {} Journal\n\n## video\n\n\n## newsletter\n\n{reading}## braindump\n\n\n## output\n\n",
        calendar::header_date(date)
    )
}

#[must_use]
/// Title block of a weekly review.
pub fn week_review_header(monday: NaiveDate, sunday: NaiveDate, folder_name: &str) -> String {
    format!(
        "# Weekly Review: {folder_name}\n\nWeek of {} - {}\n\n",
        calendar::display_date(monday),
        sunday.format("%B %d, %Y")
    )
}

/// Placeholder sections closing a weekly review, filled in by hand.
pub const WEEK_REVIEW_FOOTER: &str = "\
## Weekly Insights

<!-- Add your weekly reflections, key learnings, and insights here -->

## Action Items for Next Week

<!-- Add action items and goals for the upcoming week -->
";

/// Words marking a braindump line as an insight worth surfacing.
pub const INSIGHT_KEYWORDS: &[&str] = &[
    "insight", "learned", "realized", "noticed", "experience", "feel", "summary", "think",
    "recommend", "interesting", "surprise", "洞察", "发现", "体验", "感受", "总结", "思考",
    "建议", "推荐", "有趣", "惊喜",
];

/// Words marking an output or review line as an achievement.
pub const ACHIEVEMENT_KEYWORDS: &[&str] = &[
    "completed", "finished", "shipped", "released", "built", "launched", "learned", "mastered",
    "implemented", "完成", "发布", "创建", "实现", "搭建", "上线", "学会", "掌握", "成功",
    "达成",
];

/// Words marking an output section as project work.
pub const PROJECT_KEYWORDS: &[&str] = &[
    "project", "product", "case", "demo", "mvp", "implement", "develop", "build", "项目",
    "产品", "案例", "实现", "开发", "搭建",
];

/// Keyword lists used to tag journal content by theme.
pub const KEYWORD_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "AI", "LLM", "GPT", "Claude", "ChatGPT", "machine learning", "deep learning",
            "neural network", "programming", "code", "Python", "JavaScript", "Rust", "React",
            "database", "API", "cloud", "Docker", "Kubernetes", "architecture", "人工智能",
            "大模型", "机器学习", "编程", "代码", "开发", "架构",
        ],
    ),
    (
        "tools",
        &[
            "Replit", "HeyGen", "Figma", "Notion", "Slack", "GitHub", "VSCode", "Jupyter",
            "YouTube", "LinkedIn", "Twitter", "automation", "productivity", "小红书", "微博",
            "数字人", "视频生成", "自动化", "效率工具",
        ],
    ),
    (
        "business",
        &[
            "startup", "funding", "valuation", "business model", "growth", "users", "SaaS",
            "B2B", "B2C", "platform", "ecosystem", "community", "open source", "创业", "融资",
            "商业模式", "增长", "用户", "生态", "开源",
        ],
    ),
    (
        "learning",
        &[
            "goal", "time management", "habit", "growth", "skill", "reflection", "interview",
            "career", "leadership", "communication", "team", "目标管理", "习惯", "成长", "技能",
            "反思", "面试", "职业发展",
        ],
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
/// Social platforms the insight report can tailor suggestions for.
pub enum Platform {
    /// Xiaohongshu (RED).
    Xiaohongshu,
    /// Sina Weibo.
    Weibo,
    /// `LinkedIn`.
    Linkedin,
    /// Twitter / X.
    Twitter,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Xiaohongshu => "xiaohongshu",
            Platform::Weibo => "weibo",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
        })
    }
}

impl Platform {
    #[must_use]
    /// Writing advice for posts on this platform.
    pub fn tips(self) -> &'static [&'static str] {
        match self {
            Platform::Xiaohongshu => &[
                "**Xiaohongshu style:**",
                "- Lead with a catchy title using numbers and emotion words",
                "- Use emoji generously for visual rhythm",
                "- Share personal, first-hand experience",
                "- Include a practical tutorial or tip",
            ],
            Platform::Weibo => &[
                "**Weibo style:**",
                "- Keep it short and get to the point",
                "- Tie in current trending topics",
                "- Use the relevant super-topic tags",
                "- Invite reposts and replies",
            ],
            Platform::Linkedin => &[
                "**LinkedIn style:**",
                "- Professional tone with a clear point of view",
                "- Share career lessons and learning notes",
                "- Write in English",
                "- Good fit for deeper technical write-ups",
            ],
            Platform::Twitter => &[
                "**Twitter style:**",
                "- Short and punchy",
                "- Use a thread for complex topics",
                "- Post while the topic is fresh",
                "- Add a few relevant hashtags",
            ],
        }
    }
}

/// Reusable post skeletons, as `(title, body)`.
pub const CONTENT_TEMPLATES: &[(&str, &str)] = &[
    (
        "📊 Learning summary",
        "📚 What I learned this week #learning\n\n\
         This week I focused on:\n\
         🔸 [tool or technique] - [one-line description]\n\
         🔸 [key concept] - [my take]\n\
         🔸 [hands-on project] - [result]\n\n\
         💡 Biggest takeaway:\n[the most valuable insight]\n\n\
         🎯 Next week:\n[focus for next week]",
    ),
    (
        "🔧 Tool review",
        "🛠️ Trying out [tool] #tools\n\n\
         ✨ Highlights:\n\
         • [feature 1] - [experience]\n\
         • [feature 2] - [impression]\n\
         • [feature 3] - [practical value]\n\n\
         👍 Rating: ⭐⭐⭐⭐⭐\n\
         💰 Pricing: [free/paid]\n\
         🎯 Best for: [use case]\n\n\
         In one line: [verdict]",
    ),
    (
        "💡 Thought piece",
        "🤔 Some thoughts on [topic]\n\n\
         While learning [subject] I noticed something interesting:\n\n\
         [core observation]\n\n\
         Which makes me think:\n\
         • [follow-up 1]\n\
         • [follow-up 2]\n\
         • [practical application]\n\n\
         What do you think? 👇",
    ),
];
