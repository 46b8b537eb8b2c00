//! Keyword grouping of rule sets, matching the tabs of the rules browser
//! that consumes `loon-rules.json`.

use crate::model::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Advertising,
    Reject,
    Google,
    Apple,
    Microsoft,
    China,
    Global,
    Other,
}

const REJECT_KEYWORDS: &[&str] = &[
    "hijacking",
    "privacy",
    "adguardsdnfilter",
    "easyprivacy",
    "blockhttpdns",
];

const GOOGLE_KEYWORDS: &[&str] = &["google", "youtube", "chromecast", "gemini", "bardai"];

const APPLE_KEYWORDS: &[&str] = &[
    "apple",
    "icloud",
    "appstore",
    "testflight",
    "siri",
    "fitnessplus",
    "findmy",
    "beats",
    "systemota",
];

const MICROSOFT_KEYWORDS: &[&str] = &["microsoft", "onedrive", "teams", "copilot", "microsoftedge"];

const CHINA_KEYWORDS: &[&str] = &[
    "china", "baidu", "alibaba", "tencent", "weibo", "bilibili", "zhihu", "qq", "wechat",
    "douyin", "xiaohongshu", "taobao", "tmall", "jd", "jingdong", "meituan", "dianping", "ctrip",
    "xiecheng", "12306", "icbc", "ccb", "abc", "boc", "cmb", "pingan", "unionpay", "alipay",
    "youku", "iqiyi", "iqiyiintl", "acfun", "douyu", "huya", "zhanqi", "netease",
    "neteasemusic", "kugou", "kuwo", "xiami", "qiyi", "cnki", "wanfang", "dingxiangyuan",
    "xueqiu", "eastmoney", "sina", "sohu", "ifeng", "people", "xinhua", "cctv", "cbn", "smg",
];

const GLOBAL_KEYWORDS: &[&str] = &[
    "global", "proxy", "netflix", "tiktok", "disney", "twitter", "telegram", "facebook",
    "instagram", "whatsapp", "spotify", "wikipedia", "discord", "mail", "paypal", "amazon",
    "ebay", "reddit", "linkedin", "pinterest", "tumblr", "snapchat", "vimeo", "dropbox", "mega",
    "slack", "zoom", "skype", "line", "kakaotalk", "twitch", "hulu", "hbo", "paramount",
    "peacock", "fubo", "sling", "dazn", "nbc", "cbs", "fox", "cnn", "bbc", "reuters",
    "bloomberg", "wsj", "ft", "economist",
];

fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Advertising,
        Category::Reject,
        Category::Google,
        Category::Apple,
        Category::Microsoft,
        Category::China,
        Category::Global,
        Category::Other,
    ];

    /// Classify a rule set by name. Rules are checked in declaration
    /// order and the first hit wins.
    pub fn of(name: &str) -> Category {
        let name = name.to_lowercase();

        if name.contains("advertising") || name == "zhihuads" || name == "direct" {
            Category::Advertising
        } else if contains_any(&name, REJECT_KEYWORDS) {
            Category::Reject
        } else if contains_any(&name, GOOGLE_KEYWORDS) || name == "gmail" {
            Category::Google
        } else if contains_any(&name, APPLE_KEYWORDS) || name == "imessage" {
            Category::Apple
        } else if contains_any(&name, MICROSOFT_KEYWORDS) || name == "github" || name == "bing" {
            Category::Microsoft
        } else if contains_any(&name, CHINA_KEYWORDS) {
            Category::China
        } else if contains_any(&name, GLOBAL_KEYWORDS) {
            Category::Global
        } else {
            Category::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Advertising => "advertising",
            Category::Reject => "reject",
            Category::Google => "google",
            Category::Apple => "apple",
            Category::Microsoft => "microsoft",
            Category::China => "china",
            Category::Global => "global",
            Category::Other => "other",
        }
    }
}

/// Per-category entry counts in [`Category::ALL`] order, skipping empty ones.
pub fn tally(entries: &[Entry]) -> Vec<(Category, usize)> {
    let mut counts = [0usize; Category::ALL.len()];
    for entry in entries {
        let category = Category::of(&entry.name);
        if let Some(index) = Category::ALL.iter().position(|c| *c == category) {
            counts[index] += 1;
        }
    }

    Category::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| (*category, count))
        .collect()
}
