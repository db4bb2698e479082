use serde::{Deserialize, Serialize};

/// 精炼后的创业点子
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RefinedIdea {
    /// 点子名称
    pub name: String,
    /// 点子描述（2-3句话）
    pub description: String,
    /// 差异化切入点
    pub unique_angle: String,
}

/// 投资人记录
///
/// 规范序列化形态为 {"name", "intro", "Website-link", "Contact"?}；
/// 模型偶尔会用"link"/"contact"小写键名，反序列化时兼容。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InvestorRecord {
    /// 投资人或机构名称
    pub name: String,
    /// 一句话简介
    #[serde(default)]
    pub intro: String,
    /// 主页链接（LinkedIn/Crunchbase等）
    #[serde(rename = "Website-link", alias = "link", default)]
    pub website_link: String,
    /// 联系方式，模型通常给不出，缺省即可
    #[serde(
        rename = "Contact",
        alias = "contact",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub contact: Option<String>,
}

/// 面向单个投资人的冷启动邮件
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ColdEmail {
    /// 收件投资人名称
    pub investor_name: String,
    /// 邮件正文
    pub email: String,
}
