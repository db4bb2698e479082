use serde::{Deserialize, Serialize};

/// 路演稿中的单页
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Slide {
    /// 页标题
    pub title: String,
    /// 页正文，允许为空（例如封面页）
    pub body: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// 路演稿，固定6页结构
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PitchDeck {
    /// 创业公司名称（同时是封面页标题）
    pub startup_name: String,
    /// 页列表
    pub slides: Vec<Slide>,
}

impl PitchDeck {
    /// 渲染为Markdown幻灯片文档，页与页之间以`---`分隔
    pub fn render_markdown(&self) -> String {
        let sections: Vec<String> = self
            .slides
            .iter()
            .map(|slide| {
                if slide.body.trim().is_empty() {
                    format!("# {}", slide.title)
                } else {
                    format!("# {}\n\n{}", slide.title, slide.body)
                }
            })
            .collect();

        let mut rendered = sections.join("\n\n---\n\n");
        rendered.push('\n');
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_separates_slides_with_rules() {
        let deck = PitchDeck {
            startup_name: "NestFinder".to_string(),
            slides: vec![
                Slide::new("NestFinder", ""),
                Slide::new("Problem Statement", "Renters waste weeks on listings."),
            ],
        };

        let markdown = deck.render_markdown();
        assert_eq!(
            markdown,
            "# NestFinder\n\n---\n\n# Problem Statement\n\nRenters waste weeks on listings.\n"
        );
    }

    #[test]
    fn test_render_markdown_skips_body_block_for_empty_slides() {
        let deck = PitchDeck {
            startup_name: "NestFinder".to_string(),
            slides: vec![Slide::new("Unique Angle", "   ")],
        };

        assert_eq!(deck.render_markdown(), "# Unique Angle\n");
    }
}
