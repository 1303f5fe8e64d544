//! 展示用的格式化工具，金额只在这里舍入

use crate::app::catalog::model::Rating;

pub struct Formatter;

impl Formatter {
    /// 格式化金额，保留两位小数
    pub fn format_price(symbol: &str, amount: f64) -> String {
        format!("{}{:.2}", symbol, amount)
    }

    /// 格式化税率，例如 0.08 -> "8%"
    pub fn format_rate(rate: f64) -> String {
        let percent = rate * 100.0;
        if (percent - percent.round()).abs() < 1e-9 {
            format!("{}%", percent.round())
        } else {
            format!("{:.2}%", percent)
        }
    }

    /// 购物车角标文字
    pub fn format_item_count(count: u64) -> String {
        match count {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        }
    }

    /// 评分的星级显示（四舍五入到整星）
    pub fn format_stars(rating: &Rating) -> String {
        let filled = (rating.rate.round().clamp(0.0, 5.0)) as usize;
        format!(
            "{}{} ({})",
            "★".repeat(filled),
            "☆".repeat(5 - filled),
            rating.count
        )
    }
}
