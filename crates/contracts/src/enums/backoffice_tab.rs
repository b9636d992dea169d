use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Разделы back-office, каждый со своими фильтрами, колонками и кнопками
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum BackofficeTab {
    #[default]
    ShopManagement,
    ReviewManagement,
    ReviewStatistics,
    ProductManagement,
    CustomerService,
    JdOrders,
    OrderSync,
}

impl BackofficeTab {
    /// Stable ASCII code, used in the URL query
    pub fn code(&self) -> &'static str {
        match self {
            BackofficeTab::ShopManagement => "shops",
            BackofficeTab::ReviewManagement => "reviews",
            BackofficeTab::ReviewStatistics => "review-stats",
            BackofficeTab::ProductManagement => "products",
            BackofficeTab::CustomerService => "customer-service",
            BackofficeTab::JdOrders => "jd-orders",
            BackofficeTab::OrderSync => "order-sync",
        }
    }

    /// Label shown on the tab selector
    pub fn display_name(&self) -> &'static str {
        match self {
            BackofficeTab::ShopManagement => "第三方店铺管理",
            BackofficeTab::ReviewManagement => "评论管理",
            BackofficeTab::ReviewStatistics => "评价统计",
            BackofficeTab::ProductManagement => "商品管理",
            BackofficeTab::CustomerService => "客服管理",
            BackofficeTab::JdOrders => "京东订单",
            BackofficeTab::OrderSync => "第三方订单同步管理",
        }
    }

    /// All tabs in selector order
    pub fn all() -> [BackofficeTab; 7] {
        [
            BackofficeTab::ShopManagement,
            BackofficeTab::ReviewManagement,
            BackofficeTab::ReviewStatistics,
            BackofficeTab::ProductManagement,
            BackofficeTab::CustomerService,
            BackofficeTab::JdOrders,
            BackofficeTab::OrderSync,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.code() == code)
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.display_name() == name)
    }
}

impl fmt::Display for BackofficeTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BackofficeTab {
    type Err = anyhow::Error;

    /// Accepts either the ASCII code or the display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_code(trimmed)
            .or_else(|| Self::from_display_name(trimmed))
            .ok_or_else(|| anyhow::anyhow!("unknown back-office tab: '{}'", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_roundtrip() {
        for tab in BackofficeTab::all() {
            assert_eq!(BackofficeTab::from_code(tab.code()), Some(tab));
            assert_eq!(BackofficeTab::from_display_name(tab.display_name()), Some(tab));
        }
    }

    #[test]
    fn test_from_str_accepts_code_and_label() {
        assert_eq!(
            "jd-orders".parse::<BackofficeTab>().unwrap(),
            BackofficeTab::JdOrders
        );
        assert_eq!(
            " 评价统计 ".parse::<BackofficeTab>().unwrap(),
            BackofficeTab::ReviewStatistics
        );
        assert!("warehouse".parse::<BackofficeTab>().is_err());
    }

    #[test]
    fn test_selector_order() {
        let names: Vec<&str> = BackofficeTab::all().iter().map(|t| t.display_name()).collect();
        assert_eq!(
            names,
            vec![
                "第三方店铺管理",
                "评论管理",
                "评价统计",
                "商品管理",
                "客服管理",
                "京东订单",
                "第三方订单同步管理"
            ]
        );
        assert_eq!(BackofficeTab::default(), BackofficeTab::ShopManagement);
    }
}
