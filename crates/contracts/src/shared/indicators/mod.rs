use serde::Serialize;

// ---------------------------------------------------------------------------
// Overview strip ("运营数据概览")
// ---------------------------------------------------------------------------

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Integer,
    Percent { decimals: u8 },
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
}

impl IndicatorStatus {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            IndicatorStatus::Good => "overview-item__value--good",
            IndicatorStatus::Bad => "overview-item__value--bad",
            IndicatorStatus::Neutral => "",
        }
    }
}

/// One static figure of the overview strip
#[derive(Debug, Clone, Serialize)]
pub struct OverviewIndicator {
    pub label: &'static str,
    pub value: f64,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
}

impl OverviewIndicator {
    pub fn formatted(&self) -> String {
        format_value(self.value, self.format)
    }
}

pub fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Integer => format!("{:.0}", value),
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", value, prec = decimals as usize)
        }
    }
}

/// Figures are fixed: there is no backend to compute them
pub fn overview_indicators() -> Vec<OverviewIndicator> {
    vec![
        OverviewIndicator {
            label: "待处理评论",
            value: 310.0,
            format: ValueFormat::Integer,
            status: IndicatorStatus::Bad,
        },
        OverviewIndicator {
            label: "今日同步订单",
            value: 1560.0,
            format: ValueFormat::Integer,
            status: IndicatorStatus::Neutral,
        },
        OverviewIndicator {
            label: "好评率",
            value: 98.5,
            format: ValueFormat::Percent { decimals: 1 },
            status: IndicatorStatus::Good,
        },
        OverviewIndicator {
            label: "异常订单",
            value: 0.0,
            format: ValueFormat::Integer,
            status: IndicatorStatus::Neutral,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1560.0, ValueFormat::Integer), "1560");
        assert_eq!(format_value(0.0, ValueFormat::Integer), "0");
        assert_eq!(
            format_value(98.5, ValueFormat::Percent { decimals: 1 }),
            "98.5%"
        );
    }

    #[test]
    fn test_overview_figures() {
        let figures: Vec<(&str, String)> = overview_indicators()
            .iter()
            .map(|i| (i.label, i.formatted()))
            .collect();
        assert_eq!(
            figures,
            vec![
                ("待处理评论", "310".to_string()),
                ("今日同步订单", "1560".to_string()),
                ("好评率", "98.5%".to_string()),
                ("异常订单", "0".to_string()),
            ]
        );
    }
}
