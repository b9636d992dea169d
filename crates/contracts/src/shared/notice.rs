/// Title of the marquee bar
pub const SYSTEM_NOTICE_TITLE: &str = "系统公告";

/// Scrolling announcement text
pub const SYSTEM_NOTICE: &str = "📢 运营提醒：请各区域负责人核对“评价统计”中的中差评处理进度，确保“京东订单”及时核对支付金额。";
