//! Everything the dashboard page displays, computed from session and figures.
//!
//! The trend line on the sales card and the branch and product-type counters
//! are fixed presentation text with no data source behind them.

use gcdl_shared::{format_count, format_currency, DashboardStats, Session};

pub const ACTIVE_BRANCHES: u64 = 2;
pub const PRODUCT_TYPES: u64 = 6;
pub const SALES_TREND: &str = "+12.5% from last month";

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub icon_class: &'static str,
    /// CSS colour bound to `--stat-color`.
    pub accent: &'static str,
    pub footer: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleShortcut {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    module: &'static str,
}

impl ModuleShortcut {
    const fn new(
        icon: &'static str,
        title: &'static str,
        description: &'static str,
        module: &'static str,
    ) -> Self {
        Self {
            icon,
            title,
            description,
            module,
        }
    }

    /// Shown instead of navigating; none of the modules exist yet.
    pub fn notice(&self) -> String {
        format!("{} module coming soon!", self.module)
    }
}

pub const MODULE_SHORTCUTS: [ModuleShortcut; 6] = [
    ModuleShortcut::new(
        "🛒",
        "Procurement",
        "Record new purchases and manage suppliers",
        "Procurement",
    ),
    ModuleShortcut::new(
        "💰",
        "Sales",
        "Process transactions and generate receipts",
        "Sales",
    ),
    ModuleShortcut::new(
        "📦",
        "Stock",
        "Monitor inventory and track levels",
        "Stock",
    ),
    ModuleShortcut::new(
        "💳",
        "Credit Sales",
        "Manage credit and track payments",
        "Credit",
    ),
    ModuleShortcut::new(
        "📊",
        "Analytics",
        "View reports and business insights",
        "Analytics",
    ),
    ModuleShortcut::new(
        "📄",
        "Reports",
        "Generate PDF and Excel reports",
        "Reports",
    ),
];

#[derive(Debug, Clone, PartialEq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: String,
}

pub fn metric_cards(stats: &DashboardStats) -> [MetricCard; 4] {
    [
        MetricCard {
            title: "💰 Total Sales",
            value: format_currency(Some(stats.total_sales)),
            icon: "📈",
            icon_class: "icon-green",
            accent: "#10b981",
            footer: SALES_TREND.to_string(),
        },
        MetricCard {
            title: "🛒 Procurement",
            value: format_currency(Some(stats.total_procurement)),
            icon: "📦",
            icon_class: "icon-blue",
            accent: "#3b82f6",
            footer: format!("{} orders processed", format_count(stats.procurement_count)),
        },
        MetricCard {
            title: "💎 Net Profit",
            value: format_currency(Some(stats.profit)),
            icon: "💰",
            icon_class: "icon-purple",
            accent: "#8b5cf6",
            footer: "Excellent margin performance".to_string(),
        },
        MetricCard {
            title: "⚠️ Low Stock",
            value: format_count(stats.low_stock_count),
            icon: "📊",
            icon_class: "icon-red",
            accent: "#ef4444",
            footer: "Items need restocking".to_string(),
        },
    ]
}

pub fn quick_stats(stats: &DashboardStats) -> [QuickStat; 4] {
    [
        QuickStat {
            label: "Sales Transactions",
            value: format_count(stats.sales_count),
        },
        QuickStat {
            label: "Purchase Orders",
            value: format_count(stats.procurement_count),
        },
        QuickStat {
            label: "Active Branches",
            value: format_count(ACTIVE_BRANCHES),
        },
        QuickStat {
            label: "Product Types",
            value: format_count(PRODUCT_TYPES),
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViewModel {
    pub user_name: String,
    pub user_role: String,
    pub welcome: String,
    pub metrics: [MetricCard; 4],
    pub quick_stats: [QuickStat; 4],
}

impl DashboardViewModel {
    pub fn new(session: Option<&Session>, stats: &DashboardStats) -> Self {
        let user_name = session.map(|s| s.full_name.clone()).unwrap_or_default();
        let user_role = session.map(|s| s.role.clone()).unwrap_or_default();
        let welcome = format!(
            "Welcome back, {}! Here's what's happening with your business today.",
            user_name
        );
        Self {
            user_name,
            user_role,
            welcome,
            metrics: metric_cards(stats),
            quick_stats: quick_stats(stats),
        }
    }
}
